//! Session start-up use case.

use tracing::{info, warn};

use crate::application::services::PlannerSession;
use crate::domain::catalog::CatalogSeed;
use crate::domain::entities::PeopleCount;
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogSeedPort;

/// Builds the planning session from a seed source.
pub struct StartSessionUseCase<'a> {
    seed_port: &'a dyn CatalogSeedPort,
}

impl<'a> StartSessionUseCase<'a> {
    /// Creates the use case over a seed source.
    #[must_use]
    pub const fn new(seed_port: &'a dyn CatalogSeedPort) -> Self {
        Self { seed_port }
    }

    /// Loads the seed and seeds a session.
    ///
    /// # Errors
    /// Returns `CatalogError` if the seed is rejected.
    pub fn execute(&self, people: PeopleCount) -> Result<PlannerSession, CatalogError> {
        let seed = self.seed_port.load_seed()?;
        info!(
            venue = seed.venue.len(),
            addons = seed.addons.len(),
            meals = seed.meals.len(),
            people = people.get(),
            "Catalog seeded"
        );
        Ok(PlannerSession::new(&seed, people))
    }

    /// Like [`execute`](Self::execute), but falls back to the built-in
    /// catalog when the configured seed is rejected.
    #[must_use]
    pub fn execute_or_builtin(&self, people: PeopleCount) -> PlannerSession {
        match self.execute(people) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Catalog seed rejected, using built-in catalog");
                PlannerSession::new(&CatalogSeed::builtin(), people)
            }
        }
    }
}
