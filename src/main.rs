use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use conference_planner::application::StartSessionUseCase;
use conference_planner::domain::PeopleCount;
use conference_planner::infrastructure::{AppConfig, CliArgs, ConfigCatalogSource, ConfigStorage};
use conference_planner::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: CliArgs) -> Result<AppConfig> {
    let mut config = ConfigStorage::new()?.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app() -> Result<App> {
    let config = load_config(CliArgs::parse())?;

    init_logging(&config)?;

    info!(version = conference_planner::VERSION, "Starting conference planner");

    let people = PeopleCount::clamped(i64::from(config.people));
    if people.get() != config.people {
        warn!(configured = config.people, "Head count raised to the minimum");
    }

    let seed_source = ConfigCatalogSource::new(config.catalog.clone());
    let session = StartSessionUseCase::new(&seed_source).execute_or_builtin(people);

    Ok(App::new(session, &config))
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal);

    ratatui::restore();

    result
}
