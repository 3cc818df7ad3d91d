use conference_planner::application::{Intent, PlannerSession, StartSessionUseCase};
use conference_planner::domain::catalog::{AUDITORIUM_HALL, SeedItem};
use conference_planner::domain::entities::LineQuantity;
use conference_planner::domain::{CatalogSeed, PeopleCount, Section, ViewMode};
use conference_planner::infrastructure::ConfigCatalogSource;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn builtin_session(people: i64) -> PlannerSession {
    PlannerSession::new(&CatalogSeed::builtin(), PeopleCount::clamped(people))
}

fn venue_index(session: &PlannerSession, name: &str) -> usize {
    session
        .venue()
        .items()
        .iter()
        .position(|item| item.name() == name)
        .unwrap()
}

#[test]
fn fresh_session_has_empty_cart() {
    let session = builtin_session(1);
    let summary = session.summary();

    assert!(summary.is_empty());
    assert!(approx(summary.grand_total, 0.0));
    for section in Section::ALL {
        assert!(approx(summary.totals.get(section), 0.0));
    }
}

#[test]
fn auditorium_caps_at_three() {
    let mut session = builtin_session(1);
    let index = venue_index(&session, AUDITORIUM_HALL);

    for _ in 0..5 {
        session.apply(Intent::IncrementVenue(index));
    }

    let aggregator = session.aggregator();
    assert_eq!(session.venue().get(index).unwrap().quantity(), 3);
    assert!(approx(aggregator.section_total(Section::Venue), 16500.0));
}

#[test]
fn planning_a_full_event() {
    let mut session = builtin_session(1);

    session.apply(Intent::IncrementVenue(0));
    session.apply(Intent::IncrementVenue(0));
    session.apply(Intent::IncrementAddon(0));
    session.apply(Intent::IncrementAddon(2));
    session.apply(Intent::IncrementAddon(2));
    session.apply(Intent::SetPeople(20));
    session.apply(Intent::ToggleMeal(2));
    session.apply(Intent::ToggleMeal(3));

    let summary = session.summary();
    assert!(approx(summary.totals.venue, 7000.0));
    assert!(approx(summary.totals.addons, 290.0));
    assert!(approx(summary.totals.meals, 20.0 * (65.0 + 70.0)));
    assert!(approx(summary.grand_total, 7000.0 + 290.0 + 2700.0));

    let names: Vec<&str> = summary.lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Conference Room (Capacity:15)",
            "Projectors",
            "Microphones",
            "Lunch",
            "Dinner"
        ]
    );

    let lunch = summary.lines_in(Section::Meals).next().unwrap();
    assert_eq!(lunch.quantity, LineQuantity::People(20));
    assert_eq!(lunch.quantity.label(), "For 20 people");
}

#[test]
fn toggling_meal_twice_restores_selection_and_people() {
    let mut session = builtin_session(6);

    session.apply(Intent::ToggleMeal(0));
    session.apply(Intent::ToggleMeal(0));

    let breakfast = session.meals().get(0).unwrap();
    assert!(!breakfast.is_selected());
    assert_eq!(breakfast.people_snapshot(), Some(0));
    assert_eq!(session.people().get(), 6);
    assert!(session.summary().is_empty());
}

#[test]
fn people_count_never_drops_below_one() {
    let mut session = builtin_session(3);
    session.apply(Intent::SetPeople(-4));
    assert_eq!(session.people(), PeopleCount::MIN);
}

#[test]
fn summary_toggle_and_navigation() {
    let mut session = builtin_session(1);

    session.apply(Intent::ToggleSummary);
    assert_eq!(session.mode(), ViewMode::Summarizing);

    assert!(session.apply(Intent::Navigate(Section::Venue)));
    assert_eq!(session.mode(), ViewMode::Selecting);
    assert!(!session.apply(Intent::Navigate(Section::Venue)));
}

#[test]
fn out_of_range_intents_change_nothing() {
    let mut session = builtin_session(1);
    let before = session.clone();

    assert!(!session.apply(Intent::IncrementVenue(99)));
    assert!(!session.apply(Intent::DecrementAddon(99)));
    assert!(!session.apply(Intent::ToggleMeal(99)));
    assert_eq!(session, before);
}

#[test]
fn configured_catalog_replaces_builtin() {
    let seed = CatalogSeed {
        venue: vec![SeedItem::new("Rooftop", 1200.0, "")],
        addons: vec![SeedItem::new("Lanterns", 15.0, "")],
        meals: vec![SeedItem::new("Barbecue", 30.0, "")],
    };
    let source = ConfigCatalogSource::new(Some(seed));

    let mut session = StartSessionUseCase::new(&source)
        .execute(PeopleCount::clamped(10))
        .unwrap();
    session.apply(Intent::IncrementVenue(0));
    session.apply(Intent::ToggleMeal(0));

    assert_eq!(session.section_len(Section::Venue), 1);
    assert!(approx(session.aggregator().grand_total(), 1200.0 + 300.0));
}

#[test]
fn rejected_catalog_falls_back_to_builtin() {
    let seed = CatalogSeed {
        venue: vec![SeedItem::new("Rooftop", -1.0, "")],
        ..CatalogSeed::builtin()
    };
    let source = ConfigCatalogSource::new(Some(seed));
    let use_case = StartSessionUseCase::new(&source);

    assert!(use_case.execute(PeopleCount::MIN).is_err());
    let session = use_case.execute_or_builtin(PeopleCount::MIN);
    assert_eq!(session.section_len(Section::Venue), 5);
}

#[test]
fn configured_caps_never_lift_auditorium_limit_or_cap_addons() {
    let mut seed = CatalogSeed::builtin();
    let auditorium = seed
        .venue
        .iter()
        .position(|item| item.name == AUDITORIUM_HALL)
        .unwrap();
    seed.venue[auditorium].max_quantity = Some(50);
    seed.addons[0].max_quantity = Some(1);
    let source = ConfigCatalogSource::new(Some(seed));

    let mut session = StartSessionUseCase::new(&source)
        .execute(PeopleCount::MIN)
        .unwrap();
    for _ in 0..5 {
        session.apply(Intent::IncrementVenue(auditorium));
        session.apply(Intent::IncrementAddon(0));
    }

    assert_eq!(session.venue().get(auditorium).unwrap().quantity(), 3);
    assert_eq!(session.addons().get(0).unwrap().quantity(), 5);
}
