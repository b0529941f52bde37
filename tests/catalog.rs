// Scenarios that cross module boundaries: one logger shared by several
// consumers, commands driven the way the demos drive them.

use design_patterns::builder::UserBuilder;
use design_patterns::command::{AddCommand, AddThenMultiplyCommand, Calculator, MultiplyCommand};
use design_patterns::facade::{ApiFacade, FixtureTransport};
use design_patterns::null_object::{greeting, UserDirectory};
use design_patterns::single_responsibility::CalorieTracker;
use design_patterns::singleton::{first_use, second_use};
use design_patterns::{CatalogConfig, FancyLogger, PatternError};

#[test]
fn calculator_scenario_from_zero() {
    let mut calculator = Calculator::new();
    calculator.execute_command(AddCommand::new(10.0).unwrap());
    calculator.execute_command(MultiplyCommand::new(2.0).unwrap());
    assert_eq!(calculator.value(), 20.0);

    assert_eq!(calculator.undo(), Ok(10.0));
    assert_eq!(calculator.undo(), Ok(0.0));
    assert_eq!(calculator.undo(), Err(PatternError::EmptyHistory));

    calculator.execute_command(AddThenMultiplyCommand::new(10.0, 2.0).unwrap());
    assert_eq!(calculator.value(), 20.0);
    assert_eq!(calculator.undo(), Ok(0.0));
}

#[test]
fn one_logger_injected_into_every_consumer() {
    let config = CatalogConfig::default();
    let logger = FancyLogger::with_prefix(&config.logger_prefix);

    first_use(&logger);
    {
        let mut tracker = CalorieTracker::new(config.max_calories, &logger);
        tracker.track_calories(1500);
        tracker.track_calories(700);
    }
    second_use(&logger);

    assert_eq!(
        logger.entries(),
        vec!["First File", "Max calories exceeded", "Second File"]
    );
    assert_eq!(logger.count_line(), "3 Logs");
}

#[test]
fn builder_leaves_unset_address_absent() {
    let user = UserBuilder::new("Bob").age(37).phone("1234567890").build().unwrap();
    assert!(user.address.is_none());
}

#[test]
fn null_object_and_config_access_list() {
    let config = CatalogConfig::from_toml_str("access_list = [\"John\"]").unwrap();
    let directory = UserDirectory::new([(1, "Bob"), (2, "John")], &config.access_list);

    assert_eq!(greeting(directory.get_user(1))[1], "You are not allowed here");
    assert_eq!(greeting(directory.get_user(2))[1], "You have access");
    assert_eq!(greeting(directory.get_user(42))[0], "Hello Guest");
}

#[test]
fn facade_against_configured_base() {
    let config = CatalogConfig::from_toml_str("api_base_url = \"https://api.example.test/v1\"").unwrap();
    let transport = FixtureTransport::sample(&config.api_base_url).unwrap();
    let api = ApiFacade::new(config.api_base_url.as_str(), &transport).unwrap();

    let posts = api.get_user_posts(1).unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(
        transport.requests(),
        vec!["https://api.example.test/v1/posts?userId=1"]
    );
}
