use keepsake::presentation::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_variants_returned() {
    assert_eq!(
        "dev".parse::<Environment>().unwrap(),
        Environment::Development
    );
    assert_eq!(
        "LOCAL".parse::<Environment>().unwrap(),
        Environment::Development
    );
    assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
    assert_eq!(
        "prod".parse::<Environment>().unwrap(),
        Environment::Production
    );
    assert_eq!(
        "production".parse::<Environment>().unwrap(),
        Environment::Production
    );
}

#[test]
fn given_unknown_name_when_parsing_environment_then_error() {
    let result = "staging".parse::<Environment>();

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_displayed_then_lowercase_name() {
    assert_eq!(Environment::Production.to_string(), "production");
    assert_eq!(Environment::Development.to_string(), "development");
}
