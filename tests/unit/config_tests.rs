// Configuration module unit tests

use thumbor_url::{ConfigError, ThumborConfig};

#[test]
fn test_can_deserialize_full_yaml_config() {
    let yaml = r#"
server: "http://thumbor.example.com"
secret: "my-secret-key"
filetypes: ["jpg", "png"]
"#;
    let config = ThumborConfig::from_yaml_with_env(yaml).expect("Failed to parse YAML");
    assert_eq!(config.server, "http://thumbor.example.com");
    assert_eq!(config.secret, "my-secret-key");
    assert_eq!(config.filetypes, vec!["jpg", "png"]);
}

#[test]
fn test_config_deserialization_fails_with_empty_file() {
    let result = ThumborConfig::from_yaml_with_env("");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_deserialization_fails_with_invalid_yaml() {
    let yaml = r#"
server: [unclosed
"#;
    let result = ThumborConfig::from_yaml_with_env(yaml);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_can_substitute_environment_variable_in_secret() {
    std::env::set_var("TEST_THUMBOR_SECRET", "env-secret");

    let yaml = r#"
server: "http://thumbor.example.com"
secret: "${TEST_THUMBOR_SECRET}"
"#;
    let config = ThumborConfig::from_yaml_with_env(yaml).unwrap();
    assert_eq!(config.secret, "env-secret");
}

#[test]
fn test_can_substitute_environment_variable_in_server() {
    std::env::set_var("TEST_THUMBOR_SERVER", "https://img.example.org");

    let yaml = r#"
server: "${TEST_THUMBOR_SERVER}"
"#;
    let config = ThumborConfig::from_yaml_with_env(yaml).unwrap();
    assert_eq!(config.server, "https://img.example.org");
}

#[test]
fn test_rejects_missing_environment_variable() {
    std::env::remove_var("TEST_THUMBOR_UNSET_VARIABLE");

    let yaml = r#"
server: "http://thumbor.example.com"
secret: "${TEST_THUMBOR_UNSET_VARIABLE}"
"#;
    let result = ThumborConfig::from_yaml_with_env(yaml);
    match result {
        Err(ConfigError::MissingEnvVar(name)) => {
            assert_eq!(name, "TEST_THUMBOR_UNSET_VARIABLE")
        }
        other => panic!("expected MissingEnvVar, got {:?}", other),
    }
}

#[test]
fn test_can_load_config_from_yaml_file_path() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let yaml = r#"
server: "http://thumbor.example.com/"
secret: ""
"#;
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(yaml.as_bytes())
        .expect("Failed to write temp file");

    let config = ThumborConfig::from_file(file.path()).expect("Failed to load config");
    let url = config
        .url("http://images.example.com/llamas.jpg")
        .fit_in(320, 240)
        .render();
    assert_eq!(
        url,
        "http://thumbor.example.com/unsafe/fit-in/320x240/http://images.example.com/llamas.jpg"
    );
}

#[test]
fn test_from_file_reports_missing_file() {
    let result = ThumborConfig::from_file("/nonexistent/thumbor.yaml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_configured_filetypes_drive_pass_through() {
    let yaml = r#"
server: "http://thumbor.example.com"
filetypes: ["svg"]
"#;
    let config = ThumborConfig::from_yaml_with_env(yaml).unwrap();

    let svg = config.url("drawing.svg").resize(100, 0).render();
    assert_eq!(svg, "http://thumbor.example.com/unsafe/100x0/drawing.svg");

    let jpg = config.url("photo.jpg").resize(100, 0).render();
    assert_eq!(jpg, "photo.jpg");
}

#[test]
fn test_rejects_whitespace_in_server() {
    let config = ThumborConfig::new("http://thumbor example.com", "");
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}
