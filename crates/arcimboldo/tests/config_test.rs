//! Tests for extractor configuration loading.

use arcimboldo::{ArcimboldoErrorKind, ExtractorConfig};

#[test]
fn full_config_parses() {
    let toml = r#"
        model = "gemini-2.0-flash"
        endpoint = "http://localhost:8089"
        temperature = 0.2
        max_output_tokens = 4096
        system_instruction = "Answer with JSON only."
    "#;

    let config: ExtractorConfig = toml::from_str(toml).expect("valid config");
    assert_eq!(config.model(), "gemini-2.0-flash");
    assert_eq!(config.endpoint().as_deref(), Some("http://localhost:8089"));
    assert_eq!(*config.max_output_tokens(), Some(4096));
}

#[test]
fn only_the_model_is_required() {
    let config: ExtractorConfig =
        toml::from_str(r#"model = "gemini-2.0-flash""#).expect("valid config");

    assert!(config.endpoint().is_none());
    assert!(config.temperature().is_none());
    assert!(config.system_instruction().is_none());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = ExtractorConfig::from_file("/definitely/not/here.toml")
        .expect_err("file does not exist");
    assert!(matches!(err.kind(), ArcimboldoErrorKind::Config(_)));
}

#[test]
fn config_file_round_trips() {
    let path = std::env::temp_dir().join("arcimboldo_config_round_trip.toml");
    std::fs::write(&path, "model = \"gemini-2.5-pro\"\ntemperature = 0.5\n")
        .expect("temp file is writable");

    let config = ExtractorConfig::from_file(&path).expect("file parses");
    assert_eq!(config.model(), "gemini-2.5-pro");

    std::fs::remove_file(&path).ok();
}

#[test]
fn malformed_toml_is_a_config_error() {
    let path = std::env::temp_dir().join("arcimboldo_config_malformed.toml");
    std::fs::write(&path, "model = [not toml").expect("temp file is writable");

    let err = ExtractorConfig::from_file(&path).expect_err("file does not parse");
    assert!(matches!(err.kind(), ArcimboldoErrorKind::Config(_)));

    std::fs::remove_file(&path).ok();
}
