use review_seo::config::{load_app_config, ResolvedConfig, DEFAULT_ENDPOINT};
use review_seo::utils::validation::Validate;
use review_seo::AppError;
use tempfile::TempDir;

#[test]
fn test_config_file_endpoint_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("review-seo.toml");
    std::fs::write(
        &path,
        r#"
[webhook]
endpoint = "https://hooks.example.com/webhook/review-ingest"

[output]
directory = "./analysis"
"#,
    )
    .unwrap();

    let app_config = load_app_config(Some(&path)).unwrap();
    let resolved = ResolvedConfig::resolve_with(None, None, None, &app_config);

    assert_eq!(
        resolved.endpoint,
        "https://hooks.example.com/webhook/review-ingest"
    );
    assert_eq!(resolved.output_directory.as_deref(), Some("./analysis"));
    tokio_test::assert_ok!(resolved.validate());
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_app_config(Some(&temp_dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, AppError::IoError(_)));
}

#[test]
fn test_invalid_endpoint_in_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    std::fs::write(&path, "[webhook]\nendpoint = \"ftp://example.com\"\n").unwrap();

    let err = load_app_config(Some(&path)).unwrap_err();
    assert!(matches!(err, AppError::InvalidConfigValueError { .. }));
}

#[test]
fn test_env_override_via_substitution_and_precedence() {
    std::env::set_var("REVIEW_SEO_IT_HOST", "env-host.example.com");
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("env.toml");
    std::fs::write(
        &path,
        "[webhook]\nendpoint = \"https://${REVIEW_SEO_IT_HOST}/hook\"\n",
    )
    .unwrap();

    let app_config = load_app_config(Some(&path)).unwrap();
    let from_file = ResolvedConfig::resolve_with(None, None, None, &app_config);
    assert_eq!(from_file.endpoint, "https://env-host.example.com/hook");

    let overridden = ResolvedConfig::resolve_with(
        None,
        Some("http://override.example.com/hook"),
        None,
        &app_config,
    );
    assert_eq!(overridden.endpoint, "http://override.example.com/hook");

    let defaulted =
        ResolvedConfig::resolve_with(None, None, None, &review_seo::AppConfig::default());
    assert_eq!(defaulted.endpoint, DEFAULT_ENDPOINT);
}
