//! Configuration loading tests

#[cfg(test)]
mod tests {
    use item_service::config::{Config, LogFormat};
    use item_service::server::builder::load_config;
    use item_service::utils::error::ServiceError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
server:
  port: 9191
storage:
  database:
    enabled: false
processing:
  pool_size: 2
logging:
  format: json
"#,
        )
        .unwrap();

        let config = load_config(Some(file.path().to_path_buf())).await.unwrap();

        assert_eq!(config.server().port, 9191);
        assert!(!config.storage().database.enabled);
        assert_eq!(config.processing().pool_size, 2);
        assert_eq!(config.logging().format, LogFormat::Json);
    }

    #[tokio::test]
    async fn test_missing_explicit_file_is_an_error() {
        let result = load_config(Some("missing/service.yaml".into())).await;
        assert!(matches!(result, Err(ServiceError::Config(_))));
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"processing: [not, a, map]").unwrap();

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(ServiceError::Config(_))));
    }

    #[tokio::test]
    async fn test_invalid_timeout_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"processing:\n  item_timeout_secs: 0\n")
            .unwrap();

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(ServiceError::Config(_))));
    }

    #[test]
    fn test_example_config_parses() {
        let content = include_str!("../../config/service.yaml.example");
        let config: item_service::config::ServiceConfig = serde_yaml::from_str(content).unwrap();
        assert_eq!(config.processing.pool_size, 10);
    }
}
