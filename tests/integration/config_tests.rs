//! Configuration loading tests

#[cfg(test)]
mod tests {
    use lead_dispatch::Config;
    use lead_dispatch::server::builder::{ServerBuilder, load_config};
    use lead_dispatch::storage::LeadStore;
    use lead_dispatch::utils::error::DispatchError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_server_builds_on_memory_storage() {
        let file = write_config(
            r#"
server:
  host: "127.0.0.1"
  port: 5055
storage:
  database:
    enabled: false
"#,
        );

        let config = load_config(file.path().to_str()).await.unwrap();
        let server = ServerBuilder::new().with_config(config).build().await.unwrap();

        assert_eq!(server.config().address(), "127.0.0.1:5055");
        assert_eq!(server.state().store.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_server_builds_on_sqlite_memory() {
        let file = write_config(
            r#"
storage:
  database:
    url: "sqlite::memory:"
    max_connections: 1
"#,
        );

        let config = load_config(file.path().to_str()).await.unwrap();
        let server = ServerBuilder::new().with_config(config).build().await.unwrap();

        assert_eq!(server.state().store.backend_name(), "sqlite");
        assert!(server.state().store.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_values_are_rejected() {
        let cases = [
            "server:\n  port: 0\n",
            "server:\n  workers: 0\n",
            "upload:\n  max_file_size: 0\n",
            "storage:\n  database:\n    url: \"mysql://localhost/leads\"\n",
        ];

        for case in cases {
            let file = write_config(case);
            let result = Config::from_file(file.path()).await;
            assert!(
                matches!(result, Err(DispatchError::Config(_))),
                "accepted: {case}"
            );
        }
    }

    #[tokio::test]
    async fn test_disabled_database_skips_url_validation() {
        let file = write_config("storage:\n  database:\n    url: \"\"\n    enabled: false\n");
        let config = Config::from_file(file.path()).await.unwrap();
        assert!(!config.storage().database.enabled);
    }
}
