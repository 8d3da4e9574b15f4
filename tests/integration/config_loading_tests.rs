//! Configuration file loading tests

#[cfg(test)]
mod tests {
    use crate::common::ConfigFileFactory;
    use nomadpay_admin::config::LogFormat;
    use nomadpay_admin::{AdminError, Config, RouteGuard};

    #[tokio::test]
    async fn test_example_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/admin.example.yaml");
        let config = Config::from_file_with_overrides(path, |_| None).await.unwrap();

        assert_eq!(config.rbac().login_roles, vec!["Admin", "Super Admin"]);
        assert_eq!(config.rbac().guard_roles, vec!["admin", "superadmin"]);
        assert_eq!(config.rbac().default_section, "dashboard");
    }

    #[tokio::test]
    async fn test_guard_from_loaded_config() {
        let file = ConfigFileFactory::write(
            "auth:\n  rbac:\n    guard_roles: [\"super_admin\"]\nlogging:\n  format: json\n",
        );
        let config = Config::from_file_with_overrides(file.path(), |_| None).await.unwrap();

        let guard = RouteGuard::from_config(config.rbac());
        assert_eq!(guard.required_roles(), &["super_admin".to_string()]);
        assert_eq!(config.logging().format, LogFormat::Json);
    }

    #[tokio::test]
    async fn test_invalid_role_in_file_is_config_error() {
        let file = ConfigFileFactory::write("auth:\n  rbac:\n    login_roles: [\"Owner\"]\n");
        let result = Config::from_file_with_overrides(file.path(), |_| None).await;
        assert!(matches!(result, Err(AdminError::Config(msg)) if msg.contains("Owner")));
    }

    #[tokio::test]
    async fn test_malformed_file_is_yaml_error() {
        let file = ConfigFileFactory::write("auth: [\n");
        let result = Config::from_file_with_overrides(file.path(), |_| None).await;
        assert!(matches!(result, Err(AdminError::Yaml(_))));
    }
}
