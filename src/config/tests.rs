//! Tests for configuration loading and validation

#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::utils::error::AdminError;
    use std::collections::HashMap;
    use std::io::Write;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rbac().login_roles, vec!["Admin", "Super Admin"]);
        assert_eq!(config.rbac().default_section, "dashboard");
        assert_eq!(config.auth().session_ttl_secs, 3600);
        assert_eq!(config.logging().format, LogFormat::Pretty);
    }

    #[test]
    fn test_parse_partial_yaml_fills_defaults() {
        let panel = PanelConfig::from_yaml_str(
            r#"
    auth:
      session_ttl_secs: 900
    logging:
      format: json
    "#,
        )
        .unwrap();

        assert_eq!(panel.auth.session_ttl_secs, 900);
        assert_eq!(panel.auth.rbac.guard_roles, vec!["Admin", "Super Admin"]);
        assert_eq!(panel.logging.format, LogFormat::Json);
        assert_eq!(panel.logging.level, "info");
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let result = PanelConfig::from_yaml_str("auth: [not, a, map");
        assert!(matches!(result, Err(AdminError::Yaml(_))));
    }

    #[test]
    fn test_loose_role_names_accepted() {
        let config = Config {
            panel: PanelConfig::from_yaml_str(
                r#"
    auth:
      rbac:
        guard_roles: ["admin", "superadmin"]
    "#,
            )
            .unwrap(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let mut config = Config::default();
        config.panel.auth.rbac.login_roles.push("Root".to_string());

        let err = config.validate().unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
        assert!(err.to_string().contains("Unknown role 'Root'"));
    }

    #[test]
    fn test_empty_guard_roles_rejected() {
        let mut config = Config::default();
        config.panel.auth.rbac.guard_roles.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_default_section_rejected() {
        let mut config = Config::default();
        config.panel.auth.rbac.default_section = "wallets".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_ttl_bounds() {
        let mut config = Config::default();

        config.panel.auth.session_ttl_secs = 60;
        assert!(config.validate().is_err());

        config.panel.auth.session_ttl_secs = MAX_SESSION_TTL_SECS + 1;
        assert!(config.validate().is_err());

        config.panel.auth.session_ttl_secs = MIN_SESSION_TTL_SECS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_applied() {
        let mut panel = PanelConfig::default();
        panel
            .apply_overrides(overrides(&[
                ("ADMIN_LOG_LEVEL", "debug"),
                ("ADMIN_LOG_FORMAT", "JSON"),
                ("ADMIN_SESSION_TTL_SECS", "7200"),
            ]))
            .unwrap();

        assert_eq!(panel.logging.level, "debug");
        assert_eq!(panel.logging.format, LogFormat::Json);
        assert_eq!(panel.auth.session_ttl_secs, 7200);
    }

    #[test]
    fn test_bad_override_is_error() {
        let mut panel = PanelConfig::default();
        let result = panel.apply_overrides(overrides(&[("ADMIN_SESSION_TTL_SECS", "soon")]));
        assert!(matches!(result, Err(AdminError::Config(_))));

        let result = panel.apply_overrides(overrides(&[("ADMIN_LOG_FORMAT", "xml")]));
        assert!(matches!(result, Err(AdminError::Config(_))));
    }

    #[tokio::test]
    async fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "auth:\n  rbac:\n    login_roles: [\"Super Admin\"]\n    default_section: users\n"
        )
        .unwrap();

        let config = Config::from_file_with_overrides(file.path(), |_| None)
            .await
            .unwrap();
        assert_eq!(config.rbac().login_roles, vec!["Super Admin"]);
        assert_eq!(config.rbac().default_section, "users");
    }

    #[tokio::test]
    async fn test_from_missing_file() {
        let result = Config::from_file_with_overrides("/nonexistent/admin.yaml", |_| None).await;
        assert!(matches!(result, Err(AdminError::Io(_))));
    }

    #[tokio::test]
    async fn test_from_file_applies_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  level: info\n").unwrap();

        let config = Config::from_file_with_overrides(
            file.path(),
            overrides(&[("ADMIN_LOG_LEVEL", "warn"), ("ADMIN_SESSION_TTL_SECS", "1800")]),
        )
        .await
        .unwrap();
        assert_eq!(config.logging().level, "warn");
        assert_eq!(config.auth().session_ttl_secs, 1800);
    }

    #[tokio::test]
    async fn test_bad_override_fails_file_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "auth:\n  session_ttl_secs: 900\n").unwrap();

        let result =
            Config::from_file_with_overrides(file.path(), overrides(&[("ADMIN_LOG_FORMAT", "xml")]))
                .await;
        assert!(matches!(result, Err(AdminError::Config(_))));
    }
}
