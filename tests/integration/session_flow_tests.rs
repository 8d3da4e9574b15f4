//! Login, guard and navigation flow

#[cfg(test)]
mod tests {
    use crate::common::AdminUserFactory;
    use nomadpay_admin::config::AuthConfig;
    use nomadpay_admin::{
        AdminError, AdminSession, DenialReason, GuardDecision, Navigation, RouteGuard, Section,
    };

    #[test]
    fn test_super_admin_flow() {
        let config = AuthConfig::default();
        let session =
            AdminSession::establish(AdminUserFactory::super_admin(), "token", None, &config)
                .unwrap();

        let guard = RouteGuard::from_config(&config.rbac);
        for section in Section::ALL {
            assert!(guard.evaluate_section(Some(&session), section).is_allowed());
        }

        let nav = Navigation::for_checker(&session.checker());
        assert_eq!(nav.resolve_active("settings"), Section::Settings);
        session.logout();
    }

    #[test]
    fn test_admin_flow() {
        let config = AuthConfig::default();
        let session =
            AdminSession::establish(AdminUserFactory::admin(), "token", Some("refresh".into()), &config)
                .unwrap();

        let checker = session.checker();
        assert!(checker.can_perform_named_action("user-activate"));
        assert!(!checker.can_perform_named_action("transaction-delete"));
        assert!(RouteGuard::default().evaluate(Some(&session)).is_allowed());
    }

    #[test]
    fn test_viewer_refused_at_login() {
        let result = AdminSession::establish(
            AdminUserFactory::viewer(),
            "token",
            None,
            &AuthConfig::default(),
        );
        match result {
            Err(err) => assert!(err.is_access_denied()),
            Ok(_) => panic!("viewer should not sign in"),
        }
    }

    #[test]
    fn test_viewer_flow_when_allowed() {
        let mut config = AuthConfig::default();
        config.rbac.login_roles.push("Viewer".into());
        config.rbac.guard_roles.push("viewer".into());

        let session =
            AdminSession::establish(AdminUserFactory::viewer(), "token", None, &config).unwrap();
        let guard = RouteGuard::from_config(&config.rbac);

        assert!(guard.evaluate_section(Some(&session), Section::Users).is_allowed());
        assert_eq!(
            guard.evaluate_section(Some(&session), Section::AuditLogs),
            GuardDecision::AccessDenied {
                section: Section::AuditLogs
            }
        );

        let nav = Navigation::for_checker(&session.checker());
        assert_eq!(nav.resolve_active("audit-logs"), Section::Dashboard);
    }

    #[test]
    fn test_unknown_role_refused_with_authorization_error() {
        let result = AdminSession::establish(
            AdminUserFactory::with_role("Hacker"),
            "token",
            None,
            &AuthConfig::default(),
        );
        assert!(matches!(result, Err(AdminError::Authorization(_))));
    }

    #[test]
    fn test_guard_decision_serializes_with_tag() {
        let decision = GuardDecision::RedirectToLogin {
            reason: DenialReason::InvalidToken,
        };
        let json = serde_json::to_value(decision).unwrap();
        assert_eq!(json["decision"], "redirect_to_login");
        assert_eq!(json["reason"], "invalid_token");

        let json = serde_json::to_value(GuardDecision::AccessDenied {
            section: Section::AuditLogs,
        })
        .unwrap();
        assert_eq!(json["section"], "audit-logs");
    }
}
