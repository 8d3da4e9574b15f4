//! Role/permission contract tests
//!
//! The distribution of permissions across roles is relied on by the admin
//! panel's pages; these tests pin it down through the public API.

#[cfg(test)]
mod tests {
    use nomadpay_admin::{AdminAction, Permission, PermissionChecker, Role, Section};
    use std::thread;

    // ==================== Admin ====================

    #[test]
    fn test_admin_cannot_delete_or_export_audit_logs() {
        let admin = PermissionChecker::new(Role::Admin);
        assert!(admin.can_perform_action("audit_logs", "view"));
        assert!(!admin.can_perform_action("audit_logs", "export"));
        assert!(!admin.can_perform_action("audit_logs", "delete"));
    }

    #[test]
    fn test_admin_cannot_edit_settings() {
        let admin = PermissionChecker::new(Role::Admin);
        assert!(admin.can_access_section("settings"));
        assert!(!admin.has_permission("settings:edit"));
        assert!(!admin.has_permission("settings:security"));
        assert!(!admin.can(AdminAction::SettingsEdit));
    }

    #[test]
    fn test_admin_user_management_limits() {
        let admin = PermissionChecker::new(Role::Admin);
        for allowed in ["users:view", "users:edit", "users:activate", "users:deactivate"] {
            assert!(admin.has_permission(allowed), "{allowed}");
        }
        for denied in ["users:create", "users:delete", "users:change_role"] {
            assert!(!admin.has_permission(denied), "{denied}");
        }
    }

    #[test]
    fn test_admin_system_limits() {
        let admin = PermissionChecker::new(Role::Admin);
        assert!(admin.has_all_permissions(&["system:view", "system:health"]));
        assert!(!admin.has_any_permission(&[
            "system:restart",
            "system:cache",
            "system:maintenance",
            "system:backup",
            "system:logs",
        ]));
    }

    // ==================== Viewer ====================

    #[test]
    fn test_viewer_has_no_audit_system_or_settings_access() {
        let viewer = PermissionChecker::new(Role::Viewer);
        for section in ["audit-logs", "system", "settings"] {
            assert!(!viewer.can_access_section(section), "{section}");
        }
        assert!(!viewer.has_any_permission(&[
            "audit_logs:view",
            "system:view",
            "settings:view"
        ]));
    }

    #[test]
    fn test_viewer_is_read_only() {
        let viewer = PermissionChecker::new(Role::Viewer);
        for permission in viewer.permissions() {
            assert_eq!(permission.action(), "view");
        }
    }

    // ==================== Super Admin ====================

    #[test]
    fn test_super_admin_superset_of_other_roles() {
        let super_admin = PermissionChecker::new(Role::SuperAdmin);
        for role in [Role::Admin, Role::Viewer] {
            for permission in role.permissions() {
                assert!(super_admin.has(*permission));
            }
        }
        assert_eq!(super_admin.permissions().len(), Permission::ALL.len());
    }

    // ==================== Fail closed ====================

    #[test]
    fn test_unrecognized_roles_fail_closed() {
        for role in ["Hacker", "", "super admin", "ADMIN", "Super  Admin"] {
            let checker = PermissionChecker::from_role_str(role);
            assert!(checker.permissions().is_empty(), "{role:?}");
            assert!(!checker.has_permission("dashboard:view"));
            assert!(!checker.can_access(Section::Dashboard));
            assert!(!checker.can_perform_named_action("user-edit"));
        }
    }

    #[test]
    fn test_checkers_shared_across_threads() {
        let handles: Vec<_> = Role::ALL
            .into_iter()
            .map(|role| {
                thread::spawn(move || {
                    let checker = PermissionChecker::new(role);
                    Section::ALL
                        .into_iter()
                        .filter(|section| checker.can_access(*section))
                        .count()
                })
            })
            .collect();

        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![6, 6, 3]);
    }
}
