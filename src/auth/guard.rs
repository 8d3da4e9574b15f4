//! Route and page guards

use super::rbac::{Section, role_matches};
use super::session::AdminSession;
use super::types::{DenialReason, GuardDecision};
use crate::config::RbacConfig;
use crate::utils::logging::SecurityLogger;

/// Gate in front of protected pages
///
/// Role names are compared case-insensitively, ignoring spaces, `_` and `-`,
/// so a route declared for `superadmin` admits a `"Super Admin"` session.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    required_roles: Vec<String>,
}

impl RouteGuard {
    pub fn new<I, S>(required_roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_roles: required_roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Guard admitting the configured `guard_roles`
    pub fn from_config(config: &RbacConfig) -> Self {
        Self::new(config.guard_roles.iter().cloned())
    }

    pub fn required_roles(&self) -> &[String] {
        &self.required_roles
    }

    /// Decide whether a session may enter the protected area
    pub fn evaluate(&self, session: Option<&AdminSession>) -> GuardDecision {
        let Some(session) = session else {
            return GuardDecision::RedirectToLogin {
                reason: DenialReason::NotAuthenticated,
            };
        };

        let reason = if !self.admits_role(session.role()) {
            Some(DenialReason::RoleNotAllowed)
        } else if !session.is_token_valid() {
            Some(DenialReason::InvalidToken)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                SecurityLogger::log_authz_event(
                    session.role(),
                    "admin-panel",
                    false,
                    Some(&reason.to_string()),
                );
                GuardDecision::RedirectToLogin { reason }
            }
            None => {
                SecurityLogger::log_authz_event(session.role(), "admin-panel", true, None);
                GuardDecision::Allow
            }
        }
    }

    /// Route check followed by the section's permission
    pub fn evaluate_section(
        &self,
        session: Option<&AdminSession>,
        section: Section,
    ) -> GuardDecision {
        let decision = self.evaluate(session);
        let Some(session) = session.filter(|_| decision.is_allowed()) else {
            return decision;
        };

        if session.checker().can_access(section) {
            SecurityLogger::log_authz_event(session.role(), section.as_str(), true, None);
            GuardDecision::Allow
        } else {
            SecurityLogger::log_authz_event(
                session.role(),
                section.as_str(),
                false,
                Some("missing section permission"),
            );
            GuardDecision::AccessDenied { section }
        }
    }

    fn admits_role(&self, role: &str) -> bool {
        self.required_roles
            .iter()
            .any(|required| role_matches(required, role))
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::from_config(&RbacConfig::default())
    }
}
