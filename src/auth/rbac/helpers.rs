//! Helpers for comparing role names coming from different sources

use super::types::Role;

/// Case-insensitive key for a role name, ignoring whitespace, `_` and `-`
///
/// `"Super Admin"`, `"super_admin"` and `"superadmin"` share one key.
pub(crate) fn role_key(role: &str) -> String {
    role.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether two role names refer to the same role under [`role_key`]
pub(crate) fn role_matches(left: &str, right: &str) -> bool {
    role_key(left) == role_key(right)
}

/// Resolve a loosely written role name (config files, route declarations)
pub(crate) fn resolve_role_loose(role: &str) -> Option<Role> {
    let key = role_key(role);
    Role::ALL
        .into_iter()
        .find(|candidate| role_key(candidate.as_str()) == key)
}
