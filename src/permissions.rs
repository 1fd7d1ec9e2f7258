//! Role-based permission resolution.
//!
//! The `permissions` module defines the capability table consulted by
//! every other surface before exposing a mutating action.  The table
//! maps module name → action name → set of role names; membership in
//! the set is the only admission rule.  Lookups are fail-closed: an
//! unknown module, action or role resolves to "denied" rather than an
//! error.  The one exception is the distinguished [`ADMIN_ROLE`],
//! which is permitted everything regardless of table contents and
//! whose membership is not editable.
//!
//! Updates are immutable: [`PermissionsTable::toggle_role`] returns a
//! new table and leaves the original untouched, so a caller can hold
//! the old and new states side by side.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// The role that is implicitly granted every action.  The permission
/// editing UI disables unchecking it; the resolver enforces the same
/// rule by short-circuiting before any table lookup.
pub const ADMIN_ROLE: &str = "Admin";

/// Capability table: module name → action name → granted roles.
///
/// Serialises as plain nested JSON objects with role arrays, e.g.
/// `{"inventory": {"delete": ["Manager"]}}`, so a seed table can be
/// kept in a checked-in JSON file and edited by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionsTable {
    modules: HashMap<String, HashMap<String, HashSet<String>>>,
}

impl PermissionsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers "can `role` perform `action` on `module`".
    ///
    /// [`ADMIN_ROLE`] is always permitted.  For every other role the
    /// answer is set membership, with absent module or action keys
    /// treated as the empty set (deny-by-default).
    pub fn can_perform(&self, module: &str, action: &str, role: &str) -> bool {
        if role == ADMIN_ROLE {
            return true;
        }
        self.modules
            .get(module)
            .and_then(|actions| actions.get(action))
            .map(|roles| roles.contains(role))
            .unwrap_or(false)
    }

    /// Returns a new table with `role` added to the grant set for
    /// `module`/`action` if absent, removed if present.
    ///
    /// Toggling [`ADMIN_ROLE`] is a no-op: Admin membership is not
    /// user-editable.  Missing module/action keys are created on
    /// grant; an action whose grant set becomes empty keeps its (now
    /// empty) entry, which still resolves to deny.
    pub fn toggle_role(&self, module: &str, action: &str, role: &str) -> Self {
        if role == ADMIN_ROLE {
            return self.clone();
        }
        let mut next = self.clone();
        let roles = next
            .modules
            .entry(module.to_string())
            .or_default()
            .entry(action.to_string())
            .or_default();
        if !roles.remove(role) {
            roles.insert(role.to_string());
        }
        next
    }

    /// The action → roles mapping for one module, if the module has
    /// any entries.
    pub fn module(&self, module: &str) -> Option<&HashMap<String, HashSet<String>>> {
        self.modules.get(module)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Load a permissions table from a JSON file.
///
/// A missing file yields an empty table (every non-Admin lookup then
/// denies), so a fresh deployment starts locked down rather than
/// failing to boot.  A file that exists but does not parse is an
/// error: a half-readable capability table is worse than none.
pub fn load_permissions_from_file(path: &Path) -> Result<PermissionsTable> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "permissions file not found, starting with an empty table");
        return Ok(PermissionsTable::new());
    }
    let data = std::fs::read_to_string(path)?;
    let table = serde_json::from_str(&data)?;
    Ok(table)
}
