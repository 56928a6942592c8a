//! Machine identity abstraction.

use crate::error::ClientResult;

/// Source of the caller environment's machine identity.
///
/// The client never caches what this returns: branch id and machine
/// ids are read live for every key derivation and every subset
/// creation, so a changing machine set shows up in the next derived
/// key rather than retroactively in an in-flight one.
pub trait IdentitySource: Send + Sync {
    /// The branch id scoping subset keys.
    fn branch_id(&self) -> ClientResult<String>;

    /// The machine identifiers covered by the subset, in a caller-chosen
    /// order. Ordering is significant for key derivation.
    fn machine_ids(&self) -> ClientResult<Vec<String>>;
}

/// A fixed identity, for tests and deployments with a static machine set.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    branch_id: String,
    machine_ids: Vec<String>,
}

impl StaticIdentity {
    /// Creates a fixed identity.
    pub fn new(branch_id: impl Into<String>, machine_ids: Vec<String>) -> Self {
        Self {
            branch_id: branch_id.into(),
            machine_ids,
        }
    }
}

impl IdentitySource for StaticIdentity {
    fn branch_id(&self) -> ClientResult<String> {
        Ok(self.branch_id.clone())
    }

    fn machine_ids(&self) -> ClientResult<Vec<String>> {
        Ok(self.machine_ids.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_identity_returns_fixed_values() {
        let identity = StaticIdentity::new("prod", vec!["m1".into(), "m2".into()]);
        assert_eq!(identity.branch_id().unwrap(), "prod");
        assert_eq!(identity.machine_ids().unwrap(), vec!["m1", "m2"]);
    }
}
