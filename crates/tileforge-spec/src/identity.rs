//! Identity collaborator contract.
//!
//! The engine only needs an opaque "is a user present" signal plus a display
//! name for attribution in UIs; it never depends on how identity is
//! established.

/// Opaque caller identity signal.
pub trait Identity {
    /// Whether a user is present.
    fn is_present(&self) -> bool;

    /// Display name for the present user, if any.
    fn display_name(&self) -> Option<String>;

    /// Stable key used when saving records. Defaults to the display name.
    fn record_key(&self) -> Option<String> {
        self.display_name()
    }
}

/// Fixed local identity, used by the CLI and tests.
#[derive(Debug, Clone)]
pub struct LocalIdentity {
    name: Option<String>,
}

impl LocalIdentity {
    /// An identity for the given user name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// No user present.
    pub fn anonymous() -> Self {
        Self { name: None }
    }
}

impl Identity for LocalIdentity {
    fn is_present(&self) -> bool {
        self.name.is_some()
    }

    fn display_name(&self) -> Option<String> {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_identity_presence() {
        let user = LocalIdentity::named("alice");
        assert!(user.is_present());
        assert_eq!(user.record_key().as_deref(), Some("alice"));

        let nobody = LocalIdentity::anonymous();
        assert!(!nobody.is_present());
        assert_eq!(nobody.display_name(), None);
    }
}
