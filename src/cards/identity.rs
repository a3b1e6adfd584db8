//! Card identities - the symbol a card shows when face up.
//!
//! Two cards with the same `Identity` form a matching pair.
//! Display data (name, face image) lives in `IdentityDef` so the
//! round itself only ever compares identities.

use serde::{Deserialize, Serialize};

/// Identifier for a card face.
///
/// The engine only compares identities for equality. Hosts assign
/// meaning via `IdentityDef`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity(pub u16);

impl Identity {
    /// Create a new identity.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Identity({})", self.0)
    }
}

/// Static display data for an identity.
///
/// ## Example
///
/// ```
/// use rust_pairs::cards::{Identity, IdentityDef};
///
/// let owl = IdentityDef::new(Identity::new(3), "Owl").with_face("images/owl.jpg");
/// assert_eq!(owl.face, "images/owl.jpg");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDef {
    pub id: Identity,

    /// Display name (for debugging/accessibility labels).
    pub name: String,

    /// Face image reference. Opaque to the engine.
    pub face: String,
}

impl IdentityDef {
    /// Create a definition whose face defaults to `images/img{id + 1}.jpg`.
    pub fn new(id: Identity, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            face: format!("images/img{}.jpg", u32::from(id.raw()) + 1),
        }
    }

    /// Set the face image reference.
    #[must_use]
    pub fn with_face(mut self, face: impl Into<String>) -> Self {
        self.face = face.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let id = Identity::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Identity(5)");
    }

    #[test]
    fn test_default_face_is_one_based() {
        let def = IdentityDef::new(Identity::new(0), "First");
        assert_eq!(def.face, "images/img1.jpg");

        let def = IdentityDef::new(Identity::new(9), "Tenth");
        assert_eq!(def.face, "images/img10.jpg");
    }
}
