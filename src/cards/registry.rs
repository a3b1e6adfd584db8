//! Identity registry for definition lookup.
//!
//! The `IdentityRegistry` stores the identity set a host deals from,
//! in registration order, with fast lookup by `Identity`.

use rustc_hash::FxHashMap;

use super::identity::{Identity, IdentityDef};
use crate::core::STANDARD_PAIRS;

/// Registry of identity definitions.
///
/// ## Example
///
/// ```
/// use rust_pairs::cards::{Identity, IdentityDef, IdentityRegistry};
///
/// let mut registry = IdentityRegistry::new();
/// registry.register(IdentityDef::new(Identity::new(1), "Fox"));
///
/// let found = registry.get(Identity::new(1)).unwrap();
/// assert_eq!(found.name, "Fox");
/// ```
#[derive(Clone, Debug, Default)]
pub struct IdentityRegistry {
    defs: FxHashMap<Identity, IdentityDef>,
    order: Vec<Identity>,
    next_id: u16,
}

impl IdentityRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the standard ten identities (`img1.jpg` to `img10.jpg`).
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for n in 1..=STANDARD_PAIRS {
            registry.register_auto(format!("img{n}"));
        }
        registry
    }

    /// Register an identity definition.
    ///
    /// Panics if the identity is already registered.
    pub fn register(&mut self, def: IdentityDef) {
        if self.defs.contains_key(&def.id) {
            panic!("Identity {:?} already registered", def.id);
        }
        self.next_id = self.next_id.max(def.id.raw().saturating_add(1));
        self.order.push(def.id);
        self.defs.insert(def.id, def);
    }

    /// Register an identity with an auto-assigned ID and default face.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(&mut self, name: impl Into<String>) -> Identity {
        let id = Identity::new(self.next_id);
        self.register(IdentityDef::new(id, name));
        id
    }

    /// Get a definition by identity.
    #[must_use]
    pub fn get(&self, id: Identity) -> Option<&IdentityDef> {
        self.defs.get(&id)
    }

    /// Check if an identity is registered.
    #[must_use]
    pub fn contains(&self, id: Identity) -> bool {
        self.defs.contains_key(&id)
    }

    /// Number of registered identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Identities in registration order.
    #[must_use]
    pub fn identities(&self) -> Vec<Identity> {
        self.order.clone()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &IdentityDef> {
        self.order.iter().filter_map(|id| self.defs.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = IdentityRegistry::new();
        registry.register(IdentityDef::new(Identity::new(1), "Fox"));

        let found = registry.get(Identity::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Fox");

        assert!(registry.get(Identity::new(99)).is_none());
    }

    #[test]
    fn test_register_auto() {
        let mut registry = IdentityRegistry::new();

        let id1 = registry.register_auto("A");
        let id2 = registry.register_auto("B");

        assert_eq!(id1, Identity::new(0));
        assert_eq!(id2, Identity::new(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_auto_skips_explicit_ids() {
        let mut registry = IdentityRegistry::new();
        registry.register(IdentityDef::new(Identity::new(4), "Explicit"));

        let auto = registry.register_auto("Auto");
        assert_eq!(auto, Identity::new(5));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = IdentityRegistry::new();
        registry.register(IdentityDef::new(Identity::new(1), "A"));
        registry.register(IdentityDef::new(Identity::new(1), "B"));
    }

    #[test]
    fn test_standard_registry() {
        let registry = IdentityRegistry::standard();
        assert_eq!(registry.len(), 10);

        let faces: Vec<_> = registry.iter().map(|d| d.face.as_str()).collect();
        assert_eq!(faces[0], "images/img1.jpg");
        assert_eq!(faces[9], "images/img10.jpg");
    }

    #[test]
    fn test_identities_preserve_order() {
        let mut registry = IdentityRegistry::new();
        registry.register(IdentityDef::new(Identity::new(7), "Seven"));
        registry.register(IdentityDef::new(Identity::new(2), "Two"));

        assert_eq!(registry.identities(), vec![Identity::new(7), Identity::new(2)]);
        assert!(registry.contains(Identity::new(2)));
        assert!(!registry.is_empty());
    }
}
