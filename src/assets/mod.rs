//! Asset collaborators: face images, the card back, and cue sounds.
//!
//! The engine never loads or plays anything. `AssetCatalog` only maps
//! identities and cues to opaque references a host resolves itself.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Identity, IdentityRegistry};
use crate::events::Cue;

/// Lookup table from game concepts to host asset references.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssetCatalog {
    faces: FxHashMap<Identity, String>,
    back: String,
    sounds: FxHashMap<Cue, String>,
}

impl AssetCatalog {
    /// Empty catalog with the given card back.
    pub fn new(back: impl Into<String>) -> Self {
        Self {
            back: back.into(),
            ..Self::default()
        }
    }

    /// Catalog using each registered face plus the standard back and sounds.
    #[must_use]
    pub fn standard(registry: &IdentityRegistry) -> Self {
        let mut catalog = Self::new("images/back.jpg")
            .with_sound(Cue::RoundStart, "/sounds/start.mp3")
            .with_sound(Cue::Flip, "/sounds/flip.mp3")
            .with_sound(Cue::Match, "/sounds/matches.mp3")
            .with_sound(Cue::Win, "/sounds/win.mp3")
            .with_sound(Cue::GameOver, "/sounds/game_over.mp3");

        for def in registry.iter() {
            catalog.faces.insert(def.id, def.face.clone());
        }
        catalog
    }

    /// Set the face image for an identity.
    #[must_use]
    pub fn with_face(mut self, identity: Identity, face: impl Into<String>) -> Self {
        self.faces.insert(identity, face.into());
        self
    }

    /// Set the sound for a cue.
    #[must_use]
    pub fn with_sound(mut self, cue: Cue, sound: impl Into<String>) -> Self {
        self.sounds.insert(cue, sound.into());
        self
    }

    #[must_use]
    pub fn face(&self, identity: Identity) -> Option<&str> {
        self.faces.get(&identity).map(String::as_str)
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    #[must_use]
    pub fn sound(&self, cue: Cue) -> Option<&str> {
        self.sounds.get(&cue).map(String::as_str)
    }

    /// Image to draw for a card: its face when face up, the back otherwise.
    ///
    /// Falls back to the back when a face is missing from the catalog.
    #[must_use]
    pub fn image_for(&self, card: &Card) -> &str {
        if card.is_face_up() {
            self.face(card.identity()).unwrap_or(self.back.as_str())
        } else {
            &self.back
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = AssetCatalog::standard(&IdentityRegistry::standard());

        assert_eq!(catalog.back(), "images/back.jpg");
        assert_eq!(catalog.face(Identity::new(0)), Some("images/img1.jpg"));
        assert_eq!(catalog.face(Identity::new(9)), Some("images/img10.jpg"));
        assert_eq!(catalog.face(Identity::new(10)), None);

        for cue in Cue::ALL {
            assert!(catalog.sound(cue).is_some(), "missing sound for {cue:?}");
        }
        assert_eq!(catalog.sound(Cue::Match), Some("/sounds/matches.mp3"));
    }

    #[test]
    fn test_image_for_follows_face_up_state() {
        let catalog = AssetCatalog::new("back.png").with_face(Identity::new(1), "owl.png");

        let mut card = Card::new(Identity::new(1));
        assert_eq!(catalog.image_for(&card), "back.png");

        card.revealed = true;
        assert_eq!(catalog.image_for(&card), "owl.png");

        card.revealed = false;
        card.matched = true;
        assert_eq!(catalog.image_for(&card), "owl.png");
    }

    #[test]
    fn test_missing_face_shows_back() {
        let catalog = AssetCatalog::new("back.png");
        let mut card = Card::new(Identity::new(4));
        card.revealed = true;
        assert_eq!(catalog.image_for(&card), "back.png");
    }
}
