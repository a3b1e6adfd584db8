//! Card system: identities, dealt cards, and the identity registry.
//!
//! ## Key Types
//!
//! - `Identity`: What a card shows face up; equal identities match
//! - `IdentityDef`: Display data for an identity (name, face image)
//! - `Card`: A dealt card with `revealed`/`matched` flags
//! - `IdentityRegistry`: The identity set a host deals from

pub mod card;
pub mod identity;
pub mod registry;

pub use card::Card;
pub use identity::{Identity, IdentityDef};
pub use registry::IdentityRegistry;
