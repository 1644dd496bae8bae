//! Collaborator seams consumed by the session controller.
//!
//! Each trait is a one-shot async pull of the current value; the controller
//! takes them by constructor as `Arc<dyn Trait>`.

pub mod cards;
pub mod categories;
pub mod feature_flags;
pub mod players;

pub use cards::CardRepository;
pub use categories::CategoryLookup;
pub use feature_flags::FeatureFlags;
pub use players::PlayerStore;
