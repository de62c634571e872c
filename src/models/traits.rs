//! Trait definitions for domain models

use std::hash::Hash;

/// A trait that all domain models must implement.
///
/// The `EntityModel` trait provides identifier access so that collections
/// can index models without knowing their concrete type.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Copy + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> Self::Id;
}
