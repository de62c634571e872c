//! Model collections
//!
//! The id-keyed member collection backing the relationship table, and the
//! small insertion and lookup interface it exposes to loaders.

pub mod member;

pub use member::MemberCollection;

use crate::models::EntityModel;
use std::sync::Arc;

/// Id-keyed storage of entity models
pub trait ModelCollection<T: EntityModel>: Send + Sync + std::fmt::Debug {
    /// Insert a model in source order
    fn add(&mut self, model: T);

    /// Shared handle to the model resolving `id`
    fn get(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Whether `id` resolves to a model
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Insert models in the order given
    fn add_all(&mut self, models: Vec<T>) {
        for model in models {
            self.add(model);
        }
    }
}
