//! Identity traits shared by the in-memory collections

use uuid::Uuid;

use crate::error::CrmError;
use crate::result::CrmResult;

/// Identifier type for every entity held in memory.
pub type Id = String;

/// Fresh opaque identifier.
pub fn new_id() -> Id {
    Uuid::new_v4().to_string()
}

/// Trait for entities that carry an id
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Base trait for domain entities
pub trait Entity: Identifiable + Clone + Send + Sync {
    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}

/// Position of an entity in a slice by id.
pub fn position_of<T: Identifiable>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Like [`position_of`], but a miss is a not-found error naming the entity type.
pub fn index_of<T: Entity>(items: &[T], id: &str) -> CrmResult<usize> {
    position_of(items, id).ok_or_else(|| CrmError::not_found(T::TYPE_NAME, id))
}
