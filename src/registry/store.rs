//! The in-memory shape store.
//!
//! # Responsibilities
//! - Own the single ordered collection of shapes
//! - First-match lookups by caller-supplied identifier
//! - In-place mutation, serialized behind an async lock
//!
//! # Design Decisions
//! - Duplicate identifiers are permitted; every id-keyed operation acts on
//!   the first occurrence in insertion order, which callers may rely on
//! - The collection stays a Vec with linear scans so insertion order is
//!   observable through list()
//! - Reads take the read lock, mutations the write lock; each operation
//!   holds the lock only for its own scan-and-mutate

use tokio::sync::RwLock;

use crate::registry::types::{RegistryError, Shape, UpsertOutcome};

/// Owned store for the shape collection, shared with handlers via `Arc`.
pub struct ShapeRegistry {
    /// The ordered collection. Lock scope is a single operation.
    shapes: RwLock<Vec<Shape>>,
}

impl ShapeRegistry {
    /// Create a registry preloaded with the given records.
    pub fn new(seed: Vec<Shape>) -> Self {
        Self {
            shapes: RwLock::new(seed),
        }
    }

    /// Full collection in insertion order.
    pub async fn list(&self) -> Vec<Shape> {
        self.shapes.read().await.clone()
    }

    /// First record matching `id`.
    pub async fn get(&self, id: i64) -> Result<Shape, RegistryError> {
        let shapes = self.shapes.read().await;
        shapes
            .iter()
            .find(|shape| shape.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    /// Append a record unconditionally. No uniqueness check, no generated id.
    pub async fn create(&self, shape: Shape) -> Shape {
        let mut shapes = self.shapes.write().await;
        shapes.push(shape.clone());
        tracing::debug!(shape_count = shapes.len(), "Shape appended");
        shape
    }

    /// Replace `item_name` and `no_of_sides` of the first record matching
    /// `id`. The stored `id` field is left untouched; on a miss the
    /// collection is unchanged.
    pub async fn update(&self, id: i64, shape: Shape) -> Result<Shape, RegistryError> {
        let mut shapes = self.shapes.write().await;
        match shapes.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => {
                stored.item_name = shape.item_name;
                stored.no_of_sides = shape.no_of_sides;
                let updated = stored.clone();
                tracing::debug!(shape_count = shapes.len(), "Shape updated");
                Ok(updated)
            }
            None => Err(RegistryError::NotFound(id)),
        }
    }

    /// Update semantics on a match; on a miss the body is appended verbatim,
    /// including its own `id` field.
    pub async fn upsert(&self, id: i64, shape: Shape) -> UpsertOutcome {
        let mut shapes = self.shapes.write().await;
        match shapes.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => {
                tracing::debug!(id, "Shape already present, updating");
                stored.item_name = shape.item_name;
                stored.no_of_sides = shape.no_of_sides;
                UpsertOutcome::Updated(stored.clone())
            }
            None => {
                tracing::debug!(id, "Shape absent, inserting");
                shapes.push(shape.clone());
                UpsertOutcome::Inserted(shape)
            }
        }
    }

    /// Remove the first record matching `id`.
    pub async fn delete(&self, id: i64) -> Result<(), RegistryError> {
        let mut shapes = self.shapes.write().await;
        match shapes.iter().position(|shape| shape.id == id) {
            Some(index) => {
                shapes.remove(index);
                tracing::debug!(shape_count = shapes.len(), "Shape removed");
                Ok(())
            }
            None => Err(RegistryError::NotFound(id)),
        }
    }
}
