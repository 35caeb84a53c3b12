//! Shape record and registry error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The one managed record type, serialized with its wire field names.
///
/// Identifiers are caller-supplied and NOT validated unique; `no_of_sides`
/// is unchecked for plausibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Display name (e.g., "Triangle").
    pub item_name: String,

    /// Number of sides.
    pub no_of_sides: i64,

    /// Caller-supplied identifier.
    pub id: i64,
}

/// Error type for registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No record matched the requested identifier.
    #[error("no shape with id {0}")]
    NotFound(i64),
}

/// Result of an upsert: whether an existing record was rewritten or the
/// request body was appended as a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// First record matching the id was updated in place.
    Updated(Shape),
    /// No match; the body was appended verbatim.
    Inserted(Shape),
}

impl UpsertOutcome {
    /// The resulting record, whichever way the upsert went.
    pub fn into_shape(self) -> Shape {
        match self {
            UpsertOutcome::Updated(shape) | UpsertOutcome::Inserted(shape) => shape,
        }
    }
}
