//! Per-instance element state
//!
//! The grid never looks inside these values; they are created by a profile,
//! mutated by its combine logic and carried verbatim through snapshots.

use crate::io::snapshot::GridSnapshot;
use serde::{Deserialize, Serialize};

/// Runtime payload attached to one element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuntimeData {
    /// No per-instance state
    #[default]
    Empty,

    /// Stackable quantity
    Stack {
        /// Number of items held by this element
        count: u32,
    },

    /// Wear tracking
    Durability {
        /// Remaining durability
        current: u32,
        /// Durability when new
        max: u32,
    },

    /// Element that holds an inventory of its own
    Container {
        /// Snapshot of the nested grid
        contents: GridSnapshot,
    },
}

impl RuntimeData {
    /// Stack size, if this payload is a stack
    pub const fn stack_count(&self) -> Option<u32> {
        match self {
            Self::Stack { count } => Some(*count),
            _ => None,
        }
    }

    /// Nested inventory, if this payload is a container
    pub const fn contents(&self) -> Option<&GridSnapshot> {
        match self {
            Self::Container { contents } => Some(contents),
            _ => None,
        }
    }

    /// Whether the payload carries no state
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
