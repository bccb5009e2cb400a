//! Identity for components and containers.
//!
//! Every component and every container gets an opaque id when it is
//! created. Ids never change and are never reused, so membership checks
//! (`remove`, `contains`, `find_index`) compare ids rather than contents:
//! two cards that both read "A of Hearts" are still different cards.
//!
//! ```
//! use rust_tabletop::core::ComponentId;
//!
//! let a = ComponentId::generate();
//! let b = ComponentId::generate();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a component (card, piece, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(Uuid);

impl ComponentId {
    /// Allocate a fresh id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Component({})", self.0)
    }
}

/// Unique identifier for a container (leaf, nested or board).
///
/// Actions address containers by id so they never hold borrows into
/// the game state between `execute` and `undo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(Uuid);

impl ContainerId {
    /// Allocate a fresh id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Container({})", self.0)
    }
}
