//! Error types for containment and addressing failures.
//!
//! Every variant describes caller misuse (wrong kind, full container, bad
//! coordinates). Nothing here is transient, so nothing is retried. Removing
//! a missing element and undo/redo on an empty history are not errors at
//! all; those operations are silent no-ops.

use thiserror::Error;

use crate::components::ComponentKind;
use crate::containers::ContainerKind;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for container, board and action operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The component's variant is excluded by the container's allow-set.
    #[error("component of kind {kind} is not allowed in this container")]
    TypeNotAllowed {
        /// Kind of the rejected component.
        kind: ComponentKind,
    },

    /// The container's variant is excluded by the parent's allow-set.
    #[error("container of kind {kind} is not allowed here")]
    ContainerTypeNotAllowed {
        /// Kind of the rejected container.
        kind: ContainerKind,
    },

    /// Inserting would exceed a capacity bound.
    ///
    /// `kind` is set when the bound is a per-kind cap inside a
    /// `ContainerContainer`, and `None` for a container's global capacity.
    #[error("maximum capacity of {capacity} reached")]
    CapacityExceeded {
        /// The configured bound.
        capacity: usize,
        /// The container kind the cap applies to, for per-kind caps.
        kind: Option<ContainerKind>,
    },

    /// A non-card component was offered to a card-only container.
    #[error("only cards can be added here, got {kind}")]
    NotACard {
        /// Kind of the rejected component.
        kind: ComponentKind,
    },

    /// `draw`/`peek` asked for more cards than the deck holds.
    #[error("requested {requested} cards but only {available} available")]
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards in the deck.
        available: usize,
    },

    /// Board cell coordinates are outside the grid.
    #[error("cell ({x}, {y}) is out of bounds")]
    OutOfBounds {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },

    /// Row selection past the last row.
    #[error("row index {index} out of bounds (height {height})")]
    RowIndexOutOfBounds {
        /// Requested row.
        index: usize,
        /// Number of rows.
        height: usize,
    },

    /// Column selection past the last column.
    #[error("column index {index} out of bounds ({columns} columns)")]
    ColumnIndexOutOfBounds {
        /// Requested column.
        index: usize,
        /// Number of columns.
        columns: usize,
    },

    /// A stored container's kind tag does not match the wrapper it was
    /// loaded into.
    #[error("expected a {expected} container, got {found}")]
    KindMismatch {
        /// Kind the wrapper requires.
        expected: ContainerKind,
        /// Kind recorded on the container.
        found: ContainerKind,
    },
}

impl Error {
    /// Global capacity bound of a single container.
    #[must_use]
    pub fn capacity(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity, kind: None }
    }

    /// Per-kind cap inside a `ContainerContainer`.
    #[must_use]
    pub fn kind_capacity(kind: ContainerKind, capacity: usize) -> Self {
        Self::CapacityExceeded { capacity, kind: Some(kind) }
    }
}

/// A value a container refused, handed back together with the reason.
///
/// Components are not `Clone`, so an `add` that simply returned the error
/// would lose the component for good. The `try_*` variants return this
/// instead; `?` converts it to the bare [`Error`].
#[derive(Debug, PartialEq, Eq)]
pub struct Rejected<T> {
    /// Why the value was refused.
    pub error: Error,
    /// The refused value, untouched.
    pub value: T,
}

impl<T> Rejected<T> {
    /// Pair a value with the error that rejected it.
    #[must_use]
    pub fn new(error: Error, value: T) -> Self {
        Self { error, value }
    }

    /// Take the refused value back.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> From<Rejected<T>> for Error {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::TypeNotAllowed { kind: ComponentKind::Piece };
        assert_eq!(err.to_string(), "component of kind Piece is not allowed in this container");

        let err = Error::kind_capacity(ContainerKind::Cards, 5);
        assert_eq!(err.to_string(), "maximum capacity of 5 reached");

        let err = Error::InsufficientCards { requested: 3, available: 1 };
        assert_eq!(err.to_string(), "requested 3 cards but only 1 available");

        let err = Error::OutOfBounds { x: 3, y: 0 };
        assert_eq!(err.to_string(), "cell (3, 0) is out of bounds");
    }

    #[test]
    fn test_capacity_constructors() {
        assert_eq!(
            Error::capacity(2),
            Error::CapacityExceeded { capacity: 2, kind: None }
        );
        assert_ne!(Error::capacity(2), Error::kind_capacity(ContainerKind::Hand, 2));
    }

    #[test]
    fn test_rejected_converts_to_error() {
        fn place(value: u8) -> Result<()> {
            let placed: std::result::Result<(), Rejected<u8>> =
                Err(Rejected::new(Error::capacity(0), value));
            placed?;
            Ok(())
        }
        assert_eq!(place(7), Err(Error::capacity(0)));

        let rejected = Rejected::new(Error::capacity(1), "token");
        assert_eq!(rejected.into_value(), "token");
    }
}
