//! # rust-tabletop
//!
//! Building blocks for the physical state of a tabletop game: cards,
//! pieces, the containers that hold them, and reversible actions that move
//! them around.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No hardcoded tableaus or card sets. Games build
//!    their table out of generic containers, by hand or from a
//!    `LayoutConfig`.
//!
//! 2. **Rules Live in Containers**: Allowed kinds, capacities and card-only
//!    rules are checked on every insertion, so a table can't get into a
//!    state its containers forbid. Mutable access goes through handles
//!    (`ContainerMut`, `ChildMut`, `ComponentMut`) that can't replace what
//!    they point at.
//!
//! 3. **Ids, Not References**: Actions hold component and container ids
//!    and resolve them against a `Workspace` when they run.
//!
//! ## Modules
//!
//! - `core`: Ids, errors, RNG, layout configuration
//! - `components`: Components, cards and the kind hierarchy
//! - `containers`: Containers, decks, hands, nested containers, boards
//! - `actions`: Reversible actions and the undo/redo controller

pub mod core;
pub mod components;
pub mod containers;
pub mod actions;

// Re-export commonly used types
pub use crate::core::{
    ComponentId, ContainerId,
    Error, Rejected, Result,
    GameRng, GameRngState, Shuffler,
    LayoutConfig, LeafConfig, NestedConfig, BoardConfig,
};

pub use crate::components::{Component, ComponentKind, ComponentMut, Variant};

pub use crate::containers::{
    AnyContainer, ContainerKind, Workspace,
    Container, ContainerMut, CardContainer, Deck, DeckOptions, Hand,
    TokenContainer, LoggingContainer,
    ContainerContainer, ChildMut, Board, Topology,
};

pub use crate::actions::{
    Action, ActionKind, Reversible,
    ActionController, ActionRecord, HistoryEvent,
    MoveCard, FlipCard, PlayCard,
};
