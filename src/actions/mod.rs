//! Reversible state changes.
//!
//! An action is a value that knows how to apply itself to a
//! [`Workspace`], take itself back and apply itself again. Actions refer to
//! cards and containers by id, so they can sit on the undo stack while the
//! table keeps changing around them.
//!
//! The [`ActionController`] runs actions and keeps the undo/redo stacks:
//!
//! ```
//! use rust_tabletop::actions::{Action, ActionController};
//! use rust_tabletop::components::Component;
//! use rust_tabletop::containers::{Container, Workspace};
//!
//! let mut table = Container::new();
//! let card = Component::card();
//! let id = card.id();
//! table.add(card).unwrap();
//!
//! let mut controller = ActionController::new();
//! controller.execute(Action::flip(id), &mut table).unwrap();
//! assert_eq!(table.find_component(id).unwrap().front_side_up(), Some(false));
//!
//! controller.undo(&mut table).unwrap();
//! assert_eq!(table.find_component(id).unwrap().front_side_up(), Some(true));
//!
//! controller.redo(&mut table).unwrap();
//! assert_eq!(table.find_component(id).unwrap().front_side_up(), Some(false));
//! ```

pub mod controller;
pub mod flip;
pub mod moves;

pub use controller::{ActionController, ActionRecord, HistoryEvent};
pub use flip::FlipCard;
pub use moves::{MoveCard, PlayCard};

use serde::{Deserialize, Serialize};

use crate::containers::Workspace;
use crate::core::{ComponentId, ContainerId, Result};

/// A state change that can be applied, reversed and reapplied.
///
/// After `execute` then `undo`, the workspace is back where it started;
/// `redo` after `undo` produces the same state as the original `execute`.
/// An implementation that fails must leave the workspace unchanged.
pub trait Reversible {
    /// Apply the change.
    fn execute<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()>;

    /// Reverse the last `execute` or `redo`.
    fn undo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()>;

    /// Reapply the change after an `undo`.
    fn redo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()>;
}

/// Kind of action, for the history journal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// [`MoveCard`]
    Move,
    /// [`FlipCard`]
    Flip,
    /// [`PlayCard`]
    Play,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Move => "MoveCard",
            Self::Flip => "FlipCard",
            Self::Play => "PlayCard",
        };
        f.write_str(name)
    }
}

/// Every action the controller can run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Move a card between containers.
    Move(MoveCard),
    /// Flip a card over.
    Flip(FlipCard),
    /// Play a card face up into a container.
    Play(PlayCard),
}

impl Action {
    /// Move `card` from `source` to `destination`.
    #[must_use]
    pub fn move_card(card: ComponentId, source: ContainerId, destination: ContainerId) -> Self {
        Self::Move(MoveCard::new(card, source, destination))
    }

    /// Flip `card`.
    #[must_use]
    pub fn flip(card: ComponentId) -> Self {
        Self::Flip(FlipCard::new(card))
    }

    /// Play `card` from `source` into `destination`.
    #[must_use]
    pub fn play(card: ComponentId, source: ContainerId, destination: ContainerId) -> Self {
        Self::Play(PlayCard::new(card, source, destination))
    }

    /// Which kind of action this is.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Move(_) => ActionKind::Move,
            Self::Flip(_) => ActionKind::Flip,
            Self::Play(_) => ActionKind::Play,
        }
    }

    /// The card this action operates on.
    #[must_use]
    pub fn card(&self) -> ComponentId {
        match self {
            Self::Move(action) => action.card(),
            Self::Flip(action) => action.card(),
            Self::Play(action) => action.card(),
        }
    }
}

impl Reversible for Action {
    fn execute<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        match self {
            Self::Move(action) => action.execute(workspace),
            Self::Flip(action) => action.execute(workspace),
            Self::Play(action) => action.execute(workspace),
        }
    }

    fn undo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        match self {
            Self::Move(action) => action.undo(workspace),
            Self::Flip(action) => action.undo(workspace),
            Self::Play(action) => action.undo(workspace),
        }
    }

    fn redo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        match self {
            Self::Move(action) => action.redo(workspace),
            Self::Flip(action) => action.redo(workspace),
            Self::Play(action) => action.redo(workspace),
        }
    }
}

impl From<MoveCard> for Action {
    fn from(action: MoveCard) -> Self {
        Self::Move(action)
    }
}

impl From<FlipCard> for Action {
    fn from(action: FlipCard) -> Self {
        Self::Flip(action)
    }
}

impl From<PlayCard> for Action {
    fn from(action: PlayCard) -> Self {
        Self::Play(action)
    }
}
