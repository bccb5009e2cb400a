//! Card movement actions.
//!
//! `MoveCard` relocates a card and leaves its face alone. `PlayCard`
//! relocates a card and turns it face up, the way a card is revealed when
//! it goes from a hand into play. Both remember where the card came from,
//! so undo puts it back at its original index rather than at the end.
//!
//! A card that isn't in the expected source makes the action a no-op;
//! the matching undo is then a no-op too.

use serde::{Deserialize, Serialize};

use super::Reversible;
use crate::containers::Workspace;
use crate::core::{ComponentId, ContainerId, Error, Result};

/// Move `card` out of `from` and into `to`.
///
/// The destination is validated before the card is detached. Returns the
/// index the card had in `from`, or `None` if nothing moved.
fn transfer<W: Workspace + ?Sized>(
    workspace: &mut W,
    card: ComponentId,
    from: ContainerId,
    to: ContainerId,
    at: Option<usize>,
) -> Result<Option<usize>> {
    if from == to {
        return Ok(None);
    }

    let Some(source) = workspace.find_container(from) else {
        tracing::debug!(%card, %from, "source container not found, skipping move");
        return Ok(None);
    };
    let Some(component) = source.get(card) else {
        tracing::debug!(%card, %from, "card not in source, skipping move");
        return Ok(None);
    };
    let Some(destination) = workspace.find_container(to) else {
        tracing::debug!(%card, %to, "destination container not found, skipping move");
        return Ok(None);
    };
    destination.check(component)?;

    let Some(mut source) = workspace.find_container_mut(from) else {
        return Ok(None);
    };
    let Some(index) = source.position(card) else {
        return Ok(None);
    };
    let Some(component) = source.remove(card) else {
        return Ok(None);
    };

    let placed = match workspace.find_container_mut(to) {
        Some(mut destination) => {
            let placed = match at {
                Some(at) => destination.try_insert(at, component),
                None => destination.try_add(component),
            };
            placed.map_err(|rejected| (Some(rejected.error), rejected.value))
        }
        None => Err((None, component)),
    };

    if let Err((err, component)) = placed {
        // Put the card back exactly where it was
        if let Some(source) = workspace.find_container_mut(from) {
            let source = source.into_inner();
            let index = index.min(source.len());
            source.components_mut().insert(index, component);
        }
        return match err {
            Some(err) => Err(err),
            None => Ok(None),
        };
    }

    tracing::trace!(%card, %from, %to, index, "card moved");
    Ok(Some(index))
}

/// Move a card between two containers.
///
/// ```
/// use rust_tabletop::actions::{ActionController, MoveCard};
/// use rust_tabletop::components::Component;
/// use rust_tabletop::containers::{CardContainer, ContainerContainer, Hand};
///
/// let mut hand = Hand::new();
/// let card = Component::card();
/// let card_id = card.id();
/// hand.add(card).unwrap();
/// let floor = CardContainer::new();
/// let (hand_id, floor_id) = (hand.id(), floor.id());
///
/// let mut table = ContainerContainer::new();
/// table.add(hand).unwrap();
/// table.add(floor).unwrap();
///
/// let mut controller = ActionController::new();
/// controller.execute(MoveCard::new(card_id, hand_id, floor_id), &mut table).unwrap();
/// controller.undo(&mut table).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCard {
    card: ComponentId,
    source: ContainerId,
    destination: ContainerId,
    source_index: Option<usize>,
}

impl MoveCard {
    /// Create a move of `card` from `source` to `destination`.
    #[must_use]
    pub fn new(card: ComponentId, source: ContainerId, destination: ContainerId) -> Self {
        Self {
            card,
            source,
            destination,
            source_index: None,
        }
    }

    /// The card being moved.
    #[must_use]
    pub fn card(&self) -> ComponentId {
        self.card
    }

    /// Where the card comes from.
    #[must_use]
    pub fn source(&self) -> ContainerId {
        self.source
    }

    /// Where the card goes.
    #[must_use]
    pub fn destination(&self) -> ContainerId {
        self.destination
    }

    /// The card's index in the source before the last forward application.
    ///
    /// `None` if the last forward application moved nothing.
    #[must_use]
    pub fn source_index(&self) -> Option<usize> {
        self.source_index
    }
}

impl Reversible for MoveCard {
    fn execute<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        self.source_index = transfer(workspace, self.card, self.source, self.destination, None)?;
        Ok(())
    }

    fn undo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        if let Some(index) = self.source_index {
            transfer(workspace, self.card, self.destination, self.source, Some(index))?;
        }
        Ok(())
    }

    fn redo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        self.execute(workspace)
    }
}

/// Play a card: move it to a destination and reveal it.
///
/// Undo returns the card to its source position with the face it had
/// before being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayCard {
    card: ComponentId,
    source: ContainerId,
    destination: ContainerId,
    source_index: Option<usize>,
    was_face_up: Option<bool>,
}

impl PlayCard {
    /// Create a play of `card` from `source` to `destination`.
    #[must_use]
    pub fn new(card: ComponentId, source: ContainerId, destination: ContainerId) -> Self {
        Self {
            card,
            source,
            destination,
            source_index: None,
            was_face_up: None,
        }
    }

    /// The card being played.
    #[must_use]
    pub fn card(&self) -> ComponentId {
        self.card
    }

    /// Where the card comes from.
    #[must_use]
    pub fn source(&self) -> ContainerId {
        self.source
    }

    /// Where the card goes.
    #[must_use]
    pub fn destination(&self) -> ContainerId {
        self.destination
    }
}

impl Reversible for PlayCard {
    fn execute<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        self.source_index = None;
        self.was_face_up = None;

        let Some(component) = workspace
            .find_container(self.source)
            .and_then(|source| source.get(self.card))
        else {
            tracing::debug!(card = %self.card, "card not in source, skipping play");
            return Ok(());
        };
        let Some(face_up) = component.front_side_up() else {
            return Err(Error::NotACard { kind: component.kind() });
        };

        let Some(index) = transfer(workspace, self.card, self.source, self.destination, None)? else {
            return Ok(());
        };
        self.source_index = Some(index);
        self.was_face_up = Some(face_up);

        if let Some(mut card) = workspace.find_component_mut(self.card) {
            card.set_front_side_up(true)?;
        }
        Ok(())
    }

    fn undo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        let (Some(index), Some(face_up)) = (self.source_index, self.was_face_up) else {
            return Ok(());
        };
        if transfer(workspace, self.card, self.destination, self.source, Some(index))?.is_none() {
            return Ok(());
        }
        if let Some(mut card) = workspace.find_component_mut(self.card) {
            card.set_front_side_up(face_up)?;
        }
        Ok(())
    }

    fn redo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        self.execute(workspace)
    }
}
