//! Face flipping.

use serde::{Deserialize, Serialize};

use super::Reversible;
use crate::containers::Workspace;
use crate::core::{ComponentId, Result};

/// Toggle a card's face.
///
/// Flipping is its own inverse, so execute, undo and redo all toggle.
/// The card is found anywhere in the workspace; if it isn't there the
/// action does nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipCard {
    card: ComponentId,
}

impl FlipCard {
    /// Create a flip of `card`.
    #[must_use]
    pub fn new(card: ComponentId) -> Self {
        Self { card }
    }

    /// The card being flipped.
    #[must_use]
    pub fn card(&self) -> ComponentId {
        self.card
    }

    fn toggle<W: Workspace + ?Sized>(&self, workspace: &mut W) -> Result<()> {
        match workspace.find_component_mut(self.card) {
            Some(mut component) => {
                component.flip()?;
                tracing::trace!(card = %self.card, face_up = ?component.front_side_up(), "card flipped");
            }
            None => tracing::debug!(card = %self.card, "card not found, skipping flip"),
        }
        Ok(())
    }
}

impl Reversible for FlipCard {
    fn execute<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        self.toggle(workspace)
    }

    fn undo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        self.toggle(workspace)
    }

    fn redo<W: Workspace + ?Sized>(&mut self, workspace: &mut W) -> Result<()> {
        self.toggle(workspace)
    }
}
