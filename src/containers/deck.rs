//! Decks: ordered card containers with shuffle, draw and peek.
//!
//! Index 0 is the top of the deck. `draw` and `peek` work from the top
//! and keep the relative order of the cards they return.
//!
//! ```
//! use rust_tabletop::components::Component;
//! use rust_tabletop::containers::{Deck, DeckOptions};
//! use rust_tabletop::core::GameRng;
//!
//! let cards: Vec<_> = ["A", "2", "3"]
//!     .into_iter()
//!     .map(|v| Component::playing_card(v, "Hearts"))
//!     .collect();
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = Deck::with_options(cards, DeckOptions::default(), &mut rng).unwrap();
//!
//! let drawn = deck.draw(2).unwrap();
//! assert_eq!(drawn[0].info(), "A of Hearts");
//! assert_eq!(deck.size(), 1);
//! assert!(deck.draw(2).is_err());
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::{CardContainer, Container, ContainerKind};
use crate::components::Component;
use crate::core::{Error, Result, Shuffler};

/// Construction options for [`Deck::with_options`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckOptions {
    /// Shuffle right after the initial cards are loaded.
    pub shuffle_on_init: bool,
    /// Maximum number of cards. `None` for unlimited.
    pub max_capacity: Option<usize>,
}

impl DeckOptions {
    /// Shuffle on construction.
    #[must_use]
    pub fn shuffled(mut self) -> Self {
        self.shuffle_on_init = true;
        self
    }

    /// Set the card limit.
    #[must_use]
    pub fn with_max_capacity(mut self, max: usize) -> Self {
        self.max_capacity = Some(max);
        self
    }
}

/// An ordered draw pile.
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "Container")]
pub struct Deck(CardContainer);

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self(CardContainer::of_kind(ContainerKind::Deck))
    }

    pub(crate) fn from_container(container: Container) -> Self {
        Self(CardContainer::from_container(container))
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self(self.0.with_name(name))
    }

    /// Build a deck from `cards` in the given order, without shuffling.
    pub fn from_cards(cards: Vec<Component>) -> Result<Self> {
        let mut deck = Self::new();
        deck.load(cards)?;
        Ok(deck)
    }

    /// Build a deck from `cards`, applying `options`.
    ///
    /// `shuffler` is only used when `options.shuffle_on_init` is set.
    pub fn with_options<S: Shuffler>(
        cards: Vec<Component>,
        options: DeckOptions,
        shuffler: &mut S,
    ) -> Result<Self> {
        let mut deck = Self::new();
        if let Some(max) = options.max_capacity {
            deck = Self(deck.0.with_max_capacity(max));
        }
        deck.load(cards)?;
        if options.shuffle_on_init {
            deck.shuffle(shuffler);
        }
        Ok(deck)
    }

    /// Number of cards left.
    #[must_use]
    pub fn size(&self) -> usize {
        self.0.count()
    }

    /// Randomly reorder the deck in place.
    pub fn shuffle<S: Shuffler>(&mut self, shuffler: &mut S) {
        tracing::trace!(deck = %self.id(), size = self.size(), "shuffling deck");
        shuffler.permute(self.container_mut().components_mut());
    }

    /// Remove and return the top `n` cards, top card first.
    ///
    /// Fails with `InsufficientCards` (deck unchanged) if `n > size()`.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Component>> {
        self.ensure_available(n)?;
        tracing::trace!(deck = %self.id(), n, "drawing cards");
        Ok(self.container_mut().components_mut().drain(..n).collect())
    }

    /// Remove and return the top card.
    pub fn draw_one(&mut self) -> Result<Component> {
        self.ensure_available(1)?;
        Ok(self.container_mut().components_mut().remove(0))
    }

    /// Look at the top `n` cards without removing them.
    pub fn peek(&self, n: usize) -> Result<&[Component]> {
        self.ensure_available(n)?;
        Ok(&self.0.iter().as_slice()[..n])
    }

    /// Replace the whole deck with `cards`, then shuffle.
    ///
    /// Every card is validated first; on failure the deck is unchanged.
    pub fn rebuild_and_shuffle<S: Shuffler>(
        &mut self,
        cards: Vec<Component>,
        shuffler: &mut S,
    ) -> Result<()> {
        let previous = std::mem::take(self.container_mut().components_mut());
        if let Err(err) = self.load(cards) {
            *self.container_mut().components_mut() = previous;
            return Err(err);
        }
        self.shuffle(shuffler);
        Ok(())
    }

    /// The underlying container.
    #[must_use]
    pub fn as_container(&self) -> &Container {
        self.0.as_container()
    }

    leaf_mutators!();

    pub(crate) fn container_mut(&mut self) -> &mut Container {
        self.0.container_mut()
    }

    /// Add `cards` in order, rolling back everything on the first failure.
    fn load(&mut self, cards: Vec<Component>) -> Result<()> {
        let start = self.size();
        for card in cards {
            if let Err(err) = self.0.add(card) {
                self.container_mut().components_mut().truncate(start);
                return Err(err);
            }
        }
        Ok(())
    }

    fn ensure_available(&self, requested: usize) -> Result<()> {
        let available = self.size();
        if requested > available {
            return Err(Error::InsufficientCards { requested, available });
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Deck {
    type Target = CardContainer;

    fn deref(&self) -> &CardContainer {
        &self.0
    }
}

impl TryFrom<Container> for Deck {
    type Error = Error;

    fn try_from(container: Container) -> Result<Self> {
        container
            .expect_kind(ContainerKind::Deck)
            .map(|container| Self(CardContainer::from_container(container)))
    }
}
