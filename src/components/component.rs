//! Components: the identity-bearing objects placed in containers.
//!
//! A `Component` is a fixed header (id, name, description) plus a
//! [`Variant`] payload. The variant set is closed:
//!
//! - plain component (no payload)
//! - [`Card`]: a face-up flag
//! - [`TwoSidedCard`]: two owned card faces, one active at a time
//! - [`StandardPlayingCard`]: suit and value
//! - piece (no payload)
//!
//! Containers restrict membership by [`ComponentKind`], the fieldless tag
//! of the variant.
//!
//! ```
//! use rust_tabletop::components::{Component, ComponentKind};
//!
//! let mut ace = Component::playing_card("A", "Spades");
//! assert_eq!(ace.kind(), ComponentKind::StandardPlayingCard);
//! assert_eq!(ace.info(), "A of Spades");
//!
//! ace.flip().unwrap();
//! assert_eq!(ace.front_side_up(), Some(false));
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::core::{ComponentId, Error, Result};

/// Variant tag of a component.
///
/// Tags form a small hierarchy used by allow-sets: every variant is a
/// `Component`, and every card variant is a `Card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Plain component with no payload.
    Component,
    /// Single-faced card.
    Card,
    /// Card with two owned faces.
    TwoSidedCard,
    /// Card with suit and value.
    StandardPlayingCard,
    /// Game piece or token.
    Piece,
}

impl ComponentKind {
    /// Check if this kind is one of the card variants.
    #[must_use]
    pub const fn is_card(self) -> bool {
        matches!(self, Self::Card | Self::TwoSidedCard | Self::StandardPlayingCard)
    }

    /// Check if a component of this kind satisfies `other`.
    ///
    /// ```
    /// use rust_tabletop::components::ComponentKind;
    ///
    /// assert!(ComponentKind::StandardPlayingCard.is_a(ComponentKind::Card));
    /// assert!(ComponentKind::Piece.is_a(ComponentKind::Component));
    /// assert!(!ComponentKind::Piece.is_a(ComponentKind::Card));
    /// assert!(!ComponentKind::Card.is_a(ComponentKind::StandardPlayingCard));
    /// ```
    #[must_use]
    pub const fn is_a(self, other: ComponentKind) -> bool {
        match other {
            Self::Component => true,
            Self::Card => self.is_card(),
            Self::TwoSidedCard => matches!(self, Self::TwoSidedCard),
            Self::StandardPlayingCard => matches!(self, Self::StandardPlayingCard),
            Self::Piece => matches!(self, Self::Piece),
        }
    }

    /// Human-readable name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Component => "Component",
            Self::Card => "Card",
            Self::TwoSidedCard => "TwoSidedCard",
            Self::StandardPlayingCard => "StandardPlayingCard",
            Self::Piece => "Piece",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-faced card payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Is the front face showing?
    pub front_side_up: bool,
}

impl Default for Card {
    fn default() -> Self {
        Self { front_side_up: true }
    }
}

/// Card built from two owned card faces.
///
/// Its own `front_side_up` flag selects the active face; the faces' own
/// flags are left alone by `flip`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TwoSidedCard {
    /// Is the front face the active one?
    pub front_side_up: bool,
    front: Box<Component>,
    back: Box<Component>,
}

impl TwoSidedCard {
    /// The front face.
    #[must_use]
    pub fn front(&self) -> &Component {
        &self.front
    }

    /// The back face.
    #[must_use]
    pub fn back(&self) -> &Component {
        &self.back
    }

    /// The face selected by `front_side_up`.
    #[must_use]
    pub fn active_side(&self) -> &Component {
        if self.front_side_up {
            &self.front
        } else {
            &self.back
        }
    }
}

/// Standard 52-card deck payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardPlayingCard {
    /// Is the front face showing?
    pub front_side_up: bool,
    /// Suit, e.g. "Hearts".
    pub suit: String,
    /// Value, e.g. "A" or "10".
    pub value: String,
}

/// Variant payload of a component.
#[derive(Debug, Serialize, Deserialize)]
pub enum Variant {
    /// Plain component.
    Component,
    /// Single-faced card.
    Card(Card),
    /// Two-faced card.
    TwoSidedCard(TwoSidedCard),
    /// Playing card.
    StandardPlayingCard(StandardPlayingCard),
    /// Game piece.
    Piece,
}

impl Variant {
    /// The tag of this variant.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Component => ComponentKind::Component,
            Self::Card(_) => ComponentKind::Card,
            Self::TwoSidedCard(_) => ComponentKind::TwoSidedCard,
            Self::StandardPlayingCard(_) => ComponentKind::StandardPlayingCard,
            Self::Piece => ComponentKind::Piece,
        }
    }
}

/// A game object with a stable identity.
///
/// Components are not `Clone`: a copy would share the id and
/// break identity-based membership. Equality compares ids only.
#[derive(Debug, Serialize, Deserialize)]
pub struct Component {
    id: ComponentId,
    name: Option<String>,
    description: Option<String>,
    variant: Variant,
}

impl Component {
    fn with_variant(variant: Variant) -> Self {
        Self {
            id: ComponentId::generate(),
            name: None,
            description: None,
            variant,
        }
    }

    /// Create a plain, unnamed component.
    #[must_use]
    pub fn new() -> Self {
        Self::with_variant(Variant::Component)
    }

    /// Create a face-up card.
    #[must_use]
    pub fn card() -> Self {
        Self::with_variant(Variant::Card(Card::default()))
    }

    /// Create a piece.
    #[must_use]
    pub fn piece() -> Self {
        Self::with_variant(Variant::Piece)
    }

    /// Create a face-up standard playing card.
    #[must_use]
    pub fn playing_card(value: impl Into<String>, suit: impl Into<String>) -> Self {
        Self::with_variant(Variant::StandardPlayingCard(StandardPlayingCard {
            front_side_up: true,
            suit: suit.into(),
            value: value.into(),
        }))
    }

    /// Create a two-sided card, front side up.
    ///
    /// Both faces must be cards.
    pub fn two_sided(front: Component, back: Component) -> Result<Self> {
        for face in [&front, &back] {
            if !face.is_card() {
                return Err(Error::NotACard { kind: face.kind() });
            }
        }
        Ok(Self::with_variant(Variant::TwoSidedCard(TwoSidedCard {
            front_side_up: true,
            front: Box::new(front),
            back: Box::new(back),
        })))
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Unique id.
    #[must_use]
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Variant tag.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.variant.kind()
    }

    /// Variant payload.
    #[must_use]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Check if this is any kind of card.
    #[must_use]
    pub fn is_card(&self) -> bool {
        self.kind().is_card()
    }

    /// Face-up flag for cards, `None` for everything else.
    #[must_use]
    pub fn front_side_up(&self) -> Option<bool> {
        match &self.variant {
            Variant::Card(card) => Some(card.front_side_up),
            Variant::TwoSidedCard(card) => Some(card.front_side_up),
            Variant::StandardPlayingCard(card) => Some(card.front_side_up),
            Variant::Component | Variant::Piece => None,
        }
    }

    /// Set the face-up flag. Fails with `NotACard` for non-cards.
    pub fn set_front_side_up(&mut self, up: bool) -> Result<()> {
        let kind = self.kind();
        let flag = match &mut self.variant {
            Variant::Card(card) => &mut card.front_side_up,
            Variant::TwoSidedCard(card) => &mut card.front_side_up,
            Variant::StandardPlayingCard(card) => &mut card.front_side_up,
            Variant::Component | Variant::Piece => return Err(Error::NotACard { kind }),
        };
        *flag = up;
        Ok(())
    }

    /// Toggle the face-up flag. Fails with `NotACard` for non-cards.
    pub fn flip(&mut self) -> Result<()> {
        let up = self.front_side_up().ok_or(Error::NotACard { kind: self.kind() })?;
        self.set_front_side_up(!up)
    }

    /// Short description for display and logs.
    ///
    /// Two-sided cards describe their active face; playing cards read
    /// "{value} of {suit}"; everything else is "{name} ({kind})".
    #[must_use]
    pub fn info(&self) -> String {
        match &self.variant {
            Variant::TwoSidedCard(card) => card.active_side().info(),
            Variant::StandardPlayingCard(card) => format!("{} of {}", card.value, card.suit),
            _ => format!("{} ({})", self.name().unwrap_or("unnamed"), self.kind()),
        }
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Component {}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.info())
    }
}

/// Mutable access to a component that already sits in a container.
///
/// Only the face can change. The component itself can't be replaced, so
/// a container's membership rules hold for everything it has accepted.
#[derive(Debug)]
pub struct ComponentMut<'a>(&'a mut Component);

impl<'a> ComponentMut<'a> {
    pub(crate) fn new(component: &'a mut Component) -> Self {
        Self(component)
    }

    /// Set the face-up flag. Fails with `NotACard` for non-cards.
    pub fn set_front_side_up(&mut self, up: bool) -> Result<()> {
        self.0.set_front_side_up(up)
    }

    /// Toggle the face-up flag. Fails with `NotACard` for non-cards.
    pub fn flip(&mut self) -> Result<()> {
        self.0.flip()
    }
}

impl Deref for ComponentMut<'_> {
    type Target = Component;

    fn deref(&self) -> &Component {
        &*self.0
    }
}
