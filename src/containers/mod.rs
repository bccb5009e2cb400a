//! Containers: ordered holders of components, and holders of containers.
//!
//! ## Key Types
//!
//! - `Container`: components with an optional allow-set and capacity
//! - `CardContainer`, `Deck`, `Hand`: card-only containers
//! - `TokenContainer`, `LoggingContainer`: unrestricted leaf variants
//! - `ContainerContainer`: containers of containers with per-kind caps
//! - `Board`: a square or hex grid of containers
//! - `AnyContainer`: the closed set of container variants
//! - `ContainerMut`, `ChildMut`: mutable handles that can't swap out the
//!   value they point at
//! - `Workspace`: id-based lookup used by actions

/// Forwards the mutating `Container` methods of a leaf wrapper through its
/// crate-private `container_mut`. Callers never hold `&mut Container`, so
/// the wrapper's kind tag can't be swapped out.
macro_rules! leaf_mutators {
    () => {
        /// Append a component. See [`Container::add`](crate::containers::Container::add).
        pub fn add(&mut self, component: $crate::components::Component) -> $crate::core::Result<()> {
            self.container_mut().add(component)
        }

        /// Append a component, handing it back if it is rejected.
        pub fn try_add(
            &mut self,
            component: $crate::components::Component,
        ) -> ::std::result::Result<(), $crate::core::Rejected<$crate::components::Component>> {
            self.container_mut().try_add(component)
        }

        /// Insert a component at `index`. See [`Container::insert`](crate::containers::Container::insert).
        pub fn insert(
            &mut self,
            index: usize,
            component: $crate::components::Component,
        ) -> $crate::core::Result<()> {
            self.container_mut().insert(index, component)
        }

        /// Remove the component with the given id.
        pub fn remove(
            &mut self,
            id: $crate::core::ComponentId,
        ) -> Option<$crate::components::Component> {
            self.container_mut().remove(id)
        }

        /// Remove every component.
        pub fn clear(&mut self) {
            self.container_mut().clear();
        }

        /// Get a component by id, mutably.
        pub fn get_mut(
            &mut self,
            id: $crate::core::ComponentId,
        ) -> Option<$crate::components::ComponentMut<'_>> {
            self.container_mut().get_mut(id)
        }

        /// The underlying container, mutably.
        pub fn as_container_mut(&mut self) -> $crate::containers::ContainerMut<'_> {
            $crate::containers::ContainerMut::new(self.container_mut())
        }
    };
}

pub mod container;
pub mod cards;
pub mod deck;
pub mod token;
pub mod nested;
pub mod board;
pub mod workspace;

pub use container::{Container, ContainerMut};
pub use cards::{CardContainer, Hand};
pub use deck::{Deck, DeckOptions};
pub use token::{LoggingContainer, TokenContainer};
pub use nested::{ChildMut, ContainerContainer};
pub use board::{Board, Topology};
pub use workspace::Workspace;

use serde::{Deserialize, Serialize};

use crate::core::ContainerId;

/// Variant tag of a container.
///
/// `ContainerContainer` allow-sets and caps match these tags exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    /// Unrestricted `Container`.
    Plain,
    /// `CardContainer`.
    Cards,
    /// `Deck`.
    Deck,
    /// `Hand`.
    Hand,
    /// `TokenContainer`.
    Tokens,
    /// `LoggingContainer`.
    Logging,
    /// `ContainerContainer`.
    Nested,
    /// `Board`.
    Board,
}

impl ContainerKind {
    /// Check if this kind only accepts cards.
    #[must_use]
    pub const fn requires_cards(self) -> bool {
        matches!(self, Self::Cards | Self::Deck | Self::Hand)
    }

    /// Check if this kind holds components directly.
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        !matches!(self, Self::Nested | Self::Board)
    }

    /// Human-readable name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "Container",
            Self::Cards => "CardContainer",
            Self::Deck => "Deck",
            Self::Hand => "Hand",
            Self::Tokens => "TokenContainer",
            Self::Logging => "LoggingContainer",
            Self::Nested => "ContainerContainer",
            Self::Board => "Board",
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Any container variant, as stored inside a `ContainerContainer`.
#[derive(Debug, Serialize, Deserialize)]
pub enum AnyContainer {
    /// Unrestricted container.
    Plain(Container),
    /// Card-only container.
    Cards(CardContainer),
    /// Draw pile.
    Deck(Deck),
    /// Player hand.
    Hand(Hand),
    /// Token pool.
    Tokens(TokenContainer),
    /// Container with info-level logging.
    Logging(LoggingContainer),
    /// Container of containers.
    Nested(ContainerContainer),
    /// Grid of containers.
    Board(Board),
}

impl AnyContainer {
    /// Variant tag.
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        match self {
            Self::Nested(_) => ContainerKind::Nested,
            Self::Board(_) => ContainerKind::Board,
            leaf => leaf.as_container().map_or(ContainerKind::Plain, Container::kind),
        }
    }

    /// Unique id.
    #[must_use]
    pub fn id(&self) -> ContainerId {
        match self {
            Self::Nested(nested) => nested.id(),
            Self::Board(board) => board.id(),
            Self::Plain(c) => c.id(),
            Self::Cards(c) => c.id(),
            Self::Deck(c) => c.id(),
            Self::Hand(c) => c.id(),
            Self::Tokens(c) => c.id(),
            Self::Logging(c) => c.id(),
        }
    }

    /// Display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Nested(nested) => nested.name(),
            Self::Board(board) => board.name(),
            leaf => leaf.as_container().and_then(Container::name),
        }
    }

    /// The component container of a leaf variant.
    #[must_use]
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Plain(c) => Some(c),
            Self::Cards(c) => Some(c.as_container()),
            Self::Deck(c) => Some(c.as_container()),
            Self::Hand(c) => Some(c.as_container()),
            Self::Tokens(c) => Some(c.as_container()),
            Self::Logging(c) => Some(c.as_container()),
            Self::Nested(_) | Self::Board(_) => None,
        }
    }

    /// The component container of a leaf variant, mutably.
    pub fn as_container_mut(&mut self) -> Option<ContainerMut<'_>> {
        self.leaf_mut().map(ContainerMut::new)
    }

    pub(crate) fn leaf_mut(&mut self) -> Option<&mut Container> {
        match self {
            Self::Plain(c) => Some(c),
            Self::Cards(c) => Some(c.container_mut()),
            Self::Deck(c) => Some(c.container_mut()),
            Self::Hand(c) => Some(c.container_mut()),
            Self::Tokens(c) => Some(c.container_mut()),
            Self::Logging(c) => Some(c.container_mut()),
            Self::Nested(_) | Self::Board(_) => None,
        }
    }

    /// The deck, if this is one.
    #[must_use]
    pub fn as_deck(&self) -> Option<&Deck> {
        match self {
            Self::Deck(deck) => Some(deck),
            _ => None,
        }
    }

    /// The deck, mutably, if this is one.
    pub fn as_deck_mut(&mut self) -> Option<&mut Deck> {
        match self {
            Self::Deck(deck) => Some(deck),
            _ => None,
        }
    }

    /// The hand, mutably, if this is one.
    pub fn as_hand_mut(&mut self) -> Option<&mut Hand> {
        match self {
            Self::Hand(hand) => Some(hand),
            _ => None,
        }
    }

    /// The nested container, if this is one.
    #[must_use]
    pub fn as_nested(&self) -> Option<&ContainerContainer> {
        match self {
            Self::Nested(nested) => Some(nested),
            _ => None,
        }
    }

    /// The nested container, mutably, if this is one.
    pub fn as_nested_mut(&mut self) -> Option<&mut ContainerContainer> {
        match self {
            Self::Nested(nested) => Some(nested),
            _ => None,
        }
    }

    /// The board, if this is one.
    #[must_use]
    pub fn as_board(&self) -> Option<&Board> {
        match self {
            Self::Board(board) => Some(board),
            _ => None,
        }
    }

    /// The board, mutably, if this is one.
    pub fn as_board_mut(&mut self) -> Option<&mut Board> {
        match self {
            Self::Board(board) => Some(board),
            _ => None,
        }
    }

    /// Rewrap a leaf container according to its kind tag.
    pub(crate) fn from_leaf(container: Container) -> Self {
        match container.kind() {
            ContainerKind::Cards => Self::Cards(CardContainer::from_container(container)),
            ContainerKind::Deck => Self::Deck(Deck::from_container(container)),
            ContainerKind::Hand => Self::Hand(Hand::from_container(container)),
            ContainerKind::Tokens => Self::Tokens(TokenContainer::from_container(container)),
            ContainerKind::Logging => Self::Logging(LoggingContainer::from_container(container)),
            ContainerKind::Plain | ContainerKind::Nested | ContainerKind::Board => {
                Self::Plain(container)
            }
        }
    }
}

impl From<Container> for AnyContainer {
    fn from(c: Container) -> Self {
        Self::Plain(c)
    }
}

impl From<CardContainer> for AnyContainer {
    fn from(c: CardContainer) -> Self {
        Self::Cards(c)
    }
}

impl From<Deck> for AnyContainer {
    fn from(c: Deck) -> Self {
        Self::Deck(c)
    }
}

impl From<Hand> for AnyContainer {
    fn from(c: Hand) -> Self {
        Self::Hand(c)
    }
}

impl From<TokenContainer> for AnyContainer {
    fn from(c: TokenContainer) -> Self {
        Self::Tokens(c)
    }
}

impl From<LoggingContainer> for AnyContainer {
    fn from(c: LoggingContainer) -> Self {
        Self::Logging(c)
    }
}

impl From<ContainerContainer> for AnyContainer {
    fn from(c: ContainerContainer) -> Self {
        Self::Nested(c)
    }
}

impl From<Board> for AnyContainer {
    fn from(b: Board) -> Self {
        Self::Board(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let all: Vec<AnyContainer> = vec![
            Container::new().into(),
            CardContainer::new().into(),
            Deck::new().into(),
            Hand::new().into(),
            TokenContainer::new().into(),
            LoggingContainer::new().into(),
            ContainerContainer::new().into(),
            Board::square(1, 1).into(),
        ];
        let kinds: Vec<_> = all.iter().map(AnyContainer::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ContainerKind::Plain,
                ContainerKind::Cards,
                ContainerKind::Deck,
                ContainerKind::Hand,
                ContainerKind::Tokens,
                ContainerKind::Logging,
                ContainerKind::Nested,
                ContainerKind::Board,
            ]
        );
    }

    #[test]
    fn test_leaf_accessors() {
        let mut deck: AnyContainer = Deck::new().with_name("draw").into();
        assert_eq!(deck.name(), Some("draw"));
        assert!(deck.as_container().is_some());
        assert!(deck.as_deck_mut().is_some());
        assert!(deck.as_nested().is_none());

        let board: AnyContainer = Board::hex(2, 2).with_name("map").into();
        assert_eq!(board.name(), Some("map"));
        assert!(board.as_container().is_none());
        assert!(!board.kind().is_leaf());
    }

    #[test]
    fn test_from_leaf_rewraps_by_kind() {
        let leaf = Container::of_kind(ContainerKind::Deck).with_name("draw");
        let id = leaf.id();

        let rewrapped = AnyContainer::from_leaf(leaf);
        assert_eq!(rewrapped.kind(), ContainerKind::Deck);
        assert_eq!(rewrapped.as_deck().map(|deck| deck.id()), Some(id));

        let plain = AnyContainer::from_leaf(Container::new());
        assert!(matches!(plain, AnyContainer::Plain(_)));
    }

    #[test]
    fn test_requires_cards() {
        assert!(ContainerKind::Deck.requires_cards());
        assert!(ContainerKind::Hand.requires_cards());
        assert!(!ContainerKind::Tokens.requires_cards());
        assert_eq!(ContainerKind::Nested.to_string(), "ContainerContainer");
    }
}
