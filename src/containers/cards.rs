//! Card-only containers.
//!
//! `CardContainer` narrows [`Container`] to card variants; `Hand` is a
//! card container meant to be held by a player. Both dereference to the
//! underlying `Container` for reads. Writes go through forwarded methods
//! or a [`ContainerMut`](super::ContainerMut), so the kind tag that carries
//! the card-only rule can't be replaced.

use std::cmp::Ordering;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::{Container, ContainerKind};
use crate::components::{Component, ComponentKind};
use crate::core::{ComponentId, Error};

/// A container that only accepts cards.
///
/// ```
/// use rust_tabletop::components::{Component, ComponentKind};
/// use rust_tabletop::containers::CardContainer;
/// use rust_tabletop::core::Error;
///
/// let mut floor = CardContainer::new().with_name("floor");
/// let card = Component::card();
/// let id = card.id();
/// floor.add(card).unwrap();
///
/// assert_eq!(floor.find_index(id), Some(0));
/// assert_eq!(
///     floor.add(Component::piece()),
///     Err(Error::NotACard { kind: ComponentKind::Piece })
/// );
/// ```
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "Container")]
pub struct CardContainer(Container);

impl CardContainer {
    /// Create an empty card container.
    #[must_use]
    pub fn new() -> Self {
        Self(Container::of_kind(ContainerKind::Cards))
    }

    pub(crate) fn of_kind(kind: ContainerKind) -> Self {
        debug_assert!(kind.requires_cards());
        Self(Container::of_kind(kind))
    }

    pub(crate) fn from_container(container: Container) -> Self {
        debug_assert!(container.kind().requires_cards());
        Self(container)
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self(self.0.with_name(name))
    }

    /// Restrict to specific card kinds.
    #[must_use]
    pub fn allow(self, kind: ComponentKind) -> Self {
        Self(self.0.allow(kind))
    }

    /// Set the maximum number of cards.
    #[must_use]
    pub fn with_max_capacity(self, max: usize) -> Self {
        Self(self.0.with_max_capacity(max))
    }

    /// Index of the card with the given id, or `None` if absent.
    #[must_use]
    pub fn find_index(&self, card: ComponentId) -> Option<usize> {
        self.0.position(card)
    }

    /// Number of cards.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// The underlying container.
    #[must_use]
    pub fn as_container(&self) -> &Container {
        &self.0
    }

    leaf_mutators!();

    pub(crate) fn container_mut(&mut self) -> &mut Container {
        &mut self.0
    }
}

impl Default for CardContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for CardContainer {
    type Target = Container;

    fn deref(&self) -> &Container {
        &self.0
    }
}

impl TryFrom<Container> for CardContainer {
    type Error = Error;

    fn try_from(container: Container) -> Result<Self, Error> {
        container.expect_kind(ContainerKind::Cards).map(Self)
    }
}

/// A player's hand of cards.
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "Container")]
pub struct Hand(CardContainer);

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self(CardContainer::of_kind(ContainerKind::Hand))
    }

    pub(crate) fn from_container(container: Container) -> Self {
        Self(CardContainer::from_container(container))
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self(self.0.with_name(name))
    }

    /// Set the hand size limit.
    #[must_use]
    pub fn with_max_capacity(self, max: usize) -> Self {
        Self(self.0.with_max_capacity(max))
    }

    /// Reorder the hand with a stable sort.
    ///
    /// ```
    /// use rust_tabletop::components::Component;
    /// use rust_tabletop::containers::Hand;
    ///
    /// let mut hand = Hand::new();
    /// hand.add(Component::playing_card("9", "Clubs")).unwrap();
    /// hand.add(Component::playing_card("2", "Clubs")).unwrap();
    ///
    /// hand.organize(|a, b| a.info().cmp(&b.info()));
    /// assert_eq!(hand.list()[0].info(), "2 of Clubs");
    /// ```
    pub fn organize(&mut self, compare: impl FnMut(&Component, &Component) -> Ordering) {
        self.container_mut().components_mut().sort_by(compare);
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
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Hand {
    type Target = CardContainer;

    fn deref(&self) -> &CardContainer {
        &self.0
    }
}

impl TryFrom<Container> for Hand {
    type Error = Error;

    fn try_from(container: Container) -> Result<Self, Error> {
        container
            .expect_kind(ContainerKind::Hand)
            .map(|container| Self(CardContainer(container)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_container_rejects_non_cards() {
        let mut cards = CardContainer::new();
        assert_eq!(
            cards.add(Component::new()),
            Err(Error::NotACard { kind: ComponentKind::Component })
        );
        assert_eq!(cards.count(), 0);
    }

    #[test]
    fn test_not_a_card_checked_before_allow_set() {
        // Allowing Component would admit a piece in a plain container;
        // the card rule still wins here.
        let mut cards = CardContainer::new().allow(ComponentKind::Component);
        assert_eq!(
            cards.add(Component::piece()),
            Err(Error::NotACard { kind: ComponentKind::Piece })
        );
        cards.add(Component::card()).unwrap();
    }

    #[test]
    fn test_not_a_card_enforced_through_container() {
        let mut cards = CardContainer::new();
        let err = cards.as_container_mut().add(Component::piece()).unwrap_err();
        assert_eq!(err, Error::NotACard { kind: ComponentKind::Piece });
    }

    #[test]
    fn test_rejected_card_can_be_recovered() {
        let mut hand = Hand::new().with_max_capacity(0);
        let card = Component::card().with_name("Monastery");
        let id = card.id();

        let rejected = hand.try_add(card).unwrap_err();
        assert_eq!(rejected.error, Error::capacity(0));

        let mut floor = CardContainer::new();
        floor.add(rejected.into_value()).unwrap();
        assert!(floor.contains(id));
    }

    #[test]
    fn test_deserialize_checks_kind_tag() {
        let json = serde_json::to_string(&Container::new()).unwrap();
        let err = serde_json::from_str::<Hand>(&json).unwrap_err();
        assert!(err.to_string().contains("expected a Hand container, got Container"));

        let mut hand = Hand::new();
        hand.add(Component::card()).unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        let loaded: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.kind(), ContainerKind::Hand);
        assert_eq!(loaded.count(), 1);
    }

    #[test]
    fn test_queries() {
        let mut cards = CardContainer::new();
        let a = Component::card();
        let b = Component::card();
        let (a_id, b_id) = (a.id(), b.id());
        cards.add(a).unwrap();
        cards.add(b).unwrap();

        assert!(cards.contains(a_id));
        assert_eq!(cards.find_index(b_id), Some(1));
        assert_eq!(cards.find_index(ComponentId::generate()), None);
        assert_eq!(cards.count(), 2);
    }

    #[test]
    fn test_hand_kind_and_capacity() {
        let mut hand = Hand::new().with_name("mine").with_max_capacity(1);
        assert_eq!(hand.kind(), ContainerKind::Hand);
        assert_eq!(hand.name(), Some("mine"));

        hand.add(Component::card()).unwrap();
        assert_eq!(hand.add(Component::card()), Err(Error::capacity(1)));
    }
}
