//! The base component container.
//!
//! A `Container` is an ordered sequence of components with two optional
//! rules:
//! - an allow-set of component kinds (empty = anything goes)
//! - a maximum capacity (`None` = unbounded)
//!
//! Card-only kinds (`Cards`, `Deck`, `Hand`) add a third rule checked
//! before the other two: the component must be a card.
//!
//! ## Usage
//!
//! ```
//! use rust_tabletop::components::{Component, ComponentKind};
//! use rust_tabletop::containers::Container;
//! use rust_tabletop::core::Error;
//!
//! let mut tray = Container::new()
//!     .allow(ComponentKind::Card)
//!     .with_max_capacity(1);
//!
//! tray.add(Component::playing_card("A", "Hearts")).unwrap();
//!
//! let err = tray.add(Component::piece()).unwrap_err();
//! assert_eq!(err, Error::TypeNotAllowed { kind: ComponentKind::Piece });
//!
//! let err = tray.add(Component::card()).unwrap_err();
//! assert_eq!(err, Error::capacity(1));
//! assert_eq!(tray.len(), 1);
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ContainerKind;
use crate::components::{Component, ComponentKind, ComponentMut};
use crate::core::{ComponentId, ContainerId, Error, Rejected, Result};

/// Ordered, optionally restricted holder of components.
#[derive(Debug, Serialize, Deserialize)]
pub struct Container {
    id: ContainerId,
    kind: ContainerKind,
    name: Option<String>,
    allowed: SmallVec<[ComponentKind; 4]>,
    max_capacity: Option<usize>,
    components: Vec<Component>,
}

impl Container {
    /// Create an empty, unrestricted container.
    #[must_use]
    pub fn new() -> Self {
        Self::of_kind(ContainerKind::Plain)
    }

    pub(crate) fn of_kind(kind: ContainerKind) -> Self {
        Self {
            id: ContainerId::generate(),
            kind,
            name: None,
            allowed: SmallVec::new(),
            max_capacity: None,
            components: Vec::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a kind to the allow-set.
    #[must_use]
    pub fn allow(mut self, kind: ComponentKind) -> Self {
        if !self.allowed.contains(&kind) {
            self.allowed.push(kind);
        }
        self
    }

    /// Add several kinds to the allow-set.
    #[must_use]
    pub fn allow_all(self, kinds: impl IntoIterator<Item = ComponentKind>) -> Self {
        kinds.into_iter().fold(self, Self::allow)
    }

    /// Set the maximum number of components.
    #[must_use]
    pub fn with_max_capacity(mut self, max: usize) -> Self {
        self.max_capacity = Some(max);
        self
    }

    /// Unique id.
    #[must_use]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Variant tag of this container.
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The allow-set. Empty means unrestricted.
    #[must_use]
    pub fn allowed(&self) -> &[ComponentKind] {
        &self.allowed
    }

    /// Capacity bound, if any.
    #[must_use]
    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// Check whether `component` could be added right now.
    ///
    /// Order: card-only rule, then allow-set, then capacity. A rejected
    /// kind therefore never reports `CapacityExceeded`.
    pub fn check(&self, component: &Component) -> Result<()> {
        let kind = component.kind();

        if self.kind.requires_cards() && !kind.is_card() {
            return Err(Error::NotACard { kind });
        }

        if !self.allowed.is_empty() && !self.allowed.iter().any(|&allowed| kind.is_a(allowed)) {
            return Err(Error::TypeNotAllowed { kind });
        }

        if let Some(max) = self.max_capacity {
            if self.components.len() >= max {
                return Err(Error::capacity(max));
            }
        }

        Ok(())
    }

    /// Append a component.
    ///
    /// On failure the container is unchanged and `component` is dropped;
    /// use [`try_add`](Self::try_add) to get it back.
    pub fn add(&mut self, component: Component) -> Result<()> {
        self.try_add(component).map_err(Error::from)
    }

    /// Append a component, handing it back if it is rejected.
    pub fn try_add(&mut self, component: Component) -> std::result::Result<(), Rejected<Component>> {
        self.place(None, component)
    }

    /// Insert a component at `index` (clamped to the current length).
    ///
    /// Same validation as [`add`](Self::add).
    pub fn insert(&mut self, index: usize, component: Component) -> Result<()> {
        self.try_insert(index, component).map_err(Error::from)
    }

    /// Insert a component at `index`, handing it back if it is rejected.
    pub fn try_insert(
        &mut self,
        index: usize,
        component: Component,
    ) -> std::result::Result<(), Rejected<Component>> {
        self.place(Some(index), component)
    }

    fn place(
        &mut self,
        index: Option<usize>,
        component: Component,
    ) -> std::result::Result<(), Rejected<Component>> {
        if let Err(err) = self.check(&component) {
            return Err(Rejected::new(err, component));
        }
        match index {
            Some(index) => {
                self.log_event("insert", Some(component.id()));
                let index = index.min(self.components.len());
                self.components.insert(index, component);
            }
            None => {
                self.log_event("add", Some(component.id()));
                self.components.push(component);
            }
        }
        Ok(())
    }

    /// Remove the component with the given id.
    ///
    /// Returns `None` (and changes nothing) if it isn't here.
    pub fn remove(&mut self, id: ComponentId) -> Option<Component> {
        let index = self.position(id)?;
        self.log_event("remove", Some(id));
        Some(self.components.remove(index))
    }

    /// The components, in order.
    #[must_use]
    pub fn list(&self) -> &[Component] {
        self.log_event("list", None);
        &self.components
    }

    /// Iterate over the components in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Remove every component.
    pub fn clear(&mut self) {
        self.log_event("clear", None);
        self.components.clear();
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the container is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Check if the capacity bound has been reached.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.max_capacity.is_some_and(|max| self.components.len() >= max)
    }

    /// Check membership by id.
    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        self.position(id).is_some()
    }

    /// Index of the component with the given id.
    #[must_use]
    pub fn position(&self, id: ComponentId) -> Option<usize> {
        self.components.iter().position(|c| c.id() == id)
    }

    /// Get a component by id.
    #[must_use]
    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// Get a component by id, mutably.
    pub fn get_mut(&mut self, id: ComponentId) -> Option<ComponentMut<'_>> {
        self.components
            .iter_mut()
            .find(|c| c.id() == id)
            .map(ComponentMut::new)
    }

    /// Keep `self` only if it carries the `expected` kind tag.
    pub(crate) fn expect_kind(self, expected: ContainerKind) -> Result<Self> {
        if self.kind != expected {
            return Err(Error::KindMismatch { expected, found: self.kind });
        }
        Ok(self)
    }

    pub(crate) fn components_mut(&mut self) -> &mut Vec<Component> {
        &mut self.components
    }

    fn log_event(&self, op: &'static str, component: Option<ComponentId>) {
        let name = self.name.as_deref().unwrap_or("");
        if self.kind == ContainerKind::Logging {
            tracing::info!(container = %self.id, name, op, ?component, len = self.components.len(), "container operation");
        } else {
            tracing::trace!(container = %self.id, name, op, ?component, len = self.components.len(), "container operation");
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable access to a container owned by something else.
///
/// Wrappers such as [`Deck`](super::Deck) and lookups through
/// [`Workspace`](super::Workspace) hand this out instead of
/// `&mut Container`. Components still go in and out through the usual
/// checks, but the container as a whole can't be swapped, so its kind tag
/// and rules stay the ones it was created with.
///
/// ```compile_fail
/// use rust_tabletop::containers::Deck;
///
/// let mut deck = Deck::new();
/// let _ = std::mem::take(deck.as_container_mut());
/// ```
#[derive(Debug)]
pub struct ContainerMut<'a>(&'a mut Container);

impl<'a> ContainerMut<'a> {
    pub(crate) fn new(container: &'a mut Container) -> Self {
        Self(container)
    }

    pub(crate) fn into_inner(self) -> &'a mut Container {
        self.0
    }

    /// Append a component. See [`Container::add`].
    pub fn add(&mut self, component: Component) -> Result<()> {
        self.0.add(component)
    }

    /// Append a component, handing it back if it is rejected.
    pub fn try_add(&mut self, component: Component) -> std::result::Result<(), Rejected<Component>> {
        self.0.try_add(component)
    }

    /// Insert a component at `index`. See [`Container::insert`].
    pub fn insert(&mut self, index: usize, component: Component) -> Result<()> {
        self.0.insert(index, component)
    }

    /// Insert a component at `index`, handing it back if it is rejected.
    pub fn try_insert(
        &mut self,
        index: usize,
        component: Component,
    ) -> std::result::Result<(), Rejected<Component>> {
        self.0.try_insert(index, component)
    }

    /// Remove the component with the given id.
    pub fn remove(&mut self, id: ComponentId) -> Option<Component> {
        self.0.remove(id)
    }

    /// Remove every component.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Get a component by id, mutably.
    pub fn get_mut(&mut self, id: ComponentId) -> Option<ComponentMut<'_>> {
        self.0.get_mut(id)
    }

    /// Like [`get_mut`](Self::get_mut), keeping the full borrow.
    pub fn into_component_mut(self, id: ComponentId) -> Option<ComponentMut<'a>> {
        let Self(container) = self;
        container.get_mut(id)
    }
}

impl Deref for ContainerMut<'_> {
    type Target = Container;

    fn deref(&self) -> &Container {
        &*self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ace() -> Component {
        Component::playing_card("A", "Hearts").with_name("Ace")
    }

    #[test]
    fn test_add_and_remove() {
        let mut container = Container::new();
        let card1 = ace();
        let card2 = Component::playing_card("K", "Spades");
        let (id1, id2) = (card1.id(), card2.id());

        container.add(card1).unwrap();
        container.add(card2).unwrap();
        assert!(container.contains(id1));
        assert!(container.contains(id2));

        let removed = container.remove(id1).unwrap();
        assert_eq!(removed.id(), id1);
        assert!(!container.contains(id1));
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut container = Container::new();
        container.add(ace()).unwrap();

        assert!(container.remove(ComponentId::generate()).is_none());
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut container = Container::new();
        let ids: Vec<_> = (0..5)
            .map(|_| {
                let c = Component::card();
                let id = c.id();
                container.add(c).unwrap();
                id
            })
            .collect();

        let listed: Vec<_> = container.list().iter().map(Component::id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_type_restriction_accepts_subkinds() {
        let mut container = Container::new().allow(ComponentKind::Card);

        container.add(ace()).unwrap();
        container.add(Component::card()).unwrap();

        let err = container.add(Component::new().with_name("NonCard")).unwrap_err();
        assert_eq!(err, Error::TypeNotAllowed { kind: ComponentKind::Component });
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_limited_capacity() {
        let mut container = Container::new().with_max_capacity(2);
        container.add(ace()).unwrap();
        container.add(Component::card()).unwrap();
        assert!(container.is_full());

        let err = container.add(Component::playing_card("K", "Spades")).unwrap_err();
        assert_eq!(err, Error::capacity(2));
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_type_checked_before_capacity() {
        let mut container = Container::new()
            .allow(ComponentKind::Piece)
            .with_max_capacity(0);

        let err = container.add(Component::card()).unwrap_err();
        assert_eq!(err, Error::TypeNotAllowed { kind: ComponentKind::Card });

        let err = container.add(Component::piece()).unwrap_err();
        assert_eq!(err, Error::capacity(0));
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut container = Container::new();
        let first = Component::card();
        let last = Component::card();
        let middle = Component::card();
        let (first_id, middle_id, last_id) = (first.id(), middle.id(), last.id());

        container.add(first).unwrap();
        container.insert(99, last).unwrap();
        container.insert(1, middle).unwrap();

        let ids: Vec<_> = container.iter().map(Component::id).collect();
        assert_eq!(ids, vec![first_id, middle_id, last_id]);
    }

    #[test]
    fn test_clear() {
        let mut container = Container::new();
        container.add(ace()).unwrap();
        container.clear();
        assert!(container.is_empty());
    }

    #[test]
    fn test_allow_deduplicates() {
        let container = Container::new()
            .allow_all([ComponentKind::Card, ComponentKind::Card, ComponentKind::Piece]);
        assert_eq!(container.allowed(), &[ComponentKind::Card, ComponentKind::Piece]);
    }

    #[test]
    fn test_try_add_returns_rejected_component() {
        let mut container = Container::new().with_max_capacity(1);
        container.add(Component::card()).unwrap();

        let card = ace();
        let id = card.id();
        let rejected = container.try_add(card).unwrap_err();
        assert_eq!(rejected.error, Error::capacity(1));
        assert_eq!(rejected.value.id(), id);

        let mut other = Container::new();
        other.try_insert(0, rejected.into_value()).unwrap();
        assert!(other.contains(id));
    }

    #[test]
    fn test_container_mut_keeps_rules() {
        let mut container = Container::of_kind(ContainerKind::Hand).with_max_capacity(1);
        let mut handle = ContainerMut::new(&mut container);

        assert_eq!(
            handle.add(Component::piece()),
            Err(Error::NotACard { kind: ComponentKind::Piece })
        );
        let card = Component::card();
        let id = card.id();
        handle.insert(5, card).unwrap();
        assert_eq!(handle.add(Component::card()), Err(Error::capacity(1)));

        handle.get_mut(id).unwrap().flip().unwrap();
        assert_eq!(handle.kind(), ContainerKind::Hand);
        assert!(handle.remove(id).is_some());
        assert!(container.is_empty());
    }

    #[test]
    fn test_get_mut_flips_in_place() {
        let mut container = Container::new();
        let card = Component::card();
        let id = card.id();
        container.add(card).unwrap();

        container.get_mut(id).unwrap().flip().unwrap();
        assert_eq!(container.get(id).unwrap().front_side_up(), Some(false));
    }
}
