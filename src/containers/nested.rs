//! Containers of containers.
//!
//! A `ContainerContainer` holds other containers (leaves, boards or further
//! nested containers) and restricts them by [`ContainerKind`]:
//! - an allow-set of kinds (exact match, empty = anything goes)
//! - per-kind caps, counted per concrete kind
//!
//! That is enough to express a tableau compositionally: unlimited
//! material piles next to a wing capped at five works, and so on.
//!
//! ```
//! use rust_tabletop::containers::{CardContainer, ContainerContainer, ContainerKind};
//! use rust_tabletop::core::Error;
//!
//! let mut wing = ContainerContainer::new()
//!     .allow(ContainerKind::Cards)
//!     .with_cap(ContainerKind::Cards, Some(2));
//!
//! wing.add(CardContainer::new().with_name("works")).unwrap();
//! wing.add(CardContainer::new().with_name("materials")).unwrap();
//! assert_eq!(
//!     wing.add(CardContainer::new()),
//!     Err(Error::kind_capacity(ContainerKind::Cards, 2))
//! );
//! ```

use std::ops::Deref;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{AnyContainer, Board, ContainerKind, ContainerMut, Deck, Hand};
use crate::core::{ContainerId, Error, Rejected, Result};

/// Ordered holder of containers.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContainerContainer {
    id: ContainerId,
    name: Option<String>,
    allowed: SmallVec<[ContainerKind; 4]>,
    caps: FxHashMap<ContainerKind, Option<usize>>,
    containers: Vec<AnyContainer>,
}

impl ContainerContainer {
    /// Create an empty, unrestricted container of containers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ContainerId::generate(),
            name: None,
            allowed: SmallVec::new(),
            caps: FxHashMap::default(),
            containers: Vec::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a container kind to the allow-set.
    #[must_use]
    pub fn allow(mut self, kind: ContainerKind) -> Self {
        if !self.allowed.contains(&kind) {
            self.allowed.push(kind);
        }
        self
    }

    /// Set the cap for one kind. `None` records the kind as uncapped.
    #[must_use]
    pub fn with_cap(mut self, kind: ContainerKind, max: Option<usize>) -> Self {
        self.caps.insert(kind, max);
        self
    }

    /// Unique id.
    #[must_use]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The allow-set. Empty means unrestricted.
    #[must_use]
    pub fn allowed(&self) -> &[ContainerKind] {
        &self.allowed
    }

    /// Configured cap for `kind`, if any.
    #[must_use]
    pub fn cap(&self, kind: ContainerKind) -> Option<usize> {
        self.caps.get(&kind).copied().flatten()
    }

    /// Number of direct children of exactly `kind`.
    #[must_use]
    pub fn count_of(&self, kind: ContainerKind) -> usize {
        self.containers.iter().filter(|c| c.kind() == kind).count()
    }

    /// Check whether a child of `kind` could be added right now.
    pub fn check(&self, kind: ContainerKind) -> Result<()> {
        if !self.allowed.is_empty() && !self.allowed.contains(&kind) {
            return Err(Error::ContainerTypeNotAllowed { kind });
        }

        if let Some(max) = self.cap(kind) {
            if self.count_of(kind) >= max {
                return Err(Error::kind_capacity(kind, max));
            }
        }

        Ok(())
    }

    /// Append a child container.
    ///
    /// On failure nothing changes and `container` is dropped; use
    /// [`try_add`](Self::try_add) to get it back.
    pub fn add(&mut self, container: impl Into<AnyContainer>) -> Result<()> {
        self.try_add(container).map_err(Error::from)
    }

    /// Append a child container, handing it back if it is rejected.
    pub fn try_add(
        &mut self,
        container: impl Into<AnyContainer>,
    ) -> std::result::Result<(), Rejected<AnyContainer>> {
        let container = container.into();
        if let Err(err) = self.check(container.kind()) {
            return Err(Rejected::new(err, container));
        }
        tracing::trace!(
            parent = %self.id,
            child = %container.id(),
            kind = %container.kind(),
            "adding container"
        );
        self.containers.push(container);
        Ok(())
    }

    /// Remove the direct child with the given id.
    ///
    /// Returns `None` (and changes nothing) if there is no such child.
    pub fn remove(&mut self, id: ContainerId) -> Option<AnyContainer> {
        let index = self.containers.iter().position(|c| c.id() == id)?;
        tracing::trace!(parent = %self.id, child = %id, "removing container");
        Some(self.containers.remove(index))
    }

    /// The direct children, in order.
    #[must_use]
    pub fn list(&self) -> &[AnyContainer] {
        &self.containers
    }

    /// Iterate over the direct children, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = ChildMut<'_>> + '_ {
        self.containers.iter_mut().map(ChildMut)
    }

    pub(crate) fn children_mut(&mut self) -> std::slice::IterMut<'_, AnyContainer> {
        self.containers.iter_mut()
    }

    /// Remove every child.
    pub fn clear(&mut self) {
        self.containers.clear();
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Check if there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// First direct child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&AnyContainer> {
        self.containers.iter().find(|c| c.name() == Some(name))
    }

    /// First direct child with the given name, mutably.
    pub fn child_mut(&mut self, name: &str) -> Option<ChildMut<'_>> {
        self.containers
            .iter_mut()
            .find(|c| c.name() == Some(name))
            .map(ChildMut)
    }

    /// Find a container by id anywhere below this one (not counting self).
    ///
    /// Board cells are plain containers and are reached through
    /// [`Workspace`](super::Workspace) instead.
    #[must_use]
    pub fn find(&self, id: ContainerId) -> Option<&AnyContainer> {
        self.containers.iter().find_map(|child| {
            if child.id() == id {
                return Some(child);
            }
            match child {
                AnyContainer::Nested(nested) => nested.find(id),
                _ => None,
            }
        })
    }

    /// Find a container by id anywhere below this one, mutably.
    pub fn find_mut(&mut self, id: ContainerId) -> Option<ChildMut<'_>> {
        for child in &mut self.containers {
            if child.id() == id {
                return Some(ChildMut(child));
            }
            if let AnyContainer::Nested(nested) = child {
                if let Some(found) = nested.find_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }
}

/// Mutable access to a child of a [`ContainerContainer`].
///
/// The child can be changed through its typed view but not replaced, so it
/// keeps the kind its parent checked when it was added.
#[derive(Debug)]
pub struct ChildMut<'a>(&'a mut AnyContainer);

impl<'a> ChildMut<'a> {
    /// The component container of a leaf child.
    #[must_use]
    pub fn into_container(self) -> Option<ContainerMut<'a>> {
        let Self(child) = self;
        child.as_container_mut()
    }

    /// The child as a deck.
    #[must_use]
    pub fn into_deck(self) -> Option<&'a mut Deck> {
        let Self(child) = self;
        child.as_deck_mut()
    }

    /// The child as a hand.
    #[must_use]
    pub fn into_hand(self) -> Option<&'a mut Hand> {
        let Self(child) = self;
        child.as_hand_mut()
    }

    /// The child as a nested container.
    #[must_use]
    pub fn into_nested(self) -> Option<&'a mut ContainerContainer> {
        let Self(child) = self;
        child.as_nested_mut()
    }

    /// The child as a board.
    #[must_use]
    pub fn into_board(self) -> Option<&'a mut Board> {
        let Self(child) = self;
        child.as_board_mut()
    }
}

impl Deref for ChildMut<'_> {
    type Target = AnyContainer;

    fn deref(&self) -> &AnyContainer {
        &*self.0
    }
}

impl Default for ContainerContainer {
    fn default() -> Self {
        Self::new()
    }
}
