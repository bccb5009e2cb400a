//! Id-based lookup over container trees.
//!
//! Actions store ids, not references. When they run, they resolve those
//! ids against a `Workspace`: anything that can find a leaf container or a
//! component by id. A single `Container`, a `ContainerContainer` used as
//! the table root, a `Board` and an `AnyContainer` all qualify.

use super::{AnyContainer, Board, Container, ContainerContainer, ContainerMut};
use crate::components::{Component, ComponentMut};
use crate::core::{ComponentId, ContainerId};

/// Resolves container and component ids to the values they name.
pub trait Workspace {
    /// Find a leaf container by id.
    fn find_container(&self, id: ContainerId) -> Option<&Container>;

    /// Find a leaf container by id, mutably.
    fn find_container_mut(&mut self, id: ContainerId) -> Option<ContainerMut<'_>>;

    /// Find a component by id in any leaf container.
    fn find_component(&self, id: ComponentId) -> Option<&Component>;

    /// Find a component by id in any leaf container, mutably.
    fn find_component_mut(&mut self, id: ComponentId) -> Option<ComponentMut<'_>>;
}

impl Workspace for Container {
    fn find_container(&self, id: ContainerId) -> Option<&Container> {
        (self.id() == id).then_some(self)
    }

    fn find_container_mut(&mut self, id: ContainerId) -> Option<ContainerMut<'_>> {
        (self.id() == id).then_some(ContainerMut::new(self))
    }

    fn find_component(&self, id: ComponentId) -> Option<&Component> {
        self.get(id)
    }

    fn find_component_mut(&mut self, id: ComponentId) -> Option<ComponentMut<'_>> {
        self.get_mut(id)
    }
}

impl Workspace for Board {
    fn find_container(&self, id: ContainerId) -> Option<&Container> {
        self.cells().find(|cell| cell.id() == id)
    }

    fn find_container_mut(&mut self, id: ContainerId) -> Option<ContainerMut<'_>> {
        self.cells_mut().find(|cell| cell.id() == id).map(ContainerMut::new)
    }

    fn find_component(&self, id: ComponentId) -> Option<&Component> {
        self.cells().find_map(|cell| cell.get(id))
    }

    fn find_component_mut(&mut self, id: ComponentId) -> Option<ComponentMut<'_>> {
        self.cells_mut().find_map(|cell| cell.get_mut(id))
    }
}

impl Workspace for AnyContainer {
    fn find_container(&self, id: ContainerId) -> Option<&Container> {
        match self {
            Self::Nested(nested) => nested.find_container(id),
            Self::Board(board) => board.find_container(id),
            leaf => leaf.as_container()?.find_container(id),
        }
    }

    fn find_container_mut(&mut self, id: ContainerId) -> Option<ContainerMut<'_>> {
        match self {
            Self::Nested(nested) => nested.find_container_mut(id),
            Self::Board(board) => board.find_container_mut(id),
            leaf => leaf.leaf_mut()?.find_container_mut(id),
        }
    }

    fn find_component(&self, id: ComponentId) -> Option<&Component> {
        match self {
            Self::Nested(nested) => nested.find_component(id),
            Self::Board(board) => board.find_component(id),
            leaf => leaf.as_container()?.find_component(id),
        }
    }

    fn find_component_mut(&mut self, id: ComponentId) -> Option<ComponentMut<'_>> {
        match self {
            Self::Nested(nested) => nested.find_component_mut(id),
            Self::Board(board) => board.find_component_mut(id),
            leaf => leaf.leaf_mut()?.get_mut(id),
        }
    }
}

impl Workspace for ContainerContainer {
    fn find_container(&self, id: ContainerId) -> Option<&Container> {
        self.list().iter().find_map(|child| child.find_container(id))
    }

    fn find_container_mut(&mut self, id: ContainerId) -> Option<ContainerMut<'_>> {
        self.children_mut().find_map(|child| child.find_container_mut(id))
    }

    fn find_component(&self, id: ComponentId) -> Option<&Component> {
        self.list().iter().find_map(|child| child.find_component(id))
    }

    fn find_component_mut(&mut self, id: ComponentId) -> Option<ComponentMut<'_>> {
        self.children_mut().find_map(|child| child.find_component_mut(id))
    }
}
