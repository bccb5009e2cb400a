//! Layout configuration.
//!
//! Games describe their table declaratively and build it at startup:
//! - `LeafConfig`: a component container (kind, name, allow-set, capacity)
//! - `NestedConfig`: a container of containers (allowed kinds, caps, children)
//! - `BoardConfig`: a grid, with a template applied to every cell
//!
//! Building runs every child through the normal `add` rules, so a layout
//! that breaks its own caps fails with the same errors as hand-written code.
//!
//! ```
//! use rust_tabletop::containers::ContainerKind;
//! use rust_tabletop::core::{LeafConfig, NestedConfig};
//!
//! let wing = NestedConfig::new()
//!     .with_name("left_wing")
//!     .allow(ContainerKind::Cards)
//!     .child(LeafConfig::new(ContainerKind::Cards).with_name("works").with_max_capacity(5))
//!     .child(LeafConfig::new(ContainerKind::Cards).with_name("materials"));
//!
//! let wing = wing.build().unwrap();
//! assert_eq!(wing.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::{Error, Result};
use crate::components::ComponentKind;
use crate::containers::{AnyContainer, Board, Container, ContainerContainer, ContainerKind, Topology};

/// Configuration for a component container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafConfig {
    /// Container variant. Must be a leaf kind.
    pub kind: ContainerKind,

    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,

    /// Allowed component kinds. Empty for unrestricted.
    #[serde(default)]
    pub allowed: Vec<ComponentKind>,

    /// Maximum components. `None` for unlimited.
    #[serde(default)]
    pub max_capacity: Option<usize>,
}

impl LeafConfig {
    /// Create an unrestricted config of the given kind.
    #[must_use]
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            name: None,
            allowed: Vec::new(),
            max_capacity: None,
        }
    }

    /// Set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a kind to the allow-set.
    #[must_use]
    pub fn allow(mut self, kind: ComponentKind) -> Self {
        self.allowed.push(kind);
        self
    }

    /// Set the capacity.
    #[must_use]
    pub fn with_max_capacity(mut self, max: usize) -> Self {
        self.max_capacity = Some(max);
        self
    }

    /// Build the plain container described here, ignoring the kind wrapper.
    fn container(&self) -> Result<Container> {
        if !self.kind.is_leaf() {
            return Err(Error::ContainerTypeNotAllowed { kind: self.kind });
        }
        let mut container = Container::of_kind(self.kind).allow_all(self.allowed.iter().copied());
        if let Some(name) = &self.name {
            container = container.with_name(name.clone());
        }
        if let Some(max) = self.max_capacity {
            container = container.with_max_capacity(max);
        }
        Ok(container)
    }

    /// Build the container.
    ///
    /// Fails with `ContainerTypeNotAllowed` if `kind` is not a leaf kind.
    pub fn build(&self) -> Result<AnyContainer> {
        self.container().map(AnyContainer::from_leaf)
    }
}

/// Configuration for a container of containers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedConfig {
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,

    /// Allowed child kinds. Empty for unrestricted.
    #[serde(default)]
    pub allowed: Vec<ContainerKind>,

    /// Per-kind caps.
    #[serde(default)]
    pub caps: Vec<(ContainerKind, Option<usize>)>,

    /// Children, in order.
    #[serde(default)]
    pub children: Vec<LayoutConfig>,
}

impl NestedConfig {
    /// Create an empty, unrestricted config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a kind to the allow-set.
    #[must_use]
    pub fn allow(mut self, kind: ContainerKind) -> Self {
        self.allowed.push(kind);
        self
    }

    /// Set the cap for one kind.
    #[must_use]
    pub fn with_cap(mut self, kind: ContainerKind, max: Option<usize>) -> Self {
        self.caps.push((kind, max));
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<LayoutConfig>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Build the container and all of its children.
    pub fn build(&self) -> Result<ContainerContainer> {
        let mut nested = ContainerContainer::new();
        if let Some(name) = &self.name {
            nested = nested.with_name(name.clone());
        }
        for &kind in &self.allowed {
            nested = nested.allow(kind);
        }
        for &(kind, max) in &self.caps {
            nested = nested.with_cap(kind, max);
        }
        for child in &self.children {
            nested.add(child.build()?)?;
        }
        Ok(nested)
    }
}

/// Configuration for a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,

    /// Nominal width.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Grid layout.
    #[serde(default)]
    pub topology: Topology,

    /// Allowed component kinds in every cell. Empty for unrestricted.
    #[serde(default)]
    pub cell_allowed: Vec<ComponentKind>,

    /// Capacity of every cell. `None` for unlimited.
    #[serde(default)]
    pub cell_capacity: Option<usize>,
}

impl BoardConfig {
    /// Create a config for a square board with unrestricted cells.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            name: None,
            width,
            height,
            topology: Topology::Square,
            cell_allowed: Vec::new(),
            cell_capacity: None,
        }
    }

    /// Set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Use the hex topology.
    #[must_use]
    pub fn hex(mut self) -> Self {
        self.topology = Topology::Hex;
        self
    }

    /// Allow a component kind in every cell.
    #[must_use]
    pub fn allow_in_cells(mut self, kind: ComponentKind) -> Self {
        self.cell_allowed.push(kind);
        self
    }

    /// Limit every cell to `max` components.
    #[must_use]
    pub fn with_cell_capacity(mut self, max: usize) -> Self {
        self.cell_capacity = Some(max);
        self
    }

    /// Build the board.
    pub fn build(&self) -> Board {
        let board = Board::from_fn(self.width, self.height, self.topology, |_, _| {
            let cell = Container::new().allow_all(self.cell_allowed.iter().copied());
            match self.cell_capacity {
                Some(max) => cell.with_max_capacity(max),
                None => cell,
            }
        });
        match &self.name {
            Some(name) => board.with_name(name.clone()),
            None => board,
        }
    }
}

/// Any layout node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutConfig {
    /// Component container.
    Leaf(LeafConfig),
    /// Container of containers.
    Nested(NestedConfig),
    /// Grid of containers.
    Board(BoardConfig),
}

impl LayoutConfig {
    /// Build the container tree.
    pub fn build(&self) -> Result<AnyContainer> {
        match self {
            Self::Leaf(leaf) => leaf.build(),
            Self::Nested(nested) => nested.build().map(AnyContainer::Nested),
            Self::Board(board) => Ok(AnyContainer::Board(board.build())),
        }
    }
}

impl From<LeafConfig> for LayoutConfig {
    fn from(config: LeafConfig) -> Self {
        Self::Leaf(config)
    }
}

impl From<NestedConfig> for LayoutConfig {
    fn from(config: NestedConfig) -> Self {
        Self::Nested(config)
    }
}

impl From<BoardConfig> for LayoutConfig {
    fn from(config: BoardConfig) -> Self {
        Self::Board(config)
    }
}
