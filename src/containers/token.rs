//! Token pools and logging containers.
//!
//! Neither adds rules on top of [`Container`]. `LoggingContainer` reports
//! its operations at `info` level instead of `trace`. Like the card
//! containers, both keep their kind tag out of reach of callers.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::{Container, ContainerKind};
use crate::components::ComponentKind;
use crate::core::{Error, Result};

/// A pool of tokens or pieces.
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "Container")]
pub struct TokenContainer(Container);

impl TokenContainer {
    /// Create an empty token pool.
    #[must_use]
    pub fn new() -> Self {
        Self(Container::of_kind(ContainerKind::Tokens))
    }

    pub(crate) fn from_container(container: Container) -> Self {
        Self(container)
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self(self.0.with_name(name))
    }

    /// Add a kind to the allow-set.
    #[must_use]
    pub fn allow(self, kind: ComponentKind) -> Self {
        Self(self.0.allow(kind))
    }

    /// Set the maximum number of tokens.
    #[must_use]
    pub fn with_max_capacity(self, max: usize) -> Self {
        Self(self.0.with_max_capacity(max))
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

impl Default for TokenContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TokenContainer {
    type Target = Container;

    fn deref(&self) -> &Container {
        &self.0
    }
}

impl TryFrom<Container> for TokenContainer {
    type Error = Error;

    fn try_from(container: Container) -> Result<Self> {
        container.expect_kind(ContainerKind::Tokens).map(Self)
    }
}

/// A container that reports every operation at `info` level.
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "Container")]
pub struct LoggingContainer(Container);

impl LoggingContainer {
    /// Create an empty logging container.
    #[must_use]
    pub fn new() -> Self {
        Self(Container::of_kind(ContainerKind::Logging))
    }

    pub(crate) fn from_container(container: Container) -> Self {
        Self(container)
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self(self.0.with_name(name))
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

impl Default for LoggingContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for LoggingContainer {
    type Target = Container;

    fn deref(&self) -> &Container {
        &self.0
    }
}

impl TryFrom<Container> for LoggingContainer {
    type Error = Error;

    fn try_from(container: Container) -> Result<Self> {
        container.expect_kind(ContainerKind::Logging).map(Self)
    }
}
