//! Core types: identifiers, errors, randomness and layout configuration.
//!
//! Everything here is game-agnostic. Games describe their table layout
//! with `LayoutConfig` rather than hand-assembling containers.

pub mod id;
pub mod error;
pub mod rng;
pub mod config;

pub use id::{ComponentId, ContainerId};
pub use error::{Error, Rejected, Result};
pub use rng::{GameRng, GameRngState, Shuffler};
pub use config::{BoardConfig, LayoutConfig, LeafConfig, NestedConfig};
