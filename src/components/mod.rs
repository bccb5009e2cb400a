//! Components: cards, pieces and plain game objects.

pub mod component;

pub use component::{
    Card, Component, ComponentKind, ComponentMut, StandardPlayingCard, TwoSidedCard, Variant,
};
