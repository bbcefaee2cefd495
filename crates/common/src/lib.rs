//! Shared types used across the item demo service.

pub mod types;

pub use types::{Item, ItemId};
