//! `voicepick-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no storage, no speech).

pub mod context;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use context::RequestContext;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use value_object::ValueObject;
