//! Core type definitions for statecraft.
//!
//! This crate defines the fundamental, domain-agnostic types shared by the
//! rule, entity, and persistence layers:
//! - Parent and child identifiers (UUID v7)
//! - Property descriptors with semantic field typing
//! - The opaque optimistic-concurrency token
//! - Raw child records as returned by a data-access backend
//!
//! Domain-specific entity models (which fields exist, which rules apply)
//! belong to the applications that register them, not here.

mod descriptor;
mod ids;
mod record;
mod token;

pub use descriptor::{FieldType, PropertyDescriptor};
pub use ids::{ChildId, ChildKey, ParentId};
pub use record::ChildRecord;
pub use token::ConcurrencyToken;
