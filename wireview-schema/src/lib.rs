//! Model introspection and shared wire types
//!
//! `wireview-schema` is a standalone, schema-only crate. It knows nothing about
//! display components. Consumers implement [`DataModel`] for their record
//! types and the component crates read the declared attribute metadata.
//!
//! - **Schema-only**: owns attribute metadata, not attribute values
//! - **Declaration order**: stored attributes first, then computed, each group
//!   in the order the type declares them
//! - **Opaque payloads**: [`AnyEvent`] and [`ClassName`] are carried verbatim
//!   on the wire; interpreting them is the renderer's job

pub mod class_name;
pub mod events;
pub mod model;

pub use class_name::ClassName;
pub use events::AnyEvent;
pub use model::{DataModel, FieldMeta};

/// Arbitrary JSON-serializable data carried inline by a component.
pub type JsonData = serde_json::Value;
