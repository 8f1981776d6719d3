//! Display component schemas for server-driven UI
//!
//! A backend describes what to show as typed data; a renderer on the other
//! side of the wire turns it into widgets. This crate owns the display
//! family of components:
//!
//! - **[`DisplayLookup`]** - how to display a value looked up from a named
//!   attribute of a data model
//! - **[`Display`]** - how to display an inline value carried on the wire
//! - **[`Details`]** - a data model plus an ordered list of the above
//!
//! Constructing a [`Details`] view resolves its descriptor list once: with no
//! descriptors supplied, one lookup per declared attribute of the model is
//! synthesized; with descriptors supplied, unset titles are inherited from
//! the model's declared titles and everything else is kept exactly as given.
//!
//! ## Basic Usage
//!
//! ```rust
//! use serde::Serialize;
//! use wireview_display::Details;
//! use wireview_schema::{DataModel, FieldMeta};
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl DataModel for User {
//!     fn stored_fields() -> &'static [FieldMeta] {
//!         const FIELDS: &[FieldMeta] = &[FieldMeta::titled("name", "Name"), FieldMeta::named("age")];
//!         FIELDS
//!     }
//! }
//!
//! let details = Details::new(User { name: "Ada".into(), age: 36 });
//! assert_eq!(details.fields().len(), 2);
//! assert_eq!(details.fields()[0].title(), Some("Name"));
//! ```
//!
//! The serialized wire shape and the JSON schema document produced by
//! [`details_schema`] both describe the post-resolution state: `fields` is
//! always present on output, even though it is optional at construction.

pub mod descriptor;
pub mod details;
pub mod error;
pub mod mode;
pub mod schema;

pub use descriptor::{Display, DisplayLookup, DisplayType, DetailsField};
pub use details::{Details, DetailsType};
pub use error::{DisplayError, Result};
pub use mode::DisplayMode;
pub use schema::details_schema;

// Re-export the introspection layer consumers implement for their models.
pub use wireview_schema::{AnyEvent, ClassName, DataModel, FieldMeta, JsonData};
