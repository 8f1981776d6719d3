//! Attribute metadata for structured record types.
//!
//! A data model declares, for each of its attributes, a wire name and an
//! optional human-readable title. The metadata is declared once per type as
//! `&'static` slices, so lookups never allocate per instance.

use serde::Serialize;

/// Declared metadata for a single attribute of a data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Attribute name as it appears on the wire.
    pub name: &'static str,
    /// Human-readable title declared on the attribute, if any.
    pub title: Option<&'static str>,
}

impl FieldMeta {
    /// Metadata for an attribute with no declared title.
    pub const fn named(name: &'static str) -> Self {
        Self { name, title: None }
    }

    /// Metadata for an attribute with a declared title.
    pub const fn titled(name: &'static str, title: &'static str) -> Self {
        Self {
            name,
            title: Some(title),
        }
    }
}

/// A structured record type whose attributes can be introspected for display.
///
/// Implementors declare their stored attributes and, separately, any computed
/// (derived, read-only) attributes. Both slices preserve declaration order.
/// The `Serialize` supertrait lets views put the record itself on the wire.
pub trait DataModel: Serialize {
    /// Stored attribute metadata, in declaration order.
    fn stored_fields() -> &'static [FieldMeta];

    /// Computed attribute metadata, in declaration order. Empty by default.
    fn computed_fields() -> &'static [FieldMeta] {
        &[]
    }

    /// All displayable attributes: stored first, then computed.
    fn display_fields() -> Vec<FieldMeta> {
        let mut fields = Vec::with_capacity(Self::stored_fields().len() + Self::computed_fields().len());
        fields.extend_from_slice(Self::stored_fields());
        fields.extend_from_slice(Self::computed_fields());
        fields
    }
}
