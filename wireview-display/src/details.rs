//! Details views: a data model plus the descriptors that display it.
//!
//! Construction resolves the descriptor list once, synchronously:
//!
//! - no descriptors given: one lookup per declared attribute of the model,
//!   stored attributes first, declaration order within each group
//! - descriptors given: kept exactly as supplied (order and length), with
//!   unset lookup titles inherited from the model's declared titles
//!
//! The view is frozen after construction; fields are read through accessors.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::Serialize;
use tracing::debug;
use wireview_schema::{ClassName, DataModel};

use crate::descriptor::{DetailsField, DisplayLookup};
use crate::error::Result;

/// Wire discriminator for details views. Always `"Details"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, JsonSchema)]
pub enum DetailsType {
    #[default]
    Details,
}

/// Details associated with displaying a data model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Details<T: DataModel> {
    /// Data model to display.
    data: T,
    /// Resolved display descriptors. Always populated, even when the caller
    /// supplied none.
    fields: Vec<DetailsField>,
    /// Optional class name to apply to the details component.
    #[serde(skip_serializing_if = "Option::is_none")]
    class_name: Option<ClassName>,
    /// The type of the component. Always `"Details"`.
    #[serde(rename = "type")]
    component_type: DetailsType,
}

impl<T: DataModel> Details<T> {
    /// Build a view displaying every declared attribute of the model.
    ///
    /// Stored attributes come first, then computed ones, each group in
    /// declaration order. Attributes with a declared title carry it over;
    /// the rest keep an unset title for the renderer to derive from the
    /// field name.
    pub fn new(data: T) -> Self {
        let fields = synthesized_fields::<T>();
        debug!(
            fields = fields.len(),
            model = std::any::type_name::<T>(),
            "synthesized display fields"
        );
        Self {
            data,
            fields,
            class_name: None,
            component_type: DetailsType::Details,
        }
    }

    /// Build a view from caller-chosen descriptors.
    ///
    /// The list is used exactly as supplied: no insertion, removal or
    /// reordering. Every descriptor is checked against its structural
    /// invariants first; any violation aborts construction. Lookups without
    /// a title inherit the declared title of the stored attribute they name,
    /// when there is one. A lookup naming no declared attribute passes
    /// through unchanged, so virtual fields can be displayed.
    pub fn with_fields(data: T, fields: Vec<DetailsField>) -> Result<Self> {
        for field in &fields {
            field.validate()?;
        }
        let fields = inherit_titles::<T>(fields);
        Ok(Self {
            data,
            fields,
            class_name: None,
            component_type: DetailsType::Details,
        })
    }

    /// Set the class name to apply to the details component.
    pub fn with_class_name(mut self, class_name: impl Into<ClassName>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Access the data model.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Access the resolved descriptors.
    pub fn fields(&self) -> &[DetailsField] {
        &self.fields
    }

    /// Access the class name, if one is set.
    pub fn class_name(&self) -> Option<&ClassName> {
        self.class_name.as_ref()
    }
}

/// One lookup per declared attribute of `T`, stored before computed.
fn synthesized_fields<T: DataModel>() -> Vec<DetailsField> {
    T::display_fields()
        .into_iter()
        .map(|meta| {
            DetailsField::Lookup(DisplayLookup {
                mode: None,
                title: meta.title.map(ToOwned::to_owned),
                on_click: None,
                field: meta.name.to_owned(),
                table_width_percent: None,
            })
        })
        .collect()
}

/// Fill unset lookup titles from the model's declared titles.
///
/// Only stored attributes contribute titles here; computed attributes are
/// displayable but never a title source for explicit lookups. Titles already
/// set are left alone, as are inline displays.
fn inherit_titles<T: DataModel>(mut fields: Vec<DetailsField>) -> Vec<DetailsField> {
    let titles: HashMap<&str, &str> = T::stored_fields()
        .iter()
        .filter_map(|meta| meta.title.map(|title| (meta.name, title)))
        .collect();

    let mut inherited = 0usize;
    for field in &mut fields {
        if let DetailsField::Lookup(lookup) = field {
            if lookup.title.is_none() {
                if let Some(title) = titles.get(lookup.field.as_str()) {
                    lookup.title = Some((*title).to_owned());
                    inherited += 1;
                }
            }
        }
    }

    if inherited > 0 {
        debug!(inherited, "inherited display titles from model metadata");
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Display;
    use crate::error::DisplayError;
    use crate::mode::DisplayMode;
    use serde_json::json;
    use wireview_schema::FieldMeta;

    #[derive(Debug, Serialize)]
    struct Invoice {
        number: String,
        total: f64,
        issued_on: String,
    }

    impl DataModel for Invoice {
        fn stored_fields() -> &'static [FieldMeta] {
            const FIELDS: &[FieldMeta] = &[
                FieldMeta::titled("number", "Invoice Number"),
                FieldMeta::titled("total", "Total"),
                FieldMeta::named("issued_on"),
            ];
            FIELDS
        }

        fn computed_fields() -> &'static [FieldMeta] {
            const FIELDS: &[FieldMeta] = &[FieldMeta::titled("overdue", "Overdue")];
            FIELDS
        }
    }

    fn invoice() -> Invoice {
        Invoice {
            number: "INV-0042".into(),
            total: 99.5,
            issued_on: "2024-03-01".into(),
        }
    }

    #[test]
    fn new_synthesizes_one_lookup_per_attribute() {
        let details = Details::new(invoice());
        let names: Vec<&str> = details
            .fields()
            .iter()
            .map(|f| match f {
                DetailsField::Lookup(l) => l.field.as_str(),
                DetailsField::Display(_) => panic!("synthesized fields are always lookups"),
            })
            .collect();
        // Stored attributes first, then computed, declaration order kept.
        assert_eq!(names, ["number", "total", "issued_on", "overdue"]);
    }

    #[test]
    fn synthesized_lookups_carry_declared_titles() {
        let details = Details::new(invoice());
        let titles: Vec<Option<&str>> = details.fields().iter().map(|f| f.title()).collect();
        assert_eq!(
            titles,
            [
                Some("Invoice Number"),
                Some("Total"),
                None,
                Some("Overdue"),
            ]
        );
    }

    #[test]
    fn explicit_fields_keep_length_and_order() {
        let fields = vec![
            DetailsField::from(DisplayLookup::new("total").unwrap()),
            DetailsField::from(Display::new(json!("n/a"))),
            DetailsField::from(DisplayLookup::new("number").unwrap()),
        ];
        let details = Details::with_fields(invoice(), fields).unwrap();
        assert_eq!(details.fields().len(), 3);

        // Same order, same kinds; only titles may have been filled in.
        let kinds: Vec<&str> = details
            .fields()
            .iter()
            .map(|f| match f {
                DetailsField::Lookup(l) => l.field.as_str(),
                DetailsField::Display(_) => "<display>",
            })
            .collect();
        assert_eq!(kinds, ["total", "<display>", "number"]);
    }

    #[test]
    fn unset_titles_inherit_from_stored_attributes() {
        let fields = vec![DetailsField::from(DisplayLookup::new("total").unwrap())];
        let details = Details::with_fields(invoice(), fields).unwrap();
        assert_eq!(details.fields()[0].title(), Some("Total"));
    }

    #[test]
    fn existing_titles_are_not_overwritten() {
        let fields = vec![DetailsField::from(
            DisplayLookup::new("total").unwrap().with_title("Amount Due"),
        )];
        let details = Details::with_fields(invoice(), fields).unwrap();
        assert_eq!(details.fields()[0].title(), Some("Amount Due"));
    }

    #[test]
    fn untitled_attributes_stay_untitled() {
        let fields = vec![DetailsField::from(DisplayLookup::new("issued_on").unwrap())];
        let details = Details::with_fields(invoice(), fields).unwrap();
        assert_eq!(details.fields()[0].title(), None);
    }

    #[test]
    fn unknown_field_passes_through_unresolved() {
        // Virtual fields are allowed: no error, title stays unset.
        let fields = vec![DetailsField::from(DisplayLookup::new("balance").unwrap())];
        let details = Details::with_fields(invoice(), fields).unwrap();
        match &details.fields()[0] {
            DetailsField::Lookup(l) => {
                assert_eq!(l.field, "balance");
                assert_eq!(l.title, None);
            }
            DetailsField::Display(_) => panic!("expected a lookup"),
        }
    }

    #[test]
    fn computed_attributes_are_not_a_title_source() {
        // "overdue" is computed and titled, but explicit lookups only consult
        // stored attributes.
        let fields = vec![DetailsField::from(DisplayLookup::new("overdue").unwrap())];
        let details = Details::with_fields(invoice(), fields).unwrap();
        assert_eq!(details.fields()[0].title(), None);
    }

    #[test]
    fn inline_display_titles_are_never_inferred() {
        let fields = vec![DetailsField::from(Display::new(json!(true)))];
        let details = Details::with_fields(invoice(), fields).unwrap();
        assert_eq!(details.fields()[0].title(), None);
    }

    #[test]
    fn invalid_descriptor_aborts_construction() {
        // Assembled field-by-field, bypassing the checked builder.
        let lookup = DisplayLookup {
            mode: None,
            title: None,
            on_click: None,
            field: "total".into(),
            table_width_percent: Some(150),
        };
        let err = Details::with_fields(invoice(), vec![lookup.into()]).unwrap_err();
        assert!(matches!(
            err,
            DisplayError::TableWidthOutOfRange { value: 150 }
        ));

        let empty = DisplayLookup {
            mode: None,
            title: None,
            on_click: None,
            field: String::new(),
            table_width_percent: None,
        };
        let err = Details::with_fields(invoice(), vec![empty.into()]).unwrap_err();
        assert!(matches!(err, DisplayError::EmptyFieldName));
    }

    #[test]
    fn other_attributes_survive_resolution_untouched() {
        let event = wireview_schema::AnyEvent::new(json!({"type": "go-to", "url": "/x"}));
        let fields = vec![DetailsField::from(
            DisplayLookup::new("total")
                .unwrap()
                .with_mode(DisplayMode::Currency)
                .with_on_click(event.clone())
                .with_table_width_percent(30)
                .unwrap(),
        )];
        let details = Details::with_fields(invoice(), fields).unwrap();
        match &details.fields()[0] {
            DetailsField::Lookup(l) => {
                assert_eq!(l.mode, Some(DisplayMode::Currency));
                assert_eq!(l.on_click, Some(event));
                assert_eq!(l.table_width_percent, Some(30));
                assert_eq!(l.title, Some("Total".into()));
            }
            DetailsField::Display(_) => panic!("expected a lookup"),
        }
    }

    #[test]
    fn empty_explicit_list_stays_empty() {
        // An empty list is caller intent, not absence. Nothing is synthesized.
        let details = Details::with_fields(invoice(), Vec::new()).unwrap();
        assert!(details.fields().is_empty());
    }

    #[test]
    fn wire_shape() {
        let details = Details::new(invoice()).with_class_name("invoice-panel");
        let wire = serde_json::to_value(&details).unwrap();

        assert_eq!(wire["type"], json!("Details"));
        assert_eq!(wire["className"], json!("invoice-panel"));
        assert_eq!(wire["data"]["number"], json!("INV-0042"));
        assert_eq!(
            wire["fields"][0],
            json!({"field": "number", "title": "Invoice Number"})
        );
        assert_eq!(wire["fields"][2], json!({"field": "issued_on"}));
    }

    #[test]
    fn class_name_is_omitted_when_unset() {
        let wire = serde_json::to_value(Details::new(invoice())).unwrap();
        assert!(wire.get("className").is_none());
    }
}
