//! Display descriptors: lookups into a data model and inline values.
//!
//! A details view renders an ordered list of descriptors. Each one is either
//! a [`DisplayLookup`] (a reference to a named attribute of the data model)
//! or a [`Display`] (an inline value carried on the wire itself). The two
//! share the optional `mode`, `title` and `onClick` attributes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wireview_schema::{AnyEvent, JsonData};

use crate::error::{DisplayError, Result};
use crate::mode::DisplayMode;

/// Description of how to display a value looked up from a data model
/// attribute, either in a table or a detail view.
///
/// Deserialization enforces the structural invariants: `field` must be
/// non-empty and `tableWidthPercent`, when present, must lie in `[0, 100]`.
/// Unknown wire keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLookup {
    /// Display mode for the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<DisplayMode>,
    /// Title to display for the value. Left unset, it is inherited from the
    /// data model's declared title during resolution, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Event to trigger when the value is clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<AnyEvent>,
    /// Attribute of the data model to display.
    pub field: String,
    /// Percentage width, 0 to 100. Specific to tables.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 100))]
    pub table_width_percent: Option<u8>,
}

impl DisplayLookup {
    /// Create a lookup for the named attribute. The name must be non-empty.
    pub fn new(field: impl Into<String>) -> Result<Self> {
        let field = field.into();
        if field.is_empty() {
            return Err(DisplayError::EmptyFieldName);
        }
        Ok(Self {
            mode: None,
            title: None,
            on_click: None,
            field,
            table_width_percent: None,
        })
    }

    /// Set the display mode.
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the click event.
    pub fn with_on_click(mut self, event: AnyEvent) -> Self {
        self.on_click = Some(event);
        self
    }

    /// Set the table width percentage. Values above 100 are rejected, not
    /// clamped.
    pub fn with_table_width_percent(mut self, percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(DisplayError::TableWidthOutOfRange {
                value: i64::from(percent),
            });
        }
        self.table_width_percent = Some(percent);
        Ok(self)
    }

    /// Check the structural invariants. Descriptors assembled field-by-field
    /// are re-checked here before a details view is built.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.field.is_empty() {
            return Err(DisplayError::EmptyFieldName);
        }
        if let Some(percent) = self.table_width_percent {
            if percent > 100 {
                return Err(DisplayError::TableWidthOutOfRange {
                    value: i64::from(percent),
                });
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for DisplayLookup {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct DisplayLookupHelper {
            #[serde(default)]
            mode: Option<DisplayMode>,
            #[serde(default)]
            title: Option<String>,
            #[serde(default)]
            on_click: Option<AnyEvent>,
            field: String,
            #[serde(default)]
            table_width_percent: Option<i64>,
        }

        let helper = DisplayLookupHelper::deserialize(deserializer)?;

        if helper.field.is_empty() {
            return Err(Error::custom(DisplayError::EmptyFieldName));
        }

        let table_width_percent = helper
            .table_width_percent
            .map(|value| {
                if !(0..=100).contains(&value) {
                    return Err(Error::custom(DisplayError::TableWidthOutOfRange { value }));
                }
                Ok(value as u8)
            })
            .transpose()?;

        Ok(DisplayLookup {
            mode: helper.mode,
            title: helper.title,
            on_click: helper.on_click,
            field: helper.field,
            table_width_percent,
        })
    }
}

/// Wire discriminator for inline display components. Always `"Display"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum DisplayType {
    #[default]
    Display,
}

/// Description of how to display an inline value, either in a table or a
/// detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Display {
    /// Display mode for the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<DisplayMode>,
    /// Title to display for the value. Never inferred, since there is no metadata
    /// to inherit from for an inline value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Event to trigger when the value is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<AnyEvent>,
    /// Value to display.
    pub value: JsonData,
    /// The type of the component. Always `"Display"`.
    #[serde(rename = "type", default)]
    pub component_type: DisplayType,
}

impl Display {
    /// Create an inline display for the given value.
    pub fn new(value: impl Into<JsonData>) -> Self {
        Self {
            mode: None,
            title: None,
            on_click: None,
            value: value.into(),
            component_type: DisplayType::Display,
        }
    }

    /// Set the display mode.
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the click event.
    pub fn with_on_click(mut self, event: AnyEvent) -> Self {
        self.on_click = Some(event);
        self
    }
}

/// A single entry in a details view: a lookup into the data model or an
/// inline value.
///
/// The union is untagged on the wire: a lookup is recognized by its `field`
/// key, an inline display by `value` plus its `type: "Display"` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DetailsField {
    /// Reference to a named attribute of the data model.
    Lookup(DisplayLookup),
    /// Inline value carried on the wire.
    Display(Display),
}

impl DetailsField {
    /// The title, if one is set.
    pub fn title(&self) -> Option<&str> {
        match self {
            DetailsField::Lookup(lookup) => lookup.title.as_deref(),
            DetailsField::Display(display) => display.title.as_deref(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            DetailsField::Lookup(lookup) => lookup.validate(),
            // Inline values have no structural constraints of their own.
            DetailsField::Display(_) => Ok(()),
        }
    }
}

impl From<DisplayLookup> for DetailsField {
    fn from(lookup: DisplayLookup) -> Self {
        DetailsField::Lookup(lookup)
    }
}

impl From<Display> for DetailsField {
    fn from(display: Display) -> Self {
        DetailsField::Display(display)
    }
}
