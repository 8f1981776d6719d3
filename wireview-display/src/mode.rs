//! Display modes: rendering hints for values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display mode for a value.
///
/// Purely descriptive; the renderer interprets it. `Auto` is equivalent to
/// leaving the mode unset: the renderer decides from the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Default, same as an unset mode.
    Auto,
    Plain,
    Datetime,
    Date,
    Duration,
    /// Render the value as a heading.
    AsTitle,
    Markdown,
    Json,
    InlineCode,
    Currency,
}
