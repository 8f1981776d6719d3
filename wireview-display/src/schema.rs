//! JSON schema description of details views for external tooling.
//!
//! Client-side validators and documentation generators consume this instead
//! of the Rust types. The document describes the serialized wire shape, not
//! the construction API. In particular, `fields` is required on output even
//! though a view can be constructed without supplying any.

use schemars::schema_for;
use schemars::JsonSchema;
use serde_json::{json, Map, Value};
use wireview_schema::DataModel;

use crate::descriptor::DetailsField;

/// Generate a JSON schema document for the wire shape of
/// [`Details<T>`](crate::Details).
///
/// Sub-schemas for the data model and the descriptor union are generated
/// with `schemars` and gathered under `definitions`.
pub fn details_schema<T>() -> Value
where
    T: DataModel + JsonSchema,
{
    let data_root = schema_for!(T);
    let fields_root = schema_for!(DetailsField);

    let mut definitions = Map::new();
    for (name, schema) in &data_root.definitions {
        definitions.insert(name.clone(), to_value(schema));
    }
    for (name, schema) in &fields_root.definitions {
        definitions.insert(name.clone(), to_value(schema));
    }
    definitions.insert(T::schema_name(), to_value(&data_root.schema));
    definitions.insert(
        <DetailsField as JsonSchema>::schema_name(),
        to_value(&fields_root.schema),
    );

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Details",
        "type": "object",
        "properties": {
            "data": { "$ref": format!("#/definitions/{}", T::schema_name()) },
            "fields": {
                "type": "array",
                "items": {
                    "$ref": format!("#/definitions/{}", <DetailsField as JsonSchema>::schema_name())
                }
            },
            "className": { "type": "string" },
            "type": { "const": "Details" }
        },
        "required": ["data", "fields", "type"],
        "additionalProperties": false,
        "definitions": Value::Object(definitions),
    })
}

fn to_value(schema: &impl serde::Serialize) -> Value {
    serde_json::to_value(schema).expect("generated schemas serialize to JSON")
}
