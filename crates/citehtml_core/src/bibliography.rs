/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The bibliography style descriptor returned by the engine.
//!
//! Field names and the loose typing of `hangingindent` and
//! `second-field-align` follow the wire form CSL engines produce: both may
//! arrive as `false`, a number, or a string, and absence means "off".

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Second-field alignment mode for bibliography entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecondFieldAlign {
    /// Align the second field flush with a fixed left column.
    Flush,
    /// Push the first field into the left margin.
    Margin,
}

/// Layout parameters the engine resolves from the style's bibliography
/// section, plus the ordered entry identifiers.
///
/// Read-only; consumed once per bibliography render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BibliographyMeta {
    /// Vertical spacing between entries, in em.
    #[serde(rename = "entryspacing", default)]
    pub entry_spacing: f64,
    /// Line height inside an entry, in em.
    #[serde(rename = "linespacing", default)]
    pub line_spacing: f64,
    /// Whether entries hang-indent past the first line.
    #[serde(rename = "hangingindent", default, deserialize_with = "truthy")]
    pub hanging_indent: bool,
    #[serde(
        rename = "second-field-align",
        default,
        deserialize_with = "second_field_align"
    )]
    pub second_field_align: Option<SecondFieldAlign>,
    /// Width of the widest first field, in character widths.
    #[serde(rename = "maxoffset", default)]
    pub max_offset: f64,
    /// Markup opening the bibliography block.
    #[serde(rename = "bibstart", default)]
    pub bib_start: String,
    /// Markup closing the bibliography block.
    #[serde(rename = "bibend", default)]
    pub bib_end: String,
    /// Entry identifiers, aligned with the formatted entry texts.
    #[serde(default)]
    pub entry_ids: Vec<String>,
}

/// JS-style truthiness: absent, `null`, `false`, `0`, and `""` are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(is_truthy))
}

fn second_field_align<'de, D>(deserializer: D) -> Result<Option<SecondFieldAlign>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if s == "flush" => Some(SecondFieldAlign::Flush),
        Some(v) if is_truthy(&v) => Some(SecondFieldAlign::Margin),
        _ => None,
    })
}
