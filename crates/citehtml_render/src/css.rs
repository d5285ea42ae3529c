/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Generated style blocks for bibliography and footnote layout.
//!
//! Both functions are pure: the same descriptor always yields the same
//! style text. The blocks are scoped so they can sit directly inside the
//! fragment they style.

use citehtml_core::{BibliographyMeta, SecondFieldAlign};

/// Scoped CSS for bibliography entries, derived from the engine's style
/// descriptor.
///
/// An `entryspacing` of exactly zero still gets a minimal `0.1em` padding
/// so adjacent entries do not visually merge.
pub fn bibliography_css(meta: &BibliographyMeta) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("<style scoped>".into());
    lines.push(".csl-entry { ".into());
    if meta.entry_spacing == 0.0 {
        lines.push("padding-bottom: 0.1em;".into());
    } else {
        lines.push(format!("padding-bottom: {}em;", meta.entry_spacing));
    }
    lines.push(format!("line-height: {}em;", meta.line_spacing));
    if meta.hanging_indent {
        lines.push("padding-left: 1.3em;".into());
        lines.push("text-indent: -1.3em;".into());
    }
    lines.push("}".into());

    match meta.second_field_align {
        Some(SecondFieldAlign::Flush) => {
            lines.push(".csl-left-margin { ".into());
            lines.push("position: absolute;".into());
            lines.push("}".into());
            lines.push(".csl-right-inline { ".into());
            lines.push(format!("margin-left: {}ch", meta.max_offset));
            lines.push("}".into());
        }
        Some(SecondFieldAlign::Margin) => {
            lines.push(".csl-left-margin { ".into());
            lines.push("text-align: right;".into());
            lines.push("position: absolute;".into());
            lines.push("transform-origin: top right;".into());
            lines.push("transform: translate(-100%);".into());
            lines.push("margin-left: -1ch;".into());
            lines.push("}".into());
        }
        None => {}
    }

    lines.push("</style>".into());
    lines.join("\n")
}

/// Fixed scoped rule pushing footnote numerals into the left margin.
pub fn footnote_css() -> String {
    [
        "<style scoped>",
        ".footnote-left-margin { ",
        "text-align: right;",
        "position: absolute;",
        "transform-origin: top right;",
        "transform: translate(-100%);",
        "margin-left: -1ch;",
        "}",
        "</style>",
    ]
    .join("\n")
}
