/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-reference hyperlinking of formatted cluster text.

use crate::error::RenderError;
use std::fmt::Write;

/// The delimiter the engine inserts between the formatted references of one
/// cluster (unit separator, U+001F).
pub const REFERENCE_DELIMITER: char = '\u{1f}';

/// Split a formatted cluster into one self-linking anchor per reference.
///
/// `text` holds the formatted references joined by `delimiter`; `ids` is
/// the matching semicolon-joined id list. Each aligned pair becomes an
/// anchor targeting `#<id>`, with inherited color and no underline so the
/// link does not disturb the citation typography. Anchors are concatenated
/// without separator, since the engine's delimiter already sits inside the
/// formatted text it delimits.
///
/// A count mismatch between fragments and ids means the engine/adapter
/// contract was broken upstream; it is not user-recoverable.
pub fn split_into_anchors(text: &str, ids: &str, delimiter: char) -> Result<String, RenderError> {
    let fragments: Vec<&str> = text.split(delimiter).collect();
    let id_list: Vec<&str> = ids.split(';').collect();

    if fragments.len() != id_list.len() {
        return Err(RenderError::SplitAlignment {
            fragments: fragments.len(),
            ids: id_list.len(),
        });
    }

    let mut html = String::new();
    for (fragment, id) in fragments.iter().zip(&id_list) {
        let _ = write!(
            html,
            r##"<a href="#{}" style="color: inherit; text-decoration: none">{}</a>"##,
            id, fragment
        );
    }
    Ok(html)
}
