/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The boundary contract with the citation-style engine.
//!
//! The engine is driven one citation cluster at a time, in document order.
//! Each registration carries the full pre-context (every cluster registered
//! so far) so the engine can apply disambiguation and ibid rules, and the
//! engine answers with every cluster it had to (re-)render: the newly added
//! one last, preceded by any earlier clusters whose formatting changed.

use crate::bibliography::BibliographyMeta;
use crate::item::{Item, ItemStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure inside the style engine, or an engine result whose status marks
/// the operation as failed.
#[derive(Debug, Error)]
#[error("style engine failure: {0}")]
pub struct EngineError(pub String);

/// Whether the active style places citations inline or in notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationMode {
    InText,
    Note,
}

/// One reference inside a citation cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterItem {
    pub id: String,
    /// Render only the author portion of the reference.
    #[serde(rename = "author-only", default, skip_serializing_if = "std::ops::Not::not")]
    pub author_only: bool,
}

impl ClusterItem {
    pub fn new(id: impl Into<String>) -> Self {
        ClusterItem {
            id: id.into(),
            author_only: false,
        }
    }
}

/// A citation cluster registration request.
///
/// Constructed per call and not retained; the engine keeps its own record
/// under `cluster_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRequest {
    /// Bookkeeping identifier: the reference ids, each followed by `;`,
    /// then the note index.
    pub cluster_id: String,
    /// 1-based position of the citation in the document's note order.
    pub note_index: usize,
    /// References cited together at this point, in output order.
    pub items: Vec<ClusterItem>,
}

impl ClusterRequest {
    /// Build a registration request for `ids` under `note_index`.
    pub fn new(note_index: usize, ids: &[String]) -> Self {
        let mut cluster_id = String::new();
        for id in ids {
            cluster_id.push_str(id);
            cluster_id.push(';');
        }
        cluster_id.push_str(&note_index.to_string());

        ClusterRequest {
            cluster_id,
            note_index,
            items: ids.iter().map(ClusterItem::new).collect(),
        }
    }

    /// Build a one-off author-only query for a single reference.
    ///
    /// Uses note index 0 and is issued with empty context on both sides, so
    /// it never participates in disambiguation or ibid decisions.
    pub fn author_only(id: &str) -> Self {
        ClusterRequest {
            cluster_id: format!("{};0", id),
            note_index: 0,
            items: vec![ClusterItem {
                id: id.to_string(),
                author_only: true,
            }],
        }
    }
}

/// A cluster the engine (re-)rendered during one registration call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedEntry {
    /// 0-based position in the registration history. Position 0 is the
    /// first-ever cluster.
    pub position: usize,
    /// Formatted cluster text; multiple references are joined by the
    /// engine's reserved delimiter character.
    pub text: String,
    /// Semicolon-joined reference ids, aligned with `text`.
    pub ids: String,
}

/// A prior registration as the engine sees it: the retained cluster
/// signature and its 1-based note number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub signature: String,
    pub note_number: usize,
}

/// Lookup callbacks handed to the engine at construction.
///
/// Owns the item store and the locale text for the whole session; the
/// engine queries both while formatting.
#[derive(Debug, Clone)]
pub struct EngineSupport {
    items: ItemStore,
    locale: String,
}

impl EngineSupport {
    pub fn new(items: ItemStore, locale_text: impl Into<String>) -> Self {
        EngineSupport {
            items,
            locale: locale_text.into(),
        }
    }

    /// The locale text. The same text is returned for every requested tag.
    pub fn retrieve_locale(&self, _lang: &str) -> &str {
        &self.locale
    }

    /// Look up an item; `None` marks the reference as unresolvable.
    pub fn retrieve_item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }
}

/// The citation-style engine driven by the rendering session.
pub trait StyleEngine {
    /// Register a cluster against the surrounding context and return every
    /// cluster that needed (re-)rendering, the newly added one last.
    fn process_citation_cluster(
        &mut self,
        request: &ClusterRequest,
        pre: &[ContextEntry],
        post: &[ContextEntry],
    ) -> Result<Vec<RenderedEntry>, EngineError>;

    /// Produce the bibliography for everything cited so far: the style
    /// descriptor and the formatted entry texts, in final order.
    fn make_bibliography(&mut self) -> Result<(BibliographyMeta, Vec<String>), EngineError>;

    /// The rendering mode of the resolved style configuration.
    fn mode(&self) -> CitationMode;
}
