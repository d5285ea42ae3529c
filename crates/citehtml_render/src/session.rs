/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-document rendering session.
//!
//! One session drives one document render. It owns the engine, the ordered
//! registration history, and the result sequences; there is exactly one
//! logical writer, and clusters must be registered in document order
//! because the engine applies disambiguation and ibid rules against the
//! accumulated pre-context.
//!
//! Registration is atomic: the history record and result slots are only
//! written after the engine call succeeded and every returned entry was
//! split cleanly, so a failed call leaves the session unchanged.

use crate::css;
use crate::error::RenderError;
use crate::split::{self, REFERENCE_DELIMITER};
use citehtml_core::{
    CitationMode, ClusterRequest, ContextEntry, EngineError, EngineSupport, ItemStore,
    RenderedEntry, StyleEngine,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Session-level configuration, resolved once at initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Whether the output target manages footnote placement itself (paged
    /// media). Citations are then only marked as footnotes, not laid out.
    pub paginated: bool,
    /// The delimiter the engine inserts between the formatted references
    /// of one cluster.
    pub reference_delimiter: char,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            paginated: false,
            reference_delimiter: REFERENCE_DELIMITER,
        }
    }
}

/// The ordered history of registered clusters.
///
/// `pre` grows by exactly one record per successful registration,
/// regardless of how many entries the engine returned for the call. `post`
/// stays empty: clusters arrive in document order, so nothing ever follows
/// the newest one.
#[derive(Debug, Default)]
struct ClusterHistory {
    pre: Vec<ContextEntry>,
    post: Vec<ContextEntry>,
}

impl ClusterHistory {
    /// Append the record for a freshly registered cluster.
    fn record(&mut self, newest: &RenderedEntry) {
        self.pre.push(ContextEntry {
            signature: newest.ids.clone(),
            note_number: self.pre.len() + 1,
        });
    }

    fn len(&self) -> usize {
        self.pre.len()
    }
}

/// A per-document citation rendering session.
///
/// Construct with [`RenderSession::initialize`], feed citation clusters in
/// document order through [`RenderSession::render_clusters`], then pull the
/// footnote and bibliography blocks once the body is assembled.
pub struct RenderSession<E> {
    engine: E,
    mode: CitationMode,
    paginated: bool,
    reference_delimiter: char,
    history: ClusterHistory,
    /// One HTML fragment per registered cluster, index = note index - 1.
    citations: Vec<String>,
    /// Footnote bodies, parallel to `citations`. Only populated in note
    /// mode with non-paginated output.
    footnotes: Vec<String>,
    /// 1-based note index of the next cluster.
    next_note: usize,
}

impl<E: StyleEngine> RenderSession<E> {
    /// Build the item store, hand the engine its lookup callbacks, and
    /// resolve the citation mode for the whole session.
    ///
    /// `build_engine` receives the support object (item and locale
    /// callbacks), the style text, and the paginated flag, and returns the
    /// engine instance.
    pub fn initialize<F>(
        items_json: &str,
        locale_text: &str,
        style_text: &str,
        options: SessionOptions,
        build_engine: F,
    ) -> Result<Self, RenderError>
    where
        F: FnOnce(EngineSupport, &str, bool) -> Result<E, EngineError>,
    {
        let items = ItemStore::from_json(items_json)?;
        let support = EngineSupport::new(items, locale_text);
        let engine = build_engine(support, style_text, options.paginated)?;
        let mode = engine.mode();

        Ok(RenderSession {
            engine,
            mode,
            paginated: options.paginated,
            reference_delimiter: options.reference_delimiter,
            history: ClusterHistory::default(),
            citations: Vec::new(),
            footnotes: Vec::new(),
            next_note: 1,
        })
    }

    /// Register each cluster in document order and return the accumulated
    /// citation results, one HTML fragment per registered cluster.
    ///
    /// Fragments for earlier clusters may have been rewritten in place when
    /// a later registration changed their disambiguated form; the sequence
    /// length only ever grows by one per cluster.
    pub fn render_clusters(
        &mut self,
        clusters: &[Vec<String>],
    ) -> Result<Vec<String>, RenderError> {
        for ids in clusters {
            self.register_cluster(ids)?;
        }
        Ok(self.citations.clone())
    }

    /// Render just the author portion of one reference, outside the main
    /// citation flow. Leaves history, results, and the note counter
    /// untouched.
    pub fn author_only(&mut self, id: &str) -> Result<String, RenderError> {
        let request = ClusterRequest::author_only(id);
        let entries = self.engine.process_citation_cluster(&request, &[], &[])?;
        match entries.last() {
            Some(entry) => Ok(entry.text.clone()),
            None => Err(RenderError::EngineProtocol(format!(
                "no rendered entry for author-only query on '{}'",
                id
            ))),
        }
    }

    /// Citation mode, resolved from the engine at initialization.
    pub fn mode(&self) -> CitationMode {
        self.mode
    }

    /// The citation results accumulated so far.
    pub fn citations(&self) -> &[String] {
        &self.citations
    }

    pub fn has_footnotes(&self) -> bool {
        !self.footnotes.is_empty()
    }

    /// The assembled footnote block, or an empty string when the session
    /// produced no footnotes (in-text style, or paginated output).
    pub fn footnotes_block_html(&self) -> String {
        if self.footnotes.is_empty() {
            return String::new();
        }
        let mut out = String::from("<div style='margin-left: 4ch'>");
        out.push_str(&css::footnote_css());
        for body in &self.footnotes {
            out.push_str(body);
        }
        out.push_str("</div>");
        out
    }

    /// Produce the bibliography block: opening markup, generated entry CSS,
    /// one anchored `<div>` per entry, closing markup.
    pub fn bibliography_html(&mut self) -> Result<String, RenderError> {
        let (meta, entries) = self.engine.make_bibliography()?;
        if meta.entry_ids.len() != entries.len() {
            log::warn!(
                "bibliography descriptor lists {} ids for {} entries",
                meta.entry_ids.len(),
                entries.len()
            );
        }

        let mut out = String::new();
        out.push_str(&meta.bib_start);
        out.push_str(&css::bibliography_css(&meta));
        for (id, entry) in meta.entry_ids.iter().zip(&entries) {
            let _ = write!(out, r#"<div id="{}">{}</div>"#, id, entry);
        }
        out.push_str(&meta.bib_end);
        Ok(out)
    }

    /// Register one cluster under the next note index and fold the engine's
    /// answer into the result sequences.
    fn register_cluster(&mut self, ids: &[String]) -> Result<(), RenderError> {
        let note_index = self.next_note;
        let request = ClusterRequest::new(note_index, ids);
        let entries =
            self.engine
                .process_citation_cluster(&request, &self.history.pre, &self.history.post)?;

        // The engine must at least return the cluster it was just given.
        let Some((newest, earlier)) = entries.split_last() else {
            return Err(RenderError::EngineProtocol(format!(
                "no rendered entries for cluster '{}'",
                request.cluster_id
            )));
        };

        // Split everything before mutating any state.
        let newest_html =
            split::split_into_anchors(&newest.text, &newest.ids, self.reference_delimiter)?;
        let earlier_html = earlier
            .iter()
            .map(|entry| {
                split::split_into_anchors(&entry.text, &entry.ids, self.reference_delimiter)
                    .map(|html| (entry.position, html))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.history.record(newest);

        match (self.mode, self.paginated) {
            (CitationMode::InText, _) => {
                self.citations.push(newest_html);
                for (position, html) in earlier_html {
                    self.overwrite_citation(position, html)?;
                }
            }
            (CitationMode::Note, true) => {
                self.citations.push(footnote_span(&newest_html));
                for (position, html) in earlier_html {
                    self.overwrite_citation(position, footnote_span(&html))?;
                }
            }
            (CitationMode::Note, false) => {
                self.citations.push(footnote_marker(note_index));
                self.footnotes.push(footnote_body(note_index, &newest_html));
                for (position, html) in earlier_html {
                    // Earlier bodies keep their own numeral.
                    self.overwrite_footnote(position, footnote_body(position + 1, &html))?;
                }
            }
        }

        self.next_note += 1;
        debug_assert_eq!(self.history.len(), self.citations.len());
        Ok(())
    }

    fn overwrite_citation(&mut self, position: usize, html: String) -> Result<(), RenderError> {
        log::debug!("rewriting citation at position {}", position);
        match self.citations.get_mut(position) {
            Some(slot) => {
                *slot = html;
                Ok(())
            }
            None => Err(RenderError::EngineProtocol(format!(
                "re-rendered position {} is outside the registered history",
                position
            ))),
        }
    }

    fn overwrite_footnote(&mut self, position: usize, html: String) -> Result<(), RenderError> {
        log::debug!("rewriting footnote at position {}", position);
        match self.footnotes.get_mut(position) {
            Some(slot) => {
                *slot = html;
                Ok(())
            }
            None => Err(RenderError::EngineProtocol(format!(
                "re-rendered position {} is outside the registered history",
                position
            ))),
        }
    }
}

fn footnote_span(html: &str) -> String {
    format!(r#"<span class="footnote">{}</span>"#, html)
}

fn footnote_marker(note: usize) -> String {
    format!(
        r##"<a href="#footnote-{}" style="color: inherit; text-decoration: none">[{}]</a>"##,
        note, note
    )
}

fn footnote_body(note: usize, html: &str) -> String {
    format!(
        r#"<div id="footnote-{}"><div class="footnote-left-margin">[{}]</div> <div class="footnote-right-inline">{}</div></div>"#,
        note, note, html
    )
}
