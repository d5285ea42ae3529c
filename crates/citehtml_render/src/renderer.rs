/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Host-facing entry point.
//!
//! The rendering host drives one `CitationRenderer` per document:
//! `initialize` once, `render_clusters` as the document body is assembled,
//! then the footnote and bibliography blocks at the end. Every other
//! operation before `initialize` is a programming error and reports
//! [`RenderError::NotInitialized`].

use crate::error::RenderError;
use crate::session::{RenderSession, SessionOptions};
use citehtml_core::{EngineError, EngineSupport, StyleEngine};

/// Stateful wrapper around a [`RenderSession`] for hosts that separate
/// construction from use.
pub struct CitationRenderer<E> {
    session: Option<RenderSession<E>>,
}

impl<E: StyleEngine> CitationRenderer<E> {
    pub fn new() -> Self {
        CitationRenderer { session: None }
    }

    /// Set up the session. Must be called before any other operation;
    /// calling it again replaces the previous session wholesale.
    pub fn initialize<F>(
        &mut self,
        items_json: &str,
        locale_text: &str,
        style_text: &str,
        options: SessionOptions,
        build_engine: F,
    ) -> Result<(), RenderError>
    where
        F: FnOnce(EngineSupport, &str, bool) -> Result<E, EngineError>,
    {
        self.session = Some(RenderSession::initialize(
            items_json,
            locale_text,
            style_text,
            options,
            build_engine,
        )?);
        Ok(())
    }

    /// Register citation clusters in document order; returns one HTML
    /// fragment per registered cluster.
    pub fn render_clusters(&mut self, clusters: &[Vec<String>]) -> Result<Vec<String>, RenderError> {
        self.session_mut()?.render_clusters(clusters)
    }

    /// Render the author portion of a single reference.
    pub fn author_only(&mut self, id: &str) -> Result<String, RenderError> {
        self.session_mut()?.author_only(id)
    }

    /// Whether any footnote bodies were produced so far.
    pub fn has_footnotes(&self) -> bool {
        self.session.as_ref().is_some_and(RenderSession::has_footnotes)
    }

    /// The assembled footnote block; empty outside non-paginated note mode.
    pub fn footnotes_block_html(&self) -> Result<String, RenderError> {
        Ok(self.session()?.footnotes_block_html())
    }

    /// The assembled bibliography block.
    pub fn bibliography_html(&mut self) -> Result<String, RenderError> {
        self.session_mut()?.bibliography_html()
    }

    fn session(&self) -> Result<&RenderSession<E>, RenderError> {
        self.session.as_ref().ok_or(RenderError::NotInitialized)
    }

    fn session_mut(&mut self) -> Result<&mut RenderSession<E>, RenderError> {
        self.session.as_mut().ok_or(RenderError::NotInitialized)
    }
}

impl<E: StyleEngine> Default for CitationRenderer<E> {
    fn default() -> Self {
        Self::new()
    }
}
