/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use citehtml_core::{
    BibliographyMeta, CitationMode, ClusterRequest, ContextEntry, EngineError, RenderedEntry,
    StyleEngine,
};
use citehtml_render::{RenderSession, SessionOptions};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// One recorded engine invocation, for asserting on the context the
/// session supplied.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub request: ClusterRequest,
    pub pre: Vec<ContextEntry>,
    pub post: Vec<ContextEntry>,
}

/// A scripted stand-in for the style engine: answers each cluster call
/// with the next canned response and records what it was asked.
pub struct ScriptedEngine {
    mode: CitationMode,
    responses: VecDeque<Result<Vec<RenderedEntry>, String>>,
    bibliography: Option<(BibliographyMeta, Vec<String>)>,
    calls: Rc<RefCell<Vec<RecordedCall>>>,
}

impl ScriptedEngine {
    pub fn in_text() -> Self {
        Self::with_mode(CitationMode::InText)
    }

    pub fn note() -> Self {
        Self::with_mode(CitationMode::Note)
    }

    fn with_mode(mode: CitationMode) -> Self {
        ScriptedEngine {
            mode,
            responses: VecDeque::new(),
            bibliography: None,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Queue the entry list for the next cluster call.
    pub fn respond(mut self, entries: Vec<RenderedEntry>) -> Self {
        self.responses.push_back(Ok(entries));
        self
    }

    /// Queue an engine failure for the next cluster call.
    pub fn fail_next(mut self, message: &str) -> Self {
        self.responses.push_back(Err(message.to_string()));
        self
    }

    pub fn with_bibliography(mut self, meta: BibliographyMeta, entries: Vec<&str>) -> Self {
        self.bibliography = Some((meta, entries.into_iter().map(String::from).collect()));
        self
    }

    /// Shared handle to the call log; clone before moving the engine into
    /// a session.
    pub fn call_log(&self) -> Rc<RefCell<Vec<RecordedCall>>> {
        Rc::clone(&self.calls)
    }
}

impl StyleEngine for ScriptedEngine {
    fn process_citation_cluster(
        &mut self,
        request: &ClusterRequest,
        pre: &[ContextEntry],
        post: &[ContextEntry],
    ) -> Result<Vec<RenderedEntry>, EngineError> {
        self.calls.borrow_mut().push(RecordedCall {
            request: request.clone(),
            pre: pre.to_vec(),
            post: post.to_vec(),
        });
        match self.responses.pop_front() {
            Some(Ok(entries)) => Ok(entries),
            Some(Err(message)) => Err(EngineError(message)),
            None => Err(EngineError(format!(
                "unscripted cluster call for '{}'",
                request.cluster_id
            ))),
        }
    }

    fn make_bibliography(&mut self) -> Result<(BibliographyMeta, Vec<String>), EngineError> {
        self.bibliography
            .clone()
            .ok_or_else(|| EngineError("no bibliography scripted".to_string()))
    }

    fn mode(&self) -> CitationMode {
        self.mode
    }
}

pub fn entry(position: usize, text: &str, ids: &str) -> RenderedEntry {
    RenderedEntry {
        position,
        text: text.to_string(),
        ids: ids.to_string(),
    }
}

pub const LOCALE: &str = "<locale/>";
pub const STYLE: &str = "<style/>";

/// A small CSL-JSON item list with one undated item (filtered at load).
pub fn items_json() -> &'static str {
    r#"{
        "items": [
            {"id": "A", "type": "book", "title": "Alpha",
             "author": [{"family": "Smith", "given": "John"}],
             "issued": {"date-parts": [[2020]]}},
            {"id": "B", "type": "article-journal", "title": "Beta",
             "author": [{"family": "Jones", "given": "Mary"}],
             "issued": {"date-parts": [[2021]]},
             "URL": "https://example.org/b"},
            {"id": "undated", "type": "webpage", "title": "No date"}
        ]
    }"#
}

pub fn session_with(engine: ScriptedEngine) -> RenderSession<ScriptedEngine> {
    session_with_options(engine, SessionOptions::default())
}

pub fn session_with_options(
    engine: ScriptedEngine,
    options: SessionOptions,
) -> RenderSession<ScriptedEngine> {
    RenderSession::initialize(
        items_json(),
        LOCALE,
        STYLE,
        options,
        |_support, _style, _paginated| Ok(engine),
    )
    .expect("session setup failed")
}

/// Shorthand for cluster input: one inner id list per citation point.
pub fn clusters(groups: &[&[&str]]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|ids| ids.iter().map(|id| id.to_string()).collect())
        .collect()
}
