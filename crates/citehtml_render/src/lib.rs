/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation cluster and bibliography HTML rendering.
//!
//! This crate turns the output of a citation-style engine into HTML
//! fragments ready for embedding: per-reference self-linking anchors for
//! in-text citations, numbered footnote markers and bodies for note
//! styles, and a bibliography block with generated layout CSS.
//!
//! The engine is pluggable through [`citehtml_core::StyleEngine`]; the
//! session drives it one cluster at a time and folds re-rendered earlier
//! clusters back into already-emitted results.
//!
//! No escaping is applied to formatted bibliographic text beyond what the
//! engine itself guarantees; hosts embedding untrusted item data must
//! sanitize upstream.
//!
//! # Example
//!
//! ```rust
//! use citehtml_core::{
//!     BibliographyMeta, CitationMode, ClusterRequest, ContextEntry, EngineError,
//!     RenderedEntry, StyleEngine,
//! };
//! use citehtml_render::{RenderSession, SessionOptions};
//!
//! // A stand-in engine that cites by id; real hosts plug in a CSL engine.
//! struct EchoEngine;
//!
//! impl StyleEngine for EchoEngine {
//!     fn process_citation_cluster(
//!         &mut self,
//!         request: &ClusterRequest,
//!         pre: &[ContextEntry],
//!         _post: &[ContextEntry],
//!     ) -> Result<Vec<RenderedEntry>, EngineError> {
//!         let ids: Vec<&str> = request.items.iter().map(|i| i.id.as_str()).collect();
//!         Ok(vec![RenderedEntry {
//!             position: pre.len(),
//!             text: ids.join("\u{1f}"),
//!             ids: ids.join(";"),
//!         }])
//!     }
//!
//!     fn make_bibliography(&mut self) -> Result<(BibliographyMeta, Vec<String>), EngineError> {
//!         Ok((BibliographyMeta::default(), Vec::new()))
//!     }
//!
//!     fn mode(&self) -> CitationMode {
//!         CitationMode::InText
//!     }
//! }
//!
//! let items = r#"{"items": [{"id": "kuhn1962", "issued": {"date-parts": [[1962]]}}]}"#;
//! let mut session = RenderSession::initialize(
//!     items,
//!     "<locale/>",
//!     "<style/>",
//!     SessionOptions::default(),
//!     |_support, _style, _paginated| Ok(EchoEngine),
//! )
//! .unwrap();
//!
//! let rendered = session
//!     .render_clusters(&[vec!["kuhn1962".to_string()]])
//!     .unwrap();
//! assert_eq!(
//!     rendered[0],
//!     r##"<a href="#kuhn1962" style="color: inherit; text-decoration: none">kuhn1962</a>"##
//! );
//! ```

pub mod css;
pub mod error;
pub mod renderer;
pub mod session;
pub mod split;

pub use css::{bibliography_css, footnote_css};
pub use error::RenderError;
pub use renderer::CitationRenderer;
pub use session::{RenderSession, SessionOptions};
pub use split::{split_into_anchors, REFERENCE_DELIMITER};
