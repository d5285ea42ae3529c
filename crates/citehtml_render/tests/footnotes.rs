/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Note-style assembly: footnote markers and bodies, paginated spans, and
//! the footnote block.

mod common;
use common::*;

use citehtml_render::{footnote_css, SessionOptions};

#[test]
fn test_marker_and_body_share_an_index() {
    let engine = ScriptedEngine::note()
        .respond(vec![entry(0, "Smith, 2020", "A")])
        .respond(vec![entry(1, "Jones, 2021", "B")]);
    let mut session = session_with(engine);

    let rendered = session
        .render_clusters(&clusters(&[&["A"], &["B"]]))
        .unwrap();

    assert_eq!(rendered.len(), 2);
    assert_eq!(
        rendered[0],
        r##"<a href="#footnote-1" style="color: inherit; text-decoration: none">[1]</a>"##
    );
    assert_eq!(
        rendered[1],
        r##"<a href="#footnote-2" style="color: inherit; text-decoration: none">[2]</a>"##
    );

    assert!(session.has_footnotes());
    let block = session.footnotes_block_html();
    assert!(block.contains(r#"<div id="footnote-1">"#));
    assert!(block.contains(r#"<div id="footnote-2">"#));
    assert!(block.contains("Smith, 2020"));
    assert!(block.contains("Jones, 2021"));
}

#[test]
fn test_footnote_body_layout() {
    let engine = ScriptedEngine::note().respond(vec![entry(0, "Smith, 2020", "A")]);
    let mut session = session_with(engine);
    session.render_clusters(&clusters(&[&["A"]])).unwrap();

    let block = session.footnotes_block_html();
    assert!(block.starts_with("<div style='margin-left: 4ch'>"));
    assert!(block.ends_with("</div>"));
    assert!(block.contains(&footnote_css()));
    assert!(block.contains(r#"<div class="footnote-left-margin">[1]</div>"#));
    assert!(block.contains(r#"<div class="footnote-right-inline">"#));
    // The body text is the self-linking anchor produced by the splitter.
    assert!(block.contains(r##"<a href="#A""##));
}

#[test]
fn test_retroactive_rerender_rewrites_body_with_its_own_numeral() {
    let engine = ScriptedEngine::note()
        .respond(vec![entry(0, "Smith, 2020", "A")])
        .respond(vec![
            entry(0, "Smith, 2020a", "A"),
            entry(1, "Smith, 2020b", "B"),
        ]);
    let mut session = session_with(engine);

    let rendered = session
        .render_clusters(&clusters(&[&["A"], &["B"]]))
        .unwrap();

    // Markers are stable; only the bodies change.
    assert!(rendered[0].contains("[1]"));
    assert!(rendered[1].contains("[2]"));

    let block = session.footnotes_block_html();
    assert!(block.contains("Smith, 2020a"));
    assert!(block.contains("Smith, 2020b"));
    // The rewritten first body keeps footnote number 1.
    let first_body = block
        .split(r#"<div id="footnote-1">"#)
        .nth(1)
        .expect("first footnote body present");
    assert!(first_body.starts_with(r#"<div class="footnote-left-margin">[1]</div>"#));
    assert!(first_body.contains("Smith, 2020a"));
}

#[test]
fn test_paginated_output_wraps_citations_in_footnote_spans() {
    let engine = ScriptedEngine::note()
        .respond(vec![entry(0, "Smith, 2020", "A")])
        .respond(vec![
            entry(0, "Smith, 2020a", "A"),
            entry(1, "Smith, 2020b", "B"),
        ]);
    let options = SessionOptions {
        paginated: true,
        ..SessionOptions::default()
    };
    let mut session = session_with_options(engine, options);

    let rendered = session
        .render_clusters(&clusters(&[&["A"], &["B"]]))
        .unwrap();

    assert!(rendered[0].starts_with(r#"<span class="footnote">"#));
    assert!(rendered[0].ends_with("</span>"));
    // Overwritten entries are wrapped the same way.
    assert!(rendered[0].contains("Smith, 2020a"));
    assert!(rendered[1].starts_with(r#"<span class="footnote">"#));

    // Paginated targets lay out their own footnotes; nothing accumulates.
    assert!(!session.has_footnotes());
    assert!(session.footnotes_block_html().is_empty());
}

#[test]
fn test_no_footnotes_before_any_registration() {
    let engine = ScriptedEngine::note();
    let session = session_with(engine);

    assert!(!session.has_footnotes());
    assert!(session.footnotes_block_html().is_empty());
}
