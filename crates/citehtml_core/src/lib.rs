/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core data model and engine contract for citation HTML rendering.
//!
//! This crate defines the shared vocabulary between a citation-style engine
//! and the HTML rendering layer: the bibliographic item store handed to the
//! engine through lookup callbacks, the cluster request/response shapes the
//! engine is driven with, and the bibliography style descriptor it returns.
//!
//! The engine itself is an external collaborator. It owns all style
//! semantics (sorting, disambiguation, ibid detection, locale term
//! selection); this crate only fixes the shape of the conversation with it.

pub mod bibliography;
pub mod engine;
pub mod item;

pub use bibliography::{BibliographyMeta, SecondFieldAlign};
pub use engine::{
    CitationMode, ClusterItem, ClusterRequest, ContextEntry, EngineError, EngineSupport,
    RenderedEntry, StyleEngine,
};
pub use item::{Item, ItemStore};
