/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Render-layer errors.
//!
//! All of these abort the current render; none are recoverable at this
//! layer. The host decides whether to fail the whole document or emit a
//! degraded page. A failed registration leaves session state untouched.

use citehtml_core::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The item input payload is not a CSL-JSON item list.
    #[error("malformed item input: {0}")]
    MalformedInput(String),

    /// A rendering operation was called before `initialize`.
    #[error("citation renderer is not initialized")]
    NotInitialized,

    /// The engine broke the cluster-processing contract.
    #[error("engine protocol violation: {0}")]
    EngineProtocol(String),

    /// A formatted cluster and its id list disagree on reference count.
    #[error("split mismatch: {fragments} formatted fragments for {ids} reference ids")]
    SplitAlignment { fragments: usize, ids: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::MalformedInput(e.to_string())
    }
}
