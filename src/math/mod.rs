// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

pub mod katex;
#[cfg(feature = "mathml")]
pub mod mathml;

use serde::Serialize;

use crate::config::render::MathBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Inline,
    Block,
}

#[derive(Debug, thiserror::Error)]
pub enum MathError {
    #[error("unclosed group `{{` at offset {offset}")]
    UnclosedGroup { offset: usize },

    #[error("unexpected `}}` at offset {offset}")]
    UnexpectedClose { offset: usize },

    #[error("`{0}` without its matching fence")]
    UnmatchedFence(&'static str),

    #[error("missing environment name after `\\{0}`")]
    MissingEnvironmentName(&'static str),

    #[error("environment `{0}` is never closed")]
    UnclosedEnvironment(String),

    #[error("`\\end{{{0}}}` without `\\begin{{{0}}}`")]
    UnexpectedEnd(String),

    #[error("expected `\\end{{{expected}}}`, found `\\end{{{found}}}`")]
    MismatchedEnvironment { expected: String, found: String },

    #[error("math delimiter `{0}` inside a formula")]
    NestedDelimiter(String),

    #[error("formula ends with a lone backslash")]
    TrailingBackslash,

    /// The math engine itself rejected the formula.
    #[error("typesetting failed: {0}")]
    Convert(String),
}

/// Typesetting seam between the segment renderer and a math engine.
pub trait MathRenderer {
    /// Typesets one formula, delimiters already stripped.
    fn render(&self, expression: &str, mode: DisplayMode) -> Result<String, MathError>;

    /// Markup a standalone page needs in its `<head>` to display the output.
    fn head(&self) -> &'static str {
        ""
    }
}

pub fn renderer(backend: MathBackend) -> eyre::Result<Box<dyn MathRenderer>> {
    match backend {
        MathBackend::Katex => Ok(Box::new(katex::KatexMarkup::new()?)),
        #[cfg(feature = "mathml")]
        MathBackend::Mathml => Ok(Box::new(mathml::MathCore::new()?)),
        #[cfg(not(feature = "mathml"))]
        MathBackend::Mathml => Err(eyre::eyre!(
            "the `mathml` backend requires building with `--features mathml`"
        )),
    }
}
