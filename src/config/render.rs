// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classify::{DEFAULT_AUTO_BLOCK_LENGTH, DEFAULT_BLOCK_INLINE_THRESHOLD};

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Render {
    pub backend: MathBackend,
    pub block: bool,
    pub block_inline_threshold: usize,
    pub auto_block_length: usize,
    pub raw_latex_statement: bool,
}

impl Default for Render {
    fn default() -> Self {
        Self {
            backend: MathBackend::default(),
            block: false,
            block_inline_threshold: DEFAULT_BLOCK_INLINE_THRESHOLD,
            auto_block_length: DEFAULT_AUTO_BLOCK_LENGTH,
            raw_latex_statement: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum, Default, Deserialize, Serialize)]
pub enum MathBackend {
    /// KaTeX HTML, typeset at render time.
    #[default]
    #[serde(rename = "katex")]
    Katex,

    /// MathML generated at build time.
    #[serde(rename = "mathml")]
    Mathml,
}

#[derive(Debug)]
pub struct ParseMathBackendError;

impl FromStr for MathBackend {
    type Err = ParseMathBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "katex" => Ok(MathBackend::Katex),
            "mathml" => Ok(MathBackend::Mathml),
            _ => Err(ParseMathBackendError),
        }
    }
}

impl std::fmt::Display for MathBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathBackend::Katex => write!(f, "katex"),
            MathBackend::Mathml => write!(f, "mathml"),
        }
    }
}
