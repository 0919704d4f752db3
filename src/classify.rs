// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;

use crate::segment::{segment, Segment, SegmentKind};

pub const DEFAULT_BLOCK_INLINE_THRESHOLD: usize = 50;
pub const DEFAULT_AUTO_BLOCK_LENGTH: usize = 100;

static BLOCK_ENVIRONMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\begin\s*\{\s*(?:cases|align|array)").expect("environment pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristics {
    /// Inline formulas longer than this go to block mode when the block flag is set.
    pub block_inline_threshold: usize,
    /// Text longer than this sets the block flag on its own.
    pub auto_block_length: usize,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            block_inline_threshold: DEFAULT_BLOCK_INLINE_THRESHOLD,
            auto_block_length: DEFAULT_AUTO_BLOCK_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunKind {
    Text,
    InlineMath,
    BlockMath,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run<'s> {
    pub kind: RunKind,
    /// Text to render, math delimiters stripped.
    pub content: &'s str,
    /// The segment as written, shown verbatim when math fails to render.
    pub raw: &'s str,
}

/// Whether inline formulas in `text` may be promoted to block math.
pub fn block_flag(text: &str, requested: bool, heuristics: &Heuristics) -> bool {
    requested
        || BLOCK_ENVIRONMENT.is_match(text)
        || text.contains(r"\\")
        || text.chars().count() > heuristics.auto_block_length
}

pub fn classify<'s>(segment: &Segment<'s>, block: bool, heuristics: &Heuristics) -> Run<'s> {
    let content = segment.content();
    let kind = match segment.kind {
        SegmentKind::Text => RunKind::Text,
        kind if kind.is_display() => RunKind::BlockMath,
        _ if block && content.chars().count() > heuristics.block_inline_threshold => {
            RunKind::BlockMath
        }
        _ => RunKind::InlineMath,
    };
    Run {
        kind,
        content,
        raw: segment.raw,
    }
}

/// Segments and classifies already normalized text.
pub fn runs<'s>(text: &'s str, requested_block: bool, heuristics: &Heuristics) -> Vec<Run<'s>> {
    let block = block_flag(text, requested_block, heuristics);
    log::debug!("block flag {} for {:?}", block, text);
    segment(text)
        .iter()
        .map(|segment| classify(segment, block, heuristics))
        .collect()
}
