// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    Text,
    /// `$$...$$`
    DollarDisplay,
    /// `\[...\]`
    BracketDisplay,
    /// `\(...\)`
    ParenInline,
    /// `$...$`
    DollarInline,
}

/// Math spans in the order they are tried at each position.
const MATH_SPANS: [SegmentKind; 4] = [
    SegmentKind::DollarDisplay,
    SegmentKind::BracketDisplay,
    SegmentKind::ParenInline,
    SegmentKind::DollarInline,
];

impl SegmentKind {
    pub fn delimiters(self) -> Option<(&'static str, &'static str)> {
        match self {
            SegmentKind::Text => None,
            SegmentKind::DollarDisplay => Some(("$$", "$$")),
            SegmentKind::BracketDisplay => Some((r"\[", r"\]")),
            SegmentKind::ParenInline => Some((r"\(", r"\)")),
            SegmentKind::DollarInline => Some(("$", "$")),
        }
    }

    pub fn is_display(self) -> bool {
        matches!(self, SegmentKind::DollarDisplay | SegmentKind::BracketDisplay)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'s> {
    pub kind: SegmentKind,
    /// Source text of the segment, delimiters included.
    pub raw: &'s str,
    /// Byte offset of `raw` in the segmented string.
    pub start: usize,
}

impl<'s> Segment<'s> {
    /// `raw` without its delimiters.
    pub fn content(&self) -> &'s str {
        match self.kind.delimiters() {
            Some((open, close)) => &self.raw[open.len()..self.raw.len() - close.len()],
            None => self.raw,
        }
    }
}

/// Splits `text` into alternating text and math segments.
///
/// Scans left to right. At every `$` or `\` the math spans are tried in
/// [`MATH_SPANS`] order and the first one whose closing delimiter occurs later
/// in the string wins, ending at the nearest closing delimiter. Everything
/// between spans becomes a text segment; empty text segments are not emitted,
/// so the `raw` parts always concatenate back to `text`.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let mut segments = vec![];
    let mut text_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        let rest = &text[cursor..];
        let span = rest
            .starts_with(|c: char| c == '$' || c == '\\')
            .then(|| match_span(rest))
            .flatten();

        let Some((kind, len)) = span else {
            cursor += rest.chars().next().map_or(1, char::len_utf8);
            continue;
        };

        if text_start < cursor {
            segments.push(Segment {
                kind: SegmentKind::Text,
                raw: &text[text_start..cursor],
                start: text_start,
            });
        }
        segments.push(Segment {
            kind,
            raw: &rest[..len],
            start: cursor,
        });
        cursor += len;
        text_start = cursor;
    }

    if text_start < text.len() {
        segments.push(Segment {
            kind: SegmentKind::Text,
            raw: &text[text_start..],
            start: text_start,
        });
    }
    segments
}

/// Length in bytes of the math span opening at the start of `rest`.
fn match_span(rest: &str) -> Option<(SegmentKind, usize)> {
    MATH_SPANS.iter().find_map(|&kind| {
        let (open, close) = kind.delimiters()?;
        let body = rest.strip_prefix(open)?;
        let end = body.find(close)?;
        Some((kind, open.len() + end + close.len()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(SegmentKind, &str)> {
        segment(text).into_iter().map(|s| (s.kind, s.raw)).collect()
    }

    #[test]
    fn test_reconstructs_input() {
        for text in [
            "",
            "plain",
            "$x$",
            "a $x$ b",
            "$$x$$",
            r"\[x\] and \(y\)",
            "$a$$b$",
            "$$a$ b$$",
            "unclosed $x",
            "unclosed $$x",
            r"unclosed \(x",
            "$$",
            "$",
            "price: 5$ and 6$",
            "line 1\n$x$\nline 2",
            "multi $$a\nb$$ line",
            "αβγ $δ$ ε",
            r"\\ and \frac{1}{2}",
        ] {
            let joined: String = segment(text).iter().map(|s| s.raw).collect();
            assert_eq!(joined, text);
        }
    }

    #[test]
    fn test_offsets() {
        let text = "ab $x$ é $$y$$";
        for s in segment(text) {
            assert_eq!(&text[s.start..s.start + s.raw.len()], s.raw);
        }
    }

    #[test]
    fn test_delimiter_kinds() {
        assert_eq!(
            kinds(r"a $x$ b $$y$$ c \[z\] d \(w\)"),
            vec![
                (SegmentKind::Text, "a "),
                (SegmentKind::DollarInline, "$x$"),
                (SegmentKind::Text, " b "),
                (SegmentKind::DollarDisplay, "$$y$$"),
                (SegmentKind::Text, " c "),
                (SegmentKind::BracketDisplay, r"\[z\]"),
                (SegmentKind::Text, " d "),
                (SegmentKind::ParenInline, r"\(w\)"),
            ]
        );
    }

    #[test]
    fn test_nearest_closing_delimiter() {
        assert_eq!(
            kinds("$a$$b$"),
            vec![
                (SegmentKind::DollarInline, "$a$"),
                (SegmentKind::DollarInline, "$b$"),
            ]
        );
        assert_eq!(kinds("$$a$ b$$"), vec![(SegmentKind::DollarDisplay, "$$a$ b$$")]);
    }

    #[test]
    fn test_unclosed_display_falls_back_to_inline() {
        assert_eq!(
            kinds("$$x"),
            vec![(SegmentKind::DollarInline, "$$"), (SegmentKind::Text, "x")]
        );
        assert_eq!(kinds(r"\(x"), vec![(SegmentKind::Text, r"\(x")]);
    }

    #[test]
    fn test_content_strips_delimiters() {
        let segments = segment(r"$$a$$\[b\]\(c\)$d$e");
        let contents: Vec<&str> = segments.iter().map(Segment::content).collect();
        assert_eq!(contents, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(segment("$$")[0].content(), "");
    }
}
