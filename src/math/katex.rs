// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use katex::Opts;

use super::{DisplayMode, MathError, MathRenderer};

/// Typesets formulas to HTML with KaTeX at render time. Pages only need the
/// KaTeX stylesheet from [`MathRenderer::head`].
///
/// [`check_structure`] runs first so that unbalanced input is reported with a
/// precise error instead of KaTeX's parse message.
pub struct KatexMarkup {
    inline: Opts,
    block: Opts,
}

impl KatexMarkup {
    pub fn new() -> eyre::Result<Self> {
        let opts = |display_mode: bool| {
            Opts::builder()
                .display_mode(display_mode)
                .throw_on_error(true)
                .build()
                .map_err(|e| eyre::eyre!("invalid KaTeX options: {}", e))
        };
        Ok(Self {
            inline: opts(false)?,
            block: opts(true)?,
        })
    }
}

impl MathRenderer for KatexMarkup {
    fn render(&self, expression: &str, mode: DisplayMode) -> Result<String, MathError> {
        check_structure(expression)?;
        let opts = match mode {
            DisplayMode::Inline => &self.inline,
            DisplayMode::Block => &self.block,
        };
        let typeset = katex::render_with_opts(expression, opts)
            .map_err(|e| MathError::Convert(e.to_string()))?;
        Ok(match mode {
            DisplayMode::Inline => format!(r#"<span class="math math-inline">{}</span>"#, typeset),
            DisplayMode::Block => format!(r#"<div class="math math-display">{}</div>"#, typeset),
        })
    }

    fn head(&self) -> &'static str {
        include_str!("../include/import-katex.html")
    }
}

/// Shallow well-formedness check: groups, fences, environments and stray
/// math delimiters. Not a TeX parser.
pub fn check_structure(expression: &str) -> Result<(), MathError> {
    let mut groups: Vec<usize> = vec![];
    let mut fences = 0usize;
    let mut environments: Vec<&str> = vec![];

    let mut chars = expression.char_indices();
    while let Some((offset, c)) = chars.next() {
        match c {
            '{' => groups.push(offset),
            '}' => {
                if groups.pop().is_none() {
                    return Err(MathError::UnexpectedClose { offset });
                }
            }
            '$' => return Err(MathError::NestedDelimiter("$".to_string())),
            '\\' => {
                let rest = &expression[offset + 1..];
                let Some(next) = rest.chars().next() else {
                    return Err(MathError::TrailingBackslash);
                };
                if !next.is_ascii_alphabetic() {
                    // control symbol: `\{`, `\\`, `\,` ...
                    chars.next();
                    if matches!(next, '(' | ')' | '[' | ']') {
                        return Err(MathError::NestedDelimiter(format!("\\{}", next)));
                    }
                    continue;
                }

                let len = rest
                    .find(|c: char| !c.is_ascii_alphabetic())
                    .unwrap_or(rest.len());
                let (word, after) = rest.split_at(len);
                // ascii letters, one byte each
                for _ in 0..len {
                    chars.next();
                }

                match word {
                    "left" => fences += 1,
                    "right" => {
                        fences = fences
                            .checked_sub(1)
                            .ok_or(MathError::UnmatchedFence("\\right"))?;
                    }
                    "begin" => environments.push(environment_name(after, "begin")?),
                    "end" => {
                        let found = environment_name(after, "end")?;
                        match environments.pop() {
                            Some(expected) if expected == found => {}
                            Some(expected) => {
                                return Err(MathError::MismatchedEnvironment {
                                    expected: expected.to_string(),
                                    found: found.to_string(),
                                })
                            }
                            None => return Err(MathError::UnexpectedEnd(found.to_string())),
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    if let Some(offset) = groups.pop() {
        return Err(MathError::UnclosedGroup { offset });
    }
    if fences > 0 {
        return Err(MathError::UnmatchedFence("\\left"));
    }
    if let Some(name) = environments.pop() {
        return Err(MathError::UnclosedEnvironment(name.to_string()));
    }
    Ok(())
}

/// Reads `{name}` following `\begin` or `\end`.
fn environment_name<'e>(after: &'e str, command: &'static str) -> Result<&'e str, MathError> {
    after
        .trim_start()
        .strip_prefix('{')
        .and_then(|s| s.find('}').map(|end| s[..end].trim()))
        .filter(|name| !name.is_empty())
        .ok_or(MathError::MissingEnvironmentName(command))
}
