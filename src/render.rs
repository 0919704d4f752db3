// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use crate::{
    classify::{self, Heuristics, Run, RunKind},
    config::render::Render,
    html_flake,
    math::{DisplayMode, MathRenderer},
    normalize::Normalizer,
    question::Question,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Caller-requested block mode for every field.
    pub block: bool,
    pub heuristics: Heuristics,
    /// Try a statement with `\` and no `$` as one display formula first.
    pub raw_latex_statement: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block: false,
            heuristics: Heuristics::default(),
            raw_latex_statement: true,
        }
    }
}

impl From<&Render> for RenderOptions {
    fn from(render: &Render) -> Self {
        Self {
            block: render.block,
            heuristics: Heuristics {
                block_inline_threshold: render.block_inline_threshold,
                auto_block_length: render.auto_block_length,
            },
            raw_latex_statement: render.raw_latex_statement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    pub label: String,
    pub content: String,
}

/// A question with every field turned into HTML, ready for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQuestion {
    pub kind: String,
    pub statement: String,
    pub options: Vec<RenderedOption>,
    pub answer: Option<String>,
    pub solution: Option<String>,
}

/// `A.`, `B.`, ... by ordinal offset from `A`.
pub fn option_label(index: usize) -> String {
    let letter = u32::try_from(index)
        .ok()
        .and_then(|index| index.checked_add(u32::from('A')))
        .and_then(char::from_u32);
    match letter {
        Some(letter) => format!("{}.", letter),
        None => format!("{}.", index + 1),
    }
}

/// Heuristic for a statement written as bare LaTeX, without delimiters.
pub fn looks_like_raw_latex(statement: &str) -> bool {
    statement.contains('\\') && !statement.contains('$')
}

pub struct Renderer<'r> {
    math: &'r dyn MathRenderer,
    normalizer: &'r Normalizer,
    options: RenderOptions,
}

impl<'r> Renderer<'r> {
    pub fn new(math: &'r dyn MathRenderer, normalizer: &'r Normalizer, options: RenderOptions) -> Self {
        Self {
            math,
            normalizer,
            options,
        }
    }

    /// Renders text with embedded math. Never fails: formulas the math
    /// renderer rejects are shown verbatim and flagged.
    pub fn render_content(&self, text: &str, block: bool) -> String {
        let normalized = self.normalizer.normalize(text);
        classify::runs(&normalized, block, &self.options.heuristics)
            .iter()
            .map(|run| self.render_run(run))
            .collect()
    }

    fn render_run(&self, run: &Run<'_>) -> String {
        match run.kind {
            RunKind::Text => html_flake::html_text_lines(run.content),
            RunKind::InlineMath => self.render_math(run, DisplayMode::Inline),
            RunKind::BlockMath => self.render_math(run, DisplayMode::Block),
        }
    }

    fn render_math(&self, run: &Run<'_>, mode: DisplayMode) -> String {
        match self.math.render(run.content, mode) {
            Ok(markup) => markup,
            Err(err) => {
                log::warn!("failed to render math `{}`: {}", run.raw, err);
                html_flake::html_math_error(run.raw, &err)
            }
        }
    }

    pub fn render_statement(&self, statement: &str) -> String {
        if !(self.options.raw_latex_statement && looks_like_raw_latex(statement)) {
            return self.render_content(statement, self.options.block);
        }

        let normalized = self.normalizer.normalize(statement);
        match self.math.render(&normalized, DisplayMode::Block) {
            Ok(markup) => markup,
            Err(err) => {
                log::warn!(
                    "statement is not a single formula ({}), rendering it segment by segment",
                    err
                );
                self.render_content(statement, true)
            }
        }
    }

    pub fn render_options(&self, options: &[String]) -> Vec<RenderedOption> {
        options
            .iter()
            .enumerate()
            .map(|(index, option)| RenderedOption {
                label: option_label(index),
                content: self.render_content(option, self.options.block),
            })
            .collect()
    }

    pub fn render_question(&self, question: &Question) -> RenderedQuestion {
        let field = |text: &Option<String>| {
            text.as_deref()
                .filter(|text| !text.trim().is_empty())
                .map(|text| self.render_content(text, self.options.block))
        };
        RenderedQuestion {
            kind: question.kind.clone(),
            statement: self.render_statement(&question.statement),
            options: self.render_options(&question.options),
            answer: field(&question.answer),
            solution: field(&question.solution),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::math::{katex::KatexMarkup, MathError};

    fn katex_renderer<'r>(katex: &'r KatexMarkup, normalizer: &'r Normalizer) -> Renderer<'r> {
        Renderer::new(katex, normalizer, RenderOptions::default())
    }

    /// Echoes formulas so markup shows the chosen mode.
    struct Echo;

    impl MathRenderer for Echo {
        fn render(&self, expression: &str, mode: DisplayMode) -> Result<String, MathError> {
            match mode {
                DisplayMode::Inline => Ok(format!("[i:{}]", expression)),
                DisplayMode::Block => Ok(format!("[b:{}]", expression)),
            }
        }
    }

    #[test]
    fn test_display_math() {
        let normalizer = Normalizer::default();
        let renderer = Renderer::new(&Echo, &normalizer, RenderOptions::default());
        assert_eq!(renderer.render_content("$$x$$", false), "[b:x]");
        assert_eq!(renderer.render_content(r"see \[y\] here", false), "see [b:y] here");
    }

    #[test]
    fn test_inline_math() {
        let normalizer = Normalizer::default();
        let renderer = Renderer::new(&Echo, &normalizer, RenderOptions::default());
        assert_eq!(renderer.render_content("a $x$ b", false), "a [i:x] b");
        assert_eq!(renderer.render_content(r"\(x\)", false), "[i:x]");

        let long = "q".repeat(51);
        let text = format!("${}$", long);
        assert_eq!(renderer.render_content(&text, true), format!("[b:{}]", long));
        assert_eq!(renderer.render_content(&text, false), format!("[i:{}]", long));
    }

    #[test]
    fn test_text_line_breaks() {
        let normalizer = Normalizer::default();
        let renderer = Renderer::new(&Echo, &normalizer, RenderOptions::default());
        assert_eq!(
            renderer.render_content("first\nsecond $x$\nthird", false),
            "first<br />second [i:x]<br />third"
        );
    }

    #[test]
    fn test_raw_latex_statement() {
        let normalizer = Normalizer::default();
        let katex = KatexMarkup::new().unwrap();
        let renderer = katex_renderer(&katex, &normalizer);
        let html = renderer.render_statement(r"\frac{1}{2}");
        assert!(html.starts_with(r#"<div class="math math-display"><span class="katex-display">"#));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_raw_latex_statement_falls_back_to_segments() {
        let normalizer = Normalizer::default();
        let katex = KatexMarkup::new().unwrap();
        let renderer = katex_renderer(&katex, &normalizer);
        let html = renderer.render_statement(r"Solve \(x^2 = 4\).");
        assert!(html.starts_with(r#"Solve <span class="math math-inline"><span class="katex">"#));
        assert!(html.ends_with("</span>."));
    }

    #[test]
    fn test_raw_latex_statement_can_be_disabled() {
        let normalizer = Normalizer::default();
        let options = RenderOptions {
            raw_latex_statement: false,
            ..RenderOptions::default()
        };
        let renderer = Renderer::new(&Echo, &normalizer, options);
        assert_eq!(renderer.render_statement(r"\frac{1}{2}"), r"\frac{1}{2}");
    }

    #[test]
    fn test_fallback_forces_block_mode() {
        let normalizer = Normalizer::default();
        let katex = KatexMarkup::new().unwrap();
        let renderer = katex_renderer(&katex, &normalizer);
        let long = "x+".repeat(30);
        // `\(` inside the statement rejects the single-formula attempt
        let statement = format!(r"Expand \({}\)", long);
        let html = renderer.render_statement(&statement);
        assert!(html.starts_with(r#"Expand <div class="math math-display">"#));
    }

    #[test]
    fn test_malformed_math_is_flagged() {
        let normalizer = Normalizer::default();
        let katex = KatexMarkup::new().unwrap();
        let renderer = katex_renderer(&katex, &normalizer);
        let html = renderer.render_content(r"ok $a$ bad $\frac{1}{2$ ok $b$", false);
        assert!(html.starts_with(r#"ok <span class="math math-inline">"#));
        assert!(html.contains(r#"<code class="math-error" title=""#));
        assert!(html.contains(r#">$\frac{1}{2$</code> ok <span class="math math-inline">"#));
        assert!(html.ends_with("</span>"));
    }

    #[test]
    fn test_unknown_command_is_flagged() {
        let normalizer = Normalizer::default();
        let katex = KatexMarkup::new().unwrap();
        let renderer = katex_renderer(&katex, &normalizer);
        for text in [r"$\notacommand{x}$", r"$\frac{1}$", "$x^^2$", r"$\sqrt$"] {
            let html = renderer.render_content(text, false);
            assert!(html.starts_with(r#"<code class="math-error" title="typesetting failed: "#), "{text}");
            assert!(html.ends_with(&format!(">{}</code>", text)), "{text}");
        }
    }

    #[test]
    fn test_option_labels() {
        let normalizer = Normalizer::default();
        let katex = KatexMarkup::new().unwrap();
        let renderer = katex_renderer(&katex, &normalizer);
        let options = renderer.render_options(&["$a$".to_string(), "$b$".to_string()]);
        let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
        assert_eq!(labels, vec!["A.", "B."]);
        assert!(options[1].content.starts_with(r#"<span class="math math-inline">"#));
    }

    #[test]
    fn test_option_label_offsets() {
        assert_eq!(option_label(0), "A.");
        assert_eq!(option_label(25), "Z.");
        assert_eq!(option_label(26), "[.");
    }

    #[test]
    fn test_render_question() {
        let normalizer = Normalizer::default();
        let renderer = Renderer::new(&Echo, &normalizer, RenderOptions::default());
        let question = Question {
            statement: "Value of $x$?".to_string(),
            options: vec!["$1$".to_string(), "$2$".to_string()],
            answer: Some("B".to_string()),
            solution: Some("  ".to_string()),
            kind: "single".to_string(),
        };
        assert_eq!(
            renderer.render_question(&question),
            RenderedQuestion {
                kind: "single".to_string(),
                statement: "Value of [i:x]?".to_string(),
                options: vec![
                    RenderedOption {
                        label: "A.".to_string(),
                        content: "[i:1]".to_string(),
                    },
                    RenderedOption {
                        label: "B.".to_string(),
                        content: "[i:2]".to_string(),
                    },
                ],
                answer: Some("B".to_string()),
                solution: None,
            }
        );
    }

    #[test]
    fn test_idempotent() {
        let normalizer = Normalizer::default();
        let katex = KatexMarkup::new().unwrap();
        let renderer = katex_renderer(&katex, &normalizer);
        let text = "Let $x = 1$.\nThen $$x^2 = 1$$";
        assert_eq!(renderer.render_content(text, false), renderer.render_content(text, false));
    }
}
