// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use itertools::Itertools;
use pulldown_cmark_escape::{escape_html, escape_html_body_text};

use crate::{config::text::Text, html, math::MathError, render::RenderedQuestion};

/// Escapes text placed between tags.
pub fn escape_body(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    escape_html_body_text(&mut escaped, s).unwrap();
    escaped
}

/// Escapes text placed in an attribute value, quotes included.
pub fn escape_attr(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    escape_html(&mut escaped, s).unwrap();
    escaped
}

/// Plain text with its line breaks (`\n`, `\r\n` or a lone `\r`) turned into
/// `<br />`, none after the last line.
pub fn html_text_lines(text: &str) -> String {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .map(escape_body)
        .join("<br />")
}

/// Fallback for a formula the math renderer rejected.
pub fn html_math_error(raw: &str, error: &MathError) -> String {
    html!(code class = "math-error", title = {escape_attr(&error.to_string())} => {escape_body(raw)})
}

pub fn html_option(label: &str, content: &str) -> String {
    html!(li => (html!(span class = "option-label" => {label})) " " {content})
}

pub fn html_field(class_name: &str, label: &str, content: &str) -> String {
    html!(div class = {class_name} =>
      (html!(span class = "field-label" => {escape_body(label)}))
      " "
      {content})
}

pub fn html_question(question: &RenderedQuestion, text: &Text) -> String {
    let kind = escape_attr(&question.kind);

    let mut inner = String::new();
    if !question.kind.is_empty() {
        inner.push_str(&html!(div class = "question-type" => {escape_body(&question.kind)}));
    }
    inner.push_str(&html!(div class = "statement" => (question.statement)));

    if !question.options.is_empty() {
        let items = question
            .options
            .iter()
            .map(|option| html_option(&option.label, &option.content))
            .join("");
        inner.push_str(&html!(ol class = "options" => {items}));
    }
    if let Some(answer) = &question.answer {
        inner.push_str(&html_field("answer", &text.answer, answer));
    }
    if let Some(solution) = &question.solution {
        inner.push_str(&html_field("solution", &text.solution, solution));
    }

    html!(section class = "question", data_type = {kind} => {inner})
}

pub fn html_doc(title: &str, body_inner: &str, math_head: &str, inline_css: bool) -> String {
    let doc_type = "<!DOCTYPE html>";
    let style = match inline_css {
        true => html_css(),
        false => r#"<link rel="stylesheet" href="main.css">"#.to_string(),
    };
    let html = html!(html lang = "en-US" =>
      (html!(head => r#"
<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
<meta name="viewport" content="width=device-width">
"#
        (html!(title => {escape_body(title)}))
        "\n"
        (math_head)
        "\n"
        (style)))
      "\n"
      (html!(body => (html!(main => {body_inner})))));
    format!("{}\n{}\n", doc_type, html)
}

pub fn html_css() -> String {
    html!(style => (html_main_style()))
}

pub fn html_main_style() -> &'static str {
    include_str!("include/main.css")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::render::RenderedOption;

    #[test]
    fn test_text_lines() {
        assert_eq!(html_text_lines("a\nb\r\nc"), "a<br />b<br />c");
        assert_eq!(html_text_lines("a\rb\r\rc"), "a<br />b<br /><br />c");
        assert_eq!(html_text_lines("a\r\n\r\nb"), "a<br /><br />b");
        assert_eq!(html_text_lines("a\n"), "a<br />");
        assert_eq!(html_text_lines("single"), "single");
        assert_eq!(html_text_lines(""), "");
        assert_eq!(html_text_lines("x < y & z"), "x &lt; y &amp; z");
    }

    #[test]
    fn test_math_error() {
        let html = html_math_error("$x}$", &MathError::UnexpectedClose { offset: 1 });
        assert!(html.starts_with(r#"<code class="math-error" title=""#));
        assert!(html.ends_with(">$x}$</code>"));
    }

    #[test]
    fn test_question_layout() {
        let question = RenderedQuestion {
            kind: "choice".to_string(),
            statement: "Pick one".to_string(),
            options: vec![RenderedOption {
                label: "A.".to_string(),
                content: "yes".to_string(),
            }],
            answer: Some("A".to_string()),
            solution: None,
        };
        assert_eq!(
            html_question(&question, &Text::default()),
            concat!(
                r#"<section class="question" data-type="choice">"#,
                r#"<div class="question-type">choice</div>"#,
                r#"<div class="statement">Pick one</div>"#,
                r#"<ol class="options"><li><span class="option-label">A.</span> yes</li></ol>"#,
                r#"<div class="answer"><span class="field-label">Answer</span> A</div>"#,
                r#"</section>"#,
            )
        );
    }

    #[test]
    fn test_doc_wraps_body() {
        let doc = html_doc("Quiz", "<p>body</p>", "<!-- math -->", false);
        assert!(doc.starts_with("<!DOCTYPE html>\n<html lang=\"en-US\">"));
        assert!(doc.contains("<title>Quiz</title>"));
        assert!(doc.contains("<!-- math -->"));
        assert!(doc.contains(r#"<link rel="stylesheet" href="main.css">"#));
        assert!(doc.contains("<body><main><p>body</p></main></body>"));
    }
}
