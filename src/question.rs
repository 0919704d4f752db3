// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use camino::Utf8Path;
use eyre::{eyre, WrapErr};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub statement: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,

    /// Free-form label such as `single-choice`.
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Accepted shapes of a question file.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionFile {
    /// `[[question]]` tables, or `{ "question": [...] }`.
    Many { question: Vec<Question> },
    List(Vec<Question>),
    One(Question),
}

impl From<QuestionFile> for Vec<Question> {
    fn from(file: QuestionFile) -> Self {
        match file {
            QuestionFile::Many { question } => question,
            QuestionFile::List(questions) => questions,
            QuestionFile::One(question) => vec![question],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        match path.extension()? {
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

pub fn parse_questions(source: &str, format: Format) -> eyre::Result<Vec<Question>> {
    let file: QuestionFile = match format {
        Format::Toml => toml::from_str(source).map_err(|e| eyre!("invalid question TOML: {}", e))?,
        Format::Json => serde_json::from_str(source).wrap_err("invalid question JSON")?,
    };
    Ok(file.into())
}

pub fn load_questions(path: &Utf8Path) -> eyre::Result<Vec<Question>> {
    let format = Format::from_path(path)
        .ok_or_else(|| eyre!("unsupported question file `{}`, expected .toml or .json", path))?;
    let source = std::fs::read_to_string(path)
        .wrap_err_with(|| eyre!("failed to read question file `{}`", path))?;
    parse_questions(&source, format)
        .wrap_err_with(|| eyre!("failed to parse question file `{}`", path))
}
