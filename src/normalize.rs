// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use std::{borrow::Cow, sync::LazyLock};

use eyre::{eyre, WrapErr};
use regex_lite::Regex;

use crate::config::normalize::Rule;

/// Per-command hooks applied before segmentation. Each one currently maps
/// its pattern onto itself (`$0`).
const BUILTIN_HOOKS: &[(&str, &str)] = &[
    ("frac", r"\\[dt]?frac"),
    ("sqrt", r"\\sqrt"),
    ("fence", r"\\(?:left|right)"),
    ("text", r"\\text"),
    ("cdot", r"\\cdot"),
    ("times", r"\\times"),
];

static BUILTIN_RULES: LazyLock<Vec<NormalizeRule>> = LazyLock::new(|| {
    BUILTIN_HOOKS
        .iter()
        .map(|(name, pattern)| {
            NormalizeRule::new(*name, pattern, "$0").expect("builtin hook patterns are valid")
        })
        .collect()
});

#[derive(Debug, Clone)]
pub struct NormalizeRule {
    pub name: String,
    pattern: Regex,
    replacement: String,
}

impl NormalizeRule {
    pub fn new<N, R>(name: N, pattern: &str, replacement: R) -> Result<Self, regex_lite::Error>
    where
        N: Into<String>,
        R: Into<String>,
    {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<NormalizeRule>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            rules: BUILTIN_RULES.clone(),
        }
    }
}

impl Normalizer {
    /// Builtin hooks followed by the user rules from `[normalize]`.
    pub fn with_rules(rules: &[Rule]) -> eyre::Result<Self> {
        let mut normalizer = Self::default();
        for (index, rule) in rules.iter().enumerate() {
            let name = rule
                .name
                .clone()
                .unwrap_or_else(|| format!("rule-{}", index + 1));
            let compiled = NormalizeRule::new(name, &rule.pattern, rule.replacement.as_str())
                .wrap_err_with(|| eyre!("invalid normalize pattern `{}`", rule.pattern))?;
            normalizer.rules.push(compiled);
        }
        Ok(normalizer)
    }

    pub fn rules(&self) -> impl Iterator<Item = &NormalizeRule> {
        self.rules.iter()
    }

    pub fn normalize<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut text = Cow::Borrowed(text);
        for rule in &self.rules {
            let replaced = match rule.pattern.replace_all(&text, rule.replacement.as_str()) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            text = Cow::Owned(replaced);
        }
        text
    }
}
