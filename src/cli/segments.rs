// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use std::io::Read;

use camino::Utf8PathBuf;
use eyre::WrapErr;
use serde::Serialize;

use crate::{
    classify::{self, Run},
    environment,
    normalize::Normalizer,
    render::{looks_like_raw_latex, RenderOptions},
};

#[derive(clap::Args)]
pub struct SegmentsCommand {
    /// Text to inspect. Read from stdin when omitted.
    text: Option<String>,

    /// Treat the text as requested in block mode.
    #[arg(long, default_value_t = false)]
    block: bool,

    /// Path to the configuration file (e.g., "MathQuiz.toml").
    #[arg(short, long)]
    config: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct Report<'s> {
    normalized: &'s str,
    raw_latex: bool,
    block_flag: bool,
    runs: Vec<Run<'s>>,
}

/// Prints how a string is normalized, segmented and classified.
pub fn segments(command: &SegmentsCommand) -> eyre::Result<()> {
    environment::init_environment(command.config.clone())?;
    let config = environment::config();

    let text = match &command.text {
        Some(text) => text.clone(),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .wrap_err("failed to read stdin")?;
            text
        }
    };

    let normalizer = Normalizer::with_rules(&config.normalize.rules)?;
    let options = RenderOptions::from(&config.render);
    let requested = command.block || options.block;

    let normalized = normalizer.normalize(&text);
    let report = Report {
        normalized: &normalized,
        raw_latex: looks_like_raw_latex(&text),
        block_flag: classify::block_flag(&normalized, requested, &options.heuristics),
        runs: classify::runs(&normalized, requested, &options.heuristics),
    };

    let json = serde_json::to_string_pretty(&report).wrap_err("failed to serialize segments")?;
    println!("{}", json);
    Ok(())
}
