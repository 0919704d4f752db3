// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

mod classify;
mod cli;
mod config;
mod environment;
mod html_flake;
mod html_macro;
mod math;
mod normalize;
mod path_utils;
mod question;
mod render;
mod segment;

use clap::Parser;

use crate::cli::{init::InitCommand, render::RenderCommand, segments::SegmentsCommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Render question files to HTML.
    #[command(visible_alias = "r")]
    Render(RenderCommand),

    /// Show how a string is split into text and math.
    #[command(visible_alias = "s")]
    Segments(SegmentsCommand),

    /// Create a default config and a sample question in an existing directory.
    #[command(visible_alias = "i")]
    Init(InitCommand),
}

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Render(command) => crate::cli::render::render(command)?,
        Command::Segments(command) => crate::cli::segments::segments(command)?,
        Command::Init(command) => crate::cli::init::init(command)?,
    };
    Ok(())
}
