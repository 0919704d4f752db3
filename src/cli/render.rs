// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{bail, eyre, WrapErr};
use itertools::Itertools;
use walkdir::WalkDir;

use crate::{
    config::{self, render::MathBackend},
    environment, html_flake, math,
    normalize::Normalizer,
    path_utils,
    question::{self, Format},
    render::{RenderOptions, Renderer},
};

#[derive(clap::Args)]
pub struct RenderCommand {
    /// Question files (.toml or .json) or directories containing them.
    #[arg(required = true)]
    inputs: Vec<Utf8PathBuf>,

    /// Path to the configuration file (e.g., "MathQuiz.toml").
    #[arg(short, long)]
    config: Option<Utf8PathBuf>,

    /// Output directory. Defaults to `[build] output`.
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,

    /// Print the HTML to stdout instead of writing files.
    #[arg(long, default_value_t = false)]
    stdout: bool,

    /// Wrap each question file in a complete HTML page.
    #[arg(long, default_value_t = false)]
    standalone: bool,

    /// Render every field in block mode.
    #[arg(long, default_value_t = false)]
    block: bool,

    /// Math backend. Defaults to `[render] backend`.
    #[arg(long, value_enum)]
    backend: Option<MathBackend>,
}

/// This function invoked the [`environment::init_environment`] function to initialize the environment.
pub fn render(command: &RenderCommand) -> eyre::Result<()> {
    environment::init_environment(command.config.clone())?;
    let config = environment::config();

    let backend = command.backend.unwrap_or(config.render.backend);
    let math = math::renderer(backend)?;
    let normalizer = Normalizer::with_rules(&config.normalize.rules)?;
    log::debug!(
        "normalize rules: {}",
        normalizer.rules().map(|rule| rule.name.as_str()).join(", ")
    );

    let mut options = RenderOptions::from(&config.render);
    options.block |= command.block;
    let renderer = Renderer::new(math.as_ref(), &normalizer, options);

    let standalone = command.standalone || config.build.standalone;
    let output_dir = command.output.clone().unwrap_or_else(environment::output_dir);

    let sources = collect_question_files(&command.inputs, environment::config_file())?;
    if sources.is_empty() {
        color_print::ceprintln!("<y>Warning: no question files found.</>");
        return Ok(());
    }

    for QuestionSource { root, path, walked } in &sources {
        let questions = match question::load_questions(path) {
            Ok(questions) => questions,
            Err(err) if *walked => {
                log::debug!("{:?}", err);
                color_print::ceprintln!("<y>Skipped</> {}: {}", path, err);
                continue;
            }
            Err(err) => return Err(err),
        };
        let body = questions
            .iter()
            .map(|question| html_flake::html_question(&renderer.render_question(question), &config.text))
            .join("\n");
        let html = match standalone {
            true => html_flake::html_doc(
                &config.text.title,
                &body,
                math.head(),
                config.build.inline_css,
            ),
            false => body,
        };

        if command.stdout {
            println!("{}", html);
            continue;
        }

        let target = output_dir.join(path_utils::html_output_path(root, path));
        write_file(&target, &html)?;
        color_print::cprintln!("<g>Rendered</> {} to {}", path, target);
    }

    if standalone && !config.build.inline_css && !command.stdout {
        let css_path = output_dir.join("main.css");
        if !css_path.exists() {
            write_file(&css_path, html_flake::html_main_style())
                .wrap_err("failed to export CSS")?;
        }
    }
    Ok(())
}

fn write_file(path: &Utf8Path, content: &str) -> eyre::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| eyre!("failed to create directory `{}`", parent))?;
    }
    fs::write(path, content).wrap_err_with(|| eyre!("failed to write `{}`", path))
}

/// A question file and the input it was reached from.
#[derive(Debug, PartialEq, Eq)]
struct QuestionSource {
    /// Walked directory, or the parent of a file named directly. Kept to
    /// mirror the layout in the output directory.
    root: Utf8PathBuf,
    path: Utf8PathBuf,
    /// Found while walking a directory rather than named on the command line.
    walked: bool,
}

/// Directories are walked recursively for `.toml` and `.json` files. The
/// configuration file is never taken as a question file.
fn collect_question_files(
    inputs: &[Utf8PathBuf],
    config_file: Option<&Utf8Path>,
) -> eyre::Result<Vec<QuestionSource>> {
    let is_config = |path: &Utf8Path| {
        path.file_name() == Some(config::CONFIG_FILE_NAME)
            || config_file.is_some_and(|config_file| same_file(path, config_file))
    };

    let mut sources = vec![];
    for input in inputs {
        if input.is_file() {
            sources.push(QuestionSource {
                root: input.parent().map(Utf8Path::to_owned).unwrap_or_default(),
                path: input.clone(),
                walked: false,
            });
            continue;
        }
        if !input.is_dir() {
            bail!("no such file or directory `{}`", input);
        }

        for entry in WalkDir::new(input).follow_links(true).sort_by_file_name() {
            let path: Utf8PathBuf = entry
                .wrap_err_with(|| eyre!("failed to read directory `{}`", input))?
                .into_path()
                .try_into()
                .wrap_err_with(|| eyre!("non-UTF-8 path under `{}`", input))?;
            if path.is_file() && Format::from_path(&path).is_some() && !is_config(&path) {
                sources.push(QuestionSource {
                    root: input.clone(),
                    path,
                    walked: true,
                });
            }
        }
    }
    Ok(sources)
}

fn same_file(a: &Utf8Path, b: &Utf8Path) -> bool {
    match (a.canonicalize_utf8(), b.canonicalize_utf8()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
