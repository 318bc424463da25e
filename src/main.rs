mod errors;
mod generate;
mod model;
mod naming;
mod parse;
mod printer;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use generate::{
    check_unique_themes, generate_symbols_files, generate_umbrella_header,
    GenerateOptions, Language, WriteOutcome, WrittenFile,
};
use model::Theme;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, global = true, default_value_t = false)]
    /// Log every file that is checked, not just the ones written.
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate symbol files for every theme (and an umbrella header).
    Generate {
        #[command(flatten)]
        common: CommonArgs,
        #[clap(short, long, default_value = "    ")]
        /// String used for one level of indentation.
        indentation: String,
        #[clap(long, default_value_t = false, conflicts_with = "indentation")]
        /// Indent with a tab instead.
        tabs: bool,
        #[clap(long, default_value_t = false)]
        /// Generate Swift instead of Objective-C (implies --no-umbrella).
        swift: bool,
        #[clap(long, default_value_t = false)]
        /// Don't generate the umbrella header.
        no_umbrella: bool,
    },
    /// Generate only the umbrella header importing the symbols of all themes.
    Umbrella {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Debug, ClapArgs)]
struct CommonArgs {
    #[clap(required = true)]
    /// Theme files (YAML or JSON), for example ButtonsTheme.yaml.
    themes: Vec<PathBuf>,
    #[clap(short, long, default_value = ".")]
    /// Output directory for all generated files.
    output_dir: PathBuf,
    #[clap(short, long, default_value = "")]
    /// Prefix for all generated symbols and file names.
    prefix: String,
    #[clap(short, long, default_value_t = false)]
    /// Always write the files, even if their content is unchanged.
    force: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    match args.command {
        Command::Generate {
            common,
            indentation,
            tabs,
            swift,
            no_umbrella,
        } => {
            let themes = load_themes(&common.themes)?;
            let options = GenerateOptions {
                directory: common.output_dir.clone(),
                indentation: if tabs { "\t".to_owned() } else { indentation },
                prefix: common.prefix.clone(),
                check_for_modification: !common.force,
                language: if swift { Language::Swift } else { Language::ObjC },
            };
            generate_all(&themes, &options, !no_umbrella)
        }
        Command::Umbrella { common } => {
            let themes = load_themes(&common.themes)?;
            let written = generate_umbrella_header(
                &themes,
                &common.output_dir,
                &common.prefix,
                !common.force,
            )?;
            report(&[written]);
            Ok(())
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();
}

/// Generates the symbols of all themes, followed by the umbrella header.
///
/// Stops at the first theme that fails. Swift output never gets an umbrella
/// header.
fn generate_all(
    themes: &[Theme],
    options: &GenerateOptions,
    umbrella: bool,
) -> anyhow::Result<()> {
    check_unique_themes(themes, &options.prefix)?;

    let mut written = Vec::new();
    for theme in themes {
        if theme.is_empty() {
            warn!("Theme '{}' doesn't define any symbols", theme.name);
        }
        let files = generate_symbols_files(theme, options).with_context(|| {
            format!("Failed to generate symbols for '{}'", theme.name)
        })?;
        written.extend(files);
    }

    if umbrella && options.language == Language::ObjC {
        written.push(
            generate_umbrella_header(
                themes,
                &options.directory,
                &options.prefix,
                options.check_for_modification,
            )
            .context("Failed to generate the umbrella header")?,
        );
    }

    report(&written);
    Ok(())
}

fn report(written: &[WrittenFile]) {
    let changed = written
        .iter()
        .filter(|f| f.outcome == WriteOutcome::Written)
        .count();
    info!("{changed} of {} files changed", written.len());
}

fn load_themes(paths: &[PathBuf]) -> anyhow::Result<Vec<Theme>> {
    paths.iter().map(|p| load_theme(p)).collect()
}

fn load_theme(path: &Path) -> anyhow::Result<Theme> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read '{}'", path.display()))?;
    let name = model::theme_name_for(path).with_context(|| {
        format!("Couldn't derive a theme name from '{}'", path.display())
    })?;

    let mut theme = match parse::parse(&name, &source) {
        Ok(t) => t,
        Err(e) => {
            errors::print_error_with_source(path, &source, &e);
            std::process::exit(1)
        }
    };
    theme.source = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned());
    Ok(theme)
}
