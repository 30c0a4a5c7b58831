// SPDX-License-Identifier: PMPL-1.0-or-later

//! aura-strings: inspect, export and check the Aura display's UI string tables

use anyhow::Result;
use aura_strings::diagnostics;
use aura_strings::glyphs::{GlyphReport, DEFAULT_FONT_CHARS};
use aura_strings::i18n::Language;
use aura_strings::report::{self, BundleDocument, OutputFormat, TextFormatter};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aura-strings")]
#[command(version)]
#[command(about = "Inspect, export and check the Aura display's UI string tables")]
#[command(long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the string bundle for one language
    Show {
        /// Language code or name (default: en)
        #[arg(short, long, conflicts_with = "ordinal")]
        lang: Option<Language>,

        /// Raw persisted language ordinal; unknown values fall back to en
        #[arg(long, allow_negative_numbers = true)]
        ordinal: Option<i64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List supported languages
    Languages,

    /// Report the non-ASCII glyphs the tables need from the display font
    Glyphs {
        /// Characters the font was generated with
        #[arg(long, default_value = DEFAULT_FONT_CHARS)]
        font_chars: String,

        /// Also check coverage of common European place-name characters
        #[arg(long)]
        locations: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write every bundle to a directory
    Export {
        /// Destination directory
        #[arg(short, long, default_value = "bundles")]
        dir: PathBuf,

        /// Formats to write
        #[arg(long, value_enum, value_delimiter = ',', default_value = "json")]
        formats: Vec<OutputFormat>,
    },

    /// Check the tables' invariants
    Diagnostics {
        /// Characters the font was generated with
        #[arg(long, default_value = DEFAULT_FONT_CHARS)]
        font_chars: String,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show {
            lang,
            ordinal,
            format,
        } => {
            let language = match (lang, ordinal) {
                (Some(lang), _) => lang,
                (None, Some(raw)) => Language::from_ordinal_lossy(raw),
                (None, None) => Language::default(),
            };
            log::debug!("showing bundle for {}", language);

            let doc = BundleDocument::new(language);
            match format {
                OutputFormat::Text => print!("{}", TextFormatter::new().bundle(&doc)),
                other => println!("{}", other.render_bundle(&doc)?),
            }
        }

        Commands::Languages => report::print_languages(),

        Commands::Glyphs {
            font_chars,
            locations,
            format,
        } => {
            let summary = GlyphReport::analyze().summary(&font_chars, locations);
            match format {
                OutputFormat::Text => print!("{}", TextFormatter::new().glyphs(&summary)),
                other => println!("{}", other.render_glyphs(&summary)?),
            }
        }

        Commands::Export { dir, formats } => {
            let written = report::export_bundles(&dir, &formats)?;
            println!("Exported {} files to {}", written.len(), dir.display());
        }

        Commands::Diagnostics { font_chars } => {
            diagnostics::run_self_diagnostics(&font_chars)?;
        }
    }

    Ok(())
}
