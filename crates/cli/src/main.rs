//! CLI tool for auditing PowerPoint decks for cross-slide inconsistencies.

mod config;
mod progress;
mod style;

use anyhow::Result;
use clap::Parser;
use config::{resolve_settings, FileConfig, Overrides};
use deck_core::{Orchestrator, ResultSource};
use deck_gemini::{GeminiClient, GeminiConfig};
use deck_ocr::TesseractOcr;
use deck_pptx::PptxParser;
use progress::CliProgress;
use std::path::PathBuf;
use std::process::ExitCode;
use style::ColorStyle;

/// Find factual, numerical, and logical inconsistencies across the slides of
/// a PowerPoint deck, including text inside pictures and speaker notes.
#[derive(Parser, Debug)]
#[command(name = "deck-audit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Presentation to audit (.pptx). Overrides `default_file` in the config file.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Save the report as plain text to this file instead of printing it.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force re-analysis and ignore any cached results.
    #[arg(long)]
    no_cache: bool,

    /// Config file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Gemini model. Overrides `model` in the config file.
    #[arg(long)]
    model: Option<String>,

    /// Gemini API key. Overrides `api_key` in the config file.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Tesseract language codes for text inside pictures.
    #[arg(long, default_value = deck_ocr::DEFAULT_LANGUAGE)]
    ocr_lang: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let file_config = FileConfig::load(&args.config)?;
    let settings = resolve_settings(
        file_config,
        Overrides {
            file: args.file.clone(),
            api_key: args.api_key.clone(),
            model: args.model.clone(),
            no_cache: args.no_cache,
        },
    );

    // Fatal configuration problems are reported before any work is done.
    settings.file()?;
    let api_key = settings.api_key()?;

    let parser = PptxParser::new();
    let ocr = TesseractOcr::new().with_language(&args.ocr_lang);
    let analyzer = GeminiClient::new(GeminiConfig::from_settings(&settings, api_key));
    let progress = CliProgress::new();

    let outcome = Orchestrator::new(&settings, &parser, &ocr, &analyzer, &progress).run()?;

    for warning in &outcome.cache_warnings {
        eprintln!("{}", warning);
    }
    match (outcome.source, &outcome.cache_entry) {
        (ResultSource::Cache, Some(entry)) => {
            eprintln!("Loading results from cache: {}", entry.display())
        }
        (ResultSource::Analysis, Some(entry)) => {
            eprintln!("Analysis complete. Results saved to cache: {}", entry.display())
        }
        _ => {}
    }

    let report = outcome.report();
    match &args.output {
        Some(path) => {
            report.write_plain(path)?;
            println!("\nReport successfully saved to {}", path.display());
        }
        None => print!("{}", report.render_decorated(settings.box_width, &ColorStyle)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "deck-audit",
            "--file",
            "q3.pptx",
            "--no-cache",
            "-o",
            "report.txt",
        ])
        .unwrap();

        assert_eq!(args.file, Some(PathBuf::from("q3.pptx")));
        assert_eq!(args.output, Some(PathBuf::from("report.txt")));
        assert!(args.no_cache);
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert_eq!(args.ocr_lang, "eng");
    }
}
