//! `lacquer` - design-token pipeline CLI.
//!
//! Two one-shot build-time commands:
//!
//! - `lacquer generate` reads the palette and semantic documents from their
//!   conventional paths and rewrites the generated stylesheet.
//! - `lacquer lint` scans the source trees for raw color literals and
//!   fails when any are found outside the exempt set.
//!
//! Both run with no arguments against the fixed conventional paths; flags
//! exist for non-standard checkouts. Exit code is 0 on success, 1 on any
//! generation error or lint finding.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use console::Style;
use tracing::{debug, info};

use lacquer_lint::{scan, ScanConfig};
use lacquer_tokens::{generate_to_disk, PipelineConfig};

#[derive(Parser)]
#[command(name = "lacquer")]
#[command(version)]
#[command(about = "Generate themed CSS custom properties and lint for raw color literals")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the stylesheet from the palette and semantic documents
    Generate(GenerateArgs),

    /// Scan source trees for raw color literals
    Lint(LintArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Palette document
    #[arg(long, default_value = "tokens/palette.json")]
    palette: PathBuf,

    /// Semantic token document
    #[arg(long, default_value = "tokens/semantic.json")]
    semantic: PathBuf,

    /// Output stylesheet
    #[arg(long, default_value = "styles/tokens.css")]
    out: PathBuf,
}

#[derive(Args)]
struct LintArgs {
    /// Directories to scan (defaults to src and components)
    #[arg(value_name = "ROOT")]
    roots: Vec<PathBuf>,

    /// Additional exempt file names
    #[arg(long, value_name = "NAME")]
    exempt: Vec<String>,

    /// Print findings as JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Lint(args) => run_lint(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            let error_style = Style::new().red().bold();
            eprintln!("{} {:#}", error_style.apply_to("error:"), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with_target(false)
        .init();
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<ExitCode> {
    let config = PipelineConfig {
        palette_path: args.palette,
        semantic_path: args.semantic,
        output_path: args.out,
        ..PipelineConfig::default()
    };

    info!(
        "generating {} from {} and {}",
        config.output_path.display(),
        config.palette_path.display(),
        config.semantic_path.display()
    );
    let generated = generate_to_disk(&config)?;

    let ok = Style::new().green();
    println!(
        "{} wrote {} ({} palette, {} light, {} dark variables)",
        ok.apply_to("✓"),
        config.output_path.display(),
        generated.palette_count,
        generated.light_count,
        generated.dark_count
    );
    Ok(ExitCode::SUCCESS)
}

fn run_lint(args: LintArgs) -> anyhow::Result<ExitCode> {
    let mut config = ScanConfig::default();
    if !args.roots.is_empty() {
        config.roots = args.roots;
    }
    config.exempt_files.extend(args.exempt);

    debug!("scanning roots: {:?}", config.roots);
    let report = scan(&config)?;
    info!(
        "scanned {} files, {} findings",
        report.files_scanned,
        report.findings.len()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.findings)?);
    } else {
        let literal_style = Style::new().red();
        for finding in &report.findings {
            println!(
                "{}:{}  {}",
                finding.path.display(),
                finding.line,
                literal_style.apply_to(&finding.literal)
            );
        }
    }

    if report.clean() {
        let ok = Style::new().green();
        println!(
            "{} no raw color literals ({} files scanned)",
            ok.apply_to("✓"),
            report.files_scanned
        );
        Ok(ExitCode::SUCCESS)
    } else {
        let fail = Style::new().red().bold();
        eprintln!(
            "{} {} raw color literal(s) found; use generated custom properties instead",
            fail.apply_to("✗"),
            report.findings.len()
        );
        Ok(ExitCode::FAILURE)
    }
}
