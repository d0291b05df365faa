//! CLI entry point for depgate.
//!
//! This module is intentionally thin: it handles argument parsing, file I/O, logging setup and
//! exit codes. The pipeline itself lives in the `depgate-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use depgate_app::{
    Collaborators, FileConfigSource, PipelineInput, Reporters, ScanHooks, TracingLogger,
    parse_report_json, render_annotations, render_markdown, run_pipeline,
};
use depgate_domain::RuntimeConfiguration;
use depgate_scan::{DEFAULT_PAYLOAD_FILE, PayloadFileScanner};
use depgate_settings::{CONFIG_FILE_NAME, Overrides, default_config_toml};
use depgate_types::ScanPayload;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "depgate",
    version,
    about = "CI policy gate over dependency scan results"
)]
struct Cli {
    /// Project root scanned by the external scanner.
    #[arg(long, default_value = ".")]
    root_dir: Utf8PathBuf,

    /// Path to the depgate config TOML, relative to the root directory.
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: Utf8PathBuf,

    /// Enable verbose logging (info level).
    #[arg(long, global = true)]
    verbose: bool,

    /// Enable debug logging (debug level).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interpret a scan payload against the policy and run the configured reporters.
    Check {
        /// Scan payload JSON written by the scanner, relative to the root directory.
        #[arg(long, default_value = DEFAULT_PAYLOAD_FILE)]
        payload: Utf8PathBuf,

        /// Override the vulnerability strategy (npm|node|snyk|sonatype|none).
        #[arg(long)]
        strategy: Option<String>,

        /// Override the minimum failing severity (info|low|medium|high|critical|all).
        #[arg(long)]
        vulnerability: Option<String>,

        /// Override the dependency warnings policy (error|warning|off).
        #[arg(long)]
        warnings: Option<String>,

        /// Override the reporters to run (console,json,markdown).
        #[arg(long, value_delimiter = ',')]
        reporters: Option<Vec<String>>,

        /// Where the json and markdown reporters write their files, relative to the root directory.
        #[arg(long, default_value = "artifacts/depgate")]
        out_dir: Utf8PathBuf,

        /// Report a failing status without a failing exit code.
        #[arg(long)]
        no_auto_exit: bool,
    },

    /// Write the default config file if none exists.
    Init,

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/depgate/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/depgate/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    match cli.cmd {
        Commands::Check {
            ref payload,
            ref strategy,
            ref vulnerability,
            ref warnings,
            ref reporters,
            ref out_dir,
            no_auto_exit,
        } => {
            let overrides = Overrides {
                strategy: strategy.clone(),
                vulnerability_severity: vulnerability.clone(),
                warnings: warnings.clone(),
                reporters: reporters.clone(),
            };
            cmd_check(&cli, payload, overrides, out_dir, !no_auto_exit)
        }
        Commands::Init => cmd_init(&cli),
        Commands::Md {
            ref report,
            ref output,
        } => cmd_md(report, output.as_deref()),
        Commands::Annotations { ref report, max } => cmd_annotations(report, max),
    }
}

fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("logging initialized at level: {}", level);
}

/// Progress lines around the scan call.
struct ConsoleScanHooks;

impl ScanHooks for ConsoleScanHooks {
    fn before_scan(&self, cfg: &RuntimeConfiguration) {
        eprintln!(
            "depgate: scanning {} (strategy: {})",
            cfg.root_dir,
            cfg.strategy.as_str()
        );
    }

    fn after_scan(&self, payload: &ScanPayload) {
        eprintln!(
            "depgate: scan loaded ({} dependencies, {} vulnerabilities)",
            payload.dependencies.len(),
            payload.vulnerability_count()
        );
    }
}

fn cmd_check(
    cli: &Cli,
    payload: &Utf8Path,
    overrides: Overrides,
    out_dir: &Utf8Path,
    auto_exit_after_failure: bool,
) -> anyhow::Result<()> {
    let root_dir = cli
        .root_dir
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.root_dir.clone());

    let input = PipelineInput {
        root_dir: &root_dir,
        overrides,
        auto_exit_after_failure,
    };

    let config = FileConfigSource::new(cli.config.clone());
    let scanner = PayloadFileScanner::new(payload.to_path_buf());
    let reporters = Reporters::standard(&root_dir.join(out_dir));
    let collab = Collaborators {
        config: &config,
        scanner: &scanner,
        reporters: &reporters,
        hooks: &ConsoleScanHooks,
        logger: &TracingLogger,
    };

    let outcome = run_pipeline(input, &collab);
    if outcome.payload.is_none() {
        eprintln!("depgate: run aborted; see the error above");
    }

    let code = outcome.exit.code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_init(cli: &Cli) -> anyhow::Result<()> {
    let path = cli.root_dir.join(&cli.config);
    if path.exists() {
        eprintln!("depgate: {} already exists; leaving it untouched", path);
        return Ok(());
    }

    let text = default_config_toml().context("render default config")?;
    write_text_file(&path, &text).context("write default config")?;
    eprintln!("depgate: wrote {}", path);
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&report, max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
