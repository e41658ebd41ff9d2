//! CLI binary for letter-context.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `GenerateConfig`, writes the field files, and prints a summary.

use anyhow::{Context, Result};
use clap::Parser;
use letter_context::{generate, BlankLinePolicy, FieldSet, GenerateConfig, ParserConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Write config/<Field>.tex for every field
  letter acme.letter

  # Write somewhere else, as .txt files
  letter acme.letter -o build/fields --extension txt

  # Inspect the parsed fields without writing anything
  letter acme.letter --json

  # Do not fill in Location / Recipient / Closing defaults
  letter acme.letter --no-defaults

FILE FORMAT:
  Recipient:-Ms Jane Lee          single-line field
  Opening~-                       multi-line field, closed by -~
  Dear Jane,
  -~
  ~-                              the Content block
  See Link(my work, https://me.dev) or mail me@me.dev.
  -~

DEFAULT FIELDS:
  Location   Melbourne, VIC
  Recipient  Hiring Manager
  Closing    Warm Regards
"#;

/// Parse a letter context file into one LaTeX snippet per field.
#[derive(Parser, Debug)]
#[command(
    name = "letter",
    version,
    about = "Parse a letter context file into one LaTeX snippet per field",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Letter context file.
    input: PathBuf,

    /// Directory receiving the field files.
    #[arg(short, long, env = "LETTER_OUTPUT_DIR", default_value = "config")]
    output_dir: PathBuf,

    /// Extension of each field file.
    #[arg(long, env = "LETTER_EXTENSION", default_value = "tex")]
    extension: String,

    /// Parse and report the fields; write no files.
    #[arg(long, env = "LETTER_DRY_RUN")]
    dry_run: bool,

    /// Print the fields as JSON on stdout instead of writing files.
    #[arg(long, env = "LETTER_JSON")]
    json: bool,

    /// Do not merge the default Location/Recipient/Closing values.
    #[arg(long, env = "LETTER_NO_DEFAULTS")]
    no_defaults: bool,

    /// Keep every blank line inside multi-line blocks.
    #[arg(long, env = "LETTER_PRESERVE_BLANK_LINES")]
    preserve_blank_lines: bool,

    /// LaTeX colour name used for hyperlinks.
    #[arg(long, env = "LETTER_LINK_COLOR", default_value = "Purple_200")]
    link_color: String,

    /// Single-line field delimiter.
    #[arg(long, env = "LETTER_SINGLE_LINE_SEP", default_value = ":-")]
    single_line_sep: String,

    /// Marker opening a multi-line block.
    #[arg(long, env = "LETTER_BLOCK_START", default_value = "~-", allow_hyphen_values = true)]
    block_start: String,

    /// Marker closing a multi-line block.
    #[arg(long, env = "LETTER_BLOCK_END", default_value = "-~", allow_hyphen_values = true)]
    block_end: String,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "LETTER_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "LETTER_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || cli.json {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = build_config(&cli)?;

    // ── Run ──────────────────────────────────────────────────────────────
    let output = generate(&cli.input, &config)
        .with_context(|| format!("Failed to process {}", cli.input.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output.fields)
            .context("Failed to serialise fields")?;
        println!("{json}");
        return Ok(());
    }

    if !cli.quiet {
        print_summary(&output.fields, output.defaulted_fields);
        match output.write {
            Some(stats) => eprintln!(
                "{}  {} files  {} bytes  {}ms  →  {}",
                green("✔"),
                stats.files_written,
                stats.bytes_written,
                output.duration_ms,
                bold(&config.output_dir.display().to_string()),
            ),
            None => eprintln!(
                "{}  parsed {} fields  {}",
                green("✔"),
                output.fields.len(),
                dim("(nothing written)")
            ),
        }
    }

    Ok(())
}

/// Map CLI args to `GenerateConfig`.
fn build_config(cli: &Cli) -> Result<GenerateConfig> {
    let blank_lines = if cli.preserve_blank_lines {
        BlankLinePolicy::Preserve
    } else {
        BlankLinePolicy::Collapse
    };

    let parser = ParserConfig::builder()
        .single_line_delimiter(&cli.single_line_sep)
        .block_start(&cli.block_start)
        .block_end(&cli.block_end)
        .blank_lines(blank_lines)
        .link_color(&cli.link_color)
        .build()
        .context("Invalid parser configuration")?;

    GenerateConfig::builder()
        .parser(parser)
        .output_dir(&cli.output_dir)
        .extension(&cli.extension)
        .apply_defaults(!cli.no_defaults)
        .dry_run(cli.dry_run || cli.json)
        .build()
        .context("Invalid configuration")
}

/// One line per field: name and the first line of its value.
fn print_summary(fields: &FieldSet, defaulted: usize) {
    for (name, value) in fields.iter() {
        let first = value.lines().next().unwrap_or("");
        let preview = if first.chars().count() > 60 {
            format!("{}\u{2026}", first.chars().take(59).collect::<String>())
        } else {
            first.to_string()
        };
        eprintln!("  {:<12} {}", bold(name), dim(&preview));
    }
    if defaulted > 0 {
        eprintln!("  {}", dim(&format!("{defaulted} field(s) from defaults")));
    }
}
