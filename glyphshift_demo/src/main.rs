use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use glyphshift_core::{Config, ConfigBuilder, ObfuscationLevel, ShiftEngine, level_preset};
use log::{LevelFilter, debug};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "glyphshift",
    author,
    version,
    about = "Deterministic string rotation and SHA-512 mixing (not encryption)"
)]
struct Cli {
    /// Log each operation (-v) or each round (-vv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Preset the remaining options start from.
    #[arg(long, global = true, value_enum, default_value = "standard")]
    level: LevelArg,
    /// JSON config file layered over the preset.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[arg(long, global = true, allow_negative_numbers = true)]
    shift: Option<i32>,
    #[arg(long, global = true, allow_negative_numbers = true)]
    shift_rounds: Option<i32>,
    #[arg(long, global = true, allow_negative_numbers = true)]
    hash_rounds: Option<i32>,
    /// Flip positive shifts at odd positions; `--alternate=false` clears it.
    #[arg(long, global = true, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    alternate: Option<bool>,
    #[arg(long, global = true, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    ignore_space: Option<bool>,
    /// Keep hex rotation inside 0-9, a-f, A-F.
    #[arg(long, global = true, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    restrict_hex: Option<bool>,
    #[arg(long, global = true, value_name = "N")]
    parallel_threshold: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LevelArg {
    Light,
    Standard,
    Heavy,
}

impl From<LevelArg> for ObfuscationLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Light => ObfuscationLevel::Light,
            LevelArg::Standard => ObfuscationLevel::Standard,
            LevelArg::Heavy => ObfuscationLevel::Heavy,
        }
    }
}

#[derive(Args)]
struct InputArgs {
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,
    /// Read the input from a file; one trailing newline is dropped.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rotate letters, digits and spaces.
    Ascii(InputArgs),
    /// Rotate a hex string.
    Hex(InputArgs),
    /// Rotate, interleaving SHA-512 digests between rounds.
    Mix(InputArgs),
    /// Hash repeatedly with SHA-512.
    Hash(InputArgs),
    /// Print the effective configuration as JSON.
    ShowConfig {
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = resolve_config(&cli)?;
    debug!("effective config {:?}", config);
    let engine = ShiftEngine::new(config);
    match cli.command {
        Commands::Ascii(input) => run_operation("ascii", input, |s| engine.ascii_rotate(s)),
        Commands::Hex(input) => run_operation("hex", input, |s| engine.hex_rotate(s)),
        Commands::Mix(input) => run_operation("mix", input, |s| engine.rotate_and_hash(s)),
        Commands::Hash(input) => run_operation("hash", input, |s| engine.hash_only(s)),
        Commands::ShowConfig { out } => cmd_show_config(&config, out),
    }
}

// Scoped to our own crates so RUST_LOG can still reach rayon and friends.
fn log_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    format!("glyphshift={level},glyphshift_core={level}")
}

fn init_logging(verbosity: u8) {
    let env = Env::default().default_filter_or(log_filter(verbosity));
    let mut builder = env_logger::Builder::from_env(env);
    builder
        .format_timestamp(None)
        .format_target(verbosity > 1);
    let _ = builder.try_init();
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => level_preset(cli.level.into()),
    };
    let mut builder = ConfigBuilder::from_config(base);
    if let Some(shift) = cli.shift {
        builder = builder.with_shift(shift);
    }
    if let Some(rounds) = cli.shift_rounds {
        builder = builder.with_shift_rounds(rounds);
    }
    if let Some(rounds) = cli.hash_rounds {
        builder = builder.with_hash_rounds(rounds);
    }
    if let Some(threshold) = cli.parallel_threshold {
        builder = builder.with_parallel_threshold(threshold);
    }
    if let Some(alternate) = cli.alternate {
        builder = builder.with_alternate(alternate);
    }
    if let Some(ignore) = cli.ignore_space {
        builder = builder.with_ignore_space(ignore);
    }
    if let Some(restrict) = cli.restrict_hex {
        builder = builder.with_restrict_hash_shift(restrict);
    }
    Ok(builder.build())
}

fn run_operation<F>(label: &str, input: InputArgs, op: F) -> Result<()>
where
    F: Fn(&str) -> Result<String, glyphshift_core::ShiftError>,
{
    let text = resolve_input(input)?;
    debug!("{} cmd input_chars={}", label, text.chars().count());
    let output = op(&text).with_context(|| format!("{label} operation failed"))?;
    println!("{output}");
    Ok(())
}

fn cmd_show_config(config: &Config, out: Option<PathBuf>) -> Result<()> {
    let serialized = serde_json::to_string_pretty(config)?;
    match out {
        Some(path) => {
            fs::write(&path, serialized)
                .with_context(|| format!("writing config to {}", path.display()))?;
            println!("Wrote config to {}", path.display());
        }
        None => println!("{serialized}"),
    }
    Ok(())
}

fn resolve_input(input: InputArgs) -> Result<String> {
    match (input.text, input.input) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => {
            let mut text = fs::read_to_string(&path)
                .with_context(|| format!("reading input from {}", path.display()))?;
            if text.ends_with('\n') {
                text.pop();
                if text.ends_with('\r') {
                    text.pop();
                }
            }
            Ok(text)
        }
        (Some(_), Some(_)) => bail!("Provide either --text or --input, not both."),
        (None, None) => bail!("Provide --text TEXT or --input FILE."),
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let data =
        fs::read(path).with_context(|| format!("reading config from {}", path.display()))?;
    let config =
        serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}
