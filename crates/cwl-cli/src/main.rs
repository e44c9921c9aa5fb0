/// CloudWatch Logs subscription payload tool: process, validate, encode,
/// and summarise the compressed batches a log subscription delivers.
///
/// # Command overview
///
/// ```text
/// cwl <COMMAND> [OPTIONS]
///
/// Commands:
///   process    Decode an invocation event and print the batch report
///   validate   Run each decode stage and report which one fails
///   encode     Build an invocation event from a JSON log batch
///   stats      Print size, compression and event statistics
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log pipeline stages to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// `<EVENT>` arguments accept `-` for stdin. With `--raw` the input is the
/// bare base64 payload instead of `{"awslogs": {"data": ...}}`.
///
/// # Exit codes
///
/// | Code | Meaning                                        |
/// |------|------------------------------------------------|
/// | 0    | Success                                        |
/// | 1    | Error (I/O failure, undecodable payload, etc.) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_encode;
mod cmd_process;
mod cmd_stats;
mod cmd_validate;
mod input;
mod logging;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "cwl", version, about = "CloudWatch Logs subscription payload tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log pipeline stages (debug level) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode an invocation event and print the batch report.
    Process(ProcessArgs),
    /// Run each decode stage and report which one fails.
    Validate(ValidateArgs),
    /// Build an invocation event from a JSON log batch.
    Encode(EncodeArgs),
    /// Print size, compression and event statistics.
    Stats(StatsArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `cwl process`.
///
/// Acts as the host: feeds one event to the handler, which writes the
/// report to stdout. On failure nothing is printed to stdout.
///
/// ```text
/// ┌──────────────────────────┬────────────────────────────────────────────┐
/// │ Flag                     │ Effect                                     │
/// ├──────────────────────────┼────────────────────────────────────────────┤
/// │ --raw                    │ Input is the bare base64 payload           │
/// │ --emit-response          │ Print the response JSON after the report   │
/// │ --max-decompressed-size  │ Decompression ceiling in bytes             │
/// └──────────────────────────┴────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ProcessArgs {
    /// Invocation event JSON file, or `-` for stdin.
    pub event: PathBuf,

    /// Treat the input as the bare base64 payload.
    #[arg(long)]
    pub raw: bool,

    /// Print the handler's response JSON after the report.
    #[arg(long)]
    pub emit_response: bool,

    /// Reject payloads whose JSON text exceeds this many bytes.
    #[arg(long)]
    pub max_decompressed_size: Option<usize>,
}

/// Arguments for `cwl validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Invocation event JSON file, or `-` for stdin.
    pub event: PathBuf,

    /// Treat the input as the bare base64 payload.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for `cwl encode`.
///
/// Reads a log batch in its decoded JSON form:
///
/// ```json
/// {
///   "messageType": "DATA_MESSAGE",
///   "owner": "123456789012",
///   "logGroup": "/app/test",
///   "logStream": "s1",
///   "subscriptionFilters": ["f1"],
///   "logEvents": [{ "id": "e1", "timestamp": 1700000000000, "message": "hello" }]
/// }
/// ```
///
/// and writes the invocation event a subscription would deliver for it.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Path to the log batch JSON document, or `-` for stdin.
    pub input: PathBuf,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write only the base64 payload, not the invocation event wrapper.
    #[arg(long)]
    pub raw: bool,

    /// gzip compression level (0-9).
    #[arg(long, default_value_t = 6)]
    pub level: u32,
}

/// Arguments for `cwl stats`.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Invocation event JSON file, or `-` for stdin.
    pub event: PathBuf,

    /// Treat the input as the bare base64 payload.
    #[arg(long)]
    pub raw: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Process(args) => cmd_process::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Stats(args) => cmd_stats::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
