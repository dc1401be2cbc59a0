use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use reaction_core::{Disposition, Reaction};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build a reaction from a raw disposition code and branch on it.
///
/// Exits with 0 on success, 1 on failure, 2 when the disposition code is
/// invalid and 3 when output cannot be written.
#[derive(Debug, Parser)]
#[command(name = "reaction", version)]
struct Args {
    /// Message carried by the reaction.
    #[arg(short, long, default_value = "")]
    message: String,

    /// Raw disposition code (1 = success, 2 = failure).
    #[arg(
        short,
        long,
        default_value_t = Disposition::SUCCESS_CODE,
        allow_negative_numbers = true
    )]
    disposition: i64,

    /// Print the reaction as JSON instead of running the branch callbacks.
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "REACTION_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn build(args: &Args) -> anyhow::Result<Reaction> {
    Reaction::from_raw(args.message.as_str(), args.disposition)
        .with_context(|| format!("building reaction from disposition code {}", args.disposition))
}

const SUCCESS_STATUS: u8 = 0;
const FAILURE_STATUS: u8 = 1;
const INVALID_DISPOSITION_STATUS: u8 = 2;
const OUTPUT_ERROR_STATUS: u8 = 3;

fn exit_status(reaction: &Reaction) -> u8 {
    match reaction.disposition() {
        Disposition::Success => SUCCESS_STATUS,
        Disposition::Failure => FAILURE_STATUS,
    }
}

/// Builds the reaction, writes its branch to `out` and returns the exit status.
fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<u8> {
    // (A) 生のコードから Reaction を作る（不正なコードは専用の終了コード）
    let reaction = match build(args) {
        Ok(reaction) => reaction,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "invalid disposition");
            eprintln!("Error: {e:#}");
            return Ok(INVALID_DISPOSITION_STATUS);
        }
    };
    tracing::info!(disposition = %reaction.disposition(), "reaction built");

    // (B) JSON 出力 or コールバックで分岐
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&reaction)?)?;
    } else {
        reaction
            .try_on_success(|r| writeln!(out, "succeeded: {}", r.message()))?
            .try_on_failure(|r| writeln!(out, "failed: {}", r.message()))?;
    }

    Ok(exit_status(&reaction))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut stdout = std::io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(OUTPUT_ERROR_STATUS)
        }
    }
}
