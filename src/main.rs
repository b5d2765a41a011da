use clap::{Parser, ValueEnum};
use pending_decrypt::report::{self, ReportError};
use pending_decrypt::telemetry::{self, LogFormat};
use pending_decrypt::{decrypt_file, DecryptError, Plaintext};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "decrypt-pending",
    version,
    about = "Decrypt a pending-log file written by the honeypot reporter"
)]
struct Cli {
    /// Base64 artifact file: nonce (12 B) || ciphertext || GCM tag (16 B)
    artifact: PathBuf,
    /// Base64-encoded AES key (16, 24 or 32 bytes once decoded)
    key_b64: String,
    /// How to write the recovered plaintext to stdout
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text)]
    output: OutputMode,
    /// Log filter for diagnostics on stderr (e.g. warn, debug)
    #[arg(long, default_value = "warn")]
    log_level: String,
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// UTF-8 text, verbatim; non-UTF-8 plaintext is an error
    Text,
    /// Bytes verbatim, no encoding check
    Raw,
    /// Re-indented JSON
    Pretty,
    /// One line per recorded connection
    Summary,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Decrypt(#[from] DecryptError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("Writing output: {0}")]
    Output(#[source] io::Error),
}

fn main() -> ExitCode {
    // clap exits with status 2 on missing arguments before anything is read.
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(&cli.log_level, cli.log_format) {
        eprintln!("decrypt-pending: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("decrypt-pending: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let plaintext = decrypt_file(&cli.artifact, &cli.key_b64)?;
    info!(bytes = plaintext.len(), "artifact decrypted");

    let rendered = render(&plaintext, cli.output)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&rendered).map_err(CliError::Output)?;
    stdout.flush().map_err(CliError::Output)
}

fn render(plaintext: &Plaintext, mode: OutputMode) -> Result<Vec<u8>, CliError> {
    Ok(match mode {
        OutputMode::Text    => plaintext.as_utf8()?.as_bytes().to_vec(),
        OutputMode::Raw     => plaintext.as_bytes().to_vec(),
        OutputMode::Pretty  => {
            let mut s = report::pretty_json(plaintext)?;
            s.push('\n');
            s.into_bytes()
        }
        OutputMode::Summary => report::render_summary(&report::parse_logs(plaintext)?).into_bytes(),
    })
}
