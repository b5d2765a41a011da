//! Rendering of recovered honeypot connection logs.
//!
//! The reporter persists a JSON array of [`ConnLog`] records before each
//! upload attempt, so a decrypted artifact is almost always that array. The
//! helpers here are optional views over a [`Plaintext`]; decryption itself
//! never depends on the payload being JSON.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plaintext::Plaintext;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Plaintext is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Decrypted plaintext is not valid UTF-8")]
    InvalidPlaintextEncoding,
}

/// One recorded interaction with a honeypot listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnLog {
    pub timestamp: String,
    pub src_ip:    String,
    pub src_port:  u16,
    pub dst_port:  u16,
    pub protocol:  String,
    #[serde(default)]
    pub commands:  Vec<String>,
}

/// Parse the plaintext as the reporter's log array.
pub fn parse_logs(plaintext: &Plaintext) -> Result<Vec<ConnLog>, ReportError> {
    let text = utf8(plaintext)?;
    Ok(serde_json::from_str(text)?)
}

/// Re-indent any JSON document, whatever its shape.
pub fn pretty_json(plaintext: &Plaintext) -> Result<String, ReportError> {
    let text = utf8(plaintext)?;
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Fixed-width table, one row per connection, followed by a total line.
pub fn render_summary(logs: &[ConnLog]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<26} {:<8} {:>21} {:>6} {:>5}  First command",
        "Timestamp", "Proto", "Source", "Port", "Cmds"
    );
    for log in logs {
        let source = format!("{}:{}", log.src_ip, log.src_port);
        let first = log
            .commands
            .first()
            .map(|c| printable(c, 48))
            .unwrap_or_else(|| "—".into());
        let _ = writeln!(
            out,
            "{:<26} {:<8} {:>21} {:>6} {:>5}  {}",
            log.timestamp, log.protocol, source, log.dst_port, log.commands.len(), first
        );
    }
    let _ = writeln!(out, "{} connection(s)", logs.len());
    out
}

fn utf8(plaintext: &Plaintext) -> Result<&str, ReportError> {
    std::str::from_utf8(plaintext.as_bytes()).map_err(|_| ReportError::InvalidPlaintextEncoding)
}

/// Attacker-supplied text: escape control characters and cap the width.
fn printable(s: &str, max_chars: usize) -> String {
    let escaped: String = s.chars().flat_map(char::escape_debug).collect();
    if escaped.chars().count() <= max_chars {
        escaped
    } else {
        let mut cut: String = escaped.chars().take(max_chars.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
