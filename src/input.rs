//! Resolving what text to analyze from the command line arguments.

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::InputError;

/// Where the analyzed text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Literal,
    File(PathBuf),
    Stdin,
}

/// Resolve `literal` to text: an existing file path is read, other
/// non-blank text is used as-is, and blank text falls back to stdin.
/// Blank results are rejected with [`InputError::NoInput`].
pub fn resolve(literal: &str, stdin_wait: Duration) -> Result<(Source, String), InputError> {
    let (source, text) = match resolve_argument(literal)? {
        Some(found) => found,
        None => {
            let text = read_stdin(stdin_wait)?.unwrap_or_default();
            (Source::Stdin, text)
        }
    };

    if text.trim().is_empty() {
        return Err(InputError::NoInput);
    }
    tracing::debug!(?source, bytes = text.len(), "input resolved");
    Ok((source, text))
}

/// The argument-only half of [`resolve`]. `None` means stdin should be tried.
pub fn resolve_argument(literal: &str) -> Result<Option<(Source, String)>, InputError> {
    if literal.trim().is_empty() {
        return Ok(None);
    }

    let path = Path::new(literal);
    if path.is_file() {
        let text = std::fs::read_to_string(path).map_err(|source| InputError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(Some((Source::File(path.to_path_buf()), text)));
    }

    Ok(Some((Source::Literal, literal.to_string())))
}

/// Read all of stdin, giving up after `wait`. A terminal counts as no input.
fn read_stdin(wait: Duration) -> Result<Option<String>, InputError> {
    if io::stdin().is_terminal() {
        return Ok(None);
    }

    let (tx, rx) = mpsc::channel();
    // The reader is left blocked if the wait expires; the process exits soon after.
    thread::spawn(move || {
        let mut buf = String::new();
        let read = io::stdin().read_to_string(&mut buf).map(|_| buf);
        let _ = tx.send(read);
    });

    match rx.recv_timeout(wait) {
        Ok(Ok(text)) => Ok(Some(text)),
        Ok(Err(e)) => Err(InputError::Stdin(e)),
        Err(_) => {
            tracing::debug!(?wait, "no data on stdin");
            Ok(None)
        }
    }
}
