// Copyright 2024 Mikael Lund
//
// Licensed under the Apache license, version 2.0 (the "license");
// you may not use this file except in compliance with the license.
// You may obtain a copy of the license at
//
//     http://www.apache.org/licenses/license-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the license is distributed on an "as is" basis,
// without warranties or conditions of any kind, either express or implied.
// See the license for the specific language governing permissions and
// limitations under the license.

//! # Diagnostics for lookups that fall back to a default value
//!
//! Property lookups never fail. When a symbol is missing from a table, a message is
//! handed to a [`DiagnosticSink`] and a default value is returned instead.
//! Reporting is best-effort and never affects the returned value.
//!
//! ~~~
//! use pdb_elements::diagnostic::{fallback, RecordingSink};
//! let sink = RecordingSink::default();
//! let value: u32 = fallback(&sink, "no such thing", 0);
//! assert_eq!(value, 0);
//! assert_eq!(sink.messages(), vec!["no such thing".to_string()]);
//! ~~~

use std::io::Write;
use std::sync::Mutex;

/// Receiver of diagnostic messages
pub trait DiagnosticSink: Send + Sync {
    /// Report a single message. Must not panic or propagate errors.
    fn report(&self, message: &str);
}

/// Forwards messages to the `log` facade at warning level.
///
/// This is the default sink; where the messages end up is decided by the logger
/// installed by the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, message: &str) {
        log::warn!(target: "pdb_elements", "{}", message);
    }
}

/// Writes each message as one line to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, message: &str) {
        let line = format!("{}\n", message);
        // single write so concurrent messages do not interleave
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
    }
}

/// Discards all messages
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&self, _message: &str) {}
}

/// Keeps all messages in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Copy of all messages reported so far
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Number of messages reported so far
    pub fn len(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return all messages
    pub fn take(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut messages| std::mem::take(&mut *messages))
            .unwrap_or_default()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// Report `message` to `sink` and hand back `default` untouched
pub fn fallback<T>(sink: &dyn DiagnosticSink, message: impl AsRef<str>, default: T) -> T {
    sink.report(message.as_ref());
    default
}
