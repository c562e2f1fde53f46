//! A small shared diagnostic shape so the CLI can render `ParseError` and
//! `CompileError` through one code path instead of matching each enum
//! separately.

use crate::String;

/// How serious a diagnostic is. Only `Error` is produced today; the
/// variant exists so a future warning pass (e.g. an unused-variable
/// lint) has somewhere to plug in without changing the shape callers
/// match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// A single reportable message tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub line: u32,
}

impl Diagnostic {
    pub fn error(message: String, line: u32) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message,
            line,
        }
    }
}

/// Implemented by the crate's error types to convert into the shared
/// reporting shape.
pub trait ToDiagnostic {
    fn to_diagnostic(&self) -> Diagnostic;
}
