use core::fmt;

use crate::diagnostics::{Diagnostic, ToDiagnostic};
use crate::{format, Box};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    UndefinedVariable { name: Box<str>, line: u32 },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UndefinedVariable { name, line } => {
                write!(f, "line {}: undefined variable '{}'", line, name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CompileError {}

impl ToDiagnostic for CompileError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::UndefinedVariable { name, line } => {
                Diagnostic::error(format!("undefined variable '{}'", name), *line)
            }
        }
    }
}
