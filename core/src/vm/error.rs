use core::fmt;

/// VM precondition failures. Per the language's error-tier design these
/// are fatal: there is no source-level exception mechanism, so every
/// variant here aborts execution with a diagnostic rather than being
/// recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    StackUnderflow,
    CallStackUnderflow,
    TypeMismatch { op: &'static str, ip: usize },
    DivisionByZero { ip: usize },
    IndexOutOfRange { index: i64, len: usize },
    JumpOutOfRange { target: usize },
    IpOutOfRange { ip: usize },
    UndefinedOpcode { raw: i64, ip: usize },
    ConstantOutOfRange { index: usize },
    Io,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::StackUnderflow => write!(f, "operand stack underflow"),
            RuntimeError::CallStackUnderflow => write!(f, "RET with no active call frame"),
            RuntimeError::TypeMismatch { op, ip } => {
                write!(f, "type mismatch for {} at ip {}", op, ip)
            }
            RuntimeError::DivisionByZero { ip } => write!(f, "division by zero at ip {}", ip),
            RuntimeError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for array of length {}", index, len)
            }
            RuntimeError::JumpOutOfRange { target } => {
                write!(f, "jump target {} outside bytecode range", target)
            }
            RuntimeError::IpOutOfRange { ip } => {
                write!(f, "instruction pointer {} outside bytecode range", ip)
            }
            RuntimeError::UndefinedOpcode { raw, ip } => {
                write!(f, "undefined opcode {} at ip {}", raw, ip)
            }
            RuntimeError::ConstantOutOfRange { index } => {
                write!(f, "constant pool index {} out of range", index)
            }
            RuntimeError::Io => write!(f, "I/O error writing program output"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RuntimeError {}
