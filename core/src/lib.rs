#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! scriptor-core — lexer, parser, bytecode compiler, and a stack-based
//! virtual machine with a mark-sweep garbage-collected heap.
//!
//! The language is a small Lox-like expression/statement language. A
//! program is compiled once to a flat integer bytecode stream and then
//! executed by [`vm::Vm`]. See the `scriptor-cli` crate for a command-line
//! driver built on top of this library.
//!
//! # Example
//!
//! ```
//! use scriptor_core::{Compiler, Lexer, Parser};
//! use scriptor_core::vm::{StringOutput, Vm};
//!
//! let source = "print 1 + 2 * 3;";
//! let tokens = Lexer::new(source).scan().unwrap();
//! let stmts = Parser::new(tokens).parse_program().unwrap();
//! let code = Compiler::new().compile(&stmts).unwrap();
//!
//! let mut out = StringOutput::default();
//! Vm::new(code).run(&mut out).unwrap();
//! assert_eq!(out.into_inner(), "7\n");
//! ```

extern crate alloc;

#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod ast;
pub mod compiler;
pub mod diagnostics;
pub mod heap;
pub mod lexer;
pub mod parser;
pub mod value;
pub mod vm;

pub use compiler::{CompileError, Compiler};
pub use heap::{Handle, Heap};
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use value::Value;
pub use vm::{RuntimeError, Vm};
