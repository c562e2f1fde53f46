use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use scriptor_core::compiler::Opcode;
use scriptor_core::vm::Output;
use scriptor_core::{CompileError, Compiler, LexError, Lexer, ParseError, Parser, RuntimeError, Vm};
use thiserror::Error;

/// Compile and run a scriptor source file.
#[derive(ClapParser, Debug)]
#[command(name = "scriptor")]
#[command(about = "Compile and run a scriptor source file", long_about = None)]
struct Args {
    /// Path to the source file to run.
    source: PathBuf,

    /// Print the compiled bytecode stream before running it.
    #[arg(long)]
    debug_bytecode: bool,

    /// Print the parsed statement tree before compiling it.
    #[arg(long)]
    debug_ast: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CliError {
    /// Exit code per error tier: 1 lex/parse, 2 compile, 3 runtime, 4 I/O.
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Io { .. } => 4,
            CliError::Lex(_) | CliError::Parse(_) => 1,
            CliError::Compile(_) => 2,
            CliError::Runtime(_) => 3,
        }
    }
}

/// Writes `PRINT` output straight to real stdout.
struct StdOutput;

impl Output for StdOutput {
    fn print_line(&mut self, line: &str) -> core::result::Result<(), ()> {
        println!("{}", line);
        Ok(())
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let source = fs::read_to_string(&args.source).map_err(|source| CliError::Io {
        path: args.source.clone(),
        source,
    })?;

    let tokens = Lexer::new(&source).scan()?;

    let stmts = Parser::new(tokens).parse_program()?;
    if args.debug_ast {
        eprintln!("=== AST ===\n{:#?}\n", stmts);
    }

    let program = Compiler::new().compile(&stmts)?;
    if args.debug_bytecode {
        eprintln!("=== Bytecode ===");
        let mut ip = 0;
        while ip < program.bytecode.len() {
            let raw = program.bytecode[ip];
            match Opcode::try_from(raw) {
                Ok(op) if op.has_operand() => {
                    eprintln!("{:>4}: {:?} {}", ip, op, program.bytecode[ip + 1]);
                    ip += 2;
                }
                Ok(op) => {
                    eprintln!("{:>4}: {:?}", ip, op);
                    ip += 1;
                }
                Err(raw) => {
                    eprintln!("{:>4}: <invalid opcode {}>", ip, raw);
                    ip += 1;
                }
            }
        }
        eprintln!();
    }

    let mut vm = Vm::new(program);
    vm.run(&mut StdOutput)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
