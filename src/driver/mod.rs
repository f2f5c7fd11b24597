//! Compilation driver: build and run orchestration.
//!
//! The driver owns everything around the core pipeline: reading the
//! source file, rejecting lexical errors, running the parser and code
//! generator, writing the assembly output, and (for `run`) assembling,
//! linking, and executing the result.
//!
//! The default paths are a contract surface: with no arguments the
//! compiler reads `test.txt` from the current directory and writes
//! `chat.s` next to it, which is what the downstream assembler and linker
//! steps expect.

use std::path::Path;

use tempfile::TempDir;

use minic::ast::format_ast;
use minic::codegen::Codegen;
use minic::lexer::Lexer;
use minic::parser::{ParseError, Parser};
use minic::token::TokenKind;

mod assemble;

pub(crate) use assemble::ToolError;

/// Default input path when none is given on the command line.
pub(crate) const DEFAULT_INPUT: &str = "test.txt";

/// Default assembly output path when none is given on the command line.
pub(crate) const DEFAULT_OUTPUT: &str = "chat.s";

/// A compilation error from any phase of the driver.
///
/// Unifies I/O, lexical, parse, and external-tool failures so the CLI has
/// one thing to report and one exit path.
pub(crate) enum CompileError {
    /// Failed to read the source file.
    FileRead {
        path: String,
        source: std::io::Error,
    },
    /// Failed to write the assembly output.
    FileWrite {
        path: String,
        source: std::io::Error,
    },
    /// The lexer produced an `Unknown` token.
    Lex { message: String, line: usize },
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// Failed to create a temporary build directory.
    TempDir(std::io::Error),
    /// The assembler or linker failed.
    Tool(ToolError),
    /// Failed to start the compiled executable.
    ExecutableRun(std::io::Error),
}

impl CompileError {
    fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        CompileError::FileRead {
            path: path.into(),
            source,
        }
    }

    fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        CompileError::FileWrite {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::FileRead { path, source } => {
                write!(f, "Failed to read file '{}': {}", path, source)
            }
            CompileError::FileWrite { path, source } => {
                write!(f, "Failed to write file '{}': {}", path, source)
            }
            CompileError::Lex { message, line } => write!(f, "line {}: {}", line, message),
            CompileError::Parse(e) => write!(f, "{}", e),
            CompileError::TempDir(source) => {
                write!(f, "Failed to create temporary directory: {}", source)
            }
            CompileError::Tool(e) => write!(f, "{}", e),
            CompileError::ExecutableRun(source) => {
                write!(f, "Failed to run executable: {}", source)
            }
        }
    }
}

/// A compilation error paired with the source context needed to report
/// it.
pub(crate) struct CompileErrorWithContext {
    filename: String,
    source: String,
    error: CompileError,
}

impl CompileErrorWithContext {
    pub(crate) fn filename(&self) -> &str {
        &self.filename
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn error(&self) -> &CompileError {
        &self.error
    }
}

/// Reads a source file, or produces a contextualised error.
fn read_source(file: &str) -> Result<String, Box<CompileErrorWithContext>> {
    std::fs::read_to_string(file).map_err(|e| {
        Box::new(CompileErrorWithContext {
            filename: file.to_string(),
            source: String::new(),
            error: CompileError::file_read(file, e),
        })
    })
}

/// Runs the core pipeline on `source` and returns the assembly text.
///
/// The token stream is checked for `Unknown` tokens before parsing; the
/// first one found is a fatal lexical error carrying the message the
/// lexer stored in its lexeme.
fn compile_to_assembly(source: &str) -> Result<String, CompileError> {
    let tokens = Lexer::new(source).tokenize();

    if let Some(bad) = tokens.iter().find(|t| t.kind == TokenKind::Unknown) {
        return Err(CompileError::Lex {
            message: bad.lexeme.to_string(),
            line: bad.line,
        });
    }

    let mut parser = Parser::new(&tokens);
    let functions = parser.parse_file().map_err(CompileError::Parse)?;

    let mut codegen = Codegen::new();
    codegen.compile(&functions);
    Ok(codegen.finish())
}

/// Wraps a pipeline step's error with the filename/source context.
fn with_context<T>(
    result: Result<T, CompileError>,
    file: &str,
    source: &str,
) -> Result<T, Box<CompileErrorWithContext>> {
    result.map_err(|error| {
        Box::new(CompileErrorWithContext {
            filename: file.to_string(),
            source: source.to_string(),
            error,
        })
    })
}

/// Compiles `file` and writes the assembly to `output`.
pub(crate) fn build(file: &str, output: &str) -> Result<(), Box<CompileErrorWithContext>> {
    let source = read_source(file)?;
    let asm = with_context(compile_to_assembly(&source), file, &source)?;
    with_context(
        std::fs::write(output, asm).map_err(|e| CompileError::file_write(output, e)),
        file,
        &source,
    )
}

/// Compiles `file`, assembles and links it in a temp directory, runs the
/// executable, and returns its exit code.
pub(crate) fn run(file: &str) -> Result<i32, Box<CompileErrorWithContext>> {
    let source = read_source(file)?;
    let asm = with_context(compile_to_assembly(&source), file, &source)?;

    let result = (|| {
        let dir = TempDir::new().map_err(CompileError::TempDir)?;
        let asm_path = dir.path().join("out.s");
        let object_path = dir.path().join("out.o");
        let exe_path = dir.path().join("out");

        std::fs::write(&asm_path, asm)
            .map_err(|e| CompileError::file_write(asm_path.display().to_string(), e))?;
        assemble::assemble(&asm_path, &object_path).map_err(CompileError::Tool)?;
        assemble::link(&object_path, &exe_path).map_err(CompileError::Tool)?;
        run_executable(&exe_path)
    })();

    with_context(result, file, &source)
}

/// Runs the linked executable and returns its exit code.
///
/// Termination by signal maps to `128 + signal`, following the shell
/// convention.
fn run_executable(path: &Path) -> Result<i32, CompileError> {
    let status = std::process::Command::new(path)
        .status()
        .map_err(CompileError::ExecutableRun)?;

    if let Some(code) = status.code() {
        return Ok(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            eprintln!("Program terminated by signal {}", signal);
            return Ok(128 + signal);
        }
    }

    eprintln!("Program terminated abnormally");
    Ok(1)
}

/// Compiles `file` and prints its token stream, one token per line.
pub(crate) fn print_tokens(file: &str) -> Result<(), Box<CompileErrorWithContext>> {
    let source = read_source(file)?;
    for token in Lexer::new(&source).tokenize() {
        println!("{}", token);
    }
    Ok(())
}

/// Compiles `file` and prints its AST as an indented tree.
pub(crate) fn print_ast(file: &str) -> Result<(), Box<CompileErrorWithContext>> {
    let source = read_source(file)?;

    let result = (|| {
        let tokens = Lexer::new(&source).tokenize();
        let mut parser = Parser::new(&tokens);
        let functions = parser.parse_file().map_err(CompileError::Parse)?;
        print!("{}", format_ast(&functions));
        Ok(())
    })();

    with_context(result, file, &source)
}
