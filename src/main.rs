//! The minic compiler CLI.
//!
//! Provides `build`, `run`, `tokens`, and `ast` commands. Invoked with no
//! subcommand it compiles `test.txt` to `chat.s`, the fixed paths the
//! surrounding toolchain expects.

use clap::{Parser, Subcommand};

mod diagnostics;
mod driver;

use driver::{DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Command-line interface for the minic compiler.
#[derive(Parser)]
#[command(name = "minic")]
#[command(about = "A minimal C-like to x86-64 compiler", long_about = None)]
struct Cli {
    /// The subcommand to execute. Defaults to `build` with the standard
    /// paths.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Compile a source file to assembly text.
    Build {
        /// The source file to compile.
        #[arg(default_value = DEFAULT_INPUT)]
        file: String,

        /// Output path for the assembly file.
        #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
        output: String,
    },
    /// Compile, assemble, link, and run a source file.
    Run {
        /// The source file to run.
        #[arg(default_value = DEFAULT_INPUT)]
        file: String,
    },
    /// Print the token stream of a source file.
    Tokens {
        /// The source file to tokenize.
        #[arg(default_value = DEFAULT_INPUT)]
        file: String,
    },
    /// Print the AST of a source file.
    Ast {
        /// The source file to parse.
        #[arg(default_value = DEFAULT_INPUT)]
        file: String,
    },
}

/// Entry point for the minic compiler.
fn main() {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Build {
        file: DEFAULT_INPUT.to_string(),
        output: DEFAULT_OUTPUT.to_string(),
    });

    match command {
        Commands::Build { file, output } => {
            if let Err(error) = driver::build(&file, &output) {
                report_and_exit(*error);
            }
        }
        Commands::Run { file } => match driver::run(&file) {
            Ok(exit_code) => std::process::exit(exit_code),
            Err(error) => report_and_exit(*error),
        },
        Commands::Tokens { file } => {
            if let Err(error) = driver::print_tokens(&file) {
                report_and_exit(*error);
            }
        }
        Commands::Ast { file } => {
            if let Err(error) = driver::print_ast(&file) {
                report_and_exit(*error);
            }
        }
    }
}

fn report_and_exit(error: driver::CompileErrorWithContext) -> ! {
    diagnostics::report_error(error.filename(), error.source(), error.error());
    std::process::exit(1);
}
