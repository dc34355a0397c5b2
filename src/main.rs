use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::debug;
use quill::{
    Context, Dialect, Error, Value, parse_with,
    interpreter::dialect::{ArithmeticMode, ConditionMode, DEFAULT_MAX_CALL_DEPTH},
};

/// quill runs programs written in a small block-structured statement
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run.
    #[arg(default_value = "input1.txt")]
    path: PathBuf,

    /// Run every line of the file as its own program against one shared set
    /// of variables, printing each line's result.
    #[arg(long)]
    per_line: bool,

    /// Print the value the program ends with.
    #[arg(long)]
    show_result: bool,

    /// How integers and reals combine in arithmetic.
    #[arg(long, value_enum, default_value_t = ArithmeticMode::Promote)]
    arithmetic: ArithmeticMode,

    /// What `if` and `while` conditions may evaluate to.
    #[arg(long, value_enum, default_value_t = ConditionMode::Integer)]
    conditions: ConditionMode,

    /// Reject list literals and indexing.
    #[arg(long)]
    no_lists: bool,

    /// Reject function definitions and calls.
    #[arg(long)]
    no_functions: bool,

    /// Reject the `true` and `false` keywords.
    #[arg(long)]
    no_booleans: bool,

    /// Maximum depth of nested function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,
}

impl Args {
    fn dialect(&self) -> Dialect {
        Dialect { arithmetic:     self.arithmetic,
                  conditions:     self.conditions,
                  lists:          !self.no_lists,
                  functions:      !self.no_functions,
                  booleans:       !self.no_booleans,
                  max_call_depth: self.max_call_depth, }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let Ok(source) = fs::read_to_string(&args.path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.path.display());
        return ExitCode::FAILURE;
    };

    let dialect = args.dialect();
    let mut context = Context::with_dialect(dialect.clone());

    if args.per_line {
        for (number, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match execute(&mut context, line, &dialect) {
                Ok(value) => println!("{}", value.repr()),
                Err(e) => report(&e, number + 1),
            }
        }
    } else {
        match execute(&mut context, &source, &dialect) {
            Ok(value) => {
                if args.show_result {
                    println!("{}", value.repr());
                }
            },
            Err(e) => report(&e, 0),
        }
    }

    ExitCode::SUCCESS
}

fn execute(context: &mut Context, source: &str, dialect: &Dialect) -> Result<Value, Error> {
    let program = parse_with(source, dialect)?;
    Ok(context.evaluate(&program)?)
}

/// Prints the error's label and logs the details. `file_line` is the line of
/// the file in per-line mode, zero otherwise.
fn report(error: &Error, file_line: usize) {
    if file_line > 0 {
        debug!("input line {file_line}: {error}");
    } else {
        debug!("{error}");
    }
    println!("{}", error.label());
}
