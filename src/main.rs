extern crate clap;

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use bf2py::{
    lexer::{Lexer, TokenKind},
    Bf2PyError, Translator, PYTHON,
};
use clap::Parser;
use colored::Colorize;

/// Brainf**k to Python translator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to translate
    #[arg()]
    file: PathBuf,

    /// Where to write the generated code (defaults to the input path with a `.py` extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the generated code instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Dump the token stream to stderr before translating
    #[arg(long)]
    tokens: bool,

    /// Don't print progress
    #[arg(short, long)]
    quiet: bool,
}

/// Progress goes to stderr so `--stdout` stays clean
macro_rules! status {
    ($args: expr, $($fmt: tt)*) => {
        if !$args.quiet {
            eprintln!($($fmt)*);
        }
    };
}

fn output_path(args: &Args, extension: &str) -> PathBuf {
    match &args.output {
        Some(path) => path.clone(),
        None => args.file.with_extension(extension),
    }
}

/// Dumped to stderr, stdout is reserved for generated code
fn print_tokens(text: &str) {
    for token in Lexer::new(text) {
        match &token.kind {
            TokenKind::Instruction(i) => eprint!("{}", i.symbol()),
            TokenKind::Newline => eprintln!(),
            TokenKind::Comment(c) => eprint!("{}", c.as_str().dimmed()),
        }
    }
    eprintln!();
}

fn write_code(path: &Path, code: &str) -> Result<(), Bf2PyError> {
    std::fs::write(path, code).map_err(|e| Bf2PyError::write(path, e))
}

fn run(args: &Args) -> Result<(), Bf2PyError> {
    status!(args, "Translating {}", args.file.display());

    let text = std::fs::read_to_string(&args.file).map_err(|e| Bf2PyError::read(&args.file, e))?;

    if args.tokens {
        print_tokens(&text);
    }

    let translator = Translator::new(&PYTHON);

    status!(
        args,
        "{} {} translation",
        "Starting".blue(),
        translator.table().name
    );
    let now = Instant::now();
    let translation = translator.translate(&text)?;
    status!(
        args,
        "{} {} instructions over {} lines in {:.2?}",
        "Finished translating".green(),
        translation.instructions,
        translation.lines,
        now.elapsed()
    );

    if args.stdout {
        let mut stdout = io::stdout().lock();
        return stdout
            .write_all(translation.code.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| Bf2PyError::write("<stdout>", e));
    }

    let path = output_path(args, translator.table().extension);
    write_code(&path, &translation.code)?;
    status!(args, "{} {}", "Wrote".green(), path.display());

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            ExitCode::FAILURE
        }
    }
}
