use std::{
    fs::read_to_string,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser as ClapParser;
use exprlang::{
    display_error,
    errors::errors::Error,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::parse,
    type_checker::type_checker::type_check,
};
use log::info;

/// Parses and type checks an expression program.
#[derive(ClapParser, Debug)]
#[command(name = "exprlang", version, about)]
struct Args {
    /// Source file to check; reads stdin when omitted
    file: Option<PathBuf>,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Stop after parsing and print the untyped AST
    #[arg(long)]
    parse_only: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let (source, file) = match &args.file {
        Some(path) => match read_to_string(path) {
            Ok(source) => (source, path.clone()),
            Err(err) => {
                eprintln!("Failed to read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut source = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut source) {
                eprintln!("Failed to read stdin: {}", err);
                return ExitCode::FAILURE;
            }
            (source, PathBuf::from("<stdin>"))
        }
    };

    match run(&args, &source, &file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error, &source, &file);
            if error.is_internal() {
                eprintln!("This is a bug in exprlang, please report it.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, source: &str, file: &Path) -> Result<(), Error> {
    let file_name = file.to_string_lossy().to_string();
    let start = Instant::now();

    if args.tokens {
        for token in tokenize(source, Some(file_name.clone()))? {
            if token.kind == TokenKind::EOF {
                break;
            }
            println!("{:>5} {:<14} {}", token.offset(), token.kind.to_string(), token);
        }
    }

    let parse_start = Instant::now();
    let ast = parse(Lexer::new(source, Some(file_name)))?;
    info!("Parsed in {:?}", parse_start.elapsed());

    if args.parse_only {
        println!("{}", ast);
        return Ok(());
    }

    let type_check_start = Instant::now();
    let typed = type_check(&ast)?;
    info!("Type checked in {:?}", type_check_start.elapsed());

    println!("{}", typed);
    info!("Total time: {:?}", start.elapsed());

    Ok(())
}
