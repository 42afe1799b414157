use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use classlang::{
    ast::ast::Dump, display_error, lexer::{lexer::tokenize, tokens::dump_tokens}, parser::parser::parse,
};

/// Tokenizes and parses class-language sources, printing the token and AST dumps.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Source files, or directories whose `*.txt` files are processed
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Which dumps to print
    #[arg(short, long, value_enum, default_value_t = Emit::Ast)]
    emit: Emit,

    /// Also write `<name>.tokens.txt` and `ast<name>.txt` into this directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    Tokens,
    Ast,
    All,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Some(out_dir) = &args.out_dir {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;
    }

    let mut failed = 0;
    let inputs = collect_inputs(&args.paths)?;

    for input in &inputs {
        tracing::info!("processing {}", input.display());
        if !process_document(input, &args)? {
            failed += 1;
        }
    }

    if failed > 0 {
        tracing::warn!("{} of {} documents failed", failed, inputs.len());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Expands directories into their `*.txt` files, sorted by name.
fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = vec![];

    for path in paths {
        if !path.is_dir() {
            inputs.push(path.clone());
            continue;
        }

        let mut entries = vec![];
        for entry in fs::read_dir(path).with_context(|| format!("failed to read directory {}", path.display()))? {
            let entry_path = entry?.path();
            if entry_path.is_file() && entry_path.extension().is_some_and(|ext| ext == "txt") {
                entries.push(entry_path);
            }
        }
        entries.sort();
        inputs.extend(entries);
    }

    Ok(inputs)
}

/// Runs both stages over one file. Returns false if the source was rejected.
fn process_document(path: &Path, args: &Args) -> Result<bool> {
    let source = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.clone());

    let tokens = match tokenize(&source, Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", display_error(&error, &source));
            return Ok(false);
        }
    };

    let token_dump = dump_tokens(&tokens);
    if matches!(args.emit, Emit::Tokens | Emit::All) {
        println!("Tokens for {}:", file_name);
        print!("{}", token_dump);
    }
    if let Some(out_dir) = &args.out_dir {
        write_output(&out_dir.join(format!("{}.tokens.txt", stem)), &token_dump)?;
    }

    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            eprint!("{}", display_error(&error, &source));
            return Ok(false);
        }
    };

    let ast_dump = program.to_outline();
    if matches!(args.emit, Emit::Ast | Emit::All) {
        println!("Abstract Syntax Tree for {}:", file_name);
        print!("{}", ast_dump);
    }
    if let Some(out_dir) = &args.out_dir {
        write_output(&out_dir.join(format!("ast{}.txt", stem)), &ast_dump)?;
    }

    Ok(true)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}
