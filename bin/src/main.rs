use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;

use scanner::{ScanErrors, Scanner};

/// Exit status for input with lexical errors (EX_DATAERR).
const EXIT_DATA_ERROR: u8 = 65;

/// Scans Lox source code and prints its tokens, one per line.
#[derive(clap::Parser)]
struct Args {
    /// Script to scan. Starts an interactive prompt if omitted.
    file: Option<PathBuf>,
}

fn run_file(path: PathBuf) -> anyhow::Result<ExitCode> {
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    match run(&source, &mut stdout()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast::<ScanErrors>() {
            Ok(errors) => {
                eprintln!("{}", errors);
                Ok(ExitCode::from(EXIT_DATA_ERROR))
            }
            Err(e) => Err(e),
        },
    }
}

fn run_prompt() -> anyhow::Result<ExitCode> {
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(ExitCode::SUCCESS);
        }
        if let Err(e) = run(&line, &mut stdout()) {
            eprintln!("{}", e);
        }
    }
}

/// Prints every token, even if some characters could not be scanned.
fn run(source: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let mut errors = ScanErrors::default();
    let tokens = Scanner::new(source).scan_tokens(&mut errors);
    log::debug!("Scanned {} tokens, {} errors", tokens.len(), errors.len());

    writeln!(out, "{}", tokens.iter().join("\n"))?;

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into())
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    match args.file {
        Some(file) => run_file(file),
        None => run_prompt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_tokens() {
        let mut output = Vec::new();
        run("var x = \"hi\";\nprint x + 1.5;", &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "VAR var null\n\
             IDENTIFIER x null\n\
             EQUAL = null\n\
             STRING \"hi\" hi\n\
             SEMICOLON ; null\n\
             PRINT print null\n\
             IDENTIFIER x null\n\
             PLUS + null\n\
             NUMBER 1.5 1.5\n\
             SEMICOLON ; null\n\
             EOF  null\n"
        );
    }

    #[test]
    fn reports_errors_after_printing() {
        let mut output = Vec::new();
        let error = run("1 @\n\"open", &mut output).unwrap_err();
        assert_eq!(String::from_utf8(output).unwrap(), "NUMBER 1 1.0\nEOF  null\n");

        let errors = error.downcast::<ScanErrors>().unwrap();
        assert_eq!(
            errors.to_string(),
            "[line 1] Error: Unexpected character.\n[line 2] Error: Unterminated String"
        );
    }
}
