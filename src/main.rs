use std::fs;
use std::process;

use colored::Colorize;
use raysnake::config::TargetSpec;
use raysnake::convert::convert_header;
use raysnake::debug_println;
use raysnake::error::{ConvertError, Result};

fn main() {
    if let Err(err) = run() {
        report_error(&err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    for target in TargetSpec::builtin() {
        let source = fs::read_to_string(&target.header).map_err(|err| {
            ConvertError::from(err)
                .with_note(format!("while reading '{}'", target.header))
                .with_help(format!(
                    "place '{}' in the current directory and re-run",
                    target.header
                ))
        })?;

        let aliased = convert_header(&source, &target)?;
        debug_println!(
            "{}: {} alias lines generated",
            target.header,
            aliased
                .lines()
                .filter(|line| line.starts_with("#define") && line.split_whitespace().count() == 3)
                .count()
        );

        fs::write(&target.output, aliased).map_err(|err| {
            ConvertError::from(err).with_note(format!("while writing '{}'", target.output))
        })?;

        println!(
            "Successfully generated '{}' from '{}'",
            target.output, target.header
        );
    }

    Ok(())
}

fn report_error(err: &ConvertError) {
    eprintln!("{}: {}", err.kind.to_string().red().bold(), err.message);

    if let Some(note) = &err.context.note {
        eprintln!("{}: {}", "note".blue().bold(), note);
    }

    if let Some(help) = &err.context.help {
        eprintln!("{}: {}", "help".green().bold(), help);
    }
}
