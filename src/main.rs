//! h5pretty: pretty print HTML from standard input to standard output.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use h5pretty::output::{Indentation, Parameters};
use h5pretty::{prettify, Error};

/// Pretty print HTML read from standard input.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Number of spaces (or tabs, with -t) per indentation level
    /// [default: 4, or 1 with -t]
    #[arg(short = 'w', long = "width", allow_negative_numbers = true)]
    width: Option<i64>,

    /// Indent with tabs instead of spaces
    #[arg(short = 't', long = "tab", action = ArgAction::SetTrue)]
    tab: bool,

    /// Render the <html>, <head> and <body> elements the parser adds around
    /// fragment input
    #[arg(long = "keep-scaffold", action = ArgAction::SetTrue)]
    keep_scaffold: bool,

    /// Reproduce the input doctype instead of writing <!DOCTYPE html>
    #[arg(long = "keep-doctype", action = ArgAction::SetTrue)]
    keep_doctype: bool,

    /// Log warnings to standard error; repeat for more detail
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn parameters(&self) -> Result<Parameters, Error> {
        let width = self.width.unwrap_or(if self.tab { 1 } else { 4 });
        Ok(Parameters {
            indentation: Indentation::new(width, self.tab)?,
            unwrap_fragment: !self.keep_scaffold,
            preserve_doctype: self.keep_doctype,
        })
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Off,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let parameters = cli.parameters()?;
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    prettify(stdin, stdout, &parameters)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("h5pretty: {}", e);
            ExitCode::FAILURE
        }
    }
}
