use std::{io::Read, path::Path, path::PathBuf};

use clap::{Parser, ValueEnum};
use log::{LevelFilter, Log, Metadata, Record, debug, warn};

use blahtex::{Converter, Document, Encoding, SpacingMode};

mod config_file;

use config_file::{ConfigError, load_config_file};

/// Converts LaTeX math read from stdin to MathML
#[derive(Parser, Debug)]
#[command(version, about = "Converts LaTeX math to MathML", long_about = None)]
struct Args {
    /// Produce MathML (the only supported output format)
    #[arg(long)]
    mathml: bool,

    /// Sets how much spacing information is written into the MathML
    #[arg(long, value_enum, value_name = "MODE")]
    spacing: Option<Spacing>,

    /// Sets how characters outside of ASCII are written
    #[arg(long, value_enum, value_name = "ENCODING")]
    mathml_encoding: Option<MathmlEncoding>,

    /// Pretty-print the output with newlines and indentation
    #[arg(long)]
    indented: bool,

    /// Reads the configuration from a TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Prints a human-readable description of errors to stderr
    #[arg(long)]
    print_error_messages: bool,

    /// Prints debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Spacing {
    #[value(alias = "strict")]
    Tight,
    Moderate,
    #[value(alias = "relaxed")]
    Wide,
}

impl From<Spacing> for SpacingMode {
    fn from(spacing: Spacing) -> Self {
        match spacing {
            Spacing::Tight => SpacingMode::Tight,
            Spacing::Moderate => SpacingMode::Moderate,
            Spacing::Wide => SpacingMode::Wide,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MathmlEncoding {
    Raw,
    Numeric,
}

impl From<MathmlEncoding> for Encoding {
    fn from(encoding: MathmlEncoding) -> Self {
        match encoding {
            MathmlEncoding::Raw => Encoding::Raw,
            MathmlEncoding::Numeric => Encoding::Numeric,
        }
    }
}

/// Writes log messages to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if !args.mathml {
        debug!("no output format given, producing MathML");
    }

    let mut config = match args.config {
        Some(ref path) => load_config_file(path).unwrap_or_else(|e| exit_config_error(e, path)),
        None => config_file::Config::default(),
    };
    if let Some(spacing) = args.spacing {
        config.blahtex.spacing = spacing.into();
    }
    if let Some(encoding) = args.mathml_encoding {
        config.blahtex.encoding = encoding.into();
    }
    config.blahtex.indented |= args.indented;
    config.print_error_messages |= args.print_error_messages;
    debug!("using {:?}", config);

    let input = read_stdin();
    let converter = Converter::new(config.blahtex);
    let document = converter.document(&input);
    if let Document::Failure(ref err) = document {
        if config.print_error_messages {
            print_report(err, &input);
        } else {
            debug!("{err}");
        }
    }
    println!("{}", document.to_xml(converter.config()));
}

fn print_report(err: &blahtex::LatexError, input: &str) {
    let report = err.to_report("<stdin>", true);
    if let Err(e) = report.eprint(("<stdin>", ariadne::Source::from(input))) {
        warn!("could not print error report: {e}");
    }
}

fn read_stdin() -> String {
    let mut buffer = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
        exit_io_error(e);
    }
    buffer
}

fn exit_config_error(e: ConfigError, fp: &Path) -> ! {
    eprintln!("blahtex: configuration file '{}': {}", fp.display(), e);
    std::process::exit(1);
}

fn exit_io_error(e: std::io::Error) -> ! {
    eprintln!("IO Error: {}", e);
    std::process::exit(1);
}
