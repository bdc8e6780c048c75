//! docxstyle CLI - DOCX style profile extraction tool

use std::path::PathBuf;

use clap::Parser;

use docxstyle::{render, DocxStyle, JsonFormat};

#[derive(Parser)]
#[command(name = "docxstyle")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Extract a flattened style profile from a DOCX file as JSON",
    long_about = None
)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Compact JSON output (no pretty printing)
    #[arg(short, long)]
    compact: bool,

    /// Append resolved attributes for every paragraph style
    #[arg(short, long)]
    detailed: bool,

    /// Skip table convention analysis
    #[arg(long)]
    no_tables: bool,

    /// Fail on a malformed stylesheet instead of continuing without it
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn builder(&self) -> DocxStyle {
        let builder = DocxStyle::new()
            .with_detailed_styles(self.detailed)
            .with_tables(!self.no_tables);
        if self.strict {
            builder
        } else {
            builder.lenient()
        }
    }

    fn format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("Profiling {}", cli.input.display());

    let report = cli.builder().report(&cli.input);

    match render::to_json(&report, cli.format()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
