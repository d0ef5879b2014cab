//! cvforge CLI - resume export tool

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use cvforge::{
    export_pdf, PageFormat, PdfExportOptions, RenderedSurface, Resume, TextExportOptions,
};

#[derive(Parser)]
#[command(name = "cvforge")]
#[command(version)]
#[command(about = "Create and export resumes to text and PDF", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new resume file with default sections
    New {
        /// Output resume file
        #[arg(value_name = "FILE")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Export a resume to plain text
    Text {
        /// Input resume file (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit uppercase section titles
        #[arg(long)]
        no_titles: bool,

        /// List marker character
        #[arg(long, default_value = "\u{2022}")]
        marker: char,
    },

    /// Export a rendered surface capture to a paginated PDF
    Pdf {
        /// Surface capture image (PNG)
        #[arg(value_name = "CAPTURE")]
        capture: PathBuf,

        /// Output file (capture path with .pdf extension if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Uniform page margin in millimeters
        #[arg(long, default_value_t = 10.0)]
        margin: f32,

        /// Page format
        #[arg(long, value_enum, default_value_t = PageArg::A4)]
        page: PageArg,

        /// PDF document title
        #[arg(long, default_value = "Resume")]
        title: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageArg {
    A4,
    Letter,
}

impl From<PageArg> for PageFormat {
    fn from(value: PageArg) -> Self {
        match value {
            PageArg::A4 => PageFormat::A4,
            PageArg::Letter => PageFormat::Letter,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn run(command: Commands) -> cvforge::Result<()> {
    match command {
        Commands::New { output, force } => cmd_new(&output, force),
        Commands::Text {
            input,
            output,
            no_titles,
            marker,
        } => cmd_text(&input, output.as_deref(), no_titles, marker),
        Commands::Pdf {
            capture,
            output,
            margin,
            page,
            title,
        } => cmd_pdf(&capture, output, margin, page.into(), title),
    }
}

fn cmd_new(output: &std::path::Path, force: bool) -> cvforge::Result<()> {
    if output.exists() && !force {
        return Err(cvforge::Error::Export(format!(
            "{} already exists (use --force to overwrite)",
            output.display()
        )));
    }
    let resume = Resume::new();
    fs::write(output, resume.to_json()?)?;
    println!("{} {}", "created".green().bold(), output.display());
    Ok(())
}

fn cmd_text(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    no_titles: bool,
    marker: char,
) -> cvforge::Result<()> {
    let json = fs::read_to_string(input)?;
    let resume = Resume::from_json(&json)?;
    let options = TextExportOptions::new()
        .with_list_marker(marker)
        .with_section_titles(!no_titles);
    let text = cvforge::export_text(&resume, &options);

    match output {
        Some(path) => {
            fs::write(path, &text)?;
            println!("{} {}", "wrote".green().bold(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_pdf(
    capture: &std::path::Path,
    output: Option<PathBuf>,
    margin: f32,
    format: PageFormat,
    title: String,
) -> cvforge::Result<()> {
    let bytes = fs::read(capture)?;
    let surface = RenderedSurface::from_png_bytes(bytes)?;
    log::debug!(
        "captured surface: {}x{} px",
        surface.width_px,
        surface.height_px
    );

    let options = PdfExportOptions::new()
        .with_format(format)
        .with_margin(margin)
        .with_title(title);
    let pdf = export_pdf(&surface, &options)?;

    let path = output.unwrap_or_else(|| capture.with_extension("pdf"));
    fs::write(&path, pdf)?;
    println!("{} {}", "wrote".green().bold(), path.display());
    Ok(())
}
