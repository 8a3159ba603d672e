//! artigram CLI - render structured articles as infographic pages

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use artigram::task::CreateTaskRequest;
use artigram::{authoring, render, schema, RenderOptions, TaskClient, TaskStatus};

#[derive(Parser)]
#[command(name = "artigram")]
#[command(version)]
#[command(about = "Render structured articles as infographic pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document JSON file to HTML
    Render {
        /// Input JSON file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit a complete HTML page instead of a fragment
        #[arg(long)]
        standalone: bool,

        /// Stylesheet href linked from standalone output
        #[arg(long, value_name = "HREF")]
        stylesheet: Option<String>,

        /// Drop the zero-padded section ordinals
        #[arg(long)]
        no_numbers: bool,
    },

    /// Render a document JSON file to plain text
    Text {
        /// Input JSON file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Submit a URL to the conversion service and render the result
    Fetch {
        /// Article URL to convert
        #[arg(value_name = "URL")]
        url: String,

        /// Discard any cached conversion and reconvert
        #[arg(long)]
        refresh: bool,

        /// Keep the article's original language
        #[arg(long)]
        no_translate: bool,

        /// Conversion service origin
        #[arg(
            long,
            value_name = "ORIGIN",
            env = "ARTIGRAM_SERVER",
            default_value = "http://localhost:8000"
        )]
        server: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit a complete HTML page instead of a fragment
        #[arg(long)]
        standalone: bool,

        /// Stylesheet href linked from standalone output
        #[arg(long, value_name = "HREF")]
        stylesheet: Option<String>,
    },

    /// Validate a document JSON file and show block statistics
    Check {
        /// Input JSON file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the authoring instructions for generative conversion
    Prompt {
        /// Instructions for translated (Chinese) output
        #[arg(long)]
        translate: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            standalone,
            stylesheet,
            no_numbers,
        } => cmd_render(
            &input,
            output.as_deref(),
            standalone,
            stylesheet,
            no_numbers,
        ),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Fetch {
            url,
            refresh,
            no_translate,
            server,
            output,
            standalone,
            stylesheet,
        } => cmd_fetch(
            &url,
            refresh,
            !no_translate,
            &server,
            output.as_deref(),
            standalone,
            stylesheet,
        ),
        Commands::Check { input } => cmd_check(&input),
        Commands::Prompt { translate } => {
            println!("{}", authoring::instructions(translate));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read an input file, "-" meaning stdin.
fn read_input(input: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn write_output(
    output: Option<&Path>,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("{} {}", "Saved to".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn render_options(
    standalone: bool,
    stylesheet: Option<String>,
    section_numbers: bool,
) -> RenderOptions {
    let mut options = RenderOptions::new()
        .standalone(standalone)
        .with_section_numbers(section_numbers);
    if let Some(href) = stylesheet {
        options = options.with_stylesheet(href);
    }
    options
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    standalone: bool,
    stylesheet: Option<String>,
    no_numbers: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = read_input(input)?;
    // Parse before touching the output path, so a schema error leaves any
    // previously rendered file as it was.
    let doc = schema::parse_str(&json)?;
    let options = render_options(standalone, stylesheet, !no_numbers);
    let html = render::to_html(&doc, &options)?;
    write_output(output, &html)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = read_input(input)?;
    let doc = schema::parse_str(&json)?;
    let text = render::to_text(&doc, &RenderOptions::default())?;
    write_output(output, &text)
}

fn cmd_fetch(
    url: &str,
    refresh: bool,
    translate: bool,
    server: &str,
    output: Option<&Path>,
    standalone: bool,
    stylesheet: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let client = TaskClient::new(server);
    let max_attempts = client.options().max_attempts;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message("Submitting...");

    let request = CreateTaskRequest::new(url)
        .force_refresh(refresh)
        .translate(translate);

    let doc = runtime.block_on(client.fetch_with_progress(request, |task, attempt| {
        let label = match task.status {
            TaskStatus::Pending => "queued",
            TaskStatus::Processing => "converting",
            TaskStatus::Completed => "done",
            TaskStatus::Failed => "failed",
        };
        pb.set_message(format!("{} (poll {}/{})", label, attempt, max_attempts));
    }));

    let doc = match doc {
        Ok(doc) => {
            pb.finish_and_clear();
            doc
        }
        Err(e) => {
            pb.finish_and_clear();
            eprintln!("{}: {}", "Error".red().bold(), e);
            eprintln!("Re-run the same command to retry.");
            std::process::exit(1);
        }
    };

    println!(
        "{} {} ({} sections)",
        "Converted".green().bold(),
        doc.title,
        doc.section_count()
    );
    let options = render_options(standalone, stylesheet, true);
    let html = render::to_html(&doc, &options)?;
    write_output(output, &html)
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = read_input(input)?;
    let doc = schema::parse_str(&json)?;

    println!("{} {}", "Title:".bold(), doc.title);
    if let Some(ref subtitle) = doc.subtitle {
        println!("{} {}", "Subtitle:".bold(), subtitle);
    }
    println!("{} {}", "Sections:".bold(), doc.section_count());
    println!("{} {}", "Blocks:".bold(), doc.block_count());

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut unknown = 0usize;
    for section in &doc.sections {
        for block in &section.content {
            match block.tag() {
                Some(tag) => *counts.entry(tag).or_default() += 1,
                None => unknown += 1,
            }
        }
    }

    for (tag, count) in &counts {
        println!("  {} {}", format!("{:>4}", count).dimmed(), tag);
    }
    if unknown > 0 {
        println!(
            "{} {} block(s) with unrecognized tags will render as nothing",
            "Warning:".yellow().bold(),
            unknown
        );
    }

    println!("{}", "Document is valid.".green());
    Ok(())
}
