//! # copyforge CLI
//!
//! Command-line interface for the copyforge article generator.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use copyforge_core::{ArticleLength, Tone};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "copyforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an article from a brief
    Generate {
        /// Brief file (YAML); flags below override its fields
        #[arg(long)]
        brief: Option<PathBuf>,

        /// Broad theme of the article
        #[arg(long)]
        topic: Option<String>,

        /// Keyword used in the H1 and throughout the article
        #[arg(long)]
        primary_keyword: Option<String>,

        /// Secondary keywords (comma or newline separated)
        #[arg(long)]
        secondary_keywords: Option<String>,

        /// Who the article addresses
        #[arg(long)]
        audience: Option<String>,

        /// Tone of voice
        #[arg(long, value_enum)]
        tone: Option<ToneArg>,

        /// Article length tier
        #[arg(long, value_enum)]
        length: Option<LengthArg>,

        /// Closing call to action
        #[arg(long)]
        cta: Option<String>,

        /// Write markdown here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write a standalone HTML page
        #[arg(long)]
        html: Option<PathBuf>,

        /// Emit JSON (markdown, html, word count) for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Render a markdown article to HTML
    Render {
        /// Markdown input file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Emit an HTML fragment instead of a standalone page
        #[arg(long)]
        fragment: bool,
    },

    /// Scaffold a starter brief.yml
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate {
            brief,
            topic,
            primary_keyword,
            secondary_keywords,
            audience,
            tone,
            length,
            cta,
            output,
            html,
            json,
        } => {
            let opts = commands::GenerateOptions {
                brief,
                topic,
                primary_keyword,
                secondary_keywords,
                audience,
                tone: tone.map(Tone::from),
                length: length.map(ArticleLength::from),
                cta,
                output,
                html,
                json,
            };
            commands::generate_article(opts)
        }
        Commands::Render {
            input,
            output,
            fragment,
        } => commands::render_markdown(&input, output.as_deref(), fragment),
        Commands::Init { path } => commands::init_brief(path.as_deref()),
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub enum ToneArg {
    Professional,
    Conversational,
    Authoritative,
    Friendly,
    Technical,
    Storytelling,
}

impl From<ToneArg> for Tone {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::Professional => Tone::Professional,
            ToneArg::Conversational => Tone::Conversational,
            ToneArg::Authoritative => Tone::Authoritative,
            ToneArg::Friendly => Tone::Friendly,
            ToneArg::Technical => Tone::Technical,
            ToneArg::Storytelling => Tone::Storytelling,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub enum LengthArg {
    Short,
    Medium,
    Long,
}

impl From<LengthArg> for ArticleLength {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Short => ArticleLength::Short,
            LengthArg::Medium => ArticleLength::Medium,
            LengthArg::Long => ArticleLength::Long,
        }
    }
}
