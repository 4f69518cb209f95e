use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bhasha")]
#[command(about = "Translate English text into Indian languages using an LLM")]
#[command(version)]
pub struct Args {
    /// Text to translate (prompted for if not provided)
    pub text: Option<String>,

    /// Target language: menu key (1-10) or code (hi, bn, ta, ...)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// OpenAI-compatible API base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the supported target languages
    Languages,
    /// Configure backend settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
