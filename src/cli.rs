use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fact-check the claims made in a YouTube video
    Youtube {
        /// Video URL (watch, embed or youtu.be short link)
        url: String,

        /// Print the raw report as JSON
        #[clap(long, default_value = "false")]
        json: bool,
    },
    /// Fact-check a piece of text
    Text {
        /// The text to check; read from stdin when omitted
        text: Option<String>,

        /// Print the raw report as JSON
        #[clap(long, default_value = "false")]
        json: bool,
    },
    /// Fact-check a document (PDF, DOCX or TXT, up to 5MB)
    File {
        /// Path to the document
        path: PathBuf,

        /// Print the raw report as JSON
        #[clap(long, default_value = "false")]
        json: bool,
    },
    /// Start an interactive session
    Interactive {},
}
