pub mod actions;
pub mod transform;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use xmlcodec_common::config::QuoteStyle;

#[derive(Parser)]
#[command(name = "xmlcodec")]
#[command(version)]
#[command(about = "XML-encode and XML-decode blocks of text.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less; repeat to keep only warnings and errors
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve entity and character references back to literal text
    #[command(alias = "d")]
    Decode {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Escape markup characters as entity references
    #[command(alias = "e")]
    Encode {
        #[command(flatten)]
        io: IoArgs,
        /// Which quotes to escape: double, all or none
        #[arg(long, default_value = "double")]
        quotes: QuoteStyle,
    },
    /// List the actions this tool provides
    #[command(alias = "a")]
    Actions,
}

#[derive(Args)]
pub struct IoArgs {
    /// File to transform; reads stdin when omitted or '-'
    pub input: Option<PathBuf>,

    /// Overwrite INPUT with the result instead of printing it
    #[arg(short, long)]
    pub in_place: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
