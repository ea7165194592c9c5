mod commands;
mod terminal;

use commands::{CommandLine, Commands, actions, transform};
use terminal::{logging, print};
use xmlcodec_common::config::{Config, QuoteStyle};
use xmlcodec_core::Action;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    match commands.command {
        Commands::Actions => {
            print::header("available actions", commands.quiet);
            actions::list();
            Ok(())
        }
        Commands::Decode { io } => {
            let cfg = Config {
                quotes: QuoteStyle::default(),
                quiet: commands.quiet,
                in_place: io.in_place,
            };
            transform::transform(Action::Decode, io.input, &cfg)
        }
        Commands::Encode { io, quotes } => {
            let cfg = Config {
                quotes,
                quiet: commands.quiet,
                in_place: io.in_place,
            };
            transform::transform(Action::Encode, io.input, &cfg)
        }
    }
}
