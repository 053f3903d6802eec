use anyhow::Result;
use clap::{Parser, Subcommand};
use tact_features::{CliFeatures, Features};
use tact_tracing::{init_tracing_subscriber, TracingSubscriberOptions};

mod commands;
use self::commands::{imports, parse};

pub use imports::Command as ImportsCommand;
pub use parse::Command as ParseCommand;

#[derive(Debug, Parser)]
#[clap(name = "tactc", about = "Tact parser front-end", version)]
struct Opt {
    /// The command to run
    #[clap(subcommand)]
    command: Tactc,

    /// Use verbose output. Pass twice for trace output.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all output except errors reported through the exit code.
    #[clap(short, long, global = true)]
    silent: bool,

    #[clap(flatten)]
    features: CliFeatures,
}

#[derive(Debug, Subcommand)]
enum Tactc {
    /// Parse a file and print its items, or the whole tree as JSON.
    Parse(ParseCommand),
    /// Parse a file and print its import paths in order.
    Imports(ImportsCommand),
}

pub(crate) fn run_cli() -> Result<()> {
    let opt = Opt::parse();
    init_tracing_subscriber(TracingSubscriberOptions {
        verbosity: Some(opt.verbose),
        silent: Some(opt.silent),
        ..Default::default()
    });

    let features = Features::from(&opt.features);
    tracing::debug!(enabled = ?features.enabled_names(), "feature flags");

    match opt.command {
        Tactc::Parse(command) => parse::exec(command, &features),
        Tactc::Imports(command) => imports::exec(command, &features),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Opt::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let opt = Opt::try_parse_from([
            "tactc",
            "parse",
            "main.tact",
            "--json",
            "-vv",
            "--enable-feature",
            "debug",
        ])
        .unwrap();
        assert_eq!(opt.verbose, 2);
        assert!(Features::from(&opt.features).enabled_debug());
        let Tactc::Parse(command) = opt.command else {
            panic!("expected the parse command");
        };
        assert!(command.json);
    }
}
