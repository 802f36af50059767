use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

use sysmon::commands;

fn build_cli() -> Command {
    Command::new("sysmon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Logs CPU, memory and GPU usage every 5 seconds")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .short('o')
                .long("log-file")
                .value_name("PATH")
                .help("File to append metric lines to [default: system_monitor.log]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .value_name("N")
                .help("Stop after N cycles instead of running until Ctrl+C")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("no-gpu")
                .long("no-gpu")
                .help("Skip GPU probing and always log GPU: N/A")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Print debug diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    sysmon::init_logging(matches.get_flag("verbose"));

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("version", _)) => commands::version(),
        _ => commands::monitor(&matches),
    }
}
