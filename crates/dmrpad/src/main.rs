mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "dmrpad", version, about = "DMR packet data assembler/disassembler")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);

    match cmd::run(cli.command, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fragment_subcommand() {
        let cli = Cli::try_parse_from([
            "dmrpad",
            "fragment",
            "--rate",
            "3/4",
            "--confirmed",
            "--data",
            "hello",
        ])
        .expect("fragment args should parse");

        assert!(matches!(cli.command, Command::Fragment(_)));
    }

    #[test]
    fn rejects_conflicting_payload_args() {
        let err = Cli::try_parse_from([
            "dmrpad",
            "fragment",
            "--data",
            "hello",
            "--text",
            "hello",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_combine_with_rate_alias() {
        let cli = Cli::try_parse_from(["dmrpad", "combine", "--rate", "rate12"])
            .expect("combine args should parse");
        assert!(matches!(cli.command, Command::Combine(_)));
    }

    #[test]
    fn parses_inspect_with_hex_operand() {
        let cli = Cli::try_parse_from(["dmrpad", "inspect", "00112233445566778899aabb"])
            .expect("inspect args should parse");
        assert!(matches!(cli.command, Command::Inspect(_)));
    }
}
