use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use dmrpad_frame::RateType;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod combine;
pub mod fragment;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a payload into on-air data blocks.
    Fragment(FragmentArgs),
    /// Reassemble on-air data blocks into a payload.
    Combine(CombineArgs),
    /// Decode a single data block and show its fields.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Fragment(args) => fragment::run(args, format),
        Command::Combine(args) => combine::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum RateArg {
    /// Rate 1/2 coded, 12-byte blocks.
    #[value(name = "1/2", alias = "rate12")]
    Rate12,
    /// Rate 3/4 coded, 18-byte blocks.
    #[value(name = "3/4", alias = "rate34")]
    Rate34,
    /// Rate 1 uncoded, 22-byte blocks.
    #[value(name = "1", alias = "rate1")]
    Rate1,
}

impl From<RateArg> for RateType {
    fn from(rate: RateArg) -> Self {
        match rate {
            RateArg::Rate12 => RateType::Rate12,
            RateArg::Rate34 => RateType::Rate34,
            RateArg::Rate1 => RateType::Rate1,
        }
    }
}

#[derive(Args, Debug)]
pub struct FragmentArgs {
    /// Data rate of the target channel.
    #[arg(long, value_enum, default_value = "3/4")]
    pub rate: RateArg,
    /// Emit confirmed blocks (serial number + CRC-9 header).
    #[arg(long)]
    pub confirmed: bool,
    /// Raw string payload.
    #[arg(long, conflicts_with_all = ["file", "text"])]
    pub data: Option<String>,
    /// Read the payload from a file.
    #[arg(long, conflicts_with_all = ["data", "text"])]
    pub file: Option<PathBuf>,
    /// Message text, transcoded per --text-format.
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub text: Option<String>,
    /// Text encoding for --text.
    #[arg(long, value_name = "FORMAT", default_value = "utf-8")]
    pub text_format: String,
    /// Append the double-zero message terminator to --text.
    #[arg(long)]
    pub null_terminated: bool,
}

#[derive(Args, Debug)]
pub struct CombineArgs {
    /// Data rate the blocks were received at.
    #[arg(long, value_enum, default_value = "3/4")]
    pub rate: RateArg,
    /// Treat input as confirmed blocks (serial number + CRC-9 header).
    #[arg(long)]
    pub confirmed: bool,
    /// Read wire blocks from a file instead of stdin.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Decode the reassembled payload as message text in this encoding.
    #[arg(long, value_name = "FORMAT")]
    pub text_format: Option<String>,
    /// Strip everything from the first zero byte when decoding text.
    #[arg(long)]
    pub null_terminated: bool,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Block bytes as hex.
    #[arg(value_name = "HEX", required_unless_present = "file", conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read block bytes from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Data rate the block was received at.
    #[arg(long, value_enum, default_value = "3/4")]
    pub rate: RateArg,
    /// Treat input as a confirmed block.
    #[arg(long)]
    pub confirmed: bool,
}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
