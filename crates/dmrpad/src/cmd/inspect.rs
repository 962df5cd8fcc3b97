use std::fs;

use dmrpad_frame::{DataBlock, RateType};

use crate::cmd::InspectArgs;
use crate::exit::{frame_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{self, OutputFormat};

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let wire = resolve_wire(&args)?;
    let rate: RateType = args.rate.into();
    let block = DataBlock::decode(&wire, rate, args.confirmed)
        .map_err(|err| frame_error("failed decoding block", err))?;
    output::print_block(&block, format);
    Ok(SUCCESS)
}

fn resolve_wire(args: &InspectArgs) -> CliResult<Vec<u8>> {
    if let Some(encoded) = &args.hex {
        return hex::decode(encoded.trim())
            .map_err(|err| CliError::new(USAGE, format!("block bytes are not valid hex: {err}")));
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::new(
        USAGE,
        "provide block bytes as a hex operand or via --file",
    ))
}
