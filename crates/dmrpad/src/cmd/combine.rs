use std::fs;
use std::io::Read;

use dmrpad_frame::{combine, DataBlock, RateType};
use dmrpad_text::TextFormat;

use crate::cmd::CombineArgs;
use crate::exit::{frame_error, io_error, text_error, CliResult, SUCCESS};
use crate::output::{self, OutputFormat};

pub fn run(args: CombineArgs, format: OutputFormat) -> CliResult<i32> {
    let wire = read_wire(&args)?;
    let rate: RateType = args.rate.into();

    let mut blocks = Vec::with_capacity(wire.len() / rate.block_len());
    for chunk in wire.chunks(rate.block_len()) {
        let block = DataBlock::decode(chunk, rate, args.confirmed)
            .map_err(|err| frame_error("failed decoding block", err))?;
        blocks.push(block);
    }

    let fragment = combine(&blocks).map_err(|err| frame_error("failed combining blocks", err))?;

    let text = match &args.text_format {
        Some(name) => {
            let text_format =
                TextFormat::from_name(name).map_err(|err| text_error("unknown --text-format", err))?;
            // The last four assembled bytes are the fragment checksum, not
            // message text.
            let payload = &fragment.data[..fragment.data.len() - 4];
            Some(dmrpad_text::decode_text(
                payload,
                text_format,
                args.null_terminated,
            ))
        }
        None => None,
    };

    output::print_fragment(&fragment, text.as_deref(), format);
    Ok(SUCCESS)
}

fn read_wire(args: &CombineArgs) -> CliResult<Vec<u8>> {
    match &args.file {
        Some(path) => {
            fs::read(path).map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
        }
        None => {
            let mut wire = Vec::new();
            std::io::stdin()
                .read_to_end(&mut wire)
                .map_err(|err| io_error("failed reading stdin", err))?;
            Ok(wire)
        }
    }
}
