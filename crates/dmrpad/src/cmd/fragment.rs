use std::fs;

use dmrpad_text::TextFormat;

use crate::cmd::FragmentArgs;
use crate::exit::{io_error, text_error, CliResult, SUCCESS};
use crate::output::{self, OutputFormat};

pub fn run(args: FragmentArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;
    let rate = args.rate.into();
    let blocks = dmrpad_frame::fragment(&payload, rate, args.confirmed);
    output::print_blocks(&blocks, rate, args.confirmed, format);
    Ok(SUCCESS)
}

fn resolve_payload(args: &FragmentArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    if let Some(text) = &args.text {
        let text_format = TextFormat::from_name(&args.text_format)
            .map_err(|err| text_error("unknown --text-format", err))?;
        return dmrpad_text::encode_text(text, text_format, args.null_terminated)
            .map_err(|err| text_error("failed encoding --text", err));
    }
    Ok(Vec::new())
}
