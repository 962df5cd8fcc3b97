use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use dmrpad_frame::{DataBlock, DataFragment, RateType};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct BlockOutput {
    schema_id: &'static str,
    index: usize,
    serial: u8,
    crc9: String,
    length: u8,
    wire: String,
}

pub fn print_blocks(blocks: &[DataBlock], rate: RateType, confirmed: bool, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for (index, block) in blocks.iter().enumerate() {
                let out = BlockOutput {
                    schema_id: "https://schemas.dmrpad.dev/cli/v1/data-block.schema.json",
                    index,
                    serial: block.serial,
                    crc9: format!("{:#05x}", block.crc),
                    length: block.length,
                    wire: hex::encode(block.encode(rate, confirmed)),
                };
                println!(
                    "{}",
                    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "SERIAL", "CRC9", "WIRE"]);
            for (index, block) in blocks.iter().enumerate() {
                table.add_row(vec![
                    index.to_string(),
                    block.serial.to_string(),
                    format!("{:#05x}", block.crc),
                    hex::encode(block.encode(rate, confirmed)),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (index, block) in blocks.iter().enumerate() {
                println!(
                    "block={index} serial={} crc9={:#05x} len={} wire={}",
                    block.serial,
                    block.crc,
                    block.length,
                    hex::encode(block.encode(rate, confirmed))
                );
            }
        }
        OutputFormat::Raw => {
            let mut out = std::io::stdout();
            for block in blocks {
                let _ = out.write_all(&block.encode(rate, confirmed));
            }
            let _ = out.flush();
        }
    }
}

#[derive(Serialize)]
struct FragmentOutput<'a> {
    schema_id: &'a str,
    stored: usize,
    blocks: usize,
    crc32: String,
    payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

pub fn print_fragment(fragment: &DataFragment, text: Option<&str>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = FragmentOutput {
                schema_id: "https://schemas.dmrpad.dev/cli/v1/fragment.schema.json",
                stored: fragment.stored(),
                blocks: fragment.needed,
                crc32: format!("{:#010x}", fragment.crc),
                payload: hex::encode(&fragment.data),
                text,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["STORED", "BLOCKS", "CRC32", "PAYLOAD"])
                .add_row(vec![
                    fragment.stored().to_string(),
                    fragment.needed.to_string(),
                    format!("{:#010x}", fragment.crc),
                    text.map(str::to_string)
                        .unwrap_or_else(|| hex::encode(&fragment.data)),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "stored={} blocks={} crc32={:#010x}",
                fragment.stored(),
                fragment.needed,
                fragment.crc
            );
            match text {
                Some(text) => println!("text={text}"),
                None => println!("payload={}", hex::encode(&fragment.data)),
            }
        }
        OutputFormat::Raw => {
            let mut out = std::io::stdout();
            match text {
                Some(text) => {
                    let _ = out.write_all(text.as_bytes());
                }
                None => {
                    let _ = out.write_all(&fragment.data);
                }
            }
            let _ = out.flush();
        }
    }
}

#[derive(Serialize)]
struct BlockDetail {
    schema_id: &'static str,
    serial: u8,
    crc9: String,
    verified: bool,
    length: u8,
    payload: String,
}

pub fn print_block(block: &DataBlock, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = BlockDetail {
                schema_id: "https://schemas.dmrpad.dev/cli/v1/block-detail.schema.json",
                serial: block.serial,
                crc9: format!("{:#05x}", block.crc),
                verified: block.verified,
                length: block.length,
                payload: hex::encode(&block.data),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SERIAL", "CRC9", "VERIFIED", "PAYLOAD"])
                .add_row(vec![
                    block.serial.to_string(),
                    format!("{:#05x}", block.crc),
                    block.verified.to_string(),
                    hex::encode(&block.data),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "serial={} crc9={:#05x} verified={} len={} payload={}",
                block.serial,
                block.crc,
                block.verified,
                block.length,
                hex::encode(&block.data)
            );
        }
        OutputFormat::Raw => {
            let mut out = std::io::stdout();
            let _ = out.write_all(&block.data);
            let _ = out.flush();
        }
    }
}
