// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mikael Lund

//! `sf2pack` relocates a SID Factory II driver binary to a new load
//! address and zero-page base, then wraps the result as a PSID file.

use std::path::PathBuf;

use clap::Parser;
use prg2sid::error::AppError;
use prg2sid::memory::C64Memory;
use prg2sid::numfmt::parse_c_style;
use prg2sid::psid::{self, PsidHeader};
use prg2sid::relocate::{self, DriverConfig};

/// Fixed shape of the SID Factory II driver this tool packs. These match
/// the driver's own layout, not anything the caller can override.
const DRIVER_CODE_TOP: u16 = 0x0D7E;
const DRIVER_CODE_SIZE: u16 = 0x0800;
const CURRENT_LOWEST_ZP: u8 = 0x02;
const INIT_OFFSET: u16 = 0x0000;
const PLAY_OFFSET: u16 = 0x0003;

#[derive(Parser)]
#[command(name = "sf2pack", about = "Relocate a SID Factory II driver into a PSID file")]
struct Args {
    /// Input PRG containing the driver at $0D7E.
    input: PathBuf,

    /// Output .sid path.
    output: PathBuf,

    /// Target load address, `0x`/octal/decimal (C `strtol` base-0 rules).
    #[arg(long, default_value = "0x1000")]
    address: String,

    /// Target zero-page base, same numeric rules as `--address`.
    #[arg(long, default_value = "0x02")]
    zp: String,

    /// Song title, written into the PSID header.
    #[arg(long, default_value = "")]
    title: String,

    /// Composer/author, written into the PSID header.
    #[arg(long, default_value = "")]
    author: String,

    /// Release/copyright line, written into the PSID header.
    #[arg(long, default_value = "")]
    copyright: String,

    /// Print the relocation stats and the chosen addresses.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let target_load_addr = parse_c_style(&args.address).unwrap_or(0x1000) as u16;
    let target_zp_base = parse_c_style(&args.zp).unwrap_or(0x02) as u8;

    let prg = std::fs::read(&args.input).map_err(|_| AppError::InputOpen(args.input.clone()))?;
    if prg.len() < 2 {
        return Err(AppError::InputTooSmall(args.input.clone()));
    }

    let mut memory = C64Memory::new();
    memory.load_from_prg(&prg)?;

    let config = DriverConfig {
        driver_top: DRIVER_CODE_TOP,
        driver_size: DRIVER_CODE_SIZE,
        current_zp_base: CURRENT_LOWEST_ZP,
        target_zp_base,
        target_load_addr,
    };
    let stats = relocate::relocate_driver_code(&mut memory, &config)?;

    let data_end = relocate::find_data_end(&memory, config.driver_top, config.driver_size);
    relocate::move_region(&mut memory, config.driver_top, data_end, target_load_addr);

    let moved_size = data_end - config.driver_top;
    let out_payload = memory.export_to_prg(target_load_addr, target_load_addr + moved_size)?;

    // Unlike p2s's default template, the original packer leaves title,
    // author and release blank unless the caller sets them.
    let mut header = PsidHeader {
        title: args.title.clone(),
        author: args.author.clone(),
        released: args.copyright.clone(),
        ..PsidHeader::default()
    };
    header.init_address = target_load_addr + INIT_OFFSET;
    header.play_address = target_load_addr + PLAY_OFFSET;

    let output = args.output.clone();
    let out_bytes = psid::write_psid(&header, &[], &out_payload);
    std::fs::write(&output, out_bytes).map_err(|_| AppError::OutputCreate(output.clone()))?;

    if args.verbose {
        println!(
            "{}: moved ${:04X}-${:04X} -> ${:04X}, {} absolute / {} zero-page operand(s) relocated",
            output.display(),
            DRIVER_CODE_TOP,
            data_end,
            target_load_addr,
            stats.absolute,
            stats.zero_page
        );
    }

    Ok(())
}
