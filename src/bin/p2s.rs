// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mikael Lund

//! `p2s` identifies the C64 music-player routine embedded in a PRG file,
//! patches it to run standalone, and wraps the result as a PSID/RSID file.
//!
//! ```text
//! p2s <file.prg> [load_addr] [6|8] [P|N] [Title] [Author] [Release] [Songs] [StartSong]
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use prg2sid::error::AppError;
use prg2sid::fingerprint::{self, ScanContext};
use prg2sid::numfmt::parse_p2s_address;
use prg2sid::psid::{self, PsidHeader, SidModel, VideoStandard};

const USAGE: &str = "\
Usage: p2s <filename.prg> [load_addr] [6/8] [P/N] [Title] [Author] [Release] [Songs] [Startsong]
A filename.sid will be created.
Optional parameters
load_addr: start ripping from this address ($ or 0x for hex)
6 for 6581 (default) or 8 for 8580
P for PAL  (default) or N for NTSC
Title, Author, Release must be 32 chars or less
Songs and startsong between 1 (default) and 255";

#[derive(Parser)]
#[command(name = "p2s", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    file: Option<PathBuf>,
    load_addr: Option<String>,
    sid_model: Option<String>,
    region: Option<String>,
    title: Option<String>,
    author: Option<String>,
    release: Option<String>,
    songs: Option<String>,
    start_song: Option<String>,
}

fn main() {
    let args = Args::parse();
    let Some(file) = args.file.clone() else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    match run(&file, &args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.p2s_exit_code());
        }
    }
}

fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension("sid")
}

fn run(file: &Path, args: &Args) -> Result<(), AppError> {
    let prg = std::fs::read(file).map_err(|_| AppError::InputOpen(file.to_path_buf()))?;
    if prg.len() < 2 {
        return Err(AppError::InputTooSmall(file.to_path_buf()));
    }
    if psid::is_already_psid(&prg) {
        return Err(AppError::AlreadyPsid(file.to_path_buf()));
    }

    let out_path = output_path_for(file);
    // Opened up front (before scanning) to match the original tool's error
    // ordering: an unwritable output directory is reported before any of
    // the fingerprinting work happens.
    let out_handle =
        std::fs::File::create(&out_path).map_err(|_| AppError::OutputCreate(out_path.clone()))?;
    drop(out_handle);

    let mut header = PsidHeader::default();
    let mut prg = prg;

    if let Some(load_addr) = &args.load_addr {
        if load_addr.len() > 2 {
            if let Some(j) = parse_p2s_address(load_addr) {
                let current_load = u16::from_le_bytes([prg[0], prg[1]]) as i64;
                let fsiz = prg.len() as i64;
                if j > current_load && j < current_load + fsiz - 2 {
                    let k = (j - current_load) as usize;
                    prg.drain(0..k);
                    prg[0] = (j & 0xff) as u8;
                    prg[1] = (j >> 8) as u8;
                }
                // Outside (L, L+N-2): AddressOutOfRange, silently discarded.
            }
        }
    }

    if let Some(model) = &args.sid_model {
        if model.starts_with('8') {
            header.sid_model = SidModel::Mos8580;
        }
    }
    if let Some(region) = &args.region {
        if region.to_ascii_uppercase().starts_with('N') {
            header.video_standard = VideoStandard::Ntsc;
        }
    }
    if let Some(title) = &args.title {
        if !title.is_empty() {
            header.title = title.clone();
        }
    }
    if let Some(author) = &args.author {
        if !author.is_empty() {
            header.author = author.clone();
        }
    }
    if let Some(release) = &args.release {
        if !release.is_empty() {
            header.released = release.clone();
        }
    }
    if let Some(songs) = &args.songs {
        if let Ok(n) = songs.parse::<u16>() {
            if n > 0 && n < 256 {
                header.song_count = n;
            }
        }
    }
    if let Some(start_song) = &args.start_song {
        if let Ok(n) = start_song.parse::<u16>() {
            if n > 0 && n < 256 {
                header.start_song = n;
            }
        }
    }

    let mut ctx = ScanContext::new(prg);
    fingerprint::scan(&mut ctx);
    ctx.apply_to_header(&mut header);

    println!(
        "{}: ID={} Init=${:04X} Play=${:04X}",
        out_path.display(),
        ctx.identity,
        header.init_address,
        header.play_address
    );

    let prepend = ctx.prepend.clone();
    let payload = ctx.into_payload();
    let out_bytes = psid::write_psid(&header, &prepend, &payload);
    std::fs::write(&out_path, out_bytes)
        .map_err(|_| AppError::OutputCreate(out_path.clone()))?;

    Ok(())
}
