// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mikael Lund

//! Player fingerprint scanner: identifies which of the known music-player
//! routines a PRG image embeds, and applies the binary patches that let the
//! tune run as a standalone PSID.
//!
//! The scanner walks an ordered list of check functions and returns the
//! first match (see [`scan`]). Each check function reads (and sometimes
//! mutates) a [`ScanContext`], mirroring the original's file-scope scratch
//! variables (`p`, `fsiz`, `initaddr`, `playaddr`, `loadaddr`, `extra`)
//! without reproducing them as actual globals.

mod checks;
pub mod signatures;

use crate::psid::{PsidHeader, SidModel, VideoStandard};

/// Mutable state threaded through every check function.
///
/// `buf` holds the *entire* PRG image, including its 2-byte little-endian
/// load-address prefix at `buf[0..2]`, exactly like the original's `p`
/// pointer, so every offset a check uses lines up byte-for-byte with the
/// source it was ported from.
pub struct ScanContext {
    buf: Vec<u8>,
    /// Effective load address; kept in sync with `buf[0..2]` but tracked
    /// separately because a handful of checks re-home the buffer.
    pub load_addr: u16,
    /// Deduced init entry point.
    pub init_addr: u16,
    /// Deduced play entry point.
    pub play_addr: u16,
    /// Human-readable identity string.
    pub identity: String,
    /// Extra bytes to prepend before the payload in the final PSID.
    pub prepend: Vec<u8>,
    /// Header fields a check may override.
    pub header: HeaderOverrides,
}

/// Header tweaks a check function may request; applied by the caller after
/// scanning, on top of the header's normal defaults.
#[derive(Debug, Default)]
pub struct HeaderOverrides {
    /// Set to request the `RSID` marker instead of `PSID`.
    pub rsid: bool,
    /// Song numbers (1-based) that should use CIA timing instead of VBI.
    pub cia_timing_songs: Vec<u16>,
    /// Free-relocation start page, if the player declares one.
    pub free_page: Option<u8>,
    /// Free-relocation page count, if the player declares one.
    pub free_page_max: Option<u8>,
    /// Forced SID chip model, if the player hard-codes one.
    pub sid_model: Option<SidModel>,
    /// Forced video standard, if the player hard-codes one.
    pub video_standard: Option<VideoStandard>,
    /// PSID version override (bumped to 3 for stereo SID support).
    pub version: Option<u16>,
    /// Second SID address, already encoded as `(addr - 0xD000) >> 4`.
    pub second_sid: Option<u8>,
    /// When set, the second SID uses the same chip model as the first
    /// (Mssiah patches its stereo flag byte this way).
    pub mirror_sid_model_to_second: bool,
    /// Forces the combined `sid_model` flag bits to "either chip works".
    pub sid_model_either: bool,
    /// Subtune count a player hard-codes (Ubik's Music reports 9).
    pub song_count: Option<u16>,
}

impl ScanContext {
    /// Builds a context from a raw PRG image (load address + payload).
    pub fn new(prg: Vec<u8>) -> Self {
        let load_addr = u16::from_le_bytes([
            prg.first().copied().unwrap_or(0),
            prg.get(1).copied().unwrap_or(0),
        ]);
        Self {
            buf: prg,
            load_addr,
            init_addr: load_addr,
            play_addr: load_addr.wrapping_add(3),
            identity: "Generic".to_string(),
            prepend: Vec::new(),
            header: HeaderOverrides::default(),
        }
    }

    /// Length of the PRG image, including the 2-byte load-address prefix
    /// (this is the original's `fsiz`).
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Byte at `offset`, or `0` if out of range. The original performs
    /// unchecked pointer arithmetic here; every check first guards on
    /// `len() >= min_size`, but several offsets used deeper in a check can
    /// still exceed that coarse bound for pathological input, so reads
    /// stay bounds-checked rather than panicking.
    fn byte(&self, offset: i64) -> u8 {
        if offset < 0 {
            return 0;
        }
        self.buf.get(offset as usize).copied().unwrap_or(0)
    }

    /// Little-endian 16-bit word at `offset`.
    fn word(&self, offset: i64) -> u16 {
        u16::from_le_bytes([self.byte(offset), self.byte(offset + 1)])
    }

    /// Little-endian 32-bit word at `offset`, masked.
    fn u32le_masked(&self, offset: i64, mask: u32) -> u32 {
        let v = u32::from_le_bytes([
            self.byte(offset),
            self.byte(offset + 1),
            self.byte(offset + 2),
            self.byte(offset + 3),
        ]);
        v & mask
    }

    /// Unmasked little-endian 32-bit word at `offset`.
    fn u32le(&self, offset: i64) -> u32 {
        self.u32le_masked(offset, 0xFFFF_FFFF)
    }

    /// Writes a byte at `offset`, extending the buffer with zeros if needed.
    /// The original writes past `fsiz` in a few patch paths (heap overflow
    /// in C); extending here instead keeps the same observable effect
    /// without undefined behaviour.
    fn poke(&mut self, offset: i64, value: u8) {
        if offset < 0 {
            return;
        }
        let idx = offset as usize;
        if idx >= self.buf.len() {
            self.buf.resize(idx + 1, 0);
        }
        self.buf[idx] = value;
    }

    /// Writes `bytes` starting at `offset`.
    fn poke_slice(&mut self, offset: i64, bytes: &[u8]) {
        for (k, &b) in bytes.iter().enumerate() {
            self.poke(offset + k as i64, b);
        }
    }

    /// Fills `len` bytes starting at `offset` with `value`.
    fn fill(&mut self, offset: i64, value: u8, len: usize) {
        for k in 0..len {
            self.poke(offset + k as i64, value);
        }
    }

    /// `AdjustJ`: converts an absolute pointer value into a buffer offset
    /// relative to the current load address, with the `p`-vs-`buf[0..2]`
    /// +2 skew the original encodes inline at every call site.
    fn adjust_j(&self, pointer: u16) -> i64 {
        i64::from(pointer) + 2 - i64::from(self.load_addr)
    }

    /// `CheckJ`: true if `offset` is out of bounds for the current buffer.
    fn check_j(&self, offset: i64) -> bool {
        offset < 0 || offset > (self.len() as i64 - 1)
    }

    /// Drops `count` bytes from the front of the buffer, advancing the
    /// effective load address to match (`p += k; fsiz -= k; loadaddr += k;`
    /// in the source). Used by checks whose player embeds a short loader
    /// before the recognisable driver.
    fn skip_front(&mut self, count: usize) {
        self.buf.drain(0..count);
        self.load_addr = self.load_addr.wrapping_add(count as u16);
    }

    fn set_identity(&mut self, identity: impl Into<String>) {
        self.identity = identity.into();
    }
}

/// Runs every check in priority order and returns the winning identity,
/// applying the default ("Generic", init=L, play=L+3) if none match.
///
/// A fresh [`ScanContext`] must be passed in; on return its `init_addr`,
/// `play_addr`, `identity`, `prepend` and `header` fields hold the scan
/// result, and `into_payload` recovers the (possibly mutated/re-homed)
/// payload bytes.
pub fn scan(ctx: &mut ScanContext) {
    for check in checks::CHECKS {
        if check(ctx) {
            return;
        }
    }
}

impl ScanContext {
    /// Consumes the context, returning the final payload bytes (including
    /// the load-address prefix) ready for the PSID writer.
    pub fn into_payload(self) -> Vec<u8> {
        self.buf
    }

    /// Builds the PSID header implied by this scan result, layered on top
    /// of the given base (title/author/release/song-count/start-song,
    /// which come from the CLI, not from the scanner).
    pub fn apply_to_header(&self, header: &mut PsidHeader) {
        header.init_address = self.init_addr;
        header.play_address = self.play_addr;
        if self.header.rsid {
            header.is_rsid = true;
        }
        for &song in &self.header.cia_timing_songs {
            header.set_cia_timing(song);
        }
        if let Some(page) = self.header.free_page {
            header.free_page = page;
        }
        if let Some(max) = self.header.free_page_max {
            header.free_page_max = max;
        }
        if let Some(model) = self.header.sid_model {
            header.sid_model = model;
        }
        if self.header.sid_model_either {
            header.sid_model = SidModel::Either;
        }
        if let Some(standard) = self.header.video_standard {
            header.video_standard = standard;
        }
        if let Some(version) = self.header.version {
            header.version = header.version.max(version);
        }
        if let Some(second_sid) = self.header.second_sid {
            header.second_sid = second_sid;
        }
        if self.header.mirror_sid_model_to_second {
            header.second_sid_model = Some(header.sid_model);
        }
        if let Some(song_count) = self.header.song_count {
            header.song_count = song_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_identity_is_generic_with_classic_entry_points() {
        let mut prg = vec![0x00, 0x10];
        prg.extend(std::iter::repeat(0u8).take(64));
        let mut ctx = ScanContext::new(prg);
        scan(&mut ctx);
        assert_eq!(ctx.identity, "Generic");
        assert_eq!(ctx.init_addr, 0x1000);
        assert_eq!(ctx.play_addr, 0x1003);
    }

    #[test]
    fn future_composer_signature_is_detected() {
        let mut prg = vec![0u8; 0x210];
        prg[0] = 0x00;
        prg[1] = 0x10;
        prg[0x02] = 0x4c;
        prg[0x08] = 0xad;
        prg[0x0f] = 0xc9;
        // u32le(p+0x0b) & 0xfffff0ff == 0x07F000C9
        let word = 0x07F000C9u32;
        prg[0x0b] = (word & 0xff) as u8;
        prg[0x0c] = ((word >> 8) & 0xff) as u8;
        prg[0x0d] = ((word >> 16) & 0xff) as u8;
        prg[0x0e] = ((word >> 24) & 0xff) as u8;
        let mut ctx = ScanContext::new(prg);
        scan(&mut ctx);
        assert!(ctx.identity.starts_with("FutureComposer"));
        assert_eq!(ctx.init_addr, 0x1000);
        assert_eq!(ctx.play_addr, 0x1006);
    }
}
