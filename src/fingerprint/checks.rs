// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mikael Lund

//! The ordered catalogue of player-identity checks.
//!
//! Each function here corresponds 1:1 to a `Chk_*` routine from the
//! original scanner and keeps its byte offsets, magic constants and
//! mutation side effects. [`CHECKS`] lists them in the exact order the
//! original dispatch table does; [`super::scan`] stops at the first match,
//! so that order is part of the observable behaviour, not an
//! implementation detail.

use super::signatures::*;
use super::ScanContext;

/// Patches out the IRQ-install JSR at $1048/$d049 some Future Composer
/// rips leave dangling (`AdjFC` in the original).
fn adj_fc(ctx: &mut ScanContext) {
    if ctx.byte(0x48) == 0x20 && ctx.byte(0x49) == 0xd0 {
        ctx.poke(0x47, 0xea);
        ctx.poke(0x48, 0xea);
        ctx.poke(0x49, 0xea);
    }
}

/// True when the two JMP targets at `payload[3..5]`/`payload[6..8]` already
/// point at `init`/`play`; several checks fall back to the classic
/// load/load+3 entry points when that's the case instead of double-patching
/// an already-correct jump table.
fn jmp_table_matches(ctx: &ScanContext, init: u16, play: u16) -> bool {
    ctx.byte(2) == 0x4c && ctx.byte(5) == 0x4c && ctx.word(3) == init && ctx.word(6) == play
}

/// Future Composer 4.0/4.1 stack-page check: confirms the common `af4`
/// byte table, then the 4.0-vs-4.1-specific tail, patching any `lda $0100`
/// references to `$0200` found along the way (`fixfc4stack`).
///
/// Returns `-1` if the buffer doesn't match either sub-version, otherwise
/// the sub-version index (bit 0) optionally OR'd with `0x100` if a patch
/// was applied.
fn fixfc4stack(ctx: &mut ScanContext, base: i64) -> i64 {
    if ctx.len() as i64 - base < 0x600 {
        return -1;
    }
    for &(offset, expect) in FC_COMMON.iter() {
        if ctx.byte(base + i64::from(offset)) != expect {
            return -1;
        }
    }
    let mut variant = -1i64;
    let tables: [&[(u16, u8)]; 2] = [&FC40_EXTRA, &FC41_EXTRA];
    for (z, table) in tables.iter().enumerate() {
        let mut ok = true;
        for (i, &(offset, expect)) in table.iter().enumerate() {
            if ctx.byte(base + i64::from(offset)) != expect {
                // Zyron's hack doesn't have the last (0x5a7) offset.
                if z == 1 && i == table.len() - 1 {
                    break;
                }
                ok = false;
                break;
            }
        }
        if ok {
            variant = z as i64;
            break;
        }
    }
    if variant == -1 {
        return -1;
    }
    let mut patched = 0i64;
    for &(offset, _) in FC_COMMON.iter() {
        let at = base + i64::from(offset) + 2;
        if ctx.byte(at) == 0x01 {
            ctx.poke(at, 0x02);
            patched = 0x100;
        }
    }
    let table = tables[variant as usize];
    for (i, &(offset, _)) in table.iter().enumerate() {
        if variant == 1 && i == table.len() - 1 {
            break;
        }
        let at = base + i64::from(offset) + 2;
        if ctx.byte(at) == 0x01 {
            ctx.poke(at, 0x02);
            patched = 0x100;
        }
    }
    variant | patched
}

/// SkylineTech/Danne's analogous stack-page check against the `sld0` table.
fn fixsklstack(ctx: &mut ScanContext, base: i64) -> i64 {
    if ctx.len() as i64 - base < 0x600 {
        return -1;
    }
    for &(offset, expect) in SKYLINE_DANNE_SIG.iter() {
        if ctx.byte(base + i64::from(offset)) != expect {
            return -1;
        }
    }
    let mut patched = 0i64;
    for &(offset, _) in SKYLINE_DANNE_SIG.iter() {
        let at = base + i64::from(offset) + 2;
        if ctx.byte(at) == 0x01 {
            ctx.poke(at, 0x02);
            patched = 0x100;
        }
    }
    patched
}

// --- CHECK FUNCTIONS ---

/// Future Composer, classic $1000/$1006 entry points.
fn check_fc(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(0x02) == 0x4c
        && ctx.byte(0x08) == 0xad
        && ctx.byte(0x0f) == 0xc9
        && ctx.u32le_masked(0x0b, 0xfffff0ff) == 0x07F000C9
    {
        ctx.play_addr = ctx.init_addr.wrapping_add(6);
        adj_fc(ctx);
        let mut id = "FutureComposer".to_string();
        let fix = fixfc4stack(ctx, 2);
        if fix != -1 {
            id.push_str(" 4.");
            id.push_str(if fix & 1 != 0 { "1" } else { "0" });
            if fix & 0x100 != 0 {
                id.push_str(" (fixed)");
            }
        }
        ctx.set_identity(id);
        return true;
    }
    false
}

/// Future Composer, altered $1000/$102a entry points.
fn check_fc_alt(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(0x02) == 0x4c
        && ctx.byte(0x03) == 0x08
        && ctx.byte(0x2c) == 0xee
        && ctx.byte(0x2d) == 0x42
        && ctx.byte(0x2f) == 0xee
        && ctx.byte(0x30) == 0x43
    {
        ctx.play_addr = ctx.init_addr.wrapping_add(0x2a);
        adj_fc(ctx);
        ctx.set_identity("FutureComposer (altered)");
        return true;
    }
    false
}

/// MusicAssembler $1048/$1021, with a DoubleTracker 2x-speed variant.
fn check_musass(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    let mut found = None;
    for i in 2i64..0x25 {
        if ctx.u32le(i) == 0x90CE00A2
            && ctx.u32le(i + 0x05) == 0x26200C30
            && ctx.u32le(i + 0x31) == 0x628D0F29
        {
            found = Some(i);
            break;
        }
    }
    let i = match found {
        Some(i) => i,
        None => return false,
    };
    if ctx.byte(2) == 0xad
        && ctx.byte(3) == 0xd2
        && ctx.u32le(0x05) == 0x00A205F0
        && ctx.u32le(0x19) == 0x02A205F0
    {
        ctx.header.cia_timing_songs.push(1);
        let k = (ctx.load_addr >> 8).wrapping_sub(1);
        let init = (k << 8) | 0xd8;
        let play = (k << 8) | 0xea;
        ctx.init_addr = init;
        ctx.play_addr = play;
        let mut prepend = vec![(init & 0xff) as u8, (init >> 8) as u8];
        prepend.extend_from_slice(&PATCH_DOUBLETRACKER);
        prepend[0x10] = k as u8;
        prepend[0x13] = k.wrapping_add(1) as u8;
        prepend[0x1b] = k as u8;
        prepend[0x1e] = k as u8;
        prepend[0x21] = k as u8;
        prepend[0x24] = k.wrapping_add(1) as u8;
        ctx.prepend = prepend;
        ctx.poke(0, 0);
        ctx.poke(1, 0);
        ctx.set_identity("DoubleTracker");
        return true;
    }
    let init = (i64::from(ctx.load_addr) + 0x48 - 0x23 + i) as u16;
    let play = (i64::from(ctx.load_addr) + 0x21 - 0x23 + i) as u16;
    if jmp_table_matches(ctx, init, play) {
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.load_addr.wrapping_add(3);
    } else {
        ctx.init_addr = init;
        ctx.play_addr = play;
    }
    ctx.set_identity("MusicAssembler");
    true
}

/// MusicMixer $1041/$107a.
fn check_musmix(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    let mut found = None;
    for i in 2i64..0x2d {
        if ctx.byte(0x43 - 0x2b + i) == 0xa9
            && ctx.u32le(0x4b - 0x2b + i) == 0x0F29D417
            && ctx.u32le(0xD4 - 0x2b + i) == 0x2030FAB1
            && ctx.u32le(0x7b - 0x2b + i) == 0xCE00A260
        {
            found = Some(i);
            break;
        }
    }
    let i = match found {
        Some(i) => i,
        None => return false,
    };
    let init = (i64::from(ctx.load_addr) + 0x41 - 0x2b + i) as u16;
    let play = (i64::from(ctx.load_addr) + 0x7a - 0x2b + i) as u16;
    if jmp_table_matches(ctx, init, play) {
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.load_addr.wrapping_add(3);
    } else {
        ctx.init_addr = init;
        ctx.play_addr = play;
    }
    ctx.set_identity("MusicMixer");
    true
}

/// GMC/Superiors $18ea/$14ea.
fn check_gmc(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x900 {
        return false;
    }
    for i in 2i64..0x18 {
        if ctx.u32le(0x0d0 - 0x16 + i) == 0x18FADDC3
            && ctx.u32le(0x0e0 - 0x16 + i) == 0x47FBB470
            && ctx.u32le(0x1a4 - 0x16 + i) == 0x0a0a0a0a
        {
            ctx.init_addr = (i64::from(ctx.load_addr) + 0x8ea - 0x16 + i) as u16;
            ctx.play_addr = (i64::from(ctx.load_addr) + 0x4ea - 0x16 + i) as u16;
            ctx.set_identity("GMC/Superiors");
            return true;
        }
    }
    false
}

/// Bappalander $1000/$1018, plus the SpaceLab variant.
fn check_bappalander(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x400 {
        return false;
    }
    if ctx.u32le(0x002) == 0x7DA200A9
        && ctx.u32le(0x017) == 0xCE60B185
        && ctx.u32le(0x215) == 0x0a0a0a0a
    {
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.load_addr.wrapping_add(0x18);
        ctx.set_identity("Bappalander");
        return true;
    }
    if ctx.byte(2) == 0x4c
        && ctx.u32le(0x00c) == 0xA9FA10CA
        && ctx.u32le(0x084) == 0xBDAAB0B1
        && ctx.u32le(0x25a) == 0x0a0a0a0a
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(3);
        ctx.play_addr = ctx.load_addr;
        ctx.set_identity("Bappalander/SpaceLab");
        return true;
    }
    false
}

/// Trackplayer $1140/$1287.
fn check_trkpl3(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x500 {
        return false;
    }
    if ctx.u32le(0x142) == 0x00A900A2
        && ctx.u32le(0x148) == 0x20E0E8D4
        && ctx.u32le(0x289) == 0xCA2000A2
        && ctx.u32le(0x491) == 0x0a0a0a0a
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(0x140);
        ctx.play_addr = ctx.load_addr.wrapping_add(0x287);
        ctx.set_identity("TrackPlayer");
        return true;
    }
    false
}

/// GroovyBits $1003/$1000, two tail-check variants.
fn check_groovy(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(2) == 0x4c && ctx.u32le(0x005) == 0x9D8A00A2 {
        let k = i64::from(ctx.byte(4)) * 0x100 + i64::from(ctx.byte(3)) - i64::from(ctx.load_addr) + 2;
        let variant = if ctx.u32le_masked(k, 0xfffff0ff) == 0xAD0330EE {
            1
        } else if ctx.byte(k) == 0xe6
            && ctx.byte(k + 0x02) == 0xa5
            && ctx.byte(k + 0x01) == ctx.byte(k + 0x03)
            && ctx.byte(k + 0x04) == 0xc9
        {
            2
        } else {
            0
        };
        if variant > 0 {
            ctx.init_addr = ctx.load_addr.wrapping_add(3);
            ctx.play_addr = ctx.load_addr;
            ctx.set_identity(format!("GroovyBits v{variant}"));
            return true;
        }
    }
    false
}

/// Parsec/LoS $1003/$1000, two signature offsets.
fn check_parsec(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.u32le(0x0d8) == 0x06ADF4F2
        && ctx.u32le(0x0e0) == 0xD002C974
        && ctx.u32le(0x0f4) == 0x180A0A00
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(3);
        ctx.play_addr = ctx.load_addr;
        ctx.set_identity("Parsec/LoS");
        return true;
    }
    if ctx.u32le(0x0db) == 0x06ADF4F2
        && ctx.u32le(0x0e3) == 0xD002C977
        && ctx.u32le(0x0fa) == 0x180A0A00
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(3);
        ctx.play_addr = ctx.load_addr;
        ctx.set_identity("Parsec/LoS");
        return true;
    }
    false
}

/// Sosperec: TAX + $1103/$1100, rewriting the dispatcher in place.
fn check_sosperec(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.u32le(0x010) == 0x02020202
        && ctx.u32le_masked(0x102, 0xff00ffff) == 0x8E00AA4C
        && ctx.u32le(0x132) == 0xD4168ED4
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(0xfc);
        ctx.play_addr = ctx.load_addr.wrapping_add(0x100);
        ctx.poke(0x0fe, 0xaa);
        ctx.poke(0x0ff, 0x4c);
        ctx.poke(0x100, 0x03);
        ctx.poke(0x101, (ctx.load_addr.wrapping_add(0x100) >> 8) as u8);
        ctx.set_identity("Sosperec");
        return true;
    }
    false
}

/// SoedeSoft, three generations of the same jump table.
fn check_soede_soft(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.u32le_masked(0x02b, 0xfffff0ff) == 0x3399A0A0
        && ctx.u32le(0x02f) == 0xFAD08803
        && ctx.u32le(0x107) == (0x00DA2060 | (u32::from(ctx.load_addr >> 8) << 24))
    {
        if ctx.byte(2) == 0x4c {
            ctx.init_addr = ctx.load_addr;
            ctx.poke(3, 0x29);
            ctx.poke(4, (ctx.load_addr >> 8) as u8);
        } else {
            ctx.init_addr = ctx.load_addr.wrapping_add(0x29);
        }
        ctx.play_addr = ctx.load_addr.wrapping_add(0x106);
        ctx.poke(0xda, 0x60);
        if ctx.byte(0x142) == 0xa9 {
            for j in 0x142..0x14a {
                ctx.poke(j, 0x60);
            }
        }
        ctx.set_identity("Soedesoft v1");
        return true;
    }
    if ctx.byte(2) == 0x4c
        && ctx.byte(5) == 0x4c
        && ctx.byte(8) == 0x4c
        && ctx.u32le(0x01a) == 0x88033399
        && ctx.u32le(0x01e) == 0x00A9FAD0
    {
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = if ctx.byte(6) == 0x7b {
            ctx.load_addr.wrapping_add(3)
        } else if ctx.byte(9) == 0x7b {
            ctx.load_addr.wrapping_add(6)
        } else {
            ctx.load_addr.wrapping_add(0x7b)
        };
        ctx.poke(0x5c, 0x60);
        ctx.set_identity("Soedesoft v2");
        return true;
    }
    if ctx.byte(2) == 0x4c
        && ctx.byte(5) == 0x4c
        && ctx.byte(6) == 0x35
        && ctx.byte(8) == 0x4c
        && ctx.byte(9) == 0x7c
        && ctx.u32le(0x03b) == 0x88033399
        && ctx.u32le(0x07d) == 0x037CEE60
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(3);
        ctx.play_addr = ctx.load_addr.wrapping_add(6);
        ctx.set_identity("Soedesoft v3");
        return true;
    }
    false
}

/// Prosonix v1 $1000/$1009.
fn check_prosonix1(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(2) == 0x4c
        && ctx.byte(5) == 0x4c
        && ctx.byte(8) == 0x4c
        && ctx.u32le_masked(0x00b, 0x00ffffff) == 0x00F000A9
        && ctx.u32le_masked(0x00f, 0x00ff00ff) == 0x00600010
    {
        let j = ctx.adjust_j(ctx.word(3));
        if !ctx.check_j(j)
            && ctx.byte(j) == 0xa9
            && ctx.byte(j + 0x01) == 0x01
            && ctx.byte(j + 0x02) == 0x8d
            && ctx.byte(j + 0x05) == 0xa2
        {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(9);
            ctx.set_identity("Prosonix v1");
            return true;
        }
    }
    false
}

/// Four JMPs: Prosonix v2, TFMX/Huelsbeck, Heathcliff v1, and a DMC 4.x +
/// $0ff9 patch variant, all sharing the same four-JMP prologue.
fn check_4jmps(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x800 {
        return false;
    }
    if ctx.byte(2) == 0x4c && ctx.byte(5) == 0x4c && ctx.byte(8) == 0x4c && ctx.byte(0xb) == 0x4c {
        let j = ctx.adjust_j(ctx.word(3));
        if !ctx.check_j(j) {
            if ctx.u32le(j) == 0x0C8D03A9 {
                let j2 = ctx.adjust_j(ctx.word(0xc));
                if !ctx.check_j(j2)
                    && ctx.byte(j2) == 0xad
                    && ctx.byte(j2 + 1) == 0x0c
                    && ctx.byte(j2 + 3) == 0xf0
                    && ctx.byte(j2 + 8) == 0x4c
                {
                    ctx.init_addr = ctx.load_addr;
                    ctx.play_addr = ctx.load_addr.wrapping_add(9);
                    ctx.set_identity("Prosonix v2");
                    return true;
                }
            }
            if ctx.byte(j) == 0xad && ctx.byte(j + 0x03) == 0x30 && ctx.byte(j + 0x05) == 0x20 {
                let j2 = ctx.adjust_j(ctx.word(0xc));
                if ctx.byte(j2) == 0x8d
                    && ctx.byte(j2 + 0x03) == 0x8e
                    && ctx.byte(j2 + 0x06) == 0x60
                    && (ctx.byte(j2 + 0x07) == 0x18 || ctx.byte(j2 + 0x0c) == 0x18)
                {
                    ctx.init_addr = ctx.load_addr.wrapping_add(9);
                    ctx.play_addr = ctx.load_addr;
                    ctx.set_identity("TFMX/Huelsbeck");
                    return true;
                }
            }
            if ctx.u32le_masked(j, 0xffff00ff) == 0xFBF000A9
                && ctx.u32le_masked(j + 0x04, 0x00fff0ff) == 0x008d00a9
                && ctx.u32le_masked(j + 0x09, 0x00ffffff) == 0x002000a2
                && ctx.u32le_masked(j + 0x0e, 0x00ffffff) == 0x002007a2
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(9);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("Heathcliff v1");
                return true;
            }
            let k = i64::from(ctx.load_addr >> 8);
            if ctx.u32le_masked(2, 0xff00ffff) == 0x4C001d4c
                && ctx.u32le_masked(2 + 0x04, 0xffff00ff) == 0x2F4C0085
                && ctx.u32le_masked(2 + 0xdf, 0xff00ffff) == 0x4C00F920
                && i64::from(ctx.byte(2 + 0xe1)) == k - 1
            {
                ctx.init_addr = ctx.load_addr;
                ctx.play_addr = ctx.load_addr.wrapping_add(3);
                let target = (((k - 1) << 8) | 0xf9) as u16;
                let mut prepend = vec![(target & 0xff) as u8, (target >> 8) as u8];
                prepend.extend_from_slice(&PATCH_DMC_4F9[0..5]);
                ctx.prepend = prepend;
                let tail = ((k + 7) & 0xff) as u8;
                ctx.poke(0, tail);
                ctx.poke(1, PATCH_DMC_4F9[PATCH_DMC_4F9.len() - 1]);
                ctx.set_identity(format!("DMC 4.x + patch @ ${:02x}f9", (k - 1) & 0xff));
                return true;
            }
        }
    }
    false
}

/// Heathcliff/DigitalArts v3 $1003/$1000.
fn check_heathcliff(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x800 {
        return false;
    }
    if ctx.byte(0x2) == 0x4c && ctx.byte(0x5) == 0xa9 && ctx.byte(0xa) == 0xa2 {
        let j = ctx.adjust_j(ctx.word(3));
        if !ctx.check_j(j)
            && ctx.u32le_masked(j, 0x00ffffff) == 0x00F015A9
            && ctx.u32le_masked(j + 0x04, 0x00ffffff) == 0x002000a2
            && ctx.u32le_masked(j + 0x09, 0x00ffffff) == 0x002007a2
        {
            ctx.init_addr = ctx.load_addr.wrapping_add(3);
            ctx.play_addr = ctx.load_addr;
            ctx.set_identity("Heathcliff v3");
            return true;
        }
    }
    false
}

/// Three JMPs, first shape: Prosonix v3, Heathcliff v2, Frank Hammer/Sharon.
fn check_3jmps1(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x400 {
        return false;
    }
    if ctx.byte(0x2) == 0x4c && ctx.byte(0x5) == 0x4c && ctx.byte(0x8) == 0x4c && ctx.byte(0xb) != 0x4c {
        let j = ctx.adjust_j(ctx.word(3));
        if !ctx.check_j(j) {
            if ctx.word(j) == 0x03A9 && ctx.byte(j + 2) == 0x8d {
                let k = ctx.byte(j + 3);
                let j2 = ctx.adjust_j(ctx.word(0x9));
                if !ctx.check_j(j2)
                    && ctx.byte(j2) == 0xad
                    && ctx.byte(j2 + 1) == k
                    && ctx.byte(j2 + 3) == 0xf0
                    && ctx.byte(j2 + 8) == 0x4c
                {
                    ctx.init_addr = ctx.load_addr;
                    ctx.play_addr = ctx.load_addr.wrapping_add(6);
                    ctx.set_identity("Prosonix v3");
                    return true;
                }
            }
            if ctx.u32le_masked(j, 0x00ff00ff) == 0x00F000A9
                && ctx.u32le_masked(j + 0x04, 0x00ffffff) == 0x002000a2
                && ctx.u32le_masked(j + 0x09, 0x00ffffff) == 0x002007a2
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(6);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("Heathcliff v2");
                return true;
            }
            if ctx.word(j) == 0x10AD
                && ctx.byte(j + 0x03) == 0x8d
                && ctx.byte(j + 0x32) == 0x60
                && ctx.u32le(j + 0x33) == 0x18F003C0
            {
                ctx.init_addr = ctx.load_addr;
                ctx.play_addr = ctx.load_addr.wrapping_add(6);
                ctx.set_identity("Frank Hammer");
                return true;
            }
        }
    }
    false
}

/// Arne/AFL $1000/$1009, with an optional `$d0c9` IRQ-ack fix.
fn check_arne_afl(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x400 {
        return false;
    }
    if ctx.byte(0x2) == 0x4c && ctx.byte(0x5) == 0x4c && ctx.byte(0x8) == 0x4c && ctx.byte(0xb) == 0x4c {
        let j = ctx.adjust_j(ctx.word(3));
        if !ctx.check_j(j) && ctx.u32le(j) == 0x40093F29 {
            let j2 = ctx.adjust_j(ctx.word(0xc));
            if !ctx.check_j(j2)
                && ctx.byte(j2) == 0x2c
                && ctx.byte(j2 + 3) == 0x30
                && ctx.byte(j2 + 5) == 0x70
                && ctx.byte(j2 + 7) == 0xa9
            {
                ctx.init_addr = ctx.load_addr;
                ctx.play_addr = ctx.load_addr.wrapping_add(9);
                let mut id = "Arne/AFL".to_string();
                if ctx.u32le(0x5b) == 0xc9dd0ead {
                    ctx.poke_slice(0x5b, &PATCH_ARNE_DD);
                    id.push_str(" (fixed)");
                }
                ctx.set_identity(id);
                return true;
            }
        }
    }
    false
}

/// Arne/SoundMaker v4, tried at both the $1000 and $1020 jump-table bases.
fn check_arne_sndmk(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x400 {
        return false;
    }
    let mut k = 0i64;
    while k <= 0x20 {
        if ctx.byte(2 + k) == 0x4c && ctx.byte(5 + k) != 0x4c && ctx.byte(8 + k) == 0x4c {
            let j = ctx.adjust_j(ctx.word(9 + k));
            if ctx.check_j(j) {
                break;
            }
            if ctx.byte(j) == 0xad && ctx.u32le(j + 3) == 0x60F001C9 {
                ctx.init_addr = ctx.load_addr.wrapping_add(k as u16);
                ctx.play_addr = ctx.load_addr.wrapping_add(k as u16).wrapping_add(6);
                ctx.set_identity("SoundMaker v4/Arne");
                return true;
            }
        }
        k += 0x20;
    }
    false
}

/// Digitalizer 2.x, fixed $1003/$1006 entry points.
fn check_digitalizer(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(2) == 0x4c
        && ctx.byte(5) == 0x4c
        && ctx.byte(8) == 0x20
        && ctx.u32le(0x0B) == 0x10033DCE
        && ctx.u32le(0x1B) == 0xADFAD0CA
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(3);
        ctx.play_addr = ctx.load_addr.wrapping_add(6);
        ctx.set_identity("Digitalizer 2.x");
        return true;
    }
    false
}

/// SoundMonitor/RockMon family at its fixed `$c000` load window, with six
/// silencing patches depending on which generation is detected.
fn check_soundmon(ctx: &mut ScanContext) -> bool {
    let fsiz = ctx.len() as i64;
    let load = i64::from(ctx.load_addr);
    if !(fsiz + load > 0xcb00 && fsiz > 0x2b00 && load <= 0xa000) {
        return false;
    }
    let hi = (ctx.load_addr >> 8) as u8;
    if ctx.u32le(ctx.adjust_j(0xc000)) == 0x4cc0124c && ctx.u32le(ctx.adjust_j(0xc020)) == 0xC58D01A5 {
        if ctx.u32le(ctx.adjust_j(0xc029)) == 0xADCBE120 {
            ctx.init_addr = 0xce30;
            ctx.play_addr = 0;
            ctx.header.rsid = true;
            ctx.header.free_page = Some(8);
            ctx.header.free_page_max = Some(hi.wrapping_sub(8));
            ctx.set_identity("DUSAT/RockMon3h");
        } else if ctx.u32le(ctx.adjust_j(0xc029)) == 0xAD80a020 {
            ctx.init_addr = 0xc000;
            ctx.play_addr = 0;
            ctx.header.rsid = true;
            ctx.header.free_page = Some(8);
            ctx.header.free_page_max = Some(hi.wrapping_sub(8));
            let j = ctx.adjust_j(ctx.init_addr);
            ctx.poke_slice(j, &PATCH_ROCKMON_SILENCE);
            ctx.set_identity("DUSAT/RockMon2");
        } else {
            ctx.init_addr = 0xc000;
            ctx.play_addr = 0xc020;
            let j = ctx.adjust_j(ctx.init_addr);
            ctx.poke_slice(j, &PATCH_SOUNDMON_SILENCE);
            ctx.poke(ctx.adjust_j(0xc031), 0x60);
            ctx.header.cia_timing_songs.push(1);
            ctx.header.free_page = Some(8);
            ctx.header.free_page_max = Some(hi.wrapping_sub(8));
            ctx.set_identity("SoundMonitor");
        }
        return true;
    }
    if ctx.u32le(ctx.adjust_j(0xc000)) == 0x4cc0124c && ctx.u32le(ctx.adjust_j(0xc01d)) == 0x0E8E00a2 {
        if ctx.u32le(ctx.adjust_j(0x9fd0)) == 0x018536a9 && ctx.u32le(ctx.adjust_j(0x9fdb)) == 0x8D9FA99F {
            ctx.init_addr = 0x9fd0;
            ctx.play_addr = 0;
            ctx.header.rsid = true;
            ctx.header.free_page = Some(8);
            ctx.header.free_page_max = Some(hi.wrapping_sub(8));
            let mut j = ctx.adjust_j(0x9fe1);
            ctx.poke(j, 0x20);
            j += 1;
            ctx.poke(j, 0x12);
            j += 1;
            ctx.poke(j, 0xc0);
            ctx.set_identity("DUSAT/RockMon4");
            return true;
        }
        if ctx.u32le(ctx.adjust_j(0x9f00)) == 0x8D02C0AD && ctx.u32le(ctx.adjust_j(0x9f04)) == 0x75209F0A {
            ctx.init_addr = 0xc000;
            ctx.play_addr = 0;
            let j = ctx.adjust_j(ctx.init_addr);
            ctx.poke_slice(j, &PATCH_ROCKMON_SILENCE);
            ctx.header.rsid = true;
            ctx.header.free_page = Some(8);
            ctx.header.free_page_max = Some(hi.wrapping_sub(8));
            ctx.set_identity("DUSAT/RockMon3");
            return true;
        }
    }
    if ctx.u32le(ctx.adjust_j(0xc000)) == 0x4cc0124c && ctx.u32le(ctx.adjust_j(0xc020)) == 0x4CA90295 {
        ctx.init_addr = 0xc000;
        ctx.play_addr = 0;
        let j = ctx.adjust_j(ctx.init_addr);
        ctx.poke_slice(j, &PATCH_ROCKMON_SILENCE);
        ctx.header.rsid = true;
        ctx.header.free_page = Some(8);
        ctx.header.free_page_max = Some(hi.wrapping_sub(8));
        ctx.set_identity("DUSAT/RockMon5");
        return true;
    }
    if ctx.u32le(ctx.adjust_j(0xc000)) == 0x4cc0124c
        && ctx.u32le(ctx.adjust_j(0xc01d)) == 0x589B0020
        && ctx.u32le(ctx.adjust_j(0xc02c)) == 0xAD9BA020
    {
        ctx.init_addr = 0xc000;
        ctx.play_addr = 0;
        let j = ctx.adjust_j(ctx.init_addr);
        ctx.poke_slice(j, &PATCH_ROCKMON_SILENCE);
        ctx.header.rsid = true;
        ctx.header.free_page = Some(8);
        ctx.header.free_page_max = Some(hi.wrapping_sub(8));
        ctx.set_identity("MusicMaster 1.3/BB");
        return true;
    }
    if ctx.u32le(ctx.adjust_j(0xc000)) == 0x4cc0124c
        && ctx.u32le(ctx.adjust_j(0xc01d)) == 0x589B0020
        && ctx.u32le(ctx.adjust_j(0xc02c)) == 0xadc47820
    {
        ctx.init_addr = 0xc000;
        ctx.play_addr = 0;
        let j = ctx.adjust_j(ctx.init_addr);
        ctx.poke_slice(j, &PATCH_ROCKMON_SILENCE);
        ctx.header.rsid = true;
        ctx.header.free_page = Some(8);
        ctx.header.free_page_max = Some(hi.wrapping_sub(8));
        ctx.set_identity("BeatBox/KarlXII");
        return true;
    }
    if ctx.u32le(ctx.adjust_j(0xc000)) == 0x4cc0124c
        && ctx.u32le(ctx.adjust_j(0xc025)) == 0x03148DD4
        && ctx.u32le(ctx.adjust_j(0xcbdd)) == 0xAD9F0020
    {
        ctx.init_addr = 0xc000;
        ctx.play_addr = 0;
        let j = ctx.adjust_j(ctx.init_addr);
        ctx.poke_slice(j, &PATCH_ROCKMON_SILENCE);
        ctx.header.rsid = true;
        ctx.header.free_page = Some(8);
        ctx.header.free_page_max = Some(hi.wrapping_sub(8));
        ctx.set_identity("Digitronix");
        return true;
    }
    false
}

/// AMP 2.x, relocating its scattered init/play/internal-player jump table
/// down to the classic $1000/$1003 slots.
fn check_amp2(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x600 {
        return false;
    }
    if ctx.u32le(0x0dc) == 0x5F4B3827
        && ctx.u32le(0x1A3) == 0x5EDE04F0
        && ctx.u32le(0x1e8) == 0x4a4a4a4a
        && ctx.u32le(0x224) == 0x0a0a0a0a
    {
        let j = if ctx.byte(2 + 0x568) == 0xad && ctx.byte(2 + 0x569) == 0x09 {
            0x68
        } else if ctx.byte(2 + 0x57e) == 0xa5 && ctx.byte(2 + 0x588) == 0xad && ctx.byte(2 + 0x589) == 0x09 {
            0x7e
        } else {
            0
        };
        if j != 0 {
            let hi = (ctx.load_addr >> 8) as u8;
            ctx.poke(2, 0x4c);
            ctx.poke(3, j);
            ctx.poke(4, hi.wrapping_add(5));
            ctx.poke(5, 0x4c);
            ctx.poke(6, 0xce);
            ctx.poke(7, hi.wrapping_add(4));
            ctx.set_identity("AMP 2.x");
            return true;
        }
    }
    false
}

/// Future Composer 3.x, with an optional extra-byte init-address prepend.
fn check_fc3x(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.u32le(0x08a) == 0x7AA200A9
        && ctx.u32le(0x0af) == 0x8DF110CA
        && ctx.u32le(0x15e) == 0x16D0FFC9
        && ctx.byte(0x104) == 0xAD
    {
        ctx.play_addr = ctx.load_addr.wrapping_add(6);
        ctx.init_addr = ctx.load_addr;
        if ctx.byte(0x10a) == 0x07 {
            ctx.init_addr = ctx.load_addr.wrapping_sub(2);
            ctx.prepend = vec![(ctx.init_addr & 0xff) as u8, (ctx.init_addr >> 8) as u8];
            ctx.poke(0, 0xa9);
            ctx.poke(1, 0x02);
        }
        let hi = (ctx.load_addr >> 8) as u8;
        ctx.poke_slice(2, &[0x4c, 0xb4, hi]);
        ctx.poke_slice(8, &[0x4c, 0x02, hi.wrapping_add(1)]);
        ctx.set_identity("FutureComposer 3.x");
        return true;
    }
    false
}

/// Deenen/JTS/TC with a small `$1000` jump-table fixup.
fn check_mon_jts(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(0x05) == 0x4c
        && ctx.byte(0x06) == 0x2c
        && ctx.u32le(0xe2) == 0x70A200A9
        && ctx.u32le(0xe9) == 0xA9FA10CA
    {
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.load_addr.wrapping_add(3);
        let hi = (ctx.load_addr >> 8) as u8;
        ctx.poke_slice(2, &[0x4c, 0x0a, hi.wrapping_add(1)]);
        ctx.set_identity("MoN/JTS");
        return true;
    }
    false
}

/// Three JMPs, second shape: a grab-bag of trackers sharing the same
/// `$1000/$1003/$1006` prologue (SidDuzzIt 2.07/0.98, Anvil, Zardax v1/v2,
/// MoN/RWE, MoN/Cyb2, Laxity v1/v4, Roland Hermans, Deenen, JO/Vibrants v1).
fn check_3jmps2(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(2) != 0x4c || ctx.byte(5) != 0x4c || ctx.byte(8) != 0x4c {
        return false;
    }
    let j0 = ctx.adjust_j(ctx.word(6));
    if !ctx.check_j(j0) {
        if ctx.byte(j0) == 0xa2
            && ctx.byte(j0 + 0x02) == 0x8e
            && ctx.byte(j0 + 0x05) == 0xbd
            && ctx.u32le(j0 + 0x30) == 0xF0F07F29
        {
            let j = ctx.adjust_j(ctx.word(3));
            if !ctx.check_j(j) {
                if ctx.byte(j) != 0xaa {
                    ctx.init_addr = ctx.load_addr.wrapping_sub(1);
                    ctx.prepend = vec![(ctx.init_addr & 0xff) as u8];
                    ctx.poke(0, (ctx.init_addr >> 8) as u8);
                    ctx.poke(1, 0xaa);
                }
                ctx.set_identity("SidDuzzIt 2.07");
                return true;
            }
        }
        if ctx.byte(j0) == 0xa9
            && ctx.byte(j0 + 0x01) == 0x01
            && ctx.byte(j0 + 0x02) == 0x8d
            && ctx.byte(j0 + 0x08) == 0x8d
            && ctx.byte(j0 + 0x0b) == 0xa9
        {
            let j = ctx.adjust_j(ctx.word(9));
            if !ctx.check_j(j) && ctx.u32le(j - 4) == 0x60EE10CA {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr.wrapping_add(6);
                ctx.set_identity("Anvil");
                return true;
            }
        }
    }
    let j = ctx.adjust_j(ctx.word(9));
    if !ctx.check_j(j) {
        if ctx.byte(j) == 0xad && ctx.u32le(j + 0x03) == 0xCE6001F0 && ctx.u32le(j + 0x0a) == 0x2002A209 {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(6);
            ctx.set_identity("Zardax v1");
            return true;
        }
        if ctx.byte(j) == 0xad
            && ctx.byte(j - 0x01) == 0x60
            && ctx.byte(j + 0x08) == 0x8d
            && ctx.byte(j + 0x0b) == 0xa5
            && ctx.u32le(j + 0x03) == 0xa56001F0
        {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(6);
            ctx.set_identity("Zardax v2");
            return true;
        }
        if ctx.byte(j) == 0xad
            && ctx.byte(j - 0x01) == 0x60
            && ctx.u32le(j + 0x03) == 0x07f002c9
            && ctx.u32le(j + 0x08) == 0x4c04d001
        {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(6);
            ctx.set_identity("MoN/RWE");
            return true;
        }
        if ctx.byte(j) == 0xa9 && ctx.byte(j + 0x02) == 0xf0 && ctx.byte(j + 0x04) == 0x60 {
            let k = ctx.adjust_j(ctx.word(3));
            if !ctx.check_j(k) {
                let shape_a = ctx.byte(k) == 0xa9 && ctx.byte(k + 0x02) == 0x8d;
                let shape_b = ctx.byte(k) == 0xa2 && ctx.byte(k + 0x02) == 0x8e;
                let expect = (i64::from(ctx.load_addr) + j - 1) as u16;
                if (shape_a || shape_b) && ctx.byte(k + 0x01) == 0x01 && ctx.word(k + 3) == expect {
                    ctx.init_addr = ctx.load_addr;
                    ctx.play_addr = ctx.load_addr.wrapping_add(6);
                    ctx.set_identity("MoN/Cyb2");
                    return true;
                }
            }
        }
        if ctx.byte(j) == 0xad
            && ctx.byte(j - 0x01) == 0x60
            && ctx.byte(j - 0x0f) == 0x8d
            && ctx.byte(j - 0x3e) == 0xa2
            && ctx.u32le(j + 0x03) == 0xa26001d0
        {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(6);
            ctx.poke(2, 0x4c);
            let i = j - 0x3e - 2 + i64::from(ctx.load_addr);
            ctx.poke(3, (i & 0xff) as u8);
            ctx.poke(4, (i >> 8) as u8);
            ctx.set_identity("Laxity v4");
            return true;
        }
        if ctx.byte(j + 0x03) == 0x8d
            && ctx.byte(j + 0x12) == 0x8d
            && ctx.u32le(j + 0x06) == 0x690a0a0a
            && ctx.u32le(j + 0x28) == 0xA9D4178D
        {
            ctx.init_addr = ctx.load_addr.wrapping_add(6);
            ctx.play_addr = ctx.load_addr;
            ctx.set_identity("Roland Hermans");
            return true;
        }
    }
    let j = ctx.adjust_j(ctx.word(3));
    if !ctx.check_j(j) {
        if ctx.byte(j) == 0xbd && ctx.byte(j + 0x03) == 0x8d && ctx.byte(j + 0x06) == 0x8d && ctx.byte(j + 0x09) == 0xbd
        {
            ctx.init_addr = ctx.load_addr.wrapping_sub(1);
            ctx.prepend = vec![(ctx.init_addr & 0xff) as u8];
            ctx.poke(0, (ctx.init_addr >> 8) as u8);
            ctx.poke(1, 0xaa);
            ctx.set_identity("SidDuzzIt 0.98");
            return true;
        }
        if ctx.u32le(j) == 0xA98A00A2 && ctx.u32le(j + 0x1b) == 0xE49003E0 {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(6);
            ctx.set_identity("Laxity v1");
            return true;
        }
        if ctx.u32le_masked(j, 0xffff00ff) == 0x013000A9
            && ctx.byte(j + 0x04) == 0x60
            && ctx.byte(j + 0x05) == 0xad
            && ctx.byte(j + 0x08) == 0xf0
        {
            ctx.init_addr = ctx.load_addr.wrapping_add(6);
            ctx.play_addr = ctx.load_addr;
            ctx.set_identity("Deenen");
            return true;
        }
    }
    let mut k = 0u8;
    let mut i = 2i64;
    while i <= 2 + 4 * 3 {
        if ctx.byte(i) == 0x4c {
            let j = ctx.adjust_j(ctx.word(i + 1));
            if ctx.check_j(j) {
                i += 3;
                continue;
            }
            if ctx.byte(j) == 0xbd && ctx.byte(j + 0x03) == 0x8d && ctx.byte(j + 0x06) == 0xbd && ctx.byte(j + 0x09) == 0x8d
            {
                k |= 1;
                ctx.init_addr = ctx.load_addr.wrapping_add((i - 2) as u16);
            } else if ctx.byte(j) == 0xa9 && ctx.byte(j + 0x02) == 0xd0 && ctx.byte(j + 0x03) == 0x01 && ctx.byte(j + 0x04) == 0x60
            {
                k |= 2;
                ctx.play_addr = ctx.load_addr.wrapping_add((i - 2) as u16);
            }
        }
        i += 3;
    }
    if k != 3 {
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.init_addr.wrapping_add(3);
        return false;
    }
    if ctx.init_addr == ctx.load_addr {
        ctx.init_addr = ctx.init_addr.wrapping_sub(1);
        ctx.prepend = vec![(ctx.init_addr & 0xff) as u8];
        ctx.poke(0, (ctx.init_addr >> 8) as u8);
        ctx.poke(1, 0xaa);
    } else {
        let extra = 4u16;
        let base = ctx.load_addr.wrapping_sub(extra);
        let init = ctx.init_addr;
        ctx.prepend = vec![(base & 0xff) as u8, (base >> 8) as u8, 0xaa, 0x4c];
        ctx.poke(0, (init & 0xff) as u8);
        ctx.poke(1, (init >> 8) as u8);
        ctx.init_addr = base;
    }
    ctx.set_identity("JO/Vibrants v1");
    true
}

/// JO/Vibrants v2: a variable IRQ-install JMP followed by a play-address
/// dispatcher a little further down.
fn check_jo_v2(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    let mut k = 0u8;
    let mut found_i = 2i64;
    let mut i = 2i64;
    while i <= 2 + 2 * 3 {
        if ctx.byte(i) == 0x4c {
            let j = ctx.adjust_j(ctx.word(i + 1));
            if ctx.check_j(j) {
                i += 3;
                continue;
            }
            if ctx.byte(j) == 0x8d && ctx.byte(j + 0x03) == 0x8d && ctx.u32le(j + 0x06) == 0xA9A80A0A {
                k |= 1;
                ctx.init_addr = ctx.load_addr.wrapping_add((i - 2) as u16);
                found_i = i;
                break;
            } else if ctx.byte(j) == 0x8d && ctx.u32le(j + 0x03) == 0xA9A80A0A {
                k |= 1;
                ctx.init_addr = ctx.load_addr.wrapping_add((i - 2) as u16);
                found_i = i;
                break;
            }
        }
        i += 3;
    }
    if k != 0 {
        for j in 0i64..0x10 {
            if ctx.byte(found_i + j + 0x03) == 0xad
                && ctx.byte(found_i + j + 0x06) == 0xc9
                && ctx.byte(found_i + j + 0x07) == 0x01
                && ctx.byte(found_i + j + 0x08) == 0xf0
                && ctx.byte(found_i + j + 0x0a) == 0xc9
            {
                k |= 2;
                ctx.play_addr = ctx.init_addr.wrapping_add(3);
                break;
            }
        }
    }
    if k != 3 {
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.init_addr.wrapping_add(3);
        return false;
    }
    ctx.set_identity("JO/Vibrants v2");
    true
}

/// Two JMPs: the largest grab-bag, covering XTracker v4.1a/b/c, NordicBeat,
/// ICC/The Voice, four generations of Burgstaller, Guy Shavitt, Audial Arts,
/// TFMX/MasterComposer, SidDuzzIt 2.1, Laxity v3, LordsOfSonics/MS and four
/// SID Factory II driver generations.
fn check_2jmps(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(2) == 0x4c && ctx.byte(5) == 0x4c {
        let j = ctx.adjust_j(ctx.word(6));
        if !ctx.check_j(j) {
            if ctx.byte(j) == 0xaa && ctx.byte(j + 0x01) == 0xbd && ctx.byte(j + 0x04) == 0x8d {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("XTracker_V4.1c/LoS");
                return true;
            }
            if ctx.byte(j) == 0xa2
                && ctx.byte(j + 0x01) == 0x00
                && ctx.byte(j + 0x02) == 0xce
                && ctx.byte(j + 0x05) == 0x30
                && ctx.byte(j + 0x06) == 0x09
                && ctx.byte(j + 0x07) == 0x20
                && ctx.byte(j + 0x0a) == 0x20
                && ctx.byte(j + 0x0d) == 0x4c
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(6);
                ctx.play_addr = ctx.load_addr.wrapping_add(3);
                ctx.poke_slice(8, &[0xaa, 0x4c, (ctx.load_addr & 0xff) as u8, (ctx.load_addr >> 8) as u8]);
                ctx.set_identity("NordicBeat");
                return true;
            }
            if ctx.u32le(j) == 0x00A918A2
                && ctx.u32le(j + 0x04) == 0xCAD4009D
                && ctx.u32le(j + 0x43) == 0x06F0F029
                && ctx.u32le(j + 0x53) == 0x06F0F029
                && ctx.u32le(j + 0xa9) == 0x4A4A4A4A
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("ICC/The Voice");
                return true;
            }
            if ctx.u32le(j - 0x01) == 0x8d00a960
                && ctx.u32le(j + 0x07) == 0xA2D4188D
                && ctx.byte(j + 0x0c) == 0x20
                && ctx.byte(j + 0x0f) == 0x20
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("Burgstaller v1");
                return true;
            }
            if ctx.u32le(j) == 0x00A917A2
                && ctx.u32le(j + 0x04) == 0xCAD4009D
                && ctx.u32le(j + 0x0f) == 0xA2D4188D
                && ctx.byte(j + 0x14) == 0x20
                && ctx.byte(j + 0x17) == 0x20
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("Burgstaller v2");
                return true;
            }
            if ctx.byte(j) == 0x8d
                && ctx.byte(j + 0x03) == 0xa2
                && ctx.byte(j + 0x04) == 0x00
                && ctx.byte(j + 0x05) == 0x20
                && ctx.byte(j + 0x08) == 0x20
                && (ctx.u32le(j + 0x10) == 0x00690A8A || ctx.u32le(j + 0x16) == 0x00690A8A)
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("Burgstaller v3");
                return true;
            }
            if ctx.byte(j) == 0x8d
                && ctx.u32le(j + 0x05) == 0xA2D4188D
                && ctx.byte(j + 0x09) == 0x00
                && ctx.byte(j + 0x0a) == 0x20
                && ctx.byte(j + 0x0d) == 0x20
                && ctx.u32le(j + 0x1b) == 0x00690A8A
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("Burgstaller v4");
                return true;
            }
        }
        let j = ctx.adjust_j(ctx.word(3));
        if !ctx.check_j(j) {
            if ctx.byte(j) == 0xa0 && ctx.byte(j + 0x01) == 0x00 && ctx.byte(j + 0x02) == 0xf0 && ctx.byte(j + 0x04) == 0x60
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("XTracker_V4.1a/LoS");
                return true;
            }
            if ctx.byte(j) == 0xce && ctx.byte(j + 0x02) == (ctx.load_addr >> 8) as u8 && ctx.byte(j + 0x03) == 0x10 {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("XTracker_V4.1b/LoS");
                return true;
            }
            if ctx.byte(j) == 0x2c
                && ctx.byte(j + 0x02) == (ctx.load_addr >> 8) as u8
                && ctx.byte(j + 0x03) == 0x30
                && ctx.u32le(j + 5) == 0xA2600170
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("LordsOfSonics/MS");
                return true;
            }
            if ctx.byte(j) == 0xa2 && ctx.byte(j + 0x01) == 0x00 && ctx.byte(0x08) == 0xad && ctx.byte(0x0b) == 0x10 {
                ctx.init_addr = ctx.load_addr;
                ctx.play_addr = ctx.load_addr.wrapping_add(6);
                ctx.set_identity("Guy Shavitt");
                return true;
            }
            if ctx.u32le(j) == 0x00A978A2
                && ctx.u32le(j + 0x07) == 0x20FA10CA
                && ctx.u32le(j + 0x21) == 0xA9F710CA
                && ctx.byte(j + 0x0d) == 0xb9
            {
                ctx.init_addr = ctx.load_addr.wrapping_sub(1);
                ctx.prepend = vec![(ctx.init_addr & 0xff) as u8];
                ctx.poke(0, (ctx.init_addr >> 8) as u8);
                ctx.poke(1, 0xa8);
                ctx.set_identity("Audial Arts");
                return true;
            }
            if ctx.u32le(j - 0x03) == 0xAD60FA10 && ctx.u32le(j + 0x03) == 0x0EAE12F0 && ctx.u32le(j + 0x0e) == 0x8EE8FA10
            {
                ctx.init_addr = ctx.load_addr.wrapping_add(3);
                ctx.play_addr = ctx.load_addr;
                ctx.set_identity("TFMX/MasterComposer");
                return true;
            }
            if ctx.byte(j) == 0xbd
                && ctx.byte(j + 0x03) == 0x8d
                && ctx.byte(j + 0x06) == 0xa9
                && ctx.byte(j + 0x08) == 0x8d
                && (ctx.byte(j + 0x18) == 0x4a || ctx.byte(j + 0x18) == 0xa9)
            {
                ctx.init_addr = ctx.load_addr.wrapping_sub(1);
                ctx.prepend = vec![(ctx.init_addr & 0xff) as u8];
                ctx.poke(0, (ctx.init_addr >> 8) as u8);
                ctx.poke(1, 0xaa);
                ctx.set_identity("SidDuzzIt 2.1");
                return true;
            }
        }
        if ctx.byte(8) == 0x2c && ctx.u32le(0xb) == 0xA9600130 {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(6);
            ctx.set_identity("Laxity v3");
            return true;
        }
        if ctx.byte(0x08) == 0xa9
            && ctx.byte(0x09) == 0x00
            && ctx.byte(0x0a) == 0x2c
            && ctx.byte(0x11) == 0xa2
            && [0x38704430u32, 0x3e704A30, 0x3a704630, 0x4A705630, 0x30703c30]
                .contains(&ctx.u32le(0x0d))
        {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(6);
            ctx.set_identity("SidFactory II v1");
            return true;
        }
        if ctx.byte(0x0b) == 0xa9
            && ctx.byte(0x0c) == 0x00
            && ctx.byte(0x0d) == 0x2c
            && ctx.byte(0x14) == 0xa2
            && [0x38704430u32, 0x46705230, 0x49705530].contains(&ctx.u32le(0x10))
        {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(9);
            ctx.set_identity("SidFactory II v2");
            return true;
        }
        if ctx.byte(0x08) == 0xa9
            && ctx.byte(0x09) == 0x00
            && ctx.byte(0x0a) == 0x24
            && [0x1c702830u32, 0x1A702630].contains(&ctx.u32le(0x0c))
        {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(6);
            ctx.set_identity("SidFactory II v3");
            return true;
        }
        if ctx.byte(0x0b) == 0xa9
            && ctx.byte(0x0c) == 0x00
            && ctx.byte(0x0d) == 0x8d
            && ctx.byte(0x10) == 0x2c
            && ctx.byte(0x17) == 0xa2
            && ctx.u32le(0x13) == 0x38704430
        {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(9);
            ctx.set_identity("SidFactory II v4");
            return true;
        }
    }
    false
}

/// Laxity v2, tried at both $1000 and $1100.
fn check_laxity_v2(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    let mut k = 0i64;
    while k <= 0x100 {
        if ctx.byte(2 + k) == 0x4c && ctx.byte(5 + k) == 0x4c && ctx.u32le(0xa + k) == 0x2CD4188D {
            ctx.init_addr = ctx.load_addr.wrapping_add(k as u16);
            ctx.play_addr = ctx.load_addr.wrapping_add(k as u16).wrapping_add(6);
            ctx.set_identity("Laxity v2");
            return true;
        }
        k += 0x100;
    }
    false
}

/// Rob Hubbard v2, six-entry jump table with a scanned speed-test tail.
fn check_hubbard_v2(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(0x02) == 0x4c
        && ctx.byte(0x05) == 0x4c
        && ctx.byte(0x08) == 0x4c
        && ctx.byte(0x0b) == 0x4c
        && ctx.byte(0x0e) == 0x4c
        && ctx.byte(0x11) == 0x4c
    {
        for j in 0x14i64..0x30 {
            if ctx.byte(j) == 0x2c && ctx.byte(3 + j) == 0x30 && ctx.byte(5 + j) == 0x50 {
                ctx.init_addr = ctx.load_addr;
                ctx.play_addr = ctx.load_addr.wrapping_add(0x12);
                ctx.set_identity("Hubbard v2");
                return true;
            }
        }
    }
    false
}

/// Rob Hubbard v1, searching for the two-JMP prologue at a variable offset.
fn check_hubbard_v1(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    for k in 0i64..=0x100 {
        if ctx.byte(0x02 + k) == 0x4c && ctx.byte(0x05 + k) == 0x4c {
            for j in (k + 8)..(k + 0x20) {
                if ctx.byte(j) == 0x60 {
                    break;
                }
                if ctx.byte(j) == 0x2c && ctx.byte(3 + j) == 0x30 && ctx.byte(5 + j) == 0x50 {
                    ctx.init_addr = ctx.load_addr.wrapping_add(k as u16);
                    ctx.play_addr = ctx.load_addr.wrapping_add(k as u16).wrapping_add(6);
                    ctx.set_identity("Hubbard v1");
                    return true;
                }
            }
        }
    }
    false
}

/// Rob Hubbard v3 (ACE II hacks), fixed $155f/$103f entry points.
fn check_hubbard_v3(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x600 {
        return false;
    }
    if ctx.byte(0x41) == 0xa9
        && ctx.byte(0x46) == 0x2c
        && ctx.byte(0x561) == 0xa9
        && ctx.byte(0x562) == 0x40
        && ctx.byte(0x566) == 0x60
        && ctx.u32le(0x49) == 0x40502A30
        && ctx.u32le(0x55) == 0x9DD40499
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(0x55f);
        ctx.play_addr = ctx.load_addr.wrapping_add(0x3f);
        ctx.set_identity("Hubbard v3");
        return true;
    }
    false
}

/// Rob Hubbard v4, scanning forward for init/play after locating the
/// jump-table prologue, then collapsing to a fresh $1000/$1003 dispatcher
/// when the prologue itself sat too far in.
fn check_hubbard_v4(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x700 {
        return false;
    }
    let mut i = -1i64;
    let mut k = 0i64;
    while k <= 0x100 {
        if ctx.byte(k) == 0xa2
            && ctx.byte(0x01 + k) == 0x02
            && ctx.byte(0x02 + k) == 0xce
            && ctx.byte(0x05 + k) == 0x10
            && ctx.byte(0x06 + k) == 0x06
            && ctx.byte(0x07 + k) == 0xad
            && ctx.byte(0x2b + k) == 0x30
            && ctx.byte(0x2d + k) == 0x4c
            && ctx.byte(0x30 + k) == 0x4c
        {
            i = k;
            break;
        }
        k += 1;
    }
    if i <= 0 {
        return false;
    }
    let j0 = ctx.adjust_j(ctx.word(k + 3));
    if ctx.check_j(j0) {
        return false;
    }
    let j = j0 - 0xf0;
    let mut play_addr = 0u16;
    while k <= 0x100 {
        if ctx.byte(j + k) == 0xad
            && ctx.byte(j + k + 0x03) == 0xd0
            && ((ctx.byte(j + k + 0x05) == 0xee && ctx.byte(j + k + 0x08) == 0xee)
                || (ctx.byte(j + k + 0x05) == 0xe6 && ctx.byte(j + k + 0x07) == 0xe6))
        {
            play_addr = (i64::from(ctx.load_addr) + j + k - 2) as u16;
            break;
        }
        k += 1;
    }
    let mut init_addr = 0u16;
    while k <= 0x100 {
        if ctx.byte(j + k) == 0xaa
            && ctx.byte(j + k + 0x01) == 0xbd
            && ctx.byte(j + k + 0x06) == 0xbd
            && ctx.byte(j + k + 0x04) == 0x85
            && ctx.byte(j + k + 0x09) == 0x85
            && ctx.byte(j + k + 0x18) == 0xa2
        {
            init_addr = (i64::from(ctx.load_addr) + j + k - 2) as u16;
            break;
        }
        k += 1;
    }
    if k == 0x101 {
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.init_addr.wrapping_add(3);
        return false;
    }
    ctx.play_addr = play_addr;
    ctx.init_addr = init_addr;
    if i >= 6 {
        ctx.poke_slice(
            2,
            &[
                0x4c,
                (ctx.init_addr & 0xff) as u8,
                (ctx.init_addr >> 8) as u8,
                0x4c,
                (ctx.play_addr & 0xff) as u8,
                (ctx.play_addr >> 8) as u8,
            ],
        );
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.init_addr.wrapping_add(3);
    }
    ctx.set_identity("Hubbard v4");
    true
}

/// Rob Hubbard v5, the likely ancestor of Future Composer's engine.
fn check_hubbard_v5(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x700 {
        return false;
    }
    let mut i = -1i64;
    let mut k = 0i64;
    while k <= 0x100 {
        if ctx.byte(k) == 0xa2
            && ctx.byte(0x01 + k) == 0x02
            && ctx.byte(0x02 + k) == 0xce
            && ctx.byte(0x05 + k) == 0x10
            && ctx.byte(0x06 + k) == 0x06
            && ctx.byte(0x07 + k) == 0xad
            && ctx.byte(0x2e + k) == 0x30
            && ctx.byte(0x30 + k) == 0x4c
            && ctx.byte(0x33 + k) == 0x4c
        {
            i = k;
            break;
        }
        k += 1;
    }
    if i <= 0 {
        return false;
    }
    let j0 = ctx.adjust_j(ctx.word(k + 3));
    if ctx.check_j(j0) {
        return false;
    }
    let j = j0 - 0xf0;
    let mut play_addr = 0u16;
    while k <= 0x100 {
        if ctx.byte(j + k) == 0xad
            && ctx.byte(j + k + 0x03) == 0xc9
            && ctx.byte(j + k + 0x07) == 0xc9
            && ctx.byte(j + k + 0x0b) == 0xee
            && ctx.byte(j + k + 0x0e) == 0xee
            && ctx.byte(j + k + 0x11) == 0xee
        {
            play_addr = (i64::from(ctx.load_addr) + j + k - 2) as u16;
            break;
        }
        k += 1;
    }
    let mut init_addr = 0u16;
    while k <= 0x100 {
        if ctx.byte(j + k) == 0x48
            && ctx.byte(j + k + 0x01) == 0xa9
            && ctx.byte(j + k + 0x02) == 0x01
            && ctx.byte(j + k + 0x03) == 0x8d
            && ctx.byte(j + k + 0x07) == 0xaa
            && ctx.byte(j + k + 0x0b) == 0x85
            && ctx.byte(j + k + 0x1f) == 0xa2
        {
            init_addr = (i64::from(ctx.load_addr) + j + k - 2) as u16;
            break;
        }
        k += 1;
    }
    if k == 0x101 {
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.init_addr.wrapping_add(3);
        return false;
    }
    ctx.play_addr = play_addr;
    ctx.init_addr = init_addr;
    if i >= 6 {
        ctx.poke_slice(
            2,
            &[
                0x4c,
                (ctx.init_addr & 0xff) as u8,
                (ctx.init_addr >> 8) as u8,
                0x4c,
                (ctx.play_addr & 0xff) as u8,
                (ctx.play_addr >> 8) as u8,
            ],
        );
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.init_addr.wrapping_add(3);
    }
    ctx.set_identity("Hubbard v5");
    true
}

/// Mike/LSD, two generations of the same five/six-JMP prologue.
fn check_mike_lsd(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(0x02) == 0x4c
        && ctx.byte(0x05) == 0x4c
        && ctx.byte(0x08) == 0x4c
        && ctx.byte(0x0b) == 0x4c
        && ctx.byte(0x0e) == 0x4c
        && ctx.u32le(0x15) == 0xA90001C9
        && ctx.u32le(0x61) == 0x07E93898
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(6);
        ctx.play_addr = ctx.load_addr.wrapping_add(3);
        ctx.set_identity("Mike/LSD v1");
        return true;
    }
    if ctx.byte(0x02) == 0x4c
        && ctx.byte(0x05) == 0x4c
        && ctx.byte(0x08) == 0xa9
        && ctx.byte(0x0b) == 0x4c
        && ctx.byte(0x11) == 0x4c
        && ctx.u32le(0x14) == 0xA96080A9
        && ctx.u32le(0xfe) == 0x07E9388A
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(6);
        ctx.play_addr = ctx.load_addr.wrapping_add(3);
        ctx.set_identity("Mike/LSD v2");
        return true;
    }
    false
}

/// Comptech 2.x/LoS $1003/$1000.
fn check_comptech(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(2) == 0x4c && ctx.byte(5) == 0x8d && ctx.byte(8) == 0x60 {
        let j = ctx.adjust_j(ctx.word(3));
        if !ctx.check_j(j) && ctx.byte(j) == 0xad && ctx.u32le(j + 0x3) == 0xF6F0FFC9 {
            ctx.init_addr = ctx.load_addr.wrapping_add(3);
            ctx.play_addr = ctx.load_addr;
            ctx.set_identity("Comptech 2.x/LoS");
            return true;
        }
    }
    false
}

/// SoundMaker v3 & 5-Dimension $1000/$1006.
fn check_sound_maker(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(2) == 0x4c && ctx.byte(5) != 0x4c && ctx.byte(8) == 0x4c {
        let j = ctx.adjust_j(ctx.word(3));
        if !ctx.check_j(j)
            && ctx.byte(j) == 0xaa
            && ctx.byte(j + 1) == 0xbd
            && ctx.byte(j + 4) == 0x8d
            && ctx.byte(j + 7) == 0x8a
        {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(6);
            ctx.set_identity("SoundMaker v3/UA");
            return true;
        }
    }
    false
}

/// Electrosound: relocates init/play to a silenced $0b00 stub.
fn check_electrosound(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0xc00 {
        return false;
    }
    if ctx.u32le(0x02) == 0x05D0B0C9 && ctx.u32le(0x06) == 0x154C30A9 && ctx.u32le(0x18a) == 0x0a0a0a0a {
        ctx.fill(0xa8a, 0, 0x278);
        ctx.poke(0xa64, 0x60);
        ctx.poke(0xa7d, 0x60);
        ctx.poke(0xa86, 0x60);
        ctx.poke_slice(0xb02, &PATCH_ELECTROSOUND);
        let hi = (ctx.load_addr >> 8) as u8;
        ctx.poke(0xb05, hi.wrapping_add(5));
        ctx.poke(0xb0d, hi.wrapping_add(0xb));
        ctx.init_addr = ctx.load_addr.wrapping_add(0xb00);
        ctx.play_addr = ctx.load_addr.wrapping_add(0xa65);
        ctx.header.cia_timing_songs.push(1);
        ctx.set_identity("Electrosound");
        return true;
    }
    false
}

/// PollyTracker, relocatable between $0800 and $080d.
fn check_polly_tracker(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x400 {
        return false;
    }
    if ctx.load_addr >= 0x0800
        && ctx.load_addr <= 0x080d
        && ctx.u32le(ctx.adjust_j(0x819)) == 0x8D02A6AD
        && ctx.u32le(ctx.adjust_j(0x81d)) == 0x38A9080C
        && ctx.u32le(ctx.adjust_j(0x89f)) == 0x4a4a4a4a
    {
        ctx.header.rsid = true;
        ctx.init_addr = 0x80d;
        ctx.play_addr = 0;
        ctx.header.free_page = Some(4);
        ctx.header.free_page_max = Some(4);
        let k = ctx.adjust_j(0x80e);
        ctx.poke_slice(k, &PATCH_POLLYTRACKER_1);
        let k = ctx.adjust_j(0x873);
        ctx.poke_slice(k, &PATCH_POLLYTRACKER_2);
        let k = ctx.adjust_j(0x8b7);
        ctx.poke(k, 0xa9);
        let k = ctx.adjust_j(0x8c8);
        ctx.fill(k, 0xea, 3);
        let k = ctx.adjust_j(0x9a4);
        ctx.fill(k, 0xea, 3);
        ctx.set_identity("PollyTracker");
        return true;
    }
    false
}

/// Polyanna, relocatable between $0800 and $080d, re-homed to $154d.
fn check_polyanna(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x1000 {
        return false;
    }
    if ctx.load_addr >= 0x0800
        && ctx.load_addr <= 0x080d
        && ctx.u32le(ctx.adjust_j(0x80d)) == 0xFFA2D878
        && ctx.u32le(ctx.adjust_j(0x81b)) == 0xD02005AD
        && ctx.u32le(ctx.adjust_j(0x100c)) == 0xA9FFFB8D
    {
        ctx.header.rsid = true;
        ctx.init_addr = 0x154d;
        ctx.play_addr = 0;
        let k = ctx.adjust_j(ctx.init_addr);
        ctx.poke_slice(k, &PATCH_POLYANNA);
        ctx.set_identity("Polyanna");
        return true;
    }
    false
}

/// Master Composer: scans for the relocatable driver, re-homes the buffer
/// to it, and prepends a 13-byte dispatcher ahead of the (now silenced) tune.
fn check_master_comp(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x400 {
        return false;
    }
    let fsiz = ctx.len() as i64;
    let mut found = None;
    for k in 0i64..fsiz - 0x300 {
        if ctx.u32le(k + 0x02) == 0x29D404AD
            && ctx.u32le(k + 0x06) == 0xD4048DFE
            && ctx.u32le(k + 0x12) == 0x29D412AD
            && ctx.u32le_masked(k + 0x16, 0xff00ffff) == 0xD4008DFE
            && ctx.word(k + 0x9c) == (k as u16).wrapping_add(ctx.load_addr)
        {
            found = Some(k);
            break;
        }
    }
    let j = match found {
        Some(j) => j,
        None => return false,
    };
    ctx.skip_front(j as usize);
    ctx.init_addr = ctx.load_addr.wrapping_sub(0x0d);
    ctx.play_addr = ctx.load_addr.wrapping_sub(0x06);
    let mut prepend = vec![(ctx.init_addr & 0xff) as u8, (ctx.init_addr >> 8) as u8];
    prepend.extend_from_slice(&PATCH_MASTERCOMPOSER);
    let stub_target = ctx.load_addr.wrapping_sub(0x05);
    prepend[5] = (stub_target & 0xff) as u8;
    prepend[6] = (stub_target >> 8) as u8;
    ctx.prepend = prepend;
    ctx.poke(0, 0x60);
    ctx.poke(1, 0x00);
    ctx.header.cia_timing_songs.push(1);
    if ctx.byte(0x18) == 0x04 {
        ctx.poke(0x18, 0x12);
    }
    ctx.fill(0x1a, 0x60, 3);
    ctx.fill(0x36, 0x60, 3);
    ctx.poke(0x85, 0xea);
    ctx.fill(0x90, 0xea, 0x0b);
    let mut k = 0x90 + 0x0b;
    ctx.poke(k, 0xa9);
    k += 1;
    ctx.poke(k, 0x00);
    k += 1;
    ctx.poke(k, 0x8d);
    k += 1;
    ctx.poke(k, (stub_target & 0xff) as u8);
    k += 1;
    ctx.poke(k, (stub_target >> 8) as u8);
    ctx.fill(0x24c, 0x60, 3);
    let mut k = 0x25a;
    ctx.poke(k, 0xea);
    k += 1;
    ctx.poke(k, 0x4c);
    k += 1;
    let cont = ctx.load_addr.wrapping_add(0x26b);
    ctx.poke(k, (cont & 0xff) as u8);
    k += 1;
    ctx.poke(k, (cont >> 8) as u8);
    ctx.poke(0x265, 0xea);
    ctx.fill(0x289, 0xea, 0x0c);
    ctx.set_identity("Master Composer");
    true
}

/// Ubik's Music: re-homes the dispatcher 0x66 bytes ahead of its trademark
/// volume-register poll and injects a nine-subtune header.
fn check_ubik(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x400 {
        return false;
    }
    let fsiz = ctx.len() as i64;
    let mut found = None;
    for k in 0x68i64..fsiz - 0x300 {
        if ctx.byte(k) == 0xad
            && ctx.u32le(k + 0x03) == 0x22D00330
            && ctx.u32le(k + 0x07) == 0x7F291860
            && ctx.u32le(k + 0x30) == 0xA8306918
        {
            found = Some(k);
            break;
        }
    }
    let j = match found {
        Some(j) => j,
        None => return false,
    };
    let base = j - 0x66;
    ctx.init_addr = (base + i64::from(ctx.load_addr) - 2) as u16;
    ctx.play_addr = ctx.init_addr.wrapping_add(3);
    ctx.fill(base, 0, 0x66);
    ctx.poke_slice(base, &PATCH_UBIKSMUSIC);
    let p1 = ctx.play_addr.wrapping_add(3);
    ctx.poke(base + 1, (p1 & 0xff) as u8);
    ctx.poke(base + 2, (p1 >> 8) as u8);
    let p2 = ctx.play_addr.wrapping_add(22);
    ctx.poke(base + 4, (p2 & 0xff) as u8);
    ctx.poke(base + 5, (p2 >> 8) as u8);
    ctx.poke(base + 10, ctx.byte(j + 1));
    ctx.poke(base + 11, ctx.byte(j + 2));
    let target = (j + i64::from(ctx.load_addr) - 2) as u16;
    ctx.poke(base + 33, (target & 0xff) as u8);
    ctx.poke(base + 34, (target >> 8) as u8);
    ctx.header.song_count = Some(9);
    ctx.set_identity("Ubik's Music");
    true
}

/// AMP 1.x: locates a speed-table probe, then walks backward up to 8 bytes
/// for the preceding RTS and forward for the following init stub.
fn check_amp1(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x600 {
        return false;
    }
    let mut matched = false;
    let mut k = 0x300i64;
    while k < 0x400 {
        if ctx.u32le(k) == 0x0BB015E0 && ctx.byte(k + 0x4) == 0xad && ctx.byte(k + 0x7) == 0x3d && ctx.byte(k + 0xa) == 0xf0
        {
            let mut play_scratch = k;
            let mut countdown = 8i64;
            while countdown > 0 && ctx.byte(play_scratch) != 0x60 {
                play_scratch -= 1;
                countdown -= 1;
            }
            if countdown > 0 {
                let mut init_found = -1i64;
                let mut kk = k;
                while kk < 0x400 {
                    if ctx.byte(kk) == 0x60 && ctx.byte(kk + 1) == 0xa9 {
                        init_found = kk + 1;
                        break;
                    }
                    kk += 1;
                }
                if init_found > 0 {
                    play_scratch += 1;
                    ctx.play_addr = (play_scratch + i64::from(ctx.load_addr) - 2) as u16;
                    ctx.init_addr = (init_found + i64::from(ctx.load_addr) - 2) as u16;
                    matched = true;
                } else {
                    ctx.play_addr = ctx.init_addr.wrapping_add(3);
                }
            }
            break;
        }
        k += 1;
    }
    if matched {
        ctx.set_identity("AMP 1.x");
    }
    matched
}

/// Boogaloo $1003/$1000.
fn check_boogaloo(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(0x2) == 0x4c && ctx.byte(0xd) == 0xd4 && ctx.u32le(0x05) == 0x9DAA0029 {
        ctx.init_addr = ctx.load_addr.wrapping_add(3);
        ctx.play_addr = ctx.load_addr;
        ctx.set_identity("Boogaloo");
        return true;
    }
    false
}

/// Bjerregaard v1: TAX + $1000, variable play address.
fn check_bjerregaard1(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(2) != 0x4c {
        return false;
    }
    let mut found = None;
    for k in 0i64..0x100 {
        if ctx.byte(k) == 0xad && ctx.u32le(k + 3) == 0xCE600110 && ctx.byte(k + 0x9) == 0x10 {
            found = Some(k);
            break;
        }
    }
    let k = match found {
        Some(k) => k,
        None => return false,
    };
    ctx.init_addr = ctx.load_addr.wrapping_sub(1);
    ctx.prepend = vec![(ctx.init_addr & 0xff) as u8];
    ctx.poke(0, (ctx.init_addr >> 8) as u8);
    ctx.poke(1, 0xaa);
    let candidate = (k + i64::from(ctx.load_addr) - 2) as u16;
    if ctx.byte(5) == 0x4c {
        if candidate != ctx.word(6) {
            ctx.play_addr = candidate;
        }
    } else {
        ctx.play_addr = candidate;
    }
    ctx.set_identity("Bjerregaard v1");
    true
}

/// Bjerregaard v2: three-JMP prologue with a fixed play-routine delta.
fn check_bjerregaard2(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    for k in 0i64..=0xff {
        if ctx.byte(k) == 0x4c
            && ctx.byte(k + 0x03) == 0x4c
            && ctx.byte(k + 0x06) == 0x4c
            && ctx.byte(k + 0x1b) == 0xa9
            && ctx.u32le(k + 0x1d) == 0xA26001D0
            && ctx.u32le(k + 0x21) == 0xA5DDC602
        {
            ctx.init_addr = (i64::from(ctx.load_addr) + k - 2) as u16;
            ctx.play_addr = ctx.init_addr.wrapping_add(6);
            ctx.set_identity("Bjerregaard v2");
            return true;
        }
    }
    false
}

/// ReflexTracker, fixed $c000-ish load window, RSID-only (no play routine).
fn check_reflex_trk(ctx: &mut ScanContext) -> bool {
    let fsiz = ctx.len() as i64;
    let load = i64::from(ctx.load_addr);
    if !(fsiz + load > 0xc500 && fsiz + load < 0xd000) {
        return false;
    }
    if ctx.u32le(ctx.adjust_j(0xc000)) == 0x4CC02C4C
        && ctx.word(ctx.adjust_j(0xc004)) == 0xC016
        && ctx.u32le(ctx.adjust_j(0xc00a)) == 0xC02C2001
    {
        ctx.init_addr = 0xc006;
        ctx.play_addr = 0;
        ctx.header.rsid = true;
        ctx.set_identity("ReflexTracker");
        return true;
    }
    false
}

/// FAME v1/v2/v3.
fn check_fame(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x300 {
        return false;
    }
    for k in 0i64..0x80 {
        if ctx.byte(k) == 0xaa
            && ctx.byte(k + 0x01) == 0xbd
            && ctx.byte(k + 0x04) == 0x8d
            && ctx.byte(k + 0x35) == 0x4c
            && ctx.byte(k + 0x38) == 0xa2
            && ctx.u32le(k + 0x07) == 0x50850A8A
            && ctx.u32le(k + 0x0b) == 0x5065180A
        {
            ctx.init_addr = (k + i64::from(ctx.load_addr) - 2) as u16;
            ctx.play_addr = (k + i64::from(ctx.load_addr) - 2 + 0x38) as u16;
            ctx.set_identity("FAME v1");
            return true;
        }
    }
    for k in 0i64..0xff {
        if ctx.u32le(k) == 0xA959A2A8 {
            let j = k;
            let mut kk = k;
            while kk < 0x200 {
                if ctx.u32le(kk) == 0x7D1898C8
                    && ctx.byte(kk + 0x0e) == 0x4c
                    && ctx.byte(kk + 0x11) == 0x4c
                    && ctx.byte(kk + 0x14) == 0xa2
                {
                    ctx.init_addr = (j + i64::from(ctx.load_addr) - 2) as u16;
                    ctx.play_addr = (kk + i64::from(ctx.load_addr) - 2 + 0x14) as u16;
                    ctx.set_identity("FAME v2");
                    return true;
                }
                kk += 1;
            }
            break;
        }
    }
    if ctx.byte(0x2) == 0x4c && ctx.byte(0x9) == 0x8d && ctx.u32le(0x05) == 0x00A959A2 {
        ctx.init_addr = ctx.load_addr.wrapping_add(3);
        ctx.play_addr = ctx.load_addr;
        ctx.set_identity("FAME v3");
        return true;
    }
    false
}

/// 20CC v1/v2.
fn check_20cc(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x300 {
        return false;
    }
    let mut found = None;
    for k in 0i64..=0xff {
        if ctx.byte(k) == 0xa9
            && ctx.byte(k + 0x02) == 0x30
            && ctx.byte(k + 0x04) == 0xf0
            && ctx.byte(k + 0x0a) == 0xb9
            && ctx.byte(k + 0x10) == 0xb9
            && ctx.byte(k + 0x0d) == 0x8d
            && ctx.byte(k + 0x13) == 0x8d
            && ctx.u32le(k + 0x06) == 0xa80a0a0a
        {
            found = Some(k);
            break;
        }
        if ctx.byte(k) == 0xa0
            && ctx.byte(k + 0x02) == 0x30
            && ctx.byte(k + 0x04) == 0xf0
            && ctx.byte(k + 0x06) == 0x88
            && ctx.byte(k + 0x07) == 0x98
            && ctx.byte(k + 0x0c) == 0xb9
            && ctx.u32le(k + 0x08) == 0xa80a0a0a
        {
            found = Some(k);
            break;
        }
        if ctx.byte(k) == 0xa0
            && ctx.byte(k + 0x02) == 0x30
            && ctx.byte(k + 0x04) == 0xf0
            && ctx.byte(k + 0x06) == 0xA2
            && ctx.byte(k + 0x07) == 0x17
            && ctx.byte(k + 0x15) == 0x8E
            && ctx.byte(k + 0x22) == 0xb9
        {
            found = Some(k);
            break;
        }
    }
    if let Some(k) = found {
        ctx.init_addr = ctx.load_addr.wrapping_sub(6);
        ctx.play_addr = (k + i64::from(ctx.load_addr) - 2) as u16;
        ctx.prepend = vec![
            (ctx.init_addr & 0xff) as u8,
            (ctx.init_addr >> 8) as u8,
            0xa9,
            0x01,
            0x8d,
            (ctx.play_addr.wrapping_add(1) & 0xff) as u8,
        ];
        ctx.poke(0, (ctx.play_addr.wrapping_add(1) >> 8) as u8);
        ctx.poke(1, 0x60);
        ctx.set_identity("20CC v1");
        return true;
    }
    if ctx.byte(2) == 0xa4 && ctx.byte(8) == 0x4c && ctx.u32le(0x04) == 0x03F00930 && ctx.u32le(0x0c) == 0xA260D418 {
        ctx.init_addr = ctx.load_addr.wrapping_sub(5);
        ctx.play_addr = ctx.load_addr;
        ctx.prepend = vec![(ctx.init_addr & 0xff) as u8, (ctx.init_addr >> 8) as u8, 0xa9, 0x01, 0x85];
        ctx.poke(0, ctx.byte(3));
        ctx.poke(1, 0x60);
        ctx.set_identity("20CC v2");
        return true;
    }
    false
}

/// Cybertracker/EXE, fixed $0800 load and $4000+ size.
fn check_ct_exe(ctx: &mut ScanContext) -> bool {
    if ctx.load_addr != 0x800 || ctx.len() <= 0x4000 {
        return false;
    }
    if ctx.u32le(0x3ee1) == 0x9AFFA278 && ctx.u32le(0x4001) == 0x4C4A7D4C && ctx.u32le(0x40dc) == 0x4a4a4a4a {
        ctx.init_addr = 0x53A2;
        ctx.play_addr = 0x53E2;
        if ctx.byte(0x4be7) == 0x20 {
            ctx.poke(0x4be7, 0x2c);
        }
        ctx.set_identity("Cybertracker/EXE");
        return true;
    }
    false
}

/// System6581, LDA#2+JSR or LDA#1+JSR variants.
fn check_system6581(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    let mut j = -1i64;
    let mut id = "";
    if ctx.u32le_masked(0x02, 0x0fffffff) == 0x092CF0AA
        && ctx.u32le(0x17) == 0xD4009DAA
        && ctx.u32le(0x22) == 0x8E01A2F5
    {
        j = 7;
        id = "System6581 v1";
    } else if ctx.u32le(0x02) == 0xC930F0A8
        && ctx.u32le(0x06) == 0x4C35D001
        && ctx.u32le_masked(0x43, 0xff1fffff) == 0xD4009DAA
        && ctx.u32le(0x4d) == 0x3898F5D0
    {
        j = 7;
        id = "System6581 v2";
    }
    if j > 0 {
        ctx.init_addr = ctx.load_addr.wrapping_sub(j as u16);
        ctx.prepend = vec![
            (ctx.init_addr & 0xff) as u8,
            (ctx.init_addr >> 8) as u8,
            0x18,
            0x69,
            0x02,
            0xd0,
            0x02,
        ];
        ctx.poke(0, 0xa9);
        ctx.poke(1, 0x01);
        ctx.set_identity(id);
        return true;
    }
    false
}

/// Matt Gray: LDA #01 STA $1000/$1002.
fn check_matt_gray(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(0x04) == 0xa2
        && ctx.byte(0x05) == 0x00
        && ctx.byte(0x06) == 0x20
        && ctx.byte(0x13) == 0x60
        && ctx.byte(0x14) == 0xad
        && ctx.byte(0x15) == (ctx.load_addr & 0xff) as u8
        && ctx.byte(0x16) == (ctx.load_addr >> 8) as u8
        && ctx.byte(0x1d) == 0xc9
        && ctx.byte(0x1e) == 0xab
    {
        ctx.init_addr = ctx.load_addr.wrapping_sub(6);
        ctx.play_addr = ctx.load_addr.wrapping_add(2);
        ctx.prepend = vec![
            (ctx.init_addr & 0xff) as u8,
            (ctx.init_addr >> 8) as u8,
            0xa9,
            0x01,
            0x8d,
            (ctx.load_addr & 0xff) as u8,
        ];
        ctx.poke(0, (ctx.load_addr >> 8) as u8);
        ctx.poke(1, 0x60);
        ctx.set_identity("Matt Gray");
        return true;
    }
    false
}

/// Power Music: LDA #subtune+1 STA $1000/$1001.
fn check_power_mus(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(0x03) == 0xad
        && ctx.byte(0x04) == 0x00
        && ctx.byte(0x05) == (ctx.load_addr >> 8) as u8
        && ctx.u32le(0x06) == 0x01103AF0
        && ctx.u32le(0x0a) == 0x01E93860
    {
        ctx.init_addr = ctx.load_addr.wrapping_sub(7);
        ctx.play_addr = ctx.load_addr.wrapping_add(1);
        ctx.prepend = vec![
            (ctx.init_addr & 0xff) as u8,
            (ctx.init_addr >> 8) as u8,
            0x18,
            0x69,
            0x01,
            0x8d,
            (ctx.load_addr & 0xff) as u8,
        ];
        ctx.poke(0, (ctx.load_addr >> 8) as u8);
        ctx.poke(1, 0x60);
        ctx.set_identity("Power Music");
        return true;
    }
    false
}

/// GRG Tiny2: variable entry points found by a combined forward scan.
fn check_grg_tiny2(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x100 {
        return false;
    }
    let fsiz = ctx.len() as i64;
    let mut flags = 0u8;
    let mut k = 0i64;
    while k < fsiz - 0x20 {
        if ctx.byte(k) == 0xa2 && ctx.byte(k + 1) == 0x0e && ctx.byte(k + 2) == 0x86 {
            ctx.play_addr = (k + i64::from(ctx.load_addr) - 2) as u16;
            flags |= 1;
        }
        if ctx.byte(k) == 0xa9 && ctx.byte(k + 1) == 0x60 {
            if (ctx.byte(k + 2) == 0x8d && ctx.byte(k + 5) == 0xa2)
                || (ctx.byte(k + 2) == 0x85 && ctx.byte(k + 4) == 0xa2)
            {
                ctx.init_addr = (k + i64::from(ctx.load_addr) - 2) as u16;
                let mut i = k - 4;
                while i > k - 0x20 {
                    if ctx.u32le_masked(i, 0xffffffac) == 0xD002A6Ac {
                        ctx.init_addr = (i + i64::from(ctx.load_addr) - 2) as u16;
                        break;
                    }
                    i -= 1;
                }
                flags |= 2;
            }
        }
        if flags == 3 {
            break;
        }
        k += 1;
    }
    if flags == 3 {
        ctx.set_identity("GRG Tiny2");
        return true;
    }
    ctx.init_addr = ctx.load_addr;
    ctx.play_addr = ctx.init_addr.wrapping_add(3);
    false
}

/// GRG Tiny4: variable entry points, two play-routine variants.
fn check_grg_tiny4(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x100 {
        return false;
    }
    let fsiz = ctx.len() as i64;
    let mut flags = 0u8;
    let mut k = 0i64;
    while k < fsiz - 0x20 {
        if ctx.byte(k) == 0xa2
            && ctx.byte(k + 1) == 0x0e
            && ctx.byte(k + 2) == 0xb5
            && ctx.byte(k + 4) == 0xf0
            && ctx.byte(k + 6) == 0xd6
            && ctx.byte(k + 8) == 0xd0
        {
            ctx.play_addr = (k + i64::from(ctx.load_addr) - 2) as u16;
            flags |= 1;
        }
        if ctx.byte(k) == 0xa2
            && ctx.byte(k + 1) == 0x0e
            && ctx.byte(k + 2) == 0xb4
            && ctx.byte(k + 4) == 0xb5
            && ctx.byte(k + 6) == 0x10
            && ctx.byte(k + 8) == 0xa5
        {
            ctx.play_addr = (k + i64::from(ctx.load_addr) - 2) as u16;
            flags |= 1;
        }
        if ctx.byte(k) == 0xa9
            && ctx.byte(k + 1) == 0x00
            && ctx.byte(k + 2) == 0xa2
            && (ctx.byte(k + 3) == 0x14 || ctx.byte(k + 3) == 0x16)
            && ctx.byte(k + 6) == 0xd4
        {
            ctx.init_addr = (k + i64::from(ctx.load_addr) - 2) as u16;
            flags |= 2;
        }
        if flags == 3 {
            break;
        }
        k += 1;
    }
    if flags == 3 {
        ctx.set_identity("GRG Tiny4");
        return true;
    }
    ctx.init_addr = ctx.load_addr;
    ctx.play_addr = ctx.init_addr.wrapping_add(3);
    false
}

/// Yip Megasound: $1000/$102e or $10xx/$10xx+$2e.
fn check_yip(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    for k in 0i64..0x4f {
        if ctx.byte(k) == 0xa9
            && ctx.byte(k + 0x01) == 0x01
            && ctx.byte(k + 0x02) == 0x8d
            && ctx.byte(k + 0x28) == 0xa9
            && ctx.byte(k + 0x2e) == 0xad
            && ctx.byte(k + 0x31) == 0xd0
            && ctx.byte(k + 0x32) == 0x20
            && ctx.byte(k + 0x33) == 0x60
        {
            ctx.init_addr = (k + i64::from(ctx.load_addr) - 2) as u16;
            ctx.play_addr = ctx.init_addr.wrapping_add(0x2e);
            ctx.set_identity("Yip Megasound");
            return true;
        }
    }
    false
}

/// TFX 1.0: fixed $1106/$1100.
fn check_tfx1(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(0x102) == 0x4c
        && ctx.byte(0x105) == 0x4c
        && ctx.byte(0x10e) == 0xa8
        && ctx.byte(0x10f) == 0xb9
        && ctx.u32le(0x108) == 0x8d0a0a0a
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(0x106);
        ctx.play_addr = ctx.load_addr.wrapping_add(0x100);
        ctx.set_identity("TFX 1.0");
        return true;
    }
    false
}

/// Griff v1: TAY + $1048/$10e0, rewires a pair of JMP stubs in place.
fn check_griff1(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.u32le(0x48 + 0x02) == 0x00A900A2
        && ctx.u32le(0x4E + 0x02) == 0x033C9DD4
        && ctx.u32le(0x92 + 0x02) == 0x6003808D
        && ctx.u32le(0xe0 + 0x02) == 0xF0039CAD
    {
        let target1 = ctx.load_addr.wrapping_add(0x47);
        let target2 = ctx.load_addr.wrapping_add(0xe0);
        ctx.poke(2, 0x4c);
        ctx.poke(3, (target1 & 0xff) as u8);
        ctx.poke(4, (target1 >> 8) as u8);
        ctx.poke(5, 0x4c);
        ctx.poke(6, (target2 & 0xff) as u8);
        ctx.poke(7, (target2 >> 8) as u8);
        ctx.poke(0x47 + 2, 0xa8);
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.load_addr.wrapping_add(3);
        ctx.set_identity("Griff");
        return true;
    }
    false
}

/// Griff v2/LightVoices: TAY + $1000/$1003.
fn check_griff2(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(2) == 0x4c
        && ctx.u32le(0x00 + 0x05) == 0xF003A8AD
        && ctx.u32le(0x04 + 0x05) == 0x50AD6001
        && ctx.u32le(0x08 + 0x05) == 0xD4188D03
        && ctx.u32le(0x0C + 0x05) == 0x8D0351AD
    {
        ctx.init_addr = ctx.load_addr.wrapping_sub(1);
        ctx.prepend = vec![(ctx.init_addr & 0xff) as u8];
        ctx.poke(0, (ctx.init_addr >> 8) as u8);
        ctx.poke(1, 0xa8);
        ctx.set_identity("Griff/LightVoices");
        return true;
    }
    false
}

/// Ariston: TAX+INX+STX $1000/$1001, two sibling byte patterns.
fn check_ariston(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    let mut found = None;
    for k in 0i64..5 {
        if ctx.byte(k + 0x03) == 0xad
            && ctx.word(k + 0x04) == ctx.load_addr.wrapping_add(k as u16)
            && ctx.byte(k + 0x06) == 0xd0
            && ctx.byte(k + 0x07) == 0x09
            && ctx.byte(k + 0x08) == 0x8d
            && ctx.byte(k + 0x0b) == 0x20
            && ctx.byte(k + 0x0e) == 0x4c
            && ctx.byte(k + 0x0d) == ctx.byte(k + 0x10)
        {
            found = Some(k);
            break;
        }
        if ctx.byte(k + 0x03) == 0xad
            && ctx.word(k + 0x04) == ctx.load_addr.wrapping_add(k as u16)
            && ctx.byte(k + 0x06) == 0xc9
            && ctx.byte(k + 0x07) == 0xff
            && ctx.byte(k + 0x08) == 0xf0
            && ctx.byte(k + 0x09) == 0x3c
            && ctx.byte(k + 0x17) == 0x20
            && ctx.byte(k + 0x1a) == 0x4c
            && ctx.byte(k + 0x1c) == ctx.byte(k + 0x19)
        {
            found = Some(k);
            break;
        }
    }
    if let Some(k) = found {
        ctx.play_addr = ctx.load_addr.wrapping_add(k as u16).wrapping_add(1);
        ctx.init_addr = ctx.load_addr.wrapping_sub(6);
        ctx.prepend = vec![
            (ctx.init_addr & 0xff) as u8,
            (ctx.init_addr >> 8) as u8,
            0xaa,
            0xe8,
            0x8e,
            ctx.byte(k + 0x04),
        ];
        ctx.poke(0, ctx.byte(k + 0x05));
        ctx.poke(1, 0x60);
        ctx.set_identity("Ariston");
        return true;
    }
    false
}

/// Winterberg: scans for a self-relocating stub, forces CIA timing and
/// silences the raster-IRQ installer.
fn check_winterberg(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    let mut found = None;
    for i in 2i64..0x30 {
        if ctx.u32le(i) == 0x9D8A00A2
            && ctx.word(0x04 + i) == ctx.load_addr & 0xff00
            && ctx.u32le(0x06 + i) == 0xD02AE0E8
            && ctx.u32le(0x37 + i) == 0x4C03F000
        {
            found = Some(i);
            break;
        }
    }
    let i = match found {
        Some(i) => i,
        None => return false,
    };
    ctx.init_addr = (i64::from(ctx.load_addr) + i - 2) as u16;
    ctx.play_addr = ctx.init_addr.wrapping_add(0x30);
    ctx.header.cia_timing_songs.push(1);
    let j = i + 0x10;
    ctx.fill(j, 0xea, 10);
    ctx.poke(j, 0xa9);
    ctx.poke(j + 1, 0x25);
    ctx.poke(j + 2, 0x8d);
    ctx.poke(j + 3, 0x04);
    ctx.poke(j + 4, 0xdc);
    ctx.poke(0x143 + i, 0x60);
    ctx.set_identity("Winterberg");
    true
}

/// Henrik Jensen: variable-offset signature, wide search window.
fn check_jensen(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x800 {
        return false;
    }
    for i in 0i64..0x10 {
        if ctx.byte(0x0e + i) == 0x4c
            && ctx.byte(0x11 + i) == 0x4c
            && ctx.byte(0x14 + i) == 0x4c
            && ctx.byte(0x17 + i) == 0xce
            && ctx.byte(0x1a + i) == 0xce
            && ctx.byte(0x20 + i) == 0xa9
            && ctx.u32le(0x5b + i) == 0x0AD00F30
        {
            ctx.init_addr = ctx.load_addr.wrapping_add(0x0f).wrapping_add(i as u16);
            ctx.play_addr = ctx.load_addr.wrapping_add(0x15).wrapping_add(i as u16);
            ctx.set_identity("Henrik Jensen");
            return true;
        }
    }
    false
}

/// MegaVision: LDA #$80 + $1000/$103e.
fn check_mega_vision(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0xb00 {
        return false;
    }
    if ctx.byte(0x0f) == 0xad
        && ctx.byte(0x10) == 0x2d
        && ctx.u32le(0x05c) == 0xD40099A8
        && ctx.u32le(0x060) == 0xD018C0C8
        && ctx.u32le(0x1e0) == 0x60E93809
    {
        ctx.poke(2, 0xa9);
        ctx.poke(3, 0x80);
        ctx.poke(4, 0x8d);
        ctx.poke(5, 0x28);
        ctx.poke(6, (ctx.load_addr >> 8) as u8);
        ctx.fill(7, 0xea, 8);
        ctx.poke(0x26, 0x60);
        ctx.poke(0x36, 0x60);
        ctx.poke(0x904, 0x60);
        ctx.header.cia_timing_songs.push(1);
        ctx.init_addr = ctx.load_addr;
        ctx.play_addr = ctx.load_addr.wrapping_add(0x3e);
        ctx.set_identity("MegaVision");
        return true;
    }
    false
}

/// SkylineTech/Danne: re-homes the stack page if it collides with the player.
fn check_skyline_tech_danne(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x600 {
        return false;
    }
    let expected = (u32::from(ctx.load_addr.wrapping_add(0x5d)) << 8) | 0xad00004c;
    if ctx.u32le(0x02) == expected
        && ctx.u32le(0x08) == 0xA903418D
        && ctx.u32le(0x4a) == 0xD4009DAA
        && ctx.u32le(0x90) == 0x0341AD03
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(3);
        ctx.play_addr = ctx.load_addr;
        let mut id = "SkylineTech/Danne".to_string();
        if fixsklstack(ctx, 2) == 0x100 {
            id.push_str(" (fixed)");
        }
        ctx.set_identity(id);
        return true;
    }
    false
}

/// Deflemask v2 through v12, plus a bank-switched v12 variant.
fn check_deflemask(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    let mut i = 2i64;
    while i <= 8 {
        if ctx.u32le(0x00c - 6 + i) == 0x02D013E6
            && ctx.u32le(0x010 - 6 + i) == 0x84AD14E6
            && ctx.u32le(0x049 - 6 + i) == 0xCAD40099
        {
            ctx.init_addr = ctx.load_addr & 0xff00;
            ctx.play_addr = ctx.init_addr.wrapping_add(3);
            let j = (((ctx.init_addr >> 8) & 0xff) + 1) as u8;
            if i == 8 {
                let mut kk = 2i64;
                ctx.poke(kk, 0x4c);
                kk += 1;
                ctx.poke(kk, 0x0f);
                kk += 1;
                ctx.poke(kk, j);
                kk += 1;
                ctx.poke(kk, 0x4c);
                kk += 1;
                ctx.poke(kk, 0x17);
                kk += 1;
                ctx.poke(kk, j);
            } else {
                ctx.prepend = vec![
                    (ctx.init_addr & 0xff) as u8,
                    (ctx.init_addr >> 8) as u8,
                    0x4c,
                    0x0f,
                    j,
                    0x4c,
                ];
                ctx.poke(0, 0x17);
                ctx.poke(1, j);
            }
            ctx.set_identity("Deflemask v2");
            return true;
        }
        i += 6;
    }
    let mut i = 2i64;
    while i <= 8 {
        if ctx.u32le_masked(0x006 - 6 + i, 0x00ffffff) == 0x00B518A2
            && ctx.u32le(0x00a - 6 + i) == 0xCAD4009D
            && ctx.u32le(0x05d - 6 + i) == 0xA500FF60
        {
            ctx.init_addr = ctx.load_addr & 0xff00;
            ctx.play_addr = ctx.init_addr.wrapping_add(6);
            let j = (((ctx.init_addr >> 8) & 0xff) + 1) as u8;
            if i == 8 {
                let mut kk = 2i64;
                ctx.poke(kk, 0x4c);
                kk += 1;
                ctx.poke(kk, 0x03);
                kk += 1;
                ctx.poke(kk, j);
                kk += 1;
                ctx.poke(kk, 0x4c);
                kk += 1;
                ctx.poke(kk, (ctx.play_addr & 0xff) as u8);
                kk += 1;
                ctx.poke(kk, (ctx.play_addr >> 8) as u8);
            } else {
                ctx.prepend = vec![
                    (ctx.init_addr & 0xff) as u8,
                    (ctx.init_addr >> 8) as u8,
                    0x4c,
                    0x03,
                    j,
                    0x4c,
                ];
                ctx.poke(0, (ctx.play_addr & 0xff) as u8);
                ctx.poke(1, (ctx.play_addr >> 8) as u8);
            }
            ctx.set_identity("Deflemask v12");
            return true;
        }
        i += 6;
    }
    if ctx.u32le_masked(0x002, 0x00ffffff) == 0x00B518A2 && ctx.u32le(0x06) == 0xCAD4009D && ctx.u32le(0x60) == 0xA500FF60
    {
        ctx.init_addr = ctx.load_addr.wrapping_add(0x106);
        ctx.play_addr = ctx.load_addr;
        ctx.set_identity("Deflemask v12/bank-switched");
        return true;
    }
    false
}

/// SidFactory: fixed init at load, play in $1006..=$1009.
fn check_sid_factory(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x200 {
        return false;
    }
    if ctx.byte(0x2) != 0x4c {
        return false;
    }
    let mut k = 6i64;
    while k <= 9 {
        if ctx.byte(k + 2 + 0x00) == 0x2c
            && ctx.byte(k + 2 + 0x03) == 0x30
            && ctx.byte(k + 2 + 0x05) == 0x70
            && ctx.byte(k + 2 + 0x07) == 0xa9
            && ctx.byte(k + 2 + 0x08) == 0x00
            && ctx.byte(k + 2 + 0x09) == 0xa2
            && ctx.byte(k + 2 + 0x0b) == 0xca
        {
            ctx.init_addr = ctx.load_addr;
            ctx.play_addr = ctx.load_addr.wrapping_add(k as u16);
            ctx.set_identity("SidFactory");
            return true;
        }
        k += 3;
    }
    false
}

/// Mssiah boot ROM: re-homes to the embedded PSID at $5c20, optionally wires
/// up a second SID and widens the free-relocation window.
fn check_mssiah(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x5000 || ctx.load_addr > 0x5c7c {
        return false;
    }
    let j = 0x5c7ci64 - i64::from(ctx.load_addr) + 2;
    if ctx.u32le(j) != 0x5A8D80A9
        || ctx.u32le(j + 0x4) != 0x5EF32071
        || ctx.u32le(j + 0x8) != 0x205F1C20
        || ctx.u32le(j + 0xc) != 0xF6A25E9B
    {
        return false;
    }
    ctx.header.rsid = true;
    ctx.init_addr = 0x5c20;
    ctx.play_addr = 0;
    ctx.skip_front(j as usize);
    ctx.poke(0x02aa, 0x60);
    ctx.poke(0x030d, 0xA2);
    ctx.fill(0x0503, 0xea, 3);
    ctx.fill(0x0509, 0xea, 3);
    ctx.poke(0x028A, 0x5B);
    ctx.poke(0x0979, 0x5B);
    ctx.poke(0x097F, 0x5B);
    ctx.poke(0x0FAF, 0x5B);
    ctx.poke(0x0FB5, 0x5B);
    ctx.poke(0x10E6, 0x5B);
    ctx.poke(0x10EF, 0x5B);
    ctx.header.free_page = Some(0x04);
    ctx.header.free_page_max = Some(0x57);
    let stereo_flag_addr = 0x150ai64;
    if ctx.byte(stereo_flag_addr) > 0 {
        ctx.poke(stereo_flag_addr, 3);
        ctx.header.version = Some(3);
        ctx.header.second_sid = Some(0x50);
        ctx.header.mirror_sid_model_to_second = true;
    }
    let mut prepend = vec![(ctx.init_addr & 0xff) as u8, (ctx.init_addr >> 8) as u8];
    prepend.extend_from_slice(&PATCH_MSSIAH_BOOT);
    ctx.prepend = prepend;
    ctx.set_identity("Mssiah");
    true
}

/// GoatTracker+MultiSpeed. Matches the original's output: `play_addr` is
/// computed from `init_addr` before any earlier check has set it, so this
/// player reports a bogus play address whenever it wins the scan first,
/// carried over rather than silently corrected.
fn check_goat_multispeed(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x500 {
        return false;
    }
    let k = 2i64;
    if ctx.byte(k) == 0xa2 && ctx.byte(k + 0x0D) == 0x4C && ctx.u32le(k + 0x02) == 0xA2DC048E && ctx.u32le(k + 0x07) == 0x4CDC058E
    {
        ctx.header.cia_timing_songs.push(1);
        ctx.play_addr = ctx.init_addr.wrapping_add(0xd);
        let divisor = u16::from(ctx.byte(k + 1)) | (u16::from(ctx.byte(k + 6)) << 8);
        let speed = if divisor == 0 { 0.0 } else { (0x4cc8 as f64) / f64::from(divisor) };
        ctx.set_identity(format!("GoatTracker+MultiSpeed: {:.1}x", speed));
        return true;
    }
    false
}

/// FlexSid, normal and bare-minimum variants.
fn check_flex_sid(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x100 {
        return false;
    }
    let fsiz = ctx.len() as i64;
    let mut k = 0i64;
    while k < fsiz - 0x20 {
        if ctx.u32le(k) == 0xC19500AB && ctx.u32le(k + 0x0C) == 0x60D4188E && ctx.u32le(k + 0x10) == 0xFF860EA2 {
            ctx.init_addr = (k + i64::from(ctx.load_addr) - 2) as u16;
            ctx.play_addr = ctx.init_addr.wrapping_add(0x10);
            ctx.set_identity("FlexSid");
            return true;
        }
        if ctx.u32le(k) == 0x00A93FA2 && ctx.u32le(k + 0x06) == 0x60FB10CA && ctx.u32le(k + 0x0a) == 0xFF860EA2 {
            ctx.init_addr = (k + i64::from(ctx.load_addr) - 2) as u16;
            ctx.play_addr = ctx.init_addr.wrapping_add(0x0a);
            ctx.set_identity("FlexSid-Bare");
            return true;
        }
        k += 1;
    }
    false
}

/// StarBars: five hand-tuned source-build variants, each silencing its own
/// border-flash IRQ code via a long run of fixed-offset fills.
fn check_star_bars(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x1000 {
        return false;
    }
    if !(0x0800..=0x080d).contains(&ctx.load_addr) {
        return false;
    }
    let base = 2i64 - i64::from(ctx.load_addr);

    if ctx.u32le(base + 0x80d) == 0x0009BB4C && ctx.u32le(base + 0x89c) == 0x4E494541 && ctx.u32le(base + 0x1000) == 0x8D1504AD
    {
        let j = ctx.byte(base + 0x9be);
        if j == 0x42 || j == 0x49 {
            ctx.header.rsid = true;
            ctx.header.sid_model_either = true;
            ctx.init_addr = 0x09bb;
            ctx.play_addr = 0;
            ctx.fill(base + 0x08B1, 0, 0x99);
            ctx.fill(base + 0x09c0, 0xea, 0x6b);
            ctx.poke(base + 0x0a5b, 0x60);
            ctx.fill(base + 0x0a5c, 0, 0x5a4);
            ctx.fill(base + 0x1300, 0, 0x100);
            let mut id = "StarBars ".to_string();
            if j == 0x42 {
                ctx.fill(base + 0x10b1, 0x60, 0x1e);
                ctx.fill(base + 0x11e1, 0xea, 0x29);
                ctx.fill(base + 0x122b, 0x60, 0x17);
                ctx.fill(base + 0x1271, 0x60, 0x12);
                ctx.fill(base + 0x129c, 0x60, 0x20);
                id.push_str("v1.1");
            } else {
                ctx.fill(base + 0x10a1, 0x60, 0x1e);
                ctx.fill(base + 0x11e8, 0xea, 0x29);
                ctx.fill(base + 0x1232, 0x60, 0x17);
                ctx.fill(base + 0x1278, 0x60, 0x12);
                ctx.fill(base + 0x12a3, 0x60, 0x20);
                id.push_str("v1.2");
            }
            ctx.set_identity(id);
            return true;
        }
    }

    if ctx.u32le(base + 0x80d) == 0x0920D878 && ctx.u32le(base + 0xb0b) == 0x4E494541 && ctx.u32le(base + 0x930) == 0x8D1504AD
    {
        if ctx.byte(base + 0x0810) == 0x09 {
            ctx.header.rsid = true;
            ctx.header.sid_model_either = true;
            ctx.init_addr = 0x080d;
            ctx.play_addr = 0;
            ctx.fill(base + 0x0812, 0xea, 0x90);
            ctx.poke(base + 0x08d8, 0x60);
            ctx.fill(base + 0x08d9, 0, 0x57);
            ctx.fill(base + 0x09d1, 0x60, 0x1e);
            ctx.fill(base + 0x0b20, 0, 0x4e0);
            ctx.fill(base + 0x10a5, 0xea, 0x29);
            ctx.fill(base + 0x10f2, 0x60, 0x17);
            ctx.fill(base + 0x1138, 0x60, 0x98);
            ctx.fill(base + 0x11e8, 0x60, 0x21);
            ctx.fill(base + 0x120a, 0, 0x1f6);
            ctx.fill(base + 0x141c, 0, 0xe4);
            ctx.set_identity("StarBars v1.3beta");
            return true;
        }
    }

    if ctx.u32le(base + 0x80d) == 0x00A9D878 && ctx.u32le(base + 0xb1d) == 0x4E494541 && ctx.u32le(base + 0x92f) == 0x8D1504AD
    {
        if ctx.byte(base + 0x0819) == 0x04 {
            ctx.header.rsid = true;
            ctx.header.sid_model_either = true;
            ctx.init_addr = 0x080d;
            ctx.play_addr = 0;
            ctx.fill(base + 0x0818, 0xea, 0x7b);
            ctx.fill(base + 0x08e6, 0x60, 0x49);
            ctx.fill(base + 0x09E3, 0x60, 0x1e);
            ctx.fill(base + 0x0b32, 0, 0x4ce);
            ctx.fill(base + 0x10b4, 0xea, 0x1c);
            ctx.fill(base + 0x10d7, 0x60, 0x3e);
            ctx.fill(base + 0x111c, 0x60, 0x10);
            ctx.fill(base + 0x113f, 0x60, 0x92);
            ctx.fill(base + 0x1204, 0x60, 0x20);
            ctx.fill(base + 0x128d, 0, 0x173);
            ctx.fill(base + 0x141c, 0, 0xe4);
            ctx.set_identity("StarBars v1.3");
            return true;
        }
    }

    if ctx.u32le(base + 0x80d) == 0x00A9D878 && ctx.u32le(base + 0xb21) == 0x4E494541 && ctx.u32le(base + 0x929) == 0x8D1504AD
    {
        if ctx.byte(base + 0x0819) == 0x04 {
            ctx.header.rsid = true;
            ctx.header.sid_model_either = true;
            ctx.init_addr = 0x080d;
            ctx.play_addr = 0;
            ctx.fill(base + 0x0818, 0xea, 0x75);
            ctx.fill(base + 0x08e0, 0x60, 0x48);
            ctx.fill(base + 0x09E7, 0x60, 0x1e);
            ctx.fill(base + 0x0b36, 0, 0x4ca);
            ctx.fill(base + 0x10b4, 0xea, 0x1c);
            ctx.fill(base + 0x10d7, 0x60, 0x3e);
            ctx.fill(base + 0x111c, 0x60, 0x10);
            ctx.fill(base + 0x113f, 0x60, 0x92);
            ctx.fill(base + 0x1204, 0x60, 0x20);
            ctx.fill(base + 0x128d, 0, 0x173);
            ctx.fill(base + 0x141c, 0, 0xe4);
            ctx.set_identity("StarBars v1.4beta");
            return true;
        }
    }

    if ctx.u32le(base + 0x80d) == 0xAA00A978 && ctx.u32le(base + 0xb20) == 0x4E494541 && ctx.u32le(base + 0x901) == 0x8D1504AD
    {
        if ctx.byte(base + 0x0818) == 0x04 {
            ctx.header.rsid = true;
            ctx.header.sid_model_either = true;
            ctx.init_addr = 0x080d;
            ctx.play_addr = 0;
            ctx.fill(base + 0x0817, 0xea, 0x4e);
            ctx.fill(base + 0x08b8, 0x60, 0x48);
            ctx.fill(base + 0x09D6, 0x60, 0x1e);
            ctx.fill(base + 0x0b35, 0, 0x4cb);
            ctx.fill(base + 0x10b4, 0xea, 0x1c);
            ctx.fill(base + 0x10d7, 0x60, 0x3e);
            ctx.fill(base + 0x111c, 0x60, 0x10);
            ctx.fill(base + 0x113f, 0x60, 0x92);
            ctx.fill(base + 0x1204, 0x60, 0x20);
            ctx.fill(base + 0x128d, 0, 0x173);
            ctx.fill(base + 0x141c, 0, 0x95);
            ctx.set_identity("StarBars v1.4");
            return true;
        }
    }

    false
}

/// Quantum SoundTracker 1.0, including the "no limit" demo track variant.
fn check_quantum_sndtrk(ctx: &mut ScanContext) -> bool {
    let min_len = (0xdd8fi64 + 0x3c + 2 - i64::from(ctx.load_addr)) as usize;
    if ctx.len() < min_len {
        return false;
    }
    if !(0x0800..=0x080d).contains(&ctx.load_addr) {
        return false;
    }
    let base = 2i64 - i64::from(ctx.load_addr);
    if ctx.u32le(base + 0x80f) != 0x8534A90D || ctx.u32le(base + 0x89b) != 0x4A4A4A8A || ctx.u32le(base + 0x9AF) != 0xEDF0DD0D
    {
        return false;
    }
    let j = ctx.byte(base + 0x80e);
    if j != 0x6a && j != 0x6c {
        return false;
    }
    ctx.header.rsid = true;
    ctx.header.free_page = Some(4);
    ctx.header.free_page_max = Some(4);
    let mut id = "Quantum SoundTracker 1.0".to_string();
    ctx.fill(base + 0x0821, 0xea, 0x03);
    ctx.fill(base + 0x082c, 0x78, 0x0c);
    ctx.fill(base + 0x08e7, 0x60, 0x56);
    ctx.fill(base + 0x0fc0, 0x60, 0x3f);
    ctx.fill(base + 0xdd6d, 0xea, 0x03);
    ctx.fill(base + 0xdd73, 0xea, 0x03);
    ctx.fill(base + 0xdd8f, 0x60, 0x3c);
    if j == 0x6c {
        id.push_str("/demo");
        ctx.fill(base + 0x0a3e, 0x60, 0x2e6);
        ctx.fill(base + 0x0d8a, 0x60, 0xb9);
    } else {
        ctx.fill(base + 0x0a3e, 0x60, 0x2e4);
        ctx.fill(base + 0x0d88, 0x60, 0xb9);
    }
    ctx.init_addr = 0x080d;
    ctx.play_addr = 0;
    ctx.set_identity(id);
    true
}

/// Whittaker v1/v2: locates the init stub first, then scans forward from it
/// for one of two play-routine tails.
fn check_whittaker(ctx: &mut ScanContext) -> bool {
    if ctx.len() < 0x800 {
        return false;
    }
    let mut i = 0i64;
    for k in 0i64..0x800 {
        if ctx.u32le(k) == 0x8D00A9AA {
            i = k;
            break;
        }
    }
    if i <= 0 {
        return false;
    }
    for j in i..0x800 {
        if ctx.u32le(j) == 0xA548F8A5
            && ctx.byte(j + 0x06) == 0xCE
            && ctx.byte(j + 0x09) == 0xD0
            && ctx.byte(j + 0x10) == 0xD0
            && ctx.byte(j + 0x12) == 0x20
        {
            ctx.init_addr = (i64::from(ctx.load_addr) + i - 2) as u16;
            ctx.play_addr = (i64::from(ctx.load_addr) + j - 2) as u16;
            ctx.set_identity("Whittaker v1");
            return true;
        }
        if ctx.u32le(j) == 0xA548F8A5
            && ctx.byte(j + 0x06) == 0x20
            && ctx.byte(j + 0x0f) == 0x60
            && ctx.byte(j + 0x15) == 0xCE
            && ctx.byte(j + 0x18) == 0xD0
            && ctx.byte(j + 0x1C) == 0x20
        {
            ctx.init_addr = (i64::from(ctx.load_addr) + i - 2) as u16;
            ctx.play_addr = (i64::from(ctx.load_addr) + j - 2) as u16;
            ctx.set_identity("Whittaker v2");
            return true;
        }
    }
    false
}

// --- CHECKS TABLE ---
// Order is load-bearing: it mirrors the original dispatch array exactly,
// not source-definition order. Several checks would shadow a more specific
// one if reordered (e.g. Chk_3JMPs2 must precede JOv2/2JMPs).
pub(super) const CHECKS: &[fn(&mut ScanContext) -> bool] = &[
    check_fc,
    check_fc_alt,
    check_musass,
    check_musmix,
    check_gmc,
    check_bappalander,
    check_trkpl3,
    check_groovy,
    check_parsec,
    check_sosperec,
    check_soede_soft,
    check_prosonix1,
    check_4jmps,
    check_heathcliff,
    check_3jmps1,
    check_arne_afl,
    check_arne_sndmk,
    check_digitalizer,
    check_soundmon,
    check_amp2,
    check_fc3x,
    check_mon_jts,
    check_3jmps2,
    check_jo_v2,
    check_2jmps,
    check_laxity_v2,
    check_hubbard_v5,
    check_hubbard_v4,
    check_hubbard_v3,
    check_hubbard_v2,
    check_hubbard_v1,
    check_mike_lsd,
    check_comptech,
    check_sound_maker,
    check_electrosound,
    check_polly_tracker,
    check_master_comp,
    check_ubik,
    check_amp1,
    check_boogaloo,
    check_bjerregaard1,
    check_bjerregaard2,
    check_reflex_trk,
    check_fame,
    check_20cc,
    check_ct_exe,
    check_system6581,
    check_matt_gray,
    check_power_mus,
    check_grg_tiny2,
    check_grg_tiny4,
    check_yip,
    check_tfx1,
    check_griff1,
    check_griff2,
    check_ariston,
    check_winterberg,
    check_jensen,
    check_mega_vision,
    check_skyline_tech_danne,
    check_deflemask,
    check_polyanna,
    check_sid_factory,
    check_mssiah,
    check_goat_multispeed,
    check_flex_sid,
    check_star_bars,
    check_whittaker,
    check_quantum_sndtrk,
];

#[cfg(test)]
mod tests {
    use super::super::scan;
    use super::ScanContext;

    fn prg_with_load(load: u16, size: usize) -> Vec<u8> {
        let mut prg = vec![0u8; size + 2];
        prg[0] = (load & 0xff) as u8;
        prg[1] = (load >> 8) as u8;
        prg
    }

    fn poke_u32le(buf: &mut [u8], offset: usize, value: u32) {
        buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    /// Scenario S3: DUSAT/RockMon3h at load $6000.
    #[test]
    fn soundmon_rockmon3h_scenario_matches_s3() {
        let load = 0x6000u16;
        let mut prg = prg_with_load(load, 0x6c00);
        let adjust = |pointer: u16| (i64::from(pointer) + 2 - i64::from(load)) as usize;
        poke_u32le(&mut prg, adjust(0xc000), 0x4cc0124c);
        poke_u32le(&mut prg, adjust(0xc020), 0xC58D01A5);
        poke_u32le(&mut prg, adjust(0xc029), 0xADCBE120);

        let mut ctx = ScanContext::new(prg);
        scan(&mut ctx);

        assert_eq!(ctx.identity, "DUSAT/RockMon3h");
        assert_eq!(ctx.init_addr, 0xce30);
        assert_eq!(ctx.play_addr, 0x0000);
        assert!(ctx.header.rsid);
        assert_eq!(ctx.header.free_page, Some(8));
        assert_eq!(ctx.header.free_page_max, Some(((load >> 8) as u8).wrapping_sub(8)));
    }

    /// GoatTracker+MultiSpeed reports a measured speed ratio and reproduces
    /// the original's suspected bug: `play_addr` is derived from whatever
    /// `init_addr` already held (the context default, `load_addr`) rather
    /// than a value this check sets itself.
    #[test]
    fn goat_multispeed_reports_speed_and_reproduces_source_bug() {
        let load = 0x1000u16;
        let mut prg = prg_with_load(load, 0x600);
        prg[2] = 0xa2;
        prg[3] = 0x64; // divisor low byte (free)
        poke_u32le(&mut prg, 4, 0xA2DC048E);
        prg[8] = 0x00; // divisor high byte (free)
        poke_u32le(&mut prg, 9, 0x4CDC058E);
        prg[15] = 0x4c;

        let mut ctx = ScanContext::new(prg);
        scan(&mut ctx);

        assert!(ctx.identity.starts_with("GoatTracker+MultiSpeed"));
        // Bug carried over literally: play_addr = initaddr + 0xD where
        // initaddr is still the context default (load_addr), never set by
        // this check.
        assert_eq!(ctx.play_addr, load.wrapping_add(0xd));
        assert_eq!(ctx.header.cia_timing_songs, vec![1]);
    }
}
