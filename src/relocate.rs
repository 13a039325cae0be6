// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mikael Lund

//! Driver-code relocator: walks a 6502 code region linearly and rewrites
//! absolute and zero-page operands so the code still runs after being moved
//! to a new load address with a new zero-page base.

use crate::memory::C64Memory;
use crate::opcodes::{self, AddressingMode};

/// The I/O/ROM window that must never be relocated.
const ROM_IO_START: u16 = 0xD000;
const ROM_IO_END: u16 = 0xDFFF;

/// Driver code region and relocation target.
#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    /// Start address of the driver code region.
    pub driver_top: u16,
    /// Size of the driver code region in bytes.
    pub driver_size: u16,
    /// Zero-page base the driver currently assumes.
    pub current_zp_base: u8,
    /// Zero-page base to rebase onto.
    pub target_zp_base: u8,
    /// Address to move the driver (and its trailing data) to.
    pub target_load_addr: u16,
}

/// Errors the relocator can report.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RelocateError {
    /// The opcode matrix disagreed with the addressing mode's expected size.
    #[error("opcode at ${address:04X} (0x{opcode:02X}) has size {actual}, expected {expected} for its addressing mode")]
    MalformedInstruction {
        /// Address of the offending instruction.
        address: u16,
        /// The opcode byte.
        opcode: u8,
        /// Size the opcode matrix reported.
        actual: u8,
        /// Size required by the addressing mode.
        expected: u8,
    },
}

/// Counts of the two kinds of relocation performed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RelocationStats {
    /// Number of absolute operands rewritten.
    pub absolute: u32,
    /// Number of zero-page operands rewritten.
    pub zero_page: u32,
}

/// `target_load_addr - driver_top`, the delta applied to absolute operands.
pub const fn address_delta(config: &DriverConfig) -> u16 {
    config.target_load_addr.wrapping_sub(config.driver_top)
}

/// Applies relocation to `[config.driver_top, config.driver_top + config.driver_size)`,
/// in place, returning stats on what was rewritten.
///
/// Per-instruction behaviour:
/// - ABS/ABX/ABY/IND operands in `[0xD000, 0xDFFF]` are left untouched (SID/I-O/ROM).
/// - Other ABS/ABX/ABY/IND operands are shifted by [`address_delta`], wrapping mod 0x10000.
/// - ZP/ZPX/ZPY/IZX/IZY operands are rebased: `target_zp_base + (operand - current_zp_base)`,
///   wrapping mod 256.
///
/// The walk is strictly linear: it does not follow branches and cannot tell
/// code from data embedded in the code region. Driver images must keep
/// data tables outside `[driver_top, driver_top + driver_size)`.
pub fn relocate_driver_code(
    memory: &mut C64Memory,
    config: &DriverConfig,
) -> Result<RelocationStats, RelocateError> {
    let driver_bottom = config.driver_top + config.driver_size;
    let delta = address_delta(config);
    let mut stats = RelocationStats::default();

    let mut address = config.driver_top;
    while address < driver_bottom {
        let opcode = memory.get_byte(address);
        let info = opcodes::lookup(opcode);

        if opcodes::requires_relocation(info.mode) {
            if info.size != 3 {
                return Err(RelocateError::MalformedInstruction {
                    address,
                    opcode,
                    actual: info.size,
                    expected: 3,
                });
            }
            let operand = memory.get_word(address + 1);
            let relocated = if (ROM_IO_START..=ROM_IO_END).contains(&operand) {
                operand
            } else {
                operand.wrapping_add(delta)
            };
            if relocated != operand {
                memory.set_word(address + 1, relocated);
                stats.absolute += 1;
            }
        } else if opcodes::requires_zp_adjustment(info.mode) {
            if info.size != 2 {
                return Err(RelocateError::MalformedInstruction {
                    address,
                    opcode,
                    actual: info.size,
                    expected: 2,
                });
            }
            let zp = memory.get_byte(address + 1);
            let offset = zp.wrapping_sub(config.current_zp_base);
            let rebased = config.target_zp_base.wrapping_add(offset);
            memory.set_byte(address + 1, rebased);
            stats.zero_page += 1;
        }

        address = address.wrapping_add(u16::from(info.size));
        if info.size == 0 {
            break;
        }
    }

    Ok(stats)
}

/// Scans forward from `driver_code_top + driver_code_size` up to (but not
/// including) address `0x3000`, extending the data region to include every
/// trailing nonzero byte. Mirrors the original packer's "safety" scan for
/// data tables that follow the driver code.
pub fn find_data_end(memory: &C64Memory, driver_top: u16, driver_size: u16) -> u16 {
    let mut data_end = driver_top + driver_size;
    let mut addr = data_end;
    while addr < 0x3000 {
        if memory.get_byte(addr) != 0 {
            data_end = addr + 1;
        }
        addr += 1;
    }
    data_end
}

/// Moves `[driver_top, data_end)` to `[target_load_addr, target_load_addr + size)`
/// and zeroes the vacated source range, unless the destination equals the source.
pub fn move_region(memory: &mut C64Memory, driver_top: u16, data_end: u16, target_load_addr: u16) {
    if target_load_addr == driver_top {
        return;
    }
    let size = (data_end - driver_top) as usize;
    let mut buf = vec![0u8; size];
    for (i, b) in buf.iter_mut().enumerate() {
        *b = memory.get_byte(driver_top + i as u16);
    }
    for addr in driver_top..data_end {
        memory.set_byte(addr, 0);
    }
    for (i, b) in buf.drain(..).enumerate() {
        memory.set_byte(target_load_addr + i as u16, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_config() -> DriverConfig {
        DriverConfig {
            driver_top: 0x0D7E,
            driver_size: 0x0800,
            current_zp_base: 0x02,
            target_zp_base: 0x02,
            target_load_addr: 0x1000,
        }
    }

    #[test]
    fn relocates_absolute_operand_by_delta() {
        let config = standard_config();
        let mut mem = C64Memory::new();
        mem.set_byte(config.driver_top, 0xAD); // LDA abs
        mem.set_word(config.driver_top + 1, 0x0E00);
        let stats = relocate_driver_code(&mut mem, &config).unwrap();
        assert_eq!(stats.absolute, 1);
        assert_eq!(mem.get_word(config.driver_top + 1), 0x1082);
    }

    #[test]
    fn preserves_rom_io_window() {
        let config = standard_config();
        let mut mem = C64Memory::new();
        mem.set_byte(config.driver_top, 0xAD); // LDA abs
        mem.set_word(config.driver_top + 1, 0xD418);
        let stats = relocate_driver_code(&mut mem, &config).unwrap();
        assert_eq!(stats.absolute, 0);
        assert_eq!(mem.get_word(config.driver_top + 1), 0xD418);
    }

    #[test]
    fn rebases_zero_page_operand() {
        let mut config = standard_config();
        config.target_zp_base = 0x40;
        let mut mem = C64Memory::new();
        mem.set_byte(config.driver_top, 0xA5); // LDA zp
        mem.set_byte(config.driver_top + 1, 0x05);
        let stats = relocate_driver_code(&mut mem, &config).unwrap();
        assert_eq!(stats.zero_page, 1);
        assert_eq!(mem.get_byte(config.driver_top + 1), 0x43);
    }

    #[test]
    fn walk_terminates_exactly_at_driver_bottom() {
        let mut config = standard_config();
        config.driver_size = 3;
        let mut mem = C64Memory::new();
        mem.set_byte(config.driver_top, 0xEA); // NOP
        mem.set_byte(config.driver_top + 1, 0xEA);
        mem.set_byte(config.driver_top + 2, 0xEA);
        // Three single-byte NOPs exactly fill the 3-byte region.
        let result = relocate_driver_code(&mut mem, &config);
        assert!(result.is_ok());
    }

    #[test]
    fn move_region_relocates_bytes_and_clears_source() {
        let mut mem = C64Memory::new();
        mem.set_byte(0x0D7E, 0x11);
        mem.set_byte(0x0D7F, 0x22);
        move_region(&mut mem, 0x0D7E, 0x0D80, 0x1000);
        assert_eq!(mem.get_byte(0x1000), 0x11);
        assert_eq!(mem.get_byte(0x1001), 0x22);
        assert_eq!(mem.get_byte(0x0D7E), 0);
        assert_eq!(mem.get_byte(0x0D7F), 0);
    }
}
