// Generated from the original 6510 opcode matrix; one row per 4 opcodes.
pub const OPCODE_TABLE: [OpcodeInfo; 256] = [
    op(1, AddressingMode::Imp), op(2, AddressingMode::Izx), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x00-0x03
    op(1, AddressingMode::Imp), op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(1, AddressingMode::Imp),  // 0x04-0x07
    op(1, AddressingMode::Imp), op(2, AddressingMode::Imm), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x08-0x0B
    op(1, AddressingMode::Imp), op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(1, AddressingMode::Imp),  // 0x0C-0x0F
    op(2, AddressingMode::Rel), op(2, AddressingMode::Izy), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x10-0x13
    op(1, AddressingMode::Imp), op(2, AddressingMode::Zpx), op(2, AddressingMode::Zpx), op(1, AddressingMode::Imp),  // 0x14-0x17
    op(1, AddressingMode::Imp), op(3, AddressingMode::Aby), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x18-0x1B
    op(1, AddressingMode::Imp), op(3, AddressingMode::Abx), op(3, AddressingMode::Abx), op(1, AddressingMode::Imp),  // 0x1C-0x1F
    op(3, AddressingMode::Abs), op(2, AddressingMode::Izx), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x20-0x23
    op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(1, AddressingMode::Imp),  // 0x24-0x27
    op(1, AddressingMode::Imp), op(2, AddressingMode::Imm), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x28-0x2B
    op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(1, AddressingMode::Imp),  // 0x2C-0x2F
    op(2, AddressingMode::Rel), op(2, AddressingMode::Izy), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x30-0x33
    op(1, AddressingMode::Imp), op(2, AddressingMode::Zpx), op(2, AddressingMode::Zpx), op(1, AddressingMode::Imp),  // 0x34-0x37
    op(1, AddressingMode::Imp), op(3, AddressingMode::Aby), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x38-0x3B
    op(1, AddressingMode::Imp), op(3, AddressingMode::Abx), op(3, AddressingMode::Abx), op(1, AddressingMode::Imp),  // 0x3C-0x3F
    op(1, AddressingMode::Imp), op(2, AddressingMode::Izx), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x40-0x43
    op(1, AddressingMode::Imp), op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(1, AddressingMode::Imp),  // 0x44-0x47
    op(1, AddressingMode::Imp), op(2, AddressingMode::Imm), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x48-0x4B
    op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(1, AddressingMode::Imp),  // 0x4C-0x4F
    op(2, AddressingMode::Rel), op(2, AddressingMode::Izy), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x50-0x53
    op(1, AddressingMode::Imp), op(2, AddressingMode::Zpx), op(2, AddressingMode::Zpx), op(1, AddressingMode::Imp),  // 0x54-0x57
    op(1, AddressingMode::Imp), op(3, AddressingMode::Aby), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x58-0x5B
    op(1, AddressingMode::Imp), op(3, AddressingMode::Abx), op(3, AddressingMode::Abx), op(1, AddressingMode::Imp),  // 0x5C-0x5F
    op(1, AddressingMode::Imp), op(2, AddressingMode::Izx), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x60-0x63
    op(1, AddressingMode::Imp), op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(1, AddressingMode::Imp),  // 0x64-0x67
    op(1, AddressingMode::Imp), op(2, AddressingMode::Imm), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x68-0x6B
    op(3, AddressingMode::Ind), op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(1, AddressingMode::Imp),  // 0x6C-0x6F
    op(2, AddressingMode::Rel), op(2, AddressingMode::Izy), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x70-0x73
    op(1, AddressingMode::Imp), op(2, AddressingMode::Zpx), op(2, AddressingMode::Zpx), op(1, AddressingMode::Imp),  // 0x74-0x77
    op(1, AddressingMode::Imp), op(3, AddressingMode::Aby), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x78-0x7B
    op(1, AddressingMode::Imp), op(3, AddressingMode::Abx), op(3, AddressingMode::Abx), op(1, AddressingMode::Imp),  // 0x7C-0x7F
    op(1, AddressingMode::Imp), op(2, AddressingMode::Izx), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x80-0x83
    op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(1, AddressingMode::Imp),  // 0x84-0x87
    op(1, AddressingMode::Imp), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x88-0x8B
    op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(1, AddressingMode::Imp),  // 0x8C-0x8F
    op(2, AddressingMode::Rel), op(2, AddressingMode::Izy), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x90-0x93
    op(2, AddressingMode::Zpx), op(2, AddressingMode::Zpx), op(2, AddressingMode::Zpy), op(1, AddressingMode::Imp),  // 0x94-0x97
    op(1, AddressingMode::Imp), op(3, AddressingMode::Aby), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x98-0x9B
    op(1, AddressingMode::Imp), op(3, AddressingMode::Abx), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0x9C-0x9F
    op(2, AddressingMode::Imm), op(2, AddressingMode::Izx), op(2, AddressingMode::Imm), op(1, AddressingMode::Imp),  // 0xA0-0xA3
    op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(1, AddressingMode::Imp),  // 0xA4-0xA7
    op(1, AddressingMode::Imp), op(2, AddressingMode::Imm), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xA8-0xAB
    op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(1, AddressingMode::Imp),  // 0xAC-0xAF
    op(2, AddressingMode::Rel), op(2, AddressingMode::Izy), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xB0-0xB3
    op(2, AddressingMode::Zpx), op(2, AddressingMode::Zpx), op(2, AddressingMode::Zpy), op(1, AddressingMode::Imp),  // 0xB4-0xB7
    op(1, AddressingMode::Imp), op(3, AddressingMode::Aby), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xB8-0xBB
    op(3, AddressingMode::Abx), op(3, AddressingMode::Abx), op(3, AddressingMode::Aby), op(1, AddressingMode::Imp),  // 0xBC-0xBF
    op(2, AddressingMode::Imm), op(2, AddressingMode::Izx), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xC0-0xC3
    op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(1, AddressingMode::Imp),  // 0xC4-0xC7
    op(1, AddressingMode::Imp), op(2, AddressingMode::Imm), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xC8-0xCB
    op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(1, AddressingMode::Imp),  // 0xCC-0xCF
    op(2, AddressingMode::Rel), op(2, AddressingMode::Izy), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xD0-0xD3
    op(1, AddressingMode::Imp), op(2, AddressingMode::Zpx), op(2, AddressingMode::Zpx), op(1, AddressingMode::Imp),  // 0xD4-0xD7
    op(1, AddressingMode::Imp), op(3, AddressingMode::Aby), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xD8-0xDB
    op(1, AddressingMode::Imp), op(3, AddressingMode::Abx), op(3, AddressingMode::Abx), op(1, AddressingMode::Imp),  // 0xDC-0xDF
    op(2, AddressingMode::Imm), op(2, AddressingMode::Izx), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xE0-0xE3
    op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(2, AddressingMode::Zp), op(1, AddressingMode::Imp),  // 0xE4-0xE7
    op(1, AddressingMode::Imp), op(2, AddressingMode::Imm), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xE8-0xEB
    op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(3, AddressingMode::Abs), op(1, AddressingMode::Imp),  // 0xEC-0xEF
    op(2, AddressingMode::Rel), op(2, AddressingMode::Izy), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xF0-0xF3
    op(1, AddressingMode::Imp), op(2, AddressingMode::Zpx), op(2, AddressingMode::Zpx), op(1, AddressingMode::Imp),  // 0xF4-0xF7
    op(1, AddressingMode::Imp), op(3, AddressingMode::Aby), op(1, AddressingMode::Imp), op(1, AddressingMode::Imp),  // 0xF8-0xFB
    op(1, AddressingMode::Imp), op(3, AddressingMode::Abx), op(3, AddressingMode::Abx), op(1, AddressingMode::Imp),  // 0xFC-0xFF
];
