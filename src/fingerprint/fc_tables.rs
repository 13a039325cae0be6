/// `af4` signature table ported from the original check-function offset/byte catalogue.
pub const FC_COMMON: [(u16, u8); 194] = [
    (0x006, 0xad), (0x015, 0xee), (0x018, 0xee), (0x01b, 0xee), (0x025, 0xce), (0x02d, 0x8d), 
    (0x035, 0x8d), (0x039, 0xad), (0x04b, 0xde), (0x056, 0xbc), (0x065, 0x9d), (0x068, 0x9d), 
    (0x06b, 0x9d), (0x06e, 0x8d), (0x077, 0x8d), (0x07e, 0xad), (0x083, 0x9d), (0x086, 0xfe), 
    (0x08c, 0xad), (0x093, 0xad), (0x098, 0x9d), (0x09b, 0xfe), (0x0a1, 0xad), (0x0b2, 0x9d), 
    (0x0b5, 0xbc), (0x0b8, 0x9d), (0x0bd, 0x9d), (0x0cc, 0x9d), (0x0cf, 0xfe), (0x0dc, 0x9d), 
    (0x0ee, 0x9d), (0x0f6, 0x8d), (0x0f9, 0xfe), (0x102, 0x8d), (0x10b, 0xfe), (0x11f, 0x9d), 
    (0x131, 0x9d), (0x13a, 0xbd), (0x13d, 0x9d), (0x143, 0x7d), (0x146, 0x9d), (0x151, 0xac), 
    (0x157, 0x9d), (0x15a, 0x9d), (0x161, 0x9d), (0x164, 0xbd), (0x169, 0xbd), (0x170, 0x8e), 
    (0x18c, 0x9d), (0x18f, 0x9d), (0x197, 0x9d), (0x19b, 0x9d), (0x1a3, 0x9d), (0x1a8, 0x9d), 
    (0x1ac, 0x9d), (0x1af, 0xfe), (0x1b2, 0xbc), (0x1bd, 0x9d), (0x1c0, 0xbd), (0x1c5, 0xde), 
    (0x1ca, 0xfe), (0x1d0, 0xfe), (0x1dd, 0xac), (0x1e0, 0xbd), (0x1e5, 0xbd), (0x1ea, 0x9d), 
    (0x1ed, 0xbd), (0x1f7, 0x8d), (0x1fd, 0x8d), (0x203, 0x8d), (0x20a, 0xad), (0x211, 0xad), 
    (0x21f, 0x9d), (0x225, 0x8d), (0x228, 0xbd), (0x22d, 0xde), (0x232, 0xfe), (0x237, 0xfe), 
    (0x23a, 0xbd), (0x23d, 0xdd), (0x242, 0x9d), (0x245, 0xde), (0x248, 0xde), (0x24b, 0xbd), 
    (0x256, 0x8d), (0x25f, 0x7d), (0x263, 0xce), (0x269, 0x6e), (0x26f, 0x8d), (0x275, 0x8d), 
    (0x27b, 0x8d), (0x27e, 0xbd), (0x287, 0xad), (0x28a, 0xed), (0x28d, 0x8d), (0x290, 0xad), 
    (0x293, 0xed), (0x296, 0x8d), (0x29c, 0xbd), (0x2a3, 0xbc), (0x2aa, 0xad), (0x2ad, 0x6d), 
    (0x2b0, 0x8d), (0x2b3, 0xad), (0x2b6, 0x6d), (0x2b9, 0x8d), (0x2bf, 0xac), (0x2c2, 0xad), 
    (0x2c8, 0xad), (0x2d0, 0xac), (0x2d3, 0xbd), (0x2d7, 0xfd), (0x2de, 0xbd), (0x2e9, 0xad), 
    (0x2ed, 0xbd), (0x2f0, 0xed), (0x2f3, 0x9d), (0x2f9, 0xbd), (0x2fc, 0xed), (0x2ff, 0x9d), 
    (0x308, 0xad), (0x30c, 0xbd), (0x30f, 0x6d), (0x312, 0x9d), (0x318, 0xbd), (0x31b, 0x6d), 
    (0x31e, 0x9d), (0x324, 0xad), (0x334, 0xdd), (0x341, 0xdd), (0x34a, 0x8d), (0x350, 0xad), 
    (0x355, 0x8d), (0x358, 0xbd), (0x35d, 0xbd), (0x361, 0xed), (0x364, 0x9d), (0x367, 0xbd), 
    (0x36c, 0x9d), (0x375, 0x9d), (0x37a, 0xbd), (0x37e, 0x6d), (0x381, 0x9d), (0x384, 0xbd), 
    (0x389, 0x9d), (0x392, 0x9d), (0x39a, 0xbd), (0x3a1, 0xbd), (0x3af, 0xac), (0x3b2, 0xbd), 
    (0x3bb, 0xbd), (0x3c3, 0xad), (0x3cc, 0xbd), (0x3db, 0x9d), (0x3de, 0x8c), (0x3e1, 0xad), 
    (0x3ea, 0x8e), (0x3f7, 0xbd), (0x41d, 0x8d), (0x420, 0xae), (0x424, 0x2d), (0x42b, 0x6d), 
    (0x444, 0xbd), (0x44f, 0xcd), (0x458, 0x9d), (0x45e, 0xac), (0x461, 0xad), (0x468, 0xad), 
    (0x488, 0xbd), (0x496, 0x99), (0x49c, 0x8d), (0x49f, 0xad), (0x4a8, 0xbd), (0x4ac, 0x6d), 
    (0x4b2, 0xac), (0x4b5, 0xad), (0x4c6, 0xad), (0x4cf, 0xac), (0x4d2, 0xbd), (0x4e7, 0x9d), 
    (0x4ed, 0xbd), (0x4f3, 0xbd), (0x4f9, 0xbd), (0x4fe, 0x9d), (0x501, 0xad), (0x508, 0xde), 
    (0x50f, 0x9d), (0x514, 0xbd), (0x51f, 0xbd), (0x526, 0xac), (0x537, 0xac), (0x53a, 0xbd), 
    (0x547, 0xad), (0x557, 0xad), 
];

/// `af40` signature table ported from the original check-function offset/byte catalogue.
pub const FC40_EXTRA: [(u16, u8); 11] = [
    (0x5a7, 0x8d), (0x704, 0x9d), (0x70c, 0x8d), (0x711, 0x8d), (0x714, 0x8d), (0x717, 0x8d), 
    (0x71c, 0x9d), (0x71f, 0x9d), (0x722, 0x9d), (0x725, 0x9d), (0x72b, 0x8d), 
];

/// `af41` signature table ported from the original check-function offset/byte catalogue.
pub const FC41_EXTRA: [(u16, u8); 11] = [
    (0x569, 0x9d), (0x571, 0x8d), (0x576, 0x8d), (0x579, 0x8d), (0x57c, 0x8d), (0x581, 0x9d), 
    (0x584, 0x9d), (0x587, 0x9d), (0x58a, 0x9d), (0x590, 0x8d), (0x5a7, 0x8d), 
];

/// `sld0` signature table; used only by the SkylineTech/Danne stack-page
/// check (`fixsklstack` in the original), not by the Soedesoft checks.
pub const SKYLINE_DANNE_SIG: [(u16, u8); 27] = [
    (0x0034, 0x9d), (0x0037, 0x9d), (0x003a, 0x9d), (0x003d, 0x9d), (0x0040, 0x9d), (0x00a3, 0x8d), 
    (0x00b8, 0x8d), (0x00cd, 0x8d), (0x017c, 0xad), (0x0182, 0xad), (0x0188, 0xad), (0x03d3, 0x9d), 
    (0x03da, 0x7d), (0x03dd, 0x9d), (0x03e7, 0x9d), (0x03ea, 0xbd), (0x03ee, 0x7d), (0x03f1, 0x9d), 
    (0x0418, 0x9d), (0x0420, 0x9d), (0x0436, 0xb9), (0x043d, 0xbe), (0x0456, 0x99), (0x045a, 0xb9), 
    (0x045d, 0xd9), (0x0465, 0x79), (0x0472, 0xf9), 
];

