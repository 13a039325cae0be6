/// `aPatchSndmon` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_SOUNDMON_SILENCE: [u8; 11] = [
    0xa9, 0x01, 0x8d, 0x0f, 0xc0, 0xa9, 0x00, 0x8d, 0xc6, 0x02, 0x60, 
];

/// `aPatchRckmon` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_ROCKMON_SILENCE: [u8; 8] = [
    0xa9, 0x01, 0x8d, 0x0f, 0xc0, 0x4c, 0x12, 0xc0, 
];

/// `aPatchPolly1` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_POLLYTRACKER_1: [u8; 11] = [
    0xa9, 0x7f, 0x8d, 0x0d, 0xdc, 0xad, 0x0d, 0xdc, 0xa0, 0x00, 0xea, 
];

/// `aPatchPolly2` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_POLLYTRACKER_2: [u8; 22] = [
    0xa0, 0x19, 0xb9, 0x47, 0x0b, 0x99, 0xff, 0xd3, 0x88, 0xd0, 0xf7, 0xa9, 0x00, 0x8d, 0x15, 0xd0, 
    0xea, 0xea, 0xea, 0xea, 0xea, 0xea, 
];

/// `aPatchElcSnd` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_ELECTROSOUND: [u8; 22] = [
    0x48, 0x20, 0x18, 0x00, 0x68, 0xaa, 0x8e, 0xab, 0x02, 0xbd, 0x15, 0x00, 0x8d, 0xff, 0x02, 0xa9, 
    0x01, 0x8d, 0xf9, 0x02, 0x60, 0x0a, 
];

/// `aPatchUbiksM` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_UBIKSMUSIC: [u8; 39] = [
    0x4c, 0x00, 0x00, 0x4c, 0x00, 0x00, 0x18, 0x69, 0x80, 0x8d, 0x00, 0x00, 0xa2, 0x00, 0xa9, 0x00, 
    0x9d, 0x00, 0xd4, 0xe8, 0xe0, 0x20, 0xd0, 0xf6, 0x60, 0xa5, 0x01, 0x48, 0xa9, 0x36, 0x85, 0x01, 
    0x20, 0x00, 0x00, 0x68, 0x85, 0x01, 0x60, 
];

/// `aPatchMastCm` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_MASTERCOMPOSER: [u8; 11] = [
    0xa9, 0x01, 0x8d, 0x00, 0x00, 0xd0, 0x21, 0xa9, 0x00, 0xd0, 0x31, 
];

/// `aPatchPolyAn` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_POLYANNA: [u8; 41] = [
    0x78, 0xd8, 0xa2, 0xff, 0x9a, 0x20, 0x5b, 0x15, 0x20, 0x00, 0x10, 0x4c, 0x58, 0x15, 0xad, 0x05, 
    0x20, 0xd0, 0x0b, 0xa2, 0x02, 0xbd, 0x00, 0x0d, 0x95, 0x00, 0xe8, 0xd0, 0xf8, 0x60, 0xa2, 0x02, 
    0xbd, 0x00, 0x1a, 0x95, 0x00, 0xe8, 0xd0, 0xf8, 0x60, 
];

/// `aPatchMssiah` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_MSSIAH_BOOT: [u8; 92] = [
    0x78, 0xa9, 0x35, 0x85, 0x01, 0x20, 0x1c, 0x5f, 0x20, 0xf3, 0x5e, 0xa9, 0x00, 0x8d, 0x0e, 0xdc, 
    0x8d, 0x0f, 0xdc, 0x8d, 0x19, 0xd0, 0x8d, 0x1a, 0xd0, 0xa9, 0x7f, 0x8d, 0x0d, 0xdc, 0xa9, 0x81, 
    0x8d, 0x0d, 0xdc, 0xa9, 0x94, 0x8d, 0xfe, 0xff, 0xa9, 0x5f, 0x8d, 0xff, 0xff, 0xa9, 0xa4, 0x8d, 
    0xfa, 0xff, 0xa9, 0x5f, 0x8d, 0xfb, 0xff, 0xa9, 0xf6, 0x2c, 0x5a, 0x71, 0x30, 0x02, 0xa9, 0xac, 
    0x8d, 0x04, 0xdc, 0xa9, 0x07, 0x8d, 0x05, 0xdc, 0xa9, 0x11, 0x8d, 0x0e, 0xdc, 0xa9, 0x1b, 0x8d, 
    0x11, 0xd0, 0x58, 0x20, 0x95, 0x5e, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 
];

/// `aPatchArneDD` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_ARNE_DD: [u8; 7] = [
    0xa9, 0x00, 0xea, 0xc9, 0x01, 0xf0, 0x05, 
];

/// `aPatchDMC4f9` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_DMC_4F9: [u8; 7] = [
    0xc8, 0xb1, 0xf8, 0x9d, 0x26, 0x17, 0x60, 
];

/// `aPatchDblTrk` patch blob ported byte-for-byte from the original catalogue.
pub const PATCH_DOUBLETRACKER: [u8; 40] = [
    0xa9, 0x63, 0x8d, 0x04, 0xdc, 0xa9, 0x26, 0x8d, 0x05, 0xdc, 0xa9, 0x00, 0x8d, 0xeb, 0x0f, 0x4c, 
    0x48, 0x10, 0xa9, 0x00, 0x29, 0x01, 0xaa, 0xee, 0xeb, 0x0f, 0xbd, 0xfb, 0x0f, 0x8d, 0xf9, 0x0f, 
    0x4c, 0x21, 0x10, 0x21, 0x00, 0x00, 0x00, 0x00, 
];

