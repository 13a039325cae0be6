// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Mikael Lund

//! Shared signature tables and patch blobs used by multiple check functions.
//!
//! Future Composer 4.0 and 4.1 share a common `{offset, byte}` signature
//! (`FC_COMMON`), then diverge on a handful of extra offsets (`FC40_EXTRA`,
//! `FC41_EXTRA`) that tell the two sub-versions apart. `SKYLINE_DANNE_SIG`
//! is the analogous stack-page signature for the SkylineTech/Danne check.

include!("fc_tables.rs");

include!("patch_blobs.rs");
