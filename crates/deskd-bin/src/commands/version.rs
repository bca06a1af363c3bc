// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! The `version` command.

use crate::error::BinResult;

/// Prints detailed version information.
pub fn version() -> BinResult<()> {
    println!("deskd v{}", env!("CARGO_PKG_VERSION"));
    println!("  api crate: deskd-api v{}", deskd_api::VERSION);
    Ok(())
}
