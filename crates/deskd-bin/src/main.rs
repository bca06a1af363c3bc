// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! deskd - support-ticketing backend
//!
//! Main binary entry point.

use deskd_bin::cli::Cli;
use deskd_bin::error::report_error_and_exit;
use deskd_bin::logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    init_logging(cli.effective_log_level(), cli.log_format);

    if let Err(e) = deskd_bin::commands::execute(cli).await {
        report_error_and_exit(e);
    }
}
