//! # Taskline CLI
//!
//! The binary is intentionally thin: argument parsing, dispatch and printing live in
//! `src/cli/`, while everything that touches the config file is done by the
//! `tasklineapp` library. This file only invokes `cli::run()` and turns its outcome into
//! a process exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/taskline/src/cli/)                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch to tasklineapp commands (mod.rs)                │
//! │  - Terminal output (render.rs)                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/tasklineapp/src/commands/)           │
//! │  - Returns structured `CmdResult` values                    │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Diagnostics go through `tracing` to stderr; set `RUST_LOG` or pass `--verbose`.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
