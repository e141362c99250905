//! # Taskline Core
//!
//! `tasklineapp` is the UI-agnostic core of the taskline task tracker. It owns two things:
//!
//! - **Configuration**: a single JSON document at `~/.taskline.json`, created from
//!   compiled-in defaults on first use, merged over those defaults on every read and
//!   addressable field by field with dotted key paths (`theme.colors.error`).
//! - **The storage contract**: the [`storage::TaskStorage`] trait every task backend
//!   implements, so the rest of the application reads and writes task records without
//!   knowing which backend is active.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/taskline)                                │
//! │  - Parses arguments, prints output, owns exit codes         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/)                                  │
//! │  - Turns user actions into store calls                      │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Config Layer (config/)                                     │
//! │  - ConfigStore: ensure, load, cache, merge, persist         │
//! │  - DottedPath: typed nested get/set over JSON values        │
//! └─────────────────────────────────────────────────────────────┘
//!
//!  Storage Layer (storage/): TaskStorage trait, selected by name
//!  through `ConfigDocument::active_storage_module`.
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process. Every failure is
//! returned as a [`error::TasklineError`] to the immediate caller; there is no retry and
//! no silent fallback to defaults when the config file is corrupt.
//!
//! ## Module Overview
//!
//! - [`config`]: document types, defaults, the [`config::ConfigStore`] and dotted paths
//! - [`storage`]: the backend contract and an in-memory reference backend
//! - [`commands`]: config command handlers used by the CLI
//! - [`home`]: home directory discovery and `~` expansion
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod error;
pub mod home;
pub mod storage;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
