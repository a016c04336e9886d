//! # Syne Architecture
//!
//! Syne turns a short invocation like `syne todo ~/work md` into a safe note
//! location, makes sure it exists and opens it in the user's editor.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded config and the editor launcher           │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pipeline (pipeline.rs)                                     │
//! │  resolve.rs → sanitize.rs → validation.rs → NoteRequest     │
//! │  - Pure: no filesystem access                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Directory + placeholder creation, editor launch, listing │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Request Lifecycle
//!
//! 1. [`resolve`] merges the raw arguments with config defaults: the
//!    extension is split off the filename or defaulted, and a leading path
//!    alias is expanded.
//! 2. [`sanitize`] drops every character that is not alphanumeric or in the
//!    field's allowed set. Paths also lose leading separators so they stay
//!    under `pwd`.
//! 3. [`validation`] runs the declarative rule table: blacklisted words,
//!    blacklisted characters, truncation, minimum length. The first failing
//!    field aborts the run before anything touches the disk.
//! 4. [`commands::open`] creates the folder and an empty placeholder, then
//!    launches the editor.
//!
//! Errors propagate as [`error::SyneError`] all the way to `main.rs`, which
//! prints them and exits non-zero.

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod resolve;
pub mod sanitize;
pub mod validation;
