//! Core utilities for the Siteglot CLI
//!
//! This crate provides the shared functionality behind the `siteglot` binary:
//!
//! - **Error handling**: structured errors with codes, context, and recovery
//!   suggestions
//! - **Key scanning**: translation-key extraction from project source trees
//! - **Process execution**: safe invocation of the project's build tooling
//! - **Filesystem relocation**: move/restore helpers for the editor workspace
//!
//! # Example
//!
//! ```rust,no_run
//! use siteglot_core::scanner::KeyScanner;
//!
//! let keys = KeyScanner::new("./src").scan().expect("scan failed");
//! for key in &keys {
//!     println!("{} (from {})", key.key, key.file.display());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod fsops;
pub mod process;
pub mod scanner;

pub use error::{Error, ErrorCode, Result, ResultExt};
