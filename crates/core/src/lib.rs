// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pu-core: Shared library for the psrup uploader
//!
//! This crate provides the pieces of the uploader that never touch the
//! network: PSRFITS metadata access, manifest parsing, remote-path
//! derivation, and ephemeris companion-file generation.

pub mod backend;
pub mod detect;
pub mod ephemeris;
pub mod epoch;
pub mod error;
pub mod fits;
pub mod manifest;
pub mod meta;
pub mod remote_path;

pub use backend::Backend;
pub use detect::InputKind;
pub use error::{Error, Result};
pub use manifest::{Entry, EntryKind};
pub use meta::Metadata;
pub use remote_path::{Category, RemoteDirs};
