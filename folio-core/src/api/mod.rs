// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Public API Module
//!
//! The [`Folio`] facade plus its configuration and unified error type.

mod config;
mod error;
mod folio;

pub use config::FolioConfig;
pub use error::{FolioError, FolioResult};
pub use folio::{Folio, StateResolution};
