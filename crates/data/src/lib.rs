// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider portfolio timeline project*
//!
//! This library crate supplies the data the portfolio shows:
//!
//! - The built-in hackathon & work experience records, and records loaded
//!   from JSON files, ready to hand to a `TimelineNavigator`
//! - The project listing (a random pick of public repositories with their
//!   language breakdown, or a fixed list when that can't be fetched)
//! - The on-disk config
//!
//! This crate makes use of the `core` crate for the record types, and is
//! itself used by the `bins` crate.
//!

mod config;
mod error;
mod projects;
mod sources;

pub use config::*;
pub use error::*;
pub use projects::*;
pub use sources::*;
