// SPDX-License-Identifier: MIT

//!
//! *Part of the wider portfolio timeline project*
//!
//! This crate defines the timeline model behind the hackathon & work
//! experience sections of the portfolio: records are grouped by the year at
//! the end of their free-text date, years are listed most recent first, one
//! year is shown at a time, at most one record is expanded, and cards
//! alternate left & right.
//!
//! Nothing here draws anything.  A front end (the CLI in `bins`, or any other
//! renderer) holds a [`TimelineNavigator`], forwards clicks to
//! [`TimelineNavigator::select_year`] & [`TimelineNavigator::toggle_record`],
//! and draws from [`TimelineNavigator::snapshot`].
//!
//! As with the rest of the project, if a type is instantiated the developer
//! can be sure it's valid.
//!

mod date;
mod expansion;
mod flat;
mod group;
mod id;
mod navigator;
mod record;
mod records;
mod side;
mod title;

pub use date::*;
pub use expansion::*;
pub use flat::*;
pub use group::*;
pub use id::*;
pub use navigator::*;
pub use record::*;
pub use records::*;
pub use side::*;
pub use title::*;
