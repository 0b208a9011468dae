// SPDX-License-Identifier: MIT

//!
//! Which side of the timeline line a card is drawn on
//!

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

/// Cards alternate, starting on the left (`index` is zero-based within the
/// records being shown)
pub fn side_for(index: usize) -> Side {
    if index % 2 == 0 { Side::Left } else { Side::Right }
}
