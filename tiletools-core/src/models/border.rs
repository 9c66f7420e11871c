//! Screen edges touched by a container.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of screen edges, stored as a bitmask.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Border(u8);

impl Border {
    pub const NO: Border = Border(0b0000);
    pub const LEFT: Border = Border(0b0001);
    pub const RIGHT: Border = Border(0b0010);
    pub const TOP: Border = Border(0b0100);
    pub const BOTTOM: Border = Border(0b1000);
    /// Every edge: the container fills the whole screen.
    pub const UNIQUE: Border = Border(0b1111);

    /// `true` if any edge of `edge` is part of this border.
    #[must_use]
    pub const fn is_on(self, edge: Border) -> bool {
        self.0 & edge.0 != 0
    }

    #[must_use]
    pub const fn is_no(self) -> bool {
        self.0 == 0
    }

    /// `edge` when `condition` holds, [`Border::NO`] otherwise.
    #[must_use]
    pub const fn when(edge: Border, condition: bool) -> Border {
        if condition {
            edge
        } else {
            Border::NO
        }
    }

    fn describe(self) -> &'static str {
        let horizontal_centered = self.is_on(Border::LEFT) && self.is_on(Border::RIGHT);
        let vertical_centered = self.is_on(Border::TOP) && self.is_on(Border::BOTTOM);
        match (horizontal_centered, vertical_centered) {
            (true, true) => return "unique",
            (true, false) if self.is_on(Border::TOP) => return "top",
            (true, false) if self.is_on(Border::BOTTOM) => return "bottom",
            (true, false) => return "h-centered",
            (false, true) if self.is_on(Border::LEFT) => return "left",
            (false, true) if self.is_on(Border::RIGHT) => return "right",
            (false, true) => return "v-centered",
            (false, false) => {}
        }
        match (
            self.is_on(Border::TOP),
            self.is_on(Border::BOTTOM),
            self.is_on(Border::LEFT),
            self.is_on(Border::RIGHT),
        ) {
            (true, _, true, _) => "top-left",
            (true, _, _, true) => "top-right",
            (_, true, true, _) => "bottom-left",
            (_, true, _, true) => "bottom-right",
            (true, ..) => "top",
            (_, true, ..) => "bottom",
            (_, _, true, _) => "left",
            (_, _, _, true) => "right",
            _ => "no",
        }
    }
}

impl BitOr for Border {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Border(self.0 | rhs.0)
    }
}

impl BitOrAssign for Border {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
