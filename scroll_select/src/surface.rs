/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use crate::RowText;

/// Screen coordinate, 0 based.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: u16,
    pub row: u16,
}

impl Position {
    #[must_use]
    pub fn new(col: u16, row: u16) -> Self { Self { col, row } }

    /// Same column, `row_offset` rows further down. Saturates at the last row a `u16`
    /// can address.
    #[must_use]
    pub fn down(self, row_offset: usize) -> Self {
        let row_offset = u16::try_from(row_offset).unwrap_or(u16::MAX);
        Self {
            col: self.col,
            row: self.row.saturating_add(row_offset),
        }
    }
}

/// Where a selector paints its rows. Rows are relative to the selector's anchor.
pub trait RenderSurface {
    /// Paint one row. Calling this again with the same arguments paints the same thing.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device can't be written to.
    fn paint(&mut self, row_offset: usize, text: &RowText, focused: bool)
    -> miette::Result<()>;

    /// Called once at the end of every render pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device can't be flushed.
    fn flush(&mut self) -> miette::Result<()> { Ok(()) }
}

pub trait ScreenGeometry {
    /// How many rows exist from `anchor_row` (inclusive) to the bottom of the screen.
    fn remaining_rows(&self, anchor_row: u16) -> usize;
}
