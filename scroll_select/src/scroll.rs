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

//! ### Vertical scrolling and viewport
//!
//! The [`Viewport`] is the window of list indices that is painted on screen. The focus is
//! an absolute index into the list, and it always lies inside the viewport.
//!
//! ```text
//!                    +0--------------------+
//!                    0                     |
//!                    |        above        |
//!                    |                     |
//!                    +------- begin -------+
//!                    |         ↑           |      ↑
//!                    |                     |      |
//!                    |      within vp      |    limit
//!                    |                     |      |
//!                    |         ↓           |      ↓
//!                    +---- begin + limit --+
//!                    |                     |
//!                    |        below        |
//!                    |                     |
//!                    +------ items len ----+
//! ```
//!
//! What the [`CaretVerticalViewportLocation`] enum represents:
//!
//! ```text
//!    +------- begin -------+ <- AtTopOfViewport
//!    |         ↑           |
//!    |                     |
//!    |      within vp      | <- InMiddleOfViewport
//!    |                     |
//!    |         ↓           |
//!    +---- begin + limit --+ <- AtBottomOfViewport
//! ```
//!
//! When the viewport is only one row tall, the focus is on the top and bottom row at the
//! same time, which is [`CaretVerticalViewportLocation::OnlyRowOfViewport`].

use std::ops::Range;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// First visible list index.
    pub begin: usize,
    /// Number of visible rows.
    pub limit: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(begin: usize, limit: usize) -> Self { Self { begin, limit } }

    /// One past the last visible list index.
    #[must_use]
    pub fn end(&self) -> usize { self.begin + self.limit }

    #[must_use]
    pub fn row_indices(&self) -> Range<usize> { self.begin..self.end() }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool { self.row_indices().contains(&index) }

    /// Last visible list index. Same as [`Viewport::begin`] for an empty viewport.
    #[must_use]
    pub fn last_visible_index(&self) -> usize {
        self.begin + self.limit.saturating_sub(1)
    }

    /// Resize the viewport to `limit` rows (clamped to `1..=items_len`) and move it the
    /// least amount needed so that `focus` is visible and the window fits in the list.
    ///
    /// `focus` must be a valid index into a list of `items_len` items.
    #[must_use]
    pub fn fit_around(self, focus: usize, limit: usize, items_len: usize) -> Self {
        let limit = limit.clamp(1, items_len.max(1));
        let max_begin = items_len.saturating_sub(limit);
        let mut begin = self.begin.min(max_begin);
        if focus < begin {
            begin = focus;
        } else if focus >= begin + limit {
            begin = focus + 1 - limit;
        }
        Self { begin, limit }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CaretVerticalViewportLocation {
    AtTopOfViewport,
    InMiddleOfViewport,
    AtBottomOfViewport,
    /// Viewport is a single row tall.
    OnlyRowOfViewport,
    /// Focus is outside the viewport. The selector never gets into this state.
    NotFound,
}

pub fn locate_cursor_in_viewport(
    focus: usize,
    viewport: Viewport,
) -> CaretVerticalViewportLocation {
    let is_top = focus == viewport.begin;
    let is_bottom = focus == viewport.last_visible_index();

    if !viewport.contains(focus) {
        CaretVerticalViewportLocation::NotFound
    } else if is_top && is_bottom {
        CaretVerticalViewportLocation::OnlyRowOfViewport
    } else if is_top {
        CaretVerticalViewportLocation::AtTopOfViewport
    } else if is_bottom {
        CaretVerticalViewportLocation::AtBottomOfViewport
    } else {
        CaretVerticalViewportLocation::InMiddleOfViewport
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, Viewport::new(0, 3), CaretVerticalViewportLocation::AtTopOfViewport)]
    #[test_case(1, Viewport::new(0, 3), CaretVerticalViewportLocation::InMiddleOfViewport)]
    #[test_case(2, Viewport::new(0, 3), CaretVerticalViewportLocation::AtBottomOfViewport)]
    #[test_case(4, Viewport::new(4, 1), CaretVerticalViewportLocation::OnlyRowOfViewport)]
    #[test_case(3, Viewport::new(0, 3), CaretVerticalViewportLocation::NotFound)]
    #[test_case(0, Viewport::new(1, 3), CaretVerticalViewportLocation::NotFound)]
    fn test_locate_cursor_in_viewport(
        focus: usize,
        viewport: Viewport,
        expected: CaretVerticalViewportLocation,
    ) {
        assert_eq2!(locate_cursor_in_viewport(focus, viewport), expected);
    }

    #[test]
    fn test_fit_around_clamps_limit_to_list() {
        let it = Viewport::default().fit_around(0, 10, 3);
        assert_eq2!(it, Viewport::new(0, 3));
    }

    #[test]
    fn test_fit_around_never_goes_below_one_row() {
        let it = Viewport::default().fit_around(0, 0, 3);
        assert_eq2!(it, Viewport::new(0, 1));
    }

    #[test]
    fn test_fit_around_scrolls_down_to_focus() {
        let it = Viewport::new(0, 5).fit_around(7, 3, 10);
        assert_eq2!(it, Viewport::new(5, 3));
        assert!(it.contains(7));
    }

    #[test]
    fn test_fit_around_scrolls_up_to_focus() {
        let it = Viewport::new(6, 3).fit_around(2, 3, 10);
        assert_eq2!(it, Viewport::new(2, 3));
    }

    #[test]
    fn test_fit_around_keeps_begin_when_focus_visible() {
        let it = Viewport::new(3, 4).fit_around(4, 4, 10);
        assert_eq2!(it, Viewport::new(3, 4));
    }

    #[test]
    fn test_fit_around_pulls_window_back_inside_list() {
        // Grew from 2 rows to 4 rows while showing the tail of the list.
        let it = Viewport::new(8, 2).fit_around(9, 4, 10);
        assert_eq2!(it, Viewport::new(6, 4));
    }
}
