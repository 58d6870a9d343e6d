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

use crate::{locate_cursor_in_viewport, CaretVerticalViewportLocation, KeyCommand, Viewport};

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Lifecycle {
    /// Before the first run.
    #[default]
    Idle,
    /// Inside the interaction loop.
    Active,
    /// The user confirmed. Stays here until the next run.
    Done,
}

/// What a single [`KeyCommand`] did to the [`SelectorState`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CommandOutcome {
    /// Focus moved inside the viewport.
    Moved,
    /// Focus moved and the viewport scrolled by one row.
    Scrolled,
    /// Navigation at the edge of the list. Nothing changed.
    NoOp,
    /// Not a navigation command, or the selector is not active.
    Ignored,
    Confirmed,
}

impl CommandOutcome {
    #[must_use]
    pub fn needs_render(self) -> bool {
        matches!(self, CommandOutcome::Moved | CommandOutcome::Scrolled)
    }
}

/// Focus and viewport. The entry list is not part of the state; every operation that
/// needs it takes its length.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct SelectorState {
    /// Absolute index of the highlighted entry.
    pub focus: usize,
    pub viewport: Viewport,
    pub lifecycle: Lifecycle,
}

impl SelectorState {
    #[must_use]
    pub fn locate_cursor_in_viewport(&self) -> CaretVerticalViewportLocation {
        locate_cursor_in_viewport(self.focus, self.viewport)
    }

    /// Enter [`Lifecycle::Active`] with a viewport of (at most) `limit` rows that shows
    /// the current focus.
    pub fn activate(&mut self, limit: usize, items_len: usize) {
        self.focus = self.focus.min(items_len.saturating_sub(1));
        self.viewport = self.viewport.fit_around(self.focus, limit, items_len);
        self.lifecycle = Lifecycle::Active;
    }

    pub fn apply(&mut self, command: KeyCommand, items_len: usize) -> CommandOutcome {
        if self.lifecycle != Lifecycle::Active {
            return CommandOutcome::Ignored;
        }

        let outcome = match command {
            KeyCommand::Next => self.move_next(items_len),
            KeyCommand::Previous => self.move_previous(),
            KeyCommand::Confirm => {
                self.lifecycle = Lifecycle::Done;
                CommandOutcome::Confirmed
            }
            KeyCommand::Other => CommandOutcome::Ignored,
        };

        call_if_true!(crate::DEVELOPMENT_MODE, {
            tracing::debug!(
                ?command,
                ?outcome,
                state = ?self,
                location = ?self.locate_cursor_in_viewport(),
                "apply"
            );
        });

        outcome
    }

    fn move_next(&mut self, items_len: usize) -> CommandOutcome {
        // No wrap around at the end of the list.
        if self.focus + 1 >= items_len {
            return CommandOutcome::NoOp;
        }

        match self.locate_cursor_in_viewport() {
            CaretVerticalViewportLocation::AtTopOfViewport
            | CaretVerticalViewportLocation::InMiddleOfViewport => {
                self.focus += 1;
                CommandOutcome::Moved
            }
            CaretVerticalViewportLocation::AtBottomOfViewport
            | CaretVerticalViewportLocation::OnlyRowOfViewport => {
                self.focus += 1;
                self.viewport.begin += 1;
                CommandOutcome::Scrolled
            }
            CaretVerticalViewportLocation::NotFound => CommandOutcome::NoOp,
        }
    }

    fn move_previous(&mut self) -> CommandOutcome {
        // No wrap around at the start of the list.
        if self.focus == 0 {
            return CommandOutcome::NoOp;
        }

        match self.locate_cursor_in_viewport() {
            CaretVerticalViewportLocation::InMiddleOfViewport
            | CaretVerticalViewportLocation::AtBottomOfViewport => {
                self.focus -= 1;
                CommandOutcome::Moved
            }
            CaretVerticalViewportLocation::AtTopOfViewport
            | CaretVerticalViewportLocation::OnlyRowOfViewport => {
                self.focus -= 1;
                self.viewport.begin -= 1;
                CommandOutcome::Scrolled
            }
            CaretVerticalViewportLocation::NotFound => CommandOutcome::NoOp,
        }
    }
}
