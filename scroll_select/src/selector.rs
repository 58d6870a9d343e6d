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

use crate::{max_label_width,
            CommandOutcome,
            Entry,
            KeyCommand,
            KeySource,
            Lifecycle,
            Position,
            RenderConfig,
            RenderSurface,
            RowText,
            ScreenGeometry,
            SelectorError,
            SelectorState,
            Viewport};

/// The result of a run: the focused entry at the time the user confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub index: usize,
    pub label: String,
    /// [None] for menu items.
    pub value: Option<String>,
}

/// Keyboard driven list with a scrolling viewport. See the [`crate::scroll`] module for
/// how the viewport and focus relate.
///
/// The selector borrows its entries for its whole lifetime, and borrows the render
/// surface and key source only for the duration of a run. Since [`Self::run`] takes
/// `&mut self`, a selector can't be re-entered while it is running.
#[derive(Debug)]
pub struct ScrollableSelector<'a> {
    entries: &'a [Entry],
    anchor: Position,
    config: RenderConfig,
    label_width: usize,
    state: SelectorState,
    selection: Option<Selection>,
}

impl<'a> ScrollableSelector<'a> {
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidArgument`] if `entries` is empty.
    pub fn new(entries: &'a [Entry], anchor: Position) -> Result<Self, SelectorError> {
        if entries.is_empty() {
            return Err(SelectorError::invalid_argument(
                "can't create a selector over an empty list",
            ));
        }

        Ok(Self {
            entries,
            anchor,
            config: RenderConfig::default(),
            label_width: max_label_width(entries),
            state: SelectorState::default(),
            selection: None,
        })
    }

    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Start with `index` focused, instead of the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidArgument`] if `index` is out of bounds.
    pub fn with_focus(mut self, index: usize) -> Result<Self, SelectorError> {
        if index >= self.entries.len() {
            return Err(SelectorError::invalid_argument(format!(
                "focus index {index} is out of bounds for {} entries",
                self.entries.len()
            )));
        }
        self.state.focus = index;
        Ok(self)
    }

    #[must_use]
    pub fn entries(&self) -> &'a [Entry] { self.entries }

    #[must_use]
    pub fn anchor(&self) -> Position { self.anchor }

    #[must_use]
    pub fn focus(&self) -> usize { self.state.focus }

    #[must_use]
    pub fn viewport(&self) -> Viewport { self.state.viewport }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle { self.state.lifecycle }

    #[must_use]
    pub fn state(&self) -> SelectorState { self.state }

    /// The result of the last run. [None] before the first run has finished.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> { self.selection.as_ref() }

    /// Run with a page size that fills the rest of the screen below the anchor (or fits
    /// the whole list, whichever is smaller).
    ///
    /// # Errors
    ///
    /// See [`Self::run_with_page_size`].
    pub fn run<S, K>(&mut self, surface: &mut S, keys: &mut K) -> miette::Result<Selection>
    where
        S: RenderSurface + ScreenGeometry,
        K: KeySource,
    {
        let page_size = self
            .entries
            .len()
            .min(surface.remaining_rows(self.anchor.row));
        self.run_with_page_size(page_size.max(1), surface, keys)
    }

    /// Show at most `page_size` rows, and block until the user confirms.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::InvalidArgument`] if `page_size` is 0, or there are no entries.
    /// - Any error returned by the `surface` or `keys`.
    pub fn run_with_page_size<S, K>(
        &mut self,
        page_size: usize,
        surface: &mut S,
        keys: &mut K,
    ) -> miette::Result<Selection>
    where
        S: RenderSurface + ScreenGeometry,
        K: KeySource,
    {
        if self.entries.is_empty() {
            return Err(
                SelectorError::invalid_argument("can't run a selector over an empty list").into(),
            );
        }
        if page_size == 0 {
            return Err(SelectorError::invalid_argument("page size must be at least 1 row").into());
        }

        let remaining_rows = surface.remaining_rows(self.anchor.row);
        let limit = page_size.min(remaining_rows).min(self.entries.len()).max(1);

        self.selection = None;
        self.state.activate(limit, self.entries.len());

        tracing::debug!(
            page_size,
            remaining_rows,
            limit,
            items_len = self.entries.len(),
            focus = self.state.focus,
            "selector run"
        );

        self.render(surface)?;

        loop {
            let command = keys.next_command()?;
            let outcome = self.apply_command(command);
            if outcome.needs_render() {
                self.render(surface)?;
            }
            if let (CommandOutcome::Confirmed, Some(selection)) = (outcome, &self.selection) {
                return Ok(selection.clone());
            }
        }
    }

    /// The state transition behind a single key press. This does no I/O; the run loop
    /// renders afterwards if [`CommandOutcome::needs_render`].
    pub fn apply_command(&mut self, command: KeyCommand) -> CommandOutcome {
        let outcome = self.state.apply(command, self.entries.len());
        if outcome == CommandOutcome::Confirmed {
            self.selection = self.selection_at(self.state.focus);
            tracing::info!(
                index = self.state.focus,
                label = ?self.selection.as_ref().map(|it| it.label.as_str()),
                "selector confirmed"
            );
        }
        outcome
    }

    fn selection_at(&self, index: usize) -> Option<Selection> {
        self.entries.get(index).map(|entry| Selection {
            index,
            label: entry.label.clone(),
            value: entry.value.clone(),
        })
    }

    /// Paint every visible row, with the focused one highlighted.
    ///
    /// # Errors
    ///
    /// Returns any error from the `surface`.
    pub fn render(&self, surface: &mut impl RenderSurface) -> miette::Result<()> {
        let viewport = self.state.viewport;
        let visible = self
            .entries
            .iter()
            .enumerate()
            .skip(viewport.begin)
            .take(viewport.limit);

        for (row_offset, (index, entry)) in visible.enumerate() {
            let text = RowText::new(entry, self.config, self.label_width);
            surface.paint(row_offset, &text, index == self.state.focus)?;
        }

        surface.flush()
    }
}
