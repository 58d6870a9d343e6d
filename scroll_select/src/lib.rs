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

//! # scroll_select
//!
//! This crate adds keyboard driven list widgets to text mode console apps. Everything is
//! built on a single component, the [`ScrollableSelector`], which keeps track of:
//!
//! 1. A list of [`Entry`] items (menu labels, or form fields with a bound value).
//! 1. A [`Viewport`] that is the window of rows currently visible on screen.
//! 1. A focus index, which is the row that is highlighted and gets returned when the
//!    user presses `Enter`.
//!
//! The selector does no I/O itself. It paints through a [`RenderSurface`], reads
//! commands from a [`KeySource`], and asks a [`ScreenGeometry`] how many rows are
//! available below its anchor. The crate ships crossterm backed implementations of all
//! three (see [`TerminalSession`]), plus test doubles in [`test_utils`].
//!
//! ## Widgets
//!
//! The following presets are built on top of the selector. They differ only in their
//! [`RenderConfig`] and in what they paint around the list.
//!
//! | Widget          | What it does                                              |
//! | --------------- | --------------------------------------------------------- |
//! | [`Menu`]        | Arrow key menu that remembers its focus between calls.    |
//! | [`select_one`]  | Single choice list with a header row.                     |
//! | [`question`]    | Prompt with a fixed list of answers, see also [`confirm`]. |
//! | [`InputForm`]   | Multi field form with placeholders and masked fields.     |
//!
//! ## How to use it as a library?
//!
//! ```no_run
//! use scroll_select::*;
//!
//! fn main() -> miette::Result<()> {
//!     let mut session = TerminalSession::stdout();
//!     let mut keys = CrosstermKeySource;
//!
//!     let mut menu = Menu::new(
//!         ["Login", "Register", "Settings", "[Exit]"],
//!         Position::new(2, 6),
//!         WidgetOptions::default(),
//!     )?;
//!
//!     let selection = menu.show(&mut session, &mut keys)?;
//!     println!("User selected: {:?}", selection);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Navigation
//!
//! - `Down`, `j`, or `Tab` moves the focus down one row.
//! - `Up`, `k`, or `Shift+Tab` moves the focus up one row.
//! - `Enter` confirms the focused row.
//!
//! The list does not wrap around. When the focus is on the bottom (or top) row of the
//! viewport, and there are more items, the viewport scrolls by exactly one row.
//!
//! There is no way to cancel a selection. If you need a timeout or an escape hatch,
//! build it into your [`KeySource`] (for example, return [`KeyCommand::Confirm`] after
//! a deadline).

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

#[macro_use]
mod decl_macros;

pub mod components;
pub mod crossterm_macros;
pub mod entry;
pub mod error;
pub mod keypress_reader;
pub mod line_reader;
pub mod logging;
pub mod public_api;
pub mod render;
pub mod scroll;
pub mod selector;
pub mod state;
pub mod surface;
pub mod terminal;
pub mod test_utils;

pub use components::*;
pub use entry::*;
pub use error::*;
pub use keypress_reader::*;
pub use line_reader::*;
pub use logging::*;
pub use public_api::*;
pub use render::*;
pub use scroll::*;
pub use selector::*;
pub use state::*;
pub use surface::*;
pub use terminal::*;

/// Dump the full selector state on every command. Use `tail -f log.txt` to watch the
/// logs (logging has to be enabled, see [`try_initialize_logging`]).
pub const DEVELOPMENT_MODE: bool = false;
