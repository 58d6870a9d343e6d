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

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use miette::IntoDiagnostic as _;

/// The only commands a selector understands. Everything else the user types maps to
/// [`KeyCommand::Other`], which the selector ignores.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyCommand {
    Next,
    Previous,
    Confirm,
    #[default]
    Other,
}

/// Blocking source of [`KeyCommand`]s.
pub trait KeySource {
    /// Blocks until the next command is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input device can't be read.
    fn next_command(&mut self) -> miette::Result<KeyCommand>;

    /// Blocks until the user presses a key. The default skips [`KeyCommand::Other`],
    /// which is all a source of commands can do. Sources that see raw key events should
    /// accept any key press instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input device can't be read.
    fn wait_for_key_press(&mut self) -> miette::Result<()> {
        while self.next_command()? == KeyCommand::Other {}
        Ok(())
    }
}

/// Reads keys from the terminal using crossterm. The terminal has to be in raw mode for
/// keys to arrive one at a time, see [`crate::TerminalSession::with_raw_mode`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermKeySource;

impl KeySource for CrosstermKeySource {
    fn next_command(&mut self) -> miette::Result<KeyCommand> {
        let event = crossterm::event::read().into_diagnostic()?;
        call_if_true!(crate::DEVELOPMENT_MODE, {
            tracing::debug!(?event, "read_key_press");
        });
        Ok(KeyCommand::from(event))
    }

    fn wait_for_key_press(&mut self) -> miette::Result<()> {
        loop {
            let event = crossterm::event::read().into_diagnostic()?;
            if is_key_press(&event) {
                return Ok(());
            }
        }
    }
}

/// Only key events of kind [`KeyEventKind::Press`] count.
#[must_use]
pub fn is_key_press(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            ..
        })
    )
}

/// [`KeyEvent::kind`] is only set to something other than [`KeyEventKind::Press`] on
/// Windows (always), or on Unix when keyboard enhancement flags are pushed. Releases and
/// repeats are ignored so that a single key stroke never moves the focus twice.
impl From<Event> for KeyCommand {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => from_key_code(code, modifiers),
            _ => KeyCommand::Other,
        }
    }
}

fn from_key_code(code: KeyCode, modifiers: KeyModifiers) -> KeyCommand {
    match code {
        // Down.
        KeyCode::Down | KeyCode::Tab => KeyCommand::Next,
        KeyCode::Char('j') if modifiers.is_empty() => KeyCommand::Next,
        // Up.
        KeyCode::Up | KeyCode::BackTab => KeyCommand::Previous,
        KeyCode::Char('k') if modifiers.is_empty() => KeyCommand::Previous,
        // Enter.
        KeyCode::Enter => KeyCommand::Confirm,
        // Catchall.
        _ => KeyCommand::Other,
    }
}
