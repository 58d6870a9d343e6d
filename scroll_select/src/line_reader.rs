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

use std::io::Write;

use crossterm::{cursor::{Hide, MoveTo, Show},
                event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
                style::Print,
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic as _;

use crate::{execute_commands_no_lock, mask, Position, VALUE_SEPARATOR};

/// Reads the new value of a form field, after the user confirms it in an
/// [`crate::InputForm`].
pub trait LineReader {
    /// Blocks until the user has finished editing. `current` is the field's value before
    /// editing starts. `output` is the form's [`crate::TerminalSession`] output.
    ///
    /// # Errors
    ///
    /// Returns an error if the input device can't be read, or `output` can't be written.
    fn read_line(
        &mut self,
        output: &mut dyn Write,
        label: &str,
        current: &str,
        masked: bool,
    ) -> miette::Result<String>;
}

/// Line editor on a single row of the terminal. Expects raw mode to be enabled already,
/// which is the case inside [`crate::InputForm::show`].
///
/// - `Enter` accepts the edit.
/// - `Esc` discards the edit and keeps the previous value.
/// - `Backspace` deletes the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosstermLineReader {
    pub position: Position,
}

impl CrosstermLineReader {
    #[must_use]
    pub fn new(position: Position) -> Self { Self { position } }

    fn paint(
        &self,
        output: &mut dyn Write,
        label: &str,
        buffer: &str,
        masked: bool,
    ) -> miette::Result<()> {
        let shown = if masked { mask(buffer) } else { buffer.to_string() };
        execute_commands_no_lock!(
            output,
            MoveTo(self.position.col, self.position.row),
            Clear(ClearType::UntilNewLine),
            Print(format!("{label}{VALUE_SEPARATOR}{shown}")),
            Show,
        );
        Ok(())
    }

    fn erase(&self, output: &mut dyn Write) -> miette::Result<()> {
        execute_commands_no_lock!(
            output,
            MoveTo(self.position.col, self.position.row),
            Clear(ClearType::UntilNewLine),
            Hide,
        );
        Ok(())
    }
}

/// What a single key press does to the line being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineEdit {
    Insert(char),
    DeleteBack,
    Accept,
    Discard,
    Nothing,
}

impl From<Event> for LineEdit {
    fn from(event: Event) -> Self {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return LineEdit::Nothing;
        };

        match code {
            KeyCode::Enter => LineEdit::Accept,
            KeyCode::Esc => LineEdit::Discard,
            KeyCode::Backspace => LineEdit::DeleteBack,
            KeyCode::Char(ch)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                LineEdit::Insert(ch)
            }
            _ => LineEdit::Nothing,
        }
    }
}

impl LineReader for CrosstermLineReader {
    fn read_line(
        &mut self,
        output: &mut dyn Write,
        label: &str,
        current: &str,
        masked: bool,
    ) -> miette::Result<String> {
        let mut buffer = current.to_string();

        let result = loop {
            self.paint(output, label, &buffer, masked)?;
            let event = crossterm::event::read().into_diagnostic()?;
            match LineEdit::from(event) {
                LineEdit::Insert(ch) => buffer.push(ch),
                LineEdit::DeleteBack => {
                    buffer.pop();
                }
                LineEdit::Accept => break buffer,
                LineEdit::Discard => break current.to_string(),
                LineEdit::Nothing => {}
            }
        };

        self.erase(output)?;
        tracing::debug!(label, masked, "read_line done");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use test_case::test_case;

    use super::*;
    use crate::test_utils::TestStringWriter;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test_case(KeyCode::Char('a'), KeyModifiers::NONE, LineEdit::Insert('a'))]
    #[test_case(KeyCode::Char('A'), KeyModifiers::SHIFT, LineEdit::Insert('A'))]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, LineEdit::Nothing)]
    #[test_case(KeyCode::Backspace, KeyModifiers::NONE, LineEdit::DeleteBack)]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, LineEdit::Accept)]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE, LineEdit::Discard)]
    #[test_case(KeyCode::Left, KeyModifiers::NONE, LineEdit::Nothing)]
    fn test_line_edit_from_press(code: KeyCode, modifiers: KeyModifiers, expected: LineEdit) {
        assert_eq2!(
            LineEdit::from(key(code, modifiers, KeyEventKind::Press)),
            expected
        );
    }

    #[test]
    fn test_line_edit_ignores_release() {
        assert_eq2!(
            LineEdit::from(key(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release)),
            LineEdit::Nothing
        );
    }

    #[test]
    fn test_paint_writes_masked_row_to_output() {
        let reader = CrosstermLineReader::new(Position::new(2, 7));
        let mut output = TestStringWriter::new();
        reader.paint(&mut output, "Password", "hunter2", true).unwrap();

        let buffer = output.get_buffer();
        assert!(buffer.starts_with("\x1b[8;3H\x1b[K"));
        assert!(buffer.contains("Password : *******"));
        assert!(!buffer.contains("hunter2"));
    }

    #[test]
    fn test_erase_clears_row_in_output() {
        let reader = CrosstermLineReader::new(Position::new(2, 7));
        let mut output = TestStringWriter::new();
        reader.erase(&mut output).unwrap();
        assert!(output.get_buffer().starts_with("\x1b[8;3H\x1b[K"));
    }
}
