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

use crossterm::{cursor::MoveTo,
                style::{Attribute, Print, ResetColor, SetAttribute},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic as _;

use crate::{apply_style,
            queue_commands_no_lock,
            Position,
            RenderSurface,
            RowText,
            ScreenGeometry,
            Size,
            Style,
            StyleSheet,
            VALUE_SEPARATOR};

/// Paints selector rows with crossterm commands. Created by
/// [`crate::TerminalSession::surface`], and borrows the session's output for as long as
/// it lives.
#[derive(Debug)]
pub struct CrosstermRenderSurface<'a, W: Write> {
    pub output: &'a mut W,
    pub anchor: Position,
    pub style_sheet: StyleSheet,
    pub size: Size,
}

impl<W: Write> CrosstermRenderSurface<'_, W> {
    fn queue_style(&mut self, style: Style) -> miette::Result<()> {
        let output = &mut *self.output;
        queue_commands_no_lock!(
            output,
            apply_style!(style => fg_color),
            apply_style!(style => bg_color),
            apply_style!(style => intensity),
            apply_style!(style => italic),
            apply_style!(style => underline),
            apply_style!(style => reverse),
        );
        Ok(())
    }
}

impl<W: Write> RenderSurface for CrosstermRenderSurface<'_, W> {
    fn paint(&mut self, row_offset: usize, text: &RowText, focused: bool) -> miette::Result<()> {
        let position = self.anchor.down(row_offset);
        let row_style = self.style_sheet.row_style(focused);

        {
            let output = &mut *self.output;
            queue_commands_no_lock!(output, MoveTo(position.col, position.row));
        }
        self.queue_style(row_style)?;
        {
            let output = &mut *self.output;
            queue_commands_no_lock!(output, Print(&text.label));
        }

        if let Some(value) = &text.value {
            {
                let output = &mut *self.output;
                queue_commands_no_lock!(output, Print(VALUE_SEPARATOR));
            }
            if value.is_placeholder {
                // Keep the highlight bar's background behind the placeholder.
                let placeholder_style = Style {
                    bg: row_style.bg,
                    ..self.style_sheet.placeholder_style
                };
                self.queue_style(placeholder_style)?;
            }
            let output = &mut *self.output;
            queue_commands_no_lock!(output, Print(&value.text));
        }

        let output = &mut *self.output;
        queue_commands_no_lock!(
            output,
            ResetColor,
            SetAttribute(Attribute::Reset),
            Clear(ClearType::UntilNewLine),
        );

        Ok(())
    }

    fn flush(&mut self) -> miette::Result<()> { self.output.flush().into_diagnostic() }
}

impl<W: Write> ScreenGeometry for CrosstermRenderSurface<'_, W> {
    fn remaining_rows(&self, anchor_row: u16) -> usize {
        self.size.row_count.saturating_sub(usize::from(anchor_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::{contains_ansi_escape_sequence, TestStringWriter},
                Entry,
                RenderConfig};

    fn surface(output: &mut TestStringWriter) -> CrosstermRenderSurface<'_, TestStringWriter> {
        CrosstermRenderSurface {
            output,
            anchor: Position::new(2, 6),
            style_sheet: StyleSheet::default(),
            size: Size::new(80, 24),
        }
    }

    #[test]
    fn test_remaining_rows() {
        let mut output = TestStringWriter::new();
        let it = surface(&mut output);
        assert_eq2!(it.remaining_rows(6), 18);
        assert_eq2!(it.remaining_rows(30), 0);
    }

    #[test]
    fn test_paint_moves_to_row_below_anchor() {
        let mut output = TestStringWriter::new();
        let text = RowText::new(&Entry::item("Register"), RenderConfig::menu(), 0);
        surface(&mut output).paint(1, &text, true).unwrap();

        let buffer = output.get_buffer();
        // Row 7, column 2, 1 based on the wire.
        assert!(buffer.starts_with("\x1b[8;3H"));
        assert!(buffer.contains("Register"));
        assert!(contains_ansi_escape_sequence(&buffer));
    }

    #[test]
    fn test_paint_field_with_placeholder() {
        let mut output = TestStringWriter::new();
        let text = RowText::new(&Entry::field("User", "your name"), RenderConfig::form(), 4);
        surface(&mut output).paint(0, &text, false).unwrap();

        let buffer = output.get_buffer();
        assert!(buffer.contains("User"));
        assert!(buffer.contains(VALUE_SEPARATOR));
        assert!(buffer.contains("your name"));
    }

    #[test]
    fn test_focused_row_stays_bold() {
        let mut output = TestStringWriter::new();
        let text = RowText::new(&Entry::item("Login"), RenderConfig::menu(), 0);
        surface(&mut output).paint(0, &text, true).unwrap();

        let buffer = output.get_buffer();
        let before_label = &buffer[..buffer.find("Login").unwrap()];
        let bold_at = before_label.rfind("\x1b[1m").unwrap();
        assert!(!before_label[bold_at..].contains("\x1b[22m"));
    }
}
