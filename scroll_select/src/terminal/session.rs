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

use std::io::{Stdout, Write};

use crossterm::{cursor::{Hide, MoveTo, Show},
                style::{Attribute, Print, ResetColor, SetAttribute},
                terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType}};
use miette::IntoDiagnostic as _;

use crate::{apply_style,
            execute_commands_no_lock,
            get_size,
            is_fully_uninteractive_terminal,
            queue_commands_no_lock,
            CrosstermRenderSurface,
            Position,
            Size,
            Style,
            StyleSheet,
            TTYResult,
            WidgetError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionMode {
    /// Talks to a real terminal: raw mode, cursor visibility, and size queries.
    Terminal,
    /// Only writes escape sequences to the output. Never touches the terminal's modes,
    /// and never checks for a tty. Used in tests.
    Headless,
}

/// Owns the output device that all the widgets paint to. Pass it explicitly to every
/// widget call.
///
/// Raw mode is left when the session is dropped, even if a widget returned early with
/// an error.
#[derive(Debug)]
pub struct TerminalSession<W: Write> {
    output: W,
    mode: SessionMode,
    fixed_size: Option<Size>,
    raw_mode_enabled: bool,
}

impl TerminalSession<Stdout> {
    #[must_use]
    pub fn stdout() -> Self { Self::new(std::io::stdout()) }
}

impl<W: Write> TerminalSession<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            mode: SessionMode::Terminal,
            fixed_size: None,
            raw_mode_enabled: false,
        }
    }

    /// A session that never touches the real terminal.
    pub fn headless(output: W, size: Size) -> Self {
        Self {
            output,
            mode: SessionMode::Headless,
            fixed_size: Some(size),
            raw_mode_enabled: false,
        }
    }

    /// Report `size` instead of querying the terminal.
    #[must_use]
    pub fn with_fixed_size(mut self, size: Size) -> Self {
        self.fixed_size = Some(size);
        self
    }

    pub fn mode(&self) -> SessionMode { self.mode }

    pub fn output(&self) -> &W { &self.output }

    pub fn output_mut(&mut self) -> &mut W { &mut self.output }

    pub fn is_raw_mode_enabled(&self) -> bool { self.raw_mode_enabled }

    pub fn size(&self) -> Size {
        if let Some(size) = self.fixed_size {
            return size;
        }
        match get_size() {
            Ok(size) => size,
            Err(err) => {
                tracing::warn!(?err, "can't get terminal size, using default");
                Size::default()
            }
        }
    }

    /// Hide the cursor and enable raw mode. Does nothing if raw mode is already enabled.
    ///
    /// # Errors
    ///
    /// - [`WidgetError::NotInteractive`] if stdin, stdout, and stderr are all redirected.
    /// - Any error from the terminal.
    pub fn enter_raw_mode(&mut self) -> miette::Result<()> {
        if self.raw_mode_enabled {
            return Ok(());
        }

        if self.mode == SessionMode::Terminal {
            if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
                return Err(WidgetError::NotInteractive.into());
            }
            let output = &mut self.output;
            execute_commands_no_lock!(output, Hide);
            enable_raw_mode().into_diagnostic()?;
        }

        self.raw_mode_enabled = true;
        Ok(())
    }

    /// Show the cursor and disable raw mode. Does nothing if raw mode isn't enabled.
    ///
    /// # Errors
    ///
    /// Returns any error from the terminal.
    pub fn leave_raw_mode(&mut self) -> miette::Result<()> {
        if !self.raw_mode_enabled {
            return Ok(());
        }

        self.raw_mode_enabled = false;
        if self.mode == SessionMode::Terminal {
            let output = &mut self.output;
            execute_commands_no_lock!(output, Show);
            disable_raw_mode().into_diagnostic()?;
        }

        Ok(())
    }

    /// Run `f` in raw mode, and leave raw mode afterwards (even if `f` fails). If raw
    /// mode is already enabled, `f` just runs, and raw mode stays enabled.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or from entering or leaving raw mode.
    pub fn with_raw_mode<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> miette::Result<T>,
    ) -> miette::Result<T> {
        if self.raw_mode_enabled {
            return f(self);
        }

        self.enter_raw_mode()?;
        let result = f(self);
        let leave_result = self.leave_raw_mode();
        let it = result?;
        leave_result?;
        Ok(it)
    }

    /// # Errors
    ///
    /// Returns any error from the output device.
    pub fn clear_screen(&mut self) -> miette::Result<()> {
        let output = &mut self.output;
        execute_commands_no_lock!(output, Clear(ClearType::All), MoveTo(0, 0));
        Ok(())
    }

    /// Paint `text` at `position` in the given style.
    ///
    /// # Errors
    ///
    /// Returns any error from the output device.
    pub fn write_at(
        &mut self,
        position: Position,
        text: &str,
        style: Style,
    ) -> miette::Result<()> {
        let output = &mut self.output;
        queue_commands_no_lock!(
            output,
            MoveTo(position.col, position.row),
            apply_style!(style => fg_color),
            apply_style!(style => bg_color),
            apply_style!(style => intensity),
            apply_style!(style => italic),
            apply_style!(style => underline),
            apply_style!(style => reverse),
        );
        execute_commands_no_lock!(output, Print(text), ResetColor, SetAttribute(Attribute::Reset));
        Ok(())
    }

    /// Same as [`Self::write_at`], and clear the rest of the row.
    ///
    /// # Errors
    ///
    /// Returns any error from the output device.
    pub fn write_line_at(
        &mut self,
        position: Position,
        text: &str,
        style: Style,
    ) -> miette::Result<()> {
        self.write_at(position, text, style)?;
        let output = &mut self.output;
        execute_commands_no_lock!(output, Clear(ClearType::UntilNewLine));
        Ok(())
    }

    /// A render surface anchored at `anchor`, that paints with `style_sheet`.
    pub fn surface(
        &mut self,
        anchor: Position,
        style_sheet: StyleSheet,
    ) -> CrosstermRenderSurface<'_, W> {
        let size = self.size();
        CrosstermRenderSurface {
            output: &mut self.output,
            anchor,
            style_sheet,
            size,
        }
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if self.raw_mode_enabled && self.mode == SessionMode::Terminal {
            self.raw_mode_enabled = false;
            if let Err(err) = crossterm::execute!(self.output, Show) {
                tracing::warn!(?err, "can't show cursor");
            }
            if let Err(err) = disable_raw_mode() {
                tracing::warn!(?err, "can't disable raw mode");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::TestStringWriter, ScreenGeometry as _};

    fn headless() -> TerminalSession<TestStringWriter> {
        TerminalSession::headless(TestStringWriter::new(), Size::new(40, 10))
    }

    #[test]
    fn test_headless_raw_mode_is_tracked_only() {
        let mut session = headless();
        let inside = session
            .with_raw_mode(|session| Ok(session.is_raw_mode_enabled()))
            .unwrap();
        assert!(inside);
        assert!(!session.is_raw_mode_enabled());
        assert_eq2!(session.output().get_buffer(), "");
    }

    #[test]
    fn test_with_raw_mode_leaves_on_error() {
        let mut session = headless();
        let result: miette::Result<()> =
            session.with_raw_mode(|_| Err(miette::miette!("boom")));
        assert!(result.is_err());
        assert!(!session.is_raw_mode_enabled());
    }

    #[test]
    fn test_nested_with_raw_mode_stays_raw() {
        let mut session = headless();
        session
            .with_raw_mode(|session| {
                session.with_raw_mode(|_| Ok(()))?;
                assert!(session.is_raw_mode_enabled());
                Ok(())
            })
            .unwrap();
        assert!(!session.is_raw_mode_enabled());
    }

    #[test]
    fn test_fixed_size() {
        let session = TerminalSession::new(TestStringWriter::new()).with_fixed_size(Size::new(100, 50));
        assert_eq2!(session.size(), Size::new(100, 50));
        assert_eq2!(session.mode(), SessionMode::Terminal);
    }

    #[test]
    fn test_write_line_at() {
        let mut session = headless();
        session
            .write_line_at(Position::new(0, 2), "SIMPLE", StyleSheet::default().header_style)
            .unwrap();
        let buffer = session.output().get_buffer();
        assert!(buffer.starts_with("\x1b[3;1H"));
        assert!(buffer.contains("SIMPLE"));
        assert!(buffer.ends_with("\x1b[K"));
    }

    #[test]
    fn test_write_at_keeps_header_bold() {
        let mut session = headless();
        session
            .write_at(Position::new(0, 0), "SIMPLE", StyleSheet::default().header_style)
            .unwrap();
        let buffer = session.output().get_buffer();
        let before_text = &buffer[..buffer.find("SIMPLE").unwrap()];
        let bold_at = before_text.rfind("\x1b[1m").unwrap();
        assert!(!before_text[bold_at..].contains("\x1b[22m"));
    }

    #[test]
    fn test_clear_screen() {
        let mut session = headless();
        session.clear_screen().unwrap();
        assert_eq2!(session.output().get_buffer(), "\x1b[2J\x1b[1;1H");
    }

    #[test]
    fn test_surface_uses_session_size() {
        let mut session = headless();
        let surface = session.surface(Position::new(2, 6), StyleSheet::default());
        assert_eq2!(surface.remaining_rows(6), 4);
    }
}
