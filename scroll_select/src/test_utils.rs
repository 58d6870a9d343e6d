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

//! Test doubles for the selector's collaborators, and for the widgets' output device.
//! These are public so that apps built on this crate can drive their own widgets in
//! tests.

use std::{borrow::Cow,
          collections::VecDeque,
          io::{Result, Write}};

use crate::{KeyCommand, KeySource, LineReader, RenderSurface, RowText, ScreenGeometry};

/// Collects everything written to it. Bytes are kept as they arrive, so a UTF-8 sequence
/// split across two writes is not lost.
#[derive(Debug, Default, Clone)]
pub struct TestStringWriter {
    buffer: Vec<u8>,
}

impl TestStringWriter {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn get_buffer(&self) -> Cow<'_, str> { String::from_utf8_lossy(&self.buffer) }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// Replays a fixed list of commands. After the last one it wraps around to the first,
/// so a list that ends with [`KeyCommand::Confirm`] always terminates a run.
#[derive(Debug, Clone)]
pub struct TestVecKeySource {
    pub commands: Vec<KeyCommand>,
    pub index: Option<usize>,
}

impl TestVecKeySource {
    #[must_use]
    pub fn new(commands: Vec<KeyCommand>) -> Self {
        Self {
            commands,
            index: None,
        }
    }
}

impl KeySource for TestVecKeySource {
    fn next_command(&mut self) -> miette::Result<KeyCommand> {
        // Increment index every time this function is called until the end of the vector
        // and then wrap around.
        let index = match self.index {
            Some(index) if index + 1 < self.commands.len() => index + 1,
            _ => 0,
        };
        self.index = Some(index);

        Ok(self.commands.get(index).copied().unwrap_or_default())
    }
}

/// One call to [`RenderSurface::paint`], with the row text flattened to a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintCall {
    pub row_offset: usize,
    pub text: String,
    pub focused: bool,
}

impl PaintCall {
    pub fn new(row_offset: usize, text: impl Into<String>, focused: bool) -> Self {
        Self {
            row_offset,
            text: text.into(),
            focused,
        }
    }
}

/// Records every paint call, and reports a fixed screen height.
#[derive(Debug, Default, Clone)]
pub struct TestRenderSurface {
    pub screen_rows: usize,
    pub paint_calls: Vec<PaintCall>,
    /// Number of completed render passes (calls to [`RenderSurface::flush`]).
    pub pass_count: usize,
    current_pass: Vec<PaintCall>,
    last_pass: Vec<PaintCall>,
}

impl TestRenderSurface {
    #[must_use]
    pub fn new(screen_rows: usize) -> Self {
        Self {
            screen_rows,
            ..Default::default()
        }
    }

    /// The rows painted by the most recent completed render pass.
    #[must_use]
    pub fn last_pass(&self) -> Vec<PaintCall> { self.last_pass.clone() }
}

impl RenderSurface for TestRenderSurface {
    fn paint(&mut self, row_offset: usize, text: &RowText, focused: bool) -> miette::Result<()> {
        let call = PaintCall::new(row_offset, text.to_string(), focused);
        self.paint_calls.push(call.clone());
        self.current_pass.push(call);
        Ok(())
    }

    fn flush(&mut self) -> miette::Result<()> {
        self.pass_count += 1;
        self.last_pass = std::mem::take(&mut self.current_pass);
        Ok(())
    }
}

impl ScreenGeometry for TestRenderSurface {
    fn remaining_rows(&self, anchor_row: u16) -> usize {
        self.screen_rows.saturating_sub(usize::from(anchor_row))
    }
}

/// Answers each [`LineReader::read_line`] call with the next queued line. Once the queue
/// is empty, the current value is kept.
#[derive(Debug, Default, Clone)]
pub struct TestLineReader {
    pub lines: VecDeque<String>,
}

impl TestLineReader {
    pub fn new<T: Into<String>>(lines: impl IntoIterator<Item = T>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineReader for TestLineReader {
    fn read_line(
        &mut self,
        _output: &mut dyn Write,
        _label: &str,
        current: &str,
        _masked: bool,
    ) -> miette::Result<String> {
        Ok(self
            .lines
            .pop_front()
            .unwrap_or_else(|| current.to_string()))
    }
}

pub fn contains_ansi_escape_sequence(text: &str) -> bool {
    text.chars().any(|it| it == '\x1b')
}
