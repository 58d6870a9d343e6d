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

use crossterm::terminal::size;
use miette::IntoDiagnostic as _;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub col_count: usize,
    pub row_count: usize,
}

impl Size {
    #[must_use]
    pub fn new(col_count: usize, row_count: usize) -> Self { Self { col_count, row_count } }
}

impl Default for Size {
    fn default() -> Self { Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT) }
}

/// Get the terminal size.
///
/// # Errors
///
/// Returns an error if the size can't be queried (for example, when stdout is not a
/// terminal).
pub fn get_size() -> miette::Result<Size> {
    let (columns, rows) = size().into_diagnostic()?;
    Ok(Size::new(columns.into(), rows.into()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [`TTYResult::IsNotInteractive`] if stdin, stdout, and stderr are *all* fully
/// uninteractive. This happens when `cargo test` runs.
///
/// There are situations where some can be interactive and others not, such as when piping
/// is active.
#[must_use]
pub fn is_fully_uninteractive_terminal() -> TTYResult {
    use crossterm::tty::IsTty;
    let stdin_is_tty: bool = std::io::stdin().is_tty();
    let stdout_is_tty: bool = std::io::stdout().is_tty();
    let stderr_is_tty: bool = std::io::stderr().is_tty();
    if !stdin_is_tty && !stdout_is_tty && !stderr_is_tty {
        TTYResult::IsNotInteractive
    } else {
        TTYResult::IsInteractive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        assert_eq2!(Size::default(), Size::new(80, 24));
    }
}
