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

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Errors raised by this crate are [`thiserror`] enums that also derive
//! [`miette::Diagnostic`]. Everything that touches the terminal returns
//! [`miette::Result`], so these errors convert into a [`miette::Report`] with `?`, and
//! can be recovered using [`miette::Report::downcast_ref`].

use miette::Diagnostic;

/// The only way a [`crate::ScrollableSelector`] can fail on its own. Failures of the
/// collaborators (terminal I/O) are passed through as they are.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum SelectorError {
    #[error("Invalid argument: {reason}")]
    #[diagnostic(
        code(scroll_select::invalid_argument),
        help("A selector needs at least one entry, and a page size of at least one row")
    )]
    InvalidArgument { reason: String },
}

impl SelectorError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        SelectorError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum WidgetError {
    /// Returned instead of blocking forever when stdin, stdout, and stderr are all
    /// redirected. This happens when `cargo test` runs, or in CI.
    #[error("Terminal is not interactive")]
    #[diagnostic(
        code(scroll_select::not_interactive),
        help("Run this from an interactive terminal, and don't pipe stdin or stdout")
    )]
    NotInteractive,
}
