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

//! Turns an [`Entry`] into the text that gets painted for its row. The rules are driven
//! by [`RenderConfig`], which is how the menu, form, list, and question widgets differ.

use std::fmt::{Display, Formatter};

use unicode_width::UnicodeWidthStr;

use crate::Entry;

pub const MASK_CHAR: char = '*';
pub const VALUE_SEPARATOR: &str = " : ";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// Show the placeholder (in a dim style) for fields whose value is empty.
    pub show_placeholder: bool,
    /// Show `*` for each character of a field flagged as [`Entry::masked`].
    pub masked: bool,
    /// Pad every label to the widest label in the list, so the highlight bar has the
    /// same width on every row.
    pub fill_width: bool,
}

impl RenderConfig {
    /// Plain menu, highlight bar as wide as the widest item.
    #[must_use]
    pub fn menu() -> Self {
        Self {
            fill_width: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn form() -> Self {
        Self {
            show_placeholder: true,
            masked: true,
            fill_width: true,
        }
    }
}

/// What to paint for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    pub label: String,
    /// [None] for menu items.
    pub value: Option<ValueText>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueText {
    pub text: String,
    /// Paint in the placeholder (dim) style.
    pub is_placeholder: bool,
}

impl RowText {
    /// `label_width` is the display width to pad the label to. It is ignored unless
    /// [`RenderConfig::fill_width`] is set.
    #[must_use]
    pub fn new(entry: &Entry, config: RenderConfig, label_width: usize) -> Self {
        let label = if config.fill_width {
            pad_to_width(&entry.label, label_width)
        } else {
            entry.label.clone()
        };

        let value = entry.value.as_deref().map(|value| {
            if value.is_empty() && config.show_placeholder {
                ValueText {
                    text: entry.placeholder.clone(),
                    is_placeholder: true,
                }
            } else if config.masked && entry.masked {
                ValueText {
                    text: mask(value),
                    is_placeholder: false,
                }
            } else {
                ValueText {
                    text: value.to_string(),
                    is_placeholder: false,
                }
            }
        });

        Self { label, value }
    }
}

impl Display for RowText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}{VALUE_SEPARATOR}{}", self.label, value.text),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Display width of the widest label.
#[must_use]
pub fn max_label_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|it| UnicodeWidthStr::width(it.label.as_str()))
        .max()
        .unwrap_or(0)
}

/// Pad with spaces on the right, until the text is `width` columns wide. Text that is
/// already wider is returned as is.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{text}{}", " ".repeat(padding))
}

/// One [`MASK_CHAR`] per character (not per byte).
#[must_use]
pub fn mask(value: &str) -> String {
    std::iter::repeat_n(MASK_CHAR, value.chars().count()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_has_no_value_text() {
        let it = RowText::new(&Entry::item("Login"), RenderConfig::default(), 0);
        assert_eq2!(it.to_string(), "Login");
        assert_eq2!(it.value, None);
    }

    #[test]
    fn test_fill_width_pads_to_widest_label() {
        let entries = vec![Entry::item("Login"), Entry::item("Settings")];
        let width = max_label_width(&entries);
        assert_eq2!(width, 8);

        let it = RowText::new(&entries[0], RenderConfig::menu(), width);
        assert_eq2!(it.label, "Login   ");

        let it = RowText::new(&entries[0], RenderConfig::default(), width);
        assert_eq2!(it.label, "Login");
    }

    #[test]
    fn test_fill_width_uses_display_width() {
        // Each of these is 2 columns wide.
        let entries = vec![Entry::item("日本"), Entry::item("a")];
        assert_eq2!(max_label_width(&entries), 4);
        assert_eq2!(pad_to_width("a", 4), "a   ");
    }

    #[test]
    fn test_placeholder_shown_for_empty_value() {
        let field = Entry::field("Username", "your email");
        let it = RowText::new(&field, RenderConfig::form(), 0);
        assert_eq2!(
            it.value,
            Some(ValueText {
                text: "your email".to_string(),
                is_placeholder: true,
            })
        );
    }

    #[test]
    fn test_placeholder_hidden_when_disabled() {
        let field = Entry::field("Username", "your email");
        let it = RowText::new(&field, RenderConfig::default(), 0);
        assert_eq2!(it.to_string(), "Username : ");
    }

    #[test]
    fn test_masked_value() {
        let field = Entry::field("Password", "").masked().with_value("pässword");
        let it = RowText::new(&field, RenderConfig::form(), 0);
        assert_eq2!(it.to_string(), "Password : ********");
    }

    #[test]
    fn test_masked_flag_needs_config() {
        let field = Entry::field("Password", "").masked().with_value("secret");
        let it = RowText::new(&field, RenderConfig::default(), 0);
        assert_eq2!(it.to_string(), "Password : secret");
    }

    #[test]
    fn test_unmasked_field_shows_literal_value() {
        let field = Entry::field("Username", "").with_value("nadia");
        let it = RowText::new(&field, RenderConfig::form(), 0);
        assert_eq2!(it.to_string(), "Username : nadia");
    }
}
