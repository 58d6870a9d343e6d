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

/// A single row in a selector.
///
/// - Menu items only have a [`label`](Entry::label).
/// - Form fields also have a bound [`value`](Entry::value), a
///   [`placeholder`](Entry::placeholder) that is shown while the value is empty, and
///   may be [`masked`](Entry::masked) (password style).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Entry {
    pub label: String,
    /// [None] for plain menu items.
    pub value: Option<String>,
    pub placeholder: String,
    pub masked: bool,
}

impl Entry {
    /// A menu item, which has no bound value.
    pub fn item(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// A form field with an empty bound value.
    pub fn field(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(String::new()),
            placeholder: placeholder.into(),
            masked: false,
        }
    }

    #[must_use]
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn set_value(&mut self, value: impl Into<String>) { self.value = Some(value.into()); }

    #[must_use]
    pub fn is_field(&self) -> bool { self.value.is_some() }

    /// The bound value, or an empty string for menu items.
    #[must_use]
    pub fn value_str(&self) -> &str { self.value.as_deref().unwrap_or_default() }
}

impl From<&str> for Entry {
    fn from(label: &str) -> Self { Entry::item(label) }
}

impl From<String> for Entry {
    fn from(label: String) -> Self { Entry::item(label) }
}

impl From<&String> for Entry {
    fn from(label: &String) -> Self { Entry::item(label.as_str()) }
}

/// Convert anything that can be turned into an [Entry] into a list of entries.
pub fn entries_from<T: Into<Entry>>(items: impl IntoIterator<Item = T>) -> Vec<Entry> {
    items.into_iter().map(Into::into).collect()
}
