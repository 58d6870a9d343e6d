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

//! The widgets. Each one is a [`ScrollableSelector`] with a preset [`RenderConfig`],
//! plus whatever it paints around the list. All of them:
//!
//! - Take the [`TerminalSession`] to paint to, and the [`KeySource`] to read from.
//! - Enter raw mode for as long as they run, and leave it before they return.
//! - Return [`WidgetError::NotInteractive`] instead of blocking, when the terminal is
//!   fully uninteractive.

use std::io::Write;

use crate::{Entry,
            KeySource,
            LineReader,
            Position,
            RenderConfig,
            ScrollableSelector,
            Selection,
            SelectorError,
            StyleSheet,
            TerminalSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetOptions {
    pub style_sheet: StyleSheet,
    /// [None] fills the rest of the screen below the anchor.
    pub page_size: Option<usize>,
    /// [None] uses the widget's own preset.
    pub render_config: Option<RenderConfig>,
}

impl WidgetOptions {
    fn render_config_or(&self, preset: RenderConfig) -> RenderConfig {
        self.render_config.unwrap_or(preset)
    }
}

/// Run `selector` in raw mode, painting at its anchor.
fn run_selector<W: Write>(
    session: &mut TerminalSession<W>,
    selector: &mut ScrollableSelector<'_>,
    keys: &mut impl KeySource,
    options: &WidgetOptions,
) -> miette::Result<Selection> {
    session.with_raw_mode(|session| {
        let mut surface = session.surface(selector.anchor(), options.style_sheet);
        match options.page_size {
            Some(page_size) => selector.run_with_page_size(page_size, &mut surface, keys),
            None => selector.run(&mut surface, keys),
        }
    })
}

/// Arrow key menu. It remembers the focus between calls to [`Menu::show`], so when the
/// app comes back to the menu the last choice is still highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<Entry>,
    anchor: Position,
    options: WidgetOptions,
    focus: usize,
}

impl Menu {
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidArgument`] if there are no items.
    pub fn new<T: Into<Entry>>(
        items: impl IntoIterator<Item = T>,
        anchor: Position,
        options: WidgetOptions,
    ) -> Result<Self, SelectorError> {
        let entries: Vec<Entry> = items.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(SelectorError::invalid_argument("a menu needs at least one item"));
        }
        Ok(Self {
            entries,
            anchor,
            options,
            focus: 0,
        })
    }

    pub fn entries(&self) -> &[Entry] { &self.entries }

    pub fn focus(&self) -> usize { self.focus }

    /// # Errors
    ///
    /// Returns [`crate::WidgetError::NotInteractive`], or any terminal error.
    pub fn show<W: Write>(
        &mut self,
        session: &mut TerminalSession<W>,
        keys: &mut impl KeySource,
    ) -> miette::Result<Selection> {
        let config = self.options.render_config_or(RenderConfig::menu());
        let mut selector = ScrollableSelector::new(&self.entries, self.anchor)?
            .with_config(config)
            .with_focus(self.focus)?;
        let selection = run_selector(session, &mut selector, keys, &self.options)?;
        self.focus = selection.index;
        Ok(selection)
    }
}

/// Single choice list, with `header` painted at `anchor` and the list right below it.
///
/// # Errors
///
/// - [`SelectorError::InvalidArgument`] if there are no items.
/// - [`crate::WidgetError::NotInteractive`], or any terminal error.
pub fn select_one<W: Write, T: Into<Entry>>(
    session: &mut TerminalSession<W>,
    keys: &mut impl KeySource,
    header: &str,
    items: impl IntoIterator<Item = T>,
    anchor: Position,
    options: WidgetOptions,
) -> miette::Result<Selection> {
    let config = options.render_config_or(RenderConfig::default());
    run_with_header(session, keys, header, items, anchor, options, config)
}

/// A prompt with a fixed set of answers. Same as [`select_one`], except that the
/// highlight bar is as wide as the longest answer.
///
/// # Errors
///
/// See [`select_one`].
pub fn question<W: Write, T: Into<Entry>>(
    session: &mut TerminalSession<W>,
    keys: &mut impl KeySource,
    prompt: &str,
    answers: impl IntoIterator<Item = T>,
    anchor: Position,
    options: WidgetOptions,
) -> miette::Result<Selection> {
    let config = options.render_config_or(RenderConfig::menu());
    run_with_header(session, keys, prompt, answers, anchor, options, config)
}

/// Yes / No [`question`]. `Yes` has focus initially.
///
/// # Errors
///
/// See [`select_one`].
pub fn confirm<W: Write>(
    session: &mut TerminalSession<W>,
    keys: &mut impl KeySource,
    prompt: &str,
    anchor: Position,
    options: WidgetOptions,
) -> miette::Result<bool> {
    let selection = question(session, keys, prompt, ["Yes", "No"], anchor, options)?;
    Ok(selection.index == 0)
}

fn run_with_header<W: Write, T: Into<Entry>>(
    session: &mut TerminalSession<W>,
    keys: &mut impl KeySource,
    header: &str,
    items: impl IntoIterator<Item = T>,
    anchor: Position,
    options: WidgetOptions,
    config: RenderConfig,
) -> miette::Result<Selection> {
    let entries: Vec<Entry> = items.into_iter().map(Into::into).collect();
    let mut selector = ScrollableSelector::new(&entries, anchor.down(1))?.with_config(config);

    session.with_raw_mode(|session| {
        session.write_line_at(anchor, header, options.style_sheet.header_style)?;
        run_selector(session, &mut selector, keys, &options)
    })
}

/// Multi field form. The list shows every field as `label : value`, followed by a
/// submit entry. Confirming a field edits its value with a [`LineReader`], confirming
/// the submit entry returns the filled in fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    fields: Vec<Entry>,
    submit_label: String,
    anchor: Position,
    options: WidgetOptions,
    focus: usize,
}

impl InputForm {
    /// Entries that don't have a bound value yet get an empty one.
    pub fn new(
        fields: impl IntoIterator<Item = Entry>,
        submit_label: impl Into<String>,
        anchor: Position,
        options: WidgetOptions,
    ) -> Self {
        let fields = fields
            .into_iter()
            .map(|mut field| {
                if !field.is_field() {
                    field.set_value("");
                }
                field
            })
            .collect();

        Self {
            fields,
            submit_label: submit_label.into(),
            anchor,
            options,
            focus: 0,
        }
    }

    pub fn fields(&self) -> &[Entry] { &self.fields }

    /// The value of the first field with this label.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(Entry::value_str)
    }

    /// Row just below the submit entry. A good place for a [`crate::CrosstermLineReader`].
    pub fn row_below(&self) -> Position { self.anchor.down(self.fields.len() + 1) }

    /// # Errors
    ///
    /// Returns [`crate::WidgetError::NotInteractive`], or any terminal or
    /// [`LineReader`] error.
    pub fn show<W: Write>(
        &mut self,
        session: &mut TerminalSession<W>,
        keys: &mut impl KeySource,
        line_reader: &mut impl LineReader,
    ) -> miette::Result<Vec<Entry>> {
        let config = self.options.render_config_or(RenderConfig::form());

        session.with_raw_mode(|session| {
            loop {
                let mut entries = self.fields.clone();
                entries.push(Entry::item(self.submit_label.as_str()));

                let mut selector = ScrollableSelector::new(&entries, self.anchor)?
                    .with_config(config)
                    .with_focus(self.focus)?;
                let selection = run_selector(session, &mut selector, keys, &self.options)?;
                self.focus = selection.index;

                let Some(field) = self.fields.get_mut(selection.index) else {
                    tracing::info!(fields = self.fields.len(), "form submitted");
                    return Ok(self.fields.clone());
                };

                let value = line_reader.read_line(
                    session.output_mut(),
                    &field.label,
                    field.value_str(),
                    field.masked,
                )?;
                field.set_value(value);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use miette::IntoDiagnostic as _;

    use super::*;
    use crate::{test_utils::{TestLineReader, TestStringWriter, TestVecKeySource},
                KeyCommand,
                Size};

    fn headless() -> TerminalSession<TestStringWriter> {
        TerminalSession::headless(TestStringWriter::new(), Size::new(80, 24))
    }

    #[test]
    fn test_menu_rejects_empty_items() {
        let result = Menu::new(Vec::<Entry>::new(), Position::default(), WidgetOptions::default());
        assert!(matches!(result, Err(SelectorError::InvalidArgument { .. })));
    }

    #[test]
    fn test_menu_remembers_focus() {
        let mut session = headless();
        let mut menu = Menu::new(
            ["Login", "Register", "Settings"],
            Position::new(2, 6),
            WidgetOptions::default(),
        )
        .unwrap();

        let mut keys = TestVecKeySource::new(vec![KeyCommand::Next, KeyCommand::Confirm]);
        assert_eq2!(menu.show(&mut session, &mut keys).unwrap().label, "Register");

        let mut keys = TestVecKeySource::new(vec![KeyCommand::Next, KeyCommand::Confirm]);
        assert_eq2!(menu.show(&mut session, &mut keys).unwrap().label, "Settings");
        assert_eq2!(menu.focus(), 2);

        assert!(!session.is_raw_mode_enabled());
        let buffer = session.output().get_buffer();
        // Fill width pads "Login" to the width of "Settings".
        assert!(buffer.contains("Login   "));
    }

    #[test]
    fn test_menu_page_size_option() {
        let mut session = headless();
        let options = WidgetOptions {
            page_size: Some(2),
            ..Default::default()
        };
        let mut menu = Menu::new(["a", "b", "c", "d"], Position::default(), options).unwrap();
        let mut keys = TestVecKeySource::new(vec![KeyCommand::Confirm]);
        menu.show(&mut session, &mut keys).unwrap();

        let buffer = session.output().get_buffer();
        assert!(buffer.contains('b'));
        assert!(!buffer.contains('c'));
    }

    #[test]
    fn test_select_one_paints_header_above_list() {
        let mut session = headless();
        let mut keys = TestVecKeySource::new(vec![KeyCommand::Next, KeyCommand::Confirm]);
        let selection = select_one(
            &mut session,
            &mut keys,
            "Pick a color",
            ["red", "green"],
            Position::new(0, 3),
            WidgetOptions::default(),
        )
        .unwrap();

        assert_eq2!(selection.index, 1);
        assert_eq2!(selection.label, "green");

        let buffer = session.output().get_buffer();
        // Header on row 3, first item on row 4 (1 based on the wire).
        assert!(buffer.starts_with("\x1b[4;1H"));
        assert!(buffer.contains("Pick a color"));
        assert!(buffer.contains("\x1b[5;1H"));
    }

    #[test]
    fn test_select_one_rejects_empty_items() {
        let mut session = headless();
        let mut keys = TestVecKeySource::new(vec![KeyCommand::Confirm]);
        let report = select_one(
            &mut session,
            &mut keys,
            "header",
            Vec::<Entry>::new(),
            Position::default(),
            WidgetOptions::default(),
        )
        .unwrap_err();
        assert!(report.downcast_ref::<SelectorError>().is_some());
    }

    #[test]
    fn test_confirm() {
        let mut session = headless();

        let mut keys = TestVecKeySource::new(vec![KeyCommand::Confirm]);
        let yes = confirm(&mut session, &mut keys, "Exit?", Position::default(), WidgetOptions::default());
        assert!(yes.unwrap());

        let mut keys = TestVecKeySource::new(vec![KeyCommand::Next, KeyCommand::Confirm]);
        let no = confirm(&mut session, &mut keys, "Exit?", Position::default(), WidgetOptions::default());
        assert!(!no.unwrap());
    }

    #[test]
    fn test_input_form_fills_fields_then_submits() {
        let mut session = headless();
        let mut form = InputForm::new(
            [
                Entry::field("User", "your name"),
                Entry::field("Password", "secret").masked(),
            ],
            "[Submit]",
            Position::new(2, 6),
            WidgetOptions::default(),
        );

        // Edit "User", move to "Password" and edit it, then move to "[Submit]".
        let mut keys = TestVecKeySource::new(vec![
            KeyCommand::Confirm,
            KeyCommand::Next,
            KeyCommand::Confirm,
            KeyCommand::Next,
            KeyCommand::Confirm,
        ]);
        let mut line_reader = TestLineReader::new(["nadia", "hunter2"]);

        let fields = form
            .show(&mut session, &mut keys, &mut line_reader)
            .unwrap();

        assert_eq2!(fields.len(), 2);
        assert_eq2!(form.value_of("User"), Some("nadia"));
        assert_eq2!(form.value_of("Password"), Some("hunter2"));
        assert_eq2!(form.value_of("Email"), None);

        let buffer = session.output().get_buffer();
        assert!(buffer.contains("*******"));
        assert!(!buffer.contains("hunter2"));
        assert!(!session.is_raw_mode_enabled());
    }

    #[test]
    fn test_input_form_items_become_fields() {
        let form = InputForm::new([Entry::item("Name")], "OK", Position::default(), WidgetOptions::default());
        assert!(form.fields()[0].is_field());
        assert_eq2!(form.row_below(), Position::new(0, 2));
    }

    /// Writes the edited row to whatever output it is handed.
    struct EchoLineReader;

    impl LineReader for EchoLineReader {
        fn read_line(
            &mut self,
            output: &mut dyn Write,
            label: &str,
            _current: &str,
            _masked: bool,
        ) -> miette::Result<String> {
            write!(output, "editing {label}").into_diagnostic()?;
            Ok("nadia".to_string())
        }
    }

    #[test]
    fn test_input_form_line_reader_writes_to_session_output() {
        let mut session = headless();
        let mut form = InputForm::new(
            [Entry::field("User", "your name")],
            "[Submit]",
            Position::new(2, 6),
            WidgetOptions::default(),
        );
        let mut keys =
            TestVecKeySource::new(vec![KeyCommand::Confirm, KeyCommand::Next, KeyCommand::Confirm]);

        form.show(&mut session, &mut keys, &mut EchoLineReader).unwrap();

        assert_eq2!(form.value_of("User"), Some("nadia"));
        assert!(session.output().get_buffer().contains("editing User"));
    }
}
