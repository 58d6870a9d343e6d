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

//! Dashboard demo. Run it with `cargo run --bin simple -- --help` to see the options.

use std::io::Write;

use clap::Parser;
use scroll_select::{confirm,
                    try_initialize_logging,
                    CrosstermKeySource,
                    CrosstermLineReader,
                    Entry,
                    InputForm,
                    KeySource,
                    LoggingConfig,
                    Menu,
                    Position,
                    Style,
                    TerminalSession,
                    WidgetOptions};

const TITLE_ROWS: [&str; 3] = ["============", "   SIMPLE", "============"];
const ABOUT_TEXT: &str = "scroll_select\n\n\
    Keyboard driven menus, lists, questions, and forms for text mode console apps.\n\
    Use Up / Down (or k / j, Shift+Tab / Tab) to move, and Enter to confirm.";

const EXIT_LABEL: &str = "[Exit]";

fn main() -> miette::Result<()> {
    let cli_args = clap_config::CliArgs::parse();

    let _guard = try_initialize_logging(LoggingConfig::from_flag(cli_args.enable_logging))?;
    tracing::debug!(?cli_args, "start");

    let options = WidgetOptions {
        style_sheet: cli_args.style.into(),
        page_size: cli_args.page_size,
        render_config: None,
    };

    let mut session = TerminalSession::stdout();
    let mut keys = CrosstermKeySource;

    let mut dashboard = Menu::new(
        [
            "1. Print \"Hello World\"",
            "2. About",
            "3. Login form",
            "4. Question",
            EXIT_LABEL,
        ],
        Position::new(2, 6),
        options,
    )?;

    let mut login_form = InputForm::new(
        [
            Entry::field("Username", "your email address"),
            Entry::field("Password", "at least 8 characters").masked(),
        ],
        "[Login]",
        Position::new(2, 6),
        options,
    );

    session.clear_screen()?;
    loop {
        paint_title(&mut session, &options)?;

        let selection = dashboard.show(&mut session, &mut keys)?;
        if selection.label == EXIT_LABEL {
            break;
        }

        session.clear_screen()?;
        match selection.index {
            0 => show_text(&mut session, &mut keys, "Hello World")?,
            1 => show_text(&mut session, &mut keys, ABOUT_TEXT)?,
            2 => {
                paint_title(&mut session, &options)?;
                let mut line_reader = CrosstermLineReader::new(login_form.row_below().down(1));
                login_form.show(&mut session, &mut keys, &mut line_reader)?;
                let username = login_form.value_of("Username").unwrap_or_default().to_string();
                session.clear_screen()?;
                show_text(&mut session, &mut keys, &format!("Logged in as: {username}"))?;
            }
            3 => {
                paint_title(&mut session, &options)?;
                let likes_it = confirm(
                    &mut session,
                    &mut keys,
                    "Do you like this demo?",
                    Position::new(2, 6),
                    options,
                )?;
                session.clear_screen()?;
                let answer = if likes_it { "Thank you!" } else { "Sorry to hear that." };
                show_text(&mut session, &mut keys, answer)?;
            }
            _ => {}
        }
        session.clear_screen()?;
    }

    session.clear_screen()?;
    tracing::debug!("stop");
    Ok(())
}

fn paint_title<W: Write>(
    session: &mut TerminalSession<W>,
    options: &WidgetOptions,
) -> miette::Result<()> {
    for (row_offset, text) in TITLE_ROWS.iter().enumerate() {
        session.write_line_at(
            Position::new(2, 2).down(row_offset),
            text,
            options.style_sheet.header_style,
        )?;
    }
    Ok(())
}

/// Print `text` from the top left corner, and wait for a key press. The release of the
/// `Enter` key that opened this screen doesn't close it.
fn show_text<W: Write>(
    session: &mut TerminalSession<W>,
    keys: &mut impl KeySource,
    text: &str,
) -> miette::Result<()> {
    for (row, line) in (0_u16..).zip(text.lines()) {
        session.write_line_at(Position::new(0, row), line, Style::default())?;
    }
    session.with_raw_mode(|_| keys.wait_for_key_press())
}

/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
mod clap_config {
    use clap::Parser;
    use scroll_select::BuiltinStyle;

    #[derive(Debug, Parser)]
    #[command(bin_name = "simple")]
    #[command(about = "Dashboard demo for scroll_select", long_about = None)]
    #[command(version)]
    #[command(next_line_help = true)]
    pub struct CliArgs {
        /// Print debug output to log file (log.txt)
        #[arg(long, short = 'l')]
        pub enable_logging: bool,

        /// Optional maximum number of visible rows in each list
        #[arg(value_name = "rows", long, short = 'p', value_parser = parse_page_size)]
        pub page_size: Option<usize>,

        /// Color scheme
        #[arg(value_name = "style", long, short = 's', value_enum, default_value_t = BuiltinStyle::Default)]
        pub style: BuiltinStyle,
    }

    fn parse_page_size(arg: &str) -> Result<usize, String> {
        match arg.parse::<usize>() {
            Ok(0) => Err("page size must be at least 1".to_string()),
            Ok(it) => Ok(it),
            Err(err) => Err(err.to_string()),
        }
    }
}
