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

use crossterm::style::Color;

/// How a single row (or part of a row) is painted. [None] colors mean the terminal's
/// default color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleSheet {
    /// Rows that don't have focus.
    pub normal_style: Style,
    /// The highlight bar.
    pub focused_style: Style,
    /// Placeholder text of empty form fields.
    pub placeholder_style: Style,
    /// The prompt of [`crate::select_one`] and [`crate::question`].
    pub header_style: Style,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let normal_style = Style {
            fg: Some(Color::Rgb {
                r: 200,
                g: 200,
                b: 200,
            }),
            ..Style::default()
        };
        let focused_style = Style {
            fg: Some(Color::Rgb {
                r: 250,
                g: 250,
                b: 250,
            }),
            bg: Some(Color::Rgb {
                r: 39,
                g: 45,
                b: 239,
            }),
            bold: true,
            ..Style::default()
        };
        let placeholder_style = Style {
            fg: Some(Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            }),
            dim: true,
            italic: true,
            ..Style::default()
        };
        let header_style = Style {
            fg: Some(Color::Rgb {
                r: 50,
                g: 50,
                b: 50,
            }),
            bg: Some(Color::Rgb {
                r: 150,
                g: 150,
                b: 150,
            }),
            bold: true,
            ..Style::default()
        };
        StyleSheet {
            normal_style,
            focused_style,
            placeholder_style,
            header_style,
        }
    }
}

impl StyleSheet {
    #[must_use]
    pub fn sea_foam_style() -> Self {
        let normal_style = Style {
            fg: Some(Color::Rgb {
                r: 94,
                g: 186,
                b: 174,
            }),
            ..Style::default()
        };
        let focused_style = Style {
            fg: Some(Color::Rgb {
                r: 19,
                g: 227,
                b: 255,
            }),
            bg: Some(Color::Rgb {
                r: 23,
                g: 52,
                b: 72,
            }),
            bold: true,
            ..Style::default()
        };
        let placeholder_style = Style {
            fg: Some(Color::Rgb {
                r: 110,
                g: 140,
                b: 140,
            }),
            dim: true,
            italic: true,
            ..Style::default()
        };
        let header_style = Style {
            fg: Some(Color::Rgb {
                r: 229,
                g: 239,
                b: 123,
            }),
            bg: Some(Color::Rgb {
                r: 31,
                g: 36,
                b: 46,
            }),
            ..Style::default()
        };
        StyleSheet {
            normal_style,
            focused_style,
            placeholder_style,
            header_style,
        }
    }

    #[must_use]
    pub fn hot_pink_style() -> Self {
        let normal_style = Style {
            fg: Some(Color::Rgb {
                r: 219,
                g: 202,
                b: 232,
            }),
            ..Style::default()
        };
        let focused_style = Style {
            fg: Some(Color::Rgb {
                r: 255,
                g: 0,
                b: 214,
            }),
            bg: Some(Color::Rgb {
                r: 51,
                g: 32,
                b: 66,
            }),
            bold: true,
            ..Style::default()
        };
        let placeholder_style = Style {
            fg: Some(Color::Rgb {
                r: 150,
                g: 120,
                b: 160,
            }),
            dim: true,
            italic: true,
            ..Style::default()
        };
        let header_style = Style {
            fg: Some(Color::Rgb {
                r: 190,
                g: 253,
                b: 249,
            }),
            bg: Some(Color::Rgb {
                r: 31,
                g: 36,
                b: 46,
            }),
            ..Style::default()
        };
        StyleSheet {
            normal_style,
            focused_style,
            placeholder_style,
            header_style,
        }
    }

    /// The style for a row, depending on whether it has focus.
    #[must_use]
    pub fn row_style(&self, focused: bool) -> Style {
        if focused {
            self.focused_style
        } else {
            self.normal_style
        }
    }
}

/// Style presets that can be picked from the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BuiltinStyle {
    #[default]
    Default,
    SeaFoam,
    HotPink,
}

impl From<BuiltinStyle> for StyleSheet {
    fn from(it: BuiltinStyle) -> Self {
        match it {
            BuiltinStyle::Default => StyleSheet::default(),
            BuiltinStyle::SeaFoam => StyleSheet::sea_foam_style(),
            BuiltinStyle::HotPink => StyleSheet::hot_pink_style(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum as _;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_default_theme() {
        let stylesheet = StyleSheet::default();
        assert_eq2!(stylesheet.normal_style.bg, None);
        assert!(stylesheet.focused_style.bold);
        assert!(stylesheet.placeholder_style.dim);
        assert_eq2!(stylesheet.row_style(true), stylesheet.focused_style);
        assert_eq2!(stylesheet.row_style(false), stylesheet.normal_style);
    }

    #[test_case("default", StyleSheet::default())]
    #[test_case("sea-foam", StyleSheet::sea_foam_style())]
    #[test_case("hot-pink", StyleSheet::hot_pink_style())]
    fn test_builtin_style_from_cli_name(name: &str, expected: StyleSheet) {
        let builtin = BuiltinStyle::from_str(name, true).unwrap();
        assert_eq2!(StyleSheet::from(builtin), expected);
    }

    #[test]
    fn test_presets_differ() {
        assert_ne!(StyleSheet::default(), StyleSheet::sea_foam_style());
        assert_ne!(StyleSheet::sea_foam_style(), StyleSheet::hot_pink_style());
    }
}
