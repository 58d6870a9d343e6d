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

use crossterm::style::{Attribute, Attributes, SetAttribute, SetAttributes};

/// Pick the `on` or `off` variant of an attribute. Every attribute is always set one way
/// or the other, so a style never inherits an attribute from the previous row.
#[must_use]
pub fn set_attribute(enabled: bool, on: Attribute, off: Attribute) -> SetAttribute {
    if enabled { SetAttribute(on) } else { SetAttribute(off) }
}

/// Bold and dim share one "off" code (`NormalIntensity`), so they are set together.
/// Intensity is reset only when neither is on.
#[must_use]
pub fn set_intensity(bold: bool, dim: bool) -> SetAttributes {
    if !bold && !dim {
        return SetAttributes(Attributes::from(Attribute::NormalIntensity));
    }
    let mut attributes = Attributes::default();
    if bold {
        attributes.set(Attribute::Bold);
    }
    if dim {
        attributes.set(Attribute::Dim);
    }
    SetAttributes(attributes)
}

/// Turn one field of a [`crate::Style`] into a crossterm command that can be queued.
/// Missing colors turn into [`crossterm::style::Color::Reset`]. The `intensity` arm
/// covers both `bold` and `dim`.
#[macro_export]
macro_rules! apply_style {
    ($style: expr => bg_color) => {
        ::crossterm::style::SetBackgroundColor(
            $style.bg.unwrap_or(::crossterm::style::Color::Reset),
        )
    };
    ($style: expr => fg_color) => {
        ::crossterm::style::SetForegroundColor(
            $style.fg.unwrap_or(::crossterm::style::Color::Reset),
        )
    };
    ($style: expr => intensity) => {
        $crate::set_intensity($style.bold, $style.dim)
    };
    ($style: expr => italic) => {
        $crate::set_attribute(
            $style.italic,
            ::crossterm::style::Attribute::Italic,
            ::crossterm::style::Attribute::NoItalic,
        )
    };
    ($style: expr => underline) => {
        $crate::set_attribute(
            $style.underline,
            ::crossterm::style::Attribute::Underlined,
            ::crossterm::style::Attribute::NoUnderline,
        )
    };
    ($style: expr => reverse) => {
        $crate::set_attribute(
            $style.reverse,
            ::crossterm::style::Attribute::Reverse,
            ::crossterm::style::Attribute::NoReverse,
        )
    };
}

#[cfg(test)]
mod tests {
    use crossterm::style::{Color, SetBackgroundColor, SetForegroundColor};

    use super::*;
    use crate::{queue_commands_no_lock, test_utils::TestStringWriter, Style};

    fn queued_intensity(style: Style) -> miette::Result<String> {
        let output = &mut TestStringWriter::new();
        queue_commands_no_lock!(output, apply_style!(style => intensity));
        Ok(output.get_buffer().to_string())
    }

    #[test]
    fn test_set_attribute() {
        assert_eq2!(
            set_attribute(true, Attribute::Bold, Attribute::NormalIntensity),
            SetAttribute(Attribute::Bold)
        );
        assert_eq2!(
            set_attribute(false, Attribute::Bold, Attribute::NormalIntensity),
            SetAttribute(Attribute::NormalIntensity)
        );
    }

    #[test]
    fn test_apply_style_colors() {
        let style = Style {
            fg: Some(Color::Cyan),
            ..Default::default()
        };
        assert_eq2!(
            apply_style!(style => fg_color),
            SetForegroundColor(Color::Cyan)
        );
        assert_eq2!(
            apply_style!(style => bg_color),
            SetBackgroundColor(Color::Reset)
        );
        assert_eq2!(
            apply_style!(style => reverse),
            SetAttribute(Attribute::NoReverse)
        );
    }

    #[test]
    fn test_bold_is_not_reset_by_dim() {
        let style = Style {
            bold: true,
            ..Default::default()
        };
        assert_eq2!(queued_intensity(style).unwrap(), "\x1b[1m");
    }

    #[test]
    fn test_intensity_combinations() {
        let dim = Style {
            dim: true,
            ..Default::default()
        };
        let both = Style {
            bold: true,
            dim: true,
            ..Default::default()
        };
        assert_eq2!(queued_intensity(Style::default()).unwrap(), "\x1b[22m");
        assert_eq2!(queued_intensity(dim).unwrap(), "\x1b[2m");
        assert_eq2!(queued_intensity(both).unwrap(), "\x1b[1m\x1b[2m");
    }
}
