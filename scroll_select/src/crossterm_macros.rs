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

/// Queue commands to a writer, without flushing it. The caller owns the writer (it may
/// be a locked [`std::io::Stdout`], or a test buffer), so no lock is taken here. Queue
/// all the commands for a render pass, and flush once at the end, so the output never
/// shows a half painted row.
///
/// Must be used in a function that returns [`miette::Result`].
#[macro_export]
macro_rules! queue_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue(
                $writer,
                $command
            ).into_diagnostic()?;
        )*
    }}
}

/// Same as [`queue_commands_no_lock!`], and then flush the writer.
#[macro_export]
macro_rules! execute_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue(
                $writer,
                $command
            ).into_diagnostic()?;
        )*
        ::std::io::Write::flush($writer).into_diagnostic()?;
    }}
}

#[cfg(test)]
mod tests {
    use crossterm::{cursor::MoveTo, style::Print};

    use crate::test_utils::TestStringWriter;

    fn paint(writer: &mut TestStringWriter) -> miette::Result<()> {
        queue_commands_no_lock!(writer, MoveTo(2, 6), Print("Login"));
        execute_commands_no_lock!(writer, Print("!"));
        Ok(())
    }

    #[test]
    fn test_commands_are_written_in_order() {
        let mut writer = TestStringWriter::new();
        paint(&mut writer).unwrap();
        // MoveTo is 1 based on the wire.
        assert_eq2!(writer.get_buffer(), "\x1b[7;3HLogin!");
    }
}
