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

//! Logging is **DISABLED** by **default**. Nothing is written anywhere until
//! [`try_initialize_logging`] is called with a level other than [`LevelFilter::OFF`].
//! Output goes to a file (and never to the terminal, which the widgets own). To watch
//! the logs while an app runs, use `tail -f log.txt`.

use std::path::{Path, PathBuf};

use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer as _};

pub const LOG_FILE_NAME: &str = "log.txt";

/// Where the subscriber gets installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingScope {
    /// Global default subscriber, which once set, can't be unset or changed. This is
    /// great for apps.
    #[default]
    Global,
    /// Thread local subscriber, which is reset when the returned guard is dropped. This
    /// is great for tests.
    ThreadLocal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level_filter: LevelFilter,
    pub log_file_path: PathBuf,
    pub scope: TracingScope,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            log_file_path: PathBuf::from(LOG_FILE_NAME),
            scope: TracingScope::Global,
        }
    }
}

impl LoggingConfig {
    /// Log everything at `DEBUG` and above to [`LOG_FILE_NAME`] when `enable` is true,
    /// otherwise nothing. This is what the `--enable-logging` flag maps to.
    #[must_use]
    pub fn from_flag(enable: bool) -> Self {
        Self {
            level_filter: if enable {
                LevelFilter::DEBUG
            } else {
                LevelFilter::OFF
            },
            ..Default::default()
        }
    }
}

/// Install a `tracing` subscriber that writes to [`LoggingConfig::log_file_path`].
///
/// # Return
/// 1. `Ok(None)` if the level is [`LevelFilter::OFF`] (nothing is installed), or the
///    scope is [`TracingScope::Global`].
/// 2. `Ok(Some(guard))` for [`TracingScope::ThreadLocal`]. Drop the guard to restore the
///    thread's previous subscriber.
///
/// # Errors
///
/// Returns an error if the log file path has no file name, or if a global subscriber
/// has already been installed.
pub fn try_initialize_logging(config: LoggingConfig) -> miette::Result<Option<DefaultGuard>> {
    // Early return if the level filter is off.
    if config.level_filter == LevelFilter::OFF {
        return Ok(None);
    }

    let file = try_create_file_appender(&config.log_file_path)?;
    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_writer(file)
        .with_filter(config.level_filter);

    let registry = tracing_subscriber::registry().with(layer);
    match config.scope {
        TracingScope::Global => {
            registry.try_init().map_err(|err| {
                miette::miette!("Can't install the global tracing subscriber: {err}")
            })?;
            Ok(None)
        }
        TracingScope::ThreadLocal => Ok(Some(registry.set_default())),
    }
}

/// The file is appended to, and never rotated.
///
/// Note that if you wrap this up in a non blocking writer, it doesn't work, since the
/// widgets block the thread while waiting for input.
fn try_create_file_appender(
    path: &Path,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't use {} as a log file. It needs a file name.",
            path.display()
        )
    })?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_off_installs_nothing() {
        let dir = tempdir().unwrap();
        let log_file_path = dir.path().join("off.log");
        let it = try_initialize_logging(LoggingConfig {
            level_filter: LevelFilter::OFF,
            log_file_path: log_file_path.clone(),
            scope: TracingScope::ThreadLocal,
        })
        .unwrap();
        assert!(it.is_none());
        assert!(!log_file_path.exists());
    }

    #[test]
    fn test_from_flag() {
        assert_eq2!(LoggingConfig::from_flag(false).level_filter, LevelFilter::OFF);
        assert_eq2!(LoggingConfig::from_flag(true).level_filter, LevelFilter::DEBUG);
        assert_eq2!(
            LoggingConfig::from_flag(true).log_file_path,
            PathBuf::from(LOG_FILE_NAME)
        );
    }

    #[test]
    fn test_path_without_file_name_is_an_error() {
        assert!(try_create_file_appender(Path::new("/")).is_err());
    }

    #[serial]
    #[test]
    fn test_thread_local_logging_writes_to_file() {
        let dir = tempdir().unwrap();
        let log_file_path = dir.path().join("scroll_select.log");

        let guard = try_initialize_logging(LoggingConfig {
            level_filter: LevelFilter::DEBUG,
            log_file_path: log_file_path.clone(),
            scope: TracingScope::ThreadLocal,
        })
        .unwrap();
        assert!(guard.is_some());

        tracing::debug!("debug message");
        tracing::trace!("trace message");
        drop(guard);

        let contents = std::fs::read_to_string(&log_file_path).unwrap();
        assert!(contents.contains("debug message"));
        assert!(!contents.contains("trace message"));
    }
}
