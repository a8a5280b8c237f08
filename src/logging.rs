//! Logging sink and platform logger installation.

use log::Level;

use crate::config::LoggingConfig;

/// Receives `(level, tag, message)` entries from the bridge.
pub trait LogSink: Send + Sync {
    fn log(&self, level: Level, tag: &str, message: &str);
}

/// Forwards entries to the `log` facade, using the tag as the record target.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeSink;

impl LogSink for FacadeSink {
    fn log(&self, level: Level, tag: &str, message: &str) {
        log::log!(target: tag, level, "{message}");
    }
}

/// Installs the platform logger. Only the first call has any effect.
#[cfg(target_os = "android")]
pub fn install(config: &LoggingConfig) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(config.max_level)
            .with_tag(config.tag()),
    );
}

/// Installs the platform logger. Only the first call has any effect; a logger
/// the host already set up is left in place.
///
/// Lines are prefixed with the configured tag, the way logcat shows it.
#[cfg(not(target_os = "android"))]
pub fn install(config: &LoggingConfig) {
    use std::io::Write;

    let tag = config.tag().to_owned();
    let result = pretty_env_logger::formatted_builder()
        .format(move |buf, record| {
            writeln!(
                buf,
                "{}",
                render_line(&tag, record.level(), record.target(), record.args())
            )
        })
        .filter_level(config.max_level)
        .parse_default_env()
        .try_init();
    if result.is_err() {
        log::debug!("logger already installed, keeping it");
    }
}

#[cfg(not(target_os = "android"))]
fn render_line(tag: &str, level: Level, target: &str, args: &std::fmt::Arguments) -> String {
    format!("{level:<5} {tag}/{target} > {args}")
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use log::Level;

    use super::LogSink;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct Entry {
        pub level: Level,
        pub tag: String,
        pub message: String,
    }

    /// Keeps every entry in memory.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        entries: Mutex<Vec<Entry>>,
    }

    impl RecordingSink {
        pub(crate) fn entries(&self) -> Vec<Entry> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl LogSink for RecordingSink {
        fn log(&self, level: Level, tag: &str, message: &str) {
            self.entries.lock().unwrap().push(Entry {
                level,
                tag: tag.to_owned(),
                message: message.to_owned(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::default();
        sink.log(Level::Warn, "a", "first");
        sink.log(Level::Info, "b", "second");

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].level, Level::Info);
        assert_eq!(entries[1].tag, "b");
    }

    #[cfg(not(target_os = "android"))]
    #[test]
    fn desktop_lines_carry_configured_tag() {
        let line = render_line("app", Level::Warn, "kmagick-dummy", &format_args!("low ink"));
        assert_eq!(line, "WARN  app/kmagick-dummy > low ink");
    }

    #[cfg(not(feature = "native"))]
    #[cfg(not(target_os = "android"))]
    #[test]
    fn desktop_tag_defaults_to_backend() {
        let config = LoggingConfig::default();
        let line = render_line(config.tag(), Level::Info, "kmagick", &format_args!("loaded"));
        assert_eq!(line, "INFO  kmagick-dummy/kmagick > loaded");
    }

    #[test]
    fn install_twice_is_harmless() {
        let config = LoggingConfig::default();
        install(&config);
        install(&config);
        FacadeSink.log(Level::Warn, "kmagick-test", "still logging");
    }
}
