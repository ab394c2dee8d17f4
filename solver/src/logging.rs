use chrono::Local;
use colog::format::CologStyle;
use colored::Colorize;
use log::{Level, LevelFilter};

pub struct Logger;

impl Logger {
    /// Install the colored stderr logger. Call once, before anything logs.
    pub fn init(level: LevelFilter) {
        let mut builder: env_logger::Builder = colog::basic_builder();
        builder.format(colog::formatter(TimestampStyle));
        builder.filter(None, level);
        // keep stdout clean for prompts and reports
        builder.target(env_logger::Target::Stderr);
        builder.init();
    }
}

/// colog prefix with a local wall-clock stamp: `12:00:01 [*] message`
struct TimestampStyle;

impl CologStyle for TimestampStyle {
    fn prefix_token(&self, level: &Level) -> String {
        format!(
            "{} {}{}{}",
            Local::now().format("%H:%M:%S").to_string().dimmed(),
            "[".bold(),
            self.level_color(level, self.level_token(level)),
            "]".bold(),
        )
    }
}
