//! Configuration and CLI argument handling

use clap::Parser;

use crate::{
    pomodoro::{DoubleStartPolicy, LongBreakRule},
    tasks::TimerOptions,
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "tomato-timer")]
#[command(about = "A Pomodoro countdown timer with a small HTTP control surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// What Start does while a phase is already counting down
    #[arg(long, value_enum, default_value_t = DoubleStartPolicy::Ignore)]
    pub on_double_start: DoubleStartPolicy,

    /// Which phases after the eighth are long breaks
    #[arg(long, value_enum, default_value_t = LongBreakRule::EveryEighth)]
    pub long_break: LongBreakRule,

    /// Start the first work phase at launch
    #[arg(long)]
    pub autostart: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Timer policies selected on the command line
    pub fn timer_options(&self) -> TimerOptions {
        TimerOptions {
            long_break: self.long_break,
            double_start: self.on_double_start,
            autostart: self.autostart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["tomato-timer"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.on_double_start, DoubleStartPolicy::Ignore);
        assert_eq!(config.long_break, LongBreakRule::EveryEighth);
        assert!(!config.autostart);
    }

    #[test]
    fn policies_from_flags() {
        let config = Config::try_parse_from([
            "tomato-timer",
            "--on-double-start",
            "restart",
            "--long-break",
            "eighth-only",
            "--autostart",
            "-v",
        ])
        .unwrap();

        let options = config.timer_options();
        assert_eq!(options.double_start, DoubleStartPolicy::Restart);
        assert_eq!(options.long_break, LongBreakRule::EighthOnly);
        assert!(options.autostart);
        assert_eq!(config.log_level(), "debug");
    }
}
