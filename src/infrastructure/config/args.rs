use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "conference-planner",
    version,
    about = "Plan a conference budget: venue rooms, add-ons and meals",
    long_about = None
)]
#[allow(missing_docs)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Initial number of attendees.
    #[arg(short, long, value_name = "N", env = "CONFERENCE_PLANNER_PEOPLE")]
    pub people: Option<u32>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = CliArgs::try_parse_from([
            "conference-planner",
            "--people",
            "25",
            "--log-level",
            "warn",
            "-c",
            "/tmp/planner.toml",
        ])
        .unwrap();

        assert_eq!(args.people, Some(25));
        assert_eq!(args.log_level, Some(LogLevel::Warn));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/planner.toml")));
        assert!(args.accent_color.is_none());
    }

    #[test]
    fn test_rejects_negative_people() {
        assert!(CliArgs::try_parse_from(["conference-planner", "--people", "-3"]).is_err());
    }
}
