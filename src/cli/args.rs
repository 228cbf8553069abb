use crate::constants::verbosity;
use crate::prompt::FailureMode;
use crate::transform::CaseKind;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for hinted-input.
///
/// Without `--config` or `--message` the demo question is asked.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Question file (`.json`, `.yaml` or `.yml`).
    #[arg(short, long, value_name = "FILE", conflicts_with = "message")]
    pub config: Option<PathBuf>,

    /// Ask a single question with this message.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Default answer for `--message`.
    #[arg(short, long, requires = "message")]
    pub default: Option<String>,

    /// Hint shown under the input while it is empty.
    #[arg(long, requires = "message")]
    pub hint: Option<String>,

    /// Reject empty answers.
    #[arg(short, long, requires = "message")]
    pub required: bool,

    /// Regular expression the answer must match.
    #[arg(short, long, requires = "message")]
    pub pattern: Option<String>,

    /// Display the answer in another case.
    #[arg(short, long, value_enum, requires = "message")]
    pub transform: Option<CaseKind>,

    /// What happens to the typed text after a rejected answer.
    #[arg(long = "failure-mode", value_enum)]
    pub failure_mode: Option<FailureMode>,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Never prompt; answers come from `--answers` or question defaults.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Print all answers as a JSON object.
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_no_args_as_demo() {
        let args = Args::parse_from(["hinted-input"]);
        assert!(args.config.is_none());
        assert!(args.message.is_none());
        assert!(!args.json);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_single_question_flags() {
        let args = Args::parse_from([
            "hinted-input",
            "--message",
            "Project name:",
            "--default",
            "demo",
            "--hint",
            "lowercase only",
            "--required",
            "--pattern",
            "^[a-z]+$",
            "--transform",
            "screaming_snake",
            "--failure-mode",
            "clear",
            "-vv",
        ]);
        assert_eq!(args.message.as_deref(), Some("Project name:"));
        assert_eq!(args.default.as_deref(), Some("demo"));
        assert_eq!(args.hint.as_deref(), Some("lowercase only"));
        assert!(args.required);
        assert_eq!(args.pattern.as_deref(), Some("^[a-z]+$"));
        assert_eq!(args.transform, Some(CaseKind::ScreamingSnake));
        assert_eq!(args.failure_mode, Some(FailureMode::Clear));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn parses_automation_flags() {
        let args = Args::parse_from([
            "hinted-input",
            "--config",
            "questions.yaml",
            "--answers",
            "{\"name\":\"John\"}",
            "--non-interactive",
            "--json",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("questions.yaml")));
        assert_eq!(args.answers, Some("{\"name\":\"John\"}".to_string()));
        assert!(args.non_interactive);
        assert!(args.json);
    }

    #[test]
    fn rejects_config_with_message() {
        let result =
            Args::try_parse_from(["hinted-input", "--config", "q.yaml", "--message", "Name:"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_question_flags_without_message() {
        assert!(Args::try_parse_from(["hinted-input", "--required"]).is_err());
    }
}
