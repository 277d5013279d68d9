use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Decide which component names or object kinds pass an include/exclude filter
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML file with default include/exclude rules
    #[arg(long, global = true, env = "ENTITY_FILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Include/exclude flags shared by the filtering commands
#[derive(Debug, Clone, Default, Args)]
pub struct RuleArgs {
    /// Only keep these names (repeatable, comma-separated)
    #[arg(short, long, value_name = "NAME", value_delimiter = ',')]
    pub include: Vec<String>,

    /// Drop these names (repeatable, comma-separated)
    #[arg(short = 'x', long, value_name = "NAME", value_delimiter = ',')]
    pub exclude: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter component names (exact, case-sensitive)
    Components {
        #[command(flatten)]
        rules: RuleArgs,

        /// Candidate names; read from stdin, one per line, when omitted
        names: Vec<String>,
    },
    /// Filter object kinds (case-insensitive, singular or plural)
    Kinds {
        #[command(flatten)]
        rules: RuleArgs,

        /// Candidate kinds; read from stdin, one per line, when omitted
        names: Vec<String>,
    },
    /// Print the configured rules after validating them
    Show,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_flags_accept_commas_and_repeats() {
        let cli = Cli::try_parse_from([
            "entity-filter",
            "kinds",
            "-i",
            "pod,service",
            "--include",
            "secret",
            "Pod",
        ])
        .unwrap();

        match cli.command {
            Commands::Kinds { rules, names } => {
                assert_eq!(rules.include, vec!["pod", "service", "secret"]);
                assert!(rules.exclude.is_empty());
                assert_eq!(names, vec!["Pod"]);
            }
            _ => panic!("expected kinds command"),
        }
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["entity-filter", "show", "-F", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
