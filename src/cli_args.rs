use clap::{ArgAction, Parser, Subcommand};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "gcai",
    version,
    about = "Generate a commit title and message from your staged changes with a local Ollama model"
)]
pub struct Cli {
    /// Scheme and root path of the Ollama server
    #[arg(short, long, env = "GCAI_ADDRESS", global = true)]
    pub address: Option<String>,

    /// Name of the AI model to use for generating the commit message
    #[arg(short, long, env = "GCAI_MODEL", global = true)]
    pub model: Option<String>,

    /// Style of the commit message, either 'simple', 'conventional' or 'gitmoji'
    #[arg(short, long, env = "GCAI_STYLE", global = true)]
    pub style: Option<String>,

    /// Language in which to generate the commit message, as a locale code
    #[arg(short, long, env = "GCAI_LOCALE", global = true)]
    pub locale: Option<String>,

    /// Request timeout in seconds (no timeout if unset)
    #[arg(long, env = "GCAI_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand (e.g. 'generate')
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands, e.g. `gcai generate`
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a commit title and message for the staged changes
    Generate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gcai", "generate", "-a", "http://host:1", "-m", "mistral", "-s", "gitmoji", "-l", "fr-CA",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Command::Generate)));
        assert_eq!(cli.address.as_deref(), Some("http://host:1"));
        assert_eq!(cli.model.as_deref(), Some("mistral"));
        assert_eq!(cli.style.as_deref(), Some("gitmoji"));
        assert_eq!(cli.locale.as_deref(), Some("fr-CA"));
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["gcai", "-vv", "generate"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
