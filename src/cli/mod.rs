use clap::{Parser, Subcommand};

use crate::media::SentMediaQuality;

#[derive(Parser)]
#[command(name = "media-constraints", version, about = "Tier-based media attachment limits")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select a tier from the configured signals and print its constraints.
    Show(ShowOpts),
    /// Print the built-in tier table.
    Tiers,
    /// Print the dimension ladder for a maximum dimension.
    Ladder(LadderOpts),
    Config(ConfigOpts),
    Version,
}

#[derive(clap::Args)]
pub struct ShowOpts {
    #[arg(short, long)]
    pub config: Option<String>,
    /// Sent media quality preference ("standard" or "high").
    #[arg(short, long)]
    pub quality: Option<SentMediaQuality>,
}

#[derive(clap::Args)]
pub struct LadderOpts {
    pub max_dimension: u32,
}

#[derive(clap::Args)]
pub struct ConfigOpts {
    #[arg(short, long)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    Show,
    Validate,
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_show_with_quality() {
        let cli = Cli::try_parse_from(["media-constraints", "show", "--quality", "high"]).unwrap();
        match cli.command {
            Commands::Show(opts) => {
                assert_eq!(opts.quality, Some(SentMediaQuality::High));
                assert!(opts.config.is_none());
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn reject_unknown_quality() {
        assert!(Cli::try_parse_from(["media-constraints", "show", "-q", "ultra"]).is_err());
    }

    #[test]
    fn parse_ladder() {
        let cli = Cli::try_parse_from(["media-constraints", "ladder", "9000"]).unwrap();
        match cli.command {
            Commands::Ladder(opts) => assert_eq!(opts.max_dimension, 9000),
            _ => panic!("expected ladder"),
        }
    }

    #[test]
    fn parse_config_validate() {
        let cli =
            Cli::try_parse_from(["media-constraints", "config", "-c", "x.toml", "validate"])
                .unwrap();
        match cli.command {
            Commands::Config(opts) => {
                assert_eq!(opts.config.as_deref(), Some("x.toml"));
                assert!(matches!(opts.action, ConfigAction::Validate));
            }
            _ => panic!("expected config"),
        }
    }
}
