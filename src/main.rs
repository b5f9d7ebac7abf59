use clap::Parser;
use media_constraints::cli::{Cli, Commands, ConfigAction};
use media_constraints::config::{validate_config_object, validate_tier_table, Config};
use media_constraints::logging;
use media_constraints::media::{image_dimension_ladder, tier_table, PushMediaConstraints};
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(opts) => {
            let (config, source) = Config::load_with_source(opts.config.as_deref())?;
            logging::init_with_config(&config.logging);
            source.log();
            validate_config_object(&config)?;

            let constraints = PushMediaConstraints::new(config.signals, opts.quality);
            info!(
                tier = %constraints.tier(),
                reason = ?constraints.selection_reason(),
                "Resolved media constraints"
            );
            println!("{}", serde_json::to_string_pretty(&constraints.snapshot())?);
        }
        Commands::Tiers => {
            logging::init();
            println!("{}", serde_json::to_string_pretty(tier_table())?);
        }
        Commands::Ladder(opts) => {
            logging::init();
            let ladder = image_dimension_ladder(opts.max_dimension)?;
            println!("{}", serde_json::to_string(&ladder)?);
        }
        Commands::Config(opts) => {
            logging::init();
            let config = Config::load(opts.config.as_deref())?;
            match opts.action {
                ConfigAction::Show => {
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
                ConfigAction::Validate => {
                    validate_config_object(&config)?;
                    let problems = validate_tier_table();
                    if !problems.is_empty() {
                        anyhow::bail!("Tier table is inconsistent:\n{}", problems.join("\n"));
                    }
                    info!("Configuration is valid");
                }
                ConfigAction::Init => {
                    let path = opts
                        .config
                        .as_deref()
                        .unwrap_or(media_constraints::config::DEFAULT_CONFIG_FILE);
                    Config::write_default(path)?;
                    info!("Configuration file created at {path}");
                }
            }
        }
        Commands::Version => {
            println!("media-constraints {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
