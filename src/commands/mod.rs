pub mod player;
pub mod roster;
pub mod seasons;

use crate::config::Config;

/// Resolve the season to display: explicit CLI value, else the configured
/// default. An unknown token is allowed and yields an empty roster.
pub fn resolve_season(cli_season: Option<String>, config: &Config) -> String {
    cli_season.unwrap_or_else(|| config.default_season.clone())
}
