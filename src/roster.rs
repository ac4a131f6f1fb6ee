//! The derived roster: filter the dataset by season, order by position rank.

use crate::dataset::Player;
use crate::positions;

/// Compute the roster for one season.
///
/// Pure function of the dataset and the selected token: players whose
/// `years` contain the token, sorted ascending by position rank. The sort
/// is stable, so players sharing a rank keep their dataset order. An
/// unknown token simply yields an empty roster.
pub fn for_season<'a>(players: &'a [Player], season: &str) -> Vec<&'a Player> {
    let mut selected: Vec<&Player> = players.iter().filter(|p| p.active_in(season)).collect();
    selected.sort_by_key(|p| positions::rank(&p.position));
    selected
}
