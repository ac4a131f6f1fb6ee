use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;

/// Bundled player history, embedded at compile time.
const PLAYERS_JSON: &str = include_str!("../data/players.json");

/// One player's entry in the club history.
///
/// Records are immutable: the dataset is parsed once at startup and only
/// ever read after that. `nickname` is the unique identifier used for
/// detail lookups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Player {
    pub nickname: String,
    pub name: String,
    pub country: String,
    pub position: String,
    pub age: u8,
    pub years: Vec<String>,
    pub img: String,
}

impl Player {
    /// Whether this player was on the roster for the given season token.
    pub fn active_in(&self, season: &str) -> bool {
        self.years.iter().any(|y| y == season)
    }
}

/// Parse the bundled dataset, rejecting duplicate nicknames.
pub fn load() -> Result<Vec<Player>> {
    let players: Vec<Player> =
        serde_json::from_str(PLAYERS_JSON).context("failed to parse bundled player data")?;

    let mut seen = HashSet::new();
    for player in &players {
        if !seen.insert(player.nickname.as_str()) {
            bail!("duplicate nickname '{}' in bundled player data", player.nickname);
        }
    }

    Ok(players)
}

/// Look up a player by nickname (case-sensitive, nicknames are exact ids).
pub fn find_by_nickname<'a>(players: &'a [Player], nickname: &str) -> Option<&'a Player> {
    players.iter().find(|p| p.nickname == nickname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seasons;

    #[test]
    fn bundled_data_parses() {
        let players = load().unwrap();
        assert!(!players.is_empty());
    }

    #[test]
    fn nicknames_are_unique() {
        let players = load().unwrap();
        let mut seen = HashSet::new();
        for p in &players {
            assert!(seen.insert(p.nickname.clone()), "duplicate {}", p.nickname);
        }
    }

    #[test]
    fn every_year_token_is_a_known_season() {
        let players = load().unwrap();
        for p in &players {
            for y in &p.years {
                assert!(
                    seasons::ALL.contains(&y.as_str()),
                    "{} lists unknown season {}",
                    p.nickname,
                    y
                );
            }
        }
    }

    #[test]
    fn find_by_nickname_is_exact() {
        let players = load().unwrap();
        assert!(find_by_nickname(&players, "Karde").is_some());
        assert!(find_by_nickname(&players, "karde").is_none());
        assert!(find_by_nickname(&players, "nobody").is_none());
    }

    #[test]
    fn active_in_checks_membership() {
        let p = Player {
            nickname: "x".into(),
            name: "X".into(),
            country: "Sweden".into(),
            position: "AWP".into(),
            age: 20,
            years: vec!["2016.1".into(), "2016.2".into()],
            img: "x".into(),
        };
        assert!(p.active_in("2016.1"));
        assert!(!p.active_in("2018.1"));
    }
}
