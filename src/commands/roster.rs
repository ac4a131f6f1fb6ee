use crate::dataset::Player;
use crate::{formatting, roster, seasons};
use anyhow::Result;

pub fn run(players: &[Player], season: &str) -> Result<()> {
    let roster = roster::for_season(players, season);
    let title = seasons::header_title(season);

    println!("\n{}", title);
    println!("{}\n", "=".repeat(title.len()));

    if roster.is_empty() {
        println!("No players recorded for {}.\n", seasons::label_or_token(season));
        return Ok(());
    }

    println!(
        "{:<12} {:<24} {:<12} {:<9} {:<4} Seasons",
        "Nickname", "Name", "Country", "Position", "Age"
    );
    println!("{}", "─".repeat(100));

    for player in roster {
        println!(
            "{:<12} {:<24} {:<12} {:<9} {:<4} {}",
            player.nickname,
            player.name,
            player.country,
            player.position,
            player.age,
            formatting::format_years(&player.years)
        );
    }

    println!();
    Ok(())
}
