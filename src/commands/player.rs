use crate::dataset::{self, Player};
use crate::{formatting, images};
use anyhow::{anyhow, Result};

pub fn run(players: &[Player], nickname: &str) -> Result<()> {
    let player = dataset::find_by_nickname(players, nickname)
        .ok_or_else(|| anyhow!("no player with nickname '{}'", nickname))?;

    let title = &player.nickname;
    println!("\n{}", title);
    println!("{}\n", "=".repeat(title.len()));

    println!("{:<10} {}", "Name", player.name);
    println!("{:<10} {}", "Country", player.country);
    println!("{:<10} {}", "Position", player.position);
    println!("{:<10} {}", "Age", player.age);
    println!("{:<10} {}", "Seasons", formatting::format_years(&player.years));
    println!(
        "{:<10} {}",
        "Portrait",
        images::portrait_path(&player.img).unwrap_or("(none)")
    );

    println!();
    Ok(())
}
