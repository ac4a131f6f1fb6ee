use crate::dataset::Player;
use crate::{roster, seasons};
use anyhow::Result;

pub fn run(players: &[Player]) -> Result<()> {
    println!("\nKnown Seasons");
    println!("=============\n");

    println!("{:<10} {:<16} Players", "Token", "Label");
    println!("{}", "─".repeat(40));

    for token in seasons::ALL {
        let count = roster::for_season(players, token).len();
        println!("{:<10} {:<16} {}", token, seasons::label_or_token(token), count);
    }

    println!();
    Ok(())
}
