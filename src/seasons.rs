/// Season selected when neither the config nor the CLI names one.
pub const DEFAULT_SEASON: &str = "2016.1";

/// Every season token the club has a roster for, in chronological order.
pub const ALL: &[&str] = &["2016.1", "2016.2", "2016.3", "2017.1", "2017.2", "2018.1"];

/// Map a season token to its display label.
pub fn label(token: &str) -> Option<&'static str> {
    match token {
        "2016.1" => Some("2016 Spring"),
        "2016.2" => Some("2016 Summer"),
        "2016.3" => Some("2016 Autumn"),
        "2017.1" => Some("2017 Spring"),
        "2017.2" => Some("2017 Summer"),
        "2018.1" => Some("2018 Spring"),
        _ => None,
    }
}

/// Display label for a token, falling back to the raw token itself.
pub fn label_or_token(token: &str) -> &str {
    label(token).unwrap_or(token)
}

/// Header title shown for a selected season.
pub fn header_title(token: &str) -> String {
    format!("{} Roster", label_or_token(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_season_has_a_label() {
        for token in ALL {
            assert!(label(token).is_some(), "missing label for {}", token);
        }
    }

    #[test]
    fn unknown_token_falls_back_to_itself() {
        assert_eq!(label("2031.9"), None);
        assert_eq!(label_or_token("2031.9"), "2031.9");
    }

    #[test]
    fn header_title_uses_label_when_mapped() {
        assert_eq!(header_title("2016.1"), "2016 Spring Roster");
        assert_eq!(header_title("2031.9"), "2031.9 Roster");
    }
}
