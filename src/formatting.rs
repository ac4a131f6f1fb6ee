use crate::seasons;

/// Format a player's active seasons for display.
///
/// Each token is mapped through the season label table (raw token when
/// unmapped) and the results are comma-joined.
pub fn format_years(years: &[String]) -> String {
    years
        .iter()
        .map(|y| seasons::label_or_token(y))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_joined_in_order() {
        let years = vec!["2016.1".to_string(), "2016.2".to_string()];
        assert_eq!(format_years(&years), "2016 Spring, 2016 Summer");
    }

    #[test]
    fn unmapped_tokens_pass_through() {
        let years = vec!["2016.1".to_string(), "2031.9".to_string()];
        assert_eq!(format_years(&years), "2016 Spring, 2031.9");
    }

    #[test]
    fn empty_history_is_an_empty_string() {
        assert_eq!(format_years(&[]), "");
    }
}
