//! Bet-description normalization.
//!
//! Spread bet text arrives as free text like "Dallas Stars +1.5". The only
//! normalization the pairer needs is the team label in front of the signed
//! line, used to tell the two sides of a spread apart when the composite
//! join key alone is ambiguous.

/// Extracts the team label preceding the first sign character.
///
/// Returns the text before the first `+` or `-`, trimmed. When no sign is
/// present the whole trimmed description is the label. This is a
/// best-effort heuristic over the feed's description vocabulary, not a
/// parser.
#[must_use]
pub fn extract_team_name(bet_name: &str) -> &str {
    match bet_name.find(['+', '-']) {
        Some(idx) => bet_name[..idx].trim(),
        None => bet_name.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_label_before_plus() {
        assert_eq!(extract_team_name("Dallas Stars +1.5"), "Dallas Stars");
    }

    #[test]
    fn test_extracts_label_before_minus() {
        assert_eq!(extract_team_name("St. Louis Blues -1.5"), "St. Louis Blues");
    }

    #[test]
    fn test_stops_at_first_sign() {
        // Only the first sign matters, even with a signed line after it.
        assert_eq!(extract_team_name("Utah +1.5 -120"), "Utah");
    }

    #[test]
    fn test_no_sign_returns_whole_label() {
        assert_eq!(extract_team_name("Over 5.5"), "Over 5.5");
    }

    #[test]
    fn test_sign_first_yields_empty_label() {
        assert_eq!(extract_team_name("+1.5"), "");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(extract_team_name("  Boston Bruins  -2.5"), "Boston Bruins");
    }
}
