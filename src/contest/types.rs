//! Shared identifiers, result rows and input validation.

/// Identifier of a state or a judge.
pub type Id = u32;

/// Number of states every judge ranks.
pub const RANKING_LEN: usize = 10;

/// One row of a ranked contest result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standing {
    /// State id.
    pub id: Id,
    /// State display name.
    pub name: String,
    /// Final blended score (exactly `0.0` below the zero threshold).
    pub score: f64,
}

/// Returns `true` if `name` consists only of lowercase ASCII letters and
/// spaces. The empty string is accepted.
///
/// ```
/// use songvote::contest::is_valid_name;
///
/// assert!(is_valid_name("united kingdom"));
/// assert!(!is_valid_name("France"));
/// assert!(!is_valid_name("san-marino"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c == ' ' || c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("israel"));
        assert!(is_valid_name("north macedonia"));
        assert!(is_valid_name(" "));
        assert!(is_valid_name(""));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name("Israel"));
        assert!(!is_valid_name("eurovision2024"));
        assert!(!is_valid_name("bosnia\therzegovina"));
        assert!(!is_valid_name("österreich"));
    }
}
