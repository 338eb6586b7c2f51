//! Character names and the name grammar.

use core::str::FromStr;

use charforge_core::limits::MAX_NAME_LEN;
use charforge_core::{DomainError, DomainResult, NameViolation, ValueObject};

/// Name given to characters built with default values.
pub const DEFAULT_NAME: &str = "Name";

/// A name that satisfies the character name grammar.
///
/// Accepted names start with an uppercase ASCII letter, hold at most
/// [`MAX_NAME_LEN`] characters, contain only ASCII letters and single spaces,
/// and do not end with a space. Casing after the first letter is free.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterName(String);

impl CharacterName {
    /// Validate `candidate` and wrap it verbatim.
    pub fn parse(candidate: impl Into<String>) -> DomainResult<Self> {
        let candidate = candidate.into();
        check(&candidate).map_err(DomainError::invalid_name)?;
        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CharacterName {
    fn default() -> Self {
        Self(DEFAULT_NAME.to_owned())
    }
}

impl ValueObject for CharacterName {
    type Raw = String;

    fn into_raw(self) -> String {
        self.0
    }
}

impl AsRef<str> for CharacterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CharacterName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for CharacterName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Run the name rules in order and report the first one broken.
pub fn check(candidate: &str) -> Result<(), NameViolation> {
    let Some(first) = candidate.chars().next() else {
        return Err(NameViolation::Empty);
    };
    if !first.is_ascii_uppercase() {
        return Err(NameViolation::NotCapitalized);
    }

    let len = candidate.chars().count();
    if len > MAX_NAME_LEN {
        return Err(NameViolation::TooLong {
            max: MAX_NAME_LEN,
            actual: len,
        });
    }

    if candidate.ends_with(' ') {
        return Err(NameViolation::TrailingSpace);
    }

    if let Some((position, ch)) = candidate
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphabetic() && *ch != ' ')
    {
        return Err(NameViolation::InvalidCharacter { ch, position });
    }

    // Only ASCII remains at this point, so byte offsets are character offsets.
    if let Some(offset) = candidate.as_bytes().windows(2).position(|w| w == b"  ") {
        return Err(NameViolation::ConsecutiveSpaces {
            position: offset + 1,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_verbatim() {
        for candidate in ["B", "Jack", "Leonardo da Vinci", "McDONALD", "A b C d"] {
            let name = CharacterName::parse(candidate).unwrap();
            assert_eq!(name.as_str(), candidate);
        }
    }

    #[test]
    fn default_name_is_valid() {
        assert_eq!(check(DEFAULT_NAME), Ok(()));
        assert_eq!(CharacterName::default().as_str(), "Name");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(check(""), Err(NameViolation::Empty));
    }

    #[test]
    fn rejects_lowercase_or_symbol_start() {
        assert_eq!(check("jack"), Err(NameViolation::NotCapitalized));
        assert_eq!(check(" Jack"), Err(NameViolation::NotCapitalized));
        assert_eq!(check("1Jack"), Err(NameViolation::NotCapitalized));
        assert_eq!(check("Émile"), Err(NameViolation::NotCapitalized));
    }

    #[test]
    fn length_limit_is_inclusive() {
        let at_limit = format!("A{}", "b".repeat(MAX_NAME_LEN - 1));
        assert_eq!(check(&at_limit), Ok(()));

        let over = format!("A{}", "b".repeat(MAX_NAME_LEN));
        assert_eq!(
            check(&over),
            Err(NameViolation::TooLong {
                max: MAX_NAME_LEN,
                actual: MAX_NAME_LEN + 1
            })
        );
    }

    #[test]
    fn rejects_trailing_space() {
        assert_eq!(check("Jack "), Err(NameViolation::TrailingSpace));
        assert_eq!(check("J  "), Err(NameViolation::TrailingSpace));
    }

    #[test]
    fn rejects_non_letters() {
        assert_eq!(
            check("Jack2"),
            Err(NameViolation::InvalidCharacter { ch: '2', position: 4 })
        );
        assert_eq!(
            check("Jean-Luc"),
            Err(NameViolation::InvalidCharacter { ch: '-', position: 4 })
        );
        assert_eq!(
            check("Jack\tB"),
            Err(NameViolation::InvalidCharacter { ch: '\t', position: 4 })
        );
        assert_eq!(
            check("Zoë"),
            Err(NameViolation::InvalidCharacter { ch: 'ë', position: 2 })
        );
    }

    #[test]
    fn rejects_consecutive_spaces() {
        assert_eq!(
            check("Jack  B"),
            Err(NameViolation::ConsecutiveSpaces { position: 5 })
        );
    }

    #[test]
    fn parse_wraps_violation_in_domain_error() {
        let err = CharacterName::parse("").unwrap_err();
        assert_eq!(err, DomainError::InvalidName(NameViolation::Empty));
        assert!("bad".parse::<CharacterName>().is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: whatever the grammar accepts has the documented shape.
            #[test]
            fn accepted_names_have_expected_shape(candidate in "[A-Za-z ]{0,40}|.{0,40}") {
                if let Ok(name) = CharacterName::parse(candidate.clone()) {
                    let s = name.as_str();
                    prop_assert!(!s.is_empty());
                    prop_assert!(s.chars().next().unwrap().is_ascii_uppercase());
                    prop_assert!(s.chars().count() <= MAX_NAME_LEN);
                    prop_assert!(!s.ends_with(' '));
                    prop_assert!(s.chars().all(|c| c.is_ascii_alphabetic() || c == ' '));
                    prop_assert!(!s.contains("  "));
                    prop_assert_eq!(s, candidate.as_str());
                }
            }

            /// Property: well-formed names are always accepted.
            #[test]
            fn well_formed_names_are_accepted(
                head in "[A-Z]",
                words in prop::collection::vec("[a-zA-Z]{1,4}", 0..6)
            ) {
                let mut candidate = head;
                for word in &words {
                    candidate.push(' ');
                    candidate.push_str(word);
                }
                prop_assume!(candidate.len() <= MAX_NAME_LEN);
                prop_assert_eq!(check(&candidate), Ok(()));
            }
        }
    }
}
