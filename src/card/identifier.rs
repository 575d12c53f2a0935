//! Card identifier parsing and normalization.

use crate::utils::config::{ALPHA_MARKER, ALPHA_REPLACEMENT, PROMO_CANONICAL, PROMO_SHORTHAND};
use crate::utils::error::IdentifierError;
use std::fmt;

/// A parsed card identifier
///
/// **Public** - produced by [`CardId::parse`], consumed by the metadata store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardId {
    /// Identifier exactly as written in the collection
    raw: String,

    /// Expansion code exactly as written in the collection (e.g. "A2α", "P-A")
    expansion: String,

    /// Ordinal of the card within its expansion
    number: u32,
}

impl CardId {
    /// Parse an identifier of the form `<expansion>-<number>`
    ///
    /// The last dash-delimited segment is the collection number; everything
    /// before it is the expansion code, so promo ids like `P-A-005` keep
    /// their inner dash.
    ///
    /// # Errors
    /// * `IdentifierError::Malformed` - no dash, empty expansion, or a
    ///   non-integer collection number
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let (expansion, number) = raw.rsplit_once('-').ok_or_else(|| IdentifierError::Malformed {
            identifier: raw.to_string(),
            reason: "missing '-' before collection number".to_string(),
        })?;

        if expansion.is_empty() {
            return Err(IdentifierError::Malformed {
                identifier: raw.to_string(),
                reason: "empty expansion code".to_string(),
            });
        }

        let number = number.parse::<u32>().map_err(|e| IdentifierError::Malformed {
            identifier: raw.to_string(),
            reason: format!("collection number '{}' is not an integer ({})", number, e),
        })?;

        Ok(Self {
            raw: raw.to_string(),
            expansion: expansion.to_string(),
            number,
        })
    }

    /// Expansion code as written in the collection
    pub fn expansion(&self) -> &str {
        &self.expansion
    }

    /// Collection number within the expansion
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Expansion code as the reference dataset spells it
    ///
    /// `A2α` becomes `A2a`, and the promo shorthand `P-A` becomes `PROMO-A`.
    pub fn dataset_expansion(&self) -> String {
        let expansion = normalize_alpha(&self.expansion);
        if expansion == PROMO_SHORTHAND {
            PROMO_CANONICAL.to_string()
        } else {
            expansion
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Expansion part of a raw identifier (everything before the last dash)
///
/// Does not validate the collection number, so it can be used to filter
/// entries before they are parsed. An identifier without a dash has an
/// empty expansion code.
pub fn expansion_code(raw: &str) -> &str {
    raw.rsplit_once('-').map(|(expansion, _)| expansion).unwrap_or("")
}

/// Replace the stylized alpha marker with its ASCII equivalent
pub fn normalize_alpha(expansion: &str) -> String {
    expansion.replace(ALPHA_MARKER, ALPHA_REPLACEMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_identifier() {
        let id = CardId::parse("A1-001").unwrap();
        assert_eq!(id.expansion(), "A1");
        assert_eq!(id.number(), 1);
        assert_eq!(id.dataset_expansion(), "A1");
    }

    #[test]
    fn test_parse_promo_identifier() {
        let id = CardId::parse("P-A-005").unwrap();
        assert_eq!(id.expansion(), "P-A");
        assert_eq!(id.number(), 5);
        assert_eq!(id.dataset_expansion(), "PROMO-A");
    }

    #[test]
    fn test_parse_alpha_identifier() {
        let id = CardId::parse("A2α-010").unwrap();
        assert_eq!(id.expansion(), "A2α");
        assert_eq!(id.dataset_expansion(), "A2a");
    }

    #[test]
    fn test_parse_non_numeric_number() {
        let err = CardId::parse("A1-abc").unwrap_err();
        assert!(err.to_string().contains("A1-abc"));
    }

    #[test]
    fn test_parse_missing_dash() {
        assert!(CardId::parse("A1001").is_err());
        assert!(CardId::parse("-001").is_err());
    }

    #[test]
    fn test_expansion_code() {
        assert_eq!(expansion_code("A1-001"), "A1");
        assert_eq!(expansion_code("P-A-005"), "P-A");
        assert_eq!(expansion_code("A2α-010"), "A2α");
        assert_eq!(expansion_code("nodash"), "");
    }

    #[test]
    fn test_display_keeps_raw_identifier() {
        let id = CardId::parse("A1-7").unwrap();
        assert_eq!(id.number(), 7);
        assert_eq!(id.to_string(), "A1-7");
        assert_eq!(CardId::parse("A2α-010").unwrap().to_string(), "A2α-010");
    }
}
