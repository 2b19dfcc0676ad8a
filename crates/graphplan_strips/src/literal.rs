//! Fluents and literals.
//!
//! A [`Fluent`] is an atomic proposition. A [`Literal`] pairs a fluent with a
//! polarity; `!literal` yields the same fluent with the opposite polarity.
//!
//! Literals round-trip through strings as `"Fluent"` and `"~Fluent"`, which is
//! also how they appear in JSON problem files.

use core::fmt;
use core::ops::Not;
use core::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ProblemError;

/// Prefix marking a negative literal in its string form.
pub const NEGATION_PREFIX: char = '~';

/// An atomic proposition about the world.
///
/// Internally uses `Arc<str>` so that cloning a fluent (and every literal
/// built from it) is a reference count bump.
///
/// A valid name is non-empty, has no leading or trailing whitespace and does
/// not start with [`NEGATION_PREFIX`]; only such names survive the literal
/// string form. [`Fluent::new`] does not check, [`Fluent::parse`] and
/// deserialization do, and [`Problem::new`](crate::Problem::new) rejects
/// invalid names in the state map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct Fluent(Arc<str>);

impl Fluent {
    /// Creates a fluent from its name without validating it.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Creates a fluent, rejecting names that cannot round-trip through a
    /// literal string.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::InvalidFluent`] for an invalid name.
    pub fn parse(name: impl Into<Arc<str>>) -> Result<Self, ProblemError> {
        let fluent = Self::new(name);
        fluent.validate()?;
        Ok(fluent)
    }

    /// Checks that the name is usable in literal strings.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::InvalidFluent`] for an invalid name.
    pub fn validate(&self) -> Result<(), ProblemError> {
        let name = self.name();
        if name.is_empty() || name.trim() != name || name.starts_with(NEGATION_PREFIX) {
            return Err(ProblemError::InvalidFluent(name.to_string()));
        }
        Ok(())
    }

    /// Returns the fluent name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<String> for Fluent {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}

impl From<&str> for Fluent {
    fn from(name: &str) -> Self {
        Self(name.into())
    }
}

impl From<Fluent> for String {
    fn from(fluent: Fluent) -> Self {
        fluent.0.to_string()
    }
}

impl<'de> Deserialize<'de> for Fluent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(name).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Fluent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fluent in positive or negative polarity.
///
/// Ordering sorts by fluent first, then negative before positive, so both
/// polarities of a fluent sit next to each other in ordered sets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Literal {
    fluent: Fluent,
    positive: bool,
}

impl Literal {
    /// Creates a literal with the given polarity.
    #[must_use]
    pub fn new(fluent: impl Into<Fluent>, positive: bool) -> Self {
        Self {
            fluent: fluent.into(),
            positive,
        }
    }

    /// Creates the positive literal of a fluent.
    #[must_use]
    pub fn positive(fluent: impl Into<Fluent>) -> Self {
        Self::new(fluent, true)
    }

    /// Creates the negative literal of a fluent.
    #[must_use]
    pub fn negative(fluent: impl Into<Fluent>) -> Self {
        Self::new(fluent, false)
    }

    /// Returns the underlying fluent.
    #[must_use]
    pub fn fluent(&self) -> &Fluent {
        &self.fluent
    }

    /// Returns `true` for the positive polarity.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Returns the opposite-polarity literal of the same fluent.
    #[must_use]
    pub fn negation(&self) -> Self {
        Self {
            fluent: self.fluent.clone(),
            positive: !self.positive,
        }
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Literal {
        Literal {
            fluent: self.fluent,
            positive: !self.positive,
        }
    }
}

impl Not for &Literal {
    type Output = Literal;

    fn not(self) -> Literal {
        self.negation()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_positive() {
            write!(f, "{NEGATION_PREFIX}")?;
        }
        write!(f, "{}", self.fluent)
    }
}

impl FromStr for Literal {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (positive, name) = match trimmed.strip_prefix(NEGATION_PREFIX) {
            Some(rest) => (false, rest.trim_start()),
            None => (true, trimmed),
        };
        if name.is_empty() || name.starts_with(NEGATION_PREFIX) {
            return Err(ProblemError::InvalidLiteral(s.to_string()));
        }
        Ok(Self::new(name, positive))
    }
}

impl TryFrom<String> for Literal {
    type Error = ProblemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Literal> for String {
    fn from(literal: Literal) -> Self {
        literal.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_polarity_only() {
        let have = Literal::positive("Have(Cake)");
        let not_have = !have.clone();

        assert!(!not_have.is_positive());
        assert_eq!(not_have.fluent(), have.fluent());
        assert_eq!(!not_have.clone(), have);
        assert_eq!(have.negation(), not_have);
    }

    #[test]
    fn display_uses_tilde_for_negative() {
        assert_eq!(Literal::positive("At(A)").to_string(), "At(A)");
        assert_eq!(Literal::negative("At(A)").to_string(), "~At(A)");
    }

    #[test]
    fn parse_literals() {
        let lit: Literal = "~In(C1, P1)".parse().unwrap();
        assert_eq!(lit, Literal::negative("In(C1, P1)"));

        let lit: Literal = "  At(P1, SFO) ".parse().unwrap();
        assert_eq!(lit, Literal::positive("At(P1, SFO)"));
    }

    #[test]
    fn parse_rejects_empty_and_double_negation() {
        assert!(matches!(
            "".parse::<Literal>(),
            Err(ProblemError::InvalidLiteral(_))
        ));
        assert!(matches!(
            "~".parse::<Literal>(),
            Err(ProblemError::InvalidLiteral(_))
        ));
        assert!(matches!(
            "~~At(A)".parse::<Literal>(),
            Err(ProblemError::InvalidLiteral(_))
        ));
    }

    #[test]
    fn literals_deserialize_from_strings() {
        let lits: Vec<Literal> = serde_json::from_str(r#"["A", "~B"]"#).unwrap();
        assert_eq!(lits, vec![Literal::positive("A"), Literal::negative("B")]);
    }

    #[test]
    fn fluent_names_must_survive_literal_strings() {
        assert!(Fluent::parse("At(A)").is_ok());
        for bad in ["", " B", "B ", "~A"] {
            assert!(
                matches!(Fluent::parse(bad), Err(ProblemError::InvalidFluent(ref n)) if n == bad),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn valid_fluents_round_trip_through_literal_strings() {
        for lit in [Literal::positive("At(P1, SFO)"), Literal::negative("Have(Cake)")] {
            assert!(lit.fluent().validate().is_ok());
            assert_eq!(lit.to_string().parse::<Literal>().unwrap(), lit);
        }
    }

    #[test]
    fn fluent_deserialization_validates_names() {
        let ok: Vec<Fluent> = serde_json::from_str(r#"["A", "In(C1, P1)"]"#).unwrap();
        assert_eq!(ok, vec![Fluent::new("A"), Fluent::new("In(C1, P1)")]);

        assert!(serde_json::from_str::<Fluent>(r#""~A""#).is_err());
        assert!(serde_json::from_str::<Fluent>(r#"" B""#).is_err());
        assert!(serde_json::from_str::<Fluent>(r#""""#).is_err());
    }

    #[test]
    fn polarities_sort_together() {
        let mut lits = vec![
            Literal::positive("B"),
            Literal::positive("A"),
            Literal::negative("A"),
        ];
        lits.sort();
        assert_eq!(
            lits,
            vec![
                Literal::negative("A"),
                Literal::positive("A"),
                Literal::positive("B")
            ]
        );
    }
}
