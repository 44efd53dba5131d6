//! The strand upon which a feature is located.

/// The strand of a feature record.
///
/// Parsing a strand never fails: `+` and `-` are the two oriented strands,
/// `.` and `?` are the unstranded markers defined by the format, and any
/// other symbol is carried through verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Strand {
    /// The positive strand (`+`).
    Positive,
    /// The negative strand (`-`).
    Negative,
    /// A feature that is not stranded (`.`).
    Unoriented,
    /// A feature whose strand is relevant but unknown (`?`).
    Unknown,
    /// Any other symbol, preserved exactly as it appeared.
    Other(String),
}

impl Strand {
    /// Returns the complement of the strand.
    ///
    /// `+` and `-` swap with one another; every other symbol is left
    /// unchanged, which makes the operation self-inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use agplift::core::Strand;
    ///
    /// assert_eq!(Strand::Positive.complement(), Strand::Negative);
    /// assert_eq!(Strand::Negative.complement(), Strand::Positive);
    /// assert_eq!(Strand::Unoriented.complement(), Strand::Unoriented);
    /// ```
    pub fn complement(self) -> Strand {
        match self {
            Strand::Positive => Strand::Negative,
            Strand::Negative => Strand::Positive,
            strand => strand,
        }
    }
}

impl From<&str> for Strand {
    fn from(s: &str) -> Self {
        match s {
            "+" => Strand::Positive,
            "-" => Strand::Negative,
            "." => Strand::Unoriented,
            "?" => Strand::Unknown,
            symbol => Strand::Other(symbol.into()),
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Positive => write!(f, "+"),
            Strand::Negative => write!(f, "-"),
            Strand::Unoriented => write!(f, "."),
            Strand::Unknown => write!(f, "?"),
            Strand::Other(symbol) => write!(f, "{}", symbol),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_strand_from_symbol() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Strand::from("+"), Strand::Positive);
        assert_eq!(Strand::from("-"), Strand::Negative);
        assert_eq!(Strand::from("."), Strand::Unoriented);
        assert_eq!(Strand::from("?"), Strand::Unknown);
        assert_eq!(Strand::from("*"), Strand::Other(String::from("*")));
        Ok(())
    }

    #[test]
    fn test_strand_display() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Strand::Positive.to_string(), "+");
        assert_eq!(Strand::Negative.to_string(), "-");
        assert_eq!(Strand::Unoriented.to_string(), ".");
        assert_eq!(Strand::Unknown.to_string(), "?");
        assert_eq!(Strand::Other(String::from("*")).to_string(), "*");
        Ok(())
    }

    #[test]
    fn test_complement_is_self_inverse() -> Result<(), Box<dyn std::error::Error>> {
        for symbol in ["+", "-", ".", "?", "*"] {
            let strand = Strand::from(symbol);
            assert_eq!(strand.clone().complement().complement(), strand);
        }

        Ok(())
    }

    #[test]
    fn test_complement_leaves_unoriented_symbols_unchanged()
    -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Strand::Unoriented.complement(), Strand::Unoriented);
        assert_eq!(Strand::Unknown.complement(), Strand::Unknown);
        assert_eq!(
            Strand::Other(String::from("*")).complement(),
            Strand::Other(String::from("*"))
        );
        Ok(())
    }
}
