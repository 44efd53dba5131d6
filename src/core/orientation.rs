//! The orientation of a component within the object that contains it.

/// The orientation of a placed component.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    /// The component is placed in its forward orientation (`+`).
    Forward,
    /// The component is placed in its reverse orientation (`-`).
    Reverse,
}

impl Orientation {
    /// Interprets an assembly map orientation symbol.
    ///
    /// Exactly `-` places a component in its reverse orientation. Every
    /// other symbol the format allows (`+`, `?`, `0`, `na`) is
    /// forward-equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use agplift::core::Orientation;
    ///
    /// assert_eq!(Orientation::from_symbol("-"), Orientation::Reverse);
    /// assert_eq!(Orientation::from_symbol("+"), Orientation::Forward);
    /// assert_eq!(Orientation::from_symbol("?"), Orientation::Forward);
    /// ```
    pub fn from_symbol(symbol: &str) -> Orientation {
        match symbol {
            "-" => Orientation::Reverse,
            _ => Orientation::Forward,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Forward => write!(f, "+"),
            Orientation::Reverse => write!(f, "-"),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_symbol() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Orientation::from_symbol("+"), Orientation::Forward);
        assert_eq!(Orientation::from_symbol("-"), Orientation::Reverse);

        for symbol in ["?", "0", "na"] {
            assert_eq!(Orientation::from_symbol(symbol), Orientation::Forward);
        }

        Ok(())
    }

    #[test]
    fn test_orientation_display() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Orientation::Forward.to_string(), "+");
        assert_eq!(Orientation::Reverse.to_string(), "-");
        Ok(())
    }
}
