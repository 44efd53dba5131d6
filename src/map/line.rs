//! A line within an assembly map.

use std::str::FromStr;

use crate::map::record;
use crate::map::record::Record;

/// The prefix for a comment line.
pub const COMMENT_PREFIX: char = '#';

/// An error associated with parsing a line within an assembly map.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid assembly map record.
    InvalidRecord(record::ParseError, String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidRecord(err, line) => {
                write!(f, "invalid assembly map record: {}\n\nline: {}", err, line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A line within an assembly map.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// An empty line.
    Empty,
    /// A comment line.
    Comment(String),
    /// An assembly map record.
    Record(Record),
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Empty => write!(f, ""),
            Line::Comment(comment) => write!(f, "{}", comment),
            Line::Record(record) => write!(f, "{}", record),
        }
    }
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Ok(Self::Empty)
        } else if s.starts_with(COMMENT_PREFIX) {
            Ok(Self::Comment(s.into()))
        } else {
            s.parse::<Record>()
                .map(Line::Record)
                .map_err(|e| ParseError::InvalidRecord(e, s.into()))
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_valid_component_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+".parse::<Line>()?;
        assert!(matches!(line, Line::Record(Record::Component(_))));
        Ok(())
    }

    #[test]
    pub fn test_valid_gap_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "chr1\t1001\t1100\t2\tN\t100\tscaffold\tyes\tna".parse::<Line>()?;
        assert!(matches!(line, Line::Record(Record::Gap(_))));
        Ok(())
    }

    #[test]
    pub fn test_comment_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "##agp-version 2.1".parse::<Line>()?;
        assert_eq!(line, Line::Comment(String::from("##agp-version 2.1")));
        Ok(())
    }

    #[test]
    pub fn test_empty_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "".parse::<Line>()?;
        assert_eq!(line, Line::Empty);
        Ok(())
    }

    #[test]
    pub fn test_invalid_record_line() -> Result<(), Box<dyn std::error::Error>> {
        let err = "chr1\t1\t1000".parse::<Line>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid assembly map record: invalid number of fields in assembly map record: \
             expected at least 5 fields, found 3 fields\n\nline: chr1\t1\t1000"
        );
        Ok(())
    }

    #[test]
    pub fn test_line_display() -> Result<(), Box<dyn std::error::Error>> {
        let raw = "chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+";
        assert_eq!(raw.parse::<Line>()?.to_string(), raw);
        Ok(())
    }
}
