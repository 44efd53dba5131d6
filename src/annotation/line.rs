//! A line within an annotation stream.

use std::str::FromStr;

use crate::annotation::record;
use crate::annotation::record::Record;

pub mod sequence_region;

pub use sequence_region::SequenceRegion;

/// The prefix for a header line.
pub const HEADER_PREFIX: &str = "##";

/// An error associated with parsing a line within an annotation stream.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid feature record.
    InvalidRecord(record::ParseError, String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidRecord(err, line) => {
                write!(f, "invalid feature record: {}\n\nline: {}", err, line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A line within an annotation stream.
///
/// A header line is any line prefixed by `##`. A header line with the shape
/// of a sequence-region declaration is parsed as one; every other header
/// line, including a malformed sequence-region declaration, is a generic
/// comment carried verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// A generic header comment.
    Comment(String),
    /// A sequence-region declaration.
    SequenceRegion(SequenceRegion),
    /// A feature record.
    Record(Record),
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Comment(comment) => write!(f, "{}", comment),
            Line::SequenceRegion(region) => write!(f, "{}", region),
            Line::Record(record) => write!(f, "{}", record),
        }
    }
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with(HEADER_PREFIX) {
            match SequenceRegion::try_parse(s) {
                Some(region) => Ok(Line::SequenceRegion(region)),
                None => Ok(Line::Comment(s.into())),
            }
        } else {
            s.parse::<Record>()
                .map(Line::Record)
                .map_err(|e| ParseError::InvalidRecord(e, s.into()))
        }
    }
}
