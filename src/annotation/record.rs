//! A feature record within an annotation stream.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::core::Strand;

/// The delimiter for a feature record.
const DELIMITER: char = '\t';

/// The minimum number of expected fields in a feature record.
pub const NUM_REQUIRED_FIELDS: usize = 7;

/// An error related to the parsing of a feature record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the record.
    IncorrectNumberOfFields(usize),
    /// An invalid start position.
    InvalidStart(ParseIntError),
    /// An invalid end position.
    InvalidEnd(ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in feature record: expected at least {} fields, found \
                 {} fields",
                NUM_REQUIRED_FIELDS, n
            ),
            ParseError::InvalidStart(err) => write!(f, "invalid start position: {}", err),
            ParseError::InvalidEnd(err) => write!(f, "invalid end position: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

/// A feature record within an annotation stream.
///
/// The first seven fields are required and validated; everything past the
/// strand (phase, attributes, and any extra columns) is carried verbatim and
/// passes through the transformation untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The identifier of the sequence the feature is located on.
    seqid: String,
    /// The source of the feature.
    source: String,
    /// The feature type.
    feature: String,
    /// The start position (1-based, inclusive).
    start: u64,
    /// The end position (1-based, inclusive).
    end: u64,
    /// The score, carried verbatim.
    score: String,
    /// The strand of the feature.
    strand: Strand,
    /// The remaining fields (phase, attributes, and any extra columns).
    rest: Vec<String>,
}

impl Record {
    /// Returns the identifier of the sequence the feature is located on.
    ///
    /// # Examples
    ///
    /// ```
    /// use agplift::annotation::Record;
    ///
    /// let record = "scafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1".parse::<Record>()?;
    /// assert_eq!(record.seqid(), "scafA");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn seqid(&self) -> &str {
        &self.seqid
    }

    /// Returns the source of the feature.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the feature type.
    pub fn feature(&self) -> &str {
        &self.feature
    }

    /// Returns the start position (1-based, inclusive).
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Returns the end position (1-based, inclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Returns the score.
    pub fn score(&self) -> &str {
        &self.score
    }

    /// Returns the strand of the feature.
    pub fn strand(&self) -> &Strand {
        &self.strand
    }

    /// Returns the remaining, verbatim fields.
    pub fn rest(&self) -> &[String] {
        &self.rest
    }

    /// Re-anchors the record onto another sequence with the provided
    /// coordinates and strand, leaving every other field untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use agplift::annotation::Record;
    /// use agplift::core::Strand;
    ///
    /// let record = "scafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1".parse::<Record>()?;
    /// let record = record.reanchor("chr1", 110, 150, Strand::Positive);
    ///
    /// assert_eq!(record.to_string(), "chr1\tsrc\tgene\t110\t150\t.\t+\t.\tID=g1");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn reanchor(self, seqid: impl Into<String>, start: u64, end: u64, strand: Strand) -> Record {
        Record {
            seqid: seqid.into(),
            start,
            end,
            strand,
            ..self
        }
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(DELIMITER).collect::<Vec<_>>();
        if parts.len() < NUM_REQUIRED_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        Ok(Record {
            seqid: parts[0].into(),
            source: parts[1].into(),
            feature: parts[2].into(),
            start: parts[3].parse().map_err(ParseError::InvalidStart)?,
            end: parts[4].parse().map_err(ParseError::InvalidEnd)?,
            score: parts[5].into(),
            strand: Strand::from(parts[6]),
            rest: parts[NUM_REQUIRED_FIELDS..]
                .iter()
                .map(|field| field.to_string())
                .collect(),
        })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.seqid, self.source, self.feature, self.start, self.end, self.score, self.strand
        )?;

        for field in &self.rest {
            write!(f, "\t{}", field)?;
        }

        Ok(())
    }
}
