//! A sequence-region declaration within an annotation stream header.

use std::sync::LazyLock;

use regex::Regex;

/// The prefix for a sequence-region declaration.
pub const SEQUENCE_REGION_PREFIX: &str = "##sequence-region";

/// The shape of a sequence-region declaration.
static REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##sequence-region\s+(\S+)\s+(\d+)\s+(\d+)\s*$").unwrap());

/// A sequence-region declaration: a header line that states the coordinate
/// extent of a sequence identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SequenceRegion {
    /// The declared sequence identifier.
    seqid: String,
    /// The start of the extent (1-based, inclusive).
    start: u64,
    /// The end of the extent (1-based, inclusive).
    end: u64,
}

impl SequenceRegion {
    /// Creates a new sequence-region declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use agplift::annotation::line::SequenceRegion;
    ///
    /// let region = SequenceRegion::new("chr1", 1, 1000);
    /// assert_eq!(region.to_string(), "##sequence-region chr1 1 1000");
    /// ```
    pub fn new(seqid: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            seqid: seqid.into(),
            start,
            end,
        }
    }

    /// Attempts to parse a sequence-region declaration.
    ///
    /// [`None`] is returned if the line does not have the shape of a
    /// sequence-region declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use agplift::annotation::line::SequenceRegion;
    ///
    /// let region = SequenceRegion::try_parse("##sequence-region chr1 1 1000").unwrap();
    /// assert_eq!(region.seqid(), "chr1");
    ///
    /// assert!(SequenceRegion::try_parse("##sequence-region chr1").is_none());
    /// ```
    pub fn try_parse(s: &str) -> Option<Self> {
        let groups = REGEX.captures(s)?;

        let seqid = groups.get(1).unwrap().as_str().to_string();
        let start = groups.get(2).unwrap().as_str().parse().ok()?;
        let end = groups.get(3).unwrap().as_str().parse().ok()?;

        Some(Self { seqid, start, end })
    }

    /// Returns the declared sequence identifier.
    pub fn seqid(&self) -> &str {
        &self.seqid
    }

    /// Returns the start of the extent (1-based, inclusive).
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Returns the end of the extent (1-based, inclusive).
    pub fn end(&self) -> u64 {
        self.end
    }
}

impl std::fmt::Display for SequenceRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            SEQUENCE_REGION_PREFIX, self.seqid, self.start, self.end
        )
    }
}
