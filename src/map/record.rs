//! An assembly map record.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::core::Orientation;

/// The delimiter for an assembly map record.
const DELIMITER: char = '\t';

/// The component types that denote an assembly gap rather than a placed
/// component.
pub const GAP_COMPONENT_TYPES: [&str; 2] = ["N", "U"];

/// The minimum number of fields needed to classify an assembly map record.
pub const MIN_RECORD_FIELDS: usize = 5;

/// The number of expected fields in a component record.
pub const NUM_COMPONENT_FIELDS: usize = 9;

/// An error related to the parsing of an assembly map record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the record.
    IncorrectNumberOfFields(usize),
    /// An incorrect number of fields in a component record.
    IncorrectNumberOfComponentFields(usize),
    /// An invalid object start.
    InvalidObjectStart(ParseIntError),
    /// An invalid object end.
    InvalidObjectEnd(ParseIntError),
    /// An invalid part number.
    InvalidPartNumber(ParseIntError),
    /// An invalid component start.
    InvalidComponentStart(ParseIntError),
    /// An invalid component end.
    InvalidComponentEnd(ParseIntError),
    /// A gap record where a component record was expected.
    UnexpectedGapRecord,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in assembly map record: expected at least {} fields, \
                 found {} fields",
                MIN_RECORD_FIELDS, n
            ),
            ParseError::IncorrectNumberOfComponentFields(n) => write!(
                f,
                "invalid number of fields in component record: expected {} fields, found {} \
                 fields",
                NUM_COMPONENT_FIELDS, n
            ),
            ParseError::InvalidObjectStart(err) => write!(f, "invalid object start: {}", err),
            ParseError::InvalidObjectEnd(err) => write!(f, "invalid object end: {}", err),
            ParseError::InvalidPartNumber(err) => write!(f, "invalid part number: {}", err),
            ParseError::InvalidComponentStart(err) => write!(f, "invalid component start: {}", err),
            ParseError::InvalidComponentEnd(err) => write!(f, "invalid component end: {}", err),
            ParseError::UnexpectedGapRecord => {
                write!(f, "expected a component record, found a gap record")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A component record: a row that places a scaffold within a chromosome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Component {
    /// The object being assembled (the chromosome).
    object: String,
    /// The start of the placement within the object (1-based, inclusive).
    object_start: u64,
    /// The end of the placement within the object (1-based, inclusive).
    object_end: u64,
    /// The part number of this row within its object.
    part_number: u64,
    /// The component type (any non-gap type, e.g., `W`, `F`, `D`).
    component_type: String,
    /// The identifier of the placed component (the scaffold).
    component_id: String,
    /// The start of the placed portion of the component (1-based, inclusive).
    component_start: u64,
    /// The end of the placed portion of the component (1-based, inclusive).
    component_end: u64,
    /// The orientation of the component within the object.
    orientation: Orientation,
}

impl Component {
    /// Returns the object (chromosome) identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use agplift::map::record::Component;
    ///
    /// let component = "chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+".parse::<Component>()?;
    /// assert_eq!(component.object(), "chr1");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Returns the start of the placement within the object.
    pub fn object_start(&self) -> u64 {
        self.object_start
    }

    /// Returns the end of the placement within the object.
    pub fn object_end(&self) -> u64 {
        self.object_end
    }

    /// Returns the part number of this row within its object.
    pub fn part_number(&self) -> u64 {
        self.part_number
    }

    /// Returns the component type.
    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    /// Returns the identifier of the placed component (the scaffold).
    ///
    /// # Examples
    ///
    /// ```
    /// use agplift::map::record::Component;
    ///
    /// let component = "chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+".parse::<Component>()?;
    /// assert_eq!(component.component_id(), "scafA");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    /// Returns the start of the placed portion of the component.
    pub fn component_start(&self) -> u64 {
        self.component_start
    }

    /// Returns the end of the placed portion of the component.
    pub fn component_end(&self) -> u64 {
        self.component_end
    }

    /// Returns the orientation of the component within the object.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl FromStr for Component {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Record>()? {
            Record::Component(component) => Ok(component),
            Record::Gap(_) => Err(ParseError::UnexpectedGapRecord),
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.object,
            self.object_start,
            self.object_end,
            self.part_number,
            self.component_type,
            self.component_id,
            self.component_start,
            self.component_end,
            self.orientation
        )
    }
}

/// A gap record: a row that describes an assembly gap rather than a placed
/// scaffold.
///
/// Gap rows never contribute a placement or an extent, so everything past the
/// component type is carried verbatim rather than interpreted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Gap {
    /// The object being assembled (the chromosome).
    object: String,
    /// The start of the gap within the object (1-based, inclusive).
    object_start: u64,
    /// The end of the gap within the object (1-based, inclusive).
    object_end: u64,
    /// The part number of this row within its object.
    part_number: u64,
    /// The gap component type (`N` or `U`).
    kind: String,
    /// The remaining fields (gap length, gap type, linkage, evidence).
    rest: Vec<String>,
}

impl Gap {
    /// Returns the object (chromosome) identifier.
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Returns the start of the gap within the object.
    pub fn object_start(&self) -> u64 {
        self.object_start
    }

    /// Returns the end of the gap within the object.
    pub fn object_end(&self) -> u64 {
        self.object_end
    }

    /// Returns the part number of this row within its object.
    pub fn part_number(&self) -> u64 {
        self.part_number
    }

    /// Returns the gap component type (`N` or `U`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the remaining, uninterpreted fields.
    pub fn rest(&self) -> &[String] {
        &self.rest
    }
}

impl std::fmt::Display for Gap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.object, self.object_start, self.object_end, self.part_number, self.kind
        )?;

        for field in &self.rest {
            write!(f, "\t{}", field)?;
        }

        Ok(())
    }
}

/// An assembly map record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Record {
    /// A row that places a scaffold within a chromosome.
    Component(Component),
    /// A row that describes an assembly gap.
    Gap(Gap),
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(DELIMITER).collect::<Vec<_>>();
        if parts.len() < MIN_RECORD_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        let object = parts[0];
        let object_start = parts[1].parse().map_err(ParseError::InvalidObjectStart)?;
        let object_end = parts[2].parse().map_err(ParseError::InvalidObjectEnd)?;
        let part_number = parts[3].parse().map_err(ParseError::InvalidPartNumber)?;
        let component_type = parts[4];

        if GAP_COMPONENT_TYPES.contains(&component_type) {
            return Ok(Record::Gap(Gap {
                object: object.into(),
                object_start,
                object_end,
                part_number,
                kind: component_type.into(),
                rest: parts[MIN_RECORD_FIELDS..]
                    .iter()
                    .map(|field| field.to_string())
                    .collect(),
            }));
        }

        if parts.len() < NUM_COMPONENT_FIELDS {
            return Err(ParseError::IncorrectNumberOfComponentFields(parts.len()));
        }

        Ok(Record::Component(Component {
            object: object.into(),
            object_start,
            object_end,
            part_number,
            component_type: component_type.into(),
            component_id: parts[5].into(),
            component_start: parts[6].parse().map_err(ParseError::InvalidComponentStart)?,
            component_end: parts[7].parse().map_err(ParseError::InvalidComponentEnd)?,
            orientation: Orientation::from_symbol(parts[8]),
        }))
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Record::Component(component) => write!(f, "{}", component),
            Record::Gap(gap) => write!(f, "{}", gap),
        }
    }
}
