//! A builder for a [`Machine`].

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::io;
use std::io::BufRead;

use crate::core::Orientation;
use crate::liftover::machine::Extent;
use crate::liftover::machine::Machine;
use crate::liftover::machine::Placement;
use crate::map;
use crate::map::line::Line;
use crate::map::reader;
use crate::map::record::Record;

/// An error related to building a [`Machine`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error while reading the assembly map.
    Io(io::Error),

    /// An invalid line within the assembly map, keyed by its 1-based line
    /// number.
    InvalidLine(usize, map::line::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::InvalidLine(line_no, err) => {
                write!(f, "invalid assembly map line {}: {}", line_no, err)
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Machine`].
#[allow(missing_debug_implementations)]
pub struct Builder;

impl Builder {
    /// Builds a [`Machine`] from an assembly map.
    ///
    /// The assembly map is consumed to completion before the machine is
    /// returned: the resulting lookup is complete and immutable. A scaffold
    /// listed more than once keeps the placement of the last non-gap row
    /// seen, and a chromosome referenced more than once keeps the extent of
    /// the last row seen.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+";
    /// let reader = agplift::map::Reader::new(&data[..]);
    ///
    /// let machine = agplift::liftover::machine::Builder::default().try_build_from(reader)?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build_from<T>(&self, mut reader: map::Reader<T>) -> Result<Machine>
    where
        T: BufRead,
    {
        let mut placements = HashMap::<String, Placement>::new();
        let mut extents = BTreeMap::<String, Extent>::new();

        let mut buffer = String::new();
        let mut line_no = 0usize;

        loop {
            line_no += 1;

            let line = match reader.read_line(&mut buffer) {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(reader::Error::Io(err)) => return Err(Error::Io(err)),
                Err(reader::Error::Line(err)) => return Err(Error::InvalidLine(line_no, err)),
            };

            let component = match line {
                Line::Record(Record::Component(component)) => component,
                // Comments and blank lines carry nothing, and gap rows
                // describe assembly gaps rather than scaffold placements.
                Line::Record(Record::Gap(_)) | Line::Comment(_) | Line::Empty => continue,
            };

            let offset = match component.orientation() {
                Orientation::Forward => component.object_start(),
                Orientation::Reverse => component.object_end(),
            };

            // Later rows win: both inserts deliberately overwrite whatever an
            // earlier row recorded for the same identifier.
            placements.insert(
                component.component_id().to_string(),
                Placement::new(
                    component.object().to_string(),
                    offset,
                    component.orientation(),
                ),
            );

            extents.insert(
                component.object().to_string(),
                Extent::new(component.object_start(), component.object_end()),
            );
        }

        Ok(Machine {
            placements,
            extents,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Reader;

    #[test]
    fn test_building_a_machine() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let data = b"##agp-version 2.1\n\
                     chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+\n\
                     chr1\t1001\t1100\t2\tN\t100\tscaffold\tyes\tpaired-ends\n\
                     chr1\t1101\t1600\t3\tW\tscafB\t1\t500\t-";
        let reader = Reader::new(&data[..]);
        let machine = Builder::default().try_build_from(reader)?;

        let placement = machine.placement("scafA").unwrap();
        assert_eq!(placement.chromosome(), "chr1");
        assert_eq!(placement.offset(), 1);
        assert_eq!(placement.orientation(), Orientation::Forward);

        let placement = machine.placement("scafB").unwrap();
        assert_eq!(placement.chromosome(), "chr1");
        assert_eq!(placement.offset(), 1600);
        assert_eq!(placement.orientation(), Orientation::Reverse);

        let (chromosome, extent) = machine.extents().next().unwrap();
        assert_eq!(chromosome, "chr1");
        assert_eq!(extent.start(), 1101);
        assert_eq!(extent.end(), 1600);

        Ok(())
    }

    #[test]
    fn test_last_row_wins_for_a_repeated_scaffold() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let data = b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+\n\
                     chr2\t1\t500\t1\tW\tscafA\t1\t500\t-";
        let reader = Reader::new(&data[..]);
        let machine = Builder::default().try_build_from(reader)?;

        let placement = machine.placement("scafA").unwrap();
        assert_eq!(placement.chromosome(), "chr2");
        assert_eq!(placement.offset(), 500);
        assert_eq!(placement.orientation(), Orientation::Reverse);

        Ok(())
    }

    #[test]
    fn test_gap_rows_never_place_anything() -> std::result::Result<(), Box<dyn std::error::Error>> {
        // The component id slot of a gap row holds the gap length, but even a
        // gap row that names a real scaffold there must not place it.
        let data = b"chr1\t1\t100\t1\tN\tscafA\tscaffold\tyes\tna";
        let reader = Reader::new(&data[..]);
        let machine = Builder::default().try_build_from(reader)?;

        assert!(machine.placement("scafA").is_none());
        assert_eq!(machine.extents().count(), 0);

        Ok(())
    }

    #[test]
    fn test_forward_equivalent_orientation_symbols() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let data = b"chr1\t11\t1010\t1\tW\tscafA\t1\t1000\t?";
        let reader = Reader::new(&data[..]);
        let machine = Builder::default().try_build_from(reader)?;

        let placement = machine.placement("scafA").unwrap();
        assert_eq!(placement.orientation(), Orientation::Forward);
        assert_eq!(placement.offset(), 11);

        Ok(())
    }

    #[test]
    fn test_malformed_row_aborts_the_build() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let data = b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+\nchr1\t?\t2000";
        let reader = Reader::new(&data[..]);
        let err = Builder::default().try_build_from(reader).unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid assembly map line 2: invalid assembly map record: invalid number of fields \
             in assembly map record: expected at least 5 fields, found 3 fields\n\nline: \
             chr1\t?\t2000"
        );

        Ok(())
    }
}
