//! A machine for lifting annotations into chromosome space.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::io::BufRead;

use crate::annotation;
use crate::core::Orientation;
use crate::liftover::transform::Transform;

pub mod builder;

pub use builder::Builder;

/// The placement of a scaffold within its containing chromosome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    /// The chromosome the scaffold was placed into.
    chromosome: String,
    /// The anchor coordinate used to translate scaffold-local coordinates:
    /// the chromosome-space start of the placement for a forward-oriented
    /// scaffold, or the chromosome-space end for a reverse-oriented one.
    offset: u64,
    /// The orientation of the scaffold within the chromosome.
    orientation: Orientation,
}

impl Placement {
    /// Creates a new placement.
    pub(crate) fn new(chromosome: String, offset: u64, orientation: Orientation) -> Self {
        Self {
            chromosome,
            offset,
            orientation,
        }
    }

    /// Returns the chromosome the scaffold was placed into.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Returns the anchor coordinate of the placement.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the orientation of the scaffold within the chromosome.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Projects a 1-based, inclusive scaffold-local interval into chromosome
    /// space.
    ///
    /// [`None`] is returned when the projection would fall below the start of
    /// chromosome space, which can only happen for an interval that does not
    /// actually fit under a reverse-oriented placement.
    pub fn project(&self, start: u64, end: u64) -> Option<(u64, u64)> {
        match self.orientation {
            Orientation::Forward => {
                let new_start = self.offset.checked_add(start)?.checked_sub(1)?;
                let new_end = self.offset.checked_add(end)?.checked_sub(1)?;
                Some((new_start, new_end))
            }
            Orientation::Reverse => {
                let new_start = self.offset.checked_sub(end)?.checked_sub(1)?;
                let new_end = self.offset.checked_sub(start)?.checked_sub(1)?;
                Some((new_start, new_end))
            }
        }
    }
}

/// The chromosome-space extent recorded for a chromosome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Extent {
    /// The start of the extent (1-based, inclusive).
    start: u64,
    /// The end of the extent (1-based, inclusive).
    end: u64,
}

impl Extent {
    /// Creates a new extent.
    pub(crate) fn new(start: u64, end: u64) -> Self {
        Self { start, end }
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

/// A machine for lifting annotation records from scaffold-local coordinates
/// into chromosome-global coordinates.
///
/// The machine is an immutable lookup built once from an assembly map:
/// nothing mutates it after [`Builder::try_build_from`] returns. Generally,
/// you will want to use a [`builder::Builder`] to construct one.
#[derive(Debug)]
pub struct Machine {
    /// The placement of each scaffold, keyed by scaffold identifier.
    placements: HashMap<String, Placement>,
    /// The recorded extent of each chromosome, kept in ascending
    /// lexicographic order of chromosome identifier.
    extents: BTreeMap<String, Extent>,
}

impl Machine {
    /// Looks up the placement of a scaffold.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+";
    /// let reader = agplift::map::Reader::new(&data[..]);
    /// let machine = agplift::liftover::machine::Builder::default().try_build_from(reader)?;
    ///
    /// let placement = machine.placement("scafA").unwrap();
    /// assert_eq!(placement.chromosome(), "chr1");
    /// assert_eq!(placement.offset(), 1);
    ///
    /// assert!(machine.placement("scafZ").is_none());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn placement(&self, scaffold: &str) -> Option<&Placement> {
        self.placements.get(scaffold)
    }

    /// Returns an iterator over every scaffold placement, in arbitrary order.
    pub fn placements(&self) -> impl Iterator<Item = (&str, &Placement)> {
        self.placements
            .iter()
            .map(|(scaffold, placement)| (scaffold.as_str(), placement))
    }

    /// Returns an iterator over the recorded chromosome extents, in ascending
    /// lexicographic order of chromosome identifier.
    pub fn extents(&self) -> impl Iterator<Item = (&str, &Extent)> {
        self.extents
            .iter()
            .map(|(chromosome, extent)| (chromosome.as_str(), extent))
    }

    /// Performs a single forward pass over an annotation stream, lifting each
    /// record into chromosome space.
    ///
    /// The returned [`Transform`] is a lazy iterator over the output lines;
    /// see its documentation for the exact pass semantics. When `debug` is
    /// enabled, records whose seqid has no placement are preceded by a
    /// diagnostic comment.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+";
    /// let reader = agplift::map::Reader::new(&data[..]);
    /// let machine = agplift::liftover::machine::Builder::default().try_build_from(reader)?;
    ///
    /// let gff = b"##gff-version 3\nscafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1";
    /// let annotations = agplift::annotation::Reader::new(&gff[..]);
    ///
    /// let lines = machine
    ///     .transform(annotations, false)
    ///     .collect::<Result<Vec<_>, _>>()?;
    ///
    /// assert_eq!(lines, [
    ///     "##gff-version 3",
    ///     "##sequence-region chr1 1 1000",
    ///     "chr1\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1",
    /// ]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn transform<T>(&self, annotations: annotation::Reader<T>, debug: bool) -> Transform<'_, T>
    where
        T: BufRead,
    {
        Transform::new(self, annotations, debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Reader;

    #[test]
    fn test_forward_projection() -> Result<(), Box<dyn std::error::Error>> {
        let placement = Placement::new(String::from("chr1"), 101, Orientation::Forward);
        assert_eq!(placement.project(10, 50), Some((110, 150)));
        Ok(())
    }

    #[test]
    fn test_reverse_projection() -> Result<(), Box<dyn std::error::Error>> {
        let placement = Placement::new(String::from("chr1"), 1000, Orientation::Reverse);
        assert_eq!(placement.project(10, 50), Some((949, 989)));
        Ok(())
    }

    #[test]
    fn test_reverse_projection_that_does_not_fit() -> Result<(), Box<dyn std::error::Error>> {
        let placement = Placement::new(String::from("chr1"), 100, Orientation::Reverse);
        assert_eq!(placement.project(99, 100), None);
        assert_eq!(placement.project(99, 250), None);
        Ok(())
    }

    #[test]
    fn test_extents_are_sorted_by_chromosome() -> Result<(), Box<dyn std::error::Error>> {
        let data = b"chr2\t1\t500\t1\tW\tscafB\t1\t500\t+\n\
                     chr10\t1\t700\t1\tW\tscafC\t1\t700\t+\n\
                     chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+";
        let reader = Reader::new(&data[..]);
        let machine = Builder::default().try_build_from(reader)?;

        let chromosomes = machine
            .extents()
            .map(|(chromosome, _)| chromosome)
            .collect::<Vec<_>>();

        assert_eq!(chromosomes, ["chr1", "chr10", "chr2"]);

        Ok(())
    }
}
