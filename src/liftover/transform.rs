//! A single forward pass that lifts an annotation stream into chromosome
//! space.

use std::collections::VecDeque;
use std::io;
use std::io::BufRead;

use crate::annotation;
use crate::annotation::line;
use crate::annotation::line::Line;
use crate::annotation::line::SequenceRegion;
use crate::annotation::record::Record;
use crate::core::Orientation;
use crate::liftover::machine::Machine;

/// An error related to a [`Transform`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// An invalid line within the annotation stream, keyed by its 1-based
    /// line number.
    InvalidLine(usize, line::ParseError),

    /// A record whose projected coordinates fall outside chromosome space,
    /// keyed by its 1-based line number.
    OutOfBounds(usize, String, u64, u64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::InvalidLine(line_no, err) => {
                write!(f, "invalid annotation line {}: {}", line_no, err)
            }
            Error::OutOfBounds(line_no, seqid, start, end) => write!(
                f,
                "invalid annotation line {}: {}:{}-{} projects outside of chromosome space",
                line_no, seqid, start, end
            ),
        }
    }
}

impl std::error::Error for Error {}

/// The state of a [`Transform`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Leading header lines are being accumulated; nothing has been emitted
    /// yet.
    AccumulatingHeaders,

    /// The header buffer has been flushed (at most once, on the first
    /// non-header line); every remaining line takes the data path.
    Streaming,
}

/// A single forward pass that lifts an annotation stream into chromosome
/// space.
///
/// A [`Transform`] is a lazy, finite, non-restartable iterator over output
/// lines: it consumes its annotation reader as it goes and fuses after
/// yielding an error. Re-processing a stream requires constructing a new
/// [`Transform`] from a fresh reader.
///
/// Leading header lines (prefixed by `##`) are buffered until the first data
/// line. At that point, the buffered headers are emitted in input order,
/// followed by one synthesized sequence-region declaration per chromosome in
/// ascending lexicographic order. Sequence-region declarations whose seqid
/// the machine can re-anchor are dropped from the buffer, since their
/// chromosome-space replacements are synthesized here. A stream with no
/// header lines at all synthesizes nothing.
///
/// Past that point, every line is a data line: records on an unplaced
/// scaffold pass through byte-identical, and every other record is rewritten
/// into chromosome space.
#[derive(Debug)]
pub struct Transform<'a, T>
where
    T: BufRead,
{
    /// The machine whose placement table drives the pass.
    machine: &'a Machine,
    /// The annotation stream being consumed.
    annotations: annotation::Reader<T>,
    /// Whether to emit a diagnostic comment for records whose seqid has no
    /// placement.
    debug: bool,
    /// The current state of the pass.
    state: State,
    /// Header lines buffered until the first data line.
    headers: Vec<String>,
    /// Whether any header line has been seen. The flush fires only if so.
    seen_header: bool,
    /// Output lines ready to be yielded.
    pending: VecDeque<String>,
    /// Scratch space for the current raw input line.
    buffer: String,
    /// The number of input lines consumed so far.
    line_no: usize,
    /// Whether an error has been yielded.
    errored: bool,
}

impl<'a, T> Transform<'a, T>
where
    T: BufRead,
{
    /// Creates a new transform over an annotation stream.
    pub(crate) fn new(machine: &'a Machine, annotations: annotation::Reader<T>, debug: bool) -> Self {
        Self {
            machine,
            annotations,
            debug,
            state: State::AccumulatingHeaders,
            headers: Vec::new(),
            seen_header: false,
            pending: VecDeque::new(),
            buffer: String::new(),
            line_no: 0,
            errored: false,
        }
    }

    /// Handles a line while leading headers are still being accumulated.
    fn accumulate(&mut self) -> Result<(), Error> {
        let line = self
            .buffer
            .parse::<Line>()
            .map_err(|e| Error::InvalidLine(self.line_no, e))?;

        match line {
            Line::Comment(_) => {
                self.seen_header = true;
                self.headers.push(self.buffer.clone());
            }
            Line::SequenceRegion(region) => {
                self.seen_header = true;

                // A declaration the machine can re-anchor is dropped: its
                // chromosome-space replacement is synthesized at flush time.
                // One it cannot re-anchor is preserved verbatim.
                if self.machine.placement(region.seqid()).is_none() {
                    self.headers.push(self.buffer.clone());
                }
            }
            Line::Record(record) => {
                self.state = State::Streaming;

                if self.seen_header {
                    self.flush_headers();
                }

                let raw = self.buffer.clone();
                self.project(&raw, record)?;
            }
        }

        Ok(())
    }

    /// Queues the one-time header flush: the buffered header lines in input
    /// order, then one synthesized sequence-region declaration per chromosome
    /// extent, in ascending lexicographic order of chromosome identifier.
    fn flush_headers(&mut self) {
        self.pending.extend(self.headers.drain(..));

        for (chromosome, extent) in self.machine.extents() {
            self.pending
                .push_back(SequenceRegion::new(chromosome, extent.start(), extent.end()).to_string());
        }
    }

    /// Handles a line after the header flush point. Header-looking lines are
    /// not re-buffered here; every line takes the data path.
    fn stream(&mut self) -> Result<(), Error> {
        let record = self.buffer.parse::<Record>().map_err(|err| {
            Error::InvalidLine(
                self.line_no,
                line::ParseError::InvalidRecord(err, self.buffer.clone()),
            )
        })?;

        let raw = self.buffer.clone();
        self.project(&raw, record)
    }

    /// Runs a record through the data path, queueing its output.
    fn project(&mut self, raw: &str, record: Record) -> Result<(), Error> {
        let machine: &'a Machine = self.machine;

        let placement = match machine.placement(record.seqid()) {
            Some(placement) => placement,
            None => {
                // A scaffold that was never anchored to a chromosome passes
                // through untouched.
                if self.debug {
                    self.pending
                        .push_back(format!("## agplift: no placement for {}", record.seqid()));
                }

                self.pending.push_back(raw.to_string());
                return Ok(());
            }
        };

        let (start, end) = placement.project(record.start(), record.end()).ok_or_else(|| {
            Error::OutOfBounds(
                self.line_no,
                record.seqid().to_string(),
                record.start(),
                record.end(),
            )
        })?;

        let strand = match placement.orientation() {
            Orientation::Forward => record.strand().clone(),
            Orientation::Reverse => record.strand().clone().complement(),
        };

        let record = record.reanchor(placement.chromosome().to_string(), start, end, strand);
        self.pending.push_back(record.to_string());

        Ok(())
    }
}

impl<'a, T> Iterator for Transform<'a, T>
where
    T: BufRead,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }

            if self.errored {
                return None;
            }

            match self.annotations.read_line_raw(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    self.errored = true;
                    return Some(Err(Error::Io(err)));
                }
            }

            self.line_no += 1;

            let result = match self.state {
                State::AccumulatingHeaders => self.accumulate(),
                State::Streaming => self.stream(),
            };

            if let Err(err) = result {
                self.errored = true;
                return Some(Err(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liftover::machine::Builder;
    use crate::map;

    /// Builds a machine from inline assembly map data.
    fn machine(data: &[u8]) -> Machine {
        let reader = map::Reader::new(data);
        Builder::default().try_build_from(reader).unwrap()
    }

    /// Runs a full pass over inline annotation data.
    fn run(machine: &Machine, gff: &[u8], debug: bool) -> Result<Vec<String>, Error> {
        let annotations = annotation::Reader::new(gff);
        machine.transform(annotations, debug).collect()
    }

    #[test]
    fn test_forward_scaffold() -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+");

        let lines = run(
            &machine,
            b"##gff-version 3\nscafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1",
            false,
        )?;

        assert_eq!(
            lines,
            [
                "##gff-version 3",
                "##sequence-region chr1 1 1000",
                "chr1\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_reverse_scaffold() -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafB\t1\t500\t-");

        let lines = run(
            &machine,
            b"##gff-version 3\nscafB\tsrc\tgene\t10\t50\t.\t+\t.\tID=g2",
            false,
        )?;

        assert_eq!(
            lines,
            [
                "##gff-version 3",
                "##sequence-region chr1 1 1000",
                "chr1\tsrc\tgene\t949\t989\t.\t-\t.\tID=g2",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_reverse_scaffold_flips_the_negative_strand() -> Result<(), Box<dyn std::error::Error>>
    {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafB\t1\t500\t-");

        let lines = run(&machine, b"scafB\tsrc\tgene\t10\t50\t.\t-\t.\tID=g2", false)?;
        assert_eq!(lines, ["chr1\tsrc\tgene\t949\t989\t.\t+\t.\tID=g2"]);

        Ok(())
    }

    #[test]
    fn test_reverse_scaffold_leaves_unoriented_strands_alone()
    -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafB\t1\t500\t-");

        let lines = run(&machine, b"scafB\tsrc\tgene\t10\t50\t.\t.\t.\tID=g2", false)?;
        assert_eq!(lines, ["chr1\tsrc\tgene\t949\t989\t.\t.\t.\tID=g2"]);

        Ok(())
    }

    #[test]
    fn test_no_header_stream_synthesizes_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+");

        let lines = run(&machine, b"scafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1", false)?;
        assert_eq!(lines, ["chr1\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1"]);

        Ok(())
    }

    #[test]
    fn test_synthesized_headers_are_sorted() -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(
            b"chr2\t1\t500\t1\tW\tscafB\t1\t500\t+\n\
              chr10\t1\t700\t1\tW\tscafC\t1\t700\t+\n\
              chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+",
        );

        let lines = run(
            &machine,
            b"##gff-version 3\nscafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1",
            false,
        )?;

        assert_eq!(
            lines,
            [
                "##gff-version 3",
                "##sequence-region chr1 1 1000",
                "##sequence-region chr10 1 700",
                "##sequence-region chr2 1 500",
                "chr1\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_anchored_sequence_region_headers_are_replaced()
    -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+");

        let lines = run(
            &machine,
            b"##sequence-region scafA 1 1000\n\
              ##sequence-region scafZ 1 42\n\
              ##gff-version 3\n\
              scafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1",
            false,
        )?;

        assert_eq!(
            lines,
            [
                "##sequence-region scafZ 1 42",
                "##gff-version 3",
                "##sequence-region chr1 1 1000",
                "chr1\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_flush_fires_even_when_every_header_was_dropped()
    -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+");

        let lines = run(
            &machine,
            b"##sequence-region scafA 1 1000\nscafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1",
            false,
        )?;

        assert_eq!(
            lines,
            [
                "##sequence-region chr1 1 1000",
                "chr1\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_unplaced_scaffolds_pass_through_byte_identical()
    -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+");

        let raw = "scafZ\tsrc\tgene\t5\t7\t.\t*\t.\tID=g3\textra field";
        let lines = run(&machine, raw.as_bytes(), false)?;
        assert_eq!(lines, [raw]);

        Ok(())
    }

    #[test]
    fn test_debug_mode_notes_unplaced_scaffolds() -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+");

        let lines = run(&machine, b"scafZ\tsrc\tgene\t5\t7\t.\t+\t.\tID=g3", true)?;

        assert_eq!(
            lines,
            [
                "## agplift: no placement for scafZ",
                "scafZ\tsrc\tgene\t5\t7\t.\t+\t.\tID=g3",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_late_headers_take_the_data_path() -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+");

        let err = run(
            &machine,
            b"scafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1\n## a late comment",
            false,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid annotation line 2: invalid feature record: invalid number of fields in \
             feature record: expected at least 7 fields, found 1 fields\n\nline: ## a late \
             comment"
        );

        Ok(())
    }

    #[test]
    fn test_output_emitted_before_an_error_is_kept() -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+");

        let annotations = annotation::Reader::new(
            &b"scafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1\nscafA\tsrc"[..],
        );
        let mut transform = machine.transform(annotations, false);

        assert_eq!(
            transform.next().unwrap()?,
            "chr1\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1"
        );
        assert!(transform.next().unwrap().is_err());
        assert!(transform.next().is_none());

        Ok(())
    }

    #[test]
    fn test_record_that_does_not_fit_a_reverse_placement()
    -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t100\t1\tW\tscafR\t1\t100\t-");

        let err = run(&machine, b"scafR\tsrc\tgene\t99\t100\t.\t+\t.\tID=g4", false).unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid annotation line 1: scafR:99-100 projects outside of chromosome space"
        );

        Ok(())
    }

    #[test]
    fn test_malformed_record_aborts_the_pass() -> Result<(), Box<dyn std::error::Error>> {
        let machine = machine(b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+");

        let err = run(&machine, b"##gff-version 3\nscafA\tsrc\tgene", false).unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid annotation line 2: invalid feature record: invalid number of fields in \
             feature record: expected at least 7 fields, found 3 fields\n\nline: \
             scafA\tsrc\tgene"
        );

        Ok(())
    }
}
