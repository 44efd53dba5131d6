//! An annotation stream reader.

use std::io::BufRead;
use std::io::{self};
use std::iter;

use crate::annotation::line;
use crate::annotation::line::Line;
use crate::core;

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// A line error.
    Line(line::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Line(err) => write!(f, "line error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// An annotation stream reader.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates an annotation stream reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"##gff-version 3\nscafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1";
    /// let reader = agplift::annotation::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reads a raw, textual line from the underlying reader.
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        core::read_line(self.inner_mut(), buffer)
    }

    /// Attempts to read a [`Line`] from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use agplift::annotation::Line;
    ///
    /// let data = b"##gff-version 3\nscafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1";
    /// let mut reader = agplift::annotation::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    /// assert!(matches!(
    ///     reader.read_line(&mut buffer)?,
    ///     Some(Line::Comment(_))
    /// ));
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Record(_))));
    /// assert!(matches!(reader.read_line(&mut buffer)?, None));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_line(&mut self, buffer: &mut String) -> Result<Option<Line>, Error> {
        let read = self.read_line_raw(buffer).map_err(Error::Io)?;

        match read {
            0 => Ok(None),
            _ => {
                let line = buffer.parse::<Line>().map_err(Error::Line)?;
                Ok(Some(line))
            }
        }
    }

    /// Returns an iterator over the `Line`s in the underlying reader.
    pub fn lines(&mut self) -> impl Iterator<Item = io::Result<Line>> + '_ {
        let mut buffer = String::new();

        iter::from_fn(move || {
            buffer.clear();

            match self.read_line_raw(&mut buffer) {
                Ok(0) => None,
                Ok(_) => Some(
                    buffer
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
                ),
                Err(e) => Some(Err(e)),
            }
        })
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_a_small_stream() -> Result<(), Box<dyn std::error::Error>> {
        let data = b"##gff-version 3\n##sequence-region scafA 1 1000\nscafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1";
        let mut reader = Reader::new(&data[..]);

        let mut buffer = String::new();
        assert!(matches!(
            reader.read_line(&mut buffer)?,
            Some(Line::Comment(_))
        ));
        assert!(matches!(
            reader.read_line(&mut buffer)?,
            Some(Line::SequenceRegion(_))
        ));
        assert!(matches!(
            reader.read_line(&mut buffer)?,
            Some(Line::Record(_))
        ));
        assert!(matches!(reader.read_line(&mut buffer)?, None));

        Ok(())
    }
}
