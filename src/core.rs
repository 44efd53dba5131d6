//! Core functionality used across the crate.

use std::io;
use std::io::BufRead;

pub mod orientation;
pub mod strand;

pub use orientation::Orientation;
pub use strand::Strand;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// Reads a line from a buffered reader.
///
/// This method is adapted from noodles-gtf. I repurposed it because it
/// captures pretty much exactly what I need to do for both of the readers in
/// this crate.
pub(crate) fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
