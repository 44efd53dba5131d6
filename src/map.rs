//! Facilities for reading assembly maps.

pub mod line;
pub mod reader;
pub mod record;

pub use line::Line;
pub use reader::Reader;
pub use record::Record;
