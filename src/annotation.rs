//! Facilities for reading annotation streams.

pub mod line;
pub mod reader;
pub mod record;

pub use line::Line;
pub use reader::Reader;
pub use record::Record;
