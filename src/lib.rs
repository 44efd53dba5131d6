//! `agplift` is a crate for lifting genomic feature annotations over AGP
//! assembly maps.
//!
//! After scaffolds are ordered and oriented into chromosomes, every
//! annotation file that was produced against the scaffolds still speaks
//! scaffold-local coordinates. This crate re-projects those annotations into
//! chromosome-global coordinates using the assembly map that describes how
//! each scaffold was placed, oriented, and offset within its chromosome.
//!
//! The crate provides two main points of entry:
//!
//! - Parsing and reading assembly maps directly.
//! - Providing a machine for lifting annotation streams into chromosome
//!   space.
//!
//! Since the main purpose of an assembly map in this context is to drive the
//! re-projection, we expect that most users will be interested in the latter
//! functionality. However, we have exposed the former in the event that it is
//! needed for some other purpose.
//!
//! ## Parsing and reading assembly maps
//!
//! If you're interested in reading assembly maps directly, you can use the
//! [`map::Reader`] facility to accomplish that. Each line is parsed into a
//! [`map::Line`]: an empty line, a comment, or a [`map::Record`]. A record is
//! either a component row that places a scaffold within a chromosome or a gap
//! row describing an assembly gap (gap rows never place anything).
//!
//! ```
//! let data = b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+";
//! let mut reader = agplift::map::Reader::new(&data[..]);
//!
//! for result in reader.lines() {
//!     let line = result?;
//!     println!("{}", line);
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Liftover machine
//!
//! Generally, what one _actually_ wants is to re-project an entire annotation
//! stream. To that end, this crate provides the [`liftover::Machine`]
//! facility: an immutable placement table built once from an assembly map via
//! [`liftover::machine::Builder::try_build_from()`] and then shared read-only
//! by any number of passes.
//!
//! [`liftover::Machine::transform()`] performs a single forward pass over an
//! annotation stream. Leading header lines are accumulated and flushed on the
//! first data line, with one synthesized `##sequence-region` declaration per
//! chromosome; each feature record then has its seqid, coordinates, and
//! strand rewritten into chromosome space (records on scaffolds the map never
//! anchored pass through untouched).
//!
//! ```
//! let data = b"chr1\t1\t1000\t1\tW\tscafA\t1\t1000\t+";
//! let reader = agplift::map::Reader::new(&data[..]);
//! let machine = agplift::liftover::machine::Builder::default().try_build_from(reader)?;
//!
//! let gff = b"##gff-version 3\nscafA\tsrc\tgene\t10\t50\t.\t+\t.\tID=g1";
//! let annotations = agplift::annotation::Reader::new(&gff[..]);
//!
//! for result in machine.transform(annotations, false) {
//!     println!("{}", result?);
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod annotation;
pub mod core;
pub mod liftover;
pub mod map;
