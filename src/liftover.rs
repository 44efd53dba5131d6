//! Lifting annotations from scaffold space into chromosome space.

pub mod machine;
pub mod transform;

pub use machine::Machine;
pub use transform::Transform;
