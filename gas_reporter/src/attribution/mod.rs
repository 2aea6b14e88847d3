//!
//! The gas attribution to methods and deployments.
//!
//! Creations must be attributed before calls of the same range, since deployment matching
//! fills the code hash index that call resolution reads.
//!

pub mod deployment;
pub mod method;
