//! Game entities module.
//!
//! This module organizes the random generators feeding a level: the flashed
//! coordinate sequence and the interference shape pairs.

pub mod sequence;
pub mod distraction;

pub use sequence::*;
pub use distraction::*;
