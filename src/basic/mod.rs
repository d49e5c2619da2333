//! Basic codec (C2): integers, booleans.

pub mod boolean;
pub mod uint;
