//! SSZ (Simple Serialize) codec and Merkleization engine.
//!
//! Built `no_std` by default; enable the `std` feature (default-on via
//! Cargo) for allocator-backed std environments, or `parallel` for a
//! rayon-backed Merkleization engine.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod basic;
pub use basic::*;

pub mod composite;
pub use composite::*;

pub mod ssz;
pub use ssz::*;

pub mod error;
pub use error::*;

pub mod constants;
pub use constants::*;

pub mod merkleization;
