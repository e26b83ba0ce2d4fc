pub mod airfoil;
pub mod algorithms;
pub mod config;
pub mod drawing;
pub mod errors;
pub mod geometry;
pub mod interpolate;
pub mod rib;
pub mod serialize;

pub use errors::{Result, RibError};
