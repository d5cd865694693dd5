//! Core data types and constants.
//!
//! - [`octet::Octet`]: one byte, with its nibble transforms
//! - [`root::Root`]: the four convergence sentinels
//! - [`reserved::Reserved`]: lifecycle kernel codes
//! - [`constants`]: masks, sentinels and level cardinalities

pub mod constants;
pub mod octet;
pub mod reserved;
pub mod root;
