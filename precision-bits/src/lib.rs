// MIT/Apache2 License

//! Bit-level building blocks for the `precision` crate. Everything in here works on the raw IEEE-754 layout of
//! `f32` and `f64`: reinterpreting a value as its bit pattern, mapping that bit pattern onto a signed integer
//! whose ordering matches the ordering of the floats, and walking from one representable value to its
//! neighbours.
//!
//! None of this requires `unsafe`; the reinterpretation goes through `to_bits` and `from_bits`.

#![no_std]
#![warn(clippy::pedantic)]

mod codec;
pub use codec::*;

mod navigate;
pub use navigate::*;
