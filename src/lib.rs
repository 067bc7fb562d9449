//! Signed 17.14 fixed-point arithmetic on 32 bit integers.
//!
//! For environments without floating point, such as a kernel scheduler
//! computing load averages and priority decay.
//!
//! [`raw`] holds the primitive operations on the plain `i32` encoding.
//! [`Fixpt`] wraps that encoding into its own type.
//! [`mlfqs`] implements the scheduler formulas on top of it.

#![no_std]
#![forbid(unsafe_code)]

mod fixpt;
pub mod mlfqs;
pub mod raw;

pub use crate::fixpt::Fixpt;
pub use crate::raw::F;

// vim: ts=4 sw=4 expandtab
