#![cfg_attr(not(test), no_std)]

pub mod tilt;
pub use tilt::*;

pub mod complementary;
pub use complementary::*;

#[cfg(test)]
mod tests;
