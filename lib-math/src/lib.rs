#![cfg_attr(not(test), no_std)]

pub mod vector;
pub use vector::*;


/// Conversion factor from radians to degrees (180 / pi).
pub const RAD_TO_DEG: f32 = 57.29578;
