#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use errors::*;
pub use images::{aligned_stride, Image, ImageRef};
pub use pixels::{pack_rgb565, unpack_rgb565, PixelType};
pub use resampler::{
    resample_const_rgb, resample_integer_rgb, resample_integer_rgb565, RemainderPolicy,
    ResampleOptions, Resampler,
};
pub use scale::{find_scale, ScaleFactor};

mod box_filter;
mod errors;
pub mod images;
pub mod pixels;
mod resampler;
mod scale;
mod threading;
