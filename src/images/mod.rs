//! Contains owned and borrowed containers of image data.
pub use self::image::*;

mod image;

#[cfg(feature = "image")]
mod image_crate;
