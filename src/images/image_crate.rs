use ::image::RgbImage;

use crate::images::{Image, ImageRef};
use crate::{ImageBufferError, PixelType};

impl<'a> ImageRef<'a> {
    /// Borrow pixels of [RgbImage] as a tightly packed [PixelType::U8x3] image.
    pub fn from_rgb_image(image: &'a RgbImage) -> Result<Self, ImageBufferError> {
        Self::new(
            image.width(),
            image.height(),
            image.as_raw().as_slice(),
            PixelType::U8x3,
        )
    }
}

impl<'a> TryFrom<&'a RgbImage> for ImageRef<'a> {
    type Error = ImageBufferError;

    fn try_from(image: &'a RgbImage) -> Result<Self, Self::Error> {
        Self::from_rgb_image(image)
    }
}

impl Image {
    /// Copy pixels of [PixelType::U8x3] image into [RgbImage],
    /// dropping padding bytes of rows.
    ///
    /// Returns `None` for images with other pixel types.
    pub fn to_rgb_image(&self) -> Option<RgbImage> {
        if self.pixel_type() != PixelType::U8x3 {
            return None;
        }
        RgbImage::from_raw(self.width(), self.height(), self.to_tight_vec())
    }
}
