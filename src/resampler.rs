use crate::box_filter::{self, constant, integer, rgb565};
use crate::images::{Image, ImageRef};
use crate::threading::for_each_band;
use crate::{PixelType, ResampleError, ScaleFactor};

/// What to do with source pixels that are not covered by the box filter
/// because dimensions of the source image are not multiples of ratios.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RemainderPolicy {
    /// Trailing columns and rows of the source image are ignored.
    #[default]
    Truncate,
    /// Return [ResampleError::RemainderPixels].
    Reject,
}

/// Options for resampling.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct ResampleOptions {
    pub remainder: RemainderPolicy,
}

impl ResampleOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set policy for pixels that are not covered by the box filter.
    ///
    /// By default, [RemainderPolicy::Truncate] is used.
    pub fn remainder(mut self, policy: RemainderPolicy) -> Self {
        self.remainder = policy;
        self
    }
}

/// Methods of this structure used to downscale images with box filter.
///
/// Every method allocates and returns a new image. The source image
/// must have [PixelType::U8x3] pixels.
#[derive(Debug, Default, Clone)]
pub struct Resampler {
    pub options: ResampleOptions,
    row_buffer: Vec<u32>,
}

impl Resampler {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_options(options: ResampleOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Downscale the source image into image with size `dst_width`x`dst_height`
    /// and rows placed `dst_stride` bytes apart.
    ///
    /// Ratios of downscaling are calculated with integer division of
    /// source dimensions by destination dimensions. Every pixel of result
    /// is the truncated mean of the corresponding `x_ratio * y_ratio` box
    /// of source pixels.
    pub fn resample_integer_rgb(
        &mut self,
        src_image: &ImageRef,
        dst_width: u32,
        dst_height: u32,
        dst_stride: usize,
    ) -> Result<Image, ResampleError> {
        let scale = self.checked_scale(src_image, dst_width, dst_height)?;
        let mut dst_image = Image::with_stride(dst_width, dst_height, dst_stride, PixelType::U8x3)?;
        for_each_band(&mut dst_image, &mut self.row_buffer, |band, _| {
            integer::resample_rows(src_image, scale, band)
        });
        Ok(dst_image)
    }

    /// Downscale the source image with ratios known at compile time.
    ///
    /// Size of the result is `(width / XR, height / YR)`.
    /// Result is identical to result of [Resampler::resample_integer_rgb]
    /// with the same ratios.
    pub fn resample_const_rgb<const XR: usize, const YR: usize>(
        &mut self,
        src_image: &ImageRef,
        dst_stride: usize,
    ) -> Result<Image, ResampleError> {
        let scale = ScaleFactor::new(
            u32::try_from(XR).map_err(|_| ResampleError::RatioIsTooBig)?,
            u32::try_from(YR).map_err(|_| ResampleError::RatioIsTooBig)?,
        )?;
        self.resample_with_row_buffer(
            src_image,
            scale,
            dst_stride,
            constant::resample_rows::<XR, YR>,
        )
    }

    /// Downscale the source image with the given ratios using the kernel
    /// specialized for these ratios.
    ///
    /// Specialized kernels exist for square ratios from 1 to 8 and for
    /// 1x2, 2x1, 2x4 and 4x2 ratios. Other ratios are processed by
    /// the same algorithm without specialization.
    pub fn resample_fast_rgb(
        &mut self,
        src_image: &ImageRef,
        scale: ScaleFactor,
        dst_stride: usize,
    ) -> Result<Image, ResampleError> {
        match box_filter::specialized_kernel(scale) {
            Some(kernel) => self.resample_with_row_buffer(src_image, scale, dst_stride, kernel),
            None => self.resample_with_row_buffer(
                src_image,
                scale,
                dst_stride,
                move |src, band, row_buffer| {
                    constant::resample_rows_dyn(src, scale, band, row_buffer)
                },
            ),
        }
    }

    /// Same as [Resampler::resample_integer_rgb], but pixels of the result
    /// are packed into [PixelType::Rgb565].
    pub fn resample_integer_rgb565(
        &mut self,
        src_image: &ImageRef,
        dst_width: u32,
        dst_height: u32,
        dst_stride: usize,
    ) -> Result<Image, ResampleError> {
        let scale = self.checked_scale(src_image, dst_width, dst_height)?;
        let mut dst_image =
            Image::with_stride(dst_width, dst_height, dst_stride, PixelType::Rgb565)?;
        for_each_band(&mut dst_image, &mut self.row_buffer, |band, _| {
            rgb565::resample_rows(src_image, scale, band)
        });
        Ok(dst_image)
    }

    fn resample_with_row_buffer<K>(
        &mut self,
        src_image: &ImageRef,
        scale: ScaleFactor,
        dst_stride: usize,
        kernel: K,
    ) -> Result<Image, ResampleError>
    where
        K: Fn(&ImageRef, box_filter::Band, &mut Vec<u32>) + Sync + Send,
    {
        self.check_src_image(src_image)?;
        let (dst_width, dst_height) = scale.dst_size(src_image.width(), src_image.height());
        if dst_width == 0 || dst_height == 0 {
            return Err(ResampleError::InvalidDimension);
        }
        self.check_remainder(src_image, scale)?;
        let mut dst_image = Image::with_stride(dst_width, dst_height, dst_stride, PixelType::U8x3)?;
        for_each_band(&mut dst_image, &mut self.row_buffer, |band, row_buffer| {
            kernel(src_image, band, row_buffer)
        });
        Ok(dst_image)
    }

    fn checked_scale(
        &self,
        src_image: &ImageRef,
        dst_width: u32,
        dst_height: u32,
    ) -> Result<ScaleFactor, ResampleError> {
        self.check_src_image(src_image)?;
        let scale = ScaleFactor::from_sizes(
            src_image.width(),
            src_image.height(),
            dst_width,
            dst_height,
        )?;
        self.check_remainder(src_image, scale)?;
        Ok(scale)
    }

    fn check_src_image(&self, src_image: &ImageRef) -> Result<(), ResampleError> {
        if src_image.pixel_type() != PixelType::U8x3 {
            return Err(ResampleError::UnsupportedPixelType);
        }
        if src_image.width() == 0 || src_image.height() == 0 {
            return Err(ResampleError::InvalidDimension);
        }
        Ok(())
    }

    fn check_remainder(
        &self,
        src_image: &ImageRef,
        scale: ScaleFactor,
    ) -> Result<(), ResampleError> {
        if self.options.remainder == RemainderPolicy::Reject
            && !scale.divides(src_image.width(), src_image.height())
        {
            return Err(ResampleError::RemainderPixels);
        }
        Ok(())
    }
}

/// Shortcut for [Resampler::resample_integer_rgb] with default options.
pub fn resample_integer_rgb(
    src_image: &ImageRef,
    dst_width: u32,
    dst_height: u32,
    dst_stride: usize,
) -> Result<Image, ResampleError> {
    Resampler::new().resample_integer_rgb(src_image, dst_width, dst_height, dst_stride)
}

/// Shortcut for [Resampler::resample_const_rgb] with default options.
pub fn resample_const_rgb<const XR: usize, const YR: usize>(
    src_image: &ImageRef,
    dst_stride: usize,
) -> Result<Image, ResampleError> {
    Resampler::new().resample_const_rgb::<XR, YR>(src_image, dst_stride)
}

/// Shortcut for [Resampler::resample_integer_rgb565] with default options.
pub fn resample_integer_rgb565(
    src_image: &ImageRef,
    dst_width: u32,
    dst_height: u32,
    dst_stride: usize,
) -> Result<Image, ResampleError> {
    Resampler::new().resample_integer_rgb565(src_image, dst_width, dst_height, dst_stride)
}
