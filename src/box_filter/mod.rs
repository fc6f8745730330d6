//! Box filter kernels.
//!
//! Every kernel fills a [Band] of rows of the destination image. Bands are
//! independent of each other, so they may be processed in parallel.
use crate::images::ImageRef;
use crate::ScaleFactor;

pub(crate) mod constant;
pub(crate) mod integer;
pub(crate) mod rgb565;

/// Consecutive rows of the destination image.
pub(crate) struct Band<'a> {
    /// Index of the first row of the band inside of the destination image.
    pub first_row: usize,
    /// Width of the destination image in pixels.
    pub width: usize,
    pub stride: usize,
    pub buffer: &'a mut [u8],
}

impl<'a> Band<'a> {
    /// Iterates over `(y, row)` pairs, where `row` contains `row_len`
    /// bytes of pixels of the destination row `y` without padding.
    #[inline]
    pub fn rows_mut(&mut self, row_len: usize) -> impl Iterator<Item = (usize, &mut [u8])> {
        (self.first_row..).zip(
            self.buffer
                .chunks_exact_mut(self.stride)
                .map(move |row| &mut row[..row_len]),
        )
    }
}

/// Signature of kernels that use a row buffer to accumulate sums.
pub(crate) type RowBufferKernel = fn(&ImageRef<'_>, Band<'_>, &mut Vec<u32>);

/// Returns a kernel specialized for the given ratios, if there is one.
pub(crate) fn specialized_kernel(scale: ScaleFactor) -> Option<RowBufferKernel> {
    macro_rules! dispatch_table {
        ($(($x:literal, $y:literal)),+ $(,)?) => {
            match (scale.x_ratio(), scale.y_ratio()) {
                $(($x, $y) => Some(constant::resample_rows::<$x, $y> as RowBufferKernel),)+
                _ => None,
            }
        };
    }

    dispatch_table!(
        (1, 1),
        (2, 2),
        (3, 3),
        (4, 4),
        (5, 5),
        (6, 6),
        (7, 7),
        (8, 8),
        (1, 2),
        (2, 1),
        (2, 4),
        (4, 2),
    )
}

/// Sums components of the box of source pixels which is averaged
/// into the destination pixel `(x, y)`.
#[inline(always)]
pub(crate) fn box_sum(
    src: &ImageRef,
    x_ratio: usize,
    y_ratio: usize,
    x: usize,
    y: usize,
) -> [u32; 3] {
    let first_byte = x * x_ratio * 3;
    let last_byte = first_byte + x_ratio * 3;
    let mut sum = [0u32; 3];
    for src_y in y * y_ratio..(y + 1) * y_ratio {
        let src_pixels = &src.row_prefix(src_y, last_byte)[first_byte..];
        for pixel in src_pixels.chunks_exact(3) {
            sum[0] += pixel[0] as u32;
            sum[1] += pixel[1] as u32;
            sum[2] += pixel[2] as u32;
        }
    }
    sum
}
