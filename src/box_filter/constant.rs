use super::Band;
use crate::images::ImageRef;
use crate::ScaleFactor;

/// Kernel with ratios known at compile time.
///
/// Constant ratios let the compiler unroll and vectorize the loops
/// of [resample_rows_with_row_buffer].
pub(crate) fn resample_rows<const XR: usize, const YR: usize>(
    src: &ImageRef,
    band: Band,
    row_buffer: &mut Vec<u32>,
) {
    resample_rows_with_row_buffer(src, XR, YR, band, row_buffer);
}

/// Fallback for ratios that don't have a specialized kernel.
pub(crate) fn resample_rows_dyn(
    src: &ImageRef,
    scale: ScaleFactor,
    band: Band,
    row_buffer: &mut Vec<u32>,
) {
    resample_rows_with_row_buffer(
        src,
        scale.x_ratio() as usize,
        scale.y_ratio() as usize,
        band,
        row_buffer,
    );
}

/// Sums `y_ratio` source rows component-wise into the row buffer and then
/// reduces every `x_ratio` pixels of the row buffer into one pixel.
#[inline(always)]
fn resample_rows_with_row_buffer(
    src: &ImageRef,
    x_ratio: usize,
    y_ratio: usize,
    mut band: Band,
    row_buffer: &mut Vec<u32>,
) {
    let area = (x_ratio * y_ratio) as u32;
    let dst_row_len = band.width * 3;
    let src_row_len = dst_row_len * x_ratio;
    row_buffer.clear();
    row_buffer.resize(src_row_len, 0);

    for (y, dst_row) in band.rows_mut(dst_row_len) {
        let first_src_y = y * y_ratio;
        let src_row = src.row_prefix(first_src_y, src_row_len);
        for (sum, &c) in row_buffer.iter_mut().zip(src_row) {
            *sum = c as u32;
        }
        for src_y in first_src_y + 1..first_src_y + y_ratio {
            let src_row = src.row_prefix(src_y, src_row_len);
            for (sum, &c) in row_buffer.iter_mut().zip(src_row) {
                *sum += c as u32;
            }
        }

        let groups = row_buffer.chunks_exact(x_ratio * 3);
        for (dst_pixel, group) in dst_row.chunks_exact_mut(3).zip(groups) {
            for (comp, dst_comp) in dst_pixel.iter_mut().enumerate() {
                let mut sum = group[comp];
                for i in 1..x_ratio {
                    sum += group[i * 3 + comp];
                }
                *dst_comp = (sum / area) as u8;
            }
        }
    }
}
