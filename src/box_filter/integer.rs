use super::{box_sum, Band};
use crate::images::ImageRef;
use crate::ScaleFactor;

/// Averages every `x_ratio * y_ratio` box of RGB24 source pixels
/// into one RGB24 pixel of the band.
pub(crate) fn resample_rows(src: &ImageRef, scale: ScaleFactor, mut band: Band) {
    let x_ratio = scale.x_ratio() as usize;
    let y_ratio = scale.y_ratio() as usize;
    let area = scale.area();
    let row_len = band.width * 3;

    for (y, dst_row) in band.rows_mut(row_len) {
        for (x, dst_pixel) in dst_row.chunks_exact_mut(3).enumerate() {
            let sum = box_sum(src, x_ratio, y_ratio, x, y);
            dst_pixel[0] = (sum[0] / area) as u8;
            dst_pixel[1] = (sum[1] / area) as u8;
            dst_pixel[2] = (sum[2] / area) as u8;
        }
    }
}
