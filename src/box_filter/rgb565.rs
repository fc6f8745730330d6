use super::{box_sum, Band};
use crate::images::ImageRef;
use crate::pixels::pack_rgb565;
use crate::ScaleFactor;

/// Same as [super::integer::resample_rows], but packs averaged components
/// into little-endian RGB565 words.
pub(crate) fn resample_rows(src: &ImageRef, scale: ScaleFactor, mut band: Band) {
    let x_ratio = scale.x_ratio() as usize;
    let y_ratio = scale.y_ratio() as usize;
    let area = scale.area();
    let row_len = band.width * 2;

    for (y, dst_row) in band.rows_mut(row_len) {
        for (x, dst_pixel) in dst_row.chunks_exact_mut(2).enumerate() {
            let [r, g, b] = box_sum(src, x_ratio, y_ratio, x, y).map(|s| (s / area) as u8);
            dst_pixel.copy_from_slice(&pack_rgb565(r, g, b).to_le_bytes());
        }
    }
}
