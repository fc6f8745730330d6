use crate::box_filter::Band;
use crate::images::Image;

/// Calls `process_band` for bands of rows of the destination image.
///
/// With `rayon` feature the image is split into several bands
/// processed in parallel, every band gets own row buffer.
/// Otherwise the whole image is processed as one band with
/// the given `row_buffer`.
pub(crate) fn for_each_band<F>(dst_image: &mut Image, row_buffer: &mut Vec<u32>, process_band: F)
where
    F: Fn(Band, &mut Vec<u32>) + Sync + Send,
{
    #[cfg(feature = "rayon")]
    {
        if let Some(rows_per_band) = rows_per_band(dst_image.width(), dst_image.height()) {
            par_for_each_band(dst_image, rows_per_band, process_band);
            return;
        }
    }

    let band = Band {
        first_row: 0,
        width: dst_image.width() as usize,
        stride: dst_image.stride(),
        buffer: dst_image.buffer_mut(),
    };
    process_band(band, row_buffer);
}

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::prelude::*;

        fn par_for_each_band<F>(dst_image: &mut Image, rows_per_band: u32, process_band: F)
        where
            F: Fn(Band, &mut Vec<u32>) + Sync + Send,
        {
            let width = dst_image.width() as usize;
            let stride = dst_image.stride();
            let band_len = rows_per_band as usize * stride;
            dst_image
                .buffer_mut()
                .par_chunks_mut(band_len)
                .enumerate()
                .for_each_init(Vec::new, |row_buffer, (i, buffer)| {
                    let band = Band {
                        first_row: i * rows_per_band as usize,
                        width,
                        stride,
                        buffer,
                    };
                    process_band(band, row_buffer);
                });
        }

        /// Returns count of rows in one band, or `None` if the image
        /// should not be split.
        fn rows_per_band(width: u32, height: u32) -> Option<u32> {
            let num_threads = rayon::current_num_threads() as u32;
            let max_num_parts = calculate_max_h_parts_number(width, height);
            if num_threads > 1 && max_num_parts > 1 {
                let num_parts = num_threads.min(max_num_parts);
                return Some(height.div_ceil(num_parts));
            }
            None
        }
    }
}

/// It is not optimal to split images on too small parts.
/// We have to calculate minimal height of one part.
/// For small images, it is equal to `constant / area`.
/// For tall images, it is equal to `height / 256`.
#[cfg_attr(not(feature = "rayon"), allow(dead_code))]
fn calculate_max_h_parts_number(width: u32, height: u32) -> u32 {
    if width == 0 || height == 0 {
        return 1;
    }
    let area = height as u64 * height.max(width) as u64;
    let min_height = ((1u64 << 14) / area).max(height as u64 / 256);
    (height as u64 / min_height.max(1)) as u32
}
