use crate::{ImageBufferError, PixelType};

/// Returns size of the row in bytes rounded up to a multiple of four bytes.
#[inline]
pub fn aligned_stride(width: u32, pixel_type: PixelType) -> usize {
    (width as usize * pixel_type.size() + 3) & !3
}

/// Minimal size of buffer that can hold an image with given stride.
///
/// The last row doesn't have to include padding bytes.
fn required_buffer_len(width: u32, height: u32, stride: usize, pixel_type: PixelType) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }
    stride * (height as usize - 1) + width as usize * pixel_type.size()
}

fn check_buffer(
    width: u32,
    height: u32,
    stride: usize,
    buffer_len: usize,
    pixel_type: PixelType,
) -> Result<(), ImageBufferError> {
    if stride < width as usize * pixel_type.size() {
        return Err(ImageBufferError::InvalidStride);
    }
    if buffer_len < required_buffer_len(width, height, stride, pixel_type) {
        return Err(ImageBufferError::InvalidBufferSize);
    }
    Ok(())
}

/// Reference to image data with rows placed `stride` bytes apart.
#[derive(Debug, Copy, Clone)]
pub struct ImageRef<'a> {
    width: u32,
    height: u32,
    stride: usize,
    buffer: &'a [u8],
    pixel_type: PixelType,
}

impl<'a> ImageRef<'a> {
    /// Create an image from slice with tightly packed rows.
    pub fn new(
        width: u32,
        height: u32,
        buffer: &'a [u8],
        pixel_type: PixelType,
    ) -> Result<Self, ImageBufferError> {
        Self::with_stride(
            width,
            height,
            width as usize * pixel_type.size(),
            buffer,
            pixel_type,
        )
    }

    /// Create an image from slice which rows are `stride` bytes apart.
    pub fn with_stride(
        width: u32,
        height: u32,
        stride: usize,
        buffer: &'a [u8],
        pixel_type: PixelType,
    ) -> Result<Self, ImageBufferError> {
        check_buffer(width, height, stride, buffer.len(), pixel_type)?;
        Ok(Self {
            width,
            height,
            stride,
            buffer,
            pixel_type,
        })
    }

    #[inline]
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Distance between starts of two neighbouring rows, in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Buffer with image pixels data, padding bytes included.
    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    #[inline]
    pub(crate) fn row_len(&self) -> usize {
        self.width as usize * self.pixel_type.size()
    }

    /// Returns pixels of the row without padding bytes.
    #[inline]
    pub fn row(&self, y: u32) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride;
        self.buffer.get(start..start + self.row_len())
    }

    /// Returns `len` bytes of the row, starting from its first pixel.
    ///
    /// `len` must not be bigger than the size of one row of pixels.
    #[inline(always)]
    pub(crate) fn row_prefix(&self, y: usize, len: usize) -> &'a [u8] {
        debug_assert!(len <= self.row_len());
        let start = y * self.stride;
        &self.buffer[start..start + len]
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        (0..self.height).filter_map(|y| self.row(y))
    }
}

/// Image that owns its pixels data.
///
/// Rows are placed `stride` bytes apart; bytes between the end of pixels
/// data of a row and the start of the next row are zeroed.
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    stride: usize,
    buffer: Vec<u8>,
    pixel_type: PixelType,
}

impl Image {
    /// Create an empty image with given dimensions and pixel type.
    ///
    /// Rows are aligned to four bytes.
    pub fn new(width: u32, height: u32, pixel_type: PixelType) -> Self {
        let stride = aligned_stride(width, pixel_type);
        Self {
            width,
            height,
            stride,
            buffer: vec![0; stride * height as usize],
            pixel_type,
        }
    }

    /// Create an empty image with rows placed `stride` bytes apart.
    pub fn with_stride(
        width: u32,
        height: u32,
        stride: usize,
        pixel_type: PixelType,
    ) -> Result<Self, ImageBufferError> {
        if stride < width as usize * pixel_type.size() {
            return Err(ImageBufferError::InvalidStride);
        }
        Ok(Self {
            width,
            height,
            stride,
            buffer: vec![0; stride * height as usize],
            pixel_type,
        })
    }

    /// Create an image from vector with pixels data.
    pub fn from_vec_u8(
        width: u32,
        height: u32,
        stride: usize,
        buffer: Vec<u8>,
        pixel_type: PixelType,
    ) -> Result<Self, ImageBufferError> {
        check_buffer(width, height, stride, buffer.len(), pixel_type)?;
        Ok(Self {
            width,
            height,
            stride,
            buffer,
            pixel_type,
        })
    }

    #[inline]
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Buffer with image pixels data, padding bytes included.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[inline]
    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }

    #[inline]
    pub fn image_ref(&self) -> ImageRef<'_> {
        ImageRef {
            width: self.width,
            height: self.height,
            stride: self.stride,
            buffer: &self.buffer,
            pixel_type: self.pixel_type,
        }
    }

    /// Returns pixels of the row without padding bytes.
    #[inline]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride;
        let len = self.width as usize * self.pixel_type.size();
        self.buffer.get(start..start + len)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.height).filter_map(|y| self.row(y))
    }

    /// Copy pixels data into a new vector without padding bytes.
    pub fn to_tight_vec(&self) -> Vec<u8> {
        let row_len = self.width as usize * self.pixel_type.size();
        let mut res = Vec::with_capacity(row_len * self.height as usize);
        self.rows().for_each(|row| res.extend_from_slice(row));
        res
    }

    /// Returns `true` if both images have the same type, dimensions
    /// and pixels. Padding bytes are ignored.
    pub fn pixels_eq(&self, other: &Image) -> bool {
        self.pixel_type == other.pixel_type
            && self.width == other.width
            && self.height == other.height
            && self.rows().eq(other.rows())
    }

    /// Returns components of pixel of an [PixelType::U8x3] image.
    pub fn rgb_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if self.pixel_type != PixelType::U8x3 || x >= self.width {
            return None;
        }
        let start = x as usize * 3;
        self.row(y)
            .map(|row| [row[start], row[start + 1], row[start + 2]])
    }

    /// Returns packed pixel of an [PixelType::Rgb565] image.
    pub fn rgb565_pixel(&self, x: u32, y: u32) -> Option<u16> {
        if self.pixel_type != PixelType::Rgb565 || x >= self.width {
            return None;
        }
        let start = x as usize * 2;
        self.row(y)
            .map(|row| u16::from_le_bytes([row[start], row[start + 1]]))
    }
}
