use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("Size of buffer is smaller than required")]
    InvalidBufferSize,
    #[error("Stride is smaller than size of one row of pixels")]
    InvalidStride,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleError {
    #[error("Width and height of source and destination images must be greater than zero")]
    InvalidDimension,
    #[error("Size of destination image is bigger than size of source image")]
    UpscalingIsNotSupported,
    #[error("Type of pixels of the source image is not supported by resampler")]
    UnsupportedPixelType,
    #[error("Area of the box filter is too big for the 32-bit accumulator")]
    RatioIsTooBig,
    #[error("Dimensions of the source image are not multiples of dimensions of the destination image")]
    RemainderPixels,
    #[error(transparent)]
    ImageBuffer(#[from] ImageBufferError),
}
