use std::fmt;
use std::time::Duration;

use box_resample::PixelType;

/// Variant of the box filter measured by the benchmark.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// General integer-ratio resampling into RGB24.
    Integer,
    /// Resampling with kernels specialized for constant ratios.
    Constant,
    /// General integer-ratio resampling packed into RGB565.
    Rgb565,
}

impl Variant {
    pub fn pixel_type(&self) -> PixelType {
        match self {
            Self::Integer | Self::Constant => PixelType::U8x3,
            Self::Rgb565 => PixelType::Rgb565,
        }
    }

    /// Name of the file with result of resampling.
    pub fn file_name(&self, ratio: u32) -> String {
        match self {
            Self::Integer => format!("var{ratio}x{ratio}.png"),
            Self::Constant => format!("const{ratio}x{ratio}.png"),
            Self::Rgb565 => format!("var{ratio}x{ratio}.565"),
        }
    }

    pub fn label(&self, ratio: u32) -> String {
        match self {
            Self::Integer => format!("var{ratio}x{ratio}"),
            Self::Constant => format!("const{ratio}x{ratio}"),
            Self::Rgb565 => format!("var{ratio}x{ratio} 565"),
        }
    }
}

/// Time spent by one call of the resampler.
#[derive(Copy, Clone, Debug)]
pub struct Measurement {
    pub variant: Variant,
    pub ratio: u32,
    pub elapsed: Duration,
}

impl Measurement {
    /// How many times this measurement is faster than `baseline`.
    pub fn speedup_over(&self, baseline: &Measurement) -> f64 {
        let elapsed = self.elapsed.as_secs_f64();
        if elapsed == 0. {
            return f64::INFINITY;
        }
        baseline.elapsed.as_secs_f64() / elapsed
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} took {}us",
            self.variant.label(self.ratio),
            self.elapsed.as_micros()
        )
    }
}
