use crate::ResampleError;

/// Integer downscale factor per axis: how many source pixels are
/// averaged into one destination pixel along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleFactor {
    x_ratio: u32,
    y_ratio: u32,
}

impl ScaleFactor {
    pub fn new(x_ratio: u32, y_ratio: u32) -> Result<Self, ResampleError> {
        if x_ratio == 0 || y_ratio == 0 {
            return Err(ResampleError::InvalidDimension);
        }
        // Sum of all components of the box must fit into u32.
        x_ratio
            .checked_mul(y_ratio)
            .and_then(|area| area.checked_mul(u8::MAX as u32))
            .ok_or(ResampleError::RatioIsTooBig)?;
        Ok(Self { x_ratio, y_ratio })
    }

    pub fn square(ratio: u32) -> Result<Self, ResampleError> {
        Self::new(ratio, ratio)
    }

    /// Ratios of downscaling of the source image into destination image.
    ///
    /// Ratios are results of integer division, so source pixels beyond
    /// `dst_width * x_ratio` columns and `dst_height * y_ratio` rows are not
    /// covered by the box filter.
    pub fn from_sizes(
        src_width: u32,
        src_height: u32,
        dst_width: u32,
        dst_height: u32,
    ) -> Result<Self, ResampleError> {
        if src_width == 0 || src_height == 0 || dst_width == 0 || dst_height == 0 {
            return Err(ResampleError::InvalidDimension);
        }
        if dst_width > src_width || dst_height > src_height {
            return Err(ResampleError::UpscalingIsNotSupported);
        }
        Self::new(src_width / dst_width, src_height / dst_height)
    }

    /// Ratios that give the biggest size not exceeding `desired` size,
    /// or the source size itself if it is not bigger than `desired` size.
    pub fn for_desired_size(
        src_width: u32,
        src_height: u32,
        desired_width: u32,
        desired_height: u32,
    ) -> Result<Self, ResampleError> {
        if src_width == 0 || src_height == 0 || desired_width == 0 || desired_height == 0 {
            return Err(ResampleError::InvalidDimension);
        }
        let axis_ratio = |src: u32, desired: u32| {
            if desired >= src {
                1
            } else {
                src / desired
            }
        };
        Self::new(
            axis_ratio(src_width, desired_width),
            axis_ratio(src_height, desired_height),
        )
    }

    #[inline]
    pub fn x_ratio(&self) -> u32 {
        self.x_ratio
    }

    #[inline]
    pub fn y_ratio(&self) -> u32 {
        self.y_ratio
    }

    /// Count of source pixels averaged into one destination pixel.
    #[inline]
    pub fn area(&self) -> u32 {
        self.x_ratio * self.y_ratio
    }

    #[inline]
    pub fn dst_size(&self, src_width: u32, src_height: u32) -> (u32, u32) {
        (src_width / self.x_ratio, src_height / self.y_ratio)
    }

    /// Returns `true` if the box filter covers every pixel of the source image.
    #[inline]
    pub fn divides(&self, src_width: u32, src_height: u32) -> bool {
        src_width % self.x_ratio == 0 && src_height % self.y_ratio == 0
    }
}

/// Calculates the size of destination image close to the `desired` size
/// that is reachable with integer ratios.
///
/// Every axis is processed independently, so the result may have
/// aspect ratio different from `desired` size.
pub fn find_scale(
    src_width: u32,
    src_height: u32,
    desired_width: u32,
    desired_height: u32,
) -> Result<(u32, u32), ResampleError> {
    let scale =
        ScaleFactor::for_desired_size(src_width, src_height, desired_width, desired_height)?;
    Ok(scale.dst_size(src_width, src_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_overflow() {
        assert!(ScaleFactor::new(4096, 4096).is_ok());
        assert_eq!(
            ScaleFactor::new(65536, 65536),
            Err(ResampleError::RatioIsTooBig)
        );
        assert!(ScaleFactor::new(16_843_009, 1).is_ok());
        assert_eq!(
            ScaleFactor::new(16_843_010, 1),
            Err(ResampleError::RatioIsTooBig)
        );
    }

    #[test]
    fn zero_ratio() {
        assert_eq!(ScaleFactor::new(0, 2), Err(ResampleError::InvalidDimension));
        assert_eq!(ScaleFactor::square(0), Err(ResampleError::InvalidDimension));
    }

    #[test]
    fn ratios_from_sizes_are_truncated() {
        let scale = ScaleFactor::from_sizes(10, 7, 3, 2).unwrap();
        assert_eq!((scale.x_ratio(), scale.y_ratio()), (3, 3));
        assert_eq!(scale.dst_size(10, 7), (3, 2));
        assert!(!scale.divides(10, 7));
        assert!(scale.divides(9, 6));
    }
}
