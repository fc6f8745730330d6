use box_resample::{find_scale, ResampleError, ScaleFactor};

#[test]
fn find_scale_keeps_integer_ratios() {
    assert_eq!(find_scale(1024, 768, 256, 256), Ok((256, 256)));
    assert_eq!(find_scale(4000, 4000, 256, 256), Ok((266, 266)));
    assert_eq!(find_scale(1000, 300, 256, 256), Ok((333, 300)));

    // Axes are independent: 1024 / 256 = 4, 768 / 256 = 3
    let scale = ScaleFactor::for_desired_size(1024, 768, 256, 256).unwrap();
    assert_eq!((scale.x_ratio(), scale.y_ratio()), (4, 3));
}

#[test]
fn small_source_is_not_scaled() {
    assert_eq!(find_scale(200, 100, 256, 256), Ok((200, 100)));
    assert_eq!(find_scale(256, 256, 256, 256), Ok((256, 256)));
    let scale = ScaleFactor::for_desired_size(2000, 2000, 4096, 4096).unwrap();
    assert_eq!(scale, ScaleFactor::square(1).unwrap());
}

#[test]
fn zero_sizes_are_rejected() {
    assert_eq!(
        find_scale(0, 768, 256, 256),
        Err(ResampleError::InvalidDimension)
    );
    assert_eq!(
        find_scale(1024, 768, 256, 0),
        Err(ResampleError::InvalidDimension)
    );
    assert_eq!(
        ScaleFactor::from_sizes(10, 10, 0, 5),
        Err(ResampleError::InvalidDimension)
    );
}

#[test]
fn ratios_from_sizes() {
    let scale = ScaleFactor::from_sizes(1024, 768, 256, 256).unwrap();
    assert_eq!((scale.x_ratio(), scale.y_ratio()), (4, 3));
    assert_eq!(scale.area(), 12);
    assert_eq!(scale.dst_size(1024, 768), (256, 256));
    assert_eq!(
        ScaleFactor::from_sizes(100, 100, 100, 101),
        Err(ResampleError::UpscalingIsNotSupported)
    );
}
