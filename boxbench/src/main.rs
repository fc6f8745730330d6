use std::collections::HashMap;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use box_resample::{aligned_stride, find_scale, Image, ImageRef, PixelType, Resampler, ScaleFactor};
use clap::Parser;
use image::{ColorType, ImageReader, RgbImage};
use log::{debug, warn};

use structs::{Measurement, Variant};

mod structs;

/// Ratios of downscaling measured for every variant.
const RATIOS: RangeInclusive<u32> = 1..=8;
/// Size passed to `find_scale` to show how it is adjusted.
const DESIRED_SIZE: (u32, u32) = (256, 256);

#[derive(Parser)]
#[clap(version, about = "Measures time of box-filter downscaling variants", long_about = None)]
#[clap(disable_help_flag = true)]
struct Cli {
    #[clap(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,

    /// Path to source image file
    #[clap(value_parser, default_value = "16-million-atoms.png")]
    source_path: PathBuf,

    /// Directory for result images
    #[clap(short, long, value_parser, default_value = ".")]
    output_dir: PathBuf,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let src = open_source_image(&cli.source_path)?;
    let src_image =
        ImageRef::from_rgb_image(&src).with_context(|| "Failed to create source image view")?;
    println!("{}x{}", src_image.width(), src_image.height());

    let (desired_width, desired_height) = DESIRED_SIZE;
    let (new_width, new_height) = find_scale(
        src_image.width(),
        src_image.height(),
        desired_width,
        desired_height,
    )
    .with_context(|| "Failed to find scale of the source image")?;
    println!("-> {}x{}", new_width, new_height);

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", cli.output_dir))?;

    let mut resampler = Resampler::new();
    let mut baselines: HashMap<u32, Measurement> = HashMap::new();

    for ratio in RATIOS {
        if let Some(measurement) =
            bench_variant(&mut resampler, &src_image, Variant::Integer, ratio, &cli.output_dir)?
        {
            println!("{measurement}");
            baselines.insert(ratio, measurement);
        }
    }

    for ratio in RATIOS {
        if let Some(measurement) =
            bench_variant(&mut resampler, &src_image, Variant::Constant, ratio, &cli.output_dir)?
        {
            match baselines.get(&ratio) {
                Some(baseline) => println!(
                    "{measurement} ~{:.1} x faster",
                    measurement.speedup_over(baseline)
                ),
                None => println!("{measurement}"),
            }
        }
    }

    for ratio in RATIOS {
        if let Some(measurement) =
            bench_variant(&mut resampler, &src_image, Variant::Rgb565, ratio, &cli.output_dir)?
        {
            println!("{measurement}");
        }
    }

    Ok(())
}

fn open_source_image(source_path: &Path) -> Result<RgbImage> {
    debug!("Opening the source image {:?}", source_path);
    let image = ImageReader::open(source_path)
        .with_context(|| format!("Failed to read source file from {:?}", source_path))?
        .decode()
        .with_context(|| "Failed to decode source image")?;
    debug!("Source image has {:?} color type", image.color());
    Ok(image.to_rgb8())
}

/// Downscales the source image by `ratio` on both axes, measures the time
/// of resampling and saves the result into `output_dir`.
///
/// Returns `None` if the source image is too small for `ratio`.
fn bench_variant(
    resampler: &mut Resampler,
    src_image: &ImageRef,
    variant: Variant,
    ratio: u32,
    output_dir: &Path,
) -> Result<Option<Measurement>> {
    let dst_width = src_image.width() / ratio;
    let dst_height = src_image.height() / ratio;
    if dst_width == 0 || dst_height == 0 {
        warn!(
            "Skip {}: source image {}x{} is too small",
            variant.label(ratio),
            src_image.width(),
            src_image.height()
        );
        return Ok(None);
    }
    let dst_stride = aligned_stride(dst_width, variant.pixel_type());

    debug!(
        "Resample the source image into {}x{} with {:?} variant",
        dst_width, dst_height, variant
    );
    let start_time = Instant::now();
    let result = match variant {
        Variant::Integer => {
            resampler.resample_integer_rgb(src_image, dst_width, dst_height, dst_stride)
        }
        Variant::Constant => ScaleFactor::square(ratio)
            .and_then(|scale| resampler.resample_fast_rgb(src_image, scale, dst_stride)),
        Variant::Rgb565 => {
            resampler.resample_integer_rgb565(src_image, dst_width, dst_height, dst_stride)
        }
    };
    let elapsed = start_time.elapsed();
    let dst_image =
        result.with_context(|| format!("Failed to resample image for {}", variant.label(ratio)))?;

    save_result(&dst_image, &output_dir.join(variant.file_name(ratio)))?;
    Ok(Some(Measurement {
        variant,
        ratio,
        elapsed,
    }))
}

fn save_result(image: &Image, result_path: &Path) -> Result<()> {
    debug!("Save the result image into the file {:?}", result_path);
    match image.pixel_type() {
        PixelType::U8x3 => image::save_buffer(
            result_path,
            &image.to_tight_vec(),
            image.width(),
            image.height(),
            ColorType::Rgb8,
        )
        .with_context(|| "Failed to save the result image"),
        // Raw dump of rows, padding included
        PixelType::Rgb565 => fs::write(result_path, image.buffer())
            .with_context(|| format!("Failed to write the result into {:?}", result_path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_output_dir(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("boxbench-{}-{}", name, std::process::id()));
        fs::create_dir_all(&path).unwrap();
        path
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn default_arguments() {
        let cli = Cli::parse_from(["boxbench"]);
        assert_eq!(cli.source_path, PathBuf::from("16-million-atoms.png"));
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn results_are_written_with_expected_names() {
        let output_dir = test_output_dir("names");
        let src = RgbImage::from_fn(10, 6, |x, y| image::Rgb([x as u8 * 20, y as u8 * 40, 7]));
        let src_image = ImageRef::from_rgb_image(&src).unwrap();
        let mut resampler = Resampler::new();

        for variant in [Variant::Integer, Variant::Constant, Variant::Rgb565] {
            let measurement = bench_variant(&mut resampler, &src_image, variant, 3, &output_dir)
                .unwrap()
                .unwrap();
            assert_eq!(measurement.ratio, 3);
            assert!(output_dir.join(variant.file_name(3)).exists());
        }

        let saved = image::open(output_dir.join("var3x3.png")).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (3, 2));
        let saved_const = image::open(output_dir.join("const3x3.png")).unwrap().to_rgb8();
        assert_eq!(saved, saved_const);

        // 2 rows with stride aligned to 4 bytes
        let raw = fs::read(output_dir.join("var3x3.565")).unwrap();
        assert_eq!(raw.len(), 2 * 8);

        fs::remove_dir_all(output_dir).unwrap();
    }

    #[test]
    fn too_big_ratio_is_skipped() {
        let output_dir = test_output_dir("skip");
        let src = RgbImage::new(4, 4);
        let src_image = ImageRef::from_rgb_image(&src).unwrap();
        let res = bench_variant(
            &mut Resampler::new(),
            &src_image,
            Variant::Integer,
            8,
            &output_dir,
        )
        .unwrap();
        assert!(res.is_none());
        fs::remove_dir_all(output_dir).unwrap();
    }

    #[test]
    fn missing_source_image_is_an_error() {
        let err = open_source_image(Path::new("./no-such-image.png")).unwrap_err();
        assert!(err.to_string().contains("Failed to read source file"));
    }
}
