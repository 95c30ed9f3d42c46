use std::path::Path;

use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
use webp_batch_optimizer::{
    ConversionSettings, OptimizerError, Reporter, RunConfig, convert_directory,
};

fn config_for(root: &Path) -> RunConfig {
    RunConfig {
        root: root.to_path_buf(),
        workers: 2,
        settings: ConversionSettings::default(),
        report_path: None,
    }
}

fn gradient(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]))
}

async fn run(config: &RunConfig) -> (Result<webp_batch_optimizer::RunOutcome, OptimizerError>, String) {
    let mut reporter = Reporter::new(Vec::new());
    let outcome = convert_directory(config, &mut reporter).await;
    (outcome, String::from_utf8(reporter.into_inner()).unwrap())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn large_jpeg_is_capped_at_1920() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("landscape.JPG");
    gradient(3000, 2000).save_with_format(&input, image::ImageFormat::Jpeg).unwrap();

    let (outcome, stdout) = run(&config_for(tmp.path())).await;
    let outcome = outcome.unwrap();

    let output = tmp.path().join("landscape.webp");
    assert_eq!(image::open(&output).unwrap().dimensions(), (1920, 1280));
    assert_eq!(outcome.summary.processed, 1);
    assert_eq!(outcome.exit_code(), 0);

    assert!(stdout.starts_with("Found 1 images to process\n"));
    let reduction_line = stdout.lines().find(|l| l.starts_with("Size reduction: ")).unwrap();
    let value = reduction_line.trim_start_matches("Size reduction: ").trim_end_matches('%');
    assert_eq!(value.split('.').nth(1).map(str::len), Some(1));
    assert!(stdout.contains("\nSummary:\nTotal images processed: 1\n"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn corrupt_file_is_reported_and_excluded() {
    let tmp = tempfile::tempdir().unwrap();
    gradient(64, 48).save(tmp.path().join("good.png")).unwrap();
    std::fs::write(tmp.path().join("corrupt.png"), b"\x89PNG\r\n\x1a\ntruncated").unwrap();

    let (outcome, stdout) = run(&config_for(tmp.path())).await;
    let outcome = outcome.unwrap();

    assert_eq!(outcome.discovered, 2);
    assert_eq!(outcome.summary.processed, 1);
    assert_eq!(outcome.summary.failed, 1);
    assert_eq!(outcome.exit_code(), 0);

    let good_size = std::fs::metadata(tmp.path().join("good.png")).unwrap().len();
    assert_eq!(outcome.summary.total_original_bytes, good_size);

    let error_line = stdout.lines().find(|l| l.starts_with("Error processing")).unwrap();
    assert!(error_line.contains("corrupt.png"));
    assert!(stdout.contains("Failed: 1"));
}

#[tokio::test]
async fn empty_directory_prints_zero_and_no_summary() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("readme.txt"), b"hello").unwrap();

    let (outcome, stdout) = run(&config_for(tmp.path())).await;
    let outcome = outcome.unwrap();

    assert_eq!(stdout, "Found 0 images to process\n");
    assert_eq!(outcome.discovered, 0);
    assert_eq!(outcome.exit_code(), 0);
}

#[tokio::test]
async fn missing_root_aborts_before_work() {
    let tmp = tempfile::tempdir().unwrap();
    let (outcome, stdout) = run(&config_for(&tmp.path().join("projects"))).await;

    assert!(matches!(outcome.unwrap_err(), OptimizerError::FileSystem { .. }));
    assert!(stdout.is_empty());
}

#[tokio::test]
async fn all_failures_yield_nonzero_exit() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("a.jpg"), b"not a jpeg").unwrap();
    std::fs::write(tmp.path().join("b.png"), b"not a png").unwrap();

    let (outcome, stdout) = run(&config_for(tmp.path())).await;
    let outcome = outcome.unwrap();

    assert_eq!(outcome.summary.processed, 0);
    assert_eq!(outcome.exit_code(), 2);
    assert!(!stdout.contains("Summary:"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn second_run_finds_no_new_work() {
    let tmp = tempfile::tempdir().unwrap();
    let nested = tmp.path().join("site/gallery");
    std::fs::create_dir_all(&nested).unwrap();
    gradient(40, 40).save(nested.join("thumb.jpeg")).unwrap();

    let config = config_for(tmp.path());
    let (first, _) = run(&config).await;
    assert_eq!(first.unwrap().summary.processed, 1);
    assert!(nested.join("thumb.webp").exists());

    // Outputs are never inputs; only the original JPEG is picked up again
    let (second, stdout) = run(&config).await;
    assert_eq!(second.unwrap().discovered, 1);
    assert!(stdout.starts_with("Found 1 images to process"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn alpha_png_flattens_to_white_and_report_is_written() {
    let tmp = tempfile::tempdir().unwrap();
    let images = tmp.path().join("images");
    std::fs::create_dir(&images).unwrap();
    RgbaImage::from_pixel(24, 24, Rgba([255, 0, 0, 0])).save(images.join("logo.png")).unwrap();

    let mut config = config_for(&images);
    let report_path = tmp.path().join("report.json");
    config.report_path = Some(report_path.clone());

    let (outcome, _) = run(&config).await;
    outcome.unwrap();

    let out = image::open(images.join("logo.webp")).unwrap();
    assert!(!out.color().has_alpha());
    assert!(out.to_rgb8().pixels().all(|p| p.0 == [255, 255, 255]));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["summary"]["processed"], 1);
    assert_eq!(json["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_settings_are_rejected_up_front() {
    let tmp = tempfile::tempdir().unwrap();
    gradient(10, 10).save(tmp.path().join("a.png")).unwrap();

    let mut config = config_for(tmp.path());
    config.settings.max_width = 0;

    let (outcome, stdout) = run(&config).await;
    assert!(matches!(outcome.unwrap_err(), OptimizerError::Validation(_)));
    assert!(stdout.is_empty());
    assert!(!tmp.path().join("a.webp").exists());
}
