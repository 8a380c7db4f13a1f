//! Tests for the MSRA-TD500 format.

use std::path::Path;

use super::{read_all, write};
use crate::error::DatasetError;
use crate::format::formats::MsraTd500Format;
use crate::format::formats::records::{parse_msra_file, parse_msra_record};
use crate::format::traits::{AngleUnit, DatasetParser, LoadOptions, RotationPivot};

const EPS: f64 = 1e-9;

#[test]
fn test_msra_format_metadata() {
    let format = MsraTd500Format;
    assert_eq!(format.format().id(), "MSRA_TD500");
    assert_eq!(format.subset_names(), &["train", "test"]);
}

#[test]
fn test_unrotated_record() {
    let ann = parse_msra_record("1 0 10 20 30 40 0.0", &LoadOptions::default()).unwrap();
    assert_eq!(ann.xyxy(), (10.0, 20.0, 40.0, 60.0));
    assert!(!ann.difficult);
    assert_eq!(ann.source_index, Some(1));
}

#[test]
fn test_quarter_turn_record() {
    let ann = parse_msra_record("2 1 0 0 10 10 90.0", &LoadOptions::default()).unwrap();
    assert!(ann.difficult);
    assert!((ann.width() - 10.0).abs() < EPS);
    assert!((ann.height() - 10.0).abs() < EPS);
    // turned about the top-left corner: the box swings left of x = 0
    assert!((ann.x1 + 10.0).abs() < EPS && ann.x2.abs() < EPS);
    assert!(ann.y1.abs() < EPS && (ann.y2 - 10.0).abs() < EPS);
}

#[test]
fn test_quarter_turn_swaps_width_and_height() {
    let ann = parse_msra_record("0 0 100 50 40 10 90", &LoadOptions::default()).unwrap();
    assert!((ann.width() - 10.0).abs() < EPS);
    assert!((ann.height() - 40.0).abs() < EPS);
}

#[test]
fn test_radian_angles() {
    let options = LoadOptions::new().msra_angle_unit(AngleUnit::Radians);
    let record = format!("0 0 100 50 40 10 {}", std::f64::consts::FRAC_PI_2);
    let ann = parse_msra_record(&record, &options).unwrap();
    assert!((ann.width() - 10.0).abs() < 1e-6);
    assert!((ann.height() - 40.0).abs() < 1e-6);
}

#[test]
fn test_center_pivot() {
    let options = LoadOptions::new().rotation_pivot(RotationPivot::Center);
    let ann = parse_msra_record("0 0 100 50 40 10 90", &options).unwrap();
    let (cx, cy) = ((ann.x1 + ann.x2) / 2.0, (ann.y1 + ann.y2) / 2.0);
    assert!((cx - 120.0).abs() < EPS && (cy - 55.0).abs() < EPS);
}

#[test]
fn test_small_rotation_grows_box() {
    let ann = parse_msra_record("0 0 0 0 100 20 10", &LoadOptions::default()).unwrap();
    assert!(ann.width() > 100.0);
    assert!(ann.height() > 20.0);
    assert!(ann.x1 <= ann.x2 && ann.y1 <= ann.y2);
}

#[test]
fn test_difficult_flag_only_for_one() {
    let options = LoadOptions::default();
    assert!(!parse_msra_record("0 2 0 0 1 1 0", &options).unwrap().difficult);
    assert!(parse_msra_record("0 1 0 0 1 1 0", &options).unwrap().difficult);
}

#[test]
fn test_wrong_field_count() {
    let err = parse_msra_record("0 0 10 20 30 40", &LoadOptions::default()).unwrap_err();
    assert_eq!(err, "expected 7 fields, found 6");
    assert!(parse_msra_record("0 0 10 20 30 40 0 9", &LoadOptions::default()).is_err());
}

#[test]
fn test_non_numeric_field() {
    let err = parse_msra_record("0 0 10 20 thirty 40 0", &LoadOptions::default()).unwrap_err();
    assert_eq!(err, "invalid w 'thirty'");
}

#[test]
fn test_non_numeric_difficult() {
    let err = parse_msra_record("0 abc 10 20 30 40 0", &LoadOptions::default()).unwrap_err();
    assert_eq!(err, "invalid difficult 'abc'");
}

#[test]
fn test_non_finite_field() {
    let err = parse_msra_record("0 0 10 NaN 30 40 0", &LoadOptions::default()).unwrap_err();
    assert_eq!(err, "non-finite y 'NaN'");
    assert!(parse_msra_record("0 0 10 20 30 40 inf", &LoadOptions::default()).is_err());
}

#[test]
fn test_file_errors_carry_line() {
    let content = "0 0 10 20 30 40 0\n\n1 0 10 20 30 40\n";
    let err = parse_msra_file(content, Path::new("IMG_0059.gt"), &LoadOptions::default())
        .unwrap_err();
    match err {
        DatasetError::Parse { path, line, .. } => {
            assert_eq!(path, Path::new("IMG_0059.gt"));
            assert_eq!(line, Some(3));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_file_keeps_record_order() {
    let content = "0 0 5 5 1 1 0\r\n1 1 0 0 2 2 0\r\n\n2 0 9 9 3 3 0";
    let anns = parse_msra_file(content, Path::new("a.gt"), &LoadOptions::default()).unwrap();
    let indices: Vec<_> = anns.iter().map(|a| a.source_index.unwrap()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_read_dataset_tree() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "train/IMG_0855.JPG", "");
    write(root, "train/IMG_0855.gt", "0 0 10 20 30 40 0\n1 0 1 1 1 1 0\n");
    write(root, "train/IMG_0059.JPG", "");
    write(root, "train/IMG_0059.gt", "0 1 0 0 10 10 0\n");
    write(root, "test/IMG_0030.JPG", "");
    write(root, "test/IMG_0030.gt", "");

    let subsets = read_all(&MsraTd500Format, root, &LoadOptions::default()).unwrap();
    assert_eq!(subsets.len(), 2);

    let (name, train) = &subsets[0];
    assert_eq!(name, "train");
    assert!(train[0].image_path().ends_with("IMG_0059.JPG"));
    assert_eq!(train[0].len(), 1);
    assert!(train[1].image_path().ends_with("IMG_0855.JPG"));
    assert_eq!(train[1].len(), 2);

    let (name, test) = &subsets[1];
    assert_eq!(name, "test");
    assert_eq!(test.len(), 1);
    assert!(test[0].is_empty());
}

#[test]
fn test_missing_image_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "train/IMG_0001.JPG", "");
    write(dir.path(), "train/IMG_0001.gt", "0 0 1 1 1 1 0\n");
    write(dir.path(), "train/IMG_0002.gt", "0 0 1 1 1 1 0\n");

    let err = MsraTd500Format.discover_subsets(dir.path()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingResource { .. }));
}

#[test]
fn test_detect_layout() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!MsraTd500Format.detect(dir.path()));
    write(dir.path(), "test/IMG_0001.gt", "");
    assert!(MsraTd500Format.detect(dir.path()));
}
