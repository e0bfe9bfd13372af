//! End-to-end batch runs driven by a scripted operator.

mod common;

use common::{cleanup, lines_of, scratch_dirs, write_blob_image, write_flat_image};
use spheroid_io::load_roi_archive;
use spheroid_pipeline::script::ScriptedOperator;
use spheroid_pipeline::{BatchReport, run_batch};

#[test]
fn test_mixed_batch_summary_and_skip_log() {
    let (input, output) = scratch_dirs("mixed");
    write_blob_image(&input.join("img1.tif"));
    write_flat_image(&input.join("img2.tif"));

    let mut op = ScriptedOperator::new();
    // img1: choose the third candidate, keep all regions, no enlarge
    op.choices.push_back(Some(2));
    op.selections.push_back(Some(vec![]));
    op.choices.push_back(Some(0));
    // img2: no candidate segments anything; skip it
    op.choices.push_back(Some(3));

    let report = run_batch(&mut op, &input, &output).unwrap();
    assert_eq!(
        report,
        BatchReport {
            measured: 1,
            skipped: 1,
            aborted: false
        }
    );

    // Per-image artifacts only for img1
    assert!(output.join("img1_ROIs.zip").exists());
    assert!(output.join("img1_Results.csv").exists());
    assert!(!output.join("img2_ROIs.zip").exists());
    assert!(!output.join("img2_Results.csv").exists());

    let skip_lines = lines_of(&output.join("no_roi.txt"));
    assert_eq!(skip_lines, vec!["Images without ROI:", "img2.tif"]);

    let summary = lines_of(&output.join("All_Results.csv"));
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0], "Name,Name,Area,Mean,Min,Max,Perim,Circ,XM,YM");
    assert!(summary[1].starts_with("img1,roi-001,4000,"));

    // Final message after an uninterrupted batch
    assert_eq!(op.messages.last().map(String::as_str), Some("Done"));
    cleanup(&input);
}

#[test]
fn test_abort_on_second_image_keeps_first_image_outputs() {
    let (input, output) = scratch_dirs("abort");
    write_blob_image(&input.join("a.tif"));
    write_blob_image(&input.join("b.tif"));
    write_blob_image(&input.join("c.tif"));

    let mut op = ScriptedOperator::new();
    // a: full selection cycle
    op.choices.push_back(Some(2));
    op.selections.push_back(Some(vec![]));
    op.choices.push_back(Some(0));
    // b: cancel the choice dialog; c must never be reached (the script
    // holds no further answers, so touching it would panic)
    op.choices.push_back(None);

    let report = run_batch(&mut op, &input, &output).unwrap();
    assert!(report.aborted);
    assert_eq!(report.measured, 1);

    assert!(output.join("a_ROIs.zip").exists());
    assert!(output.join("a_Results.csv").exists());
    for stem in ["b", "c"] {
        assert!(!output.join(format!("{stem}_ROIs.zip")).exists());
        assert!(!output.join(format!("{stem}_Results.csv")).exists());
    }

    // Summary still persisted for the completed image
    let summary = lines_of(&output.join("All_Results.csv"));
    assert_eq!(summary.len(), 2);
    assert!(summary[1].starts_with("a,"));
    cleanup(&input);
}

#[test]
fn test_deleting_every_region_routes_to_skip_log() {
    let (input, output) = scratch_dirs("refine-empty");
    write_blob_image(&input.join("img1.tif"));

    let mut op = ScriptedOperator::new();
    op.choices.push_back(Some(2));
    op.selections.push_back(Some(vec![0])); // delete the only region

    let report = run_batch(&mut op, &input, &output).unwrap();
    assert_eq!(report.skipped, 1);
    assert_eq!(report.measured, 0);

    assert_eq!(
        lines_of(&output.join("no_roi.txt")),
        vec!["Images without ROI:", "img1.tif"]
    );
    assert!(!output.join("img1_ROIs.zip").exists());
    assert!(!output.join("img1_Results.csv").exists());
    // No image measured: no summary file at all
    assert!(!output.join("All_Results.csv").exists());
    cleanup(&input);
}

#[test]
fn test_enlarge_flow_persists_derived_regions() {
    let (input, output) = scratch_dirs("enlarge");
    write_blob_image(&input.join("img1.tif"));

    let mut op = ScriptedOperator::new();
    op.choices.push_back(Some(2)); // Third
    op.selections.push_back(Some(vec![])); // keep all after review
    op.choices.push_back(Some(1)); // enlarge: Yes
    op.selections.push_back(Some(vec![0])); // grow the original
    op.sliders.push_back(Some(10));
    op.choices.push_back(Some(1)); // OK - Proceed
    op.selections.push_back(Some(vec![])); // final review keeps all

    let report = run_batch(&mut op, &input, &output).unwrap();
    assert_eq!(report.measured, 1);

    let rois = load_roi_archive(&output.join("img1_ROIs.zip")).unwrap();
    let names: Vec<_> = rois.iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["roi-001", "roi-001_enlarged"]);
    assert!(rois[1].area() > rois[0].area());

    let results = lines_of(&output.join("img1_Results.csv"));
    assert_eq!(results.len(), 3); // header + one row per region
    assert!(results[1].starts_with("roi-001,"));
    assert!(results[2].starts_with("roi-001_enlarged,"));

    let summary = lines_of(&output.join("All_Results.csv"));
    assert_eq!(summary.len(), 3);
    cleanup(&input);
}

#[test]
fn test_unreadable_file_is_skipped_silently() {
    let (input, output) = scratch_dirs("unreadable");
    std::fs::write(input.join("broken.tif"), b"not a tiff").unwrap();
    write_blob_image(&input.join("img1.tif"));

    let mut op = ScriptedOperator::new();
    // Only img1 consumes script answers; broken.tif never prompts
    op.choices.push_back(Some(2));
    op.selections.push_back(Some(vec![]));
    op.choices.push_back(Some(0));

    let report = run_batch(&mut op, &input, &output).unwrap();
    assert_eq!(report.measured, 1);
    assert_eq!(report.skipped, 0);
    // Undecodable input is not a skip-log event
    assert_eq!(lines_of(&output.join("no_roi.txt")), vec!["Images without ROI:"]);
    cleanup(&input);
}

#[test]
fn test_missing_input_folder_is_fatal() {
    let (input, output) = scratch_dirs("missing-input");
    std::fs::remove_dir_all(&input).unwrap();
    let mut op = ScriptedOperator::new();
    assert!(run_batch(&mut op, &input, &output).is_err());
}

#[test]
fn test_exported_archive_reimports_identically() {
    let (input, output) = scratch_dirs("roundtrip");
    write_blob_image(&input.join("img1.tif"));

    let mut op = ScriptedOperator::new();
    op.choices.push_back(Some(2));
    op.selections.push_back(Some(vec![]));
    op.choices.push_back(Some(0));
    run_batch(&mut op, &input, &output).unwrap();

    let rois = load_roi_archive(&output.join("img1_ROIs.zip")).unwrap();
    assert_eq!(rois.len(), 1);
    let roi = &rois[0];
    assert_eq!(roi.area(), 4000);
    assert_eq!(roi.bounds().x, 50);
    assert_eq!(roi.bounds().y, 80);
    // Every pixel of the bright rectangle, and nothing else
    for y in 78..122 {
        for x in 48..152 {
            let inside = (50..150).contains(&x) && (80..120).contains(&y);
            assert_eq!(roi.contains(x, y), inside, "pixel ({x}, {y})");
        }
    }
    cleanup(&input);
}
