// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use indoc::indoc;
use tempfile::TempDir;

use crate::*;

const CATALOG: &str = indoc! {"
    name,ra,dec,type,l,b
    Bulge star,17:45:40.0,-29:00:28,DN,0.5,-1.0
    Disk star,12:30:00,-05:30:00,NL,100.0,2.0,extra
    Halo star,01:00:00,+45:00:00,DN,200.0,-40.0
    Lost star,04:00:00,+10:00:00,DN,,
"};

#[test]
fn test_classify() {
    let tmp_dir = TempDir::new().unwrap();
    let catalog = make_file_in_dir("stscicat.csv", tmp_dir.path(), CATALOG);
    let output_dir = tmp_dir.path().join("regions");

    let cmd = cv_regions()
        .args([
            "classify",
            "--catalog",
            &catalog.display().to_string(),
            "--output-dir",
            &output_dir.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "classify failed on simple input: {:?}", cmd.unwrap_err());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("cv-regions classify complete."), "{stdout}");
    assert!(stdout.contains("have no Galactic coordinates"), "{stdout}");
    // The skipped source is named in the warnings.
    assert!(stdout.contains("Lost star"), "{stdout}");

    let disk = std::fs::read_to_string(output_dir.join("inDisk.ipac")).unwrap();
    assert_eq!(
        disk,
        concat!(
            "|    ra        |     dec      |\n",
            "|    double    |     double   |\n",
            "    187.500000   -5.500000  \n",
        )
    );
    for name in ["inBulge.ipac", "inHalo.ipac"] {
        let contents = std::fs::read_to_string(output_dir.join(name)).unwrap();
        assert_eq!(contents.lines().count(), 3, "{name}");
    }
}

#[test]
fn test_classify_dry_run_and_save_toml() {
    let tmp_dir = TempDir::new().unwrap();
    let catalog = make_file_in_dir("stscicat.csv", tmp_dir.path(), CATALOG);
    let output_dir = tmp_dir.path().join("regions");
    let toml = tmp_dir.path().join("classify.toml");

    let cmd = cv_regions()
        .args([
            "classify",
            "--catalog",
            &catalog.display().to_string(),
            "--output-dir",
            &output_dir.display().to_string(),
            "--dry-run",
            "--save-toml",
            &toml.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", cmd.unwrap_err());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run -- exiting now."), "{stdout}");
    assert!(!output_dir.exists());
    assert!(toml.exists());

    // The saved arguments reproduce the run.
    let cmd = cv_regions()
        .args(["classify", &toml.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "{:?}", cmd.unwrap_err());
    assert!(output_dir.join("inHalo.ipac").exists());
}

#[test]
fn test_classify_without_catalog() {
    let cmd = cv_regions().args(["classify"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Error: No CV catalog was specified"), "{stderr}");
}

#[test]
fn test_classify_bad_catalog() {
    let tmp_dir = TempDir::new().unwrap();
    let catalog = make_file_in_dir(
        "stscicat.csv",
        tmp_dir.path(),
        "name,ra,dec,l,b\nBad star,12:30:00,-05:30:00,100.0,south\n",
    );
    let cmd = cv_regions()
        .args([
            "classify",
            "--catalog",
            &catalog.display().to_string(),
            "--output-dir",
            &tmp_dir.path().display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("south"), "{stderr}");
}
