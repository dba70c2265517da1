// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use indoc::indoc;
use tempfile::TempDir;

use crate::*;

const ZTF_DATA: &str = indoc! {"
    \\fixlen = T
    \\ Generated by the IRSA ZTF object search
    |         oid         | medianmag |  minmag | medmagerr | filtercode |
    |         long        |   double  |  double |   double  |    char    |
    |                     |    mag    |   mag   |    mag    |            |
    |         null        |    null   |   null  |    null   |    null    |
                       1         5.0       3.0        0.1           zg
                       2         6.0       4.0        0.2           zr
     1234567890123456789        19.0      12.0        0.3           zg
"};

#[test]
fn test_eruptions_statistics() {
    let tmp_dir = TempDir::new().unwrap();
    let ztf = make_file_in_dir("inDisk_ztf_data.txt", tmp_dir.path(), ZTF_DATA);
    let ids = make_file_in_dir("diskCV_LC.csv", tmp_dir.path(), "id_col\n1\n2\n");
    let halo_ids = make_file_in_dir(
        "haloCV_LC.csv",
        tmp_dir.path(),
        "id_col\n1234567890123456789\n",
    );

    let cmd = cv_regions()
        .args([
            "eruptions",
            "--disk-ztf",
            &ztf.display().to_string(),
            "--disk-ids",
            &ids.display().to_string(),
            "--halo-ztf",
            &ztf.display().to_string(),
            "--halo-ids",
            &halo_ids.display().to_string(),
            "--no-plots",
        ])
        .ok();
    assert!(cmd.is_ok(), "eruptions failed on simple input: {:?}", cmd.unwrap_err());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Disk average: 2.0, Error: 0.158113883"),
        "{stdout}"
    );
    assert!(stdout.contains("Halo average: 7.0, Error: 0.42426406"), "{stdout}");
    assert!(stdout.contains("cv-regions eruptions complete."), "{stdout}");
}

#[test]
fn test_eruptions_empty_selection() {
    let tmp_dir = TempDir::new().unwrap();
    let ztf = make_file_in_dir("inBulge_ztf_data.txt", tmp_dir.path(), ZTF_DATA);
    let ids = make_file_in_dir("bulgeCV_LC.csv", tmp_dir.path(), "id_col\n99\n");

    let cmd = cv_regions()
        .args([
            "eruptions",
            "--bulge-ztf",
            &ztf.display().to_string(),
            "--bulge-ids",
            &ids.display().to_string(),
            "--no-plots",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error: Bulge: No records"), "{stderr}");
}

#[test]
fn test_eruptions_incomplete_region() {
    let tmp_dir = TempDir::new().unwrap();
    let ztf = make_file_in_dir("inHalo_ztf_data.txt", tmp_dir.path(), ZTF_DATA);
    let cmd = cv_regions()
        .args(["eruptions", "--halo-ztf", &ztf.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Halo needs both"), "{stderr}");
}
