// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;
use indoc::indoc;
use tempfile::TempDir;
use vec1::vec1;

use super::*;
use crate::{
    coord::Region,
    ipac::read_ipac_table,
    photometry::{PhotometryError, RegionSummary, StatsError},
    report::{HistogramBinning, ReportError, Reporter},
};

const CATALOG: &str = indoc! {"
    name,ra,dec,l,b
    Bulge star,17:45:40.0,-29:00:28,0.5,-1.0
    Disk star,12:30:00,-05:30:00,100.0,2.0
    Halo star,01:00:00,+45:00:00,200.0,-40.0
    Edge star,02:00:00,+10:00:00,7.0,7.0
    Gap star,03:00:00,+10:00:00,100.0,8.0
    Lost star,04:00:00,+10:00:00,,
"};

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn read_radecs(path: &Path) -> Vec<(f64, f64)> {
    let table = read_ipac_table(path, &[]).unwrap();
    let ras = table.column("ra").unwrap().to_doubles().unwrap();
    let decs = table.column("dec").unwrap().to_doubles().unwrap();
    ras.into_iter()
        .zip(decs)
        .map(|(ra, dec)| (ra.unwrap(), dec.unwrap()))
        .collect()
}

#[test]
fn test_classify() {
    let tmp_dir = TempDir::new().unwrap();
    let catalog = write_file(tmp_dir.path(), "stscicat.csv", CATALOG);
    let params = ClassifyParams {
        catalog,
        output_dir: tmp_dir.path().join("regions"),
    };

    let result = params.run();
    assert!(result.is_ok(), "{}", result.unwrap_err());
    let summary = result.unwrap();
    assert_eq!(summary.num_rows, 6);
    assert_eq!(summary.missing_coords, ["Lost star"]);
    assert_eq!(summary.num_untagged, 1);
    assert_eq!(summary.region_counts[&Region::Bulge], 2);
    assert_eq!(summary.region_counts[&Region::Disk], 1);
    assert_eq!(summary.region_counts[&Region::Halo], 1);

    let bulge = read_radecs(&params.output_path(Region::Bulge));
    assert_eq!(bulge.len(), 2);
    assert_abs_diff_eq!(bulge[0].0, 266.416667, epsilon = 1e-6);
    assert_abs_diff_eq!(bulge[0].1, -29.007778, epsilon = 1e-6);
    // The edge star is at l = 7, |b| = 7; that's only bulge-eligible.
    assert_abs_diff_eq!(bulge[1].0, 30.0, epsilon = 1e-6);
    assert_abs_diff_eq!(bulge[1].1, 10.0, epsilon = 1e-6);

    let disk = read_radecs(&params.output_path(Region::Disk));
    assert_eq!(disk.len(), 1);
    assert_abs_diff_eq!(disk[0].0, 187.5, epsilon = 1e-6);
    assert_abs_diff_eq!(disk[0].1, -5.5, epsilon = 1e-6);

    let halo = read_radecs(&params.output_path(Region::Halo));
    assert_eq!(halo.len(), 1);
    assert_abs_diff_eq!(halo[0].0, 15.0, epsilon = 1e-6);
    assert_abs_diff_eq!(halo[0].1, 45.0, epsilon = 1e-6);
}

#[test]
fn test_classify_output_names() {
    let params = ClassifyParams {
        catalog: PathBuf::from("stscicat.csv"),
        output_dir: PathBuf::from("out"),
    };
    assert_eq!(
        params.output_path(Region::Bulge),
        PathBuf::from("out/inBulge.ipac")
    );
    assert_eq!(
        params.output_path(Region::Disk),
        PathBuf::from("out/inDisk.ipac")
    );
    assert_eq!(
        params.output_path(Region::Halo),
        PathBuf::from("out/inHalo.ipac")
    );
}

#[test]
fn test_classify_writes_empty_tables() {
    let tmp_dir = TempDir::new().unwrap();
    let catalog = write_file(
        tmp_dir.path(),
        "stscicat.csv",
        "name,ra,dec,l,b\nDisk star,12:30:00,-05:30:00,100.0,2.0\n",
    );
    let params = ClassifyParams {
        catalog,
        output_dir: tmp_dir.path().to_path_buf(),
    };
    params.run().unwrap();
    assert!(read_radecs(&params.output_path(Region::Halo)).is_empty());
    assert!(read_radecs(&params.output_path(Region::Bulge)).is_empty());
}

#[test]
fn test_classify_bad_coordinates() {
    let tmp_dir = TempDir::new().unwrap();
    let catalog = write_file(
        tmp_dir.path(),
        "stscicat.csv",
        "name,ra,dec,l,b\nBad star,12:3O:00,-05:30:00,100.0,2.0\n",
    );
    let params = ClassifyParams {
        catalog,
        output_dir: tmp_dir.path().to_path_buf(),
    };
    match params.run() {
        Err(ClassifyError::Coordinates { name, .. }) => assert_eq!(name, "Bad star"),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_untagged_rows_need_no_coordinates() {
    let tmp_dir = TempDir::new().unwrap();
    let catalog = write_file(
        tmp_dir.path(),
        "stscicat.csv",
        "name,ra,dec,l,b\nGap star,??,??,100.0,8.0\n",
    );
    let params = ClassifyParams {
        catalog,
        output_dir: tmp_dir.path().to_path_buf(),
    };
    let summary = params.run().unwrap();
    assert_eq!(summary.num_untagged, 1);
    assert!(summary.region_counts.values().all(|&c| c == 0));
}

/// Remembers what it was asked to report.
#[derive(Default)]
struct RecordingReporter {
    calls: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn report_region_stats(
        &mut self,
        region: Region,
        summary: &RegionSummary,
    ) -> Result<(), ReportError> {
        self.calls.push(format!("stats {region} {}", summary.count));
        Ok(())
    }

    fn render_histogram(&mut self, region: Region, eruptions: &[f64]) -> Result<(), ReportError> {
        self.calls
            .push(format!("histogram {region} {}", eruptions.len()));
        Ok(())
    }

    fn render_boxplot(&mut self, populations: &[(Region, Vec<f64>)]) -> Result<(), ReportError> {
        let regions: Vec<String> = populations.iter().map(|(r, _)| r.to_string()).collect();
        self.calls.push(format!("boxplot {}", regions.join(",")));
        Ok(())
    }
}

const ZTF_DATA: &str = indoc! {"
    \\fixlen = T
    |   oid   | medianmag | minmag | medmagerr |
    |   long  |   double  | double |   double  |
       1          5.0       3.0       0.1
       2          6.0       4.0       0.2
       3         20.0      10.0       0.5
"};

fn eruptions_params(dir: &Path, regions: &[(Region, &str)]) -> EruptionsParams {
    let ztf_table = write_file(dir, "ztf.tbl", ZTF_DATA);
    let inputs: Vec<RegionInput> = regions
        .iter()
        .map(|(region, ids)| RegionInput {
            region: *region,
            ztf_table: ztf_table.clone(),
            allow_list: write_file(dir, &format!("{region}_ids.csv"), ids),
        })
        .collect();
    EruptionsParams {
        inputs: inputs.try_into().unwrap(),
        binning: HistogramBinning::default(),
        plot_dir: None,
    }
}

#[test]
fn test_eruptions() {
    let tmp_dir = TempDir::new().unwrap();
    let params = eruptions_params(
        tmp_dir.path(),
        &[
            (Region::Disk, "id_col\n1\n2\n"),
            (Region::Bulge, "id_col\n3\n"),
            (Region::Halo, "id_col\n1\n3\n"),
        ],
    );
    let mut reporter = RecordingReporter::default();
    let result = params.run_with(&mut reporter);
    assert!(result.is_ok(), "{}", result.unwrap_err());
    let summaries = result.unwrap();

    assert_eq!(
        summaries.keys().copied().collect::<Vec<_>>(),
        [Region::Disk, Region::Bulge, Region::Halo]
    );
    let disk = summaries[&Region::Disk];
    assert_eq!(disk.count, 2);
    assert_abs_diff_eq!(disk.mean, 2.0);
    assert_abs_diff_eq!(disk.sem, 0.1_f64.sqrt() / 2.0, epsilon = 1e-12);
    let bulge = summaries[&Region::Bulge];
    assert_abs_diff_eq!(bulge.mean, 10.0);
    assert_abs_diff_eq!(bulge.sem, 0.5 * 2_f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(summaries[&Region::Halo].mean, 6.0);

    assert_eq!(
        reporter.calls,
        [
            "stats Disk 2",
            "stats Bulge 1",
            "stats Halo 2",
            "histogram Disk 2",
            "histogram Bulge 1",
            "histogram Halo 2",
            "boxplot Disk,Bulge,Halo",
        ]
    );
}

#[test]
fn test_eruptions_without_plots() {
    let tmp_dir = TempDir::new().unwrap();
    let params = eruptions_params(tmp_dir.path(), &[(Region::Halo, "id_col\n2\n")]);
    let summaries = params.run().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_abs_diff_eq!(summaries[&Region::Halo].mean, 2.0);
}

#[test]
fn test_eruptions_empty_selection() {
    let tmp_dir = TempDir::new().unwrap();
    let params = eruptions_params(
        tmp_dir.path(),
        &[(Region::Disk, "id_col\n1\n"), (Region::Halo, "id_col\n99\n")],
    );
    let mut reporter = RecordingReporter::default();
    match params.run_with(&mut reporter) {
        Err(EruptionsError::Stats { region, err, .. }) => {
            assert_eq!(region, Region::Halo);
            assert_eq!(err, StatsError::EmptySelection);
        }
        other => panic!("Unexpected result: {other:?}"),
    }
    // Nothing is drawn when a region fails.
    assert_eq!(reporter.calls, ["stats Disk 1"]);
}

#[test]
fn test_eruptions_missing_table() {
    let tmp_dir = TempDir::new().unwrap();
    let mut params = eruptions_params(tmp_dir.path(), &[(Region::Disk, "id_col\n1\n")]);
    params.inputs = vec1![RegionInput {
        region: Region::Disk,
        ztf_table: tmp_dir.path().join("missing.tbl"),
        allow_list: params.inputs[0].allow_list.clone(),
    }];
    let result = params.run_with(&mut RecordingReporter::default());
    assert!(matches!(
        result,
        Err(EruptionsError::Photometry(PhotometryError::Ipac(_)))
    ));
}
