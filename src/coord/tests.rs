// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_ra_to_degrees() {
    let result = sexagesimal_to_degrees("12:30:00", AngleKind::Hours);
    assert!(result.is_ok(), "{:?}", result.unwrap_err());
    assert_abs_diff_eq!(result.unwrap(), 187.5);

    let ra = sexagesimal_to_degrees("00:00:36", AngleKind::Hours).unwrap();
    assert_abs_diff_eq!(ra, 0.15, epsilon = 1e-12);
}

#[test]
fn test_dec_to_degrees() {
    let dec = sexagesimal_to_degrees("-5:30:00", AngleKind::Degrees).unwrap();
    assert_abs_diff_eq!(dec, -5.5);

    let dec = sexagesimal_to_degrees("+45:15:36", AngleKind::Degrees).unwrap();
    assert_abs_diff_eq!(dec, 45.26, epsilon = 1e-12);

    // A negative zero in the leading component still makes the angle negative.
    let dec = sexagesimal_to_degrees("-00:30:00", AngleKind::Degrees).unwrap();
    assert_abs_diff_eq!(dec, -0.5);
}

#[test]
fn test_missing_components_are_zero() {
    let ra = sexagesimal_to_degrees("10::", AngleKind::Hours).unwrap();
    assert_abs_diff_eq!(ra, 150.0);

    let ra = sexagesimal_to_degrees("10", AngleKind::Hours).unwrap();
    assert_abs_diff_eq!(ra, 150.0);

    let dec = sexagesimal_to_degrees("10:30", AngleKind::Degrees).unwrap();
    assert_abs_diff_eq!(dec, 10.5);

    let dec = sexagesimal_to_degrees(":30:", AngleKind::Degrees).unwrap();
    assert_abs_diff_eq!(dec, 0.5);
}

#[test]
fn test_whitespace_is_stripped() {
    let ra = sexagesimal_to_degrees("  12 : 30 : 00 \n", AngleKind::Hours).unwrap();
    assert_abs_diff_eq!(ra, 187.5);
}

#[test]
fn test_bad_components() {
    let result = sexagesimal_to_degrees("12:3O:00", AngleKind::Hours);
    assert_eq!(
        result,
        Err(SexagesimalError::BadComponent {
            input: "12:3O:00".to_string(),
            component: "minutes",
            value: "3O".to_string(),
        })
    );

    assert!(matches!(
        sexagesimal_to_degrees("ab:00:00", AngleKind::Degrees),
        Err(SexagesimalError::BadComponent {
            component: "leading",
            ..
        })
    ));

    assert!(matches!(
        sexagesimal_to_degrees("1:2:3:4", AngleKind::Degrees),
        Err(SexagesimalError::TooManyComponents(_))
    ));
}

#[test]
fn test_classify_examples() {
    assert_eq!(
        classify(5.0, 7.0),
        RegionTags {
            bulge: true,
            disk: false,
            halo: false
        }
    );

    // l = 5 is outside the disk's longitudes, however close b is to the plane.
    let tags = classify(5.0, 6.9);
    assert!(tags.bulge);
    assert!(!tags.disk);
    assert!(!tags.halo);

    assert_eq!(
        classify(100.0, 11.0),
        RegionTags {
            bulge: false,
            disk: false,
            halo: true
        }
    );

    assert_eq!(
        classify(100.0, -3.0),
        RegionTags {
            bulge: false,
            disk: true,
            halo: false
        }
    );
}

#[test]
fn test_classify_boundaries() {
    // Bulge boundaries are inclusive, disk boundaries exclusive.
    for l in [7.0, 353.0] {
        let tags = classify(l, 0.0);
        assert!(tags.bulge, "l = {l}");
        assert!(!tags.disk, "l = {l}");
    }
    let tags = classify(7.000001, 0.0);
    assert!(!tags.bulge);
    assert!(tags.disk);

    // |b| = 7 at a disk longitude falls through the gap.
    assert!(classify(100.0, 7.0).is_empty());
    assert!(classify(100.0, -7.0).is_empty());
    // As does anything between 7 and 10 degrees of latitude.
    assert!(classify(0.0, 8.5).is_empty());
    // |b| = 10 is not halo.
    assert!(classify(100.0, 10.0).is_empty());
    assert!(classify(100.0, -10.5).halo);
}

#[test]
fn test_classify_does_not_wrap_longitude() {
    // -5 degrees is physically the same as 355 degrees, but longitudes must be
    // normalised before classifying.
    assert!(classify(355.0, 1.0).bulge);
    let tags = classify(-5.0, 1.0);
    assert!(tags.bulge);
    assert!(!tags.disk);
    let tags = classify(365.0, 1.0);
    assert!(tags.bulge);
}

#[test]
fn test_region_tags_iteration() {
    let tags = RegionTags {
        bulge: true,
        disk: false,
        halo: true,
    };
    assert_eq!(tags.regions().collect::<Vec<_>>(), [Region::Bulge, Region::Halo]);
    assert!(RegionTags::default().regions().next().is_none());
}

#[test]
fn test_region_names() {
    assert_eq!(Region::Bulge.to_string(), "Bulge");
    assert_eq!(Region::Disk.file_stem(), "inDisk");
    assert_eq!("halo".parse::<Region>().unwrap(), Region::Halo);
}
