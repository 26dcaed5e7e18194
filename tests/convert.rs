use gridref::{
    mgrs_to_geodetic, mgrs_to_ups, mgrs_to_utm, parse_mgrs, ups_to_geodetic, utm_to_geodetic,
    Error, GeodeticPosition, Hemisphere,
};

fn assert_within(reference: GeodeticPosition, mgrs: &str, tolerance_m: f64) {
    let coord = mgrs_to_geodetic(mgrs).unwrap();
    let dist = coord.haversine(&reference);
    assert!(
        dist < tolerance_m,
        "{mgrs} resolved {dist:.1}m from the reference"
    );
}

#[test]
fn equatorial_origin_of_zone_31() {
    // 31NAA66021 00000 sits on the intersection of the equator and the
    // prime meridian
    let coord = mgrs_to_geodetic("31NAA6602100000").unwrap();
    assert!(coord.latitude_degrees().abs() < 1e-4);
    assert!(coord.longitude_degrees().abs() < 1e-4);
}

#[test]
fn washington_monument() {
    assert_within(
        GeodeticPosition::from_degrees(38.8895, -77.0352),
        "18SUJ2348706483",
        30.,
    );
}

#[test]
fn southern_california() {
    assert_within(
        GeodeticPosition::from_degrees(33.2842, -117.1577),
        "11SMS8532082831",
        30.,
    );
}

#[test]
fn polar_squares_resolve_to_the_poles() {
    let coord = mgrs_to_geodetic("ZAH0000000000").unwrap();
    assert!((coord.latitude_degrees() - 90.).abs() < 1e-9);

    let coord = mgrs_to_geodetic("BAN0000000000").unwrap();
    assert!((coord.latitude_degrees() + 90.).abs() < 1e-9);
}

#[test]
fn ups_meridians_near_the_poles() {
    // 4 km west of the south pole, on the 90W meridian
    let coord = ups_to_geodetic(Hemisphere::South, 1_996_000., 2_000_000.).unwrap();
    assert!((coord.longitude_degrees() + 90.).abs() < 1e-9);
    assert!(coord.latitude_degrees() < -89.9);

    // 4 km past the north pole along the 180th meridian
    let coord = ups_to_geodetic(Hemisphere::North, 2_000_000., 2_004_000.).unwrap();
    assert!((coord.longitude_degrees().abs() - 180.).abs() < 1e-9);
    assert!(coord.latitude_degrees() > 89.9);
}

#[test]
fn precision_shrinks_with_the_digit_run() {
    let full = mgrs_to_geodetic("18SUJ2348706483").unwrap();

    // Truncating a digit pair moves the southwest corner by at most one
    // cell diagonal at that precision
    let cases = [
        ("18SUJ", 1.5e5),
        ("18SUJ20", 1.5e4),
        ("18SUJ2306", 1.5e3),
        ("18SUJ234064", 1.5e2),
        ("18SUJ23480648", 1.5e1),
    ];
    for (mgrs, tolerance_m) in cases {
        let coord = mgrs_to_geodetic(mgrs).unwrap();
        let dist = coord.haversine(&full);
        assert!(
            dist < tolerance_m,
            "{mgrs} resolved {dist:.1}m from the full-precision reference"
        );
    }
}

#[test]
fn whitespace_and_case_do_not_change_the_result() {
    let compact = mgrs_to_geodetic("18SUJ2348706483").unwrap();
    for variant in ["18S UJ 23487 06483", " 18suj2348706483 ", "18sUj 2348706483"] {
        let coord = mgrs_to_geodetic(variant).unwrap();
        assert_eq!(coord.latitude().to_bits(), compact.latitude().to_bits());
        assert_eq!(coord.longitude().to_bits(), compact.longitude().to_bits());
    }
}

#[test]
fn conversion_is_bitwise_reproducible() {
    for mgrs in ["18SUJ2348706483", "31NAA6602100000", "ZAH0000000000"] {
        let a = mgrs_to_geodetic(mgrs).unwrap();
        let b = mgrs_to_geodetic(mgrs).unwrap();
        assert_eq!(a.latitude().to_bits(), b.latitude().to_bits());
        assert_eq!(a.longitude().to_bits(), b.longitude().to_bits());
    }
}

#[test]
fn zone_edges_are_inclusive() {
    assert!(mgrs_to_geodetic("1NAA6602100000").is_ok());
    assert!(mgrs_to_geodetic("60NSA6602100000").is_ok());

    assert!(matches!(
        mgrs_to_geodetic("0NAA6602100000"),
        Err(Error::InvalidZone(_))
    ));
    assert!(matches!(
        mgrs_to_geodetic("61NAA6602100000"),
        Err(Error::InvalidZone(_))
    ));
}

#[test]
fn hemisphere_splits_at_the_equator() {
    // Band M ends just south of the equator, band N starts on it
    let south = mgrs_to_geodetic("31MAV6602199999").unwrap();
    assert!(south.latitude() < 0.);

    let north = mgrs_to_geodetic("31NAA6602100000").unwrap();
    assert!(north.latitude() >= 0.);
}

#[test]
fn designator_errors_carry_their_kind() {
    // I and O are never designator letters, in any position
    for mgrs in ["18IUJ0000", "18SIJ0000", "18SUO0000"] {
        assert!(
            matches!(mgrs_to_geodetic(mgrs), Err(Error::InvalidLetter(_))),
            "{mgrs}"
        );
    }

    // A is a polar zone letter, not a latitude band
    assert!(matches!(
        mgrs_to_geodetic("18AUJ0000"),
        Err(Error::InvalidBand(_))
    ));

    // Zone 18 uses the S..Z column set
    assert!(matches!(
        mgrs_to_geodetic("18SAJ0000"),
        Err(Error::InvalidLetter(_))
    ));

    // C is a latitude band, not a polar zone letter
    assert!(matches!(
        mgrs_to_geodetic("CAN0000"),
        Err(Error::InvalidUpsZone(_))
    ));
}

#[test]
fn odd_digit_runs_are_rejected() {
    assert!(matches!(
        mgrs_to_geodetic("18SUJ234"),
        Err(Error::OddDigitCount(_))
    ));
}

#[test]
fn direct_utm_resolution() {
    let coord = mgrs_to_utm(18, ['S', 'U', 'J'], 23487., 6483.).unwrap();
    assert_eq!(coord.zone(), 18);
    assert!(coord.hemisphere().is_north());
    assert!((coord.easting() - 323_487.).abs() < 1e-9);
    assert!((coord.northing() - 4_306_483.).abs() < 1e-9);
    assert_eq!(coord.to_string(), "18N 323487 4306483");

    let geodetic = coord.to_geodetic().unwrap();
    let reference = GeodeticPosition::from_degrees(38.8895, -77.0352);
    assert!(geodetic.haversine(&reference) < 30.);
}

#[test]
fn direct_ups_resolution() {
    let coord = mgrs_to_ups(['Z', 'A', 'H'], 0., 0.).unwrap();
    assert_eq!(coord.hemisphere(), Hemisphere::North);
    assert!((coord.easting() - 2_000_000.).abs() < 1e-9);
    assert!((coord.northing() - 2_000_000.).abs() < 1e-9);
    assert_eq!(coord.to_string(), "N 2000000 2000000");

    let geodetic = coord.to_geodetic().unwrap();
    assert!((geodetic.latitude_degrees() - 90.).abs() < 1e-9);
}

#[test]
fn projectors_reject_out_of_range_coordinates() {
    assert!(matches!(
        utm_to_geodetic(18, Hemisphere::North, 1_200_000., 4_000_000.),
        Err(Error::OutOfRange(_))
    ));
    assert!(matches!(
        utm_to_geodetic(18, Hemisphere::North, 500_000., -1.),
        Err(Error::OutOfRange(_))
    ));
    assert!(matches!(
        ups_to_geodetic(Hemisphere::North, 500_000., 2_000_000.),
        Err(Error::OutOfRange(_))
    ));
}

#[test]
fn parse_reports_malformed_strings() {
    for mgrs in ["", "18", "18S", "123SUJ00", "18SUJ23X87", "18SUJ234870064831"] {
        assert!(
            matches!(parse_mgrs(mgrs), Err(Error::MalformedString(_))),
            "{mgrs:?}"
        );
    }
}
