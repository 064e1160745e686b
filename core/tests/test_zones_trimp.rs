// tests/test_zones_trimp.rs
use sportperf_core::*;

#[test]
fn zones_are_contiguous_and_end_at_hr_max() {
    let z = hr_zones(190.0, 60.0);
    assert_eq!(z.zones.len(), 5);
    assert!((z.zones[0].lower_bpm - 125.0).abs() < 1e-9);
    for w in z.zones.windows(2) {
        assert_eq!(w[0].upper_bpm, w[1].lower_bpm, "gap between {} and {}", w[0].name, w[1].name);
    }
    assert_eq!(z.zones[4].upper_bpm, 190.0);
    assert_eq!(z.zones[4].name, "Zone 5 (VO2 Max)");
}

#[test]
fn zone_lookup_and_fraction() {
    let z = hr_zones(190.0, 60.0);
    assert_eq!(z.zone_for(160.0).map(|x| x.zone), Some(3));
    assert_eq!(z.zone_for(190.0).map(|x| x.zone), Some(5));
    assert!(z.zone_for(100.0).is_none());

    let f = z.reserve_fraction(&z.zones[1]);
    assert!((f - 0.7).abs() < 1e-9);

    let flat = hr_zones(60.0, 60.0);
    assert_eq!(flat.reserve_fraction(&flat.zones[0]), 0.5);
}

#[test]
fn trimp_closed_form_male() {
    // delta = 90/130; 60 * delta * 0.64 * e^(1.92 * delta)
    let t = trimp(60.0, 150.0, 60.0, 190.0, Sex::Male);
    assert!((t - 100.4).abs() < 1e-9, "trimp={t}");
    assert_eq!(classify_trimp(t), LoadBand::High);
}

#[test]
fn trimp_female_weighting() {
    let t = trimp(60.0, 150.0, 60.0, 190.0, Sex::Female);
    assert!((t - 113.5).abs() < 1e-9, "trimp={t}");
}

#[test]
fn trimp_degenerate_reserve_is_zero() {
    assert_eq!(trimp(60.0, 150.0, 190.0, 190.0, Sex::Male), 0.0);
    assert_eq!(trimp(60.0, 150.0, 200.0, 190.0, Sex::Female), 0.0);
}

#[test]
fn trimp_bands() {
    assert_eq!(classify_trimp(10.0), LoadBand::Light);
    assert_eq!(classify_trimp(50.0), LoadBand::Moderate);
    assert_eq!(classify_trimp(149.9), LoadBand::High);
    assert_eq!(classify_trimp(150.0), LoadBand::VeryHigh);
    assert_eq!(LoadBand::High.description(), "Intense session");
}
