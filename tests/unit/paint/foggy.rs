use super::*;

#[test]
fn bands_start_evenly_spread() {
    let p = FogPainter::foggy(Density::default());
    assert_eq!(p.scales()[0], 1.0);
    assert!((p.scales()[4] - 1.52).abs() < 1e-12);
    assert_eq!(p.weather(), WeatherType::Foggy);
    assert_eq!(FogPainter::hazy(Density::default()).weather(), WeatherType::Hazy);
}

#[test]
fn scale_wraps_just_above_one() {
    let s = next_scale(MAX_SCALE - 1e-6, 1.0);
    assert!(s > 1.0 && s < 1.01, "{s}");
    let mut s = 1.0;
    for _ in 0..200_000 {
        s = next_scale(s, 1.0);
        assert!((1.0..=MAX_SCALE).contains(&s));
    }
}

#[test]
fn band_alpha_peaks_mid_growth() {
    assert_eq!(band_alpha(1.0), 0.0);
    assert!((band_alpha(1.0 + (MAX_SCALE - 1.0) / 2.0) - 255.0).abs() < 1e-9);
    assert!(band_alpha(MAX_SCALE).abs() < 1e-9);
}

#[test]
fn each_instance_advances_every_band() {
    let mut p = FogPainter::foggy(Density::new(1.0).unwrap());
    p.attach();
    p.resize(160, 120);
    let before = *p.scales();
    let mut canvas = Canvas::new(160, 120);
    p.draw(&mut canvas);
    let expected = next_scale(next_scale(before[2], 1.0), 1.0);
    assert!((p.scales()[2] - expected).abs() < 1e-15);

    let mut hazy = FogPainter::hazy(Density::new(1.0).unwrap());
    hazy.resize(160, 120);
    let before = *hazy.scales();
    hazy.draw(&mut canvas);
    let mut expected = before[1];
    for _ in 0..HAZY.instances.len() {
        expected = next_scale(expected, HAZY.drift);
    }
    assert!((hazy.scales()[1] - expected).abs() < 1e-15);
    assert_eq!(hazy.phase().get("scale_1"), Some(expected));
}

#[test]
fn dots_follow_the_hexagon_outline() {
    let mut p = FogPainter::foggy(Density::default());
    p.resize(400, 400);
    let layout = p.layout.as_ref().unwrap();
    assert_eq!(layout.radius, 140.0);
    assert!((83..=84).contains(&layout.dots.len()));
    for d in &layout.dots {
        let r = d.to_vec2().hypot();
        assert!(r <= 140.0 + 1e-6 && r >= 140.0 * 0.866 - 1e-6);
    }
}
