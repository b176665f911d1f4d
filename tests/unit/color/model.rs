use super::*;

#[test]
fn clamped_limits_every_channel() {
    let c = Color::new(-0.5, 0.25, 4.0, f32::NAN).clamped();
    assert_eq!(c, Color::new(0.0, 0.25, 1.0, 0.0));
}

#[test]
fn premult_then_demult_recovers_color() {
    let c = Color::new(0.8, 0.4, 0.2, 0.5);
    let p = c.premult_alpha();
    assert_eq!(p, Color::new(0.4, 0.2, 0.1, 0.5));
    let d = p.demult_alpha();
    assert!((d.r - 0.8).abs() < 1e-6);
    assert!((d.g - 0.4).abs() < 1e-6);
    assert!((d.b - 0.2).abs() < 1e-6);
}

#[test]
fn demult_at_zero_alpha_leaves_channels() {
    let c = Color::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(c.demult_alpha(), c);
    let odd = Color::new(0.3, 0.2, 0.1, 0.0);
    assert_eq!(odd.demult_alpha(), odd);
}

#[test]
fn set_yuv_with_zero_chroma_is_gray_and_keeps_alpha() {
    let mut c = Color::new(0.9, 0.1, 0.3, 0.25);
    c.set_yuv(0.5, 0.0, 0.0);
    assert_eq!(c, Color::new(0.5, 0.5, 0.5, 0.25));
    assert!((c.get_y() - 0.5).abs() < 1e-6);
    assert!(c.get_u().abs() < 1e-6);
    assert!(c.get_v().abs() < 1e-6);
}

#[test]
fn raw_bytes_are_little_endian_rgba() {
    let c = Color::new(1.0, -2.0, 0.5, 0.0);
    let raw = c.to_raw_bytes();
    assert_eq!(raw.len(), Color::RAW_SIZE);
    assert_eq!(&raw[0..4], &1.0f32.to_le_bytes());
    assert_eq!(&raw[4..8], &(-2.0f32).to_le_bytes());
    assert_eq!(&raw[8..12], &0.5f32.to_le_bytes());
    assert_eq!(&raw[12..16], &0.0f32.to_le_bytes());
}

#[test]
fn raw_bytes_roundtrip_is_bit_exact() {
    let c = Color::new(f32::NAN, f32::INFINITY, -0.0, 1.0e-38);
    let back = Color::from_raw_bytes(c.to_raw_bytes());
    assert_eq!(back.r.to_bits(), c.r.to_bits());
    assert_eq!(back.g.to_bits(), c.g.to_bits());
    assert_eq!(back.b.to_bits(), c.b.to_bits());
    assert_eq!(back.a.to_bits(), c.a.to_bits());
}

#[test]
fn parse_three_and_four_components() {
    assert_eq!(
        "1, 0.5, 0".parse::<Color>().unwrap(),
        Color::new(1.0, 0.5, 0.0, 1.0)
    );
    assert_eq!(
        "0.1,0.2,0.3,0.4".parse::<Color>().unwrap(),
        Color::new(0.1, 0.2, 0.3, 0.4)
    );
    assert!("1,2".parse::<Color>().is_err());
    assert!("1,x,3".parse::<Color>().is_err());
}
