use super::*;

#[test]
fn identity_maps_endpoints_and_midpoint() {
    let g = Gamma::NONE;
    assert!(g.is_identity());
    assert_eq!(g.r_to_u16(0.0), 0);
    assert_eq!(g.g_to_u16(1.0), 65535);
    assert_eq!(g.b_to_u16(0.5), 32768);
    assert_eq!(g.r_to_u16(-1.0), 0);
    assert_eq!(g.r_to_u16(3.0), 65535);
}

#[test]
fn channels_are_independent() {
    let g = Gamma::new(1.0, 2.0, 0.5).unwrap();
    assert_eq!(g.r_to_u16(0.5), 32768);
    assert_eq!(g.g_to_u16(0.5), (0.5f32.powf(2.0) * 65535.0).round() as u16);
    assert_eq!(g.b_to_u16(0.25), (0.25f32.powf(0.5) * 65535.0).round() as u16);
    assert!(g.g_to_u16(0.5) < g.r_to_u16(0.5));
    assert!(g.b_to_u16(0.5) > g.r_to_u16(0.5));
    assert_eq!(g.exponents(), [1.0, 2.0, 0.5]);
}

#[test]
fn forward_mapping_is_monotonic() {
    let g = Gamma::uniform(1.0 / 2.2).unwrap();
    let mut prev = 0u16;
    for i in 0..=1000 {
        let v = g.r_to_u16(i as f32 / 1000.0);
        assert!(v >= prev);
        prev = v;
    }
    assert_eq!(prev, 65535);
}

#[test]
fn invalid_exponents_are_rejected() {
    assert!(Gamma::new(0.0, 1.0, 1.0).is_err());
    assert!(Gamma::new(1.0, -2.0, 1.0).is_err());
    assert!(Gamma::uniform(f32::NAN).is_err());
    assert!(Gamma::uniform(f32::INFINITY).is_err());
}

#[test]
fn deserialize_validates() {
    let g: Gamma = serde_json::from_str(r#"{"r":2.2,"g":2.2,"b":2.2}"#).unwrap();
    assert_eq!(g, Gamma::uniform(2.2).unwrap());
    assert!(serde_json::from_str::<Gamma>(r#"{"r":0,"g":1,"b":1}"#).is_err());
    assert!(serde_json::from_str::<Gamma>(r#"{"r":1,"g":1,"b":1,"x":1}"#).is_err());
}
