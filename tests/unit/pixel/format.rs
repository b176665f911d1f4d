use super::*;

#[test]
fn channel_count_per_structure() {
    assert_eq!(PixelFormat::RGB.channel_count(), 3);
    assert_eq!(PixelFormat::GRAY.channel_count(), 1);
    assert_eq!(PixelFormat::RGBA.channel_count(), 4);
    assert_eq!(PixelFormat::GRAY_ALPHA.channel_count(), 2);
    assert_eq!((PixelFormat::RGBA | PixelFormat::DEPTH).channel_count(), 5);
    assert_eq!((PixelFormat::GRAY | PixelFormat::DEPTH).channel_count(), 2);
    assert_eq!(PixelFormat::RAW.channel_count(), Color::RAW_SIZE);
    assert_eq!(
        (PixelFormat::RAW | PixelFormat::GRAY | PixelFormat::DEPTH).channel_count(),
        Color::RAW_SIZE
    );
}

#[test]
fn raw_needs_both_bits() {
    assert!(PixelFormat::RAW.is_raw());
    assert!(PixelFormat::RAW.has_alpha());
    let half = PixelFormat::RAW.without(PixelFormat::ALPHA);
    assert!(!half.is_raw());
    assert_eq!(half.channel_count(), 3);
}

#[test]
fn has_all_requires_every_bit() {
    let f = PixelFormat::BGRA;
    assert!(f.has_all(PixelFormat::BGR));
    assert!(f.has_all(PixelFormat::BGR | PixelFormat::ALPHA));
    assert!(!f.has_all(PixelFormat::BGR | PixelFormat::DEPTH));
    assert!(f.has_all(PixelFormat::RGB));
}

#[test]
fn flags_compose_by_bits() {
    let a = PixelFormat::ALPHA | PixelFormat::BGR;
    let b = PixelFormat::BGR.with(PixelFormat::ALPHA);
    assert_eq!(a, b);
    assert_eq!(a.bits(), 0b1010);
    assert_eq!(a & PixelFormat::BGR, PixelFormat::BGR);
    assert_eq!(a.without(PixelFormat::BGR), PixelFormat::ALPHA);
    let mut c = PixelFormat::RGB;
    c |= PixelFormat::ALPHA;
    assert_eq!(c, PixelFormat::RGBA);
}

#[test]
fn from_bits_rejects_unknown_bits() {
    assert_eq!(PixelFormat::from_bits(0x0002), Some(PixelFormat::ALPHA));
    assert_eq!(PixelFormat::from_bits(0x07FF).map(|f| f.bits()), Some(0x07FF));
    assert_eq!(PixelFormat::from_bits(0x0800), None);
}

#[test]
fn parse_presets_and_flags() {
    assert_eq!("rgba".parse::<PixelFormat>().unwrap(), PixelFormat::RGBA);
    assert_eq!("BGRA".parse::<PixelFormat>().unwrap(), PixelFormat::BGRA);
    assert_eq!(
        "bgra+premultiplied".parse::<PixelFormat>().unwrap(),
        PixelFormat::BGRA | PixelFormat::ALPHA_PREMULTIPLIED
    );
    assert_eq!(
        "rgb + alpha + alpha_inverted".parse::<PixelFormat>().unwrap(),
        PixelFormat::RGBA | PixelFormat::ALPHA_INVERTED
    );
    assert_eq!("raw".parse::<PixelFormat>().unwrap(), PixelFormat::RAW);
}

#[test]
fn parse_rejects_bad_tokens() {
    assert!("".parse::<PixelFormat>().is_err());
    assert!("rgba+".parse::<PixelFormat>().is_err());
    assert!("rgba+sparkle".parse::<PixelFormat>().is_err());
    assert!("0xffff".parse::<PixelFormat>().is_err());
}

#[test]
fn display_names() {
    assert_eq!(PixelFormat::RGB.to_string(), "rgb");
    assert_eq!(PixelFormat::BGRA.to_string(), "rgb+alpha+bgr");
    assert_eq!(PixelFormat::GRAY_ALPHA.to_string(), "gray+alpha");
    assert_eq!(
        (PixelFormat::RAW | PixelFormat::BGR).to_string(),
        "raw+bgr"
    );
    assert_eq!(format!("{:?}", PixelFormat::ARGB), "PixelFormat(rgb+alpha+alpha_start)");
    // The lone raw marker bit has no name of its own.
    let marker = PixelFormat::RAW.without(PixelFormat::ALPHA);
    assert_eq!(marker.to_string(), "rgb+0x200");
}

#[test]
fn display_parse_roundtrip_for_every_bit_pattern() {
    for bits in 0u16..(1 << 11) {
        let f = PixelFormat::from_bits(bits).unwrap();
        let back: PixelFormat = f.to_string().parse().unwrap();
        assert_eq!(back, f, "{f}");
    }
}

#[test]
fn serde_uses_text_form() {
    let f = PixelFormat::ABGR | PixelFormat::ALPHA_PREMULTIPLIED;
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(json, r#""rgb+alpha+bgr+alpha_start+premultiplied""#);
    let back: PixelFormat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, f);
    assert!(serde_json::from_str::<PixelFormat>(r#""nope""#).is_err());
}
