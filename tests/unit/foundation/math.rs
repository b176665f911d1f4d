use super::*;

#[test]
fn clamp_unit_handles_nan_and_range() {
    assert_eq!(clamp_unit(f32::NAN), 0.0);
    assert_eq!(clamp_unit(-3.0), 0.0);
    assert_eq!(clamp_unit(7.5), 1.0);
    assert_eq!(clamp_unit(0.25), 0.25);
}

#[test]
fn alpha_quantization_uses_biased_scale() {
    assert_eq!(alpha_to_u8(1.0), 255);
    assert_eq!(alpha_to_u8(0.0), 0);
    assert_eq!(alpha_to_u8(2.0), 255);
    // 0.5 * 255.9 = 127.95, truncated.
    assert_eq!(alpha_to_u8(0.5), 127);
    // A byte-quantized alpha survives the biased scale unchanged.
    for k in 0u8..=255 {
        assert_eq!(alpha_to_u8(f32::from(k) / 255.0), k);
    }
}

#[test]
fn premul_full_alpha_is_identity_and_zero_alpha_truncates() {
    for c in [0u16, 1, 255, 256, 32768, 65535] {
        assert_eq!(premul_u16(c, 255), c);
        assert_eq!(high_byte(premul_u16(c, 0)), 0);
    }
    assert_eq!(premul_u16(65535, 127), 32767);
}

#[test]
fn luma_weights_sum_to_identity_on_gray() {
    for k in [0u16, 257, 128 * 257, 65535] {
        assert_eq!(luma_u8(k, k, k, [76, 150, 30]), high_byte(k));
    }
}

#[test]
fn u16_quantization_maps_byte_grid_exactly() {
    for k in 0u16..=255 {
        assert_eq!(unit_to_u16(f32::from(k) / 255.0), k * 257);
    }
    assert_eq!(unit_to_u16(0.5), 32768);
    assert_eq!(unit_to_u16(-1.0), 0);
}

#[test]
fn unit_from_u8_spans_unit_interval() {
    assert_eq!(unit_from_u8(0), 0.0);
    assert_eq!(unit_from_u8(255), 1.0);
    assert_eq!(unit_from_u8(51), 0.2);
}
