use super::*;

#[test]
fn luma_weights_are_truncated_and_sum_to_256() {
    assert_eq!(LUMA_WEIGHTS, [76, 150, 30]);
    assert_eq!(LUMA_WEIGHTS.iter().sum::<u32>(), 256);
}

#[test]
fn decode_inverts_encode() {
    let rgb = [0.8, 0.3, 0.1];
    let back = project(&DECODE_YUV, project(&ENCODE_YUV, rgb));
    for (a, b) in rgb.iter().zip(back) {
        assert!((a - b).abs() < 1e-4, "{a} vs {b}");
    }
}

#[test]
fn zero_chroma_decodes_to_gray() {
    let rgb = project(&DECODE_YUV, [0.6, 0.0, 0.0]);
    assert_eq!(rgb, [0.6, 0.6, 0.6]);
}
