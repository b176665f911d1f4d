/// BT.601 RGB → YUV matrix. Row 0 is the luma projection.
pub const ENCODE_YUV: [[f32; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [-0.168_736, -0.331_264, 0.5],
    [0.5, -0.418_688, -0.081_312],
];

/// Inverse of [`ENCODE_YUV`].
pub const DECODE_YUV: [[f32; 3]; 3] = [
    [1.0, 0.0, 1.402],
    [1.0, -0.344_136, -0.714_136],
    [1.0, 1.772, 0.0],
];

/// Luma weights in 8.8 fixed point, truncated from the encode matrix.
///
/// Blue takes the remainder so the weights always sum to exactly 256.
pub const LUMA_WEIGHTS: [u32; 3] = {
    let r = (ENCODE_YUV[0][0] * 256.0) as u32;
    let g = (ENCODE_YUV[0][1] * 256.0) as u32;
    [r, g, 256 - r - g]
};

pub(crate) fn project(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/color/yuv.rs"]
mod tests;
