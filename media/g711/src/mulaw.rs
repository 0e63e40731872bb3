//! G.711 μ-law algorithm aka. PCMU

use crate::segment::{QUANT_MASK, SEG_END, SEG_SHIFT, SIGN_BIT, segment_index, segment_of};

/// Bias added to the magnitude before the segment search
pub const BIAS: i32 = 0x84;

/// Encode an i16 audio sample to a μ-law sample
pub fn encode(x: i16) -> u8 {
    let pcm = i32::from(x);

    let (magnitude, mask) = if pcm < 0 {
        (BIAS - pcm, 0x7F)
    } else {
        (pcm + BIAS, 0xFF)
    };

    let seg = segment_index(magnitude, &SEG_END);

    if seg >= SEG_END.len() {
        return (0x7F ^ mask) as u8;
    }

    let uval = ((seg as i32) << SEG_SHIFT) | ((magnitude >> (seg + 3)) & i32::from(QUANT_MASK));

    (uval ^ mask) as u8
}

/// Decode a μ-law sample to an i16 audio sample
pub fn decode(y: u8) -> i16 {
    let v = !y;

    let t = ((i32::from(v & QUANT_MASK) << 3) + BIAS) << segment_of(v);

    if v & SIGN_BIT != 0 {
        (BIAS - t) as i16
    } else {
        (t - BIAS) as i16
    }
}
