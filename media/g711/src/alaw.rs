//! G.711 A-law algorithm aka. PCMA

use crate::segment::{QUANT_MASK, SEG_END, SEG_SHIFT, SIGN_BIT, segment_index, segment_of};

/// Mask for positive samples, sign bit set and even bits inverted
const POSITIVE_MASK: i32 = 0xD5;
/// Mask for negative samples, only even bits inverted
const NEGATIVE_MASK: i32 = 0x55;

/// Encode an i16 audio sample to a A-law sample
pub fn encode(x: i16) -> u8 {
    let mut pcm = i32::from(x);

    let mask = if pcm >= 0 {
        POSITIVE_MASK
    } else if pcm < -8 {
        pcm = -pcm - 8;
        NEGATIVE_MASK
    } else {
        // [-8, -1] maps to the same code as zero
        return POSITIVE_MASK as u8;
    };

    let seg = segment_index(pcm, &SEG_END);

    if seg >= SEG_END.len() {
        return (0x7F ^ mask) as u8;
    }

    let quant = if seg < 2 {
        (pcm >> 4) & i32::from(QUANT_MASK)
    } else {
        (pcm >> (seg + 3)) & i32::from(QUANT_MASK)
    };

    let aval = ((seg as i32) << SEG_SHIFT) | quant;

    (aval ^ mask) as u8
}

/// Decode a A-law sample to an i16 audio sample
///
/// The magnitude is only kept if the sign bit is set after removing the even bit inversion,
/// otherwise the sample reconstructs to zero.
pub fn decode(y: u8) -> i16 {
    let v = y ^ NEGATIVE_MASK as u8;

    let mut t = i32::from(v & QUANT_MASK) << 4;

    match segment_of(v) {
        0 => t += 8,
        1 => t += 0x108,
        seg => t = (t + 0x108) << (seg - 1),
    }

    let sign = i32::from(v & SIGN_BIT != 0);

    (sign * t) as i16
}
