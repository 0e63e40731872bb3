//! Segment lookup shared by both companding laws

/// Upper bound (inclusive) of each of the 8 logarithmic segments
pub const SEG_END: [i32; 8] = [0xFF, 0x1FF, 0x3FF, 0x7FF, 0xFFF, 0x1FFF, 0x3FFF, 0x7FFF];

pub(crate) const SEG_SHIFT: u32 = 4;
pub(crate) const SEG_MASK: u8 = 0x70;
pub(crate) const QUANT_MASK: u8 = 0x0F;
pub(crate) const SIGN_BIT: u8 = 0x80;

/// Returns the index of the first threshold in `table` which is `>= magnitude`
///
/// Returns `table.len()` if the magnitude exceeds every threshold, which for [`SEG_END`] is 8.
pub fn segment_index(magnitude: i32, table: &[i32]) -> usize {
    table
        .iter()
        .position(|&end| magnitude <= end)
        .unwrap_or(table.len())
}

/// Segment number stored in bits 4..=6 of a companded byte
pub(crate) fn segment_of(value: u8) -> u32 {
    u32::from((value & SEG_MASK) >> SEG_SHIFT)
}
