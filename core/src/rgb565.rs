/// Pack 8-bit RGB channels into a 16-bit RGB565 value.
///
/// Channels are truncated (not rounded) to 5/6/5 bits and packed
/// most-significant-bits-first: `rrrrrggg gggbbbbb`.
pub fn pack(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r >> 3) as u16;
    let g6 = (g >> 2) as u16;
    let b5 = (b >> 3) as u16;
    (r5 << 11) | (g6 << 5) | b5
}

/// Split a packed value back into its quantized 8-bit channels.
///
/// The low bits dropped by [`pack`] stay zero, so packing the result
/// again yields the same 16-bit value.
pub fn unpack(value: u16) -> (u8, u8, u8) {
    let r5 = ((value >> 11) & 0x1f) as u8;
    let g6 = ((value >> 5) & 0x3f) as u8;
    let b5 = (value & 0x1f) as u8;
    (r5 << 3, g6 << 2, b5 << 3)
}
