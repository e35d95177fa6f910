use core::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

/// Declaration whose identifier ends in the conventional `_map` suffix.
static MAP_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:static\s+)?const\s+(?:LV_ATTRIBUTE_MEM_ALIGN\s+)?uint(?:8|16)_t\s+\w+_map\s*\[\]\s*=\s*\{([^}]+)\}")
        .expect("array pattern compiles")
});

/// Fallback: same shape with any identifier.
static ANY_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:static\s+)?const\s+(?:LV_ATTRIBUTE_MEM_ALIGN\s+)?uint(?:8|16)_t\s+\w+\s*\[\]\s*=\s*\{([^}]+)\}")
        .expect("array pattern compiles")
});

static HEX_BYTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x([0-9a-fA-F]{2})").expect("hex pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// No qualifying array declaration in the source.
    NoArray,
    /// An array matched but its initializer held no hex byte literals.
    NoHexValues,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::NoArray => write!(f, "could not find pixel data array"),
            ExtractError::NoHexValues => write!(f, "could not parse hex values from array"),
        }
    }
}

impl std::error::Error for ExtractError {}

type Result<T> = core::result::Result<T, ExtractError>;

/// Scan a C source for the pixel data array and return its bytes.
///
/// This is a lenient scanner, not a C parser. Matching is ordered: a
/// declaration whose name ends in `_map` wins; failing that, any
/// `const uint8_t`/`uint16_t` array is accepted. The matched initializer
/// (up to its first closing brace) is then mined for `0xNN` literals in
/// textual order, one output byte each.
pub fn extract_pixel_data(source: &str) -> Result<Vec<u8>> {
    let initializer = find_initializer(source).ok_or(ExtractError::NoArray)?;

    let data: Vec<u8> = HEX_BYTE
        .captures_iter(initializer)
        .filter_map(|cap| u8::from_str_radix(&cap[1], 16).ok())
        .collect();
    if data.is_empty() {
        return Err(ExtractError::NoHexValues);
    }
    debug!("Extracted {} bytes from initializer", data.len());
    Ok(data)
}

fn find_initializer(source: &str) -> Option<&str> {
    for re in [&MAP_ARRAY, &ANY_ARRAY] {
        if let Some(cap) = re.captures(source) {
            return cap.get(1).map(|m| m.as_str());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carray;

    #[test]
    fn extracts_simple_array() {
        let src = "static const uint8_t frame1_map[] = { 0x01, 0x02, 0xff };";
        assert_eq!(extract_pixel_data(src), Ok(vec![0x01, 0x02, 0xff]));
    }

    #[test]
    fn accepts_alignment_attribute_and_no_static() {
        let src = "const LV_ATTRIBUTE_MEM_ALIGN uint8_t anim_frame_0_map[] = {\n  0x00, 0xf8,\n  0xe0, 0x07\n};";
        assert_eq!(extract_pixel_data(src), Ok(vec![0x00, 0xf8, 0xe0, 0x07]));
    }

    #[test]
    fn accepts_sixteen_bit_element_type() {
        let src = "static const uint16_t frame2_map[] = {0xab,0xcd};";
        assert_eq!(extract_pixel_data(src), Ok(vec![0xab, 0xcd]));
    }

    #[test]
    fn ignores_initializer_formatting() {
        let src = "static  const\tuint8_t x_map [] = {\n\n\t0x10 ,\n   0x20,0x30\n};";
        assert_eq!(extract_pixel_data(src), Ok(vec![0x10, 0x20, 0x30]));
    }

    #[test]
    fn falls_back_to_unsuffixed_name() {
        let src = "static const uint8_t pixels[] = { 0xde, 0xad };";
        assert_eq!(extract_pixel_data(src), Ok(vec![0xde, 0xad]));
    }

    #[test]
    fn prefers_map_suffix_over_earlier_arrays() {
        let src = "const uint8_t palette[] = { 0x11 };\n\
                   static const uint8_t frame_map[] = { 0x22, 0x33 };";
        assert_eq!(extract_pixel_data(src), Ok(vec![0x22, 0x33]));
    }

    #[test]
    fn keeps_textual_order_across_comments() {
        let src = "const uint8_t a_map[] = { 0x01, /* row 0 */ 0x02,\n 0x03 /* end */ };";
        assert_eq!(extract_pixel_data(src), Ok(vec![0x01, 0x02, 0x03]));
    }

    #[test]
    fn rejects_source_without_array() {
        let src = "int main(void) { return 0; }";
        assert_eq!(extract_pixel_data(src), Err(ExtractError::NoArray));
    }

    #[test]
    fn rejects_wider_element_types() {
        let src = "static const uint32_t words[] = { 0x01, 0x02 };";
        assert_eq!(extract_pixel_data(src), Err(ExtractError::NoArray));
    }

    #[test]
    fn rejects_array_without_hex_literals() {
        let src = "static const uint8_t counts_map[] = { 1, 2, 3 };";
        assert_eq!(extract_pixel_data(src), Err(ExtractError::NoHexValues));
    }

    #[test]
    fn round_trips_rendered_frames() {
        let rgb = [255, 0, 0, 0, 255, 0, 0, 0, 255, 32, 64, 96];
        let data = carray::pack_pixels(&rgb);
        let src = carray::render("anim_frame_2", 2, 2, &data);
        assert_eq!(extract_pixel_data(&src), Ok(data));
    }
}
