use crate::rgb565;

/// Hex byte tokens per line in the emitted array body.
const TOKENS_PER_LINE: usize = 16;

/// Convert a row-major RGB888 pixel buffer (3 bytes per pixel) into the
/// little-endian RGB565 byte stream.
pub fn pack_pixels(rgb: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(rgb.len() / 3 * 2);
    for px in rgb.chunks_exact(3) {
        let value = rgb565::pack(px[0], px[1], px[2]);
        data.extend_from_slice(&value.to_le_bytes());
    }
    data
}

/// Render the C source for one image: the `<name>_map` byte array followed
/// by the `lv_img_dsc_t` descriptor referencing it.
pub fn render(name: &str, width: u32, height: u32, data: &[u8]) -> String {
    let mut out = String::new();
    out.push_str("#include \"lvgl.h\"\n\n");
    out.push_str("#ifndef LV_ATTRIBUTE_MEM_ALIGN\n");
    out.push_str("#define LV_ATTRIBUTE_MEM_ALIGN\n");
    out.push_str("#endif\n\n");

    out.push_str(&format!(
        "const LV_ATTRIBUTE_MEM_ALIGN uint8_t {name}_map[] = {{\n"
    ));
    let mut lines = data.chunks(TOKENS_PER_LINE).peekable();
    while let Some(line) = lines.next() {
        out.push_str("  ");
        for (i, byte) in line.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("0x{byte:02x}"));
        }
        if lines.peek().is_some() {
            out.push_str(",\n");
        } else {
            out.push('\n');
        }
    }
    out.push_str("};\n\n");

    out.push_str(&format!("const lv_img_dsc_t {name} = {{\n"));
    out.push_str("  .header.always_zero = 0,\n");
    out.push_str(&format!("  .header.w = {width},\n"));
    out.push_str(&format!("  .header.h = {height},\n"));
    out.push_str(&format!("  .data_size = {},\n", data.len()));
    out.push_str("  .header.cf = LV_IMG_CF_TRUE_COLOR,\n");
    out.push_str(&format!("  .data = {name}_map,\n"));
    out.push_str("};\n");
    out
}
