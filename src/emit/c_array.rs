use std::io::{self, Write};

use crate::emit::layout::CArrayLayout;

/// Writes `data` as a C source file: include line, size constant, then an
/// aligned `unsigned char` array of `0x%02x, ` literals.
///
/// A line break goes before every value whose index is a positive multiple
/// of `layout.values_per_line`. Every value, the last included, is followed
/// by `", "`. The array is closed with `};` on its own line.
///
/// `declared_size` is written as given; it is not taken from `data.len()`.
pub fn write_c_array<W: Write>(writer: &mut W, data: &[u8], layout: &CArrayLayout) -> io::Result<()> {
    let per_line = layout.values_per_line.max(1);

    writeln!(writer, "#include \"{}\"", layout.header)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "const unsigned int {} = {};",
        layout.size_symbol, layout.declared_size
    )?;
    writeln!(writer)?;
    writeln!(
        writer,
        "__attribute__((aligned({}))) const unsigned char {}[] = {{",
        layout.alignment, layout.data_symbol
    )?;

    for (i, byte) in data.iter().enumerate() {
        if i != 0 && i % per_line == 0 {
            writeln!(writer)?;
        }
        write!(writer, "0x{:02x}, ", byte)?;
    }

    write!(writer, "\n}};\n")
}

/// Same output as [`write_c_array`], collected into a `String`.
pub fn render_c_array(data: &[u8], layout: &CArrayLayout) -> String {
    let mut buf = Vec::with_capacity(data.len() * 6 + 256);
    // Writing into a Vec cannot fail.
    let _ = write_c_array(&mut buf, data, layout);
    String::from_utf8_lossy(&buf).into_owned()
}
