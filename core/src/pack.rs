use alloc::{format, string::String, vec::Vec};
use core::fmt::Write;

use log::{debug, warn};

use crate::{
    config::{PackingConfig, Remainder},
    grid::PixelGrid,
};

/// Samples darker than this become a set bit.
pub const THRESHOLD: f32 = 0.5;

/// Maps a luminance sample to its bit: dark pixels are 1, light pixels 0.
#[inline]
pub fn binarize(luminance: f32) -> u32 {
    if luminance < THRESHOLD { 1 } else { 0 }
}

/// Formats one unit as a C hex literal.
///
/// Units wider than a nibble are padded to at least two digits so byte
/// arrays line up; narrower units are never padded.
pub fn format_unit(value: u32, bits_per_unit: u8) -> String {
    let mut token = String::new();
    push_unit(&mut token, value, bits_per_unit);
    token
}

fn push_unit(out: &mut String, value: u32, bits_per_unit: u8) {
    // Writing into a String cannot fail
    let _ = if bits_per_unit > 4 {
        write!(out, "{value:#04x}")
    } else {
        write!(out, "{value:#x}")
    };
}

/// Packs every row of `grid` into units of `bits_per_unit` pixels, first
/// pixel in the most significant bit.
///
/// Returns no rows at all when the config has an invalid unit width.
pub fn pack_units(grid: &impl PixelGrid, config: &PackingConfig) -> Vec<Vec<u32>> {
    if !config.is_valid() {
        return Vec::new();
    }
    let bits = config.bits_per_unit as usize;
    let width = grid.width();

    (0..grid.height())
        .map(|y| {
            let mut row = Vec::with_capacity(width.div_ceil(bits));
            let mut unit = 0u32;
            let mut pos = 0usize;
            for x in 0..width {
                unit |= binarize(grid.luminance(x, y)) << (bits - pos - 1);
                pos += 1;
                if pos == bits {
                    row.push(unit);
                    unit = 0;
                    pos = 0;
                }
            }
            if pos != 0 && config.remainder == Remainder::Flush {
                row.push(unit);
            }
            row
        })
        .collect()
}

/// Renders `grid` as a PROGMEM C array declaration.
///
/// An invalid unit width (0 or above 32) produces an empty string.
pub fn pack(grid: &impl PixelGrid, config: &PackingConfig) -> String {
    if !config.is_valid() {
        warn!(
            "Ignoring conversion with {} bits per unit",
            config.bits_per_unit
        );
        return String::new();
    }

    let width = grid.width();
    let height = grid.height();
    let bits = config.bits_per_unit;
    debug!("Packing {width}x{height} grid at {bits} bits per unit");

    let rows = pack_units(grid, config);

    // The separator is only left out when the final unit ends exactly on the
    // last pixel. A dropped remainder on the last row keeps the ", ".
    let ends_on_edge =
        config.remainder == Remainder::Flush || width % bits as usize == 0;

    let mut output = String::new();
    output.push_str(&format!("// width: {width} height: {height}\n"));
    output.push_str(&format!("PROGMEM const unsigned char {}[] = {{\n", config.name));
    output.push_str(&format!("{width}, {height},"));
    for (y, row) in rows.iter().enumerate() {
        output.push('\n');
        for (i, &unit) in row.iter().enumerate() {
            push_unit(&mut output, unit, bits);
            let last = y + 1 == height && i + 1 == row.len() && ends_on_edge;
            if !last {
                output.push_str(", ");
            }
        }
    }
    output.push_str("\n\n};");

    debug!(
        "Emitted {} units",
        rows.iter().map(Vec::len).sum::<usize>()
    );
    output
}
