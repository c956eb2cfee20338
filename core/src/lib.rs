/*!
Converts bitmaps into C array literals for display and LED matrix firmware.

Pixels are binarized (dark is 1) and packed most significant bit first into
units of a configurable width, one hex token per unit.

## Usage
```
# use bitmapper_core::{LumaGrid, PackingConfig, pack};
let grid = LumaGrid::from_fn(8, 1, |x, _| if x < 4 { 0.0 } else { 1.0 });
let text = pack(&grid, &PackingConfig::new(8).unwrap());
assert!(text.contains("\n0xf0\n"));
```
*/

#![no_std]

extern crate alloc;

pub mod config;
pub mod grid;
pub mod pack;
pub mod preview;


pub use config::{ConfigError, PackingConfig, Remainder};
pub use grid::{GridError, Luma8Grid, LumaGrid, PixelGrid};
pub use pack::{binarize, format_unit, pack, pack_units};
