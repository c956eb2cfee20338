use bitmapper_core::{PixelGrid, preview::draw_binarized};
use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};
use log::info;

const BLACK: u32 = 0xFF000000;
const WHITE: u32 = 0xFFFFFFFF;

/// ARGB pixel buffer in the layout minifb expects.
pub struct PreviewBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PreviewBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![WHITE; width * height],
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl OriginDimensions for PreviewBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for PreviewBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 {
                continue;
            }
            let (x, y) = (coord.x as usize, coord.y as usize);
            if x >= self.width || y >= self.height {
                continue;
            }
            // set bits are dark pixels
            self.pixels[y * self.width + x] = match color {
                BinaryColor::On => BLACK,
                BinaryColor::Off => WHITE,
            };
        }
        Ok(())
    }
}

/// Shows the binarized image until the window is closed or Escape is pressed.
/// `S` cycles through the scale factors.
pub fn show(title: &str, grid: &impl PixelGrid) -> crate::error::Result<()> {
    let mut buffer = PreviewBuffer::new(grid.width().max(1), grid.height().max(1));
    let Ok(()) = draw_binarized(grid, &mut buffer);

    let mut scale = minifb::Scale::X4;
    let mut window = create_window(title, &buffer, scale)?;
    while window.is_open() && !window.is_key_down(minifb::Key::Escape) {
        if window.is_key_pressed(minifb::Key::S, minifb::KeyRepeat::No) {
            scale = match scale {
                minifb::Scale::X1 => minifb::Scale::X2,
                minifb::Scale::X2 => minifb::Scale::X4,
                minifb::Scale::X4 => minifb::Scale::X8,
                _ => minifb::Scale::X1,
            };
            info!("Toggling scale");
            window = create_window(title, &buffer, scale)?;
        }
        window.update_with_buffer(buffer.pixels(), buffer.width, buffer.height)?;
    }
    Ok(())
}

fn create_window(
    title: &str,
    buffer: &PreviewBuffer,
    scale: minifb::Scale,
) -> Result<minifb::Window, minifb::Error> {
    let options = minifb::WindowOptions {
        borderless: false,
        title: true,
        resize: true,
        scale,
        ..minifb::WindowOptions::default()
    };
    let mut window = minifb::Window::new(title, buffer.width, buffer.height, options)?;
    window.set_target_fps(30);
    Ok(window)
}
