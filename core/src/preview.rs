use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point},
};

use crate::{grid::PixelGrid, pack::binarize};

/// Draws the grid as the packer sees it: set bits are `BinaryColor::On`.
pub fn draw_binarized<G, D>(grid: &G, target: &mut D) -> Result<(), D::Error>
where
    G: PixelGrid + ?Sized,
    D: DrawTarget<Color = BinaryColor>,
{
    let width = grid.width();
    let pixels = (0..grid.height()).flat_map(move |y| {
        (0..width).map(move |x| {
            let color = if binarize(grid.luminance(x, y)) == 1 {
                BinaryColor::On
            } else {
                BinaryColor::Off
            };
            Pixel(Point::new(x as i32, y as i32), color)
        })
    });
    target.draw_iter(pixels)
}
