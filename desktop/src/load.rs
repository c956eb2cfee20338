use std::path::Path;

use bitmapper_core::{GridError, Luma8Grid};
use image::{DynamicImage, GrayImage};
use log::info;

use crate::error::Result;

/// A decoded image reduced to 8 bit luminance.
pub struct LoadedBitmap {
    file_name: String,
    image: GrayImage,
}

pub fn load_bitmap(path: &Path) -> Result<LoadedBitmap> {
    let image = image::open(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bitmap = LoadedBitmap::from_image(file_name, image);
    info!("Loaded {}", bitmap.title());
    Ok(bitmap)
}

impl LoadedBitmap {
    pub fn from_image(file_name: String, image: DynamicImage) -> Self {
        Self {
            file_name,
            image: image.into_luma8(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn grid(&self) -> core::result::Result<Luma8Grid<'_>, GridError> {
        Luma8Grid::new(
            self.image.width() as usize,
            self.image.height() as usize,
            self.image.as_raw(),
        )
    }

    /// Window title naming the file and its dimensions
    pub fn title(&self) -> String {
        format!(
            "Bitmap to C array: {} (width: {} height: {})",
            self.file_name,
            self.width(),
            self.height()
        )
    }
}
