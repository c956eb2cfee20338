use alloc::vec::Vec;
use core::fmt;

/// Read-only view of a rectangular image as luminance samples.
///
/// `luminance` is only called with `x < width()` and `y < height()` and
/// returns a value in `0.0..=1.0`, where `0.0` is black.
pub trait PixelGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn luminance(&self, x: usize, y: usize) -> f32;
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn luminance(&self, x: usize, y: usize) -> f32 {
        (**self).luminance(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The sample buffer holds fewer than `width * height` entries
    BufferTooSmall { expected: usize, actual: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BufferTooSmall { expected, actual } => write!(
                f,
                "pixel buffer too small: expected {expected} samples, got {actual}"
            ),
        }
    }
}

/// Owned grid of floating point luminance samples, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct LumaGrid {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl LumaGrid {
    pub fn new(width: usize, height: usize, samples: Vec<f32>) -> Result<Self, GridError> {
        let expected = width * height;
        if samples.len() < expected {
            return Err(GridError::BufferTooSmall {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut samples = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            samples,
        }
    }
}

impl PixelGrid for LumaGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn luminance(&self, x: usize, y: usize) -> f32 {
        self.samples[y * self.width + x]
    }
}

/// Borrowed 8 bit grayscale buffer, as produced by most image decoders.
#[derive(Debug, Clone, Copy)]
pub struct Luma8Grid<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> Luma8Grid<'a> {
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, GridError> {
        let expected = width * height;
        if data.len() < expected {
            return Err(GridError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

impl PixelGrid for Luma8Grid<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn luminance(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x] as f32 / 255.0
    }
}
