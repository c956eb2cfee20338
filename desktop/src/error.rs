use std::{fmt, path::PathBuf};

use bitmapper_core::{ConfigError, GridError};

#[derive(Debug)]
pub enum Error {
    Image(image::ImageError),
    Io(std::io::Error),
    Grid(GridError),
    Config(ConfigError),
    Window(minifb::Error),
    /// The dropped file does not have an accepted extension
    Rejected(PathBuf),
    NoInput,
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Image(err) => write!(f, "failed to decode image: {err}"),
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Grid(err) => write!(f, "{err}"),
            Error::Config(err) => write!(f, "invalid configuration: {err}"),
            Error::Window(err) => write!(f, "unable to open preview window: {err}"),
            Error::Rejected(path) => write!(f, "unsupported file: {}", path.display()),
            Error::NoInput => f.write_str("no input file given"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Window(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<GridError> for Error {
    fn from(err: GridError) -> Self {
        Error::Grid(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<minifb::Error> for Error {
    fn from(err: minifb::Error) -> Self {
        Error::Window(err)
    }
}
