//! Errors

use thiserror::Error;

/// Errors returned by scanpaint
#[derive(Debug, Error)]
pub enum Error {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("mesh index {index} out of range for {count} vertices")]
    MeshIndex { index: usize, count: usize },

    #[error("mesh {name} has {len} entries for {count} vertices")]
    MeshAttribute { name: &'static str, len: usize, count: usize },

    #[error("mesh index count {0} is not a multiple of 3")]
    MeshIndexCount(usize),

    #[error("image dimensions {width}x{height} do not match {len} pixels")]
    Dimensions { width: usize, height: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
