use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    /// A slide index outside `0..len` was requested.
    #[error("slide index {index} is out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no image files found in directory: {}", .0.display())]
    NoImages(PathBuf),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
