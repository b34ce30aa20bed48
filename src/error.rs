//! .
//!
//! Every failure mode of the crate is a configuration error, surfaced at engine
//! construction (or image save, with the `drawing` feature). Contract violations of
//! the randomness port are assertions instead, see [`crate::random`].

use std::fmt;

#[derive(Debug)]
pub enum Error {
  /// `divider == 0` would make the update recurrence undefined.
  InvalidDivider,
  /// Grid dimensions must be positive; they are normalized to even internally.
  InvalidDimensions { width: i64, height: i64 },
  /// The anchor set may never be empty, the walk would have nothing to be pulled toward.
  EmptyAnchorSet,
  #[cfg(feature = "drawing")]
  Image(image::ImageError),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match self {
      InvalidDivider => write!(f, "divider must be non-zero"),
      InvalidDimensions { width, height } =>
        write!(f, "grid dimensions must be positive, got {}x{}", width, height),
      EmptyAnchorSet => write!(f, "anchor count must be at least 1"),
      #[cfg(feature = "drawing")]
      Image(err) => write!(f, "{}", err),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      #[cfg(feature = "drawing")]
      Error::Image(err) => Some(err),
      _ => None
    }
  }
}

#[cfg(feature = "drawing")]
impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self {
    Error::Image(e)
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
