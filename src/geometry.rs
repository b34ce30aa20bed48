//! .
//!
//! The engine walks an integer lattice centered on the origin, `[-w/2, w/2] × [-h/2, h/2]`,
//! with the y axis pointing up — [`GridSpace`]. Image backends address pixels from the
//! top-left corner with y pointing down — [`PixelSpace`]. Both dimensions of the grid are
//! kept even so the lattice stays symmetric around zero.

use euclid::{Point2D, Size2D};

/// Centered integer lattice basis, y-up
#[derive(Debug, Copy, Clone)]
pub struct GridSpace;
/// Pixel coordinate basis, origin in top-left corner, y-down
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type GridPoint = Point2D<i64, GridSpace>;
pub type GridSize = Size2D<i64, GridSpace>;

/// A 24-bit RGB color, canonically displayed as `#rrggbb`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
  pub const BLACK: Color = Color(0x000000);
  pub const WHITE: Color = Color(0xffffff);

  /// The upper byte is discarded, only 24 bits are significant.
  pub fn new(rgb: u32) -> Self {
    Color(rgb & 0xffffff)
  }
  pub fn rgb(self) -> (u8, u8, u8) {
    ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
  }
  #[cfg(feature = "drawing")]
  pub fn to_rgba(self) -> image::Rgba<u8> {
    let (r, g, b) = self.rgb();
    image::Rgba([r, g, b, 0xff])
  }
}

impl std::fmt::Display for Color {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "#{:06x}", self.0)
  }
}

/// Map a grid point onto the pixel raster of a `size`-dimensioned image.
///
/// Returns `None` off-canvas: with a divider of 1, or a negative one, the walk
/// is free to leave the grid, and backends are expected to skip such points.
pub fn to_pixel_space(
  point: GridPoint,
  size: GridSize
) -> Option<Point2D<u32, PixelSpace>> {
  let x = point.x + size.width / 2;
  let y = size.height / 2 - point.y;
  (x >= 0 && x < size.width && y >= 0 && y < size.height)
    .then(|| Point2D::new(x as u32, y as u32))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn color_display() {
    assert_eq!(Color::new(0xabcdef).to_string(), "#abcdef");
    assert_eq!(Color::BLACK.to_string(), "#000000");
    assert_eq!(Color::new(0xff00ff00).to_string(), "#00ff00");
  }

  #[test] fn grid_to_pixel() {
    let size = GridSize::new(800, 600);
    assert_eq!(to_pixel_space(GridPoint::new(0, 0), size), Some(Point2D::new(400, 300)));
    assert_eq!(to_pixel_space(GridPoint::new(-400, 300), size), Some(Point2D::new(0, 0)));
    assert_eq!(to_pixel_space(GridPoint::new(399, -299), size), Some(Point2D::new(799, 599)));
    // bottom and right edges fall just outside the raster
    assert_eq!(to_pixel_space(GridPoint::new(400, 0), size), None);
    assert_eq!(to_pixel_space(GridPoint::new(0, -300), size), None);
    assert_eq!(to_pixel_space(GridPoint::new(0, 9000), size), None);
  }
}
