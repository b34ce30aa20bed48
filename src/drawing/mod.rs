//! .
//!
//! Image backend for the point stream. The engine has no idea this module exists;
//! it only ever talks to the [`Renderer`] port, and any failure here (an off-canvas
//! dot, a failed save) never feeds back into the chaos sequence.

use {
  crate::{
    engine::Renderer,
    error::Result,
    geometry::{self, Color, GridPoint, GridSize}
  },
  image::RgbaImage,
  std::path::Path
};


/// Dots are filled discs of 5 pixels diameter.
const DOT_RADIUS: i64 = 2;

/// [`Renderer`] rasterizing dots onto an in-memory RGBA canvas.
pub struct ImageRenderer {
  image: RgbaImage,
  size: GridSize
}

impl ImageRenderer {
  /// White canvas matching the grid dimensions, one pixel per lattice cell.
  pub fn new(size: GridSize) -> Self {
    let mut image = RgbaImage::new(size.width as u32, size.height as u32);
    image.pixels_mut().for_each(|pixel| *pixel = Color::WHITE.to_rgba());
    Self { image, size }
  }

  /// Encodes the canvas by the extension of `path` (png in normal use).
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    self.image.save(path)?;
    Ok(())
  }

  pub fn into_image(self) -> RgbaImage {
    self.image
  }
}

impl Renderer for ImageRenderer {
  fn draw_dot(&mut self, point: GridPoint, color: Color) {
    let center = match geometry::to_pixel_space(point, self.size) {
      Some(center) => center.to_i64(),
      None => return
    };
    let rgba = color.to_rgba();
    for dy in -DOT_RADIUS..=DOT_RADIUS {
      for dx in -DOT_RADIUS..=DOT_RADIUS {
        if dx * dx + dy * dy > DOT_RADIUS * DOT_RADIUS {
          continue;
        }
        let (x, y) = (center.x + dx, center.y + dy);
        if x < 0 || x >= self.size.width || y < 0 || y >= self.size.height {
          continue;
        }
        self.image.put_pixel(x as u32, y as u32, rgba);
      }
    }
  }
}
