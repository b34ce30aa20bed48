//! The chaos game proper.
//!
//! [`ChaosEngine`] owns a normalized configuration, an ordered anchor set and a seed
//! point; [`ChaosEngine::run`] replays the iterative walk, handing every dot to a
//! [`Renderer`]. The walk keeps no memory beyond the last point, so a session of
//! millions of rolls runs in constant space.

use {
  crate::{
    error::{Error, Result},
    geometry::{Color, GridPoint, GridSize},
    random::RandomSource,
    util::floor_div
  },
  std::sync::atomic::{AtomicBool, Ordering}
};


/// A dot of the stream: lattice position plus its color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColorPoint {
  pub point: GridPoint,
  pub color: Color
}

/// How the anchor sequence is produced at initialization.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnchorMode {
  /// `n` anchors, each at an independently random position on the grid.
  ///
  /// Only the classical 3-anchor, divider-2 game carries a convergence guarantee;
  /// other parameterizations are accepted and produce an unspecified (but bounded
  /// by arithmetic, never crashing) picture.
  Random(usize),
  /// Three fixed vertices: bottom-left, bottom-right, top center.
  FixedTriangle
}

#[derive(Debug, Copy, Clone)]
pub struct Config {
  pub size: GridSize,
  pub anchors: AnchorMode,
  pub divider: i64
}

impl Default for Config {
  fn default() -> Self {
    Self {
      size: GridSize::new(800, 800),
      anchors: AnchorMode::Random(3),
      divider: 2
    }
  }
}

/// Output port of the engine. Rendering is a side effect consumer of the point
/// stream; its failures do not influence the sequence itself.
pub trait Renderer {
  fn draw_dot(&mut self, point: GridPoint, color: Color);
}

pub struct ChaosEngine<R: RandomSource> {
  size: GridSize,
  divider: i64,
  anchors: Vec<ColorPoint>,
  seed_point: ColorPoint,
  rng: R
}

impl<R: RandomSource> ChaosEngine<R> {
  /// Validates the configuration and generates the seed point and the anchor
  /// sequence, in that order. Draws from `rng` happen in a fixed sequence, so a
  /// given seed always yields the same session.
  pub fn new(config: Config, mut rng: R) -> Result<Self> {
    if config.divider == 0 {
      return Err(Error::InvalidDivider);
    }
    if config.size.width <= 0 || config.size.height <= 0 {
      return Err(Error::InvalidDimensions {
        width: config.size.width,
        height: config.size.height
      });
    }
    if let AnchorMode::Random(0) = config.anchors {
      return Err(Error::EmptyAnchorSet);
    }
    // odd dimensions are rounded up, the lattice must stay symmetric around zero
    let size = GridSize::new(
      config.size.width + (config.size.width & 1),
      config.size.height + (config.size.height & 1)
    );

    let seed_point = ColorPoint {
      point: random_coord(&mut rng, size),
      color: Color::BLACK
    };
    let anchors = match config.anchors {
      AnchorMode::Random(count) => (0..count)
        .map(|_| ColorPoint {
          point: random_coord(&mut rng, size),
          color: random_color(&mut rng)
        })
        .collect(),
      AnchorMode::FixedTriangle => {
        let (w, h) = (size.width / 2, size.height / 2);
        [(-w, -h), (w, -h), (0, h)].iter()
          .map(|&(x, y)| ColorPoint {
            point: GridPoint::new(x, y),
            color: random_color(&mut rng)
          })
          .collect()
      }
    };

    Ok(Self { size, divider: config.divider, anchors, seed_point, rng })
  }

  /// Normalized (even) grid dimensions.
  pub fn size(&self) -> GridSize { self.size }
  pub fn divider(&self) -> i64 { self.divider }
  pub fn anchors(&self) -> &[ColorPoint] { &self.anchors }
  pub fn seed_point(&self) -> ColorPoint { self.seed_point }

  /// Emits the anchors in sequence order, then the seed point, then exactly
  /// `rolls` chaos points. Consumes the engine: a finished walk is not
  /// restartable, construct a new engine to replay.
  pub fn run(self, rolls: u64, renderer: &mut impl Renderer) {
    self.run_until(rolls, renderer, &AtomicBool::new(false));
  }

  /// Same as [`Self::run`], polling `stop` once per iteration so a long session
  /// can be interrupted from another thread. Every iteration is self-contained,
  /// stopping between two of them cannot corrupt the output.
  pub fn run_until(mut self, rolls: u64, renderer: &mut impl Renderer, stop: &AtomicBool) {
    for anchor in &self.anchors {
      renderer.draw_dot(anchor.point, anchor.color);
    }
    renderer.draw_dot(self.seed_point.point, self.seed_point.color);

    let mut last = self.seed_point;
    for _ in 0..rolls {
      if stop.load(Ordering::Relaxed) {
        break;
      }
      let anchor = *self.rng.choice(&self.anchors);
      last = ColorPoint {
        point: GridPoint::new(
          floor_div(last.point.x + anchor.point.x, self.divider),
          floor_div(last.point.y + anchor.point.y, self.divider)
        ),
        // the dot remembers which attractor pulled it, not where it came from
        color: anchor.color
      };
      renderer.draw_dot(last.point, last.color);
    }
  }
}

fn random_coord<R: RandomSource>(rng: &mut R, size: GridSize) -> GridPoint {
  GridPoint::new(
    rng.uniform_int(-size.width / 2, size.width / 2),
    rng.uniform_int(-size.height / 2, size.height / 2)
  )
}

fn random_color<R: RandomSource>(rng: &mut R) -> Color {
  Color::new(rng.uniform_int(0, 0xffffff) as u32)
}
