//! This is a library for playing the [chaos game](https://en.wikipedia.org/wiki/Chaos_game) in ℤ².
//!
//! It is split into three main modules: [`random`] supplying a seeded randomness port,
//! [`engine`] for generating the point stream, and [`drawing`] for displaying it
//! (requires `drawing` feature).
//! A cursor is repeatedly pulled a fraction of the distance toward a randomly chosen
//! anchor point; the emitted points converge to a fractal attractor — the Sierpinski
//! triangle for three anchors and divider 2.
//!
//! # Basic usage
//! The engine only ever talks to a [`engine::Renderer`], so any consumer of the point
//! stream will do:
//! ```
//! use chaos_game::{
//!   engine::{AnchorMode, ChaosEngine, Config, Renderer},
//!   geometry::{Color, GridPoint, GridSize},
//!   random::Pcg64Source
//! };
//!
//! struct Collect(Vec<(GridPoint, Color)>);
//! impl Renderer for Collect {
//!   fn draw_dot(&mut self, point: GridPoint, color: Color) {
//!     self.0.push((point, color));
//!   }
//! }
//!
//! let config = Config {
//!   size: GridSize::new(800, 800),
//!   anchors: AnchorMode::FixedTriangle,
//!   divider: 2
//! };
//! // same seed, same stream; swap for `Pcg64Source::from_entropy()` otherwise
//! let engine = ChaosEngine::new(config, Pcg64Source::seed_from_u64(0)).unwrap();
//! let mut out = Collect(vec![]);
//! engine.run(10_000, &mut out);
//! assert_eq!(out.0.len(), 3 + 1 + 10_000);
//! ```
//!
//! With the `drawing` feature, [`drawing::ImageRenderer`] rasterizes the stream onto
//! an RGBA canvas:
//! ```no_run
//! # #[cfg(feature = "drawing")] {
//! use chaos_game::{
//!   drawing::ImageRenderer,
//!   engine::{AnchorMode, ChaosEngine, Config},
//!   geometry::GridSize,
//!   random::Pcg64Source
//! };
//!
//! let config = Config {
//!   size: GridSize::new(800, 800),
//!   anchors: AnchorMode::FixedTriangle,
//!   divider: 2
//! };
//! let engine = ChaosEngine::new(config, Pcg64Source::seed_from_u64(0)).unwrap();
//! let mut renderer = ImageRenderer::new(engine.size());
//! engine.run(1_000_000, &mut renderer);
//! renderer.save("out.png").unwrap();
//! # }
//! ```
//!
//! The engine is deterministic: the entire output sequence is a function of the seed
//! and the call order, nothing else. All randomness flows through
//! [`random::RandomSource`], so any session can be replayed in tests with a recording
//! stub in place of an image backend.

pub mod error;
pub mod util;
pub mod geometry;
pub mod random;
pub mod engine;
#[cfg(feature = "drawing")]
pub mod drawing;
