use {
  anyhow::Result,
  chaos_game::{
    drawing::ImageRenderer,
    engine::{AnchorMode, ChaosEngine, Config},
    geometry::GridSize,
    profile,
    random::Pcg64Source
  },
  clap::Parser
};

/// Chaos game fractal renderer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// Seed for the random number generator (process entropy when omitted)
  #[arg(long)]
  seed: Option<u64>,
  /// Size of the grid
  #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], default_values_t = vec![800, 800])]
  size: Vec<i64>,
  /// Number of anchor points of the polygon
  #[arg(long, default_value_t = 3)]
  points: usize,
  /// Fixed-triangle mode: classical Sierpinski vertices instead of random anchors
  #[arg(long, conflicts_with = "points")]
  triangle: bool,
  /// Divider for the distance between the last point and the chosen anchor
  #[arg(long, default_value_t = 2)]
  divider: i64,
  /// Number of random points to draw
  #[arg(long, default_value_t = 10_000_000)]
  rolls: u64,
  /// Output image path
  #[arg(long, default_value = "out.png")]
  output: String,
  /// Open the rendered image when finished
  #[arg(long)]
  open: bool
}

fn main() -> Result<()> {
  let args = Args::parse();

  let source = match args.seed {
    Some(seed) => Pcg64Source::seed_from_u64(seed),
    None => Pcg64Source::from_entropy()
  };
  let config = Config {
    size: GridSize::new(args.size[0], args.size[1]),
    anchors: if args.triangle {
      AnchorMode::FixedTriangle
    } else {
      AnchorMode::Random(args.points)
    },
    divider: args.divider
  };

  let engine = ChaosEngine::new(config, source)?;
  let mut renderer = ImageRenderer::new(engine.size());
  profile!("chaos", {
    engine.run(args.rolls, &mut renderer);
  });
  renderer.save(&args.output)?;
  println!("{} rolls -> {}", args.rolls, args.output);

  if args.open {
    open::that(&args.output)?;
  }
  Ok(())
}
