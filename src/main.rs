use cards::{CardStyle, Scene, SceneOptions, ShapeKind, SvgWriter};
use clap::{Parser, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cards", about = "Draw card and view experiments to SVG", version)]
struct Cli {
    /// Which scene to draw
    #[arg(value_enum, default_value = "cards")]
    scene: SceneArg,

    /// Output file
    #[arg(long, short, default_value = "cards.svg")]
    out: String,

    /// Seed for the card back patterns; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding the card style
    #[arg(long)]
    style: Option<String>,

    /// Shape on the front of the cards
    #[arg(long, value_enum, default_value = "circle")]
    shape: FrontArg,

    /// Write a flame graph of the render to this HTML file
    #[arg(long)]
    profile: Option<String>,
}

#[derive(Copy, Clone, ValueEnum)]
enum SceneArg {
    Cards,
    Bezier,
    Views,
}

#[derive(Copy, Clone, ValueEnum)]
enum FrontArg {
    Circle,
    Square,
    Fill,
}

impl From<SceneArg> for Scene {
    fn from(arg: SceneArg) -> Scene {
        match arg {
            SceneArg::Cards => Scene::Cards,
            SceneArg::Bezier => Scene::Bezier,
            SceneArg::Views => Scene::Views,
        }
    }
}

impl From<FrontArg> for ShapeKind {
    fn from(arg: FrontArg) -> ShapeKind {
        match arg {
            FrontArg::Circle => ShapeKind::Circle,
            FrontArg::Square => ShapeKind::Square,
            FrontArg::Fill => ShapeKind::FillRect,
        }
    }
}

fn run(cli: Cli) -> cards::Result<()> {
    let style = match cli.style {
        Some(ref path) => CardStyle::load(path)?,
        None => CardStyle::default(),
    };
    let options = SceneOptions {
        seed: cli.seed.unwrap_or_else(rand::random),
        style,
        front: cli.shape.into(),
    };
    tracing::debug!(seed = options.seed, "building scene");

    let tree = Scene::from(cli.scene).build(&options)?;
    SvgWriter::render(&tree).write_out(&cli.out)?;

    if let Some(ref path) = cli.profile {
        flame::dump_html(&mut std::fs::File::create(path)?)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
