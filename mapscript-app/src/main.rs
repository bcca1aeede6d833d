use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mapscript::{HelperConfig, Map, MapHelper};
use std::path::PathBuf;

/// Render a JSON map document to an HTML/JavaScript fragment
#[derive(Parser, Debug)]
#[command(name = "mapscript-app", version, about)]
struct Cli {
    /// Map document to render
    map: PathBuf,

    /// Loader configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the fragment here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Part of the fragment to render
    #[arg(short, long, value_enum, default_value_t = Part::All)]
    part: Part,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Part {
    All,
    Container,
    Stylesheets,
    Javascripts,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => HelperConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => HelperConfig::default(),
    };

    let document = std::fs::read_to_string(&cli.map)
        .with_context(|| format!("failed to read {}", cli.map.display()))?;
    let map = Map::from_json_str(&document)
        .with_context(|| format!("invalid map document {}", cli.map.display()))?;

    let helper = MapHelper::with_config(config);
    let fragment = match cli.part {
        Part::All => helper.render(&map)?,
        Part::Container => helper.render_container(&map),
        Part::Stylesheets => helper.render_stylesheets(&map),
        Part::Javascripts => helper.render_javascripts(&map)?,
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &fragment)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote map {} to {}", map.javascript_variable(), path.display());
        }
        None => print!("{}", fragment),
    }

    Ok(())
}
