mod scene;
mod svg;

use crate::scene::Scene;
use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexrender::{
    timed, Color3, HexagonalRenderer, PointF, Rect, RectF, Workspace,
};
use log::{debug, info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::Display;

/// CLI for rendering hexagonal tile maps and converting between tile and
/// pixel coordinates.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexrender")]
struct Opt {
    /// Path to a scene file that defines the map geometry, layers and
    /// selection. Supported formats: JSON, TOML
    #[structopt(short, long)]
    scene: PathBuf,

    /// If given, an SVG rendering of the map is written to this file
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Path template for tile images, e.g. "tiles/{id}.png". If not given,
    /// tiles are drawn as flat colored rectangles.
    #[structopt(long)]
    tile_images: Option<String>,

    /// Don't draw the hex grid over the tiles
    #[structopt(long)]
    hide_grid: bool,

    #[structopt(long, default_value = "#000000")]
    grid_color: Color3,

    #[structopt(long, default_value = "#3399ff")]
    selection_color: Color3,

    /// Area of the map to draw, in pixels, as "x,y,width,height". Defaults
    /// to the whole map.
    #[structopt(long, parse(try_from_str = parse_rect))]
    exposed: Option<RectF>,

    /// Find the tile at a pixel position, given as "x,y". Can be repeated.
    /// Results are printed to stdout as JSON, one per line.
    #[structopt(long, parse(try_from_str = parse_point))]
    pixel_to_tile: Vec<PointF>,

    /// Find the pixel position of a tile, given as "x,y". Can be repeated.
    /// Results are printed to stdout as JSON, one per line.
    #[structopt(long, parse(try_from_str = parse_point))]
    tile_to_pixel: Vec<PointF>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Options to configure the SVG output
#[derive(Clone, Debug)]
pub struct RenderOptions {
    exposed: RectF,
    show_grid: bool,
    grid_color: Color3,
    selection_color: Color3,
    tile_images: Option<String>,
}

/// The two directions a coordinate query can go
#[derive(Copy, Clone, Debug, Display, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
enum QueryKind {
    PixelToTile,
    TileToPixel,
}

/// One line of query output
#[derive(Copy, Clone, Debug, Serialize)]
struct QueryResult {
    query: QueryKind,
    input: PointF,
    output: PointF,
}

/// Parse a comma-separated list of exactly N numbers
fn parse_numbers<const N: usize>(s: &str) -> anyhow::Result<[f64; N]> {
    let mut numbers = [0.0; N];
    let mut parts = s.split(',');
    for number in numbers.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| anyhow!("expected {} comma-separated values", N))?;
        *number = part
            .trim()
            .parse()
            .with_context(|| format!("invalid number {:?}", part))?;
    }
    if parts.next().is_some() {
        bail!("expected {} comma-separated values", N);
    }
    Ok(numbers)
}

fn parse_point(s: &str) -> anyhow::Result<PointF> {
    let [x, y] = parse_numbers::<2>(s)?;
    Ok(PointF::new(x, y))
}

fn parse_rect(s: &str) -> anyhow::Result<RectF> {
    let [x, y, width, height] = parse_numbers::<4>(s)?;
    Ok(RectF::new(x, y, width, height))
}

fn load_scene(scene_path: &Path) -> anyhow::Result<Scene> {
    let mut settings = Config::new();
    let scene_path = scene_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", scene_path)
    })?;
    settings
        .merge(File::with_name(scene_path))
        .context("error reading scene file")?;
    settings.try_into().context("error reading scene")
}

/// Render the scene as SVG and write it to a file
fn write_svg(
    output_path: &Path,
    scene: &Scene,
    renderer: &HexagonalRenderer,
    options: &RenderOptions,
) -> anyhow::Result<()> {
    let workspace = scene.workspace();
    let layers = scene.layers()?;
    timed!(
        format!("Rendering SVG and writing to {:?}", output_path),
        log::Level::Info,
        {
            let document = svg::draw_scene(
                renderer,
                &workspace,
                &layers,
                &scene.selection(),
                options,
            );
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(output_path)
                .with_context(|| {
                    format!("error opening output file {:?}", output_path)
                })?;
            file.write_all(document.as_bytes()).with_context(|| {
                format!("error writing to file {:?}", output_path)
            })?;
        }
    );
    Ok(())
}

/// Answer all coordinate queries, writing one JSON object per line
fn run_queries(
    out: &mut impl Write,
    renderer: &HexagonalRenderer,
    workspace: &Workspace,
    opt: &Opt,
) -> anyhow::Result<()> {
    let pixel_to_tile = opt.pixel_to_tile.iter().map(|&input| QueryResult {
        query: QueryKind::PixelToTile,
        input,
        output: renderer.pixel_to_tile_coords(input.x, input.y, workspace),
    });
    let tile_to_pixel = opt.tile_to_pixel.iter().map(|&input| QueryResult {
        query: QueryKind::TileToPixel,
        input,
        output: renderer.tile_to_pixel_coords(input.x, input.y, workspace),
    });
    for result in pixel_to_tile.chain(tile_to_pixel) {
        debug!("{} {} -> {}", result.query, result.input, result.output);
        serde_json::to_writer(&mut *out, &result)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let scene = load_scene(&opt.scene)?;
    let renderer = HexagonalRenderer::new(scene.map)?;
    let workspace = scene.workspace();
    info!(
        "Loaded {}x{} map with {} layer(s) from {:?}",
        scene.width,
        scene.height,
        scene.layers.len(),
        &opt.scene
    );

    run_queries(&mut io::stdout().lock(), &renderer, &workspace, &opt)?;

    if let Some(output_path) = &opt.output {
        let exposed = opt.exposed.unwrap_or_else(|| {
            let size = renderer.work_size(&workspace);
            Rect::new(0, 0, size.width, size.height).into()
        });
        if exposed.is_empty() {
            bail!("exposed area {} is empty", exposed);
        }
        let options = RenderOptions {
            exposed,
            show_grid: !opt.hide_grid,
            grid_color: opt.grid_color,
            selection_color: opt.selection_color,
            tile_images: opt.tile_images.clone(),
        };
        write_svg(output_path, &scene, &renderer, &options)?;
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexrender::{MapConfig, StaggerAxis, StaggerIndex};

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("3, -4.5").unwrap(), PointF::new(3.0, -4.5));
        assert!(parse_point("3").is_err());
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_point("a,2").is_err());
    }

    #[test]
    fn test_parse_rect() {
        assert_eq!(
            parse_rect("0,0,100,50").unwrap(),
            RectF::new(0.0, 0.0, 100.0, 50.0)
        );
        assert!(parse_rect("0,0,100").is_err());
    }

    #[test]
    fn test_queries() {
        let opt = Opt::from_iter(&[
            "hexrender",
            "--scene",
            "scene.json",
            "--pixel-to-tile",
            "34,16",
            "--tile-to-pixel",
            "1,0",
        ]);
        let renderer = HexagonalRenderer::new(MapConfig {
            stagger_axis: StaggerAxis::X,
            stagger_index: StaggerIndex::Even,
            hex_side_length: 4,
            ..Default::default()
        })
        .unwrap();
        let workspace = Workspace::new(3, 3, 32, 32);
        let mut out = Vec::new();
        run_queries(&mut out, &renderer, &workspace, &opt).unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            lines,
            vec![
                serde_json::json!({
                    "query": "pixel_to_tile",
                    "input": {"x": 34.0, "y": 16.0},
                    "output": {"x": 1.0, "y": 0.0},
                }),
                serde_json::json!({
                    "query": "tile_to_pixel",
                    "input": {"x": 1.0, "y": 0.0},
                    "output": {"x": 18.0, "y": 0.0},
                }),
            ]
        );
    }
}
