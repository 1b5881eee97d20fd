//! Gridweave level assembler
//!
//! Command-line front end: loads a block catalogue, runs one generation
//! request and renders the resulting layout layer by layer. Placement
//! failures go to stderr; they mark holes in the layout, not a process error.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use gw_core::block::{
    BlockPrototype, BlockRole, Catalogue, Face, FaceMask, LevelStyle, Port,
};
use gw_core::layout::{
    AssembledLevel, Category, GridCoord, GridSize, LevelRequest, assemble_level, category_of,
};
use gw_core::{MIN_PITCH, MapRng};

/// Assemble a dungeon layout from a catalogue of connector-tagged blocks
#[derive(Parser, Debug)]
#[command(name = "gridweave")]
#[command(author, version, about = "Gridweave - assemble block levels", long_about = None)]
struct Args {
    /// Catalogue file (JSON); a built-in demo catalogue is used when omitted
    #[arg(short = 'c', long = "catalogue")]
    catalogue: Option<PathBuf>,

    /// Level style to draw blocks from
    #[arg(long = "style", default_value_t = 0)]
    style: u16,

    /// Cells along a row (X)
    #[arg(short = 'x', long = "size-x", default_value_t = 5)]
    size_x: usize,

    /// Stacked layers (Y)
    #[arg(short = 'y', long = "size-y", default_value_t = 1)]
    size_y: usize,

    /// Rows per layer (Z)
    #[arg(short = 'z', long = "size-z", default_value_t = 4)]
    size_z: usize,

    /// World units per grid cell
    #[arg(long = "pitch", default_value_t = 1)]
    pitch: u32,

    /// RNG seed; random when omitted
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Emit the assembled level as JSON instead of the map view
    #[arg(long = "json")]
    json: bool,

    /// Report generation timing and the seed in use
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let catalogue = match &args.catalogue {
        Some(path) => match Catalogue::from_json_file(path) {
            Ok(catalogue) => catalogue,
            Err(err) => {
                eprintln!("gridweave: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => demo_catalogue(),
    };

    let request = LevelRequest {
        style: LevelStyle(args.style),
        size: GridSize::new(args.size_x, args.size_y, args.size_z).clamped(),
        pitch: args.pitch.max(MIN_PITCH),
    };
    let mut rng = match args.seed {
        Some(seed) => MapRng::new(seed),
        None => MapRng::from_entropy(),
    };
    let seed = rng.seed();

    let started = Instant::now();
    let level = assemble_level(&catalogue, &request, &mut rng);
    let elapsed = started.elapsed();

    if args.verbose {
        eprintln!(
            "gridweave: placed {} of {} cells in {:.3?} (seed {seed})",
            level.grid.occupied_count(),
            request.size.cell_count(),
            elapsed,
        );
    }

    for failure in &level.failures {
        eprintln!("gridweave: {failure}");
    }

    if args.json {
        match serde_json::to_string_pretty(&level) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("gridweave: could not encode result: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        render_layers(&catalogue, &level);
    }

    ExitCode::SUCCESS
}

/// Map view: one panel per layer, rows along X, columns along Z.
fn render_layers(catalogue: &Catalogue, level: &AssembledLevel) {
    let size = level.grid.size();
    for y in 0..size.y {
        println!("layer y={y}");
        for x in 0..size.x {
            let mut line = String::with_capacity(size.z * 2);
            for z in 0..size.z {
                let symbol = level
                    .grid
                    .get(GridCoord::new(x, y, z))
                    .map(|placed| cell_symbol(catalogue.block(placed.block)))
                    .unwrap_or(' ');
                line.push(symbol);
                line.push(' ');
            }
            println!("  {}", line.trim_end());
        }
    }
}

/// Display character for one placed block
fn cell_symbol(block: &BlockPrototype) -> char {
    match block.role {
        BlockRole::Spawn => 'S',
        BlockRole::Goal => 'G',
        BlockRole::Ordinary => match category_of(block) {
            Category::Corner => 'C',
            Category::WayUp => '<',
            Category::WayDown => '>',
            Category::Ordinary => '.',
        },
    }
}

/// A small self-contained catalogue so the binary runs out of the box
fn demo_catalogue() -> Catalogue {
    let mid = FaceMask::from_ports(&[Port::Mid]);
    let wide = FaceMask::from_ports(&[Port::MidLeft, Port::Mid, Port::MidRight]);
    Catalogue::new(vec![
        BlockPrototype::new("spawn-hall", LevelStyle(0), BlockRole::Spawn)
            .with_face(Face::Back, wide),
        BlockPrototype::new("goal-shrine", LevelStyle(0), BlockRole::Goal)
            .with_face(Face::Front, wide)
            .with_face(Face::Back, wide),
        BlockPrototype::new("corridor", LevelStyle(0), BlockRole::Ordinary)
            .with_face(Face::Front, mid)
            .with_face(Face::Back, mid),
        BlockPrototype::new("gallery", LevelStyle(0), BlockRole::Ordinary)
            .with_face(Face::Front, wide)
            .with_face(Face::Back, wide),
        BlockPrototype::new("bend", LevelStyle(0), BlockRole::Ordinary)
            .with_face(Face::Front, mid)
            .with_face(Face::Back, mid)
            .with_face(Face::Left, mid)
            .with_face(Face::Right, mid),
        BlockPrototype::new("bend-wide", LevelStyle(0), BlockRole::Ordinary)
            .with_face(Face::Front, wide)
            .with_face(Face::Back, wide)
            .with_face(Face::Left, wide)
            .with_face(Face::Right, wide),
        BlockPrototype::new("stair-base", LevelStyle(0), BlockRole::Ordinary)
            .with_face(Face::Front, mid)
            .with_face(Face::Back, mid)
            .with_face(Face::Top, wide),
        BlockPrototype::new("stair-head", LevelStyle(0), BlockRole::Ordinary)
            .with_face(Face::Front, mid)
            .with_face(Face::Back, mid)
            .with_face(Face::Bottom, wide),
    ])
}
