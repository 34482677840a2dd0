use std::error::Error;

use clap::Parser;
use glam::Vec2;

use house_generator::export;
use house_generator::{HouseGenerator, HouseParams, HousePreset};

#[derive(Parser, Debug)]
#[command(name = "house_generator")]
#[command(about = "Generate procedural house floor plans and meshes")]
struct Args {
    /// Size preset used as the base for every other option
    #[arg(short, long, default_value = "townhouse")]
    preset: HousePreset,

    /// List presets and exit
    #[arg(long)]
    list_presets: bool,

    /// Footprint width along X (preset value if not specified)
    #[arg(short = 'W', long)]
    width: Option<f32>,

    /// Footprint length along Z (preset value if not specified)
    #[arg(short = 'L', long)]
    length: Option<f32>,

    /// Wall height above the floor slab
    #[arg(long)]
    wall_height: Option<f32>,

    /// Exterior wall thickness
    #[arg(long)]
    wall_thickness: Option<f32>,

    /// Floor slab thickness
    #[arg(long)]
    floor_thickness: Option<f32>,

    /// Interior wall thickness
    #[arg(long)]
    interior_wall_thickness: Option<f32>,

    /// Split iterations for the partitioner
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Minimum room size as WIDTH,LENGTH
    #[arg(long, value_delimiter = ',', num_args = 2)]
    min_room: Option<Vec<f32>>,

    /// Maximum room size as WIDTH,LENGTH
    #[arg(long, value_delimiter = ',', num_args = 2)]
    max_room: Option<Vec<f32>>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the floor slab
    #[arg(long)]
    no_floor: bool,

    /// Skip the exterior walls
    #[arg(long)]
    no_walls: bool,

    /// Skip interior wall meshes
    #[arg(long)]
    no_interior_walls: bool,

    /// Build a floor and four walls for every room
    #[arg(long)]
    room_meshes: bool,

    /// Export the layout to JSON (e.g., "layout.json")
    #[arg(long)]
    export_json: Option<String>,

    /// Export all meshes to a Wavefront OBJ file
    #[arg(long)]
    export_obj: Option<String>,

    /// Export a PNG floor plan
    #[arg(long)]
    export_png: Option<String>,

    /// Print an ASCII floor plan with the given cell size in world units
    #[arg(long)]
    ascii: Option<f32>,
}

fn room_size(values: &Option<Vec<f32>>, fallback: Vec2) -> Vec2 {
    match values.as_deref() {
        Some([w, l]) => Vec2::new(*w, *l),
        _ => fallback,
    }
}

fn build_params(args: &Args, seed: u64) -> HouseParams {
    let base = args.preset.params(seed);
    HouseParams {
        width: args.width.unwrap_or(base.width),
        length: args.length.unwrap_or(base.length),
        wall_height: args.wall_height.unwrap_or(base.wall_height),
        wall_thickness: args.wall_thickness.unwrap_or(base.wall_thickness),
        floor_thickness: args.floor_thickness.unwrap_or(base.floor_thickness),
        interior_wall_thickness: args
            .interior_wall_thickness
            .unwrap_or(base.interior_wall_thickness),
        iterations: args.iterations.unwrap_or(base.iterations),
        min_room_size: room_size(&args.min_room, base.min_room_size),
        max_room_size: room_size(&args.max_room, base.max_room_size),
        seed,
        generate_floor: !args.no_floor,
        generate_walls: !args.no_walls,
        generate_interior_walls: !args.no_interior_walls,
        generate_room_meshes: args.room_meshes,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.list_presets {
        for preset in HousePreset::all() {
            println!("  {:<10} {}", preset.to_string(), preset.description());
        }
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let params = build_params(&args, seed).clamped();

    println!("Generating house with seed: {}", seed);
    println!("Preset: {}", args.preset);
    println!(
        "Footprint: {:.2} x {:.2}, walls {:.2} high",
        params.width, params.length, params.wall_height
    );

    println!("Generating layout...");
    let mut generator = HouseGenerator::new();
    let layout = generator.generate(&params);
    println!("Layout: {}", layout.stats());
    for room in &layout.rooms {
        println!(
            "  Room {}: {:.2} x {:.2} at ({:.2}, {:.2})",
            room.partition_index, room.width, room.length, room.center.x, room.center.y
        );
    }

    println!("Meshes:");
    for (name, stats) in generator.meshes().stats() {
        println!("  {}: {}", name, stats);
    }

    if let Some(cell) = args.ascii {
        println!("{}", export::floor_plan_ascii(&layout, cell));
    }

    if let Some(path) = &args.export_json {
        export::export_layout_json(&layout, seed, params.iterations, path)?;
        println!("Exported layout to: {}", path);
    }

    if let Some(path) = &args.export_obj {
        let meshes = generator.meshes();
        export::export_obj(
            &[
                ("shell", &meshes.shell),
                ("interior_walls", &meshes.interior_walls),
                ("rooms", &meshes.rooms),
            ],
            path,
        )?;
        println!("Exported meshes to: {}", path);
    }

    if let Some(path) = &args.export_png {
        export::export_floor_plan_png(&layout, path)?;
        println!("Exported floor plan to: {}", path);
    }

    Ok(())
}
