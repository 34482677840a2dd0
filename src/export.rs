//! Export of layouts and meshes
//!
//! - JSON floor plan (rooms, partitions, wall segments)
//! - Wavefront OBJ for mesh buffers
//! - PNG and ASCII floor-plan previews

use std::fs::File;
use std::io::{self, BufWriter, Write};

use image::{ImageBuffer, Rgb, RgbImage};
use serde::Serialize;

use crate::layout::{HouseLayout, Rect};
use crate::mesh::MeshBuffers;

/// Pixels per world unit in the PNG floor plan
const PNG_SCALE: f32 = 32.0;
/// Longest side of the drawn footprint in the PNG floor plan (pixels)
const PNG_MAX_SIDE: f32 = 4096.0;
/// Border around the footprint in the PNG floor plan (pixels)
const PNG_MARGIN: u32 = 16;

/// Room fill colors, cycled by room index
const ROOM_COLORS: [[u8; 3]; 8] = [
    [230, 159, 0],
    [86, 180, 233],
    [0, 158, 115],
    [240, 228, 66],
    [0, 114, 178],
    [213, 94, 0],
    [204, 121, 167],
    [153, 153, 153],
];

/// Digits for room labels (5x7)
const DIGITS_5X7: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

/// Metadata written alongside the layout
#[derive(Serialize)]
pub struct LayoutExport<'a> {
    pub seed: u64,
    pub iterations: usize,
    #[serde(flatten)]
    pub layout: &'a HouseLayout,
}

/// Export a layout to pretty-printed JSON
pub fn export_layout_json(
    layout: &HouseLayout,
    seed: u64,
    iterations: usize,
    path: &str,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let export = LayoutExport {
        seed,
        iterations,
        layout,
    };
    serde_json::to_writer_pretty(&mut writer, &export)?;
    writer.flush()
}

/// Write mesh buffers as a Wavefront OBJ object.
///
/// OBJ indices are global across a file, so faces are numbered from
/// `base + 1` where `base` is the count of vertices already written.
pub fn write_obj<W: Write>(
    writer: &mut W,
    name: &str,
    mesh: &MeshBuffers,
    base: u32,
) -> io::Result<()> {
    writeln!(writer, "o {}", name)?;
    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for n in &mesh.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (base + tri[0] + 1, base + tri[1] + 1, base + tri[2] + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}

/// Export named meshes into one OBJ file, skipping empty ones
pub fn export_obj(meshes: &[(&str, &MeshBuffers)], path: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let mut base = 0u32;
    for (name, mesh) in meshes {
        if mesh.is_empty() {
            continue;
        }
        write_obj(&mut writer, name, mesh, base)?;
        base += mesh.vertex_count() as u32;
    }

    writer.flush()
}

/// Mapping from floor-plane coordinates to PNG pixels
#[derive(Clone, Copy, Debug)]
struct PlanView {
    footprint: Rect,
    /// Pixels per world unit
    scale: f32,
}

impl PlanView {
    /// Default scale, reduced so the longer footprint side stays within
    /// `PNG_MAX_SIDE` pixels
    fn fit(footprint: Rect) -> Self {
        let longest = footprint.width.max(footprint.height).max(f32::EPSILON);
        Self {
            footprint,
            scale: PNG_SCALE.min(PNG_MAX_SIDE / longest),
        }
    }

    fn image_size(&self) -> (u32, u32) {
        (
            (self.footprint.width * self.scale) as u32 + PNG_MARGIN * 2 + 1,
            (self.footprint.height * self.scale) as u32 + PNG_MARGIN * 2 + 1,
        )
    }

    fn to_pixel(&self, x: f32, y: f32) -> (i32, i32) {
        (
            ((x - self.footprint.x) * self.scale) as i32 + PNG_MARGIN as i32,
            ((y - self.footprint.y) * self.scale) as i32 + PNG_MARGIN as i32,
        )
    }
}

fn put_pixel_checked(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn fill_rect(img: &mut RgbImage, view: &PlanView, rect: &Rect, color: Rgb<u8>) {
    let (x0, y0) = view.to_pixel(rect.x, rect.y);
    let (x1, y1) = view.to_pixel(rect.x + rect.width, rect.y + rect.height);
    for py in y0..y1 {
        for px in x0..x1 {
            put_pixel_checked(img, px, py, color);
        }
    }
}

fn outline_rect(img: &mut RgbImage, view: &PlanView, rect: &Rect, color: Rgb<u8>) {
    let (x0, y0) = view.to_pixel(rect.x, rect.y);
    let (x1, y1) = view.to_pixel(rect.x + rect.width, rect.y + rect.height);
    for px in x0..=x1 {
        put_pixel_checked(img, px, y0, color);
        put_pixel_checked(img, px, y1, color);
    }
    for py in y0..=y1 {
        put_pixel_checked(img, x0, py, color);
        put_pixel_checked(img, x1, py, color);
    }
}

/// Draw an axis-aligned or diagonal line with a square brush
fn draw_line(img: &mut RgbImage, from: (i32, i32), to: (i32, i32), brush: i32, color: Rgb<u8>) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).max(1);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = from.0 + ((to.0 - from.0) as f32 * t).round() as i32;
        let y = from.1 + ((to.1 - from.1) as f32 * t).round() as i32;
        for dy in -brush..=brush {
            for dx in -brush..=brush {
                put_pixel_checked(img, x + dx, y + dy, color);
            }
        }
    }
}

fn draw_number(img: &mut RgbImage, x: i32, y: i32, value: usize, color: Rgb<u8>) {
    let text = value.to_string();
    let width = text.len() as i32 * 6 - 1;
    let mut cx = x - width / 2;
    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            for (row, &bits) in DIGITS_5X7[digit as usize].iter().enumerate() {
                for col in 0..5 {
                    if bits & (0b10000 >> col) != 0 {
                        put_pixel_checked(img, cx + col, y - 3 + row as i32, color);
                    }
                }
            }
        }
        cx += 6;
    }
}

/// Render a layout as a PNG floor plan.
///
/// Partitions are outlined, rooms filled and numbered, interior walls drawn
/// dark on top, and the footprint framed. Large footprints are drawn at a
/// reduced scale.
pub fn render_floor_plan(layout: &HouseLayout) -> RgbImage {
    let footprint = layout.footprint;
    let view = PlanView::fit(footprint);
    let (img_width, img_height) = view.image_size();
    let mut img: RgbImage = ImageBuffer::from_pixel(img_width, img_height, Rgb([250, 248, 240]));

    fill_rect(&mut img, &view, &footprint, Rgb([225, 220, 205]));

    for (i, room) in layout.rooms.iter().enumerate() {
        let fill = Rgb(ROOM_COLORS[i % ROOM_COLORS.len()]);
        fill_rect(&mut img, &view, &room.bounds, fill);
        outline_rect(&mut img, &view, &room.bounds, Rgb([60, 60, 60]));
    }

    for partition in &layout.partitions {
        outline_rect(&mut img, &view, partition, Rgb([150, 145, 135]));
    }

    for wall in &layout.wall_segments {
        let brush = ((wall.thickness * view.scale) / 2.0).round().max(1.0) as i32;
        draw_line(
            &mut img,
            view.to_pixel(wall.start.x, wall.start.y),
            view.to_pixel(wall.end.x, wall.end.y),
            brush,
            Rgb([40, 40, 45]),
        );
    }

    outline_rect(&mut img, &view, &footprint, Rgb([20, 20, 20]));

    for (i, room) in layout.rooms.iter().enumerate() {
        let (cx, cy) = view.to_pixel(room.center.x, room.center.y);
        draw_number(&mut img, cx, cy, i, Rgb([20, 20, 20]));
    }

    img
}

/// Export a layout as a PNG floor plan
pub fn export_floor_plan_png(layout: &HouseLayout, path: &str) -> Result<(), image::ImageError> {
    render_floor_plan(layout).save(path)
}

/// Render a layout as text, one character per `cell` world units.
///
/// `#` interior wall, `0-9`/`a-z` room index, `.` unused floor.
pub fn floor_plan_ascii(layout: &HouseLayout, cell: f32) -> String {
    let cell = cell.max(0.05);
    let footprint = layout.footprint;
    let cols = (footprint.width / cell).ceil() as usize;
    let rows = (footprint.height / cell).ceil() as usize;
    let symbols: Vec<char> = ('0'..='9').chain('a'..='z').collect();

    let mut out = String::with_capacity((cols + 3) * (rows + 2));
    out.push('+');
    out.push_str(&"-".repeat(cols));
    out.push_str("+\n");

    for row in 0..rows {
        out.push('|');
        for col in 0..cols {
            let x = footprint.x + (col as f32 + 0.5) * cell;
            let y = footprint.y + (row as f32 + 0.5) * cell;

            let on_wall = layout.wall_segments.iter().any(|w| {
                let half = (w.thickness / 2.0).max(cell / 2.0);
                let min_x = w.start.x.min(w.end.x) - half;
                let max_x = w.start.x.max(w.end.x) + half;
                let min_y = w.start.y.min(w.end.y) - half;
                let max_y = w.start.y.max(w.end.y) + half;
                x >= min_x && x <= max_x && y >= min_y && y <= max_y
            });

            let ch = if on_wall {
                '#'
            } else if let Some(i) = layout
                .rooms
                .iter()
                .position(|r| r.bounds.contains_point(glam::Vec2::new(x, y)))
            {
                symbols[i % symbols.len()]
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push_str("|\n");
    }

    out.push('+');
    out.push_str(&"-".repeat(cols));
    out.push('+');
    out
}
