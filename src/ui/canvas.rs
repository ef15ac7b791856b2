//! Braille-dot rasterizer for world-space triangle lists.
//!
//! Each terminal cell holds a 2x4 grid of braille dots, so a `w` by `h`
//! cell area gives `2w` by `4h` dots. World y points up; rows count down.

use ratatui::prelude::*;

use crate::sim::constants::{WORLD_SIZE_X, WORLD_SIZE_Y};
use crate::sim::math::Vec2;
use crate::sim::{Rgba8, Vertex, VertexSink};

const BACKGROUND: (u8, u8, u8) = (5, 5, 15);
const MIN_VISIBLE_ALPHA: u8 = 8;

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

/// Blend over the background by alpha.
fn blend(c: Rgba8) -> Color {
    let a = c.a as f32 / 255.0;
    let mix = |fg: u8, bg: u8| (bg as f32 + (fg as f32 - bg as f32) * a).round() as u8;
    Color::Rgb(
        mix(c.r, BACKGROUND.0),
        mix(c.g, BACKGROUND.1),
        mix(c.b, BACKGROUND.2),
    )
}

#[derive(Clone, Copy)]
struct Cell {
    bits: u8,
    color: Color,
}

pub struct BrailleCanvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![
                Cell {
                    bits: 0,
                    color: Color::Reset,
                };
                width * height
            ],
        }
    }

    fn dot_width(&self) -> i32 {
        (self.width * 2) as i32
    }

    fn dot_height(&self) -> i32 {
        (self.height * 4) as i32
    }

    fn to_dots(&self, p: &Vec2) -> (f32, f32) {
        (
            p.x / WORLD_SIZE_X * self.dot_width() as f32,
            (1.0 - p.y / WORLD_SIZE_Y) * self.dot_height() as f32,
        )
    }

    fn set_dot(&mut self, bx: i32, by: i32, color: Color) {
        if bx < 0 || by < 0 || bx >= self.dot_width() || by >= self.dot_height() {
            return;
        }
        let (bx, by) = (bx as usize, by as usize);
        let cell = &mut self.cells[(by / 4) * self.width + bx / 2];
        cell.bits |= braille_bit(bx % 2, by % 4);
        cell.color = color;
    }

    fn fill_triangle(&mut self, tri: &[Vertex]) {
        let color = tri[0].color;
        if color.a < MIN_VISIBLE_ALPHA {
            return;
        }
        let color = blend(color);
        let [a, b, c] = [
            self.to_dots(&tri[0].position),
            self.to_dots(&tri[1].position),
            self.to_dots(&tri[2].position),
        ];

        let min_x = a.0.min(b.0).min(c.0).floor().max(0.0) as i32;
        let max_x = a.0.max(b.0).max(c.0).ceil().min(self.dot_width() as f32) as i32;
        let min_y = a.1.min(b.1).min(c.1).floor().max(0.0) as i32;
        let max_y = a.1.max(b.1).max(c.1).ceil().min(self.dot_height() as f32) as i32;

        let edge = |p: (f32, f32), q: (f32, f32), x: f32, y: f32| (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0);
        let mut covered = false;
        for by in min_y..max_y {
            for bx in min_x..max_x {
                let (x, y) = (bx as f32 + 0.5, by as f32 + 0.5);
                let e0 = edge(a, b, x, y);
                let e1 = edge(b, c, x, y);
                let e2 = edge(c, a, x, y);
                let inside = (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0);
                if inside {
                    self.set_dot(bx, by, color);
                    covered = true;
                }
            }
        }

        // Slivers thinner than a dot still leave a mark.
        if !covered {
            let cx = (a.0 + b.0 + c.0) / 3.0;
            let cy = (a.1 + b.1 + c.1) / 3.0;
            self.set_dot(cx as i32, cy as i32, color);
        }
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        let bg = Color::Rgb(BACKGROUND.0, BACKGROUND.1, BACKGROUND.2);
        let mut lines = Vec::with_capacity(self.height);
        for yi in 0..self.height {
            let mut spans = Vec::with_capacity(self.width);
            for xi in 0..self.width {
                let cell = self.cells[yi * self.width + xi];
                let span = if cell.bits != 0 {
                    let ch = char::from_u32(0x2800 + cell.bits as u32).unwrap_or(' ');
                    Span::styled(String::from(ch), Style::default().fg(cell.color).bg(bg))
                } else {
                    // Sparse background stars
                    let hash = ((xi * 7 + yi * 13 + 37) * 31) % 250;
                    if hash < 2 {
                        let b = 35 + (hash as u8) * 15;
                        Span::styled(".", Style::default().fg(Color::Rgb(b, b, b + 8)).bg(bg))
                    } else {
                        Span::styled(" ", Style::default().bg(bg))
                    }
                };
                spans.push(span);
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    #[cfg(test)]
    fn lit_dots(&self) -> u32 {
        self.cells.iter().map(|c| c.bits.count_ones()).sum()
    }
}

impl VertexSink for BrailleCanvas {
    fn draw_vertex_array(&mut self, verts: &[Vertex]) {
        for tri in verts.chunks_exact(3) {
            self.fill_triangle(tri);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::math::vec2;

    fn tri(points: [(f32, f32); 3], color: Rgba8) -> Vec<Vertex> {
        points.iter().map(|&(x, y)| Vertex::new(vec2(x, y), color)).collect()
    }

    #[test]
    fn large_triangle_lights_many_dots() {
        let mut canvas = BrailleCanvas::new(100, 25);
        canvas.draw_vertex_array(&tri([(10.0, 10.0), (90.0, 10.0), (50.0, 90.0)], Rgba8::WHITE));
        assert!(canvas.lit_dots() > 100);
    }

    #[test]
    fn sliver_still_marks_one_dot() {
        let mut canvas = BrailleCanvas::new(100, 25);
        canvas.draw_vertex_array(&tri([(10.0, 10.0), (10.01, 10.0), (10.0, 10.01)], Rgba8::WHITE));
        assert_eq!(canvas.lit_dots(), 1);
    }

    #[test]
    fn invisible_and_offscreen_draw_nothing() {
        let mut canvas = BrailleCanvas::new(100, 25);
        canvas.draw_vertex_array(&tri([(10.0, 10.0), (90.0, 10.0), (50.0, 90.0)], Rgba8::new(255, 0, 0, 0)));
        canvas.draw_vertex_array(&tri([(-50.0, -50.0), (-40.0, -50.0), (-45.0, -40.0)], Rgba8::WHITE));
        assert_eq!(canvas.lit_dots(), 0);
    }

    #[test]
    fn world_top_maps_to_first_row() {
        let mut canvas = BrailleCanvas::new(100, 25);
        canvas.draw_vertex_array(&tri([(0.0, 100.0), (4.0, 100.0), (0.0, 96.0)], Rgba8::WHITE));
        assert!(canvas.cells[0].bits != 0);
        assert_eq!(canvas.cells[(canvas.height - 1) * canvas.width].bits, 0);
    }
}
