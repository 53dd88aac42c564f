// view.rs - Read-only rendering of a grid onto a pixel surface

use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

use crate::grid::Grid;

/// Minimal drawing target. The shell backs it with an egui painter;
/// tests back it with a recorder.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, color: Color32);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub live: Color32,
    pub midline: Color32,
    pub lines: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            live: Color32::BLACK,
            midline: Color32::from_rgb(225, 225, 230),
            lines: Color32::BLACK,
        }
    }
}

/// Maps grid state onto a rectangular surface region with uniform square
/// cells. Also the single source of cell geometry for hit-testing.
#[derive(Debug, Clone)]
pub struct GridView {
    region: Rect,
    pub palette: Palette,
}

impl GridView {
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            palette: Palette::default(),
        }
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    /// Side of one square cell in whole pixels. Zero when the region is
    /// too small to give every cell a pixel.
    pub fn cell_size(&self, grid: &Grid) -> f32 {
        let across = self.region.width() / grid.width() as f32;
        let down = self.region.height() / grid.height() as f32;
        across.min(down).floor().max(0.0)
    }

    pub fn grid_pixel_width(&self, grid: &Grid) -> f32 {
        (grid.width() as f32 * self.cell_size(grid)).min(self.region.width())
    }

    pub fn grid_pixel_height(&self, grid: &Grid) -> f32 {
        (grid.height() as f32 * self.cell_size(grid)).min(self.region.height())
    }

    /// `(row, column)` under a surface position. May be out of bounds;
    /// `None` only when cells have no size.
    pub fn cell_at(&self, grid: &Grid, position: Pos2) -> Option<(isize, isize)> {
        let cell_size = self.cell_size(grid);
        if cell_size < 1.0 {
            return None;
        }
        let local = position - self.region.min;
        Some((
            (local.x / cell_size).floor() as isize,
            (local.y / cell_size).floor() as isize,
        ))
    }

    fn cell_rect(&self, row: usize, column: usize, cell_size: f32) -> Rect {
        Rect::from_min_size(
            self.region.min + vec2(row as f32 * cell_size, column as f32 * cell_size),
            Vec2::splat(cell_size),
        )
    }

    pub fn draw(&self, grid: &Grid, surface: &mut impl Surface) {
        let cell_size = self.cell_size(grid);
        if cell_size < 1.0 {
            return;
        }
        let grid_width = self.grid_pixel_width(grid);
        let grid_height = self.grid_pixel_height(grid);

        surface.fill_rect(
            Rect::from_min_size(self.region.min, vec2(grid_width, grid_height)),
            self.palette.background,
        );

        self.draw_cells(grid, cell_size, surface);
        self.draw_lines(cell_size, grid_width, grid_height, surface);
    }

    fn draw_cells(&self, grid: &Grid, cell_size: f32, surface: &mut impl Surface) {
        let (rows, columns) = grid.shape();
        let middle_rows = middle_indices(rows);
        let middle_columns = middle_indices(columns);

        for row in 0..rows {
            for column in 0..columns {
                let is_alive = grid.get(row, column).is_alive();
                let on_midline = middle_rows.contains(&row) || middle_columns.contains(&column);

                if is_alive {
                    surface.fill_rect(self.cell_rect(row, column, cell_size), self.palette.live);
                } else if on_midline {
                    surface.fill_rect(self.cell_rect(row, column, cell_size), self.palette.midline);
                }
            }
        }
    }

    /// Vertical lines first, then horizontal, each closed at the far edge.
    fn draw_lines(&self, cell_size: f32, grid_width: f32, grid_height: f32, surface: &mut impl Surface) {
        let origin = self.region.min;
        let color = self.palette.lines;

        let mut x = 0.0;
        while x < grid_width {
            surface.line(origin + vec2(x, 0.0), origin + vec2(x, grid_height), color);
            x += cell_size;
        }
        surface.line(
            origin + vec2(grid_width - 1.0, 0.0),
            origin + vec2(grid_width - 1.0, grid_height),
            color,
        );

        let mut y = 0.0;
        while y < grid_height {
            surface.line(origin + vec2(0.0, y), origin + vec2(grid_width, y), color);
            y += cell_size;
        }
        surface.line(
            origin + vec2(0.0, grid_height - 1.0),
            origin + vec2(grid_width, grid_height - 1.0),
            color,
        );
    }
}

impl Default for GridView {
    fn default() -> Self {
        Self::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(1280.0, 720.0)))
    }
}

/// One middle index for odd sizes, the two central ones for even sizes.
fn middle_indices(size: usize) -> Vec<usize> {
    let mut middle = vec![size / 2];
    if size % 2 == 0 {
        middle.push(size / 2 - 1);
    }
    middle
}
