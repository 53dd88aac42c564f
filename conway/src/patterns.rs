use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::{Cell, Grid};

/// A named preset. Offsets are `(line, column)` as the shape appears on
/// screen, relative to the pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// `(lines, columns)` of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(lines, columns), &(line, column)| {
            (lines.max(line + 1), columns.max(column + 1))
        })
    }

    /// Console spelling: lowercase with dashes, e.g. `gosper-glider-gun`.
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom section (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Looks a preset up by display name or slug, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    let wanted = name.trim().to_lowercase().replace([' ', '_'], "-");
    PATTERNS.iter().find(|pattern| pattern.slug() == wanted)
}

/// Clears the grid and stamps the pattern centered on it. Cells that
/// fall outside the grid are dropped. Returns how many were placed.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> usize {
    grid.fill(Cell::Dead);

    let (lines, columns) = pattern.extent();
    // Screen x is the grid row, screen y the grid column.
    let origin_x = grid.width() as isize / 2 - columns as isize / 2;
    let origin_y = grid.height() as isize / 2 - lines as isize / 2;

    let mut placed = 0;
    for &(line, column) in pattern.cells {
        let row = origin_x + column as isize;
        let col = origin_y + line as isize;
        if grid.contains(row, col) {
            grid.set(row as usize, col as usize, Cell::Alive);
            placed += 1;
        }
    }
    placed
}

/// Deterministic fill, roughly one cell in three alive.
pub fn apply_random_pattern(grid: &mut Grid, seed_value: u64) {
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in 0..grid.width() {
        for column in 0..grid.height() {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            grid.set(row, column, Cell::from((seed >> 16) % 3 == 0));
        }
    }
}
