// grid.rs - Cell and Grid types for Conway's Game of Life

// Default grid configuration
pub const DEFAULT_WIDTH: usize = 65;                  // Rows (x axis on screen)
pub const DEFAULT_HEIGHT: usize = 37;                 // Columns (y axis on screen)
pub const MAX_DIMENSION: usize = 4096;                // Largest width or height
pub const MAX_CELLS: usize = 1 << 22;                 // Largest width * height

/// State of a single cell. The `repr(u8)` keeps every entry exactly 0 or 1.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The opposite state: what a stroke starting on this cell paints.
    pub fn inverse(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Fixed-shape 2-D cell grid addressed by `(row, column)`.
///
/// `row` runs along the width (screen x), `column` along the height
/// (screen y). Storage is a single row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A zeroed `width x height` grid. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid shape must be positive, got {width}x{height}");
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Builds a grid with the listed cells alive.
    pub fn with_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(width, height);
        for &(row, column) in alive {
            grid.set(row, column, Cell::Alive);
        }
        grid
    }

    /// Whether `width x height` is a shape [`Grid::new`] may allocate.
    pub fn fits(width: usize, height: usize) -> bool {
        width > 0
            && height > 0
            && width
                .checked_mul(height)
                .is_some_and(|cells| cells <= MAX_CELLS)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn contains(&self, row: isize, column: isize) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.width && (column as usize) < self.height
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        // A flat index would otherwise alias a neighbouring row.
        assert!(
            row < self.width && column < self.height,
            "cell ({row}, {column}) outside {}x{} grid",
            self.width,
            self.height
        );
        row * self.height + column
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[self.offset(row, column)]
    }

    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        let offset = self.offset(row, column);
        self.cells[offset] = cell;
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Live neighbours among the up-to-8 adjacent cells. No wraparound:
    /// positions outside the grid simply do not count.
    pub fn live_neighbors(&self, row: usize, column: usize) -> u8 {
        let mut count = 0;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (nr, nc) = (row as isize + dr, column as isize + dc);
                if self.contains(nr, nc) && self.get(nr as usize, nc as usize).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// One synchronous Conway step. Every count reads `self`, never the
    /// grid being built.
    pub fn step(&self) -> Grid {
        let mut next = Grid::new(self.width, self.height);
        for row in 0..self.width {
            for column in 0..self.height {
                let next_state = match (self.get(row, column), self.live_neighbors(row, column)) {
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
                    (Cell::Dead, 3)                     => Cell::Alive, // Birth
                    _                                   => Cell::Dead,  // Death or stays dead
                };
                next.set(row, column, next_state);
            }
        }
        next
    }

    /// `(row, column)` of every live cell, row-major.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let height = self.height;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(offset, _)| (offset / height, offset % height))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
