// model.rs - Grid state, paint-stroke memory and generation history

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, info};

use crate::grid::{Cell, Grid};
use crate::history::History;
use crate::patterns::{self, Pattern};

/// Handle shared by the controller and the console. Both run on the UI
/// thread between frames, never interleaved.
pub type SharedModel = Rc<RefCell<GridModel>>;

/// Per-gesture paint state: the colour fixed by the first touched cell
/// and every cell touched since.
#[derive(Debug, Default, Clone)]
pub struct StrokeMemory {
    pub active_color: Option<Cell>,
    pub touched: HashSet<(usize, usize)>,
}

impl StrokeMemory {
    pub fn clear(&mut self) {
        self.active_color = None;
        self.touched.clear();
    }
}

#[derive(Debug, Clone)]
pub struct GridModel {
    grid: Grid,
    stroke: StrokeMemory,
    history: History,
    generation: u64,
}

impl GridModel {
    pub fn new(width: usize, height: usize, limit_history: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            stroke: StrokeMemory::default(),
            history: History::new(limit_history),
            generation: 0,
        }
    }

    pub fn into_shared(self) -> SharedModel {
        Rc::new(RefCell::new(self))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stroke(&self) -> &StrokeMemory {
        &self.stroke
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    /// Paints one cell with the stroke colour. The first call of a
    /// gesture fixes that colour to the inverse of the target cell;
    /// revisiting a cell re-applies it rather than toggling back.
    ///
    /// Callers bound-check with [`GridModel::is_valid_index`] first.
    pub fn toggle_cell(&mut self, row: usize, column: usize) {
        let color = *self
            .stroke
            .active_color
            .get_or_insert_with(|| self.grid.get(row, column).inverse());
        self.grid.set(row, column, color);
        self.stroke.touched.insert((row, column));
    }

    /// Ends the current stroke.
    pub fn reset_memory(&mut self) {
        info!(changes = self.stroke.touched.len(), "resetting stroke memory");
        self.stroke.clear();
    }

    pub fn is_valid_index(&self, row: isize, column: isize) -> bool {
        self.grid.contains(row, column)
    }

    /// Kills every cell and ends any stroke. History is left alone.
    /// Returns how many cells were alive.
    pub fn clear_grid(&mut self) -> usize {
        let cleared = self.grid.live_count();
        info!(cleared, "clearing the grid");
        self.grid.fill(Cell::Dead);
        self.stroke.clear();
        self.generation = 0;
        cleared
    }

    /// Replaces the grid with a zeroed `width x height` one. History is
    /// the caller's to clear.
    pub fn reshape(&mut self, width: usize, height: usize) {
        info!(width, height, "reshaping the grid");
        self.grid = Grid::new(width, height);
        self.stroke.clear();
        self.generation = 0;
    }

    /// Advances one Conway generation. The pre-step grid is recorded in
    /// history unless the step changed nothing. A stable step never
    /// touches history, so it cannot evict the oldest snapshot.
    pub fn next_generation(&mut self) {
        debug!(history = self.history.len(), "computing next generation");
        let next = self.grid.step();

        if next == self.grid {
            info!("no changes were made, the grid is stable");
            return;
        }
        let previous = std::mem::replace(&mut self.grid, next);
        self.history.push(previous);
        self.generation += 1;
    }

    /// Restores the most recent snapshot. False when history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.grid = previous;
                self.generation = self.generation.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Clears the grid, stamps `pattern` centered and drops history.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> usize {
        let placed = patterns::apply_pattern(&mut self.grid, pattern);
        info!(pattern = pattern.name, placed, "pattern loaded");
        self.reset_board_state();
        placed
    }

    pub fn random_fill(&mut self, seed: u64) {
        patterns::apply_random_pattern(&mut self.grid, seed);
        info!(seed, alive = self.grid.live_count(), "random fill");
        self.reset_board_state();
    }

    fn reset_board_state(&mut self) {
        self.stroke.clear();
        self.history.clear();
        self.generation = 0;
    }
}

impl Default for GridModel {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            stroke: StrokeMemory::default(),
            history: History::default(),
            generation: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_from_dead_cell_paints_alive() {
        let mut model = GridModel::new(5, 5, 10);
        model.toggle_cell(1, 1);
        model.grid.set(2, 2, Cell::Alive);
        model.toggle_cell(2, 2);
        model.toggle_cell(3, 3);
        model.toggle_cell(1, 1);

        assert_eq!(model.stroke().active_color, Some(Cell::Alive));
        for (row, column) in [(1, 1), (2, 2), (3, 3)] {
            assert_eq!(model.grid().get(row, column), Cell::Alive);
        }
        assert_eq!(model.stroke().touched.len(), 3);
    }

    #[test]
    fn stroke_from_live_cell_erases() {
        let mut model = GridModel::new(4, 4, 10);
        model.grid.set(0, 0, Cell::Alive);
        model.toggle_cell(0, 0);
        model.toggle_cell(0, 1);
        assert_eq!(model.grid().live_count(), 0);

        model.reset_memory();
        assert!(model.stroke().active_color.is_none());
        assert!(model.stroke().touched.is_empty());

        model.toggle_cell(0, 1);
        assert_eq!(model.grid().get(0, 1), Cell::Alive);
    }

    #[test]
    fn clear_keeps_history_and_reports_count() {
        let mut model = GridModel::new(3, 3, 10);
        model.toggle_cell(0, 0);
        model.toggle_cell(0, 1);
        model.toggle_cell(0, 2);
        model.next_generation();
        assert_eq!(model.history().len(), 1);

        // Edge blinker: only (0, 1) survives and (1, 1) is born.
        assert_eq!(model.clear_grid(), 2);
        assert_eq!(model.live_count(), 0);
        assert_eq!(model.history().len(), 1);
        assert!(model.stroke().active_color.is_none());
    }

    #[test]
    fn reshape_zeroes_grid() {
        let mut model = GridModel::new(3, 3, 10);
        model.toggle_cell(1, 1);
        model.reshape(7, 2);
        assert_eq!(model.grid().shape(), (7, 2));
        assert_eq!(model.live_count(), 0);
        assert!(model.is_valid_index(6, 1));
        assert!(!model.is_valid_index(1, 2));
    }

    #[test]
    fn stable_generation_leaves_history_untouched() {
        let mut model = GridModel::new(6, 6, 10);
        for cell in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            model.toggle_cell(cell.0, cell.1);
        }
        let before = model.grid().clone();
        model.next_generation();
        assert_eq!(model.grid(), &before);
        assert!(model.history().is_empty());
        assert_eq!(model.generation(), 0);
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut model = GridModel::new(3, 3, 10);
        model.toggle_cell(1, 1);
        assert!(!model.undo());
        assert_eq!(model.live_count(), 1);
    }

    #[test]
    fn load_pattern_resets_history() {
        let mut model = GridModel::new(20, 20, 10);
        model.toggle_cell(0, 0);
        model.next_generation();
        model.toggle_cell(5, 5);
        model.reset_memory();
        model.next_generation();

        let placed = model.load_pattern(patterns::find("glider").unwrap());
        assert_eq!(placed, 5);
        assert!(model.history().is_empty());
        assert_eq!(model.generation(), 0);
    }
}
