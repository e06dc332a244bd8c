/// Board of open and closed cells, stored row-major
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Closed,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Open => 'O',
            Cell::Closed => 'X',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            'O' => Some(Cell::Open),
            'X' => Some(Cell::Closed),
            _ => None,
        }
    }
}

/// Up, right, down, left
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of cells; all rows must have the same width
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        // Rows of zero width hold no cells
        let rows = if cols == 0 { 0 } else { rows.len() };
        Ok(Grid { rows, cols, cells })
    }

    /// Grid of the given shape with every cell set to `cell`
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        if rows == 0 || cols == 0 {
            return Grid {
                rows: 0,
                cols: 0,
                cells: Vec::new(),
            };
        }
        Grid {
            rows,
            cols,
            cells: vec![cell; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of (r, c)
    pub fn index(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    pub fn get(&self, r: usize, c: usize) -> Option<Cell> {
        if r < self.rows && c < self.cols {
            Some(self.cells[self.index(r, c)])
        } else {
            None
        }
    }

    /// Panics if (r, c) lies outside the grid
    pub fn set(&mut self, r: usize, c: usize, cell: Cell) {
        assert!(r < self.rows && c < self.cols, "({r}, {c}) outside grid");
        let i = self.index(r, c);
        self.cells[i] = cell;
    }

    pub fn is_open(&self, r: usize, c: usize) -> bool {
        self.get(r, c) == Some(Cell::Open)
    }

    pub fn is_border(&self, r: usize, c: usize) -> bool {
        r == 0 || c == 0 || r + 1 == self.rows || c + 1 == self.cols
    }

    /// In-bounds 4-directional neighbours of (r, c)
    pub fn neighbors(&self, r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let nr = r.checked_add_signed(dr)?;
            let nc = c.checked_add_signed(dc)?;
            (nr < self.rows && nc < self.cols).then_some((nr, nc))
        })
    }

    /// Coordinates of every open cell, row-major
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Open)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// One row per non-empty line; whitespace within a line is ignored
    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            let r = rows.len();
            let row = line
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .enumerate()
                .map(|(c, symbol)| {
                    Cell::from_symbol(symbol).ok_or(Error::UnknownSymbol {
                        row: r,
                        col: c,
                        symbol,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        Grid::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_and_render() {
        let grid: Grid = "XXXX\nXOOX\nX O X X\n\nXOXX\n".parse().unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.get(1, 1), Some(Cell::Open));
        assert_eq!(grid.get(2, 2), Some(Cell::Closed));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(
            grid.to_string(),
            "X X X X\nX O O X\nX O X X\nX O X X\n"
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO\nXA".parse::<Grid>(),
            Err(Error::UnknownSymbol {
                row: 1,
                col: 1,
                symbol: 'A'
            })
        );
        assert_eq!(
            "XOX\nXO".parse::<Grid>(),
            Err(Error::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_empty_grid() {
        let grid: Grid = "".parse().unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.to_string(), "");
        assert!(Grid::filled(0, 5, Cell::Open).is_empty());
        assert!(Grid::from_rows(vec![vec![], vec![]]).unwrap().is_empty());
    }

    #[test]
    fn test_neighbors_and_border() {
        let grid = Grid::filled(3, 3, Cell::Open);
        let corner: Vec<_> = grid.neighbors(0, 0).collect();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
        let centre: Vec<_> = grid.neighbors(1, 1).collect();
        assert_eq!(centre, vec![(0, 1), (1, 2), (2, 1), (1, 0)]);

        assert!(grid.is_border(0, 1));
        assert!(grid.is_border(2, 2));
        assert!(!grid.is_border(1, 1));
    }
}
