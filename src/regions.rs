/// Surrounded regions: capture every open region that does not touch the border
///
/// An open cell survives when a chain of 4-directionally adjacent open cells
/// links it to the border; every other open cell is flipped to closed. Three
/// interchangeable strategies are provided and always produce the same board.
use std::collections::VecDeque;
use std::fmt;

use indexmap::IndexMap;
use log::debug;

use crate::error::Result;
use crate::grid::{Cell, Grid};
use crate::union_find::UnionFind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Union-find with a virtual node standing for the border
    #[default]
    UnionFind,
    /// Flood fill inwards from the open border cells
    OutsideIn,
    /// Breadth-first walk of each region, captured if it never meets the border
    InsideOut,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::UnionFind => "union-find",
            Strategy::OutsideIn => "outside-in",
            Strategy::InsideOut => "inside-out",
        };
        f.write_str(name)
    }
}

/// Capture surrounded regions in place using the union-find strategy
///
/// Returns the number of cells flipped from open to closed.
pub fn classify(grid: &mut Grid) -> Result<usize> {
    classify_with(grid, Strategy::UnionFind)
}

/// Capture surrounded regions in place using the given strategy
pub fn classify_with(grid: &mut Grid, strategy: Strategy) -> Result<usize> {
    if grid.is_empty() {
        return Ok(0);
    }
    debug!(
        "Classifying {}x{} board ({} open) with {strategy}",
        grid.rows(),
        grid.cols(),
        grid.count(Cell::Open)
    );

    let captured = match strategy {
        Strategy::UnionFind => capture_union_find(grid)?,
        Strategy::OutsideIn => capture_outside_in(grid),
        Strategy::InsideOut => capture_inside_out(grid),
    };

    debug!("Captured {captured} cells");
    Ok(captured)
}

/// Enclosed open regions of the board, without modifying it
///
/// Each region lists its cells in row-major order; regions are ordered by
/// their first cell.
pub fn enclosed_regions(grid: &Grid) -> Result<Vec<Vec<(usize, usize)>>> {
    if grid.is_empty() {
        return Ok(Vec::new());
    }
    let (mut uf, border) = connect(grid)?;

    let mut regions: IndexMap<usize, Vec<(usize, usize)>> = IndexMap::new();
    for (r, c) in grid.open_cells() {
        let node = grid.index(r, c);
        if !uf.is_connected(node, border)? {
            regions.entry(uf.find(node)?).or_default().push((r, c));
        }
    }
    Ok(regions.into_values().collect())
}

/// Union every open border cell with a virtual node and every open interior
/// cell with its open neighbours. Returns the structure and the virtual node.
fn connect(grid: &Grid) -> Result<(UnionFind, usize)> {
    let border = grid.rows() * grid.cols();
    let mut uf = UnionFind::new(border + 1);

    for (r, c) in grid.open_cells() {
        let node = grid.index(r, c);
        if grid.is_border(r, c) {
            uf.union(node, border)?;
        } else {
            for (nr, nc) in grid.neighbors(r, c) {
                if grid.is_open(nr, nc) {
                    uf.union(node, grid.index(nr, nc))?;
                }
            }
        }
    }
    Ok((uf, border))
}

fn capture_union_find(grid: &mut Grid) -> Result<usize> {
    let (mut uf, border) = connect(grid)?;

    let mut captured = 0;
    for r in 1..grid.rows().saturating_sub(1) {
        for c in 1..grid.cols().saturating_sub(1) {
            if grid.is_open(r, c) && !uf.is_connected(grid.index(r, c), border)? {
                grid.set(r, c, Cell::Closed);
                captured += 1;
            }
        }
    }
    Ok(captured)
}

fn capture_outside_in(grid: &mut Grid) -> usize {
    let mut reached = vec![false; grid.rows() * grid.cols()];
    let mut stack: Vec<(usize, usize)> = grid
        .open_cells()
        .filter(|&(r, c)| grid.is_border(r, c))
        .collect();
    for &(r, c) in &stack {
        reached[grid.index(r, c)] = true;
    }

    while let Some((r, c)) = stack.pop() {
        for (nr, nc) in grid.neighbors(r, c) {
            let i = grid.index(nr, nc);
            if grid.is_open(nr, nc) && !reached[i] {
                reached[i] = true;
                stack.push((nr, nc));
            }
        }
    }

    let unreached: Vec<(usize, usize)> = grid
        .open_cells()
        .filter(|&(r, c)| !reached[grid.index(r, c)])
        .collect();
    for &(r, c) in &unreached {
        grid.set(r, c, Cell::Closed);
    }
    unreached.len()
}

fn capture_inside_out(grid: &mut Grid) -> usize {
    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut captured = 0;
    let mut region = Vec::new();
    let mut queue = VecDeque::new();

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if !grid.is_open(r, c) || visited[grid.index(r, c)] {
                continue;
            }

            // Drain the whole region before deciding, so no cell of a
            // border-touching region is left unvisited.
            region.clear();
            let mut touches_border = false;
            visited[grid.index(r, c)] = true;
            queue.push_back((r, c));
            while let Some((cr, cc)) = queue.pop_front() {
                region.push((cr, cc));
                touches_border |= grid.is_border(cr, cc);
                for (nr, nc) in grid.neighbors(cr, cc) {
                    let i = grid.index(nr, nc);
                    if grid.is_open(nr, nc) && !visited[i] {
                        visited[i] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }

            if !touches_border {
                for &(fr, fc) in &region {
                    grid.set(fr, fc, Cell::Closed);
                }
                captured += region.len();
            }
        }
    }
    captured
}
