/// Union-Find (Disjoint Sets) over a fixed universe of indices `0..n`
///
/// Uses path halving in `find` and union by rank, which together give
/// amortized near-constant time per operation. Sets can only be merged,
/// never split.
use indexmap::IndexMap;
use log::trace;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton sets
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let rank = vec![0; n];
        UnionFind {
            parent,
            rank,
            sets: n,
        }
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn check(&self, x: usize) -> Result<()> {
        if x >= self.parent.len() {
            return Err(Error::IndexOutOfBounds {
                index: x,
                len: self.parent.len(),
            });
        }
        Ok(())
    }

    /// Find the root of element x, halving the path on the way up
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root_of(x))
    }

    /// Union the sets containing x and y
    ///
    /// Returns `true` if two distinct sets were merged. On equal rank the
    /// root of `x` becomes the new root.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }
        self.sets -= 1;
        trace!("union({x}, {y}): {} sets remain", self.sets);
        Ok(true)
    }

    /// Check if two elements are in the same set
    pub fn is_connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Number of elements in the set containing x
    pub fn set_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok((0..self.parent.len())
            .filter(|&i| self.root_of(i) == root)
            .count())
    }

    /// Get all sets as groups of indices
    ///
    /// Groups are ordered by their smallest member and members are ascending.
    pub fn sets(&mut self) -> Vec<Vec<usize>> {
        let mut root_to_group: IndexMap<usize, Vec<usize>> = IndexMap::new();

        for i in 0..self.parent.len() {
            let root = self.root_of(i);
            root_to_group.entry(root).or_default().push(i);
        }

        root_to_group.into_values().collect()
    }

    fn root_of(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }
}

impl TryFrom<i64> for UnionFind {
    type Error = Error;

    fn try_from(n: i64) -> Result<Self> {
        let size = usize::try_from(n).map_err(|_| Error::InvalidArgument { size: n })?;
        Ok(UnionFind::new(size))
    }
}
