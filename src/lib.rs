// Library exports for regionfind
pub mod error;
pub mod grid;
pub mod regions;
pub mod union_find;

pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use regions::{classify, classify_with, enclosed_regions, Strategy};
pub use union_find::UnionFind;
