pub mod algorithm;
pub mod error;
pub mod graph;
pub mod report;
pub mod state;

pub use algorithm::{minimum_cut, MinCut};
pub use error::{Error, Result};
pub use graph::Graph;
pub use report::{solve, Partition};
