//! The constraint-satisfaction core: domains, propagation and search.

pub mod assignment;
pub mod domains;
pub mod engine;
pub mod heuristics;
pub mod stats;
pub mod work_list;

pub use assignment::Assignment;
pub use domains::{DomainSnapshot, DomainStore};
pub use engine::Solver;
pub use stats::{render_stats_table, SearchStats};
