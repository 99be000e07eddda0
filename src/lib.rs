//! Assign students to capacity-limited projects from their ranked
//! choices. The solver is exact: it minimizes the total of the granted
//! choice weights plus a penalty for every student placed beyond a
//! project's nominal capacity. `solve` keeps all state in its return
//! value, so concurrent calls need no coordination.

pub use crate::config::{Algorithm, Config, SolverConfig};
pub use crate::errors::{SolveError, WEIGHT_LIMIT};
pub use crate::remap::Remap;
pub use crate::solver::{Outcome, Solution, solve};

pub mod algos;
pub mod checks;
pub mod config;
pub mod display;
pub mod errors;
pub mod loaders;
pub mod model;
pub mod remap;
pub mod solver;
pub mod stats;
pub mod weights;
