use crate::errors::SolveError;
use crate::model::Assignments;

/// An exact assignment backend. `assign` places every student on one of
/// their chosen projects and returns the achieved objective.
pub trait Algo {
    fn assign(&mut self) -> Result<i64, SolveError>;
    fn get_assignments(&self) -> &Assignments;
}
