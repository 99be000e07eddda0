use crate::algos::{Algo, Hungarian, MinCostFlow};
use crate::checks;
use crate::config::{Algorithm, SolverConfig};
use crate::errors::SolveError;
use crate::model::{Assignments, ProjectRecord, StudentRecord};
use crate::remap::{self, Remap};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// A verified optimal assignment, still in the dense index space, plus
/// the reverse mapping needed to speak external ids again.
#[derive(Debug)]
pub struct Outcome {
    pub assignments: Assignments,
    pub remap: Remap,
    pub total_cost: i64,
}

/// An assignment in the caller's ids, ready for serialization. Only
/// projects actually over capacity appear in `overflow`.
#[derive(Clone, Debug, Serialize)]
pub struct Solution {
    pub assignment: BTreeMap<String, String>,
    pub total_cost: i64,
    pub overflow: BTreeMap<String, usize>,
}

impl Outcome {
    pub fn solution(&self) -> Solution {
        let a = &self.assignments;
        let mut assignment = BTreeMap::new();
        for student in a.all_students() {
            if let Some(project) = a.project_for(student) {
                assignment.insert(
                    self.remap.student_id(student).to_owned(),
                    self.remap.project_id(project).to_owned(),
                );
            }
        }
        let overflow = a
            .filter_projects(|p| a.is_over_capacity(p))
            .into_iter()
            .map(|p| (self.remap.project_id(p).to_owned(), a.overflow(p)))
            .collect();
        Solution {
            assignment,
            total_cost: self.total_cost,
            overflow,
        }
    }
}

/// Compute a minimum-cost assignment of students to projects. The input
/// is validated, normalized to dense indices, solved by the configured
/// backend and verified before being returned. Pure by construction:
/// all state lives in the returned value, so concurrent calls do not
/// interact.
#[instrument(skip_all)]
pub fn solve(
    students: &[StudentRecord],
    projects: &[ProjectRecord],
    config: &SolverConfig,
) -> Result<Outcome, SolveError> {
    let scheme = config.validate()?;
    let (remap, students, projects) = remap::normalize(students, projects, &scheme)?;
    let mut assignments = Assignments::new(students, projects);
    let total_cost = {
        let penalty = config.overflow_penalty;
        let mut algo: Box<dyn Algo + '_> = match config.algorithm {
            Algorithm::Flow => Box::new(MinCostFlow::new(&mut assignments, penalty)),
            Algorithm::Hungarian => Box::new(Hungarian::new(&mut assignments, penalty)),
        };
        algo.assign()?
    };
    checks::verify(&assignments, config.overflow_penalty, total_cost)?;
    info!(
        total_cost,
        students = assignments.students.len(),
        "assignment computed and verified"
    );
    Ok(Outcome {
        assignments,
        remap,
        total_cost,
    })
}
