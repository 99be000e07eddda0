use super::Algo;
use crate::errors::SolveError;
use crate::model::{Assignments, StudentId};
use pathfinding::prelude::*;
use tracing::{debug, instrument};

/// Exact solver on a seat-expanded matrix. Every project contributes
/// one seat per candidate, the seats beyond its capacity carrying the
/// overflow penalty on top of the choice weight, and Kuhn-Munkres picks
/// the cheapest perfect matching of students to seats. Serves as an
/// independent cross-check of the flow formulation.
pub struct Hungarian<'a> {
    assignments: &'a mut Assignments,
    penalty: i64,
}

impl<'a> Hungarian<'a> {
    pub fn new(assignments: &'a mut Assignments, penalty: i64) -> Hungarian<'a> {
        Hungarian {
            assignments,
            penalty,
        }
    }
}

impl Algo for Hungarian<'_> {
    #[instrument(skip_all)]
    fn assign(&mut self) -> Result<i64, SolveError> {
        let slen = self.assignments.students.len();
        if slen == 0 {
            return Ok(0);
        }

        // One seat per candidacy, so there are at least as many seats
        // as students and every student can sit on a chosen project.
        // With a non-negative penalty, a cheapest matching never leaves
        // a regular seat empty while a penalized seat of the same
        // project is taken, so the matching total is the objective.
        let mut seats = Vec::new();
        for project in self.assignments.all_projects() {
            let candidates = self
                .assignments
                .students
                .iter()
                .filter(|student| student.rank_of(project).is_some())
                .count();
            let capacity = self.assignments.capacity(project) as usize;
            for seat in 0..candidates {
                let surcharge = if seat < capacity { 0 } else { self.penalty };
                seats.push((project, surcharge));
            }
        }

        let large = i64::MAX / (1 + slen as i64);
        let mut weights = Matrix::new(slen, seats.len(), large);
        for student in &self.assignments.students {
            for (column, &(project, surcharge)) in seats.iter().enumerate() {
                if let Some(weight) = student.cost_of(project) {
                    weights[(student.id.0, column)] = weight + surcharge;
                }
            }
        }
        debug!(students = slen, seats = seats.len(), "seat matrix built");

        let (total, matching) = kuhn_munkres_min(&weights);
        for (student, seat) in matching.into_iter().enumerate() {
            if weights[(student, seat)] >= large {
                return Err(SolveError::internal(format!(
                    "student {} was matched outside their choices",
                    self.assignments.student(StudentId(student))
                )));
            }
            let (project, _) = seats[seat];
            self.assignments.assign_to(StudentId(student), project);
        }
        Ok(total)
    }

    fn get_assignments(&self) -> &Assignments {
        self.assignments
    }
}
