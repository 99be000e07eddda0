use crate::errors::SolveError;
use crate::model::Assignments;
use tracing::debug;

/// Re-derive the solution properties from the assignment state: every
/// student placed, every placement taken from the student's own list,
/// and the objective recomputed from scratch matching what the backend
/// reported. Any discrepancy is a defect of the backend, never of the
/// input.
pub fn verify(a: &Assignments, penalty: i64, reported: i64) -> Result<(), SolveError> {
    let unassigned = a.unassigned_students();
    if !unassigned.is_empty() {
        return Err(SolveError::internal(format!(
            "{} students left without a project",
            unassigned.len()
        )));
    }
    for s in &a.students {
        if let Some(p) = a.project_for(s.id) {
            if a.rank_of(s.id, p).is_none() {
                return Err(SolveError::internal(format!(
                    "student {} placed on {} which they never chose",
                    s.name,
                    a.project(p).name
                )));
            }
        }
    }
    let recomputed = a.total_cost(penalty);
    if recomputed != reported {
        return Err(SolveError::internal(format!(
            "objective mismatch: backend reported {reported}, recomputed {recomputed}"
        )));
    }
    debug!(total = reported, "solution verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Project, ProjectId, Student, StudentId};

    fn fixture() -> Assignments {
        let projects = vec![Project {
            id: ProjectId(0),
            name: "garden".into(),
            capacity: 1,
        }];
        let students = vec![Student::new(
            StudentId(0),
            "ada".into(),
            vec![ProjectId(0)],
            vec![3],
        )];
        Assignments::new(students, projects)
    }

    #[test]
    fn accepts_a_complete_consistent_solution() {
        let mut a = fixture();
        a.assign_to(StudentId(0), ProjectId(0));
        assert_eq!(verify(&a, 10, 3), Ok(()));
    }

    #[test]
    fn rejects_unassigned_students() {
        let a = fixture();
        assert!(matches!(
            verify(&a, 10, 0),
            Err(SolveError::SolverInternal(_))
        ));
    }

    #[test]
    fn rejects_a_wrong_total() {
        let mut a = fixture();
        a.assign_to(StudentId(0), ProjectId(0));
        assert!(matches!(
            verify(&a, 10, 4),
            Err(SolveError::SolverInternal(_))
        ));
    }
}
