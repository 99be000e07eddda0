use crate::errors::SolveError;
use crate::model::{Project, ProjectId, ProjectRecord, Student, StudentId, StudentRecord};
use crate::weights::WeightScheme;
use std::collections::HashMap;
use tracing::debug;

/// Reverse side of the dense index mapping: external ids by index, in
/// first-seen input order. Built once per solve and discarded with it.
#[derive(Clone, Debug)]
pub struct Remap {
    students: Vec<String>,
    projects: Vec<String>,
}

impl Remap {
    pub fn student_id(&self, StudentId(student): StudentId) -> &str {
        &self.students[student]
    }

    pub fn project_id(&self, ProjectId(project): ProjectId) -> &str {
        &self.projects[project]
    }
}

/// Work with normalized values: students and projects are given dense
/// indices starting at 0, in the order the records were presented, and
/// every structural problem is rejected here, before any model exists.
pub fn normalize(
    students: &[StudentRecord],
    projects: &[ProjectRecord],
    scheme: &WeightScheme,
) -> Result<(Remap, Vec<Student>, Vec<Project>), SolveError> {
    let mut project_index = HashMap::new();
    let mut internal_projects = Vec::with_capacity(projects.len());
    for (idx, record) in projects.iter().enumerate() {
        let id = ProjectId(idx);
        if project_index.insert(record.id.clone(), id).is_some() {
            return Err(SolveError::invalid(format!(
                "duplicate project id {:?}",
                record.id
            )));
        }
        internal_projects.push(Project {
            id,
            name: record.title.clone(),
            capacity: record.capacity,
        });
    }

    let mut seen_students = HashMap::new();
    let mut internal_students = Vec::with_capacity(students.len());
    for (idx, record) in students.iter().enumerate() {
        let id = StudentId(idx);
        if seen_students.insert(record.id.clone(), id).is_some() {
            return Err(SolveError::invalid(format!(
                "duplicate student id {:?}",
                record.id
            )));
        }
        if record.choices.is_empty() {
            return Err(SolveError::invalid(format!(
                "student {:?} has an empty choice list",
                record.id
            )));
        }
        let mut rankings = Vec::with_capacity(record.choices.len());
        for choice in &record.choices {
            let Some(&project) = project_index.get(choice) else {
                return Err(SolveError::invalid(format!(
                    "student {:?} chose unknown project {:?}",
                    record.id, choice
                )));
            };
            if rankings.contains(&project) {
                return Err(SolveError::invalid(format!(
                    "student {:?} chose project {:?} more than once",
                    record.id, choice
                )));
            }
            rankings.push(project);
        }
        let weights = scheme
            .effective(record.points.as_deref(), rankings.len())
            .map_err(|err| match err {
                SolveError::InvalidInput(msg) => {
                    SolveError::invalid(format!("student {:?}: {msg}", record.id))
                }
                other => other,
            })?;
        let name = record.name.clone().unwrap_or_else(|| record.id.clone());
        internal_students.push(Student::new(id, name, rankings, weights));
    }

    debug!(
        students = internal_students.len(),
        projects = internal_projects.len(),
        "normalized input to dense indices"
    );
    let remap = Remap {
        students: students.iter().map(|s| s.id.clone()).collect(),
        projects: projects.iter().map(|p| p.id.clone()).collect(),
    };
    Ok((remap, internal_students, internal_projects))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, capacity: u32) -> ProjectRecord {
        ProjectRecord {
            id: id.into(),
            title: format!("Project {id}"),
            capacity,
        }
    }

    fn student(id: &str, choices: &[&str]) -> StudentRecord {
        StudentRecord {
            id: id.into(),
            name: None,
            choices: choices.iter().map(|c| c.to_string()).collect(),
            points: None,
        }
    }

    #[test]
    fn indices_follow_first_seen_order() {
        let projects = [project("beta", 2), project("alpha", 1)];
        let students = [student("s2", &["alpha"]), student("s1", &["beta", "alpha"])];
        let (remap, internal_students, internal_projects) =
            normalize(&students, &projects, &WeightScheme::default()).unwrap();
        assert_eq!(internal_projects[0].name, "Project beta");
        assert_eq!(internal_students[0].rankings, vec![ProjectId(1)]);
        assert_eq!(internal_students[1].rankings, vec![ProjectId(0), ProjectId(1)]);
        assert_eq!(remap.student_id(StudentId(0)), "s2");
        assert_eq!(remap.student_id(StudentId(1)), "s1");
        assert_eq!(remap.project_id(ProjectId(0)), "beta");
        assert_eq!(remap.project_id(ProjectId(1)), "alpha");
    }

    #[test]
    fn default_weights_follow_choice_length() {
        let projects = [project("a", 1), project("b", 1), project("c", 1), project("d", 1)];
        let students = [student("s", &["a", "b", "c", "d"])];
        let (_, internal_students, _) =
            normalize(&students, &projects, &WeightScheme::default()).unwrap();
        assert_eq!(internal_students[0].weights, vec![1, 2, 4, 4]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let scheme = WeightScheme::default();
        let err = normalize(
            &[student("s", &["a"]), student("s", &["a"])],
            &[project("a", 1)],
            &scheme,
        )
        .unwrap_err();
        assert!(matches!(err, SolveError::InvalidInput(_)));
        let err = normalize(
            &[student("s", &["a"])],
            &[project("a", 1), project("a", 2)],
            &scheme,
        )
        .unwrap_err();
        assert!(matches!(err, SolveError::InvalidInput(_)));
    }

    #[test]
    fn bad_choice_lists_are_rejected() {
        let scheme = WeightScheme::default();
        let projects = [project("a", 1)];
        for bad in [
            student("s", &[]),
            student("s", &["nope"]),
            student("s", &["a", "a"]),
        ] {
            let err = normalize(&[bad], &projects, &scheme).unwrap_err();
            assert!(matches!(err, SolveError::InvalidInput(_)));
        }
    }

    #[test]
    fn weight_errors_name_the_student() {
        let err = normalize(
            &[StudentRecord {
                points: Some(vec![1, 2]),
                ..student("karl", &["a"])
            }],
            &[project("a", 1)],
            &WeightScheme::default(),
        )
        .unwrap_err();
        let SolveError::InvalidInput(msg) = err else {
            panic!("expected invalid input");
        };
        assert!(msg.contains("karl"));
    }
}
