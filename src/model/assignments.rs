use super::{Project, ProjectId, Student, StudentId};

/// Working state of one solve: who is assigned where, in the dense
/// index space. Built fresh for every call, never shared.
#[derive(Debug)]
pub struct Assignments {
    pub students: Vec<Student>,
    pub projects: Vec<Project>,
    assigned_to: Vec<Option<ProjectId>>,
    assigned: Vec<Vec<StudentId>>,
}

impl Assignments {
    pub fn new(students: Vec<Student>, projects: Vec<Project>) -> Assignments {
        let slen = students.len();
        let plen = projects.len();
        Assignments {
            students,
            projects,
            assigned_to: vec![None; slen],
            assigned: vec![Vec::new(); plen],
        }
    }

    pub fn student(&self, StudentId(student): StudentId) -> &Student {
        &self.students[student]
    }

    pub fn project(&self, ProjectId(project): ProjectId) -> &Project {
        &self.projects[project]
    }

    pub fn all_students(&self) -> Vec<StudentId> {
        (0..self.students.len()).map(StudentId).collect()
    }

    pub fn all_projects(&self) -> Vec<ProjectId> {
        self.filter_projects(|_| true)
    }

    pub fn filter_projects<F>(&self, condition: F) -> Vec<ProjectId>
    where
        F: Fn(ProjectId) -> bool,
    {
        (0..self.projects.len())
            .map(ProjectId)
            .filter(|&project| condition(project))
            .collect()
    }

    pub fn rankings(&self, student: StudentId) -> &Vec<ProjectId> {
        &self.student(student).rankings
    }

    pub fn rank_of(&self, student: StudentId, project: ProjectId) -> Option<usize> {
        self.student(student).rank_of(project)
    }

    pub fn cost_of(&self, student: StudentId, project: ProjectId) -> Option<i64> {
        self.student(student).cost_of(project)
    }

    pub fn assign_to(&mut self, student: StudentId, project: ProjectId) {
        assert!(
            self.project_for(student).is_none(),
            "a project is already assigned to this student"
        );
        assert!(
            self.rank_of(student, project).is_some(),
            "cannot assign a student to a project outside their choices"
        );
        self.assigned_to[student.0] = Some(project);
        self.assigned[project.0].push(student);
    }

    pub fn project_for(&self, StudentId(student): StudentId) -> Option<ProjectId> {
        self.assigned_to[student]
    }

    pub fn students_for(&self, ProjectId(project): ProjectId) -> &Vec<StudentId> {
        &self.assigned[project]
    }

    pub fn size(&self, project: ProjectId) -> usize {
        self.students_for(project).len()
    }

    pub fn capacity(&self, project: ProjectId) -> u32 {
        self.project(project).capacity
    }

    /// Headcount in excess of the nominal capacity, zero when within it.
    pub fn overflow(&self, project: ProjectId) -> usize {
        self.size(project)
            .saturating_sub(self.capacity(project) as usize)
    }

    pub fn is_over_capacity(&self, project: ProjectId) -> bool {
        self.overflow(project) > 0
    }

    pub fn is_open(&self, project: ProjectId) -> bool {
        !self.students_for(project).is_empty()
    }

    pub fn unassigned_students(&self) -> Vec<StudentId> {
        self.assigned_to
            .iter()
            .enumerate()
            .filter_map(|(id, assignment)| {
                if assignment.is_none() {
                    Some(StudentId(id))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Recompute the objective from the current assignment: the weight
    /// of every student's assigned choice plus the penalty for every
    /// unit of overflow. Students without an assignment contribute
    /// nothing; completeness is checked separately.
    pub fn total_cost(&self, penalty: i64) -> i64 {
        let choices = self
            .all_students()
            .into_iter()
            .filter_map(|s| {
                self.project_for(s)
                    .and_then(|p| self.cost_of(s, p))
            })
            .sum::<i64>();
        let overflow = self
            .all_projects()
            .into_iter()
            .map(|p| self.overflow(p) as i64)
            .sum::<i64>();
        choices + penalty * overflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Assignments {
        let projects = vec![
            Project {
                id: ProjectId(0),
                name: "garden".into(),
                capacity: 1,
            },
            Project {
                id: ProjectId(1),
                name: "kitchen".into(),
                capacity: 2,
            },
        ];
        let students = vec![
            Student::new(
                StudentId(0),
                "ada".into(),
                vec![ProjectId(0), ProjectId(1)],
                vec![1, 2],
            ),
            Student::new(
                StudentId(1),
                "bob".into(),
                vec![ProjectId(0)],
                vec![1],
            ),
        ];
        Assignments::new(students, projects)
    }

    #[test]
    fn overflow_counts_excess_only() {
        let mut a = fixture();
        a.assign_to(StudentId(0), ProjectId(0));
        assert_eq!(a.overflow(ProjectId(0)), 0);
        a.assign_to(StudentId(1), ProjectId(0));
        assert_eq!(a.overflow(ProjectId(0)), 1);
        assert!(a.is_over_capacity(ProjectId(0)));
        assert!(!a.is_open(ProjectId(1)));
    }

    #[test]
    fn total_cost_sums_choices_and_penalties() {
        let mut a = fixture();
        a.assign_to(StudentId(0), ProjectId(1));
        a.assign_to(StudentId(1), ProjectId(0));
        assert_eq!(a.total_cost(10), 2 + 1);
        assert_eq!(a.unassigned_students(), vec![]);
    }

    #[test]
    #[should_panic(expected = "outside their choices")]
    fn assigning_outside_choices_panics() {
        let mut a = fixture();
        a.assign_to(StudentId(1), ProjectId(1));
    }
}
