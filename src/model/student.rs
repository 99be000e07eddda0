use super::ProjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub usize);

/// A student in the dense index space, with effective weights parallel
/// to the rankings (one weight per ranked project, padding already
/// applied).
#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub rankings: Vec<ProjectId>,
    pub weights: Vec<i64>,
}

impl Student {
    pub fn new(id: StudentId, name: String, rankings: Vec<ProjectId>, weights: Vec<i64>) -> Self {
        debug_assert_eq!(rankings.len(), weights.len());
        Self {
            id,
            name,
            rankings,
            weights,
        }
    }

    pub fn rank_of(&self, project: ProjectId) -> Option<usize> {
        self.rankings.iter().position(|&p| p == project)
    }

    /// Cost of assigning this student to `project`, or `None` when the
    /// project is not on their list (a forbidden pair).
    pub fn cost_of(&self, project: ProjectId) -> Option<i64> {
        self.rank_of(project).map(|rank| self.weights[rank])
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A student as presented by the caller, still in the external id space.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StudentRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub choices: Vec<String>,
    #[serde(default)]
    pub points: Option<Vec<i64>>,
}
