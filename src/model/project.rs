use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProjectId(pub usize);

#[derive(Clone, Debug)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub capacity: u32,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A project as presented by the caller. The title is opaque and passed
/// through unchanged; the capacity type rules out fractional values.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub capacity: u32,
}
