pub use self::assignments::Assignments;
pub use self::project::{Project, ProjectId, ProjectRecord};
pub use self::student::{Student, StudentId, StudentRecord};

mod assignments;
mod project;
mod student;
