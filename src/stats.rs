use crate::model::Assignments;

/// Histogram of obtained ranks: entry `r` counts the students who got
/// their rank-`r` choice. Trailing empty ranks are trimmed.
pub fn statistics(a: &Assignments) -> Vec<usize> {
    let longest = a
        .students
        .iter()
        .map(|s| s.rankings.len())
        .max()
        .unwrap_or(0);
    let mut ranks = vec![0; longest];
    for project in a.filter_projects(|p| a.is_open(p)) {
        for &student in a.students_for(project) {
            if let Some(rank) = a.rank_of(student, project) {
                ranks[rank] += 1;
            }
        }
    }
    let latest = ranks.iter().rposition(|&n| n != 0).map_or(0, |n| n + 1);
    ranks.truncate(latest);
    ranks
}
