use crate::model::Assignments;
use crate::stats;

pub fn display_details(a: &Assignments) {
    let mut projects = a.projects.clone();
    projects.sort_by_key(|p| p.name.clone());
    for p in &projects {
        let mut students = a.students_for(p.id).clone();
        students.sort_by_key(|&s| a.student(s).name.clone());
        if !students.is_empty() {
            println!("{} ({}/{}):", p.name, students.len(), p.capacity);
            for s in students {
                print!("  - {}", a.student(s).name);
                if let Some(rank) = a.rank_of(s, p.id) {
                    print!(" (rank {})", rank + 1);
                }
                println!();
            }
            println!();
        }
    }
}

pub fn display_stats(a: &Assignments, total_cost: i64) {
    println!("Students assigned: {}", a.students.len());
    let ranks = stats::statistics(a);
    let cumul = ranks.iter().scan(0, |s, &r| {
        *s += r;
        Some(*s)
    });
    let total: usize = ranks.iter().sum();
    println!("Final ranking:");
    for (rank, (n, c)) in ranks.iter().zip(cumul).enumerate() {
        if *n != 0 {
            println!(
                "  - rank {}: {} (cumulative {} - {:.2}%)",
                rank + 1,
                n,
                c,
                100.0 * c as f32 / total as f32
            );
        }
    }
    println!("Total cost: {total_cost}");
    let mut over = a.filter_projects(|p| a.is_over_capacity(p));
    over.sort_by_key(|&p| a.project(p).name.clone());
    if !over.is_empty() {
        println!("Projects over nominal capacity:");
        for p in over {
            println!(
                "  - {} ({}/{})",
                a.project(p).name,
                a.size(p),
                a.capacity(p)
            );
        }
    }
}

pub fn display_empty(a: &Assignments) {
    let mut projects = a.filter_projects(|p| !a.is_open(p));
    projects.sort_by_key(|&p| a.project(p).name.clone());
    if !projects.is_empty() {
        println!("Empty projects:");
        for p in projects {
            println!("  - {}", a.project(p).name);
        }
    }
}
