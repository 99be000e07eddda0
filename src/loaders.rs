use crate::model::{ProjectRecord, StudentRecord};
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Shape of a combined input document: the project roster and the
/// student preferences in one file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InputFile {
    projects: Vec<ProjectRecord>,
    students: Vec<StudentRecord>,
}

pub fn load_json(file_name: &Path) -> Result<(Vec<StudentRecord>, Vec<ProjectRecord>)> {
    let content = fs::read_to_string(file_name)
        .wrap_err_with(|| format!("cannot read input file {}", file_name.display()))?;
    parse_json(&content)
        .wrap_err_with(|| format!("cannot parse input file {}", file_name.display()))
}

pub fn parse_json(content: &str) -> Result<(Vec<StudentRecord>, Vec<ProjectRecord>)> {
    let input: InputFile = serde_json::from_str(content)?;
    Ok((input.students, input.projects))
}

pub fn load_csv(
    students_file: &Path,
    projects_file: &Path,
) -> Result<(Vec<StudentRecord>, Vec<ProjectRecord>)> {
    let students = fs::read_to_string(students_file)
        .wrap_err_with(|| format!("cannot read students file {}", students_file.display()))
        .and_then(|content| parse_students_csv(&content))
        .wrap_err_with(|| format!("cannot load students from {}", students_file.display()))?;
    let projects = fs::read_to_string(projects_file)
        .wrap_err_with(|| format!("cannot read projects file {}", projects_file.display()))
        .and_then(|content| parse_projects_csv(&content))
        .wrap_err_with(|| format!("cannot load projects from {}", projects_file.display()))?;
    Ok((students, projects))
}

/// One student per row, the choices and optional points packed into
/// single whitespace-separated cells.
#[derive(Debug, Deserialize)]
struct StudentRow {
    id: String,
    #[serde(default)]
    name: String,
    choices: String,
    #[serde(default)]
    points: String,
}

fn parse_students_csv(content: &str) -> Result<Vec<StudentRecord>> {
    let mut students = Vec::new();
    for row in csv::Reader::from_reader(content.as_bytes()).deserialize() {
        let row: StudentRow = row.wrap_err("malformed student row")?;
        let points = if row.points.trim().is_empty() {
            None
        } else {
            Some(
                row.points
                    .split_whitespace()
                    .map(|point| {
                        point.parse::<i64>().wrap_err_with(|| {
                            format!("bad point value {point:?} for student {:?}", row.id)
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            )
        };
        students.push(StudentRecord {
            name: (!row.name.is_empty()).then(|| row.name.clone()),
            id: row.id,
            choices: row.choices.split_whitespace().map(str::to_owned).collect(),
            points,
        });
    }
    Ok(students)
}

fn parse_projects_csv(content: &str) -> Result<Vec<ProjectRecord>> {
    csv::Reader::from_reader(content.as_bytes())
        .deserialize()
        .collect::<Result<Vec<ProjectRecord>, _>>()
        .wrap_err("malformed project row")
}
