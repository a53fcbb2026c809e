//! Mock project directory.
//!
//! The core deliberately knows nothing about projects beyond extracting ids
//! from queries; the directory itself is a caller-side concern. This mirrors
//! the project list a deployment would fetch from its estates API.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
}

pub const PROJECTS: [Project; 5] = [
    Project {
        id: 1,
        name: "North Cancer Centre",
    },
    Project {
        id: 2,
        name: "South Health Complex",
    },
    Project {
        id: 3,
        name: "Emergency Wing Extension",
    },
    Project {
        id: 4,
        name: "Pediatric Care Unit",
    },
    Project {
        id: 5,
        name: "Diagnostic Imaging Center",
    },
];

pub fn find_by_id(id: u32) -> Option<Project> {
    PROJECTS.iter().copied().find(|p| p.id == id)
}

pub fn find_by_name(query: &str) -> Option<Project> {
    let query = query.to_lowercase();
    PROJECTS
        .iter()
        .copied()
        .find(|p| query.contains(&p.name.to_lowercase()))
}

pub fn format_project_list() -> String {
    let mut out = String::from("Here are all available projects:\n");
    for project in PROJECTS {
        out.push_str(&format!("- {} (project id {})\n", project.name, project.id));
    }
    out.push_str(
        "\nChoose a project by its id (e.g. project id 5), or 'all projects' to explore data across the entire system.",
    );
    out
}
