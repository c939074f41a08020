//! Project file I/O.
//!
//! Projects are exchanged as a JSON sequence of `{id, name, room, lights,
//! calcMode}` records, matching the editor's export format. The engine only
//! consumes the room, the fixture list and the mode from each record.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::geom::room::RoomConfig;
use crate::random_id;
use crate::sim::config::CalcMode;
use crate::sim::fixture::Fixture;

/// One saved layout: a room, its fixtures and the active sampling mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub room: RoomConfig,
    pub lights: Vec<Fixture>,
    pub calc_mode: CalcMode,
}

impl Project {
    /// Creates an empty project with the default room in floor mode.
    pub fn new(name: &str) -> Self {
        Self {
            id: random_id(),
            name: name.to_string(),
            room: RoomConfig::default(),
            lights: Vec::new(),
            calc_mode: CalcMode::Floor,
        }
    }
}

/// Writes a project sequence to a JSON file.
pub fn write_projects(path: &Path, projects: &[Project]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, projects)
        .with_context(|| format!("Failed to serialize projects to: {}", path.display()))?;

    Ok(())
}

/// Reads a project sequence from a JSON file.
pub fn read_projects(path: &Path) -> Result<Vec<Project>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let projects: Vec<Project> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize projects from: {}", path.display()))?;

    Ok(projects)
}

/// Serializes a project sequence to a JSON string.
pub fn to_project_string(projects: &[Project]) -> Result<String> {
    serde_json::to_string_pretty(projects).context("Failed to serialize projects to string")
}

/// Deserializes a project sequence from a JSON string.
pub fn from_project_string(json: &str) -> Result<Vec<Project>> {
    serde_json::from_str(json).context("Failed to deserialize projects from string")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Surface;
    use tempfile::tempdir;

    #[test]
    fn test_file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("layouts.json");

        let mut project = Project::new("hall");
        project.lights.push(Fixture::new("L1", Surface::Ceiling, 0.5, 0.5, 4000.0));
        project.calc_mode = CalcMode::Body;
        let original = vec![project, Project::new("empty")];

        write_projects(&path, &original)?;
        let loaded = read_projects(&path)?;
        assert_eq!(original, loaded);
        Ok(())
    }

    #[test]
    fn test_reads_editor_export_format() -> Result<()> {
        // A record exactly as the editor exports it.
        let json = r##"[{
            "id": "proj-1",
            "name": "Project 1",
            "room": {
                "width": 6, "depth": 8, "height": 3.5, "chamfer": 0.5,
                "workPlaneHeight": 0.8, "bodyWidth": 1.8, "bodyHeight": 1.5,
                "bodyLength": 4.8, "bodyClearance": 0.5
            },
            "lights": [{
                "id": "abc", "name": "L", "surface": "SLOPE_WEST",
                "u": 0.5, "v": 0.25, "lumens": 4000,
                "color": "#facc15", "pitch": 1.5
            }],
            "calcMode": "FLOOR"
        }]"##;

        let projects = from_project_string(json)?;
        assert_eq!(projects.len(), 1);
        let project = &projects[0];
        assert_eq!(project.room.work_plane_height, 0.8);
        assert_eq!(project.lights[0].surface, Surface::SlopeWest);
        assert_eq!(project.lights[0].pitch, 1.5);
        assert_eq!(project.calc_mode, CalcMode::Floor);
        Ok(())
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = read_projects(Path::new("/nonexistent/path/layouts.json"));
        assert!(result.is_err());
    }
}
