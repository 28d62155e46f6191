// Copyright (c) 2025 - Cowboy AI, Inc.
//! Code Generators
//!
//! Pure functions from a [`NetworkProject`] to one text artifact each:
//!
//! ```text
//! NetworkProject ──► TerraformGenerator ──► <stem>.tf
//!                ├─► ComposeGenerator   ──► <stem>-compose.yml
//!                └─► SvgGenerator       ──► <stem>_diagram.svg
//! ```
//!
//! Generators never mutate the project and never perform I/O. Malformed
//! per-device fields (port mappings, volumes, memory limits) are skipped or
//! replaced by a fallback with a `warn!`, so one bad device never blocks the
//! export of the others.

pub mod compose;
pub mod svg;
pub mod terraform;

pub use compose::{generate_compose, ComposeGenerator};
pub use svg::{generate_svg, SvgGenerator};
pub use terraform::{generate_terraform, TerraformGenerator};

use std::collections::HashSet;
use std::fmt;
use tracing::info;

use crate::config::CanvasConfig;
use crate::domain::NetworkProject;
use crate::errors::TopologyResult;

/// Kind of exported artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Terraform,
    Compose,
    Svg,
    ProjectJson,
}

impl ArtifactKind {
    /// File name for a project file stem
    pub fn file_name(&self, stem: &str) -> String {
        match self {
            Self::Terraform => format!("{stem}.tf"),
            Self::Compose => format!("{stem}-compose.yml"),
            Self::Svg => format!("{stem}_diagram.svg"),
            Self::ProjectJson => format!("{stem}_project.json"),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Terraform => "terraform",
            Self::Compose => "compose",
            Self::Svg => "svg",
            Self::ProjectJson => "project-json",
        };
        f.write_str(s)
    }
}

/// A generated text artifact ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub contents: String,
}

/// Generator seam: a pure function from project to text
pub trait ArtifactGenerator {
    fn kind(&self) -> ArtifactKind;

    fn generate(&self, project: &NetworkProject) -> TopologyResult<String>;

    /// Generate and name the artifact after the project
    fn artifact(&self, project: &NetworkProject) -> TopologyResult<Artifact> {
        let contents = self.generate(project)?;
        let kind = self.kind();
        let file_name = kind.file_name(&project.file_stem());
        info!(
            artifact = %kind,
            file_name = %file_name,
            bytes = contents.len(),
            "Generated artifact"
        );
        Ok(Artifact {
            kind,
            file_name,
            contents,
        })
    }
}

/// Produce the Terraform, Compose and SVG artifacts in one call
pub fn export_all(project: &NetworkProject, canvas: &CanvasConfig) -> TopologyResult<Vec<Artifact>> {
    let svg = SvgGenerator::new(*canvas);
    let generators: [&dyn ArtifactGenerator; 3] = [&TerraformGenerator, &ComposeGenerator, &svg];
    generators
        .iter()
        .map(|generator| generator.artifact(project))
        .collect()
}

/// The project document itself, as a named artifact
pub fn project_artifact(project: &NetworkProject) -> TopologyResult<Artifact> {
    let kind = ArtifactKind::ProjectJson;
    Ok(Artifact {
        kind,
        file_name: kind.file_name(&project.file_stem()),
        contents: crate::serialization::to_json(project)?,
    })
}

/// Sanitize a name into an identifier token: non-alphanumerics become `_`
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Names already handed out within one artifact; repeats get `_2`, `_3`, ...
#[derive(Debug, Default)]
pub(crate) struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    /// Claim `name`, or the first free suffixed form of it
    pub(crate) fn claim(&mut self, name: &str) -> String {
        if self.taken.insert(name.to_string()) {
            return name.to_string();
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{name}_{suffix}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
