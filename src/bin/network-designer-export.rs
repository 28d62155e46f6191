// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Designer Export
//!
//! Loads a project document and writes its Terraform, Docker Compose and SVG
//! artifacts next to each other.
//!
//! Run with: cargo run --bin network-designer-export
//!
//! Environment:
//! 1. NETWORK_DESIGNER_PROJECT - project JSON to load (required)
//! 2. NETWORK_DESIGNER_OUTPUT_DIR - output directory (default: current directory)
//! 3. NETWORK_DESIGNER_CANVAS_WIDTH / NETWORK_DESIGNER_CANVAS_HEIGHT - SVG viewport

use anyhow::{Context, Result};
use futures::future::try_join_all;
use network_designer::{
    domain::validate_project, export_all, generators::project_artifact, serialization, Artifact,
    ExportConfig,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ExportConfig::from_env().context("Failed to load export configuration")?;
    info!("Configuration loaded:");
    info!("  - Project: {}", config.project_path.display());
    info!("  - Output: {}", config.output_dir.display());
    info!(
        "  - Canvas: {}x{}",
        config.canvas.width, config.canvas.height
    );

    let json = tokio::fs::read_to_string(&config.project_path)
        .await
        .with_context(|| format!("Failed to read {}", config.project_path.display()))?;
    let project = serialization::from_json(&json).context("Failed to parse project document")?;

    for issue in validate_project(&project) {
        warn!("Project issue: {}", issue);
    }

    let mut artifacts =
        export_all(&project, &config.canvas).context("Failed to generate artifacts")?;
    artifacts.push(project_artifact(&project).context("Failed to serialize project")?);

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;

    try_join_all(
        artifacts
            .iter()
            .map(|artifact| write_artifact(&config, artifact)),
    )
    .await?;

    info!("Exported {} artifacts for '{}'", artifacts.len(), project.name);
    Ok(())
}

async fn write_artifact(config: &ExportConfig, artifact: &Artifact) -> Result<()> {
    let path = config.output_dir.join(&artifact.file_name);
    tokio::fs::write(&path, &artifact.contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} ({})", path.display(), artifact.kind);
    Ok(())
}

