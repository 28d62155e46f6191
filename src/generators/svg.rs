// Copyright (c) 2025 - Cowboy AI, Inc.
//! SVG Diagram Generator
//!
//! Canvas coordinates grow upwards from the bottom-left corner; SVG grows
//! downwards from the top-left. Every y value is flipped with
//! `svg_y = canvas_height - canvas_y`.

use tracing::warn;

use super::{ArtifactGenerator, ArtifactKind};
use crate::config::CanvasConfig;
use crate::domain::{NetworkProject, Position};
use crate::errors::TopologyResult;

const BACKGROUND: (u8, u8, u8) = (242, 242, 242);
const STROKE: (u8, u8, u8) = (51, 51, 51);
const CORNER_RADIUS: f64 = 10.0;

/// SVG artifact generator
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgGenerator {
    canvas: CanvasConfig,
}

impl SvgGenerator {
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { canvas }
    }
}

impl ArtifactGenerator for SvgGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Svg
    }

    fn generate(&self, project: &NetworkProject) -> TopologyResult<String> {
        Ok(generate_svg(project, &self.canvas))
    }
}

/// Render the project as an SVG document
pub fn generate_svg(project: &NetworkProject, canvas: &CanvasConfig) -> String {
    let (width, height) = (canvas.width, canvas.height);
    let flip = |y: f64| height - y;

    let mut svg = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = num(width),
        h = num(height)
    ));
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        num(width),
        num(height),
        rgb(BACKGROUND)
    ));

    svg.push_str("  <g id=\"connections\">\n");
    for conn in project.connections.values() {
        let (Some(source), Some(target)) = (
            project.device(&conn.source_id),
            project.device(&conn.target_id),
        ) else {
            warn!(connection_id = %conn.id, "Skipping connection with missing endpoint");
            continue;
        };
        let (x1, y1) = canvas.device_center(source.position.x, source.position.y);
        let (x2, y2) = canvas.device_center(target.position.x, target.position.y);
        svg.push_str(&format!(
            "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            num(x1),
            num(flip(y1)),
            num(x2),
            num(flip(y2)),
            rgb(STROKE)
        ));
    }
    svg.push_str("  </g>\n");

    svg.push_str("  <g id=\"devices\">\n");
    for device in project.devices.values() {
        let Position { x, y } = device.position;
        let (cx, cy) = canvas.device_center(x, y);
        svg.push_str(&format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{r}\" ry=\"{r}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            num(x),
            num(flip(y + canvas.device_height)),
            num(canvas.device_width),
            num(canvas.device_height),
            rgb(device.device_type.rgb()),
            rgb(STROKE),
            r = num(CORNER_RADIUS)
        ));
        svg.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"sans-serif\" font-size=\"12\" fill=\"rgb(255,255,255)\">{}</text>\n",
            num(cx),
            num(flip(cy)),
            xml_escape(&device.name)
        ));
    }
    svg.push_str("  </g>\n");

    svg.push_str("</svg>\n");
    svg
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({r},{g},{b})")
}

/// Fixed-precision number text: integers print bare, fractions keep up to two digits
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}

/// Escape text content and attribute values
pub fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
