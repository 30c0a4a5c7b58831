// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported bundles and glyph reports

use super::{BundleDocument, TextFormatter};
use crate::glyphs::GlyphSummary;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    pub fn render_bundle(&self, doc: &BundleDocument) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(TextFormatter::plain().bundle(doc)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(doc)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(doc)?),
        }
    }

    pub fn render_glyphs(&self, summary: &GlyphSummary) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(TextFormatter::plain().glyphs(summary)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(summary)?),
        }
    }
}
