use linesync_core::{FieldPath, IssueSeverity, StructuredIssue};
use linesync_engine::{
    DividerState, LinePolicy, RenderOptions, SanitizeOptions, DEFAULT_MAX_LINE, DEFAULT_RATIO,
    KEYBOARD_STEP,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_schema")]
    pub schema: String,
    #[serde(default)]
    pub sanitize: SanitizeConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema: default_runner_schema(),
            sanitize: SanitizeConfig::default(),
            render: RenderConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl RunnerConfig {
    pub fn sanitize_options(&self) -> SanitizeOptions {
        SanitizeOptions {
            line_policy: self.sanitize.line_policy,
            max_line: self.sanitize.max_line,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            line_numbers: self.render.line_numbers,
            show_time: self.render.show_time,
        }
    }

    pub fn divider(&self) -> DividerState {
        DividerState::new(self.layout.min_panel_width).with_ratio(self.layout.initial_ratio)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeConfig {
    #[serde(default)]
    pub line_policy: LinePolicy,
    #[serde(default = "default_max_line")]
    pub max_line: u32,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            line_policy: LinePolicy::default(),
            max_line: default_max_line(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_true")]
    pub line_numbers: bool,
    #[serde(default)]
    pub show_time: bool,
    #[serde(default = "default_width")]
    pub width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_numbers: true,
            show_time: false,
            width: default_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_min_panel_width")]
    pub min_panel_width: f64,
    #[serde(default = "default_initial_ratio")]
    pub initial_ratio: f64,
    #[serde(default = "default_keyboard_step")]
    pub keyboard_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_panel_width: default_min_panel_width(),
            initial_ratio: default_initial_ratio(),
            keyboard_step: default_keyboard_step(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerConfigError {
    #[error("read runner config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("runner config parse failed: {0}")]
    Parse(String),
    #[error("runner config validation failed: {}", describe_issues(.0))]
    Validation(Vec<StructuredIssue>),
}

pub fn resolve_runner_config(path: Option<&Path>) -> Result<RunnerConfig, RunnerConfigError> {
    match path {
        Some(path) => load_runner_config(path),
        None => Ok(RunnerConfig::default()),
    }
}

pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, RunnerConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| RunnerConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let expanded = expand_env_placeholders(raw.as_str()).map_err(RunnerConfigError::Parse)?;
    let config: RunnerConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(expanded.as_str())
            .map_err(|error| RunnerConfigError::Parse(format!("json decode error: {error}")))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(expanded.as_str())
            .map_err(|error| RunnerConfigError::Parse(format!("yaml decode error: {error}")))?,
        _ => serde_yaml::from_str(expanded.as_str())
            .or_else(|_| serde_json::from_str(expanded.as_str()))
            .map_err(|error| RunnerConfigError::Parse(error.to_string()))?,
    };

    let mut issues = validate_runner_config(&config);
    StructuredIssue::sort_stable(&mut issues);
    if !issues.is_empty() {
        return Err(RunnerConfigError::Validation(issues));
    }
    debug!(path = %path.display(), "loaded runner config");
    Ok(config)
}

pub fn validate_runner_config(config: &RunnerConfig) -> Vec<StructuredIssue> {
    let mut issues = Vec::<StructuredIssue>::new();
    if config.schema != default_runner_schema() {
        issues.push(config_issue(
            "runner.config.schema",
            FieldPath::root().key("schema"),
            format!(
                "unsupported runner config schema `{}` (expected `{}`)",
                config.schema,
                default_runner_schema()
            ),
        ));
    }
    if config.sanitize.max_line == 0 {
        issues.push(config_issue(
            "runner.config.sanitize.max_line",
            FieldPath::root().key("sanitize").key("max_line"),
            "sanitize.max_line must be > 0".to_string(),
        ));
    }
    if config.render.width == 0 {
        issues.push(config_issue(
            "runner.config.render.width",
            FieldPath::root().key("render").key("width"),
            "render.width must be > 0".to_string(),
        ));
    }

    let layout = &config.layout;
    if !(layout.min_panel_width.is_finite() && layout.min_panel_width > 0.0) {
        issues.push(config_issue(
            "runner.config.layout.min_panel_width",
            layout_path("min_panel_width"),
            format!(
                "layout.min_panel_width must be > 0, got {}",
                layout.min_panel_width
            ),
        ));
    }
    for (field, value) in [
        ("initial_ratio", layout.initial_ratio),
        ("keyboard_step", layout.keyboard_step),
    ] {
        if !is_open_unit_interval(value) {
            issues.push(config_issue(
                format!("runner.config.layout.{field}").as_str(),
                layout_path(field),
                format!("layout.{field} must be within (0, 1), got {value}"),
            ));
        }
    }

    issues
}

fn is_open_unit_interval(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value < 1.0
}

fn layout_path(field: &str) -> FieldPath {
    FieldPath::root().key("layout").key(field)
}

fn config_issue(reference: &str, field_path: FieldPath, message: String) -> StructuredIssue {
    StructuredIssue::new(
        "runner_config_error",
        IssueSeverity::Error,
        field_path,
        message,
    )
    .with_reference(reference)
}

fn describe_issues(issues: &[StructuredIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field_path, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn default_runner_schema() -> String {
    "linesync-runner/0.0.1".to_string()
}

fn default_max_line() -> u32 {
    DEFAULT_MAX_LINE
}

fn default_true() -> bool {
    true
}

fn default_width() -> usize {
    100
}

fn default_min_panel_width() -> f64 {
    20.0
}

fn default_initial_ratio() -> f64 {
    DEFAULT_RATIO
}

fn default_keyboard_step() -> f64 {
    KEYBOARD_STEP
}

fn expand_env_placeholders(input: &str) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    while let Some(start_offset) = input[cursor..].find("${") {
        let start = cursor + start_offset;
        out.push_str(&input[cursor..start]);
        let name_start = start + 2;
        let Some(end_offset) = input[name_start..].find('}') else {
            return Err("unterminated env placeholder `${...`".to_string());
        };
        let end = name_start + end_offset;
        let name = &input[name_start..end];
        if name.is_empty() {
            return Err("empty env placeholder `${}`".to_string());
        }
        let value = std::env::var(name)
            .map_err(|_| format!("missing env var for placeholder `${{{name}}}`"))?;
        out.push_str(value.as_str());
        cursor = end + 1;
    }
    out.push_str(&input[cursor..]);
    Ok(out)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
