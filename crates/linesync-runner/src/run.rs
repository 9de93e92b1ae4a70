use crate::cli::{DividerCommand, OutputFormat, SyncCommand};
use crate::config::{resolve_runner_config, RunnerConfigError};
use crate::io::{read_events, ReadEventsError};
use linesync_engine::{
    encode_record_jsonl_line, render_side_by_side, render_text, summarize, synchronize_raw,
    ContainerGeometry, DividerBounds, SideBySide,
};
use serde_json::json;
use std::fs;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("read file failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Events(#[from] ReadEventsError),
    #[error(transparent)]
    Config(#[from] RunnerConfigError),
    #[error("container width must be a positive number, got {0}")]
    InvalidContainer(f64),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

pub fn execute_sync(command: &SyncCommand) -> Result<String, RunnerError> {
    let config = resolve_runner_config(command.config.as_deref())?;
    let raw = read_events(command.events.as_str())?;
    let outcome = synchronize_raw(raw, &config.sanitize_options());
    debug!(
        records = outcome.records.len(),
        issues = outcome.issues.len(),
        "sync finished"
    );

    let output = match command.format {
        OutputFormat::Text => match &command.source {
            Some(path) => {
                let source = fs::read_to_string(path).map_err(|source| RunnerError::ReadFile {
                    path: path.display().to_string(),
                    source,
                })?;
                render_side_by_side(
                    source.as_str(),
                    &outcome.records,
                    &SideBySide {
                        width: command.width.unwrap_or(config.render.width),
                        ratio: config.layout.initial_ratio,
                        options: config.render_options(),
                    },
                )
            }
            None => render_text(&outcome.records, &config.render_options()),
        },
        OutputFormat::Json => {
            let summary = summarize(&outcome.records)?;
            serde_json::to_string_pretty(&json!({
                "schema": "linesync-render/0.0.1",
                "records": outcome.records,
                "summary": summary,
                "issues": outcome.issues,
            }))?
        }
        OutputFormat::Jsonl => {
            let mut out = String::new();
            for record in &outcome.records {
                out.push_str(encode_record_jsonl_line(record)?.as_str());
            }
            if out.ends_with('\n') {
                out.pop();
            }
            out
        }
    };
    Ok(output)
}

pub fn execute_divider(command: &DividerCommand) -> Result<String, RunnerError> {
    let config = resolve_runner_config(command.config.as_deref())?;
    let container = ContainerGeometry::new(command.container_left, command.container_width);
    let Some(bounds) =
        DividerBounds::for_container(container.width, config.layout.min_panel_width)
    else {
        return Err(RunnerError::InvalidContainer(command.container_width));
    };

    let mut divider = config.divider();
    divider.fit_to(container);
    let mut frames = 0usize;
    if let Some((first, rest)) = command.drag.split_first() {
        divider.begin_drag(*first, container);
        for x in rest {
            divider.pointer_moved(*x);
            if divider.on_frame(container) {
                frames += 1;
            }
        }
        divider.end_drag();
    }
    for key in &command.keys {
        divider.nudge((*key).into(), container, config.layout.keyboard_step);
    }

    let (left, right) = divider.panel_percentages();
    let output = match command.format {
        OutputFormat::Text => format!(
            "linesync divider\nratio: {:.4}\nleft: {left:.2}%\nright: {right:.2}%\nbounds: {:.4}..{:.4}",
            divider.ratio(),
            bounds.min_ratio,
            bounds.max_ratio,
        ),
        OutputFormat::Json | OutputFormat::Jsonl => {
            let value = json!({
                "schema": "linesync-divider/0.0.1",
                "ratio": divider.ratio(),
                "left_percent": left,
                "right_percent": right,
                "min_ratio": bounds.min_ratio,
                "max_ratio": bounds.max_ratio,
                "drag_samples": command.drag.len(),
                "frames_changed": frames,
                "key_presses": command.keys.len(),
            });
            if command.format == OutputFormat::Json {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            }
        }
    };
    Ok(output)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
