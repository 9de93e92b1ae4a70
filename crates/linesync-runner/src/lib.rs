mod cli;
mod config;
mod io;
mod logging;
mod run;

pub use cli::{Cli, Commands, DividerCommand, KeyArg, OutputFormat, SyncCommand};
pub use config::{
    load_runner_config, resolve_runner_config, validate_runner_config, LayoutConfig, RenderConfig,
    RunnerConfig, RunnerConfigError, SanitizeConfig,
};
pub use io::{read_events, read_events_from, ReadEventsError};
pub use logging::init_logging;
pub use run::{execute_divider, execute_sync, RunnerError};
