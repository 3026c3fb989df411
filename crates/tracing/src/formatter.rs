use crate::layers::BoxedLayer;
use clap::ValueEnum;
use std::{fmt, fmt::Display, io::IsTerminal};
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Output format of a logging layer.
#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub enum LogFormat {
    /// One JSON object per event, for machine consumption.
    Json,

    /// Human readable lines.
    Terminal,
}

/// Whether a layer writes ANSI color codes.
#[derive(Debug, Copy, Clone, Default, ValueEnum, Eq, PartialEq)]
pub enum ColorMode {
    /// Colors whenever stdout is a terminal.
    #[default]
    Auto,
    /// Always colored.
    Always,
    /// Never colored.
    Never,
}

impl ColorMode {
    /// Resolves the mode for a layer, `RUST_LOG_STYLE=never` disabling colors everywhere.
    ///
    /// File layers never use colors.
    fn ansi(self, to_file: bool) -> bool {
        if to_file || std::env::var("RUST_LOG_STYLE").is_ok_and(|style| style == "never") {
            return false
        }
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

impl LogFormat {
    /// Builds a layer emitting this format, filtered by `filter`.
    ///
    /// Events go to `file_writer` when one is given, to stdout otherwise. Targets are shown
    /// when `RUST_LOG_TARGET` is not `0`, or when unset, if the filter enables levels more
    /// verbose than INFO.
    pub(crate) fn apply(
        &self,
        filter: EnvFilter,
        color: ColorMode,
        file_writer: Option<NonBlocking>,
    ) -> BoxedLayer<Registry> {
        let ansi = color.ansi(file_writer.is_some());
        let target = std::env::var("RUST_LOG_TARGET").map(|val| val != "0").unwrap_or_else(|_| {
            filter.max_level_hint().map_or(true, |max_level| max_level > tracing::Level::INFO)
        });

        let layer = tracing_subscriber::fmt::layer().with_ansi(ansi).with_target(target);
        match (self, file_writer) {
            (Self::Json, Some(writer)) => {
                layer.json().with_writer(writer).with_filter(filter).boxed()
            }
            (Self::Json, None) => layer.json().with_filter(filter).boxed(),
            (Self::Terminal, Some(writer)) => layer.with_writer(writer).with_filter(filter).boxed(),
            (Self::Terminal, None) => layer.with_filter(filter).boxed(),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Terminal => f.write_str("terminal"),
        }
    }
}
