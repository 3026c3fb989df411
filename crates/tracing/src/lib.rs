//!  The `tracing` module provides functionalities for setting up and configuring logging.
//!
//!  It includes structures and functions to create and manage the logging layers used by the
//!  `plate` binary: stdout and an optional log file. The module's primary entry point is the
//!  `PlateTracer` struct, which can be configured to use different logging formats and
//!  destinations. If no layer is specified, it will default to stdout.
//!
//!  # Examples
//!
//!  Basic usage:
//!
//!  ```
//!  use plate_tracing::{
//!      ColorMode, LayerInfo, LogFormat, PlateTracer, Tracer,
//!      tracing::level_filters::LevelFilter,
//!  };
//!
//!  fn main() -> eyre::Result<()> {
//!      let tracer = PlateTracer::new().with_stdout(LayerInfo::new(
//!          LogFormat::Json,
//!          LevelFilter::INFO.to_string(),
//!          "plate::harness=debug".to_string(),
//!          ColorMode::Never,
//!      ));
//!
//!      let _handle = tracer.init()?;
//!
//!      // Your application logic here
//!
//!      Ok(())
//!  }
//!  ```

#![doc(issue_tracker_base_url = "https://github.com/plate-rs/plate/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-export tracing crates
pub use tracing;
pub use tracing_subscriber;

// Re-export our types
pub use formatter::{ColorMode, LogFormat};
pub use layers::{FileInfo, FileWorkerGuard, PLATE_LOG_FILE_NAME};
pub use test_tracer::TestTracer;

mod formatter;
mod layers;
mod test_tracer;

use crate::layers::Layers;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

///  Tracer for application logging.
///
///  Manages the configuration and initialization of logging layers,
///  including standard output and optional file logging.
#[derive(Debug, Clone)]
pub struct PlateTracer {
    stdout: LayerInfo,
    file: Option<(LayerInfo, FileInfo)>,
}

impl PlateTracer {
    ///  Constructs a new `Tracer` with default settings.
    ///
    ///  Initializes with default stdout layer configuration.
    ///  The file layer is not set by default.
    pub fn new() -> Self {
        Self { stdout: LayerInfo::default(), file: None }
    }

    ///  Sets a custom configuration for the stdout layer.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    ///  Sets the file layer configuration and associated file info.
    pub fn with_file(mut self, config: LayerInfo, file_info: FileInfo) -> Self {
        self.file = Some((config, file_info));
        self
    }
}

impl Default for PlateTracer {
    fn default() -> Self {
        Self::new()
    }
}

///  Configuration for a logging layer.
///
///  This struct holds configuration parameters for a tracing layer, including
///  the format, filtering directives and coloring.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: ColorMode,
}

impl LayerInfo {
    ///  Constructs a new `LayerInfo`.
    ///
    ///  # Arguments
    ///  * `format` - Specifies the format for log messages.
    ///  * `default_directive` - Directive used when `RUST_LOG` is not set.
    ///  * `filters` - Additional comma separated filter directives.
    ///  * `color` - Whether the layer writes ANSI colors.
    pub const fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: ColorMode,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    ///  Terminal format, INFO level, no additional filters, automatic colors.
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: LevelFilter::INFO.to_string(),
            filters: String::new(),
            color: ColorMode::Auto,
        }
    }
}

/// Tracer handle keeping logging resources alive.
#[derive(Debug, Default)]
pub struct TracerHandle {
    /// Guard for the file layer, if any
    pub file_guard: Option<FileWorkerGuard>,
}

/// Trait defining a general interface for logging configuration.
///
/// Implementations can specify different logging setups, such as the application setup of
/// [`PlateTracer`] or the test setup of [`TestTracer`].
pub trait Tracer {
    /// Initialize the logging configuration.
    ///
    /// The returned handle must be kept alive for as long as file logging is needed.
    fn init(self) -> eyre::Result<TracerHandle>;
}

impl Tracer for PlateTracer {
    fn init(self) -> eyre::Result<TracerHandle> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            self.stdout.default_directive.parse()?,
            &self.stdout.filters,
            self.stdout.color,
        )?;

        let file_guard = if let Some((config, file_info)) = self.file {
            Some(layers.file(config.format, &config.filters, file_info)?)
        } else {
            None
        };

        // The error is returned if the global default subscriber is already set,
        // so it's safe to ignore it
        let _ =
            tracing_subscriber::registry().with(layers.into_inner()).try_init().inspect_err(|e| {
                tracing::warn!(%e, "Tracing subscriber could not be initialized.")
            });
        Ok(TracerHandle { file_guard })
    }
}

///  Initializes a tracing subscriber for tests.
///
///  The filter is configurable via `RUST_LOG`.
///
///  # Note
///
///  The subscriber will silently fail if it could not be installed.
pub fn init_test_tracing() {
    let _ = TestTracer::default().init();
}
