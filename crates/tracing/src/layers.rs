use crate::{formatter::LogFormat, ColorMode};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{filter::Directive, EnvFilter, Layer, Registry};

/// A boxed tracing [Layer].
pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Guard that flushes the non-blocking file writer when dropped.
pub type FileWorkerGuard = WorkerGuard;

/// Default file name of the log file.
pub const PLATE_LOG_FILE_NAME: &str = "plate.log";

/// Events from these crates are noisy and never useful for assertion debugging.
const DEFAULT_ENV_FILTER_DIRECTIVES: [&str; 1] = ["rayon_core=off"];

/// The collection of layers installed on the global subscriber.
#[derive(Default)]
pub(crate) struct Layers {
    inner: Vec<BoxedLayer<Registry>>,
}

impl Layers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn into_inner(self) -> Vec<BoxedLayer<Registry>> {
        self.inner
    }

    /// Adds a layer writing to stdout.
    pub(crate) fn stdout(
        &mut self,
        format: LogFormat,
        default_directive: Directive,
        filters: &str,
        color: ColorMode,
    ) -> eyre::Result<()> {
        let filter = build_env_filter(Some(default_directive), filters)?;
        self.inner.push(format.apply(filter, color, None));
        Ok(())
    }

    /// Adds a layer writing to the file described by `file_info`.
    pub(crate) fn file(
        &mut self,
        format: LogFormat,
        filters: &str,
        file_info: FileInfo,
    ) -> eyre::Result<FileWorkerGuard> {
        let (writer, guard) = file_info.create_log_writer()?;
        let filter = build_env_filter(None, filters)?;
        self.inner.push(format.apply(filter, ColorMode::Never, Some(writer)));
        Ok(guard)
    }
}

/// Location of a log file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    dir: PathBuf,
    file_name: String,
}

impl FileInfo {
    /// Creates a new file info, the file being `dir/file_name`.
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self { dir: dir.into(), file_name: file_name.into() }
    }

    /// The directory holding the log file.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn create_log_writer(&self) -> eyre::Result<(NonBlocking, WorkerGuard)> {
        std::fs::create_dir_all(&self.dir).map_err(|err| {
            eyre::eyre!("could not create log directory {}: {err}", self.dir.display())
        })?;
        let appender = tracing_appender::rolling::never(&self.dir, &self.file_name);
        Ok(tracing_appender::non_blocking(appender))
    }
}

/// Builds an [`EnvFilter`] from `RUST_LOG` (falling back to `default_directive`) plus the
/// comma separated `directives`.
pub(crate) fn build_env_filter(
    default_directive: Option<Directive>,
    directives: &str,
) -> eyre::Result<EnvFilter> {
    let env_filter = if let Some(default_directive) = default_directive {
        EnvFilter::builder().with_default_directive(default_directive).from_env_lossy()
    } else {
        EnvFilter::builder().from_env_lossy()
    };

    DEFAULT_ENV_FILTER_DIRECTIVES
        .into_iter()
        .chain(directives.split(',').filter(|d| !d.is_empty()))
        .try_fold(env_filter, |env_filter, directive| {
            Ok(env_filter.add_directive(directive.parse()?))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_directives() {
        let filter = build_env_filter(None, "plate::assert=trace,plate::harness=debug").unwrap();
        assert!(filter.to_string().contains("plate::assert=trace"));
    }

    #[test]
    fn filter_rejects_garbage() {
        assert!(build_env_filter(None, "plate::assert=loud").is_err());
    }

    #[test]
    fn file_writer_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let info = FileInfo::new(dir.path().join("logs"), PLATE_LOG_FILE_NAME);
        let (_writer, _guard) = info.create_log_writer().unwrap();
        assert!(info.dir().is_dir());
    }
}
