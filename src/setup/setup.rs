use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use slog::{Drain, Level};

use super::log_format::RackFormat;

/// LogConf defines where and what to log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConf {
    pub path: PathBuf,
    pub level: Level,
}

impl Default for LogConf {
    /// Log at info level to `rack.log` in the current dir.
    fn default() -> Self {
        let mut path = env::current_dir().unwrap_or_default();
        path.push("rack.log");

        LogConf {
            path,
            level: Level::Info,
        }
    }
}

impl LogConf {
    pub fn new<P: Into<PathBuf>>(path: P, level: &str) -> io::Result<LogConf> {
        let level = Level::from_str(level).map_err(|_| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("invalid log level: {}", level),
            )
        })?;

        Ok(LogConf {
            path: path.into(),
            level,
        })
    }
}

/// init a global async logger that appends to `conf.path`.
pub fn init_logger(conf: &LogConf) -> io::Result<()> {
    let file = open_log_file(&conf.path)?;

    let decorator = slog_term::PlainDecorator::new(file);
    let drain = RackFormat::new(decorator).fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = drain.filter_level(conf.level).fuse();

    let logger = slog::Logger::root(drain, slog::o!());

    slog_global::set_global(logger);

    info!("logger ready"; "path" => %conf.path.display(), "level" => conf.level.as_str());
    Ok(())
}

/// Opens log file with append mode. Creates a new log file if it doesn't exist.
fn open_log_file<P: AsRef<Path>>(path: P) -> io::Result<File> {
    let path = path.as_ref();
    let parent = path.parent().ok_or_else(|| {
        Error::new(
            ErrorKind::Other,
            "Unable to get parent directory of log file",
        )
    })?;
    if !parent.as_os_str().is_empty() && !parent.is_dir() {
        fs::create_dir_all(parent)?
    }
    OpenOptions::new().append(true).create(true).open(path)
}
