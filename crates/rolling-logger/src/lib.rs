//! Rolling file logger with a circular buffer of recent lines.
//!
//! `init_logger` installs a `tracing` subscriber that writes to stderr and to
//! `<dir>/<app>.log`. The file is rotated to `<app>.log.1 .. <app>.log.N` once
//! it grows past the size limit. `log` records are forwarded as well.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_MAX_FILES: usize = 3;
pub const DEFAULT_BUFFER_LINES: usize = 500;

static LOGGER: OnceLock<RollingFile> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub dir: PathBuf,
    pub app_name: String,
    pub max_bytes: u64,
    pub max_files: usize,
    pub buffer_lines: usize,
}

impl LoggerConfig {
    pub fn new(dir: impl AsRef<Path>, app_name: &str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            app_name: app_name.to_string(),
            max_bytes: DEFAULT_MAX_BYTES,
            max_files: DEFAULT_MAX_FILES,
            buffer_lines: DEFAULT_BUFFER_LINES,
        }
    }
}

struct RollingState {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
    recent: VecDeque<String>,
    buffer_lines: usize,
    partial: String,
}

impl RollingState {
    fn rotated_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.rotated_path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = self.rotated_path(index);
            if from.exists() {
                fs::rename(&from, self.rotated_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.rotated_path(1))?;

        self.file = File::create(&self.path)?;
        self.written = 0;
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(end) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=end).collect();
            self.recent.push_back(line.trim_end().to_string());
            if self.recent.len() > self.buffer_lines {
                self.recent.pop_front();
            }
        }
    }
}

/// Size-rotated log file; clones write to the same file
#[derive(Clone)]
pub struct RollingFile {
    state: Arc<Mutex<RollingState>>,
}

impl RollingFile {
    pub fn open(config: &LoggerConfig) -> Result<Self, LoggerError> {
        fs::create_dir_all(&config.dir)?;
        let path = config.dir.join(format!("{}.log", config.app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            state: Arc::new(Mutex::new(RollingState {
                path,
                file,
                written,
                max_bytes: config.max_bytes,
                max_files: config.max_files,
                recent: VecDeque::new(),
                buffer_lines: config.buffer_lines,
                partial: String::new(),
            })),
        })
    }

    pub fn path(&self) -> PathBuf {
        self.lock().path.clone()
    }

    /// Up to `count` of the most recently written lines, oldest first
    pub fn recent_lines(&self, count: usize) -> Vec<String> {
        let state = self.lock();
        let skip = state.recent.len().saturating_sub(count);
        state.recent.iter().skip(skip).cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, RollingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.lock();
        if state.written > 0 && state.written + buf.len() as u64 > state.max_bytes {
            state.rotate()?;
        }
        state.file.write_all(buf)?;
        state.written += buf.len() as u64;
        state.remember(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().file.flush()
    }
}

/// Install the global subscriber with default limits
pub fn init_logger(dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_with(LoggerConfig::new(dir, app_name))
}

pub fn init_with(config: LoggerConfig) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let file = RollingFile::open(&config)?;
    let writer = file.clone();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        )
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    LOGGER
        .set(file)
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    tracing::info!(path = %config.dir.display(), "{} logger started", config.app_name);
    Ok(())
}

fn logger() -> Result<&'static RollingFile, LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    logger()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    logger()?;
    tracing::error!("{}", message);
    Ok(())
}

/// Recent lines of the installed logger
pub fn recent_lines(count: usize) -> Result<Vec<String>, LoggerError> {
    Ok(logger()?.recent_lines(count))
}
