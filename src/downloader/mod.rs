mod fetcher;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use url::Url;

pub use fetcher::{Fetcher, Response, UreqFetcher};

#[cfg(test)]
use fetcher::MockFetcher;

/// One (source URL, destination file name) pair from the batch table.
///
/// The file name is joined onto the batch directory owned by the
/// [`BatchFetcher`]; tasks never carry absolute paths of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub source: String,
    pub file_name: String,
}

impl DownloadTask {
    pub fn new(source: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            file_name: file_name.into(),
        }
    }
}

/// Per-task failure cause. Every variant is recoverable: it fails the one
/// task it belongs to and the batch moves on.
#[derive(Debug, PartialEq, Eq)]
pub enum TaskError {
    InvalidUrl,
    HttpStatus(u16),
    NetworkError,
    InvalidBody,
    Write(String),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::InvalidUrl => write!(f, "source is not a valid URL"),
            TaskError::HttpStatus(code) => write!(f, "server answered with status {code}"),
            TaskError::NetworkError => write!(f, "network request failed"),
            TaskError::InvalidBody => write!(f, "response body could not be read"),
            TaskError::Write(cause) => write!(f, "could not write file: {cause}"),
        }
    }
}

impl std::error::Error for TaskError {}

/// Success record for one task: where the file landed and the exact bytes
/// that were persisted.
#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub content: Vec<u8>,
}

#[derive(Debug)]
pub struct TaskOutcome {
    pub source: String,
    pub file_name: String,
    pub result: Result<Download, TaskError>,
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregate of one `run`, one outcome per attempted task, in task order.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<TaskOutcome>,
}

impl BatchReport {
    pub fn outcomes(&self) -> &[TaskOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(TaskOutcome::is_success)
    }

    fn push(&mut self, outcome: TaskOutcome) {
        self.outcomes.push(outcome);
    }
}

/// Sequential fetch-and-persist over a fixed task list.
///
/// Construction ensures the output directory exists; that is the only fatal
/// error of the program. Everything after that is scoped to a single task.
pub struct BatchFetcher<T: Fetcher> {
    fetcher: T,
    dir: PathBuf,
}

impl BatchFetcher<UreqFetcher> {
    pub fn new(dir: impl AsRef<Path>) -> io::Result<Self> {
        Self::with_fetcher(dir, UreqFetcher::new())
    }
}

impl<T> BatchFetcher<T>
where
    T: Fetcher,
{
    pub fn with_fetcher(dir: impl AsRef<Path>, fetcher: T) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();

        fs::create_dir_all(&dir)?;

        Ok(Self { fetcher, dir })
    }

    /// Attempts every task in order, printing one attempt line and one
    /// outcome line per task between the start and completion banners.
    /// A failed task never stops the batch.
    pub fn run(&self, tasks: &[DownloadTask]) -> BatchReport {
        println!(
            "Downloading {} files into {}...",
            tasks.len(),
            self.dir.display()
        );

        let mut report = BatchReport::default();

        for task in tasks {
            println!("Downloading {}...", task.file_name);

            let result = self.download(task);

            match &result {
                Ok(download) => println!("Success: {} downloaded", download.file.display()),
                Err(err) => println!("Error downloading {}: {err}", task.file_name),
            }

            report.push(TaskOutcome {
                source: task.source.clone(),
                file_name: task.file_name.clone(),
                result,
            });
        }

        println!("\nDownload completed!");

        report
    }

    /// Fetches one task's source and writes the full body to its
    /// destination, overwriting any existing file at that path.
    pub fn download(&self, task: &DownloadTask) -> Result<Download, TaskError> {
        let url = Url::parse(&task.source).map_err(|_| TaskError::InvalidUrl)?;

        let body = match self.fetcher.fetch(url.as_str()) {
            Response::Ok(body) => body,
            Response::HttpStatus(code) => return Err(TaskError::HttpStatus(code)),
            Response::NetworkError => return Err(TaskError::NetworkError),
            Response::InvalidBody => return Err(TaskError::InvalidBody),
        };

        let file = self.dir.join(&task.file_name);

        if let Err(err) = fs::write(&file, &body) {
            // A failed write must not leave a truncated file behind.
            let _ = fs::remove_file(&file);
            return Err(TaskError::Write(err.to_string()));
        }

        Ok(Download {
            source: task.source.clone(),
            file,
            content: body,
        })
    }
}
