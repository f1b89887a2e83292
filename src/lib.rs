mod downloader;

pub use downloader::{
    BatchFetcher, BatchReport, Download, DownloadTask, Fetcher, Response, TaskError, TaskOutcome,
    UreqFetcher,
};
