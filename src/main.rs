use std::process::ExitCode;

use blog_image_fetcher::{BatchFetcher, DownloadTask};

const OUTPUT_DIR: &str = "images/blog";

fn blog_images() -> Vec<DownloadTask> {
    vec![
        DownloadTask::new(
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=1200&h=600&fit=crop",
            "blog-1.jpg",
        ),
        DownloadTask::new(
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=1200&h=600&fit=crop",
            "blog-2.jpg",
        ),
        DownloadTask::new(
            "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=1200&h=600&fit=crop",
            "blog-3.jpg",
        ),
    ]
}

fn main() -> ExitCode {
    let fetcher = match BatchFetcher::new(OUTPUT_DIR) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            eprintln!("Could not create {OUTPUT_DIR}: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Individual failures are already reported line by line; the process
    // still exits successfully as long as the directory could be created.
    fetcher.run(&blog_images());

    ExitCode::SUCCESS
}
