//! Console output utilities.

use console::style;

use crate::api::types::ProbeInfo;
use crate::config::TransferMode;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the resource preview returned by a probe.
pub fn print_probe_info(info: &ProbeInfo) {
    println!();
    println!(
        "{} {}",
        style("Title:").bold(),
        info.title.as_deref().unwrap_or("(untitled)")
    );

    if let Some(uploader) = &info.uploader {
        println!("{} {}", style("Uploader:").bold(), uploader);
    }

    match info.kind {
        TransferMode::Single => {
            if let Some(thumbnail) = &info.thumbnail {
                println!("{} {}", style("Thumbnail:").bold(), thumbnail);
            }
        }
        TransferMode::Collection => {
            if let Some(count) = info.video_count {
                println!("{} {}", style("Videos:").bold(), count);
            }
            for entry in &info.videos {
                println!("  - {}", entry.title.as_deref().unwrap_or("(untitled)"));
            }
        }
    }
    println!();
}
