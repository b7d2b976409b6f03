use clap::Parser;
use std::path::PathBuf;

use crate::commands::split::SplitOptions;
use crate::scan::ScanOptions;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Recursively extracts PDF pages from the PDF files in a directory")]
#[command(version)]
pub struct Cli {
    /// Path to the folder that contains the PDF files
    #[arg(short, long)]
    pub path: PathBuf,

    /// Force the extraction of already previously extracted files
    #[arg(short, long)]
    pub force: bool,

    /// Print the progress of the extraction per page
    #[arg(short, long)]
    pub verbose: bool,

    /// Stop the whole run at the first file that fails to split
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions {
            scan: ScanOptions { force: self.force },
            verbose: self.verbose,
            fail_fast: self.fail_fast,
        }
    }
}
