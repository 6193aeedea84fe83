use std::path::Path;

use chrono::Local;
use tokio::fs::File;

use crate::walk::Walker;
use crate::write::{write_raw, write_words};
use crate::{info_time, Result, ScrapeConfig};

/// What ends up in the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Distinct lowercase single words only.
    #[default]
    Words,
    /// Every scraped entry, duplicates and phrases included.
    Raw,
}

/// Scrapes the whole index into `output`, overwriting it.
/// Returns the number of lines written.
pub async fn process_site(config: ScrapeConfig, output: &Path, mode: OutputMode) -> Result<usize> {
    let start_time = Local::now();
    let client = reqwest::Client::new();
    let mut walker = Walker::new(client, config)?;

    info_time!("Started scraping into {}", output.display());

    let mut file = File::create(output).await?;
    let count = match mode {
        OutputMode::Raw => {
            let count = write_raw(&mut walker, &mut file).await?;
            info_time!(
                start_time,
                "{} created with {} entries.",
                output.display(),
                count
            );
            count
        }
        OutputMode::Words => {
            let count = write_words(&mut walker, &mut file).await?;
            info_time!(
                start_time,
                "{} created with {} words.",
                output.display(),
                count
            );
            count
        }
    };

    Ok(count)
}
