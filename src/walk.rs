use std::collections::VecDeque;

use reqwest::Client;

use crate::parse::PageExtractor;
use crate::request::{request_page_html, Fetched};
use crate::{info_time, Error, MalformedPolicy, Result, ScrapeConfig};

/// A forward-only stream of entries, pulled one at a time.
#[allow(async_fn_in_trait)]
pub trait EntrySource {
    /// `Ok(None)` once the source is exhausted.
    async fn next_entry(&mut self) -> Result<Option<String>>;
}

/// Walks every partition of the index in order and yields its entries.
///
/// Pages of a partition are requested one after another starting at 1, the first
/// non-200 response ends the partition. Only one page is buffered at a time.
pub struct Walker {
    client: Client,
    config: ScrapeConfig,
    extractor: PageExtractor,
    /// Index into `config.partitions`.
    partition: usize,
    /// Next page to request, `None` until the current partition has started.
    page: Option<u32>,
    pending: VecDeque<String>,
}

impl Walker {
    pub fn new(client: Client, config: ScrapeConfig) -> Result<Self> {
        Ok(Self {
            client,
            config,
            extractor: PageExtractor::new()?,
            partition: 0,
            page: None,
            pending: VecDeque::new(),
        })
    }

    /// Requests the next page of the current partition, moving on to the next
    /// partition when it is exhausted. Returns `false` once every partition is done.
    async fn advance(&mut self) -> Result<bool> {
        let Some(&letter) = self.config.partitions.get(self.partition) else {
            return Ok(false);
        };

        let page = match self.page {
            Some(page) => page,
            None => {
                info_time!(
                    "Starting partition {}: {}",
                    letter,
                    self.config.partition_url(letter)
                );
                1
            }
        };

        let url = self.config.page_url(letter, page);
        match request_page_html(&self.client, &url).await? {
            Fetched::Page(html) => {
                self.page = Some(page + 1);
                match self.extractor.extract(&html, &url) {
                    Ok(entries) => self.pending.extend(entries),
                    Err(Error::MalformedPage { url })
                        if self.config.on_malformed == MalformedPolicy::Skip =>
                    {
                        info_time!("Skipping malformed page: {}", url);
                    }
                    Err(err) => return Err(err),
                }
            }
            Fetched::Stop(status) => {
                info_time!("{} status code encountered.", status.as_u16());
                info_time!("{}: {} total pages processed.", letter, page - 1);
                self.partition += 1;
                self.page = None;
            }
        }
        Ok(true)
    }
}

impl EntrySource for Walker {
    async fn next_entry(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(entry) = self.pending.pop_front() {
                return Ok(Some(entry));
            }
            if !self.advance().await? {
                return Ok(None);
            }
        }
    }
}
