use crate::BASE_URL;

/// What the walker does when a fetched page lacks the entry list container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop the whole run with [`crate::Error::MalformedPage`].
    #[default]
    Abort,
    /// Report the page, count it as processed and continue paging.
    Skip,
}

/// Immutable settings handed to the [`crate::walk::Walker`].
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    /// Walked in the given order.
    pub partitions: Vec<char>,
    pub on_malformed: MalformedPolicy,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            partitions: ('a'..='z').collect(),
            on_malformed: MalformedPolicy::default(),
        }
    }
}

impl ScrapeConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_partitions(mut self, partitions: impl IntoIterator<Item = char>) -> Self {
        self.partitions = partitions.into_iter().collect();
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    /// `{base_url}/{letter}/{page}`
    pub fn page_url(&self, letter: char, page: u32) -> String {
        format!("{}/{letter}/{page}", self.base_url.trim_end_matches('/'))
    }

    /// Address logged when a partition starts.
    pub fn partition_url(&self, letter: char) -> String {
        format!("{}/{letter}/", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_walks_the_whole_alphabet() {
        let config = ScrapeConfig::default();
        assert_eq!(config.partitions.len(), 26);
        assert_eq!(config.partitions.first(), Some(&'a'));
        assert_eq!(config.partitions.last(), Some(&'z'));
        assert_eq!(config.on_malformed, MalformedPolicy::Abort);
    }

    #[test]
    fn page_url_joins_letter_and_page() {
        let config = ScrapeConfig::default();
        assert_eq!(
            config.page_url('q', 3),
            "https://www.dictionary.com/list/q/3"
        );

        let config = config.with_base_url("http://127.0.0.1:3000/list/");
        assert_eq!(config.page_url('a', 1), "http://127.0.0.1:3000/list/a/1");
        assert_eq!(config.partition_url('a'), "http://127.0.0.1:3000/list/a/");
    }
}
