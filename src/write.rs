use std::collections::HashSet;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::walk::EntrySource;
use crate::Result;

/// Keeps the words already written during this run.
#[derive(Debug, Default)]
pub struct WordFilter {
    seen: HashSet<String>,
}

impl WordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits an entry made only of lowercase letters that wasn't admitted before.
    /// Phrases, capitalised or punctuated forms and repeats are rejected.
    pub fn admit(&mut self, entry: &str) -> bool {
        is_plain_word(entry) && self.seen.insert(entry.to_owned())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[inline]
fn is_plain_word(entry: &str) -> bool {
    !entry.is_empty() && entry.chars().all(|c| c.is_alphabetic() && c.is_lowercase())
}

/// Writes every entry as its own line. Returns the number of lines written.
pub async fn write_raw<S, W>(source: &mut S, out: &mut W) -> Result<usize>
where
    S: EntrySource,
    W: AsyncWrite + Unpin,
{
    let mut count = 0;
    while let Some(entry) = source.next_entry().await? {
        write_line(out, &entry).await?;
        count += 1;
    }
    out.flush().await?;
    Ok(count)
}

/// Writes each distinct plain word once, in first-seen order.
/// Returns the number of distinct words written.
pub async fn write_words<S, W>(source: &mut S, out: &mut W) -> Result<usize>
where
    S: EntrySource,
    W: AsyncWrite + Unpin,
{
    let mut filter = WordFilter::new();
    while let Some(entry) = source.next_entry().await? {
        if filter.admit(&entry) {
            write_line(out, &entry).await?;
        }
    }
    out.flush().await?;
    Ok(filter.len())
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &str) -> Result<()> {
    out.write_all(format!("{line}\n").as_bytes()).await?;
    Ok(())
}
