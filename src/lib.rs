//! Scrapes the alphabetical word index of dictionary.com.
//!
//! A [`walk::Walker`] pages through every letter of the index, handing each page to the
//! [`parse::PageExtractor`]; the writers in [`write`] drain the walker into a line-per-entry file.

pub mod config;
mod error;
mod macros;
pub mod parse;
pub mod process;
pub mod request;
pub mod walk;
pub mod write;

pub use config::{MalformedPolicy, ScrapeConfig};
pub use error::{Error, Result};

/// Root of the alphabetical index, pages live at `{BASE_URL}/{letter}/{page}`.
pub const BASE_URL: &str = "https://www.dictionary.com/list";
/// The `<ul>` holding every entry of a listing page.
const CONTAINER_SELECTOR: &str = r#"ul[data-testid="list-az-results"]"#;
const ITEM_SELECTOR: &str = "li";
const LINK_SELECTOR: &str = "a";
