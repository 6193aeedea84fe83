use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use wordlist::{
    info_time,
    process::{process_site, OutputMode},
    MalformedPolicy, Result, ScrapeConfig, BASE_URL,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// File the word list is written to, overwritten if it exists
    output: PathBuf,

    /// Write every scraped entry instead of distinct lowercase words
    #[arg(long)]
    raw: bool,

    /// Root of the alphabetical index
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Skip pages missing the entry list instead of aborting
    #[arg(long)]
    skip_malformed: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let args = Args::parse();

    let policy = if args.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Abort
    };
    let config = ScrapeConfig::default()
        .with_base_url(args.base_url)
        .with_malformed_policy(policy);
    let mode = if args.raw {
        OutputMode::Raw
    } else {
        OutputMode::Words
    };

    process_site(config, &args.output, mode).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn output_path_is_required() {
        let err = Args::try_parse_from(["wordlist"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn defaults_to_words_from_dictionary_com() {
        let args = Args::try_parse_from(["wordlist", "words.txt"]).unwrap();
        assert_eq!(args.output, PathBuf::from("words.txt"));
        assert_eq!(args.base_url, BASE_URL);
        assert!(!args.raw);
        assert!(!args.skip_malformed);
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(Args::try_parse_from(["wordlist", "a.txt", "b.txt"]).is_err());
    }
}
