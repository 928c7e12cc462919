use crate::download::{FetchOutcome, fetch_if_needed};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The URL to download.
    pub url: String,

    /// The output file path.
    pub path: PathBuf,
}

impl Cli {
    pub async fn exec() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        match fetch_if_needed(&self.url, &self.path).await? {
            FetchOutcome::Written(len) => {
                println!("{} written ({} bytes)", self.path.display(), len)
            }
            FetchOutcome::Exists(len) => {
                println!("{} exists ({} bytes)", self.path.display(), len)
            }
        }

        Ok(())
    }
}

pub async fn run() -> Result<()> {
    Cli::exec().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_positionals() {
        let cli = Cli::try_parse_from(["fetchfile", "http://example.test/data.bin", "out/data.bin"])
            .unwrap();

        assert_eq!(cli.url, "http://example.test/data.bin");
        assert_eq!(cli.path, PathBuf::from("out/data.bin"));
    }

    #[test]
    fn rejects_missing_path() {
        assert!(Cli::try_parse_from(["fetchfile", "http://example.test/data.bin"]).is_err());
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["fetchfile", "a", "b", "c"]).is_err());
    }
}
