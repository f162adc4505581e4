use std::path::PathBuf;

use clap::Parser;

/// Beauty product advisor with a rule-based chat.
#[derive(Parser, Debug)]
#[command(name = "advisor", version, about)]
pub struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog JSON document to load instead of the bundled catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory for persisted state and logs
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Deliver advisor replies without artificial delays
    #[arg(long)]
    pub no_pacing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["advisor"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.catalog.is_none());
        assert!(!cli.no_pacing);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "advisor",
            "--catalog",
            "/tmp/products.json",
            "--data-dir",
            "/tmp/advisor",
            "--no-pacing",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/products.json")));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/advisor")));
        assert!(cli.no_pacing);
    }
}
