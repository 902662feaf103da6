//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use mediabank_dl::{DEFAULT_PAGE_SIZE, DEFAULT_ZOOM_LEVEL};

/// API key published with the original offline-use tool.
const DEFAULT_API_KEY: &str = "9b2c2e2e-0d8d-4858-8194-457df5251e1e";

/// Download digitized books from a Picturae mediabank catalog for offline use.
///
/// Each book becomes one directory of sequentially-numbered JPEG pages,
/// reconstructed from the catalog's deep-zoom tiles. Books whose directory
/// already exists are skipped.
#[derive(Parser, Debug)]
#[command(name = "mediabank-dl")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Mediabank API key
    #[arg(long, default_value = DEFAULT_API_KEY)]
    pub api_key: String,

    /// Digitized-publication search filter (empty string disables filtering)
    #[arg(long, default_value = "Ja")]
    pub search_filter: String,

    /// Catalog items per page (1-100)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Deep-zoom level requested for tiles (the server caps at the native maximum)
    #[arg(long, default_value_t = DEFAULT_ZOOM_LEVEL)]
    pub zoom_level: u32,

    /// Directory that receives one subdirectory per book
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["mediabank-dl"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert_eq!(args.api_key, DEFAULT_API_KEY);
        assert_eq!(args.search_filter, "Ja");
        assert_eq!(args.page_size, 25);
        assert_eq!(args.zoom_level, 20);
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["mediabank-dl", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_page_size_range_enforced() {
        let result = Args::try_parse_from(["mediabank-dl", "--page-size", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let result = Args::try_parse_from(["mediabank-dl", "--page-size", "101"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_custom_values() {
        let args = Args::try_parse_from([
            "mediabank-dl",
            "--api-key",
            "custom-key",
            "--search-filter",
            "",
            "--zoom-level",
            "13",
            "-o",
            "/tmp/books",
        ])
        .unwrap();
        assert_eq!(args.api_key, "custom-key");
        assert!(args.search_filter.is_empty());
        assert_eq!(args.zoom_level, 13);
        assert_eq!(args.output_dir, PathBuf::from("/tmp/books"));
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Args::try_parse_from(["mediabank-dl", "--help"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }
}
