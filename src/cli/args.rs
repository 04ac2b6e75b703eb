use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::{DEFAULT_QR_HOST, DEFAULT_URL_TRUNC};

#[derive(Parser, Debug)]
#[command(name = "tourney-scorecards")]
#[command(
    author,
    version,
    about = "Generate printable tournament scorecards, one PDF per division"
)]
pub struct Args {
    /// Tournament JSON file path
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output directory for the generated PDFs
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Hide previous opponents, scores, and standings
    #[arg(long)]
    pub no_opponents: bool,

    /// Hide seed badges
    #[arg(long)]
    pub no_seeds: bool,

    /// Hide QR codes
    #[arg(long)]
    pub no_qrcode: bool,

    /// Host used in QR code URLs
    #[arg(long, default_value = DEFAULT_QR_HOST)]
    pub qr_host: String,

    /// Initial number of player-id characters in QR code URLs
    #[arg(long, default_value_t = DEFAULT_URL_TRUNC as u16, value_parser = clap::value_parser!(u16).range(1..))]
    pub url_trunc: u16,

    /// Skip PDF stream compression
    #[arg(long)]
    pub no_compress: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Output file path for a division's document
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output.join(file_name)
    }

    /// Check if opponents should be shown
    pub fn show_opponents(&self) -> bool {
        !self.no_opponents
    }

    /// Check if seeds should be shown
    pub fn show_seeds(&self) -> bool {
        !self.no_seeds
    }

    /// Check if QR codes should be shown
    pub fn show_qrcode(&self) -> bool {
        !self.no_qrcode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["tourney-scorecards", "tourney.json"]);
        assert_eq!(args.input, PathBuf::from("tourney.json"));
        assert_eq!(args.output, PathBuf::from("."));
        assert!(args.show_opponents());
        assert!(args.show_seeds());
        assert!(args.show_qrcode());
        assert_eq!(args.url_trunc, 2);
        assert_eq!(args.qr_host, "woogles.io");
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "tourney-scorecards",
            "tourney.json",
            "-o",
            "out",
            "--no-seeds",
            "--no-qrcode",
            "--url-trunc",
            "4",
            "-vv",
        ]);
        assert!(args.show_opponents());
        assert!(!args.show_seeds());
        assert!(!args.show_qrcode());
        assert_eq!(args.url_trunc, 4);
        assert_eq!(args.verbose, 2);
        assert_eq!(
            args.output_path("A_scorecards.pdf"),
            PathBuf::from("out/A_scorecards.pdf")
        );
    }

    #[test]
    fn test_url_trunc_rejects_zero() {
        let result = Args::try_parse_from(["tourney-scorecards", "t.json", "--url-trunc", "0"]);
        assert!(result.is_err());
    }
}
