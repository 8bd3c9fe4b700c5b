//! Roster - Entry Point

use clap::Parser;
use roster::model::{AppError, InputError};
use roster::source::InputSource;
use roster::state::SelectAllMode;
use roster::view::{ColorConfig, ViewOptions};
use std::path::PathBuf;
use tracing::{info, warn};

/// Roster - browse, search, edit and bulk-delete roster members
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "TUI for browsing, searching, editing and bulk-deleting a member roster")]
pub struct Args {
    /// Path to the roster JSON file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Start with this search query applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start on this page (must be positive; ignored if out of range)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// How the per-page select-all marker behaves: toggle or recompute
    #[arg(long)]
    pub select_all_mode: Option<SelectAllMode>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = roster::config::load_config_with_precedence(args.config.clone())?;
        let merged = roster::config::merge_config(config_file);
        let with_env = roster::config::apply_env_overrides(merged);

        // Flags only override when given
        let no_color_override = if args.no_color { Some(true) } else { None };
        roster::config::apply_cli_overrides(
            with_env,
            args.file.clone(),
            args.select_all_mode,
            no_color_override,
        )
    };

    roster::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Nothing to read at all is a usage error, reported before the terminal
    // is taken over. Anything else is a fetch failure shown inside the TUI.
    let roster = match roster::source::detect_input_source(config.source.clone()) {
        Err(InputError::NoInput) => return Err(InputError::NoInput.into()),
        detected => detected.and_then(|source| {
            info!(source = %source.describe(), "Loading roster");
            source.load()
        }),
    };
    if let Err(e) = &roster {
        warn!(error = %e, "Roster could not be loaded");
    }

    let options = ViewOptions {
        select_all_mode: config.select_all_mode,
        initial_query: args.search,
        initial_page: args.page.map(|p| p as usize),
        color: ColorConfig::from_no_color(config.no_color),
    };

    roster::view::run_with_roster(roster, options)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["roster", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["roster", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["roster"]);
        assert_eq!(args.file, None);
        assert_eq!(args.search, None);
        assert_eq!(args.page, None);
        assert_eq!(args.select_all_mode, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["roster", "members.json"]);
        assert_eq!(args.file, Some(PathBuf::from("members.json")));
    }

    #[test]
    fn test_search_short_and_long() {
        let args = Args::parse_from(["roster", "-s", "admin"]);
        assert_eq!(args.search, Some("admin".to_string()));

        let args = Args::parse_from(["roster", "--search", "Ada"]);
        assert_eq!(args.search, Some("Ada".to_string()));
    }

    #[test]
    fn test_page_accepts_positive() {
        let args = Args::parse_from(["roster", "--page", "3"]);
        assert_eq!(args.page, Some(3));

        let args = Args::parse_from(["roster", "-p", "1"]);
        assert_eq!(args.page, Some(1));
    }

    #[test]
    fn test_page_zero_rejected() {
        let result = Args::try_parse_from(["roster", "--page", "0"]);
        assert!(result.is_err(), "Page 0 should be rejected");
    }

    #[test]
    fn test_page_non_numeric_rejected() {
        let result = Args::try_parse_from(["roster", "--page", "two"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_select_all_mode_values() {
        let args = Args::parse_from(["roster", "--select-all-mode", "recompute"]);
        assert_eq!(args.select_all_mode, Some(SelectAllMode::Recompute));

        let args = Args::parse_from(["roster", "--select-all-mode", "toggle"]);
        assert_eq!(args.select_all_mode, Some(SelectAllMode::Toggle));
    }

    #[test]
    fn test_select_all_mode_unknown_rejected() {
        let result = Args::try_parse_from(["roster", "--select-all-mode", "sometimes"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["roster", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["roster", "--config", "/etc/roster.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/etc/roster.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "roster",
            "members.json",
            "--search",
            "member",
            "--page",
            "2",
            "--no-color",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("members.json")));
        assert_eq!(args.search, Some("member".to_string()));
        assert_eq!(args.page, Some(2));
        assert!(args.no_color);
    }
}
