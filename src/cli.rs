//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tourism-explorer")]
#[command(about = "Indian tourism dashboard: map, footfall, scams, services and local tips", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to the user config directory, then ./config.toml)
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_config_path_is_optional() {
        let cli = Cli::try_parse_from(["tourism-explorer"]).unwrap();
        assert_eq!(cli.config, None);

        let cli = Cli::try_parse_from(["tourism-explorer", "/etc/tourism.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/tourism.toml")));
    }

    #[test]
    fn test_help_and_version_are_not_config_paths() {
        let err = Cli::try_parse_from(["tourism-explorer", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["tourism-explorer", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["tourism-explorer", "--port", "80"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
