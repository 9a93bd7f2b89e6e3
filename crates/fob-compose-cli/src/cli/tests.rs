#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command, OutputFormat};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_compose_defaults() {
        let cli = Cli::try_parse_from(["fob-compose", "compose", "--signal", "build:prod"]).unwrap();
        match cli.command {
            Command::Compose(args) => {
                assert_eq!(args.signal.as_deref(), Some("build:prod"));
                assert_eq!(args.format, OutputFormat::Json);
                assert!(!args.compact);
                assert!(!args.define);
                assert!(args.settings.config.is_none());
            }
            other => panic!("expected compose, got {other:?}"),
        }
    }

    #[test]
    fn test_compose_settings_flags() {
        let cli = Cli::try_parse_from([
            "fob-compose",
            "compose",
            "--root",
            "/srv/site",
            "--config",
            "settings/fob-compose.toml",
            "--format",
            "toml",
        ])
        .unwrap();
        let Command::Compose(args) = cli.command else {
            panic!("expected compose");
        };
        assert_eq!(args.settings.root, Some(PathBuf::from("/srv/site")));
        assert_eq!(
            args.settings.config,
            Some(PathBuf::from("settings/fob-compose.toml"))
        );
        assert_eq!(args.format, OutputFormat::Toml);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fob-compose", "check", "--verbose", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["fob-compose", "-v", "-q", "schema"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["fob-compose", "compose", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
