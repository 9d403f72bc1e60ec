use clap::Parser;
use shorturl::cli::{Cli, Commands, ConfigCommands};

#[test]
fn test_parse_shorten_many() {
    let cli = Cli::try_parse_from([
        "shorturl",
        "shorten",
        "https://a.com",
        "https://b.com",
        "--json",
    ])
    .unwrap();

    match cli.command {
        Commands::Shorten {
            urls,
            json,
            no_validate,
        } => {
            assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
            assert!(json);
            assert!(!no_validate);
        }
        other => panic!("unexpected command: {:?}", other),
    }
    assert!(cli.config.is_none());
}

#[test]
fn test_lengthen_alias() {
    let cli = Cli::try_parse_from(["shorturl", "lengthen", "http://t.cn/R1"]).unwrap();
    assert!(matches!(cli.command, Commands::Expand { ref urls, json: false } if urls == &["http://t.cn/R1"]));
}

#[test]
fn test_global_config_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["shorturl", "expand", "http://t.cn/R1", "-c", "my.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some("my.toml"));
}

#[test]
fn test_shorten_requires_url() {
    assert!(Cli::try_parse_from(["shorturl", "shorten"]).is_err());
    assert!(Cli::try_parse_from(["shorturl"]).is_err());
}

#[test]
fn test_config_generate() {
    let cli = Cli::try_parse_from(["shorturl", "config", "generate", "out.toml", "--force"]).unwrap();
    match cli.command {
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => {
            assert_eq!(output_path.as_deref(), Some("out.toml"));
            assert!(force);
        }
        other => panic!("unexpected command: {:?}", other),
    }

    let cli = Cli::try_parse_from(["shorturl", "config", "show"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigCommands::Show
        }
    ));
}
