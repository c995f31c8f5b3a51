use super::*;
use tempfile::tempdir;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn no_subcommand_leaves_command_unset() {
    let args = parse_args(&["eventsync"]);
    assert!(args.command.is_none());
    assert!(args.base_url.is_none());
    assert!(args.theme.is_none());
    assert!(args.debug_log.is_none());
}

#[test]
fn global_flags_parse_before_and_after_subcommand() {
    for argv in [
        &["eventsync", "--base-url", "http://localhost:8000", "--theme", "dark", "chat"][..],
        &["eventsync", "chat", "--base-url", "http://localhost:8000", "--theme", "dark"][..],
    ] {
        let args = parse_args(argv);
        assert_eq!(args.command, Some(Commands::Chat), "argv={argv:?}");
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(args.theme, Some(Appearance::Dark));
    }
}

#[test]
fn unknown_theme_is_rejected() {
    assert!(Args::try_parse_from(["eventsync", "--theme", "sepia"]).is_err());
}

#[test]
fn say_collects_every_word_including_hyphens() {
    let args = parse_args(&["eventsync", "say", "plan", "a", "-themed", "party"]);
    assert_eq!(
        args.command,
        Some(Commands::Say {
            prompt: vec![
                "plan".to_string(),
                "a".to_string(),
                "-themed".to_string(),
                "party".to_string()
            ]
        })
    );
}

#[test]
fn debug_log_takes_a_path() {
    let args = parse_args(&["eventsync", "--debug-log", "/tmp/eventsync.log"]);
    assert_eq!(
        args.debug_log.as_deref(),
        Some(std::path::Path::new("/tmp/eventsync.log"))
    );
}

#[test]
fn set_and_unset_parse() {
    let args = parse_args(&["eventsync", "set", "base-url", "https://events.example.com"]);
    assert_eq!(
        args.command,
        Some(Commands::Set {
            key: "base-url".to_string(),
            value: Some("https://events.example.com".to_string())
        })
    );

    let args = parse_args(&["eventsync", "unset", "base-url"]);
    assert_eq!(
        args.command,
        Some(Commands::Unset {
            key: "base-url".to_string()
        })
    );
}

#[test]
fn set_base_url_validates_and_round_trips_through_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::default();

    set_config_value(&mut config, "base-url", "  https://events.example.com/api ").unwrap();
    assert_eq!(
        config.base_url.as_deref(),
        Some("https://events.example.com/api")
    );
    config.save_to_path(&path).unwrap();
    assert_eq!(Config::load_from_path(&path).unwrap(), config);

    unset_config_value(&mut config, "base-url").unwrap();
    assert_eq!(config.base_url, None);
}

#[test]
fn set_rejects_bad_urls_and_unknown_keys() {
    let mut config = Config::default();
    assert!(set_config_value(&mut config, "base-url", "not a url").is_err());
    assert!(set_config_value(&mut config, "base-url", "ftp://files.example.com").is_err());
    assert!(set_config_value(&mut config, "theme", "dark").is_err());
    assert!(unset_config_value(&mut config, "theme").is_err());
    assert_eq!(config, Config::default());
}
