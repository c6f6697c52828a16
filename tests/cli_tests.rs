use loggy::cli::{build_cli, build_logger, parse_color_arg, parse_invocation, run, Invocation};
use loggy::{Color, FormatOptions, Rgb};

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(args: &[&str]) -> Invocation {
        let matches = build_cli()
            .try_get_matches_from(std::iter::once("loggy").chain(args.iter().copied()))
            .expect("arguments should parse");
        parse_invocation(&matches).expect("invocation should build")
    }

    #[test]
    fn test_defaults() {
        let inv = invocation(&["hello"]);

        assert_eq!(inv.message, "hello");
        assert_eq!(inv.log_type, "MAIN");
        assert!(inv.options.prefix);
        assert_eq!(inv.options.format, FormatOptions::default());
        assert!(!inv.no_dump);
        assert!(inv.overrides.is_empty());
        assert!(inv.colorize.is_none());
        assert!(inv.config_path.is_none());
    }

    #[test]
    fn test_flags_and_overrides() {
        let inv = invocation(&[
            "--type",
            "error",
            "--bold",
            "--strike",
            "--no-prefix",
            "--no-dump",
            "--set",
            "notice=#94d2bd",
            "--set",
            "debug=241,250,238",
            "boom",
        ]);

        assert_eq!(inv.log_type, "error");
        assert!(!inv.options.prefix);
        assert!(inv.options.format.bold && inv.options.format.strike);
        assert!(!inv.options.format.italic && !inv.options.format.underline);
        assert!(inv.no_dump);
        assert_eq!(
            inv.overrides,
            vec![
                ("notice".to_string(), Color::Hex("#94d2bd".to_string())),
                ("debug".to_string(), Color::Rgb(Rgb(241, 250, 238))),
            ]
        );
    }

    #[test]
    fn test_missing_message_is_rejected() {
        assert!(build_cli().try_get_matches_from(["loggy", "--bold"]).is_err());
    }

    #[test]
    fn test_malformed_set_is_rejected() {
        let matches = build_cli()
            .try_get_matches_from(["loggy", "--set", "notice", "hi"])
            .unwrap();
        assert!(parse_invocation(&matches).is_err());
    }

    #[test]
    fn test_parse_color_arg() {
        assert_eq!(parse_color_arg("1, 2, 3").unwrap(), Color::Rgb(Rgb(1, 2, 3)));
        assert_eq!(parse_color_arg("#ffffff").unwrap(), Color::Hex("#ffffff".to_string()));
        assert!(parse_color_arg("1,2").is_err());
        assert!(parse_color_arg("1,2,256").is_err());
        assert!(parse_color_arg("#fff").is_err());
    }

    #[test]
    fn test_build_logger_applies_overrides() {
        let inv = invocation(&["--no-dump", "--set", "Notice=10,20,30", "hi"]);

        let logger = build_logger(&inv).unwrap();

        assert!(!logger.dump_file());
        assert_eq!(logger.color_of("NOTICE"), Some(Rgb(10, 20, 30)));
    }

    #[test]
    fn test_run_without_dump() {
        let inv = invocation(&["--no-dump", "--type", "warning", "careful"]);
        assert!(run(&inv).is_ok());
    }

    #[test]
    fn test_run_unknown_type_fails() {
        let inv = invocation(&["--no-dump", "--type", "nope", "hi"]);
        let err = run(&inv).unwrap_err();
        assert!(err.to_string().contains("invalid log type"));
    }

    #[test]
    fn test_run_colorize() {
        let inv = invocation(&["--colorize", "#ee9b00", "--bold", "shiny"]);
        assert!(run(&inv).is_ok());
    }
}
