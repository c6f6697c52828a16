use loggy::{Color, ConsoleLogger, LoggyConfig, LoggyError, Rgb};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    /// Helper to create a temp config file with the given extension
    fn create_temp_config(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_default_config() {
        let config = LoggyConfig::default();

        assert_eq!(config.main_color, Color::Hex("#0077b6".to_string()));
        assert_eq!(config.separator, "|");
        assert!(config.dump_file);
        assert!(config.log_file.is_none());
        assert!(config.types.is_empty());
    }

    #[test]
    fn test_load_yaml() {
        let yaml = r##"
main_color: "#f72585"
separator: ">"
dump_file: false
log_file: build.log
types:
  notice: "#94d2bd"
  warning: [86, 11, 173]
"##;
        let file = create_temp_config(yaml, ".yaml");

        let config = LoggyConfig::load(file.path()).unwrap();

        assert_eq!(config.main_color, Color::Hex("#f72585".to_string()));
        assert_eq!(config.separator, ">");
        assert!(!config.dump_file);
        assert_eq!(config.log_file, Some(PathBuf::from("build.log")));
        assert_eq!(config.types.len(), 2);

        let logger = ConsoleLogger::from_config(&config).unwrap();
        assert_eq!(logger.color_of("WARNING"), Some(Rgb(86, 11, 173)));
        assert_eq!(logger.color_of("notice"), Some(Rgb(0x94, 0xd2, 0xbd)));
        assert!(!logger.dump_file());
    }

    #[test]
    fn test_load_toml_uses_defaults_for_missing_keys() {
        let toml = r##"
main_color = "94d2bd"
"##;
        let file = create_temp_config(toml, ".toml");

        let config = LoggyConfig::load(file.path()).unwrap();

        assert_eq!(config.main_color, Color::Hex("94d2bd".to_string()));
        assert_eq!(config.separator, "|");
        assert!(config.dump_file);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = LoggyConfig::load("/nonexistent/path/loggy.yaml");
        assert!(matches!(result, Err(LoggyError::Config(_))));
    }

    #[test]
    fn test_load_optional_missing_file_returns_defaults() {
        let config = LoggyConfig::load_optional("/nonexistent/path/loggy.yaml").unwrap();

        assert_eq!(config.separator, "|");
        assert!(config.dump_file);
        assert!(config.types.is_empty());
    }

    #[test]
    fn test_load_rejects_invalid_color() {
        let yaml = r##"
types:
  broken: "#zz0000"
"##;
        let file = create_temp_config(yaml, ".yaml");

        let result = LoggyConfig::load(file.path());
        assert!(matches!(result, Err(LoggyError::InvalidColorFormat(_))));
    }

    #[test]
    fn test_load_unquoted_digit_hex_colors() {
        let yaml = r##"
main_color: 000000
types:
  notice: 112233
"##;
        let file = create_temp_config(yaml, ".yaml");

        let config = LoggyConfig::load(file.path()).unwrap();

        assert_eq!(config.main_color, Color::Hex("000000".to_string()));
        assert_eq!(config.types["notice"], Color::Hex("112233".to_string()));

        let logger = ConsoleLogger::from_config(&config).unwrap();
        assert_eq!(logger.color_of("MAIN"), Some(Rgb(0, 0, 0)));
        assert_eq!(logger.color_of("NOTICE"), Some(Rgb(0x11, 0x22, 0x33)));
    }

    #[test]
    fn test_load_rejects_wrong_sized_triple() {
        let yaml = r##"
types:
  notice: [1, 2]
"##;
        let file = create_temp_config(yaml, ".yaml");

        let result = LoggyConfig::load(file.path());
        assert!(matches!(result, Err(LoggyError::Config(_))));
    }

    #[test]
    fn test_type_names_differing_only_by_case_are_rejected() {
        let mut config = LoggyConfig::default();
        config.types.insert("notice".to_string(), "#111111".into());
        config.types.insert("NOTICE".to_string(), "#222222".into());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("name the same type"));
        assert!(matches!(
            ConsoleLogger::from_config(&config),
            Err(LoggyError::Config(_))
        ));
    }

    #[test]
    fn test_distinct_type_names_apply_in_name_order() {
        let mut config = LoggyConfig::default();
        config.types.insert("notice".to_string(), "#111111".into());
        config.types.insert("main".to_string(), "#222222".into());

        let logger = ConsoleLogger::from_config(&config).unwrap();

        assert_eq!(logger.color_of("NOTICE"), Some(Rgb(0x11, 0x11, 0x11)));
        assert_eq!(logger.color_of("MAIN"), Some(Rgb(0x22, 0x22, 0x22)));
    }
}
