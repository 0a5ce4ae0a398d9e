pub mod config;
pub mod error;
pub mod logging;
pub mod parts_list;
pub mod validation;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use parts_list::*;
pub use validation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_error_handling() {
        let error = MillwrightError::validation("test_field", "test message");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);
    }

    #[test]
    fn test_parser_and_validation_agree_on_part_format() {
        let parser = PartsListParser::new();
        let requests = parser.parse("BEAR-001-02: 4");
        assert!(is_valid_part_number(&requests[0].part_number));
    }
}
