//! Command-line and environment configuration.

use clap::Parser;
use repository_framework::tracing::LogFormat;
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(name = "catalog-service", about = "Read-only product and user catalog API", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "CATALOG_BIND",
        value_name = "ADDR",
        default_value = "127.0.0.1:8080",
        help = "Address the HTTP API listens on"
    )]
    pub bind: SocketAddr,

    #[arg(
        long,
        env = "CATALOG_LOG_FORMAT",
        value_enum,
        ignore_case = true,
        value_name = "FORMAT",
        default_value_t = LogFormat::Compact,
        help = "Log output format"
    )]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn defaults_apply_without_arguments() {
        let args = CliArgs::try_parse_from(["catalog-service"]).unwrap();
        assert_eq!(args.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(args.log_format, LogFormat::Compact);
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "catalog-service",
            "--bind",
            "0.0.0.0:9000",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.bind.port(), 9000);
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_log_format_is_rejected() {
        let result = CliArgs::try_parse_from(["catalog-service", "--log-format", "xml"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn log_format_ignores_case() {
        let args = CliArgs::try_parse_from(["catalog-service", "--log-format", "Pretty"]).unwrap();
        assert_eq!(args.log_format, LogFormat::Pretty);
    }

    #[test]
    fn log_format_advertises_possible_values() {
        let command = CliArgs::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id() == "log_format")
            .unwrap();
        let values: Vec<_> = arg
            .get_possible_values()
            .iter()
            .map(|value| value.get_name().to_string())
            .collect();
        assert_eq!(values, vec!["compact", "pretty", "json"]);
    }
}
