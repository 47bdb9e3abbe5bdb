//! Minimal CLI parsing for listen address and debug overrides.

use std::env;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `--address <addr>` or `--address=<addr>`
    pub address: Option<String>,
    pub debug: bool,
}

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(env::args().skip(1))
    }

    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--debug" => options.debug = true,
                "--address" => {
                    if let Some(value) = args.next() {
                        options.address = Some(value);
                    }
                }
                _ if arg.starts_with("--address=") => {
                    if let Some(value) = arg.split_once('=').map(|(_, v)| v) {
                        options.address = Some(value.to_string());
                    }
                }
                _ => {}
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> CliOptions {
        CliOptions::parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_flags() {
        assert_eq!(parse(&[]), CliOptions::default());
        assert_eq!(
            parse(&["--address", ":9000", "--debug"]),
            CliOptions {
                address: Some(":9000".to_string()),
                debug: true,
            }
        );
        assert_eq!(parse(&["--address=127.0.0.1:1"]).address.as_deref(), Some("127.0.0.1:1"));
    }

    #[test]
    fn test_ignores_unknown() {
        assert_eq!(parse(&["--verbose", "extra"]), CliOptions::default());
    }
}
