use crate::config::{LookupConfig, AWS_IP_RANGES_URL, FETCH_TIMEOUT_SECS};
use crate::models::AddressInput;
use clap::{Parser, ValueEnum};
use std::error::Error;
use std::time::Duration;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Check whether IP addresses belong to published AWS IP ranges.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Addresses to check. A single argument may hold several addresses separated
    /// by comma, newline, semicolon or space. Reads stdin when omitted.
    pub ips: Vec<String>,

    /// URL of the ip-ranges.json document
    #[clap(long, env = "AWS_IP_RANGES_URL", default_value = AWS_IP_RANGES_URL)]
    pub url: String,

    /// Seconds before the download is given up
    #[clap(long, env = "FETCH_TIMEOUT_SECS", default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Use a local copy of ip-ranges.json instead of downloading it
    #[clap(long, env = "AWS_IP_RANGES_FILE", value_name = "FILE")]
    pub ranges_file: Option<String>,

    /// Output format written to stdout
    #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Also write the results as CSV. Without a value a dated file name is used.
    #[clap(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "")]
    pub csv_out: Option<String>,

    /// Read the addresses as JSON: a string or an array of strings
    #[clap(long)]
    pub json_input: bool,

    /// Print the status payload and exit
    #[clap(long)]
    pub status: bool,
}

impl Args {
    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig {
            source_url: self
                .ranges_file
                .clone()
                .unwrap_or_else(|| self.url.clone()),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Positional addresses as lookup input, `None` when there are none.
    ///
    /// One argument is kept as text so it can carry a delimited list.
    pub fn address_input(&self) -> Option<AddressInput> {
        match self.ips.as_slice() {
            [] => None,
            [single] => Some(AddressInput::Text(single.clone())),
            many => Some(AddressInput::List(many.to_vec())),
        }
    }

    /// Lookup input from the arguments, falling back to `read_stdin`.
    ///
    /// With `--json-input` the text is parsed as JSON; shapes other than a
    /// string or an array give `None`.
    pub fn lookup_input<R>(&self, read_stdin: R) -> Result<Option<AddressInput>, Box<dyn Error>>
    where
        R: FnOnce() -> std::io::Result<String>,
    {
        if self.json_input {
            let text = if self.ips.is_empty() {
                read_stdin()?
            } else {
                // the shell may have split `["a", "b"]` on its spaces
                self.ips.join(" ")
            };
            let value: serde_json::Value = serde_json::from_str(&text)
                .map_err(|e| format!("Error parsing JSON input: {e}"))?;
            return Ok(AddressInput::from_json(&value));
        }

        match self.address_input() {
            Some(input) => Ok(Some(input)),
            None => Ok(Some(AddressInput::Text(read_stdin()?))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_argument_is_text() {
        let args = Args::parse_from(["aws-ip-lookup", "52.95.110.1,8.8.8.8"]);
        assert_eq!(
            args.address_input(),
            Some(AddressInput::Text("52.95.110.1,8.8.8.8".to_string()))
        );
    }

    #[test]
    fn test_many_arguments_are_list() {
        let args = Args::parse_from(["aws-ip-lookup", "52.95.110.1", "8.8.8.8"]);
        assert_eq!(
            args.address_input(),
            Some(AddressInput::List(vec![
                "52.95.110.1".to_string(),
                "8.8.8.8".to_string()
            ]))
        );
    }

    #[test]
    fn test_no_arguments() {
        let args = Args::parse_from(["aws-ip-lookup", "--status"]);
        assert!(args.status);
        assert_eq!(args.address_input(), None);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.csv_out, None);
    }

    #[test]
    fn test_ranges_file_becomes_source() {
        let args = Args::parse_from([
            "aws-ip-lookup",
            "--ranges-file",
            "ip-ranges.json",
            "--timeout-secs",
            "5",
            "--csv-out",
            "--format",
            "json",
            "1.2.3.4",
        ]);
        let config = args.lookup_config();
        assert_eq!(config.source_url, "ip-ranges.json");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(args.csv_out.as_deref(), Some(""));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_lookup_input_reads_stdin_without_arguments() {
        let args = Args::parse_from(["aws-ip-lookup"]);
        let input = args
            .lookup_input(|| Ok("52.95.110.1\n8.8.8.8\n".to_string()))
            .unwrap();
        assert_eq!(
            input,
            Some(AddressInput::Text("52.95.110.1\n8.8.8.8\n".to_string()))
        );
    }

    #[test]
    fn test_lookup_input_json_array() {
        let args = Args::parse_from([
            "aws-ip-lookup",
            "--json-input",
            "[\"52.95.110.1\",",
            "7, \"8.8.8.8\"]",
        ]);
        let input = args
            .lookup_input(|| panic!("stdin must not be read"))
            .unwrap();
        assert_eq!(
            input,
            Some(AddressInput::List(vec![
                "52.95.110.1".to_string(),
                "8.8.8.8".to_string()
            ]))
        );
    }

    #[test]
    fn test_lookup_input_json_from_stdin() {
        let args = Args::parse_from(["aws-ip-lookup", "--json-input"]);
        let text = args.lookup_input(|| Ok("\"1.2.3.4\"".to_string())).unwrap();
        assert_eq!(text, Some(AddressInput::Text("1.2.3.4".to_string())));
        let null = args.lookup_input(|| Ok("null".to_string())).unwrap();
        assert_eq!(null, None);
        assert!(args.lookup_input(|| Ok("[1.2.3.4".to_string())).is_err());
    }
}
