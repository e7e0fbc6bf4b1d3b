use aws_ip_lookup::aws::{fetch_aws_ip_ranges, read_ip_ranges_file};
use aws_ip_lookup::cli::{Args, OutputFormat};
use aws_ip_lookup::output::{default_csv_file_name, print_report, results_to_csv, write_csv};
use aws_ip_lookup::{check_ip_ranges_with, test_connection};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::path::Path;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {LOG_CONFIG_FILE}: {e}"))?;
    } else {
        // stdout carries the report, keep logs on stderr
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;
    let args = Args::parse();
    log::info!("#Start main()");

    if args.status {
        println!("{}", serde_json::to_string_pretty(&test_connection())?);
        return Ok(());
    }

    let input = args.lookup_input(|| std::io::read_to_string(std::io::stdin()))?;
    let config = args.lookup_config();

    let response = match &args.ranges_file {
        Some(path) => {
            check_ip_ranges_with(input.as_ref(), &config, || async move {
                read_ip_ranges_file(path)
            })
            .await
        }
        None => {
            check_ip_ranges_with(input.as_ref(), &config, || fetch_aws_ip_ranges(&config)).await
        }
    };

    match args.format {
        OutputFormat::Table => print_report(&response),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Csv => print!("{}", results_to_csv(&response.results)),
    }

    if let Some(csv_out) = &args.csv_out {
        let path = if csv_out.is_empty() {
            default_csv_file_name(chrono::Utc::now().date_naive())
        } else {
            csv_out.clone()
        };
        write_csv(&path, &response.results)?;
    }

    Ok(())
}
