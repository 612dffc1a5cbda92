use clap::{Parser, Subcommand};
use reqwest::Url;
use serde_json::Value;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "arith-cli")]
#[command(about = "Command-line client for the arithmetic service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the welcome message
    Welcome,
    /// Current date on the server
    Date,
    /// a + b
    Add {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// a - b
    Subtract {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// a * b
    Multiply {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// a / b
    Divide {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// n * n
    Square {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
    /// Square root of n
    Sqrt {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
    /// Check whether TEXT is a palindrome
    Palindrome {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Days left until January 1st
    DaysUntilNewYear,
    /// Echo MESSAGE back
    Echo {
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
}

impl Commands {
    fn segments(&self) -> Vec<&str> {
        match self {
            Commands::Welcome => vec![],
            Commands::Date => vec!["current-date"],
            Commands::Add { a, b } => vec!["add", a.as_str(), b.as_str()],
            Commands::Subtract { a, b } => vec!["subtract", a.as_str(), b.as_str()],
            Commands::Multiply { a, b } => vec!["multiply", a.as_str(), b.as_str()],
            Commands::Divide { a, b } => vec!["divide", a.as_str(), b.as_str()],
            Commands::Square { n } => vec!["square", n.as_str()],
            Commands::Sqrt { n } => vec!["sqrt", n.as_str()],
            Commands::Palindrome { text } => vec!["is-palindrome", text.as_str()],
            Commands::DaysUntilNewYear => vec!["days-until-new-year"],
            Commands::Echo { message } => vec!["echo", message.as_str()],
        }
    }
}

/// Append percent-encoded path segments to the base URL.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| format!("'{}' cannot be used as a base URL", base))?;
        path.pop_if_empty().extend(segments);
    }
    if segments.is_empty() {
        url.set_path("/");
    }
    Ok(url)
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = endpoint(&cli.url, &cli.command.segments())?;
    let res = client.get(url).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("{}", rendered);
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}
