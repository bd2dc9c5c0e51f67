//! vapi-call - place invoice-collection calls from the terminal
//!
//! `call` places a bare call with the assistant's own prompt; `collect`
//! injects the full collections variable set, mirroring the HTTP service.

mod config;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use tracing_subscriber::EnvFilter;

use vapi_collect::{normalize_phone, CallRequest, CallSettings, CollectionCaller, CollectionPolicy};
use vapi_collect_gateway::{VapiConfig, VapiGateway, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

use config::{mask_secret, Config};

#[derive(Parser)]
#[command(name = "vapi-call")]
#[command(about = "Place outbound invoice-collection calls through Vapi", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place a call using the assistant as configured on Vapi
    Call {
        /// Destination phone in E.164 format (e.g., +14155550123)
        phone_number: String,
        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Place a collections call with invoice and policy variables
    Collect {
        /// Destination phone in E.164 format (e.g., +14155550123)
        phone_number: String,
        #[command(flatten)]
        credentials: CredentialArgs,
        #[command(flatten)]
        invoice: InvoiceArgs,
        #[command(flatten)]
        policy: PolicyArgs,
        /// Print the full Vapi response
        #[arg(long)]
        full_response: bool,
    },

    /// Show the status of a call
    Status {
        /// Vapi call ID
        call_id: String,
        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Store an API key in the config file
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show resolved configuration
    Config,
}

#[derive(Args, Debug, Clone, Default)]
struct CredentialArgs {
    /// Vapi assistant ID
    #[arg(long, env = "VAPI_ASSISTANT_ID")]
    assistant_id: Option<String>,
    /// Vapi API key (server secret, not the public web key)
    #[arg(long, env = "VAPI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Vapi phone number ID to call from
    #[arg(long, env = "VAPI_PHONE_NUMBER_ID")]
    phone_number_id: Option<String>,
    /// Vapi call endpoint
    #[arg(long, env = "VAPI_API_URL")]
    api_url: Option<String>,
    /// Seconds to wait for the Vapi API before giving up
    #[arg(long, env = "VAPI_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

#[derive(Args, Debug, Clone)]
struct InvoiceArgs {
    #[arg(long, default_value = "TechFlow Solutions")]
    company_name: String,
    #[arg(long, default_value = "Acme Corp")]
    vendor_name: String,
    #[arg(long, default_value = "ap@vendor.com")]
    vendor_email: String,
    /// Your vendor identifier, sent as call metadata
    #[arg(long)]
    vendor_id: Option<String>,
    #[arg(long, default_value = "INV-2024-001")]
    invoice_no: String,
    /// Your invoice identifier, sent as call metadata
    #[arg(long)]
    invoice_id: Option<String>,
    #[arg(long, default_value_t = 75_000, allow_negative_numbers = true)]
    invoice_amount_cents: i64,
    /// Invoice due date (ISO)
    #[arg(long, default_value = "2024-01-10")]
    invoice_due_date: String,
}

#[derive(Args, Debug, Clone)]
struct PolicyArgs {
    #[arg(long, default_value = "America/New_York")]
    timezone: String,
    #[arg(long, default_value = "09:00")]
    contact_window_start: String,
    #[arg(long, default_value = "17:00")]
    contact_window_end: String,
    #[arg(long, default_value_t = 3)]
    max_attempts_per_week: u32,
    /// Comma separated tool list
    #[arg(long, default_value = "payments, email")]
    allowed_tools: String,
    #[arg(long, default_value = "collections@company.com")]
    agent_mail_from: String,
}

impl InvoiceArgs {
    fn into_request(self, phone_number: &str) -> CallRequest {
        CallRequest::new(normalize_phone(phone_number))
            .with_vendor(self.vendor_name, self.vendor_email)
            .with_invoice(self.invoice_no, self.invoice_amount_cents, self.invoice_due_date)
            .with_company_name(self.company_name)
            .with_ids(self.vendor_id, self.invoice_id)
    }
}

impl From<PolicyArgs> for CollectionPolicy {
    fn from(args: PolicyArgs) -> Self {
        Self {
            contact_window_start: args.contact_window_start,
            contact_window_end: args.contact_window_end,
            timezone: args.timezone,
            max_attempts_per_week: args.max_attempts_per_week,
            allowed_tools: CollectionPolicy::parse_tools(&args.allowed_tools),
            agent_mail_from: args.agent_mail_from,
        }
    }
}

/// Credentials after flag → environment → config file resolution
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolved {
    api_key: String,
    assistant_id: Option<String>,
    phone_number_id: Option<String>,
    api_url: String,
    timeout: Duration,
}

impl Resolved {
    fn assistant_id(&self) -> Result<&str> {
        match self.assistant_id.as_deref() {
            Some(id) => Ok(id),
            None => bail!("Missing assistant ID. Provide --assistant-id or set VAPI_ASSISTANT_ID."),
        }
    }
}

fn resolve_credentials(args: &CredentialArgs, config: &Config) -> Result<Resolved> {
    let pick = |flag: &Option<String>, stored: &Option<String>| layered(flag.clone(), stored);

    let Some(api_key) = pick(&args.api_key, &config.api_key) else {
        bail!("Missing API key. Provide --api-key or set VAPI_API_KEY.");
    };

    Ok(Resolved {
        api_key,
        assistant_id: pick(&args.assistant_id, &config.assistant_id),
        phone_number_id: pick(&args.phone_number_id, &config.phone_number_id),
        api_url: pick(&args.api_url, &config.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        timeout: Duration::from_secs(args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
    })
}

fn build_caller(resolved: &Resolved) -> Result<CollectionCaller<VapiGateway>> {
    let vapi = VapiConfig::new(&resolved.api_key)
        .with_api_url(&resolved.api_url)
        .with_timeout(resolved.timeout);
    let gateway = VapiGateway::new(vapi).context("Failed to build Vapi client")?;

    let settings = CallSettings::new(resolved.assistant_id.clone().unwrap_or_default())
        .with_phone_number_id(resolved.phone_number_id.clone());

    Ok(CollectionCaller::new(Arc::new(gateway), settings))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Call {
            phone_number,
            credentials,
        } => cmd_call(phone_number, credentials).await,
        Commands::Collect {
            phone_number,
            credentials,
            invoice,
            policy,
            full_response,
        } => cmd_collect(phone_number, credentials, invoice, policy, full_response).await,
        Commands::Status {
            call_id,
            credentials,
        } => cmd_status(call_id, credentials).await,
        Commands::Login { key } => cmd_login(key),
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_call(phone_number: String, credentials: CredentialArgs) -> Result<()> {
    let resolved = resolve_credentials(&credentials, &Config::load()?)?;
    let assistant_id = resolved.assistant_id()?.to_string();
    let caller = build_caller(&resolved)?;

    let phone_number = normalize_phone(&phone_number);
    println!(
        "Placing call to {} using assistant {}...",
        phone_number.cyan(),
        assistant_id
    );

    let result = caller
        .place_plain_call(&phone_number)
        .await
        .context("Error making call")?;

    println!(
        "{} Call initiated. ID: {}",
        "✓".green(),
        result.call_id.as_deref().unwrap_or("-").bold()
    );
    println!("Status: {}", result.status.as_deref().unwrap_or("-"));
    println!(
        "{}",
        "Call requested. Monitor your Vapi dashboard or webhooks for live updates.".dimmed()
    );

    Ok(())
}

async fn cmd_collect(
    phone_number: String,
    credentials: CredentialArgs,
    invoice: InvoiceArgs,
    policy: PolicyArgs,
    full_response: bool,
) -> Result<()> {
    let resolved = resolve_credentials(&credentials, &Config::load()?)?;
    let assistant_id = resolved.assistant_id()?.to_string();
    let caller = build_caller(&resolved)?;

    let request = invoice.into_request(&phone_number);
    let policy = CollectionPolicy::from(policy);

    println!(
        "Placing call to {} using assistant {}...",
        request.phone_number.cyan(),
        assistant_id
    );

    let call = caller
        .initiate(request, &policy)
        .await
        .context("Failed to create call")?;

    let variable_count = serde_json::to_value(&call.variables)
        .ok()
        .and_then(|v| v.as_object().map(|m| m.len()))
        .unwrap_or_default();
    println!(
        "Using {} variable overrides (amount {}, minimum {})",
        variable_count,
        call.amount(),
        call.variables.min_payment_amount
    );

    println!(
        "{} Call created. ID: {}  Status: {}",
        "✓".green(),
        call.result.call_id.as_deref().unwrap_or("-").bold(),
        call.result.status.as_deref().unwrap_or("-")
    );

    if full_response {
        println!("{}", "Full response:".bold());
        println!("{}", serde_json::to_string_pretty(&call.result.raw)?);
    }

    Ok(())
}

async fn cmd_status(call_id: String, credentials: CredentialArgs) -> Result<()> {
    let resolved = resolve_credentials(&credentials, &Config::load()?)?;
    let caller = build_caller(&resolved)?;

    let report = caller
        .status(&call_id)
        .await
        .context("Failed to fetch call status")?;

    println!("{} {}", "Call".bold(), report.call_id.cyan());
    println!("  Status:   {}", report.status.as_deref().unwrap_or("-"));
    println!("  Started:  {}", display_value(&report.started_at));
    println!("  Ended:    {}", display_value(&report.ended_at));
    println!("  Duration: {}", display_value(&report.duration));

    match &report.transcript {
        serde_json::Value::String(text) if !text.is_empty() => {
            println!("\n{}", "Transcript:".bold());
            println!("{}", text);
        }
        serde_json::Value::Array(entries) if !entries.is_empty() => {
            println!("\n{}", "Transcript:".bold());
            println!("{}", serde_json::to_string_pretty(entries)?);
        }
        _ => {}
    }

    Ok(())
}

fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("Vapi API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    config.api_key = Some(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    if config.assistant_id.is_none() {
        println!(
            "\n{}",
            "Tip: set VAPI_ASSISTANT_ID or pass --assistant-id when placing calls.".yellow()
        );
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;
    let from_env = |key: &str| std::env::var(key).ok();
    let resolved_key = layered(from_env("VAPI_API_KEY"), &config.api_key);

    println!("{}", "Configuration:".bold());
    println!("  Config file:     {:?}", Config::config_path()?);
    println!(
        "  API key:         {}",
        resolved_key
            .as_deref()
            .map(mask_secret)
            .unwrap_or_else(|| "(not set)".red().to_string())
    );
    println!(
        "  Assistant ID:    {}",
        layered(from_env("VAPI_ASSISTANT_ID"), &config.assistant_id)
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!(
        "  Phone number ID: {}",
        layered(from_env("VAPI_PHONE_NUMBER_ID"), &config.phone_number_id)
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!(
        "  API URL:         {}",
        layered(from_env("VAPI_API_URL"), &config.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    );
    println!(
        "  Timeout:         {}s",
        from_env("VAPI_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    );

    Ok(())
}

/// First non-blank of an override (flag or environment) and the stored value
fn layered(over: Option<String>, stored: &Option<String>) -> Option<String> {
    let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    non_blank(over).or_else(|| non_blank(stored.clone()))
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(api_key: Option<&str>, assistant_id: Option<&str>) -> CredentialArgs {
        CredentialArgs {
            api_key: api_key.map(str::to_string),
            assistant_id: assistant_id.map(str::to_string),
            ..CredentialArgs::default()
        }
    }

    #[test]
    fn test_flags_win_over_config() {
        let config = Config {
            api_key: Some("stored-key".to_string()),
            assistant_id: Some("stored-asst".to_string()),
            ..Config::default()
        };
        let resolved = resolve_credentials(&args(Some("flag-key"), None), &config).unwrap();

        assert_eq!(resolved.api_key, "flag-key");
        assert_eq!(resolved.assistant_id.as_deref(), Some("stored-asst"));
        assert_eq!(resolved.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_timeout_defaults_and_overrides() {
        let config = Config::default();
        let resolved = resolve_credentials(&args(Some("key"), None), &config).unwrap();
        assert_eq!(resolved.timeout, Duration::from_secs(30));

        let with_timeout = CredentialArgs {
            timeout_secs: Some(5),
            ..args(Some("key"), None)
        };
        let resolved = resolve_credentials(&with_timeout, &config).unwrap();
        assert_eq!(resolved.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_timeout_flag_is_parsed() {
        let cli = Cli::try_parse_from(["vapi-call", "call", "+15550001111", "--timeout-secs", "9"])
            .unwrap();
        let Commands::Call { credentials, .. } = cli.command else {
            panic!("expected call subcommand");
        };
        assert_eq!(credentials.timeout_secs, Some(9));
    }

    #[test]
    fn test_blank_override_falls_back_to_stored() {
        let stored = Some("stored-key".to_string());
        assert_eq!(layered(Some("".to_string()), &stored).as_deref(), Some("stored-key"));
        assert_eq!(layered(Some("  ".to_string()), &stored).as_deref(), Some("stored-key"));
        assert_eq!(layered(Some("env-key".to_string()), &stored).as_deref(), Some("env-key"));
        assert_eq!(layered(None, &Some(" ".to_string())), None);
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = resolve_credentials(&args(None, Some("asst")), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Missing API key"));

        let err = resolve_credentials(&args(Some("  "), None), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Missing API key"));
    }

    #[test]
    fn test_missing_assistant_is_an_error() {
        let resolved = resolve_credentials(&args(Some("key"), None), &Config::default()).unwrap();
        let err = resolved.assistant_id().unwrap_err();
        assert!(err.to_string().contains("Missing assistant ID"));
    }

    #[test]
    fn test_collect_defaults() {
        let cli = Cli::try_parse_from(["vapi-call", "collect", "17657469771"]).unwrap();
        let Commands::Collect {
            phone_number,
            invoice,
            policy,
            full_response,
            ..
        } = cli.command
        else {
            panic!("expected collect");
        };

        let request = invoice.into_request(&phone_number);
        assert_eq!(request.phone_number, "+17657469771");
        assert_eq!(request.vendor_name, "Acme Corp");
        assert_eq!(request.invoice_no, "INV-2024-001");
        assert_eq!(request.invoice_amount_cents, 75_000);
        assert_eq!(CollectionPolicy::from(policy), CollectionPolicy::default());
        assert!(!full_response);
    }

    #[test]
    fn test_collect_overrides() {
        let cli = Cli::try_parse_from([
            "vapi-call",
            "collect",
            "+14155550123",
            "--invoice-amount-cents",
            "125000",
            "--vendor-id",
            "vendor_9",
            "--allowed-tools",
            "email",
            "--max-attempts-per-week",
            "5",
        ])
        .unwrap();
        let Commands::Collect {
            phone_number,
            invoice,
            policy,
            ..
        } = cli.command
        else {
            panic!("expected collect");
        };

        let request = invoice.into_request(&phone_number);
        assert_eq!(request.invoice_amount_cents, 125_000);
        assert_eq!(request.vendor_id.as_deref(), Some("vendor_9"));

        let policy = CollectionPolicy::from(policy);
        assert_eq!(policy.allowed_tools, vec!["email".to_string()]);
        assert_eq!(policy.max_attempts_per_week, 5);
    }

    #[test]
    fn test_phone_number_is_required() {
        assert!(Cli::try_parse_from(["vapi-call", "call"]).is_err());
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&serde_json::Value::Null), "-");
        assert_eq!(display_value(&serde_json::json!("2024-01-10")), "2024-01-10");
        assert_eq!(display_value(&serde_json::json!(42)), "42");
    }
}
