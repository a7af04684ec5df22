//! Command-line front end for the SOAP services.
//!
//! Usage:
//!   soapcall calc add 4 5                                   # Public calculator demo
//!   soapcall calc divide 10 2 --json                        # JSON output
//!   soapcall cancel-activity --fa-id 1234567890 \
//!       --endpoint https://ouaf.example.com/ws --reason DUPL # Authenticated OUAF call
//!
//! Credentials for `cancel-activity` come from `--username`/`--password` or,
//! when both are omitted, from `SOAPCALL_USERNAME`/`SOAPCALL_PASSWORD`.
//! Set `RUST_LOG=soapcall_services=debug,soapcall_client=debug` to trace requests.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use soapcall::{
    CalculatorInput, CalculatorOperation, CallOutcome, EnvelopeRequest, Error,
    FieldActivityCancellation, ServiceProfile, SoapCaller, SoapResult, TlsVerify,
    UsernameCredentials,
};

#[derive(Parser)]
#[command(name = "soapcall")]
#[command(about = "Invoke SOAP web services and show the parsed result")]
struct Args {
    /// Print the outcome as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Also print the HTTP status and raw response body
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Call the public calculator demo (add, subtract, multiply, divide)
    Calc {
        /// Operation to perform
        operation: CalculatorOperation,

        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: i64,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: i64,

        /// Override the calculator endpoint
        #[arg(long, env = "SOAPCALL_CALC_ENDPOINT")]
        endpoint: Option<String>,
    },

    /// Cancel a field activity through the OUAF web service
    CancelActivity {
        /// Field activity identifier
        #[arg(long)]
        fa_id: String,

        /// Cancel reason code
        #[arg(long)]
        reason: Option<String>,

        /// Free-text comments
        #[arg(long)]
        comments: Option<String>,

        /// Service endpoint URL
        #[arg(long, env = "SOAPCALL_OUAF_ENDPOINT")]
        endpoint: String,

        /// WS-Security username
        #[arg(long)]
        username: Option<String>,

        /// WS-Security password (sent as plain text; use https)
        #[arg(long)]
        password: Option<String>,

        /// PEM bundle of CA certificates to trust instead of the system store
        #[arg(long, env = "SOAPCALL_CA_BUNDLE")]
        ca_bundle: Option<PathBuf>,

        /// Override the SOAPAction header
        #[arg(long)]
        soap_action: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let prepared = match prepare(args.command) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (caller, request) = prepared;
    let outcome = caller.call(request).await;

    if args.json {
        print_json(&outcome);
    } else {
        print_text(&outcome, args.raw);
    }

    match outcome {
        Ok(CallOutcome {
            result: SoapResult::Success { .. },
            ..
        }) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Turn command-line input into a caller and a request.
fn prepare(command: Command) -> Result<(SoapCaller, EnvelopeRequest), String> {
    match command {
        Command::Calc {
            operation,
            a,
            b,
            endpoint,
        } => {
            let mut profile = ServiceProfile::calculator(operation);
            if let Some(endpoint) = endpoint {
                profile = profile.with_endpoint(endpoint);
            }
            let request = CalculatorInput::new(a, b)
                .into_request(&profile)
                .map_err(|e| e.to_string())?;
            let caller = SoapCaller::for_profile(&profile).map_err(|e| e.to_string())?;
            Ok((caller, request))
        }
        Command::CancelActivity {
            fa_id,
            reason,
            comments,
            endpoint,
            username,
            password,
            ca_bundle,
            soap_action,
        } => {
            let credentials = match (username, password) {
                (Some(username), Some(password)) => {
                    Some(UsernameCredentials::new(username, password))
                }
                (None, None) => UsernameCredentials::from_env(),
                _ => return Err("--username and --password must be given together".to_string()),
            };

            let mut profile = ServiceProfile::field_activity_cancellation(endpoint);
            if let Some(path) = ca_bundle {
                profile = profile.with_tls(TlsVerify::CaBundle(path));
            }
            if let Some(action) = soap_action {
                profile = profile.with_soap_action(action);
            }

            let mut input = FieldActivityCancellation::new(fa_id);
            if let Some(reason) = reason {
                input = input.with_cancel_reason(reason);
            }
            if let Some(comments) = comments {
                input = input.with_comments(comments);
            }

            let request = input
                .into_request(&profile, credentials)
                .map_err(|e| e.to_string())?;
            let caller = SoapCaller::for_profile(&profile).map_err(|e| e.to_string())?;
            Ok((caller, request))
        }
    }
}

fn print_text(outcome: &Result<CallOutcome, Error>, raw: bool) {
    match outcome {
        Ok(outcome) => {
            match &outcome.result {
                SoapResult::Success { value, raw_detail } => {
                    println!("Result: {}", value);
                    if !raw_detail.is_empty() && raw_detail != value {
                        println!("  {}", raw_detail);
                    }
                }
                SoapResult::Failure { reason, detail } => {
                    eprintln!("Error: {}", reason);
                    if !detail.is_empty() {
                        eprintln!("  {}", detail);
                    }
                }
            }
            if raw {
                println!("\nStatus code: {}\n{}", outcome.status, outcome.raw_body);
            }
        }
        Err(e) => {
            eprintln!("Request failed: {}", e);
            if raw {
                if let Some(status) = e.status() {
                    eprintln!("\nStatus code: {}", status);
                }
                if let Some(body) = e.raw_body() {
                    eprintln!("{}", body);
                }
            }
        }
    }
}

fn print_json(outcome: &Result<CallOutcome, Error>) {
    let value = match outcome {
        Ok(outcome) => serde_json::to_value(outcome)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() })),
        Err(e) => serde_json::json!({
            "error": e.to_string(),
            "status": e.status(),
            "raw_body": e.raw_body(),
        }),
    };
    match serde_json::to_string_pretty(&value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: {}", e),
    }
}
