//! `vakya-cli`: terminal client for the Vākya pitch analysis backend.

mod api;
mod render;
mod store;

use std::io::{self, Read};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use pitch::session::{AuthSession, AuthStatus, GuardDecision, guard};
use pitch::token::DecodeError;
use pitch::{Audience, JOB_ROLES, LoginRequest, RegisterRequest};
use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::store::{FileStore, default_session_path};

const LOGIN_FALLBACK: &str = "Invalid email or password";
const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";
const ANALYZE_FALLBACK: &str = "Our scribes faced an interruption. Please try again.";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Rejected(String),
    #[error("not logged in; run `vakya-cli login` first")]
    NotLoggedIn,
    #[error("server issued an unreadable token: {0}")]
    Token(#[from] DecodeError),
    #[error("failed to read pitch: {0}")]
    Input(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "vakya-cli", about = "Score and refine pitches from the terminal")]
struct Cli {
    #[arg(long, env = "VAKYA_API_URL", default_value = pitch::DEFAULT_API_URL)]
    api_url: String,

    /// File holding the bearer token between invocations.
    #[arg(long, env = "VAKYA_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[arg(long, default_value_t = pitch::REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Print raw JSON responses instead of formatted text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(JOB_ROLES))]
        role: Option<String>,
        #[arg(long, env = "VAKYA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign in and store the issued token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "VAKYA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored token.
    Logout,
    /// Show the identity held in the stored token.
    Whoami,
    /// Fetch the signed-in profile from the backend.
    Me,
    /// Score a pitch. Reads stdin when neither TEXT nor --file is given.
    Analyze {
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        #[arg(long, default_value_t = Audience::default())]
        audience: Audience,
    },
    /// List past analyses.
    History {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one past analysis.
    Show { id: String },
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let store = FileStore::new(cli.session_file.clone().unwrap_or_else(default_session_path));
    let api = ApiClient::new(&cli.api_url, Duration::from_secs(cli.timeout_secs), store)?;
    tracing::debug!(
        session_file = %api.store().path().display(),
        api_url = api.base_url(),
        "cli configured"
    );

    let mut session = AuthSession::new(api.store());
    session.initialize(now_ms());

    match cli.command {
        Command::Register {
            full_name,
            email,
            role,
            password,
        } => {
            let body = RegisterRequest {
                full_name,
                email,
                job_role: role,
                password,
            };
            let profile = api
                .register_user(&body)
                .await
                .map_err(|e| CliError::Rejected(e.detail_or(REGISTER_FALLBACK)))?;
            if cli.json {
                return print_json(&profile);
            }
            println!("Registered {}. Run `vakya-cli login` to sign in.", profile.email);
            Ok(())
        }
        Command::Login { email, password } => {
            let body = LoginRequest { email, password };
            let token = api
                .login_user(&body)
                .await
                .map_err(|e| CliError::Rejected(e.detail_or(LOGIN_FALLBACK)))?;
            let status = session.login(&token.access_token)?;
            if let Some(claims) = status.user() {
                tracing::info!(user = %claims.sub, "logged in");
                println!("Logged in as {}", claims.display_name());
            }
            Ok(())
        }
        Command::Logout => {
            session.logout();
            println!("Logged out.");
            Ok(())
        }
        Command::Whoami => match session.status() {
            AuthStatus::Authenticated(claims) => {
                println!("{}", render::render_claims(claims, now_ms() / 1000));
                Ok(())
            }
            _ => Err(CliError::NotLoggedIn),
        },
        Command::Me => {
            require_login(session.status())?;
            let profile = api.get_me().await?;
            if cli.json {
                return print_json(&profile);
            }
            println!("{} <{}>", profile.full_name, profile.email);
            if let Some(role) = profile.job_role {
                println!("Role: {role}");
            }
            Ok(())
        }
        Command::Analyze { text, file, audience } => {
            require_login(session.status())?;
            let pitch_text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let resp = api.analyze_pitch(&pitch_text, audience).await.map_err(|e| match e {
                ApiError::Draft(draft) => CliError::Rejected(draft.to_string()),
                other => {
                    tracing::warn!(error = %other, "analysis failed");
                    CliError::Rejected(ANALYZE_FALLBACK.to_owned())
                }
            })?;
            if cli.json {
                return print_json(&resp);
            }
            print!("{}", render::render_analysis(&resp.analysis, &resp.original_pitch));
            Ok(())
        }
        Command::History { search } => {
            require_login(session.status())?;
            let entries = api.get_my_analyses().await?;
            let hits = insights::filter_entries(&entries, search.as_deref().unwrap_or_default());
            if cli.json {
                return print_json(&hits);
            }
            let stats = insights::dashboard_stats(&entries);
            print!("{}", render::render_history(&stats, &hits));
            Ok(())
        }
        Command::Show { id } => {
            require_login(session.status())?;
            let entry = api.get_analysis(&id).await?;
            if cli.json {
                return print_json(&entry);
            }
            print!("{}", render::render_entry(&entry));
            Ok(())
        }
    }
}

/// Commands that talk to protected endpoints first check the local session.
fn require_login(status: &AuthStatus) -> Result<(), CliError> {
    match guard(status) {
        GuardDecision::Allow => Ok(()),
        GuardDecision::Wait | GuardDecision::Redirect(_) => Err(CliError::NotLoggedIn),
    }
}
