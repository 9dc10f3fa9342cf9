use anyhow::{bail, Result};
use clap::Parser;
use client_core::{load_settings, HttpSignupTransport, RegistrationController, SubmitError};
use shared::domain::FormField;
use tracing_subscriber::EnvFilter;

/// Register an account against the signup endpoint.
#[derive(Parser, Debug)]
#[command(name = "signup")]
struct Args {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, env = "SIGNUP_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,
    #[arg(
        long,
        env = "SIGNUP_CONFIRM_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    confirm_password: String,
    /// Overrides signup.toml and SIGNUP_ENDPOINT.
    #[arg(long)]
    endpoint: Option<String>,
    /// Print the server's JSON response on success.
    #[arg(long)]
    show_response: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(endpoint) = &args.endpoint {
        settings.override_endpoint(endpoint);
    }
    let transport = HttpSignupTransport::new(settings.endpoint_url()?);
    tracing::info!(endpoint = %transport.endpoint(), "using signup endpoint");

    let mut controller = RegistrationController::new();
    controller.set_field(FormField::Name, args.name);
    controller.set_field(FormField::Email, args.email);
    controller.set_field(FormField::Password, args.password);
    controller.set_field(FormField::ConfirmPassword, args.confirm_password);

    let outcome = controller.submit(&transport).await;
    if let Some(status) = controller.status_message() {
        println!("{status}");
    }

    match outcome {
        Ok(response) => {
            if args.show_response {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            Ok(())
        }
        Err(SubmitError::Validation(err)) => bail!("{}", err.notice()),
        Err(err) => bail!(err),
    }
}
