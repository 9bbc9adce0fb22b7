use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use common::ClientConfig;
use registration::{BannerKind, RegistrationContext, RegistrationForm, RegistrationView};

/// Operator console for the Music Portal registration API
#[derive(Parser)]
#[command(name = "music-console", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request a verification code and wait out the resend cooldown
    SendCode {
        #[arg(long)]
        email: String,
    },
    /// Submit a registration
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        code: String,
        #[arg(long, default_value = "user")]
        role: String,
    },
}

fn show(view: &RegistrationView) {
    match view.banner.kind {
        BannerKind::Success => info!("{}", view.banner.text),
        BannerKind::Error => error!("{}", view.banner.text),
    }
    if let Some(field_message) = &view.field_message {
        error!("{}: {}", field_message.field, field_message.text);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    info!("Using API at {}", config.api_url);

    let context = RegistrationContext::from_config(&config)?;

    match cli.command {
        Command::SendCode { email } => {
            let outcome = context.send_code(&email).await;
            show(&RegistrationView::from_send_outcome(&outcome));

            if outcome.is_ok() {
                info!("{}", context.send_button().await.label);
                context
                    .spawn_countdown(|button| info!("{}", button.label))
                    .await?;
            }
        }
        Command::Register {
            username,
            password,
            name,
            email,
            code,
            role,
        } => {
            let form = RegistrationForm {
                username,
                password,
                name,
                email,
                code,
                role,
            };
            let outcome = context.register(&form).await;
            show(&RegistrationView::from_outcome(&outcome));
        }
    }

    Ok(())
}
