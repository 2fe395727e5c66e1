//! Terminal front end for the GROKLORD backend: loads the view, prints it, and
//! optionally submits the form.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use groklord_fullstack::client::{
    ApiClient, DEFAULT_API_URL, Presenter, PresenterState, SubmitAction, render,
};
use tokio::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "groklord-client", about = "Render the GROKLORD dashboard in a terminal")]
struct Args {
    /// Base address of the backend API.
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Name to submit through the form.
    #[arg(long)]
    name: Option<String>,

    /// Message to submit through the form.
    #[arg(long)]
    message: Option<String>,

    /// How long to wait for backend answers before printing, in milliseconds.
    #[arg(long, default_value_t = 5000)]
    wait_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let wait = Duration::from_millis(args.wait_ms);

    let client = ApiClient::new(&args.api_url).context("building API client")?;
    info!(api_url = client.base_url(), "loading dashboard");

    let mut presenter = Presenter::new(Arc::new(client));
    presenter.start();
    if !presenter
        .settle_until(Instant::now() + wait, PresenterState::is_loaded)
        .await
    {
        warn!("backend did not answer every load-time read in time");
    }
    println!("{}", render(presenter.state()));

    if args.name.is_none() && args.message.is_none() {
        return Ok(());
    }

    presenter.edit_name(args.name.unwrap_or_default());
    presenter.edit_message(args.message.unwrap_or_default());
    match presenter.submit() {
        SubmitAction::Dispatched => {
            if !presenter
                .settle_until(Instant::now() + wait, |state| !state.loading())
                .await
            {
                warn!("submission still pending");
            }
        }
        SubmitAction::Busy => warn!("a submission is already in flight"),
        SubmitAction::Incomplete(missing) => {
            let fields: Vec<String> = missing.iter().map(ToString::to_string).collect();
            warn!(fields = %fields.join(", "), "required fields are empty; not submitting");
        }
    }
    println!("{}", render(presenter.state()));

    Ok(())
}

/// Log to stderr so the rendered view on stdout stays clean.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
