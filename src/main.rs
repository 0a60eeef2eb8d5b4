use shiftgen::{commands::Cli, libs::messages::Message, msg_error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "shiftgen=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = Cli::menu() {
        msg_error!(Message::CommandFailed(format!("{:#}", e)));
        std::process::exit(1);
    }
}
