#[macro_use]
extern crate tracing;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use homeautoswitch::{Authenticator, BaseUrl, Credentials, FritzClient, HttpTransport, Transport};
use tracing_subscriber::prelude::*;

mod args;
mod output;

use args::{Action, Args};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        "info,fritzswitch=trace,homeautoswitch=trace,reqwest=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::builder().parse_lossy(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let action = match args.action() {
        Some(action) => action,
        None => {
            Args::command().print_help()?;
            return Ok(());
        }
    };

    let base_url = BaseUrl::new(&args.host).context("invalid --host")?;
    debug!("using fritz box at {}", base_url);
    let credentials = Credentials::new(&args.user, args.password, base_url);
    let transport = HttpTransport::new(args.insecure)?;
    let client = Authenticator::new(transport, credentials)
        .login()
        .with_context(|| format!("cannot log into the fritz box as {}", args.user))?;

    print!("{}", run(&client, action)?);
    Ok(())
}

fn run<T: Transport>(client: &FritzClient<T>, action: Action) -> Result<String> {
    let out = match action {
        Action::Switch { ain, mode } => {
            info!("switching {} {}", ain, mode);
            let on = client.switch(&ain, mode)?;
            output::switched(&ain, on)
        }
        Action::State { ain } => output::state(&client.get_state(&ain)?),
        Action::Xml => format!("{}\n", client.device_list_infos()?),
        Action::List => output::switch_list(&client.list_switches()?),
        Action::Temperature { ain: Some(ain) } => output::temperature(client.get_temperature(&ain)?),
        Action::Temperature { ain: None } => output::temperatures(&client.get_temperatures()?),
    };
    Ok(out)
}
