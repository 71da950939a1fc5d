use clap::{ArgGroup, Parser};
use homeautoswitch::SwitchMode;

#[derive(Debug, Parser)]
#[command(version, about = "Switch Fritz!DECT outlets via the fritz box home automation API")]
#[command(group(ArgGroup::new("mode").args(["off", "on", "toggle"])))]
pub struct Args {
    /// User name
    #[arg(short, long, default_value = "admin", env = "FRITZ_USER")]
    pub user: String,

    /// Password
    #[arg(short, long, env = "FRITZ_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Fritz box host or base url
    #[arg(short = 'H', long, default_value = "fritz.box", env = "FRITZ_HOST")]
    pub host: String,

    /// Accept the self-signed certificate of the fritz box on https urls
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// List available AINs
    #[arg(short, long)]
    pub list: bool,

    /// AIN of the outlet to switch or query
    #[arg(short, long, value_name = "AIN")]
    pub ain: Option<String>,

    /// Turn AIN off
    #[arg(short = '0', long)]
    pub off: bool,

    /// Turn AIN on
    #[arg(short = '1', long)]
    pub on: bool,

    /// Toggle AIN
    #[arg(short, long)]
    pub toggle: bool,

    /// Get state of AIN
    #[arg(short, long)]
    pub state: bool,

    /// Print the state of all devices as XML
    #[arg(short = 'X', long)]
    pub xml: bool,

    /// Temperature of AIN, or of every outlet when no AIN is given
    #[arg(short = 'T', long)]
    pub temperature: bool,

    /// Log requests and login steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a single run does after logging in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Switch { ain: String, mode: SwitchMode },
    State { ain: String },
    Xml,
    List,
    Temperature { ain: Option<String> },
}

impl Args {
    pub fn mode(&self) -> Option<SwitchMode> {
        if self.on {
            Some(SwitchMode::On)
        } else if self.off {
            Some(SwitchMode::Off)
        } else if self.toggle {
            Some(SwitchMode::Toggle)
        } else {
            None
        }
    }

    pub fn action(&self) -> Option<Action> {
        let ain = self.ain.clone().filter(|ain| !ain.trim().is_empty());
        match (ain, self.mode()) {
            (Some(ain), Some(mode)) => Some(Action::Switch { ain, mode }),
            (Some(ain), None) if self.state => Some(Action::State { ain }),
            (_, _) if self.xml => Some(Action::Xml),
            (_, _) if self.list => Some(Action::List),
            (ain, _) if self.temperature => Some(Action::Temperature { ain }),
            _ => None,
        }
    }
}
