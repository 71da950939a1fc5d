use crate::api::Command;
use crate::error::FritzError;

/// How [`crate::FritzClient::switch`] changes an outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchMode {
    On,
    Off,
    Toggle,
}

impl SwitchMode {
    pub(crate) fn command(self) -> Command {
        match self {
            SwitchMode::On => Command::SetSwitchOn,
            SwitchMode::Off => Command::SetSwitchOff,
            SwitchMode::Toggle => Command::SetSwitchToggle,
        }
    }
}

impl std::fmt::Display for SwitchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwitchMode::On => write!(f, "on"),
            SwitchMode::Off => write!(f, "off"),
            SwitchMode::Toggle => write!(f, "toggle"),
        }
    }
}

impl std::str::FromStr for SwitchMode {
    type Err = FritzError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "on" | "1" => Ok(SwitchMode::On),
            "off" | "0" => Ok(SwitchMode::Off),
            "toggle" => Ok(SwitchMode::Toggle),
            _ => Err(FritzError::ParserError(format!(
                "Cannot convert {:?} to SwitchMode",
                input
            ))),
        }
    }
}

/// Snapshot of one outlet as reported by the `getswitch*` commands. Everything
/// except `present` and `name` stays `None` unless the outlet is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchState {
    pub present: Option<bool>,
    pub name: String,
    pub on: Option<bool>,
    pub milliwatts: Option<i64>,
    pub energy_in_watt_h: Option<i64>,
    pub celsius: Option<f32>,
}

impl SwitchState {
    pub fn power(&self) -> Option<String> {
        self.milliwatts
            .map(|mw| format!("{:.2} W", mw as f64 / 1000.0))
    }

    pub fn energy(&self) -> Option<String> {
        self.energy_in_watt_h.map(|wh| format!("{} Wh", wh))
    }

    pub fn temperature(&self) -> Option<String> {
        self.celsius.map(format_celsius)
    }

    /// Printable key/value pairs sorted by key. Fields without a value are left out.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![("name", self.name.clone())];
        let optional = [
            ("present", self.present.map(|present| present.to_string())),
            ("state", self.on.map(on_off)),
            ("power", self.power()),
            ("energy", self.energy()),
            ("temperature", self.temperature()),
        ];
        entries.extend(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.map(|value| (key, value))),
        );
        entries.sort_by_key(|(key, _)| *key);
        entries
    }
}

pub fn on_off(on: bool) -> String {
    if on { "on" } else { "off" }.to_string()
}

pub fn format_celsius(celsius: f32) -> String {
    format!("{:.1} °C", celsius)
}
