use homeautoswitch::{format_celsius, on_off, SwitchState};
use indexmap::IndexMap;

pub fn switched(ain: &str, on: bool) -> String {
    format!("{} is now {}\n", ain, on_off(on))
}

pub fn state(state: &SwitchState) -> String {
    state
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{:<10} : {}\n", key, value))
        .collect()
}

pub fn switch_list(switches: &IndexMap<String, String>) -> String {
    switches
        .iter()
        .map(|(ain, name)| format!("{} : {}\n", ain, name))
        .collect()
}

pub fn temperature(celsius: Option<f32>) -> String {
    match celsius {
        Some(celsius) => format!("{}\n", format_celsius(celsius)),
        None => "unknown\n".to_string(),
    }
}

/// Outlets without a temperature reading are left out.
pub fn temperatures(temperatures: &IndexMap<String, Option<f32>>) -> String {
    temperatures
        .iter()
        .filter_map(|(ain, celsius)| {
            celsius.map(|celsius| format!("{} : {}\n", ain, format_celsius(celsius)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switched_message() {
        assert_eq!(switched("AIN1", true), "AIN1 is now on\n");
        assert_eq!(switched("AIN1", false), "AIN1 is now off\n");
    }

    #[test]
    fn state_lines() {
        let switch = SwitchState {
            present: Some(true),
            name: "Lamp".to_string(),
            on: Some(false),
            milliwatts: Some(1234),
            energy_in_watt_h: None,
            celsius: None,
        };
        assert_eq!(
            state(&switch),
            "name       : Lamp\npower      : 1.23 W\npresent    : true\nstate      : off\n"
        );
    }

    #[test]
    fn list_lines() {
        let mut switches = IndexMap::new();
        switches.insert("AIN2".to_string(), "Fan".to_string());
        switches.insert("AIN1".to_string(), "Lamp".to_string());
        assert_eq!(switch_list(&switches), "AIN2 : Fan\nAIN1 : Lamp\n");
    }

    #[test]
    fn temperature_lines() {
        let mut readings = IndexMap::new();
        readings.insert("AIN1".to_string(), Some(21.5));
        readings.insert("AIN2".to_string(), None);
        assert_eq!(temperatures(&readings), "AIN1 : 21.5 °C\n");
        assert_eq!(temperature(None), "unknown\n");
    }
}
