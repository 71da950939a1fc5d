use indexmap::IndexMap;
use tracing::debug;

use crate::api::{self, Command};
use crate::credentials::{BaseUrl, Credentials};
use crate::error::{FritzError, Result};
use crate::switch::{SwitchMode, SwitchState};
use crate::transport::{HttpTransport, Transport};

const INVALID: &str = "inval";

/// Logs into the fritz box. A successful [`Authenticator::login`] is the only
/// way to get hold of a [`FritzClient`].
pub struct Authenticator<T: Transport = HttpTransport> {
    transport: T,
    credentials: Credentials,
}

impl<T: Transport> Authenticator<T> {
    pub fn new(transport: T, credentials: Credentials) -> Self {
        Authenticator {
            transport,
            credentials,
        }
    }

    pub fn login(self) -> Result<FritzClient<T>> {
        let sid = api::get_sid(&self.transport, &self.credentials)?;
        Ok(FritzClient {
            transport: self.transport,
            base_url: self.credentials.base_url,
            sid,
        })
    }
}

/// Sends switch commands with the session obtained by the [`Authenticator`].
pub struct FritzClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: BaseUrl,
    sid: String,
}

impl<T: Transport> FritzClient<T> {
    pub fn sid(&self) -> &str {
        &self.sid
    }

    /// Sends `cmd` and returns the untouched response body.
    pub fn raw_call(&self, cmd: Command, ain: Option<&str>) -> Result<String> {
        api::request(&self.transport, &self.base_url, cmd, &self.sid, ain)
    }

    pub fn fetch_string(&self, cmd: Command, ain: Option<&str>) -> Result<String> {
        Ok(self.raw_call(cmd, ain)?.trim().to_string())
    }

    pub fn fetch_bool(&self, cmd: Command, ain: Option<&str>) -> Result<Option<bool>> {
        Ok(decode_bool(&self.fetch_string(cmd, ain)?))
    }

    pub fn fetch_int(&self, cmd: Command, ain: Option<&str>) -> Result<Option<i64>> {
        decode_int(cmd, &self.fetch_string(cmd, ain)?)
    }

    // -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-

    pub fn switch_name(&self, ain: &str) -> Result<String> {
        self.fetch_string(Command::GetSwitchName, Some(ain))
    }

    /// All known outlets, ain -> name, in the order the fritz box lists them.
    pub fn list_switches(&self) -> Result<IndexMap<String, String>> {
        let list = self.raw_call(Command::GetSwitchList, None)?;
        let mut switches = IndexMap::new();
        for ain in list
            .lines()
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|ain| !ain.is_empty())
        {
            let name = self.switch_name(ain)?;
            switches.insert(ain.to_string(), name);
        }
        debug!("found {} switches", switches.len());
        Ok(switches)
    }

    pub fn get_state(&self, ain: &str) -> Result<SwitchState> {
        let present = self.fetch_bool(Command::GetSwitchPresent, Some(ain))?;
        let name = self.switch_name(ain)?;
        let mut state = SwitchState {
            present,
            name,
            ..Default::default()
        };
        if present == Some(true) {
            state.on = self.fetch_bool(Command::GetSwitchState, Some(ain))?;
            state.milliwatts = self.fetch_int(Command::GetSwitchPower, Some(ain))?;
            state.energy_in_watt_h = self.fetch_int(Command::GetSwitchEnergy, Some(ain))?;
            state.celsius = self.fetch_celsius(ain)?;
        }
        Ok(state)
    }

    /// Turns the outlet on, off or toggles it. Returns whether it is on afterwards.
    pub fn switch(&self, ain: &str, mode: SwitchMode) -> Result<bool> {
        let cmd = mode.command();
        let value = self.fetch_string(cmd, Some(ain))?;
        decode_bool(&value).ok_or(FritzError::FormatError {
            cmd: cmd.as_str(),
            value,
        })
    }

    /// Temperature in °C, `None` if the outlet is not present or has no sensor.
    pub fn get_temperature(&self, ain: &str) -> Result<Option<f32>> {
        match self.fetch_bool(Command::GetSwitchPresent, Some(ain))? {
            Some(true) => self.fetch_celsius(ain),
            _ => Ok(None),
        }
    }

    pub fn get_temperatures(&self) -> Result<IndexMap<String, Option<f32>>> {
        self.list_switches()?
            .into_keys()
            .map(|ain| {
                let celsius = self.get_temperature(&ain)?;
                Ok((ain, celsius))
            })
            .collect()
    }

    /// The `getdevicelistinfos` xml document as sent by the fritz box.
    pub fn device_list_infos(&self) -> Result<String> {
        self.fetch_string(Command::GetDeviceListInfos, None)
    }

    fn fetch_celsius(&self, ain: &str) -> Result<Option<f32>> {
        // reported in 0.1 °C
        Ok(self
            .fetch_int(Command::GetTemperature, Some(ain))?
            .map(|tenths| tenths as f32 / 10.0))
    }
}

/// `"1"` is true, `"inval"` is unknown, anything else is false.
pub(crate) fn decode_bool(value: &str) -> Option<bool> {
    match value {
        INVALID => None,
        value => Some(value == "1"),
    }
}

pub(crate) fn decode_int(cmd: Command, value: &str) -> Result<Option<i64>> {
    if value == INVALID {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| FritzError::FormatError {
            cmd: cmd.as_str(),
            value: value.to_string(),
        })
}
