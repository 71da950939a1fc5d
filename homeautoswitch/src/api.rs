use secrecy::ExposeSecret;
use tracing::{debug, info, warn};

use crate::credentials::{BaseUrl, Credentials};
use crate::error::{FritzError, Result};
use crate::fritz_xml as xml;
use crate::transport::Transport;

const LOGIN_PATH: &str = "login_sid.lua";
const SWITCH_PATH: &str = "webservices/homeautoswitch.lua";

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-

/// Computes the string that we use to authenticate.
/// 1. Concat `challenge`, "-" and `password`
/// 2. Convert that to UTF16le
/// 3. MD5 that byte array
/// 4. concat that as hex with challenge again
pub(crate) fn request_response(password: &str, challenge: &str) -> String {
    let hash_input = format!("{}-{}", challenge, password);
    let bytes: Vec<u8> = hash_input
        .encode_utf16()
        .flat_map(|utf16| utf16.to_le_bytes())
        .collect();
    let digest = md5::compute(bytes);
    format!("{}-{:032x}", challenge, digest)
}

pub(crate) const DEFAULT_SID: &str = "0000000000000000";

/// Requests a session id (sid) from the fritz box using user name and
/// password.
pub(crate) fn get_sid(transport: &impl Transport, credentials: &Credentials) -> Result<String> {
    let url = credentials.base_url.join(LOGIN_PATH);
    let info = xml::parse_session_info(&transport.get(&url, &[])?)?;
    if DEFAULT_SID != info.sid {
        info!("fritz box handed out a session without challenge");
        return Ok(info.sid);
    }

    let challenge = info
        .challenge
        .filter(|challenge| !challenge.trim().is_empty())
        .ok_or_else(|| {
            FritzError::ParserError("login_sid.lua answered without a challenge".to_string())
        })?;
    let response = request_response(credentials.password.expose_secret(), &challenge);
    debug!("answering login challenge for user {}", credentials.user);
    let login = transport.get(
        &url,
        &[
            ("username", credentials.user.as_str()),
            ("response", response.as_str()),
        ],
    )?;
    let info = xml::parse_session_info(&login)?;

    if DEFAULT_SID == info.sid {
        warn!(
            "login as {} rejected (block time: {:?})",
            credentials.user, info.block_time
        );
        return Err(FritzError::AccessDenied);
    }

    info!("logged in as {}", credentials.user);
    Ok(info.sid)
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-

/// The `switchcmd`s understood by `homeautoswitch.lua`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GetSwitchList,
    GetSwitchName,
    GetSwitchPresent,
    GetSwitchState,
    GetSwitchPower,
    GetSwitchEnergy,
    GetTemperature,
    GetDeviceListInfos,
    SetSwitchOn,
    SetSwitchOff,
    SetSwitchToggle,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        use Command::*;
        match self {
            GetSwitchList => "getswitchlist",
            GetSwitchName => "getswitchname",
            GetSwitchPresent => "getswitchpresent",
            GetSwitchState => "getswitchstate",
            GetSwitchPower => "getswitchpower",
            GetSwitchEnergy => "getswitchenergy",
            GetTemperature => "gettemperature",
            GetDeviceListInfos => "getdevicelistinfos",
            SetSwitchOn => "setswitchon",
            SetSwitchOff => "setswitchoff",
            SetSwitchToggle => "setswitchtoggle",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sends one switch command to the fritz box and returns the raw body.
pub(crate) fn request(
    transport: &impl Transport,
    base_url: &BaseUrl,
    cmd: Command,
    sid: &str,
    ain: Option<&str>,
) -> Result<String> {
    let url = base_url.join(SWITCH_PATH);
    let mut query = vec![("switchcmd", cmd.as_str()), ("sid", sid)];
    if let Some(ain) = ain {
        query.push(("ain", ain));
    }
    debug!("[fritz api] {} ain={:?}", cmd, ain);
    transport.get(&url, &query)
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-
