//! Library for switching Fritz!DECT outlets through the \"AVM Home Automation\" API
//! <https://avm.de/fileadmin/user_upload/Global/Service/Schnittstellen/AHA-HTTP-Interface.pdf>.
//!
//! It is used by the `fritzswitch` command line utility.
//!
//! ## Example
//!
//! ```ignore
//! let base_url = homeautoswitch::BaseUrl::new("fritz.box")?;
//! let credentials = homeautoswitch::Credentials::new("admin", password, base_url);
//! let transport = homeautoswitch::HttpTransport::new(false)?;
//!
//! // Get a session id
//! let client = homeautoswitch::Authenticator::new(transport, credentials).login()?;
//!
//! // Turn every outlet on
//! for (ain, name) in client.list_switches()? {
//!     let on = client.switch(&ain, homeautoswitch::SwitchMode::On)?;
//!     println!("{} ({}) is on: {}", name, ain, on);
//! }
//! ```

pub(crate) mod api;
pub(crate) mod client;
pub(crate) mod credentials;
pub mod error;
pub(crate) mod fritz_xml;
pub(crate) mod switch;
pub(crate) mod transport;

#[cfg(test)]
mod testing;

pub use api::Command;
pub use client::{Authenticator, FritzClient};
pub use credentials::{BaseUrl, Credentials};
pub use error::{FritzError, Result};
pub use switch::{format_celsius, on_off, SwitchMode, SwitchState};
pub use transport::{HttpTransport, Transport};
