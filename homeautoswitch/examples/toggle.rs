//! Toggles every outlet the fritz box knows about and prints the new state.

use homeautoswitch::{Authenticator, BaseUrl, Credentials, HttpTransport, SwitchMode};

fn main() -> homeautoswitch::Result<()> {
    let user = std::env::var("FRITZ_USER").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("FRITZ_PASSWORD").unwrap_or_default();
    let credentials = Credentials::new(user, password, BaseUrl::new("fritz.box")?);
    let client = Authenticator::new(HttpTransport::new(false)?, credentials).login()?;

    for (ain, name) in client.list_switches()? {
        let on = client.switch(&ain, SwitchMode::Toggle)?;
        println!("{} ({}) is now {}", name, ain, homeautoswitch::on_off(on));
    }
    Ok(())
}
