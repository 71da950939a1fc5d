use crate::error::Result;
use serde::Deserialize;
use serde_xml_rs::from_reader;

// response of login_sid.lua

#[derive(Debug, Deserialize)]
pub struct SessionInfo {
    #[serde(alias = "SID")]
    pub sid: String,
    #[serde(alias = "Challenge", default)]
    pub challenge: Option<String>,
    #[serde(alias = "BlockTime", default)]
    pub block_time: Option<i32>,
}

/// Leading whitespace is dropped, the xml declaration has to start the document.
pub fn parse_session_info(xml: &str) -> Result<SessionInfo> {
    from_reader(xml.trim_start().as_bytes()).map_err(|err| {
        tracing::debug!("cannot parse session info");
        err.into()
    })
}

#[cfg(test)]
mod tests {
    use crate::FritzError;

    #[test]
    fn parse_session_info() {
        let xml = r##"
<?xml version="1.0" encoding="utf-8"?>
<SessionInfo>
  <SID>0000000000000000</SID>
  <Challenge>63233c3d</Challenge>
  <BlockTime>0</BlockTime>
  <Rights></Rights>
</SessionInfo>
"##;

        let info = super::parse_session_info(xml).unwrap();
        assert_eq!(info.block_time, Some(0));
        assert_eq!(info.challenge.as_deref(), Some("63233c3d"));
        assert_eq!(info.sid, "0000000000000000");
    }

    #[test]
    fn parse_session_info_without_challenge() {
        let xml = "<SessionInfo><SID>9f2c1b6a0e8d4c7f</SID></SessionInfo>";
        let info = super::parse_session_info(xml).unwrap();
        assert_eq!(info.sid, "9f2c1b6a0e8d4c7f");
        assert!(info.challenge.is_none());
    }

    #[test]
    fn parse_session_info_without_sid() {
        let xml = "<SessionInfo><Challenge>63233c3d</Challenge></SessionInfo>";
        let err = super::parse_session_info(xml).unwrap_err();
        assert!(matches!(err, FritzError::XMLParseError(_)));
    }
}
