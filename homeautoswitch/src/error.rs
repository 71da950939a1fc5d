#[derive(thiserror::Error, Debug)]
pub enum FritzError {
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request forbidden. Are you logged in, is the sid correct and recent?")]
    Forbidden,

    #[error("access denied - sid is still the default after login attempt")]
    AccessDenied,

    #[error("invalid base url: `{0}`")]
    InvalidBaseUrl(String),

    #[error("cannot parse xml: `{0}`")]
    XMLParseError(#[from] serde_xml_rs::Error),

    #[error("parser error: `{0}`")]
    ParserError(String),

    #[error("unexpected answer to `{cmd}`: `{value}`")]
    FormatError { cmd: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, FritzError>;
