use crate::contact::ContactField;
use crate::presenter::PresenterKind;

pub type FolioResult<T> = Result<T, FolioError>;

#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    #[error("feed transport error: {0}")]
    Transport(String),

    #[error("feed answered with HTTP {0}")]
    Status(u16),

    #[error("feed parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(ContactField),

    #[error("{0} presenter is closing")]
    PresenterClosing(PresenterKind),

    #[error("config error: {0}")]
    Config(String),
}

impl FolioError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(FolioError::transport("offline").to_string().contains("feed transport error:"));
        assert_eq!(FolioError::Status(404).to_string(), "feed answered with HTTP 404");
        assert_eq!(
            FolioError::MissingField(ContactField::Email).to_string(),
            "missing required field: email"
        );
        assert_eq!(
            FolioError::PresenterClosing(PresenterKind::Cinema).to_string(),
            "cinema presenter is closing"
        );
    }

    #[test]
    fn parse_errors_convert() {
        let err: FolioError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, FolioError::Parse(_)));
    }
}
