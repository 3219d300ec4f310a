use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unexpected page structure at {url}: {what}")]
    Structure { url: String, what: String },

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("detail unit {index} finished without a result")]
    Incomplete { index: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn structure(url: &str, what: impl Into<String>) -> Self {
        ScrapeError::Structure {
            url: url.to_string(),
            what: what.into(),
        }
    }

    /// Network-level failures, as opposed to pages that loaded but looked wrong.
    #[cfg(test)]
    pub fn is_fetch(&self) -> bool {
        matches!(self, ScrapeError::Fetch { .. } | ScrapeError::Status { .. })
    }

    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::Fetch { .. } => "fetch",
            ScrapeError::Client(_) => "client",
            ScrapeError::Status { .. } => "status",
            ScrapeError::Structure { .. } => "structure",
            ScrapeError::Selector(_) => "selector",
            ScrapeError::Incomplete { .. } => "incomplete",
            ScrapeError::Io(_) => "io",
            ScrapeError::Json(_) => "json",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_the_variant() {
        assert_eq!(ScrapeError::structure("u", "no rows").kind(), "structure");
        assert_eq!(ScrapeError::Selector("p >".into()).kind(), "selector");
        assert_eq!(ScrapeError::Incomplete { index: 2 }.kind(), "incomplete");
        let status = ScrapeError::Status {
            url: "u".into(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(status.kind(), "status");
        assert!(status.is_fetch());
    }
}
