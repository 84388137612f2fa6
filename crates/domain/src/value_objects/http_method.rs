//! HTTP method value object for web-request actions

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method used by a web-request action
///
/// Configuration files use the lowercase form (`method: post`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// GET request (default)
    #[default]
    Get,
    /// POST request
    Post,
    /// PUT request
    Put,
    /// PATCH request
    Patch,
    /// DELETE request
    Delete,
    /// HEAD request
    Head,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
            Self::Head => write!(f, "HEAD"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_method_is_get() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }

    #[test]
    fn lowercase_method_deserializes() {
        let method: HttpMethod = serde_yaml::from_str("post").unwrap();
        assert_eq!(method, HttpMethod::Post);
    }

    #[test]
    fn uppercase_method_is_rejected() {
        assert!(serde_yaml::from_str::<HttpMethod>("POST").is_err());
    }

    #[test]
    fn display_uses_wire_form() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
