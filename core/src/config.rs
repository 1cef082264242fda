use serde::{Deserialize, Deserializer};

fn deserialize_basename<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(d)?;
    Ok(Some(normalize_basename(&s)))
}

/// Reduces a basename to `/` or `/segment[/segment...]` without a trailing slash.
pub fn normalize_basename(basename: &str) -> String {
    let trimmed = basename.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Matching options of a [`RouteTable`](crate::route::RouteTable).
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// Prefix every application path lives under. Unset means `/`.
    #[serde(default, deserialize_with = "deserialize_basename")]
    pub basename: Option<String>,

    /// Reject a trailing slash on otherwise matching paths.
    #[serde(default)]
    pub strict: bool,

    /// Compare static segments case-sensitively.
    #[serde(default)]
    pub sensitive: bool,
}

impl RouterConfig {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn with_basename(mut self, basename: &str) -> Self {
        self.basename = Some(normalize_basename(basename));
        self
    }

    pub fn basename(&self) -> &str {
        self.basename.as_deref().unwrap_or("/")
    }

    /// Returns the application-relative part of `path`, or `None` if `path`
    /// lies outside the basename. Under `strict` the basename root takes no
    /// trailing slash.
    pub fn strip_basename<'a>(&self, path: &'a str) -> Option<&'a str> {
        let basename = self.basename();
        if basename == "/" {
            return Some(path);
        }
        let rest = path.strip_prefix(basename)?;
        if rest.is_empty() {
            Some("/")
        } else if self.strict && rest == "/" {
            None
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}
