use crate::{
    config::RouterConfig,
    error::{PatternError, ReverseError},
    route::Params,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route pattern such as `/` or `/product/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| PatternError::NotAbsolute(pattern.to_string()))?;
        if rest.starts_with('/') {
            return Err(PatternError::EmptySegment(pattern.to_string()));
        }
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for raw in rest.split('/') {
                let segment = match raw.strip_prefix(':') {
                    Some("") => return Err(PatternError::EmptyParamName(pattern.to_string())),
                    Some(name) => {
                        if segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(n) if n == name))
                        {
                            return Err(PatternError::DuplicateParam {
                                pattern: pattern.to_string(),
                                name: name.to_string(),
                            });
                        }
                        Segment::Param(name.to_string())
                    }
                    None if raw.is_empty() => {
                        return Err(PatternError::EmptySegment(pattern.to_string()))
                    }
                    None => Segment::Static(raw.to_string()),
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Matches an application-relative path (leading `/`, no query or hash)
    /// and returns the bound parameters, percent-decoded.
    pub fn matches(&self, path: &str, config: &RouterConfig) -> Option<Params> {
        let rest = path.strip_prefix('/')?;
        let trimmed = if config.strict {
            rest
        } else {
            rest.strip_suffix('/').unwrap_or(rest)
        };

        let mut params = Params::new();
        if trimmed.is_empty() {
            // `//` is not the root path.
            return (self.segments.is_empty() && !rest.starts_with('/')).then_some(params);
        }

        let mut parts = trimmed.split('/');
        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Static(text) => {
                    let same = if config.sensitive {
                        part == text
                    } else {
                        part.eq_ignore_ascii_case(text)
                    };
                    if !same {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    let value = urlencoding::decode(part).ok()?;
                    params.insert(name.clone(), value.into_owned());
                }
            }
        }

        parts.next().is_none().then_some(params)
    }

    /// Substitutes `params` into the pattern, percent-encoding each value.
    pub fn render(&self, params: &Params) -> Result<String, ReverseError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| ReverseError::MissingParam(name.clone()))?;
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(pattern: &str) -> PathPattern {
        PathPattern::parse(pattern).unwrap()
    }

    #[test]
    fn parses_root_and_parametrized_patterns() {
        assert!(parse("/").segments().is_empty());
        assert_eq!(
            parse("/product/:id").segments(),
            &[
                Segment::Static("product".to_string()),
                Segment::Param("id".to_string()),
            ]
        );
        assert_eq!(parse("/product/:id/").segments().len(), 2);
        assert_eq!(parse("/product/:id").param_names().collect::<Vec<_>>(), ["id"]);
    }

    #[test]
    fn rejects_malformed_patterns() {
        assert_eq!(
            PathPattern::parse("product"),
            Err(PatternError::NotAbsolute("product".to_string()))
        );
        assert_eq!(
            PathPattern::parse("//"),
            Err(PatternError::EmptySegment("//".to_string()))
        );
        assert_eq!(
            PathPattern::parse("/product//:id"),
            Err(PatternError::EmptySegment("/product//:id".to_string()))
        );
        assert_eq!(
            PathPattern::parse("/product/:"),
            Err(PatternError::EmptyParamName("/product/:".to_string()))
        );
        assert_eq!(
            PathPattern::parse("/:id/:id"),
            Err(PatternError::DuplicateParam {
                pattern: "/:id/:id".to_string(),
                name: "id".to_string(),
            })
        );
    }

    #[test]
    fn root_matches_only_root() {
        let config = RouterConfig::default();
        let root = parse("/");
        assert_eq!(root.matches("/", &config), Some(Params::new()));
        assert_eq!(root.matches("//", &config), None);
        assert_eq!(root.matches("/product", &config), None);
        assert_eq!(root.matches("", &config), None);
    }

    #[test]
    fn trailing_slash_depends_on_strict() {
        let pattern = parse("/product/:id");
        let loose = RouterConfig::default();
        let strict = RouterConfig {
            strict: true,
            ..RouterConfig::default()
        };

        assert!(pattern.matches("/product/42/", &loose).is_some());
        assert!(pattern.matches("/product/42/", &strict).is_none());
        assert!(pattern.matches("/product/42", &strict).is_some());
        assert!(pattern.matches("/product/42//", &loose).is_none());
    }

    #[test]
    fn static_case_depends_on_sensitive() {
        let pattern = parse("/product/:id");
        let sensitive = RouterConfig {
            sensitive: true,
            ..RouterConfig::default()
        };

        let params = pattern
            .matches("/PRODUCT/Abc", &RouterConfig::default())
            .unwrap();
        assert_eq!(params.get("id"), Some("Abc"));
        assert!(pattern.matches("/PRODUCT/Abc", &sensitive).is_none());
    }

    #[test]
    fn renders_params() {
        let pattern = parse("/product/:id");
        let params: Params = [("id", "42")].into_iter().collect();
        assert_eq!(pattern.render(&params).unwrap(), "/product/42");
        assert_eq!(parse("/").render(&Params::new()).unwrap(), "/");

        assert_eq!(
            pattern.render(&Params::new()),
            Err(ReverseError::MissingParam("id".to_string()))
        );
        let empty: Params = [("id", "")].into_iter().collect();
        assert_eq!(
            pattern.render(&empty),
            Err(ReverseError::MissingParam("id".to_string()))
        );
        let nested: Params = [("id", "a/b?c#d")].into_iter().collect();
        assert_eq!(pattern.render(&nested).unwrap(), "/product/a%2Fb%3Fc%23d");
        let spaced: Params = [("id", "a b")].into_iter().collect();
        assert_eq!(pattern.render(&spaced).unwrap(), "/product/a%20b");
    }

    #[test]
    fn decodes_bound_values() {
        let pattern = parse("/product/:id");
        let config = RouterConfig::default();

        let params = pattern.matches("/product/a%20b", &config).unwrap();
        assert_eq!(params.get("id"), Some("a b"));
        let params = pattern.matches("/product/%E8%99%8E", &config).unwrap();
        assert_eq!(params.get("id"), Some("\u{864e}"));
        let params = pattern.matches("/product/a%2Fb", &config).unwrap();
        assert_eq!(params.get("id"), Some("a/b"));

        // not UTF-8 once decoded
        assert_eq!(pattern.matches("/product/%FF", &config), None);
    }
}
