use std::fmt;

use crate::route::{Params, PRODUCT_ID_PARAM};

/// Opaque product identifier taken verbatim from the location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_params(params: &Params) -> Option<Self> {
        params.get(PRODUCT_ID_PARAM).map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_params(&self) -> Params {
        [(PRODUCT_ID_PARAM, self.0.as_str())].into_iter().collect()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_id_param_without_coercion() {
        let params: Params = [("id", "007")].into_iter().collect();
        let id = ProductId::from_params(&params).unwrap();
        assert_eq!(id.as_str(), "007");
        assert_eq!(id.to_params(), params);
        assert_eq!(ProductId::from_params(&Params::new()), None);
    }
}
