use crate::{
    error::{Error, Result},
    scope::ChannelScope,
};

/// Fully qualified channel address: `<scope>/<namespace>/<path>`.
///
/// The path segment may itself contain `/`; only the first two separators
/// are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelAddress {
    pub scope: ChannelScope,
    pub namespace: String,
    pub path: String,
}

impl ChannelAddress {
    pub fn new(
        scope: ChannelScope,
        namespace: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self> {
        let namespace = namespace.into();
        let path = path.into();
        validate_segment("namespace", &namespace)?;
        validate_segment("path", &path)?;
        Ok(Self {
            scope,
            namespace,
            path,
        })
    }

    /// Parse the canonical `scope/namespace/path` form.
    pub fn parse(id: &str) -> Result<Self> {
        let mut parts = id.splitn(3, '/');
        let scope = parts
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::invalid_address(format!("missing scope in: {id}")))?;
        let namespace = parts
            .next()
            .ok_or_else(|| Error::invalid_address(format!("missing namespace in: {id}")))?;
        let path = parts
            .next()
            .ok_or_else(|| Error::invalid_address(format!("missing path in: {id}")))?;
        Self::new(scope.parse()?, namespace, path)
    }
}

fn validate_segment(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_address(format!("empty {what}")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(Error::invalid_address(format!(
            "{what} contains whitespace: {value}"
        )));
    }
    Ok(())
}

impl std::fmt::Display for ChannelAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.scope, self.namespace, self.path)
    }
}
