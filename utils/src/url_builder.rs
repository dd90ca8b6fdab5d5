use url::{ParseError, Url};

/// Builds request URLs relative to a configurable base, so the same client
/// can target the real platform or a local mock server.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: Url,
    path: String,
    params: Vec<(String, String)>,
}

impl UrlBuilder {
    pub fn new(base: &Url, path: &str) -> Self {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        Self {
            base,
            path: path.trim_start_matches('/').to_string(),
            params: vec![],
        }
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn build(&self) -> Result<Url, ParseError> {
        let mut url = self.base.join(&self.path)?;
        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// Renders `url` with the values of `secrets` query parameters masked.
pub fn redacted(url: &Url, secrets: &[&str]) -> String {
    if !url.query_pairs().any(|(key, _)| secrets.contains(&key.as_ref())) {
        return url.to_string();
    }

    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            if secrets.contains(&key.as_ref()) {
                (key.into_owned(), "***".to_string())
            } else {
                (key.into_owned(), value.into_owned())
            }
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
