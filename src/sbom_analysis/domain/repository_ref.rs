use regex::Regex;
use std::sync::LazyLock;

/// `https://<host>/<owner>/<repo>[/<extra-path>]`
static REPOSITORY_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://[\w-]+(?:\.[\w-]+)+/([^/?#]+)/([^/?#]+)(?:[/?#].*)?$")
        .expect("static regex")
});

/// Owner and repository name of a hosted source repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    owner: String,
    name: String,
}

impl RepositoryRef {
    /// Classifies a free-form repository URL.
    ///
    /// The first two path segments become owner and repository name; anything
    /// after them is ignored. Returns `None` for anything that is not an
    /// `https` URL with at least two path segments.
    pub fn parse(url: &str) -> Option<Self> {
        let captures = REPOSITORY_URL_PATTERN.captures(url.trim())?;
        Some(Self {
            owner: captures[1].to_string(),
            name: captures[2].to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
