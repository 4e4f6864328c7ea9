use std::fmt;

/// Package ecosystem, as named by the purl `type` component.
///
/// The set is closed: every registry the analyzer knows about has a variant,
/// and anything else is carried verbatim in `Unknown` so it can still be
/// reported and re-serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Cargo,
    Npm,
    GithubActions,
    Pypi,
    Github,
    Unknown(String),
}

impl Ecosystem {
    /// Maps a purl type to an ecosystem. Matching is case-insensitive.
    pub fn from_purl_type(purl_type: &str) -> Self {
        match purl_type.to_lowercase().as_str() {
            "cargo" => Ecosystem::Cargo,
            "npm" => Ecosystem::Npm,
            "githubactions" => Ecosystem::GithubActions,
            "pypi" => Ecosystem::Pypi,
            "github" => Ecosystem::Github,
            _ => Ecosystem::Unknown(purl_type.to_string()),
        }
    }

    /// The purl type string for this ecosystem
    pub fn as_str(&self) -> &str {
        match self {
            Ecosystem::Cargo => "cargo",
            Ecosystem::Npm => "npm",
            Ecosystem::GithubActions => "githubactions",
            Ecosystem::Pypi => "pypi",
            Ecosystem::Github => "github",
            Ecosystem::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_purl_type_known() {
        assert_eq!(Ecosystem::from_purl_type("cargo"), Ecosystem::Cargo);
        assert_eq!(Ecosystem::from_purl_type("npm"), Ecosystem::Npm);
        assert_eq!(Ecosystem::from_purl_type("pypi"), Ecosystem::Pypi);
        assert_eq!(Ecosystem::from_purl_type("github"), Ecosystem::Github);
        assert_eq!(
            Ecosystem::from_purl_type("githubactions"),
            Ecosystem::GithubActions
        );
    }

    #[test]
    fn test_from_purl_type_case_insensitive() {
        assert_eq!(Ecosystem::from_purl_type("Cargo"), Ecosystem::Cargo);
        assert_eq!(Ecosystem::from_purl_type("PyPI"), Ecosystem::Pypi);
    }

    #[test]
    fn test_unknown_keeps_raw_tag() {
        let ecosystem = Ecosystem::from_purl_type("golang");
        assert_eq!(ecosystem, Ecosystem::Unknown("golang".to_string()));
        assert_eq!(ecosystem.to_string(), "golang");
    }

    #[test]
    fn test_display() {
        assert_eq!(Ecosystem::Cargo.to_string(), "cargo");
        assert_eq!(Ecosystem::GithubActions.to_string(), "githubactions");
    }
}
