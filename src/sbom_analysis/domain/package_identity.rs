use super::Ecosystem;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `pkg:<type>/<name>[@<version>]`, anything after the version (qualifiers,
/// subpath, non-hex version suffixes) is ignored.
static PURL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^pkg:(\w+)/([%\w/.\-]+)@?([0-9a-fA-F.%]*).*$").expect("static regex")
});

/// Typed identity of a package, parsed from a package URL.
///
/// Immutable once parsed. An empty version is normalized to `None`, meaning
/// "latest/unspecified".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageIdentity {
    ecosystem: Ecosystem,
    name: String,
    version: Option<String>,
}

impl PackageIdentity {
    pub fn new(ecosystem: Ecosystem, name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            ecosystem,
            name: name.into(),
            version: version.filter(|v| !v.is_empty()),
        }
    }

    /// Parses a package URL.
    ///
    /// Name and version are percent-decoded. When the purl carries no version
    /// (or an empty one) and the SBOM record supplied `fallback_version`, that
    /// value is decoded and used instead.
    ///
    /// Returns `None` when the string does not follow the purl grammar; the
    /// caller treats that as "unresolvable" and skips enrichment.
    pub fn from_purl(purl: &str, fallback_version: Option<&str>) -> Option<Self> {
        let captures = PURL_PATTERN.captures(purl)?;

        let ecosystem = Ecosystem::from_purl_type(&captures[1]);
        let name = percent_decode(&captures[2]);
        let mut version = percent_decode(&captures[3]);

        if version.is_empty() {
            if let Some(fallback) = fallback_version {
                version = percent_decode(fallback);
            }
        }

        Some(Self::new(ecosystem, name, Some(version)))
    }

    pub fn ecosystem(&self) -> &Ecosystem {
        &self.ecosystem
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Renders the identity back into a purl that [`PackageIdentity::from_purl`]
/// parses to the same triple.
impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pkg:{}/{}",
            self.ecosystem,
            percent_encode_except(&self.name, |c| {
                c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '/')
            })
        )?;
        if let Some(version) = &self.version {
            write!(
                f,
                "@{}",
                percent_encode_except(version, |c| c.is_ascii_hexdigit() || c == '.')
            )?;
        }
        Ok(())
    }
}

fn percent_decode(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

fn percent_encode_except(value: &str, keep: fn(char) -> bool) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        if keep(c) {
            encoded.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_purl_with_version() {
        let identity = PackageIdentity::from_purl("pkg:cargo/serde@1.0.197", None).unwrap();
        assert_eq!(identity.ecosystem(), &Ecosystem::Cargo);
        assert_eq!(identity.name(), "serde");
        assert_eq!(identity.version(), Some("1.0.197"));
    }

    #[test]
    fn test_from_purl_percent_decodes_name_and_version() {
        let identity = PackageIdentity::from_purl("pkg:cargo/foo%2Dbar@1.0.0", None).unwrap();
        assert_eq!(identity.name(), "foo-bar");
        assert_eq!(identity.version(), Some("1.0.0"));

        let identity = PackageIdentity::from_purl("pkg:cargo/foo@1%2E2", None).unwrap();
        assert_eq!(identity.version(), Some("1.2"));
    }

    #[test]
    fn test_from_purl_scoped_npm_name() {
        let identity =
            PackageIdentity::from_purl("pkg:npm/%40angular/core@16.2.0", None).unwrap();
        assert_eq!(identity.ecosystem(), &Ecosystem::Npm);
        assert_eq!(identity.name(), "@angular/core");
        assert_eq!(identity.version(), Some("16.2.0"));
    }

    #[test]
    fn test_from_purl_without_version() {
        let identity = PackageIdentity::from_purl("pkg:cargo/tokio", None).unwrap();
        assert_eq!(identity.name(), "tokio");
        assert_eq!(identity.version(), None);
    }

    #[test]
    fn test_from_purl_falls_back_to_record_version() {
        let identity = PackageIdentity::from_purl("pkg:cargo/tokio", Some("2.3.4")).unwrap();
        assert_eq!(identity.version(), Some("2.3.4"));

        let identity = PackageIdentity::from_purl("pkg:cargo/tokio@", Some("2.3.4")).unwrap();
        assert_eq!(identity.version(), Some("2.3.4"));
    }

    #[test]
    fn test_from_purl_fallback_is_percent_decoded() {
        let identity = PackageIdentity::from_purl("pkg:cargo/tokio", Some("1.0.0%2Brc")).unwrap();
        assert_eq!(identity.version(), Some("1.0.0+rc"));
    }

    #[test]
    fn test_from_purl_purl_version_wins_over_fallback() {
        let identity = PackageIdentity::from_purl("pkg:cargo/tokio@1.36.0", Some("2.3.4")).unwrap();
        assert_eq!(identity.version(), Some("1.36.0"));
    }

    #[test]
    fn test_from_purl_ignores_qualifiers() {
        let identity =
            PackageIdentity::from_purl("pkg:cargo/serde@1.0.0?repository_url=x#sub", None)
                .unwrap();
        assert_eq!(identity.name(), "serde");
        assert_eq!(identity.version(), Some("1.0.0"));
    }

    #[test]
    fn test_from_purl_malformed() {
        assert!(PackageIdentity::from_purl("not-a-purl", None).is_none());
        assert!(PackageIdentity::from_purl("", Some("1.0.0")).is_none());
        assert!(PackageIdentity::from_purl("pkg:cargo", None).is_none());
        assert!(PackageIdentity::from_purl("pkg:/serde@1.0.0", None).is_none());
    }

    #[test]
    fn test_from_purl_github_actions() {
        let identity =
            PackageIdentity::from_purl("pkg:githubactions/actions/checkout@4.1.1", None).unwrap();
        assert_eq!(identity.ecosystem(), &Ecosystem::GithubActions);
        assert_eq!(identity.name(), "actions/checkout");

        let hyphenated = PackageIdentity::from_purl("pkg:github-actions/actions/checkout@4", None);
        assert!(hyphenated.is_none());
    }

    #[test]
    fn test_display_round_trip() {
        let cases = [
            "pkg:cargo/serde@1.0.197",
            "pkg:cargo/foo%2Dbar@1.0.0",
            "pkg:npm/%40angular/core@16.2.0",
            "pkg:pypi/requests",
            "pkg:githubactions/actions/checkout@4.1.1",
            "pkg:golang/github.com/pkg/errors@0.9.1",
        ];

        for purl in cases {
            let parsed = PackageIdentity::from_purl(purl, None).unwrap();
            let reparsed = PackageIdentity::from_purl(&parsed.to_string(), None).unwrap();
            assert_eq!(parsed, reparsed, "round trip failed for {}", purl);
        }
    }

    #[test]
    fn test_display_encodes_characters_outside_grammar() {
        let identity = PackageIdentity::new(
            Ecosystem::Cargo,
            "weird name",
            Some("1.0.0-rc.1".to_string()),
        );
        let rendered = identity.to_string();
        assert!(rendered.starts_with("pkg:cargo/weird%20name@"));

        let reparsed = PackageIdentity::from_purl(&rendered, None).unwrap();
        assert_eq!(reparsed, identity);
    }

    #[test]
    fn test_new_normalizes_empty_version() {
        let identity = PackageIdentity::new(Ecosystem::Cargo, "serde", Some(String::new()));
        assert_eq!(identity.version(), None);
        assert_eq!(identity.to_string(), "pkg:cargo/serde");
    }
}
