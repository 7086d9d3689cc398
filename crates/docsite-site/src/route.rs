//! URL route computation.
//!
//! Routes are absolute paths: leading slash, single slashes between
//! segments, no trailing slash except for the root `/`.

/// Join path fragments into a normalized route.
pub(crate) fn join(parts: &[&str]) -> String {
    let segments: Vec<&str> = parts
        .iter()
        .flat_map(|p| p.split('/'))
        .filter(|s| !s.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}

/// Route of a document.
///
/// `base` is the site base URL joined with the docs route base path. A slug
/// starting with `/` is taken relative to `base`; any other slug replaces
/// the last segment of the identifier.
pub(crate) fn doc_route(base: &str, id: &str, slug: Option<&str>) -> String {
    match slug {
        Some(slug) if slug.starts_with('/') => join(&[base, slug]),
        Some(slug) => {
            let dir = id.rsplit_once('/').map_or("", |(dir, _)| dir);
            join(&[base, dir, slug])
        }
        None => join(&[base, id]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_normalizes_slashes() {
        assert_eq!(join(&["/", "docs"]), "/docs");
        assert_eq!(join(&["/base/", "/docs/", "intro"]), "/base/docs/intro");
        assert_eq!(join(&["/", "/"]), "/");
        assert_eq!(join(&[]), "/");
        assert_eq!(join(&["a//b/"]), "/a/b");
    }

    #[test]
    fn test_doc_route_from_id() {
        assert_eq!(doc_route("/docs", "guides/setup", None), "/docs/guides/setup");
    }

    #[test]
    fn test_doc_route_absolute_slug() {
        assert_eq!(doc_route("/mesh/docs", "intro", Some("/")), "/mesh/docs");
        assert_eq!(doc_route("/", "guides/setup", Some("/install")), "/install");
    }

    #[test]
    fn test_doc_route_relative_slug() {
        assert_eq!(
            doc_route("/docs", "guides/setup", Some("installing")),
            "/docs/guides/installing"
        );
        assert_eq!(doc_route("/docs", "intro", Some("start")), "/docs/start");
    }
}
