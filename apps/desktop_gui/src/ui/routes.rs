//! Path-style routes for the page shell.

use shared::domain::AlgorithmKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// `/visualizer/:slug`; the slug is kept even when it names no algorithm.
    Visualizer(String),
    About,
    Contact,
    Terms,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(trimmed);
        match trimmed {
            "" | "/" => Self::Home,
            "/about" => Self::About,
            "/contact" => Self::Contact,
            "/terms" => Self::Terms,
            other => match other.strip_prefix("/visualizer/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                    Self::Visualizer(slug.to_string())
                }
                _ => Self::NotFound(other.to_string()),
            },
        }
    }

    pub fn visualizer(kind: AlgorithmKind) -> Self {
        Self::Visualizer(kind.slug().to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Visualizer(slug) => format!("/visualizer/{slug}"),
            Self::About => "/about".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::Terms => "/terms".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// The algorithm this route opens, if it is a known visualizer slug.
    pub fn algorithm(&self) -> Option<AlgorithmKind> {
        match self {
            Self::Visualizer(slug) => AlgorithmKind::from_slug(slug),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_pages() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/contact/"), Route::Contact);
        assert_eq!(Route::parse("/terms"), Route::Terms);
    }

    #[test]
    fn visualizer_routes_keep_unknown_slugs() {
        let route = Route::parse("/visualizer/quick-sort");
        assert_eq!(route.algorithm(), Some(AlgorithmKind::QuickSort));

        let unknown = Route::parse("/visualizer/bogo-sort");
        assert_eq!(unknown, Route::Visualizer("bogo-sort".to_string()));
        assert_eq!(unknown.algorithm(), None);
    }

    #[test]
    fn other_paths_are_not_found() {
        assert_eq!(
            Route::parse("/interview-prep"),
            Route::NotFound("/interview-prep".to_string())
        );
        assert!(matches!(Route::parse("/visualizer/"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/visualizer/a/b"), Route::NotFound(_)));
    }

    #[test]
    fn every_algorithm_route_round_trips() {
        for kind in AlgorithmKind::ALL {
            let route = Route::visualizer(kind);
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
