//! Client-side route table.

use crate::error::{Error, Result};
use serde::Serialize;
use std::str::FromStr;

/// The five pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing page.
    Home,
    /// Claim entry and truth score.
    Verify,
    /// Static trend charts.
    Trends,
    /// Chat assistant (placeholder).
    Chat,
    /// About text.
    About,
}

impl Page {
    /// Every page, in route declaration order.
    pub const ALL: [Page; 5] = [Page::Home, Page::Verify, Page::Trends, Page::About, Page::Chat];

    /// Pages linked from the navigation bar, left to right.
    pub const NAV: [Page; 4] = [Page::Verify, Page::Trends, Page::Chat, Page::About];

    /// Route path.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Verify => "/verify",
            Page::Trends => "/trends",
            Page::Chat => "/chat",
            Page::About => "/about",
        }
    }

    /// Link text / document title.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Verify => "Verify",
            Page::Trends => "Trends",
            Page::Chat => "Chat",
            Page::About => "About",
        }
    }

    /// Whether the navigation bar links here.
    pub fn in_nav(self) -> bool {
        Self::NAV.contains(&self)
    }

    /// Resolve a path. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Result<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL
            .into_iter()
            .find(|page| page.path() == trimmed)
            .ok_or_else(|| Error::UnknownPage(path.to_string()))
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_path(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Page::Home)]
    #[case("/verify", Page::Verify)]
    #[case("/trends", Page::Trends)]
    #[case("/about", Page::About)]
    #[case("/chat", Page::Chat)]
    #[case("/verify/", Page::Verify)]
    fn test_from_path(#[case] path: &str, #[case] expected: Page) {
        assert_eq!(Page::from_path(path), Ok(expected));
    }

    #[test]
    fn test_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.path().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Page::ALL.iter().map(|p| p.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), 5);
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(
            Page::from_path("/admin"),
            Err(Error::UnknownPage("/admin".to_string()))
        );
        assert!(Page::from_path("").is_err());
        assert!(Page::from_path("/verify/42").is_err());
    }

    #[test]
    fn test_nav_excludes_home() {
        assert!(!Page::Home.in_nav());
        assert_eq!(Page::ALL.iter().filter(|p| p.in_nav()).count(), 4);
        assert_eq!(
            Page::NAV.map(Page::title),
            ["Verify", "Trends", "Chat", "About"]
        );
    }
}
