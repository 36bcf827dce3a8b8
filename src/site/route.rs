/// The site's pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Landing,
    /// `/ad`
    Ad,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 2] = [Route::Landing, Route::Ad];

    /// Match a request path. A single trailing slash is accepted; anything else is `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(p) if !p.is_empty() => p,
            _ => path,
        };
        match trimmed {
            "/" => Some(Self::Landing),
            "/ad" => Some(Self::Ad),
            _ => None,
        }
    }

    /// Canonical path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Ad => "/ad",
        }
    }

    /// Where a static export puts this page, relative to the site root.
    pub fn output_file(self) -> &'static str {
        match self {
            Self::Landing => "index.html",
            Self::Ad => "ad/index.html",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/route.rs"]
mod tests;
