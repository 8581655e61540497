use tracing::debug;

/// Top-level sections of the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Tournaments,
    Matches,
    Teams,
    Stats,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Tournaments, Route::Matches, Route::Teams, Route::Stats];

    pub fn path(self) -> &'static str {
        match self {
            Route::Tournaments => "/tournaments",
            Route::Matches => "/matches",
            Route::Teams => "/teams",
            Route::Stats => "/stats",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Tournaments => "Tournaments",
            Route::Matches => "Matches",
            Route::Teams => "Teams",
            Route::Stats => "Stats",
        }
    }
}

/// Path that the root redirects to.
pub const DEFAULT_ROUTE: Route = Route::Tournaments;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    /// Replace the current location with this path.
    Redirect(&'static str),
    NotFound,
}

/// Resolve a client path. Routes match exactly, ignoring a trailing slash,
/// query and fragment.
pub fn resolve(path: &str) -> Resolution {
    let bare = path.split(['?', '#']).next().unwrap_or_default();
    let bare = match bare.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    let resolution = if bare == "/" {
        Resolution::Redirect(DEFAULT_ROUTE.path())
    } else {
        Route::ALL
            .into_iter()
            .find(|route| route.path() == bare)
            .map_or(Resolution::NotFound, Resolution::Render)
    };
    debug!(path, ?resolution, "Resolved route");
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_tournaments() {
        assert_eq!(resolve("/"), Resolution::Redirect("/tournaments"));
        assert_eq!(resolve(""), Resolution::Redirect("/tournaments"));
    }

    #[test]
    fn known_paths_render() {
        for route in Route::ALL {
            assert_eq!(resolve(route.path()), Resolution::Render(route));
        }
        assert_eq!(resolve("/teams/?sort=name"), Resolution::Render(Route::Teams));
    }

    #[test]
    fn nested_and_unknown_paths_are_not_found() {
        assert_eq!(resolve("/matches/5"), Resolution::NotFound);
        assert_eq!(resolve("/players"), Resolution::NotFound);
    }
}
