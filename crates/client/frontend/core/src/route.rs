//! Page addresses.

use std::fmt;
use std::str::FromStr;

use roster_core::FighterId;

/// One of the four pages, addressable by path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    #[default]
    Roster,
    /// `/fighter/:id`
    Detail(FighterId),
    /// `/new`
    Create,
    /// `/edit/:id`
    Edit(FighterId),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteParseError {
    #[error("unknown path: {0}")]
    Unknown(String),

    #[error("missing fighter id in {0}")]
    MissingId(String),
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Roster => "Roster",
            Route::Detail(_) => "Fighter",
            Route::Create => "New Fighter",
            Route::Edit(_) => "Edit Fighter",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Roster => f.write_str("/"),
            Route::Detail(id) => write!(f, "/fighter/{id}"),
            Route::Create => f.write_str("/new"),
            Route::Edit(id) => write!(f, "/edit/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    /// Accepts paths with or without a trailing slash.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Roster),
            ["new"] => Ok(Route::Create),
            ["fighter", id] => Ok(Route::Detail(FighterId::from(*id))),
            ["edit", id] => Ok(Route::Edit(FighterId::from(*id))),
            ["fighter"] | ["edit"] => Err(RouteParseError::MissingId(trimmed.to_string())),
            _ => Err(RouteParseError::Unknown(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        assert_eq!("/".parse(), Ok(Route::Roster));
        assert_eq!("/new".parse(), Ok(Route::Create));
        assert_eq!("/fighter/7".parse(), Ok(Route::Detail(FighterId::from("7"))));
        assert_eq!("/edit/7/".parse(), Ok(Route::Edit(FighterId::from("7"))));
    }

    #[test]
    fn renders_back_to_paths() {
        for path in ["/", "/new", "/fighter/abc", "/edit/12"] {
            let route: Route = path.parse().unwrap();
            assert_eq!(route.to_string(), path);
        }
    }

    #[test]
    fn rejects_unknown_and_incomplete_paths() {
        assert_eq!(
            "/fighter".parse::<Route>(),
            Err(RouteParseError::MissingId("/fighter".into()))
        );
        assert!(matches!(
            "/fighter/1/extra".parse::<Route>(),
            Err(RouteParseError::Unknown(_))
        ));
        assert!(matches!("/teams".parse::<Route>(), Err(RouteParseError::Unknown(_))));
    }
}
