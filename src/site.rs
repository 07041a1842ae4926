//! Site profiles.
//!
//! A process serves exactly one site. The two starter sites share their
//! pages and differ only in titles and the repository URL variable; the
//! lab site serves the Python environment dashboard and its JSON API.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    Mod0,
    Tkt0,
    Pylab,
}

impl Site {
    pub const ALL: [Site; 3] = [Site::Mod0, Site::Tkt0, Site::Pylab];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mod0 => "mod0",
            Self::Tkt0 => "tkt0",
            Self::Pylab => "pylab",
        }
    }

    /// Environment variable holding the repository URL, if the site shows one.
    pub fn repo_url_var(&self) -> Option<&'static str> {
        match self {
            Self::Mod0 => Some("MOD0_REPO_URL"),
            Self::Tkt0 => Some("TKT0_REPO_URL"),
            Self::Pylab => None,
        }
    }

    /// Title of the home page.
    pub fn home_title(&self) -> &'static str {
        match self {
            Self::Mod0 => "Welcome to MOD0",
            Self::Tkt0 => "Welcome to Flask",
            Self::Pylab => "Python Advanced Problem Solving",
        }
    }

    /// Title of the tutorial page, `None` when the site has no tutorial.
    pub fn tutorial_title(&self) -> Option<&'static str> {
        match self {
            Self::Mod0 => Some("MOD0 Tutorial"),
            Self::Tkt0 => Some("Flask Tutorial"),
            Self::Pylab => None,
        }
    }

    pub fn has_tutorial(&self) -> bool {
        self.tutorial_title().is_some()
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mod0" => Ok(Self::Mod0),
            "tkt0" => Ok(Self::Tkt0),
            "pylab" | "lab" => Ok(Self::Pylab),
            _ => Err(format!(
                "Unknown site: {} (expected mod0, tkt0 or pylab)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for site in Site::ALL {
            assert_eq!(site.as_str().parse::<Site>().unwrap(), site);
        }
        assert_eq!(" TKT0 ".parse::<Site>().unwrap(), Site::Tkt0);
        assert!("flask".parse::<Site>().is_err());
    }

    #[test]
    fn test_tutorial_titles() {
        assert_eq!(Site::Mod0.tutorial_title(), Some("MOD0 Tutorial"));
        assert_eq!(Site::Tkt0.tutorial_title(), Some("Flask Tutorial"));
        assert!(!Site::Pylab.has_tutorial());
    }
}
