use super::package::RefCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field a search argument is matched against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SearchBy {
    Name,
    #[default]
    NameDesc,
    Depends,
    #[serde(rename = "makedepends")]
    MakeDepends,
    #[serde(rename = "optdepends")]
    OptDepends,
    #[serde(rename = "checkdepends")]
    CheckDepends,
    Provides,
    Conflicts,
    Replaces,
    Groups,
    Keywords,
}

impl SearchBy {
    /// Relationship category backing this search, if it is a reverse lookup.
    pub fn category(self) -> Option<RefCategory> {
        match self {
            SearchBy::Name | SearchBy::NameDesc => None,
            SearchBy::Depends => Some(RefCategory::Depends),
            SearchBy::MakeDepends => Some(RefCategory::MakeDepends),
            SearchBy::OptDepends => Some(RefCategory::OptDepends),
            SearchBy::CheckDepends => Some(RefCategory::CheckDepends),
            SearchBy::Provides => Some(RefCategory::Provides),
            SearchBy::Conflicts => Some(RefCategory::Conflicts),
            SearchBy::Replaces => Some(RefCategory::Replaces),
            SearchBy::Groups => Some(RefCategory::Groups),
            SearchBy::Keywords => Some(RefCategory::Keywords),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchBy::Name => "name",
            SearchBy::NameDesc => "name-desc",
            SearchBy::Depends => "depends",
            SearchBy::MakeDepends => "makedepends",
            SearchBy::OptDepends => "optdepends",
            SearchBy::CheckDepends => "checkdepends",
            SearchBy::Provides => "provides",
            SearchBy::Conflicts => "conflicts",
            SearchBy::Replaces => "replaces",
            SearchBy::Groups => "groups",
            SearchBy::Keywords => "keywords",
        }
    }
}

impl FromStr for SearchBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SearchBy::Name),
            "name-desc" => Ok(SearchBy::NameDesc),
            "depends" => Ok(SearchBy::Depends),
            "makedepends" => Ok(SearchBy::MakeDepends),
            "optdepends" => Ok(SearchBy::OptDepends),
            "checkdepends" => Ok(SearchBy::CheckDepends),
            "provides" => Ok(SearchBy::Provides),
            "conflicts" => Ok(SearchBy::Conflicts),
            "replaces" => Ok(SearchBy::Replaces),
            "groups" => Ok(SearchBy::Groups),
            "keywords" => Ok(SearchBy::Keywords),
            other => Err(format!("Incorrect by field specified: {other}")),
        }
    }
}

impl fmt::Display for SearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
