use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One catalog entry, in the upstream `packages-meta-ext-v1` schema.
///
/// Only `Name` is mandatory. Every other attribute accepts both `null` and
/// absence; relationship lists then decode as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageRecord {
    #[serde(rename = "ID", default, deserialize_with = "nullable")]
    pub id: u64,
    pub name: String,
    #[serde(rename = "PackageBaseID", default, deserialize_with = "nullable")]
    pub package_base_id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub package_base: String,
    #[serde(default, deserialize_with = "nullable")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub num_votes: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub popularity: f64,
    #[serde(default)]
    pub out_of_date: Option<i64>,
    #[serde(default)]
    pub maintainer: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub first_submitted: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub last_modified: i64,
    #[serde(rename = "URLPath", default)]
    pub url_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub depends: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub make_depends: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub opt_depends: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub check_depends: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub provides: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub conflicts: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub replaces: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub groups: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub license: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub keywords: Vec<String>,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PackageRecord {
    /// Minimal record with the given name and base; everything else empty.
    pub fn new(name: impl Into<String>, package_base: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            package_base_id: 0,
            package_base: package_base.into(),
            version: String::new(),
            description: None,
            url: None,
            num_votes: 0,
            popularity: 0.0,
            out_of_date: None,
            maintainer: None,
            first_submitted: 0,
            last_modified: 0,
            url_path: None,
            depends: Vec::new(),
            make_depends: Vec::new(),
            opt_depends: Vec::new(),
            check_depends: Vec::new(),
            provides: Vec::new(),
            conflicts: Vec::new(),
            replaces: Vec::new(),
            groups: Vec::new(),
            license: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Raw reference strings of one relationship field.
    pub fn relations(&self, category: RefCategory) -> &[String] {
        match category {
            RefCategory::Depends => &self.depends,
            RefCategory::MakeDepends => &self.make_depends,
            RefCategory::OptDepends => &self.opt_depends,
            RefCategory::CheckDepends => &self.check_depends,
            RefCategory::Provides => &self.provides,
            RefCategory::Conflicts => &self.conflicts,
            RefCategory::Replaces => &self.replaces,
            RefCategory::Groups => &self.groups,
            RefCategory::Keywords => &self.keywords,
        }
    }

    pub fn summary(&self) -> PackageSummary {
        PackageSummary {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Name and description only, for description search without touching full records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub name: String,
    pub description: Option<String>,
}

/// The nine relationship fields a record declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefCategory {
    Depends,
    MakeDepends,
    OptDepends,
    CheckDepends,
    Provides,
    Conflicts,
    Replaces,
    Groups,
    Keywords,
}

impl RefCategory {
    pub const ALL: [RefCategory; 9] = [
        RefCategory::Depends,
        RefCategory::MakeDepends,
        RefCategory::OptDepends,
        RefCategory::CheckDepends,
        RefCategory::Provides,
        RefCategory::Conflicts,
        RefCategory::Replaces,
        RefCategory::Groups,
        RefCategory::Keywords,
    ];

    /// Prefix used for reverse-index keys. Distinct per category.
    pub fn tag(self) -> &'static str {
        match self {
            RefCategory::Depends => "depends",
            RefCategory::MakeDepends => "make-depends",
            RefCategory::OptDepends => "opt-depends",
            RefCategory::CheckDepends => "check-depends",
            RefCategory::Provides => "provides",
            RefCategory::Conflicts => "conflicts",
            RefCategory::Replaces => "replaces",
            RefCategory::Groups => "groups",
            RefCategory::Keywords => "keywords",
        }
    }
}

impl fmt::Display for RefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
