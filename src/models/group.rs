//! Group data models

use serde::{Deserialize, Serialize};

/// Group as returned by `/api/v1/groups`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub profile: GroupProfile,
    #[serde(rename = "_links", default)]
    pub links: GroupLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps: Option<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn users_href(&self) -> Option<&str> {
        self.links.users.as_ref().map(|l| l.href.as_str())
    }

    pub fn apps_href(&self) -> Option<&str> {
        self.links.apps.as_ref().map(|l| l.href.as_str())
    }
}

/// The organization's groups, fetched once per invocation
#[derive(Debug, Clone, Default)]
pub struct GroupSnapshot {
    groups: Vec<Group>,
}

impl GroupSnapshot {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Id of the first group with exactly this name
    pub fn id_of(&self, name: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.name() == name)
            .map(|g| g.id.as_str())
    }

    /// Groups whose name is in `names`, in snapshot order.
    /// An empty `names` keeps every group.
    pub fn filter_by_names(&self, names: &[String]) -> Vec<&Group> {
        if names.is_empty() {
            return self.groups.iter().collect();
        }
        self.groups
            .iter()
            .filter(|g| names.iter().any(|n| n == g.name()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }
}
