use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use packrat_core::{Id, Model, Query};

/// Something to pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Id<i64>,
    pub name: String,
}

impl Item {
    pub fn temporary(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Id::temporary(id),
            name: name.into(),
        }
    }

    pub fn permanent(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Id::permanent(id),
            name: name.into(),
        }
    }

    /// Copy of this item with a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
        }
    }
}

impl Model<i64> for Item {
    fn id(&self) -> &Id<i64> {
        &self.id
    }

    fn with_id(self, id: Id<i64>) -> Self {
        Self { id, ..self }
    }
}

/// Item filter. With no name set, every item matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    pub name: Option<String>,
}

impl ItemQuery {
    const NAME_KEY: &'static str = "name";

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Builds a query from request query parameters; unknown keys are ignored.
    pub fn from_query_params(params: &HashMap<String, String>) -> Self {
        Self {
            name: params.get(Self::NAME_KEY).cloned(),
        }
    }

    fn matches(&self, item: &Item) -> bool {
        match &self.name {
            Some(name) => item.name == *name,
            None => true,
        }
    }
}

impl Query<Item> for ItemQuery {
    fn filter(&self, snapshot: Vec<Item>) -> Vec<Item> {
        snapshot.into_iter().filter(|item| self.matches(item)).collect()
    }
}
