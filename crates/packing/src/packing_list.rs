use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use packrat_core::{Id, Model, Query};

use crate::item::Item;

/// An ordered list of items to pack.
///
/// Changes never mutate in place: `add_item` and `remove_item` return a new
/// list, which is then stored with a whole-record update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingList {
    pub id: Id<i64>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl PackingList {
    pub fn temporary(id: i64, items: Vec<Item>) -> Self {
        Self {
            id: Id::temporary(id),
            items,
        }
    }

    pub fn permanent(id: i64, items: Vec<Item>) -> Self {
        Self {
            id: Id::permanent(id),
            items,
        }
    }

    /// Appends `item` to the end of the list.
    pub fn add_item(&self, item: Item) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { id: self.id, items }
    }

    /// Removes the first item equal to `item`. No-op when absent.
    pub fn remove_item(&self, item: &Item) -> Self {
        let mut items = self.items.clone();
        if let Some(pos) = items.iter().position(|i| i == item) {
            items.remove(pos);
        }
        Self { id: self.id, items }
    }

    pub fn contains_named(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }
}

impl Model<i64> for PackingList {
    fn id(&self) -> &Id<i64> {
        &self.id
    }

    fn with_id(self, id: Id<i64>) -> Self {
        Self { id, ..self }
    }
}

/// Packing-list filter: lists containing an item with the given name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingListQuery {
    pub contains: Option<String>,
}

impl PackingListQuery {
    const CONTAINS_KEY: &'static str = "contains";

    pub fn containing(name: impl Into<String>) -> Self {
        Self {
            contains: Some(name.into()),
        }
    }

    pub fn from_query_params(params: &HashMap<String, String>) -> Self {
        Self {
            contains: params.get(Self::CONTAINS_KEY).cloned(),
        }
    }
}

impl Query<PackingList> for PackingListQuery {
    fn filter(&self, snapshot: Vec<PackingList>) -> Vec<PackingList> {
        match &self.contains {
            Some(name) => snapshot
                .into_iter()
                .filter(|list| list.contains_named(name))
                .collect(),
            None => snapshot,
        }
    }
}
