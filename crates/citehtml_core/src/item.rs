/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bibliographic item model and store.
//!
//! Items arrive as a CSL-JSON item list. Only items carrying an `issued`
//! date are retained, and the `URL` field is stripped before storage so the
//! engine never sees resource locators when formatting citation text.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single bibliographic item.
///
/// The fields the store inspects (`id`, `issued`, `URL`) are typed; every
/// other CSL variable is carried verbatim in `fields` for the engine to
/// consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, also the anchor target for in-text links.
    pub id: String,
    /// Publication date. Items without one are not stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<Value>,
    /// Resource locator, removed before storage.
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Value>,
    /// All remaining CSL variables, passed through untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Item {
    fn has_issued(&self) -> bool {
        !matches!(self.issued, None | Some(Value::Null))
    }
}

/// The raw input payload: `{"items": [...]}`.
#[derive(Debug, Deserialize)]
struct ItemList {
    items: Vec<Item>,
}

/// All bibliographic items for one document render, keyed by identifier.
///
/// Built once at initialization and immutable afterwards. Input order is
/// preserved.
#[derive(Debug, Default, Clone)]
pub struct ItemStore {
    items: IndexMap<String, Item>,
}

impl ItemStore {
    /// Build the store from a CSL-JSON item list.
    ///
    /// Items without an `issued` date are dropped, and the `URL` field is
    /// removed from every stored item. A payload without an `items` array
    /// fails to deserialize.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        let list: ItemList = serde_json::from_str(input)?;
        let mut items = IndexMap::with_capacity(list.items.len());
        for mut item in list.items {
            if !item.has_issued() {
                log::debug!("dropping item '{}': no issued date", item.id);
                continue;
            }
            item.url = None;
            items.insert(item.id.clone(), item);
        }
        Ok(ItemStore { items })
    }

    /// Look up an item by identifier.
    ///
    /// Returns `None` for unknown ids and for items filtered out at load
    /// time; the engine treats either case as an unresolvable reference.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
