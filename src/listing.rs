//! Listing Operations
//!
//! Filter, sort and lookup over a freshly fetched catalog. All functions take
//! the record list by value and hand back the subset, so a handler can chain
//! fetch -> filter -> sort without cloning.

use crate::data::CatalogModel;
use crate::utils::{locale_compare, FieldPath, SortKey};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field path used when the query does not name one
pub const DEFAULT_SORT_FIELD: &str = "name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Absent, empty or `asc` is ascending; anything else is descending
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some("asc") => SortOrder::Asc,
            Some(_) => SortOrder::Desc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Query params for the list page (`/?filter=&sort=&order=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ListingQuery {
    pub fn filter(&self) -> &str {
        self.filter.as_deref().unwrap_or("")
    }

    pub fn sort(&self) -> &str {
        match self.sort.as_deref() {
            Some(field) if !field.is_empty() => field,
            _ => DEFAULT_SORT_FIELD,
        }
    }

    pub fn order(&self) -> SortOrder {
        SortOrder::parse(self.order.as_deref())
    }
}

/// Keep models whose name contains `needle`, ignoring case
///
/// An empty needle keeps everything.
pub fn filter_by_name(models: Vec<CatalogModel>, needle: &str) -> Vec<CatalogModel> {
    if needle.is_empty() {
        return models;
    }

    let needle = needle.to_lowercase();
    models
        .into_iter()
        .filter(|m| m.display_name().to_lowercase().contains(&needle))
        .collect()
}

/// Order two resolved keys
///
/// Missing keys go last whatever the direction. Between present keys numbers
/// precede text, numbers compare arithmetically and text uses `locale_compare`;
/// `Desc` reverses that.
pub fn compare_keys(a: &SortKey, b: &SortKey, order: SortOrder) -> Ordering {
    let ord = match (a, b) {
        (SortKey::Missing, SortKey::Missing) => return Ordering::Equal,
        (SortKey::Missing, _) => return Ordering::Greater,
        (_, SortKey::Missing) => return Ordering::Less,
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => locale_compare(x, y),
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
    };

    match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}

/// Stable sort by one or more comma-separated field paths
///
/// Paths resolve against each item's serialized form, so any `Serialize`
/// record works. Ties (and unknown fields) keep the incoming order.
pub fn sort_by_field<T: Serialize>(items: Vec<T>, field: &str, order: SortOrder) -> Vec<T> {
    let paths = FieldPath::parse_list(field);
    if paths.is_empty() {
        return items;
    }

    let mut keyed: Vec<(Vec<SortKey>, T)> = items
        .into_iter()
        .map(|item| {
            let value = serde_json::to_value(&item).unwrap_or(serde_json::Value::Null);
            let keys = paths.iter().map(|p| p.sort_key(&value)).collect();
            (keys, item)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        a.iter()
            .zip(b)
            .map(|(x, y)| compare_keys(x, y, order))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    });

    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Find a model whose id, written as decimal text, equals `id` exactly
pub fn find_by_id(models: Vec<CatalogModel>, id: &str) -> Option<CatalogModel> {
    models
        .into_iter()
        .find(|m| m.id.is_some_and(|own| own.to_string() == id))
}

/// Keep models whose embedded manufacturer id, as decimal text, equals `manufacturer_id`
///
/// Models without a manufacturer (or without its id) never match.
pub fn by_manufacturer(models: Vec<CatalogModel>, manufacturer_id: &str) -> Vec<CatalogModel> {
    models
        .into_iter()
        .filter(|m| {
            m.manufacturer_id()
                .is_some_and(|own| own.to_string() == manufacturer_id)
        })
        .collect()
}
