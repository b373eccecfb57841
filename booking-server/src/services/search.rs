//! Federated search
//!
//! Runs a case-insensitive "contains" query against six content tables in
//! parallel, merges the results and tags every hit with its source table
//! and destination link. No ranking, no pagination.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::{BookableKind, Language, SearchHit};

use crate::db::models::{BookableItem, CatalogEntry};
use crate::db::repository::{CatalogRepository, ItemRepository, RepoResult};

/// Tables covered by the federated search
pub const SEARCH_TABLES: [&str; 6] = [
    "tour",
    "adventure",
    "special_event",
    "restaurant",
    "bnb",
    "cultural_site",
];

#[derive(Clone)]
pub struct SearchService {
    db: Surreal<Db>,
}

impl SearchService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    /// Search all six tables for `query`; empty queries yield no hits
    pub async fn search(&self, query: &str, lang: Language) -> RepoResult<Vec<SearchHit>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let tours = ItemRepository::for_kind(self.db.clone(), BookableKind::Tour);
        let adventures = ItemRepository::for_kind(self.db.clone(), BookableKind::Adventure);
        let events = ItemRepository::for_kind(self.db.clone(), BookableKind::SpecialEvent);
        let restaurants = CatalogRepository::restaurants(self.db.clone());
        let bnbs = CatalogRepository::bnbs(self.db.clone());
        let sites = CatalogRepository::cultural_sites(self.db.clone());

        let (tours, adventures, events, restaurants, bnbs, sites) = tokio::join!(
            tours.search_contains(&needle),
            adventures.search_contains(&needle),
            events.search_contains(&needle),
            restaurants.search_contains(&needle),
            bnbs.search_contains(&needle),
            sites.search_contains(&needle),
        );

        let mut hits = Vec::new();
        collect_items(&mut hits, "tour", tours?, lang);
        collect_items(&mut hits, "adventure", adventures?, lang);
        collect_items(&mut hits, "special_event", events?, lang);
        collect_entries(&mut hits, "restaurant", restaurants?, lang);
        collect_entries(&mut hits, "bnb", bnbs?, lang);
        collect_entries(&mut hits, "cultural_site", sites?, lang);
        Ok(hits)
    }
}

fn collect_items(hits: &mut Vec<SearchHit>, table: &str, items: Vec<BookableItem>, lang: Language) {
    for item in items {
        let id = item.key();
        hits.push(SearchHit {
            source: table.to_string(),
            link: destination(table, &id),
            title: item.title.pick(lang).to_string(),
            id,
        });
    }
}

fn collect_entries(
    hits: &mut Vec<SearchHit>,
    table: &str,
    entries: Vec<CatalogEntry>,
    lang: Language,
) {
    for entry in entries {
        let id = entry.key();
        hits.push(SearchHit {
            source: table.to_string(),
            link: destination(table, &id),
            title: entry.name.pick(lang).to_string(),
            id,
        });
    }
}

/// Static per-table destination links
fn destination(table: &str, id: &str) -> String {
    match table {
        "tour" => format!("/tours/{id}"),
        "adventure" => format!("/adventures/{id}"),
        "special_event" => format!("/events/{id}"),
        "restaurant" => format!("/restaurants/{id}"),
        "bnb" => format!("/bed-and-breakfast/{id}"),
        "cultural_site" => format!("/culture/{id}"),
        _ => format!("/{table}/{id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destinations_cover_every_search_table() {
        for table in SEARCH_TABLES {
            let link = destination(table, "x1");
            assert!(link.ends_with("/x1"), "{table} -> {link}");
        }
        assert_eq!(destination("tour", "a"), "/tours/a");
        assert_eq!(destination("bnb", "b"), "/bed-and-breakfast/b");
        assert_eq!(destination("cultural_site", "c"), "/culture/c");
    }
}
