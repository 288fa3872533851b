//! In-memory work and category collections
//!
//! Holds at most one work per id and one category per id. Works keep the
//! order the server returned them in; uploads are appended.

use serde::Serialize;

use super::work::{Category, Work};

/// Filter value selecting every work. `"all"` is accepted as an alias.
pub const ALL_CATEGORIES: &str = "tous";

/// Whether a filter value is the "every category" sentinel
pub fn is_all_categories(category: &str) -> bool {
    category.eq_ignore_ascii_case(ALL_CATEGORIES) || category.eq_ignore_ascii_case("all")
}

/// De-duplicating collection of works and categories
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkStore {
    works: Vec<Work>,
    categories: Vec<Category>,
}

impl WorkStore {
    /// Build a store from API lists, dropping duplicate ids
    pub fn new(works: Vec<Work>, categories: Vec<Category>) -> Self {
        let mut store = Self::default();
        for category in categories {
            store.insert_category(category);
        }
        for work in works {
            store.insert_work(work);
        }
        store
    }

    /// Insert or replace a category. Returns true if the id was new.
    pub fn insert_category(&mut self, category: Category) -> bool {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => {
                *existing = category;
                false
            }
            None => {
                self.categories.push(category);
                true
            }
        }
    }

    /// Insert or replace a work. Returns true if the id was new.
    ///
    /// A missing nested category is resolved from the known categories.
    pub fn insert_work(&mut self, mut work: Work) -> bool {
        if work.category.is_none() {
            if let Some(category_id) = work.category_id() {
                work.category = self.category(category_id).cloned();
            }
        }
        if work.category_id.is_none() {
            work.category_id = work.category_id();
        }

        match self.works.iter_mut().find(|w| w.id == work.id) {
            Some(existing) => {
                *existing = work;
                false
            }
            None => {
                self.works.push(work);
                true
            }
        }
    }

    /// Remove a work by id
    pub fn remove_work(&mut self, id: u32) -> Option<Work> {
        let index = self.works.iter().position(|w| w.id == id)?;
        Some(self.works.remove(index))
    }

    pub fn work(&self, id: u32) -> Option<&Work> {
        self.works.iter().find(|w| w.id == id)
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a category by id (`"2"`) or by exact name
    pub fn find_category(&self, id_or_name: &str) -> Option<&Category> {
        let trimmed = id_or_name.trim();
        match trimmed.parse::<u32>() {
            Ok(id) => self.category(id),
            Err(_) => self.categories.iter().find(|c| c.name == trimmed),
        }
    }

    /// Works shown for a filter value
    ///
    /// The sentinel returns every work; anything else is compared to the
    /// category *name* with plain string equality.
    pub fn filter_works_by_category(&self, category: &str) -> Vec<&Work> {
        if is_all_categories(category) {
            return self.works.iter().collect();
        }
        self.works
            .iter()
            .filter(|w| w.category_name() == Some(category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }
}
