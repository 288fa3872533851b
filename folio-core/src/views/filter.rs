//! Category filter bar, shown to anonymous visitors only

use maud::{html, Markup};
use serde::Serialize;

use crate::domain::store::is_all_categories;
use crate::domain::{Category, ALL_CATEGORIES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    /// Value passed to `filter_works_by_category`
    pub value: String,
    pub label: String,
    pub active: bool,
}

/// The "all" button followed by one button per category
#[derive(Debug, Clone)]
pub struct FilterBar {
    buttons: Vec<FilterButton>,
}

impl FilterBar {
    /// Build the bar with "all" active
    pub fn new(categories: &[Category], all_label: &str) -> Self {
        let all = FilterButton {
            value: ALL_CATEGORIES.to_string(),
            label: all_label.to_string(),
            active: true,
        };
        let buttons = std::iter::once(all)
            .chain(categories.iter().map(|c| FilterButton {
                value: c.name.clone(),
                label: c.name.clone(),
                active: false,
            }))
            .collect();
        Self { buttons }
    }

    /// Move the active marker to the button for `value`
    ///
    /// Returns false and leaves the bar untouched when no button matches.
    pub fn set_active(&mut self, value: &str) -> bool {
        let target = if is_all_categories(value) {
            Some(0)
        } else {
            self.buttons.iter().position(|b| b.value == value)
        };

        match target {
            Some(index) => {
                for (i, button) in self.buttons.iter_mut().enumerate() {
                    button.active = i == index;
                }
                true
            }
            None => false,
        }
    }

    /// Value of the active button
    pub fn active(&self) -> &str {
        self.buttons
            .iter()
            .find(|b| b.active)
            .map(|b| b.value.as_str())
            .unwrap_or(ALL_CATEGORIES)
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn to_html(&self) -> Markup {
        html! {
            div.filters {
                @for button in &self.buttons {
                    button.filter-button.active[button.active] type="button" data-category=(button.value) {
                        (button.label)
                    }
                }
            }
        }
    }
}
