use std::any::Any;

use roster_states::{State, state_assign_impl};

/// Column the visible list is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    None,
    Country,
    Name,
    Last,
}

/// UI-driven view parameters: everything that shapes the visible list
/// without touching the record store.
#[derive(Debug, Clone)]
pub struct ViewParams {
    pub show_colors: bool,
    pub sorting: SortBy,
    /// Case-insensitive substring match on country; empty means no filter.
    pub filter_country: String,
    /// Page of the next fetch, 1-based.
    pub current_page: u32,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            show_colors: false,
            sorting: SortBy::None,
            filter_country: String::new(),
            current_page: 1,
        }
    }
}

impl ViewParams {
    pub fn toggle_colors(&mut self) {
        self.show_colors = !self.show_colors;
    }

    /// Header-button toggle: between `None` and `Country`, and from a
    /// name-based sort straight to `Country`.
    pub fn toggle_sort_by_country(&mut self) {
        self.sorting = match self.sorting {
            SortBy::Country => SortBy::None,
            SortBy::None | SortBy::Name | SortBy::Last => SortBy::Country,
        };
    }

    pub fn set_sorting(&mut self, sorting: SortBy) {
        self.sorting = sorting;
    }

    pub fn set_filter_country(&mut self, text: impl Into<String>) {
        self.filter_country = text.into();
    }

    pub fn advance_page(&mut self) {
        self.current_page += 1;
    }
}

impl State for ViewParams {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
