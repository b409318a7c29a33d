//! Moving focus between sections and fields.

use crate::profile::{ProfileField, Section};

use super::App;

impl App {
    /// Shows the next section, wrapping around, with focus on its first field.
    pub fn next_section(&mut self) {
        self.selected_section = (self.selected_section + 1) % Section::ALL.len();
        self.selected_field = 0;
    }

    /// Shows the previous section, wrapping around.
    pub fn prev_section(&mut self) {
        let len = Section::ALL.len();
        self.selected_section = (self.selected_section + len - 1) % len;
        self.selected_field = 0;
    }

    /// Follows a navigation anchor such as `#Company Info`.
    ///
    /// # Returns
    ///
    /// `false` if the anchor names no section.
    pub fn follow_anchor(&mut self, anchor: &str) -> bool {
        match Section::from_anchor(anchor) {
            Some(section) => {
                self.selected_section = section.index();
                self.selected_field = 0;
                true
            }
            None => false,
        }
    }

    /// Moves focus to the next field of the section, wrapping around.
    pub fn next_field(&mut self) {
        let count = self.section_fields().len();
        if count > 0 {
            self.selected_field = (self.selected_field + 1) % count;
        }
    }

    /// Moves focus to the previous field of the section, wrapping around.
    pub fn prev_field(&mut self) {
        let count = self.section_fields().len();
        if count > 0 {
            self.selected_field = (self.selected_field + count - 1) % count;
        }
    }

    /// Shows the section holding `field` and focuses it.
    pub fn focus_field(&mut self, field: ProfileField) {
        let section = field.section();
        self.selected_section = section.index();
        self.selected_field = section
            .fields()
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0);
    }
}
