//! Section navigation shown on the left of the page.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use crate::profile::page::NavItem;
use crate::tui::colors::TuiColors;

/// Lists the page sections, highlighting the one shown.
#[derive(Debug, Default)]
pub struct NavBar;

impl NavBar {
    /// Creates a new navigation bar widget.
    pub fn new() -> Self {
        Self
    }

    /// Renders `items` into `area`. Sections are numbered for the digit
    /// shortcuts.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        items: &[NavItem],
        selected_section: usize,
        colors: &TuiColors,
    ) {
        let block = Block::default()
            .title(" Sections ")
            .title_style(colors.title)
            .borders(Borders::ALL)
            .border_style(colors.border);

        let inner = block.inner(area);
        block.render(area, buf);

        for (i, item) in items.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }

            let y = inner.y + i as u16;
            let is_selected = i == selected_section;

            let style = if is_selected {
                colors
                    .accent
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::REVERSED)
            } else {
                colors.text
            };

            let prefix = if is_selected { "> " } else { "  " };
            let text = format!("{}{} {}", prefix, i + 1, item.label);
            buf.set_span(inner.x, y, &Span::styled(text, style), inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Section;
    use ratatui::buffer::Buffer;

    fn items() -> Vec<NavItem> {
        Section::ALL
            .iter()
            .map(|s| NavItem {
                section: *s,
                label: s.label(),
                anchor: s.anchor(),
            })
            .collect()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_selected_section_is_marked() {
        let area = Rect::new(0, 0, 24, 8);
        let mut buf = Buffer::empty(area);
        NavBar::new().render(area, &mut buf, &items(), 1, &TuiColors::default());

        assert!(row(&buf, 1).contains("  1 Your profile"));
        assert!(row(&buf, 2).contains("> 2 Company Info"));
    }
}
