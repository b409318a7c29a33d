//! Form panel widget for the TUI.
//!
//! Draws the fields of one section: label, value or placeholder, the error
//! from the last submit, and the description line.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::profile::page::FieldView;
use crate::profile::FieldKind;
use crate::tui::colors::TuiColors;
use crate::tui::text_input::TextInput;

/// What the panel needs to know about the focused field.
#[derive(Debug, Clone, Copy)]
pub struct FormFocus<'a> {
    /// Index of the focused field within the section.
    pub selected_field: usize,
    /// The open text input when the focused field is being edited.
    pub editing: Option<&'a TextInput>,
}

/// Form panel widget for rendering the fields of one section.
#[derive(Debug, Default)]
pub struct FormPanel;

impl FormPanel {
    /// Creates a new form panel widget.
    pub fn new() -> Self {
        Self
    }

    /// Renders `fields` under a block titled `section_label`.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        section_label: &str,
        fields: &[&FieldView],
        focus: FormFocus<'_>,
        colors: &TuiColors,
    ) {
        let block = Block::default()
            .title(format!(" {} ", section_label))
            .title_style(colors.title)
            .borders(Borders::ALL)
            .border_style(colors.border)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        if fields.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing to configure here yet.",
                colors.muted,
            )));
        }

        for (i, view) in fields.iter().enumerate() {
            let is_selected = i == focus.selected_field;
            let has_error = view.error.is_some();

            let label_prefix = if is_selected { "> " } else { "  " };
            let label_style = match (is_selected, has_error) {
                (true, true) => colors.error.add_modifier(Modifier::BOLD),
                (true, false) => colors.accent.add_modifier(Modifier::BOLD),
                (false, true) => colors.error,
                (false, false) => colors.label,
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", label_prefix, view.label),
                label_style,
            )));

            let editing = if is_selected { focus.editing } else { None };
            lines.push(value_line(view, editing, colors));

            if let Some(message) = &view.error {
                lines.push(Line::from(Span::styled(
                    format!("    {}", message),
                    colors.error,
                )));
            }

            if let Some(description) = view.description {
                lines.push(Line::from(Span::styled(
                    format!("    {}", description),
                    colors.muted,
                )));
            }

            lines.push(Line::from(""));
        }

        // Keep the focused field on screen.
        let focus_line = lines_before(fields, focus.selected_field);
        let height = inner.height as usize;
        let scroll = (focus_line + 4).saturating_sub(height);

        let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
        Paragraph::new(visible)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// The value row of a field.
fn value_line<'a>(view: &'a FieldView, editing: Option<&'a TextInput>, colors: &TuiColors) -> Line<'a> {
    if let Some(input) = editing {
        let (before, after) = input.split_at_cursor();
        return Line::from(vec![
            Span::raw("    "),
            Span::styled(before, colors.highlight),
            Span::styled("_", colors.highlight.add_modifier(Modifier::SLOW_BLINK)),
            Span::styled(after, colors.highlight),
        ]);
    }

    match view.field.kind() {
        FieldKind::Choice => {
            let mut spans = vec![Span::raw("    ")];
            for choice in &view.choices {
                let style = if choice.active {
                    colors.accent.add_modifier(Modifier::REVERSED)
                } else {
                    colors.text
                };
                spans.push(Span::styled(format!("[{}]", choice.bucket), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        }
        FieldKind::Avatar if view.value.is_empty() => Line::from(Span::styled(
            format!("    (none) [a] change photo ({})", view.accept.join(", ")),
            colors.placeholder,
        )),
        FieldKind::Avatar => Line::from(vec![
            Span::styled(format!("    {} ", view.value), colors.text),
            Span::styled("[a] change photo  [x] remove", colors.muted),
        ]),
        _ if view.value.is_empty() => Line::from(Span::styled(
            format!("    {}", view.placeholder),
            colors.placeholder,
        )),
        _ => Line::from(Span::styled(format!("    {}", view.value), colors.text)),
    }
}

/// Number of lines drawn above the field at `index`.
fn lines_before(fields: &[&FieldView], index: usize) -> usize {
    fields
        .iter()
        .take(index)
        .map(|view| {
            3 + usize::from(view.error.is_some()) + usize::from(view.description.is_some())
        })
        .sum()
}
