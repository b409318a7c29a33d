//! Main UI rendering for the settings TUI.
//!
//! Lays out the header, the section navigation, the form panel for the
//! current section and the status bar, then draws overlays on top.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use super::app::{App, AppState, StatusKind};
use super::colors::TuiColors;
use super::widgets::{FormFocus, FormPanel, NavBar};
use crate::profile::{FieldView, PagePhase, ProfileField};

/// Help overlay width as percentage of screen.
const HELP_WIDTH_PERCENT: u16 = 55;
/// Help overlay height as percentage of screen.
const HELP_HEIGHT_PERCENT: u16 = 75;
/// Avatar prompt width as percentage of screen.
const PROMPT_WIDTH_PERCENT: u16 = 60;
/// Width of the navigation column.
const NAV_WIDTH: u16 = 22;

/// Main draw function, called once per frame.
///
/// # Arguments
///
/// * `frame` - The Ratatui frame to render into
/// * `app` - Reference to the application state
/// * `colors` - The color scheme to use for rendering
pub fn draw(frame: &mut Frame, app: &App, colors: &TuiColors) {
    let area = frame.area();
    let view = app.page.render();

    let outer = Block::default()
        .title(format!(" {} ", view.title))
        .title_style(colors.title.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.accent);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(NAV_WIDTH), Constraint::Min(30)])
        .split(rows[0]);

    NavBar::new().render(
        columns[0],
        frame.buffer_mut(),
        &view.navigation,
        app.selected_section,
        colors,
    );

    let section = app.current_section();
    let fields: Vec<&FieldView> = view.fields_in(section).collect();
    let editing = match &app.state {
        AppState::EditingField { text_input, .. } => Some(text_input),
        _ => None,
    };
    FormPanel::new().render(
        columns[1],
        frame.buffer_mut(),
        section.label(),
        &fields,
        FormFocus {
            selected_field: app.selected_field,
            editing,
        },
        colors,
    );

    draw_status_bar(frame, rows[1], app, view.phase, colors);

    if let AppState::AvatarPrompt { text_input } = &app.state {
        draw_avatar_prompt(frame, area, text_input, colors);
    }

    if app.show_help {
        draw_help_overlay(frame, area, colors);
    }
}

/// Draws the status message, or keybinding hints when there is none.
fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, phase: PagePhase, colors: &TuiColors) {
    if let Some(message) = &app.status_message {
        let style = match message.kind {
            StatusKind::Info => colors.primary,
            StatusKind::Success => colors.success,
            StatusKind::Error => colors.error,
        };
        frame.render_widget(Paragraph::new(Span::styled(&message.text, style)), area);
        return;
    }

    let keybindings: &[(&str, &str)] = if app.state.is_typing() {
        &[("[Enter]", "Save"), ("[Esc]", "Cancel")]
    } else {
        &[
            ("[Tab]", "Section"),
            ("[j/k]", "Field"),
            ("[Enter]", "Edit"),
            ("[Ctrl+S]", "Submit"),
            ("[Ctrl+R]", "Reset"),
            ("[?]", "Help"),
        ]
    };

    let phase_label = match phase {
        PagePhase::Editing => "Editing",
        PagePhase::Validating => "Validating",
        PagePhase::Submitted => "Submitted",
        PagePhase::Invalid => "Invalid",
    };
    let mut spans = vec![Span::styled(
        format!(
            "[{} {}/{}] ",
            phase_label,
            app.page.draft().filled_count(),
            ProfileField::ALL.len()
        ),
        colors.accent.add_modifier(Modifier::BOLD),
    )];
    for (i, (key, desc)) in keybindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", colors.text));
        }
        spans.push(Span::styled(*key, colors.accent));
        spans.push(Span::styled(format!(" {}", desc), colors.muted));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draws the avatar path prompt as a small modal.
fn draw_avatar_prompt(
    frame: &mut Frame,
    area: Rect,
    text_input: &super::text_input::TextInput,
    colors: &TuiColors,
) {
    let width = area.width * PROMPT_WIDTH_PERCENT / 100;
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(5) / 2,
        width,
        5.min(area.height),
    );
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Attach avatar (SVG, PNG, JPG) ")
        .title_style(colors.title)
        .borders(Borders::ALL)
        .border_style(colors.accent);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let (before, after) = text_input.split_at_cursor();
    let lines = vec![
        Line::from(vec![
            Span::styled(before, colors.highlight),
            Span::styled("_", colors.highlight),
            Span::styled(after, colors.highlight),
        ]),
        Line::from(Span::styled("[Enter] Attach  [Esc] Cancel", colors.muted)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the help overlay popup.
fn draw_help_overlay(frame: &mut Frame, area: Rect, colors: &TuiColors) {
    let popup_area = centered_rect(area, HELP_WIDTH_PERCENT, HELP_HEIGHT_PERCENT);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(colors.title)
        .borders(Borders::ALL)
        .border_style(colors.accent);
    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let keybindings: [(&str, &str); 17] = [
        ("Navigation", ""),
        ("Tab / Shift+Tab", "Cycle through sections"),
        ("h / l", "Previous / next section"),
        ("1-5", "Jump to section"),
        ("↑ / k", "Previous field"),
        ("↓ / j", "Next field"),
        ("", ""),
        ("Editing", ""),
        ("Enter", "Edit selected field"),
        ("← / →", "Change employee count"),
        ("a", "Change photo from a file"),
        ("x", "Remove photo"),
        ("Ctrl+S", "Submit the profile"),
        ("Ctrl+R", "Discard all changes"),
        ("", ""),
        ("?", "Toggle this help overlay"),
        ("q / Esc", "Quit the application"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            "Keybindings",
            colors.highlight.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, description) in keybindings {
        if key.is_empty() && description.is_empty() {
            lines.push(Line::from(""));
        } else if description.is_empty() {
            lines.push(Line::from(Span::styled(
                key,
                colors.label.add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("{:16}", key), colors.accent),
                Span::styled(description, colors.text),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner_area);
}

/// Creates a centered rectangle within the given area.
///
/// # Arguments
///
/// * `area` - The outer area to center within
/// * `percent_x` - Width as a percentage of the outer area (0-100)
/// * `percent_y` - Height as a percentage of the outer area (0-100)
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_support::buffered_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw(frame, app, &TuiColors::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_shows_title_and_navigation() {
        let app = buffered_app();
        let text = screen_text(&app);

        assert!(text.contains("Settings"));
        assert!(text.contains("Company Info"));
        assert!(text.contains("Integrations"));
        assert!(text.contains("Avatar"));
    }

    #[test]
    fn test_status_bar_counts_filled_fields() {
        let mut app = buffered_app();
        assert!(screen_text(&app).contains("[Editing 1/11]"));

        app.page.on_field_change(ProfileField::CompanyName, "Acme");
        assert!(screen_text(&app).contains("[Editing 2/11]"));
    }

    #[test]
    fn test_draw_shows_status_message() {
        let mut app = buffered_app();
        app.submit();
        let text = screen_text(&app);
        assert!(text.contains("field(s) need attention"));
    }

    #[test]
    fn test_draw_help_overlay() {
        let mut app = buffered_app();
        app.show_help = true;
        let text = screen_text(&app);
        assert!(text.contains("Keybindings"));
        assert!(text.contains("Submit the profile"));
        assert!(text.contains("Remove photo"));
    }

    #[test]
    fn test_draw_avatar_prompt() {
        let mut app = buffered_app();
        app.focus_field(ProfileField::UserAvatar);
        app.open_avatar_prompt();
        app.input_char('x');
        let text = screen_text(&app);
        assert!(text.contains("Attach avatar"));
        assert!(text.contains("x_"));
    }

    #[test]
    fn test_centered_rect_basic() {
        let area = Rect::new(0, 0, 100, 50);
        let centered = centered_rect(area, 50, 50);

        assert_eq!(centered.width, 50);
        assert_eq!(centered.height, 25);
        assert_eq!(centered.x, 25);
        assert_eq!(centered.y, 12);
    }

    #[test]
    fn test_centered_rect_with_offset() {
        let area = Rect::new(10, 5, 100, 50);
        let centered = centered_rect(area, 50, 50);

        assert_eq!(centered.x, 35);
        assert_eq!(centered.y, 17);
    }
}
