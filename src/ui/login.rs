//! Login screen: a centered sign-in form.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoginField};
use crate::ui::components::{calculate_input_field_height, render_input_field, InputFieldConfig};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Render the login screen.
pub fn render_login(frame: &mut Frame, app: &App) {
    let form = &app.login_form;

    let email = InputFieldConfig::new("Email", &form.email)
        .focused(form.focus == LoginField::Email)
        .placeholder("you@example.com")
        .error(form.email_error.as_deref());
    let password = InputFieldConfig::new("Password", &form.password)
        .focused(form.focus == LoginField::Password)
        .password(true)
        .error(form.password_error.as_deref());

    let form_height = 2 // title + spacer
        + calculate_input_field_height(&email)
        + calculate_input_field_height(&password)
        + 2; // status + hints
    let area = centered_box(frame.area(), 60, form_height + 2);

    let block = Block::default()
        .title(Span::styled(
            " Shelf ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, _, fields_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Sign in to your account",
            Style::default().fg(COLOR_DIM),
        )))
        .centered(),
        title_area,
    );

    let mut y = fields_area.y;
    for field in [email, password] {
        let field_area = Rect {
            x: fields_area.x,
            y,
            width: fields_area.width,
            height: calculate_input_field_height(&field),
        };
        y += render_input_field(frame, field_area, &field);
    }

    let status = if app.login_in_flight {
        "Signing in..."
    } else {
        "Enter sign in · Tab next field · Ctrl+R register · Esc quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            status,
            Style::default().fg(COLOR_DIM),
        )))
        .centered(),
        status_area,
    );
}

/// A box of at most `width`x`height` centered in `area`.
pub(crate) fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_box_centers() {
        let area = Rect::new(0, 0, 100, 40);
        let boxed = centered_box(area, 60, 20);
        assert_eq!(boxed, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_box_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let boxed = centered_box(area, 60, 20);
        assert_eq!(boxed, Rect::new(0, 0, 40, 10));
    }
}
