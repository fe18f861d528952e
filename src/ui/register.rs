//! Registration screen: a centered account creation form.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, RegisterField};
use crate::ui::components::{calculate_input_field_height, render_input_field, InputFieldConfig};
use crate::ui::login::centered_box;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Render the registration screen.
pub fn render_register(frame: &mut Frame, app: &App) {
    let form = &app.register_form;

    let fields = [
        InputFieldConfig::new("Name", &form.name)
            .focused(form.focus == RegisterField::Name)
            .error(form.name_error.as_deref()),
        InputFieldConfig::new("Email", &form.email)
            .focused(form.focus == RegisterField::Email)
            .placeholder("you@example.com")
            .error(form.email_error.as_deref()),
        InputFieldConfig::new("Password", &form.password)
            .focused(form.focus == RegisterField::Password)
            .password(true)
            .error(form.password_error.as_deref()),
        InputFieldConfig::new("Confirm password", &form.confirm)
            .focused(form.focus == RegisterField::Confirm)
            .password(true)
            .error(form.confirm_error.as_deref()),
    ];

    let fields_height: u16 = fields.iter().map(calculate_input_field_height).sum();
    let area = centered_box(frame.area(), 60, fields_height + 6);

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
            "Create an account",
            Style::default().fg(COLOR_DIM),
        )))
        .centered(),
        title_area,
    );

    let mut y = fields_area.y;
    for field in fields {
        let field_area = Rect {
            x: fields_area.x,
            y,
            width: fields_area.width,
            height: calculate_input_field_height(&field),
        };
        y += render_input_field(frame, field_area, &field);
    }

    let status = if app.register_in_flight {
        "Creating account..."
    } else {
        "Enter register · Tab next field · Ctrl+L sign in · Esc back"
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
