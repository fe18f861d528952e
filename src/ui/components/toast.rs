//! Toast notifications.
//!
//! Short-lived messages rendered in the top-right corner. The app layer
//! pushes exactly one toast per failed API call; toasts expire on the tick
//! timer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use crate::ui::theme::{COLOR_ERROR, COLOR_SUCCESS};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One on-screen notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
}

impl Toast {
    /// Create a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Create an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Whether this toast has outlived its TTL.
    pub fn expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_TTL
    }
}

/// Render the toast stack in the top-right corner of `area`.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let mut y = area.y + 1;
    for toast in toasts {
        let width = (toast.message.chars().count() as u16 + 4)
            .min(area.width.saturating_sub(4))
            .max(10);
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + 2),
            y,
            width,
            height: 3,
        };
        if toast_area.bottom() > area.bottom() {
            break;
        }

        let color = match toast.kind {
            ToastKind::Success => COLOR_SUCCESS,
            ToastKind::Error => COLOR_ERROR,
        };

        frame.render_widget(Clear, toast_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));
        frame.render_widget(
            Paragraph::new(Span::styled(
                toast.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .block(block)
            .centered(),
            toast_area,
        );

        y += 3;
    }
}
