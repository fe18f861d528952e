//! Color theme constants for the Shelf UI.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for titles and the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Skeleton placeholder cells while data loads
pub const COLOR_SKELETON: Color = Color::DarkGray;

/// Selected table row highlight
pub const COLOR_SELECTED: Color = Color::LightGreen;

/// Error text and failure toasts
pub const COLOR_ERROR: Color = Color::Red;

/// Success toasts
pub const COLOR_SUCCESS: Color = Color::LightGreen;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);
