//! Theme and Colors
//!
//! The single dark palette: near-black background, charcoal rows, and the
//! material purple that marks a completed task.
//!
//! RGB tuples are exposed alongside the `Color` constants for the places that
//! blend channels (the check-mark fade).

use ratatui::style::Color;

// ============================================================================
// Surfaces
// ============================================================================

/// App background - near black
pub const BACKGROUND: Color = Color::Rgb(0x12, 0x12, 0x12);

/// Task row background - charcoal
pub const ROW: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const ROW_RGB: (u8, u8, u8) = (0x33, 0x33, 0x33);

/// Completed task row - material purple
pub const ROW_DONE: Color = Color::Rgb(0x67, 0x50, 0xa4);
pub const ROW_DONE_RGB: (u8, u8, u8) = (0x67, 0x50, 0xa4);

// ============================================================================
// Text
// ============================================================================

/// Primary text - white
pub const TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);

/// Completion check mark (fades in over the row color)
pub const CHECK_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);

/// Header subtitle and key hints - grey
pub const SUBTITLE: Color = Color::Rgb(0x80, 0x80, 0x80);

/// Input placeholder text
pub const PLACEHOLDER: Color = Color::Rgb(0xaa, 0xaa, 0xaa);

/// Separator above the input field
pub const BORDER: Color = Color::Rgb(0x33, 0x33, 0x33);

/// Selection accent in the task list
pub const ACCENT: Color = Color::Rgb(0xd0, 0xbc, 0xff);
