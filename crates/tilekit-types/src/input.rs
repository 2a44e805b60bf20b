//! Platform-agnostic input event types.
//!
//! The windowing collaborator maps its native callbacks to these events.
//! The scene only consumes [`InputEvent::WindowResize`]; the rest are
//! forwarded to whatever widgets sit on top of the tiles.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The window's drawable area changed size.
    WindowResize { width: u32, height: u32 },
    /// Cursor moved to an absolute position (pixels, origin at the center).
    CursorMove { x: i32, y: i32 },
    /// A mouse button changed state at the given cursor position.
    MouseButton {
        button: MouseButton,
        pressed: bool,
        x: i32,
        y: i32,
    },
    /// A keyboard key changed state.
    Key { code: u32, pressed: bool },
    /// User requested quit (window close, etc.).
    Quit,
}

/// Mouse buttons that map across all platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl InputEvent {
    /// Cursor position carried by the event, if any.
    pub fn cursor(&self) -> Option<(i32, i32)> {
        match *self {
            Self::CursorMove { x, y } | Self::MouseButton { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_event_equality() {
        let e = InputEvent::WindowResize {
            width: 800,
            height: 600,
        };
        assert_eq!(
            e,
            InputEvent::WindowResize {
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn cursor_from_move_and_click() {
        assert_eq!(InputEvent::CursorMove { x: -3, y: 7 }.cursor(), Some((-3, 7)));
        let click = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
            x: 1,
            y: 2,
        };
        assert_eq!(click.cursor(), Some((1, 2)));
    }

    #[test]
    fn non_pointer_events_have_no_cursor() {
        assert_eq!(InputEvent::Quit.cursor(), None);
        assert_eq!(
            InputEvent::Key {
                code: 32,
                pressed: true
            }
            .cursor(),
            None
        );
    }
}
