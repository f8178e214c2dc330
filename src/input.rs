use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Edge-triggered input snapshot consumed by one flow update.
///
/// Crossterm already delivers key presses and mouse clicks as discrete
/// events, so one snapshot is built per event; tick steps use `idle` with
/// the last known pointer position. Nothing in here represents held state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Pointer position in terminal cells.
    pub pointer: (u16, u16),
    /// Left button went down this step.
    pub clicked: bool,
    /// A digit key (0-9) went down this step.
    pub digit: Option<u8>,
    pub backspace: bool,
    pub submit: bool,
}

impl FrameInput {
    pub fn idle(pointer: (u16, u16)) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    pub fn click(pointer: (u16, u16)) -> Self {
        Self {
            pointer,
            clicked: true,
            ..Self::default()
        }
    }

    pub fn press_digit(digit: u8) -> Self {
        Self {
            digit: Some(digit),
            ..Self::default()
        }
    }

    pub fn press_backspace() -> Self {
        Self {
            backspace: true,
            ..Self::default()
        }
    }

    pub fn press_submit() -> Self {
        Self {
            submit: true,
            ..Self::default()
        }
    }

    /// Map a key event onto a snapshot; keys with no gameplay meaning
    /// produce an idle step.
    pub fn from_key(key: &KeyEvent, pointer: (u16, u16)) -> Self {
        let mut input = Self::idle(pointer);

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                input.digit = Some(c as u8 - b'0');
            }
            KeyCode::Backspace => input.backspace = true,
            KeyCode::Enter => input.submit = true,
            _ => {}
        }

        input
    }

    /// Map a mouse event onto a snapshot. Only the left-button down edge
    /// registers as a click; motion just moves the pointer.
    pub fn from_mouse(event: &MouseEvent) -> Self {
        let pointer = (event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Self::click(pointer),
            _ => Self::idle(pointer),
        }
    }
}
