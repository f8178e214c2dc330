use ratatui::layout::{Position, Rect};

use crate::games::GameKind;

const SELECT_WIDTH: u16 = 22;
const BUTTON_WIDTH: u16 = 12;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;
const MENU_TOP: u16 = 7;
const MENU_ROW_STEP: u16 = 4;

/// Rows reserved at the top of the screen during play (the aim game's
/// "Remaining" band); targets never spawn inside it.
pub const HEADER_ROWS: u16 = 3;

/// Named hit-test regions for the current frame.
///
/// The renderer computes these from the frame area and draws its buttons at
/// exactly these rectangles; the flow controller hit-tests clicks against
/// the same values, so what you click is what you see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub reaction_select: Rect,
    pub aim_select: Rect,
    pub number_select: Rect,
    pub sequence_select: Rect,
    pub start: Rect,
    pub save: Rect,
    pub try_again: Rect,
    /// Aim target spawn area; the header band is excluded.
    pub play_area: Rect,
}

impl Regions {
    pub fn compute(area: Rect) -> Self {
        let select_x = area.x + area.width.saturating_sub(SELECT_WIDTH) / 2;
        let select = |row: u16| {
            let rect = Rect {
                x: select_x,
                y: area.y + MENU_TOP + row * MENU_ROW_STEP,
                width: SELECT_WIDTH,
                height: BUTTON_HEIGHT,
            };
            rect.intersection(area)
        };

        let bottom_y = (area.y + area.height).saturating_sub(BUTTON_HEIGHT + 1);
        let start = Rect {
            x: area.x + area.width.saturating_sub(BUTTON_WIDTH) / 2,
            y: bottom_y,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        };
        let pair_width = BUTTON_WIDTH * 2 + BUTTON_GAP;
        let save = Rect {
            x: area.x + area.width.saturating_sub(pair_width) / 2,
            y: bottom_y,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        };
        let try_again = Rect {
            x: save.x + BUTTON_WIDTH + BUTTON_GAP,
            y: bottom_y,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        };

        let play_area = Rect {
            x: area.x,
            y: area.y + HEADER_ROWS.min(area.height),
            width: area.width,
            height: area.height.saturating_sub(HEADER_ROWS),
        };

        Self {
            reaction_select: select(0),
            aim_select: select(1),
            number_select: select(2),
            sequence_select: select(3),
            start: start.intersection(area),
            save: save.intersection(area),
            try_again: try_again.intersection(area),
            play_area,
        }
    }

    /// Which game-select button the pointer is over, if any.
    pub fn selected_game(&self, pointer: (u16, u16)) -> Option<GameKind> {
        let buttons = [
            (self.reaction_select, GameKind::Reaction),
            (self.aim_select, GameKind::Aim),
            (self.number_select, GameKind::Number),
            (self.sequence_select, GameKind::Sequence),
        ];

        buttons
            .into_iter()
            .find(|(rect, _)| contains(*rect, pointer))
            .map(|(_, kind)| kind)
    }
}

pub fn contains(rect: Rect, pointer: (u16, u16)) -> bool {
    rect.contains(Position::new(pointer.0, pointer.1))
}
