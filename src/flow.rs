use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::games::{GameKind, Session};
use crate::input::FrameInput;
use crate::layout::{contains, Regions};
use crate::score::{Score, ScoreBoard};

/// Top-level screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Menu,
    Pregame,
    Game,
    Endgame,
}

/// Owns the whole game: the flow state, the selected variant, the live
/// session, the best scores, and the RNG every session draws from.
///
/// One `update` per loop step; the renderer reads the same struct between
/// steps and never mutates it.
#[derive(Debug)]
pub struct GameFlow {
    pub state: FlowState,
    /// Chosen in the menu; sticks across pregame/game/endgame and is never
    /// cleared once set.
    pub selected: Option<GameKind>,
    /// Allocated on game start; kept through endgame so the results screen
    /// can show the session's final state.
    pub session: Option<Session>,
    pub scores: ScoreBoard,
    pub final_score: Option<Score>,
    rng: StdRng,
}

impl GameFlow {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic wait times, target positions, and digit sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: FlowState::Menu,
            selected: None,
            session: None,
            scores: ScoreBoard::new(),
            final_score: None,
            rng,
        }
    }

    /// Jump to a game's pregame screen, as the menu buttons (and the
    /// `--game` flag) do. No per-round state is allocated yet.
    pub fn open_pregame(&mut self, kind: GameKind) {
        self.selected = Some(kind);
        self.final_score = None;
        self.state = FlowState::Pregame;
    }

    /// Advance the application by one step of `delta_ms` wall-clock time.
    pub fn update(&mut self, delta_ms: f64, input: &FrameInput, regions: &Regions) {
        match self.state {
            FlowState::Menu => self.update_menu(input, regions),
            FlowState::Pregame => self.update_pregame(input, regions),
            FlowState::Game => self.update_game(delta_ms, input, regions),
            FlowState::Endgame => self.update_endgame(input, regions),
        }
    }

    fn update_menu(&mut self, input: &FrameInput, regions: &Regions) {
        if !input.clicked {
            return;
        }

        if let Some(kind) = regions.selected_game(input.pointer) {
            self.open_pregame(kind);
        }
    }

    fn update_pregame(&mut self, input: &FrameInput, regions: &Regions) {
        if input.clicked && contains(regions.start, input.pointer) {
            self.reset_game(regions);
        }
    }

    fn update_game(&mut self, delta_ms: f64, input: &FrameInput, regions: &Regions) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Some(score) = session.update(delta_ms, input, regions.play_area, &mut self.rng) {
            self.final_score = Some(score);
            self.state = FlowState::Endgame;
        }
    }

    fn update_endgame(&mut self, input: &FrameInput, regions: &Regions) {
        if !input.clicked {
            return;
        }

        if contains(regions.save, input.pointer) {
            if let Some(score) = self.final_score {
                self.scores.record_if_better(score);
            }
            self.state = FlowState::Menu;
        } else if contains(regions.try_again, input.pointer) {
            self.reset_game(regions);
        }
    }

    /// Allocate a brand-new session for the selected kind and enter Game.
    /// The previous session, if any, is dropped here.
    fn reset_game(&mut self, regions: &Regions) {
        let Some(kind) = self.selected else {
            return;
        };

        self.session = Some(Session::new(kind, regions.play_area, &mut self.rng));
        self.final_score = None;
        self.state = FlowState::Game;
    }
}

impl Default for GameFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use ratatui::layout::Rect;

    fn regions() -> Regions {
        Regions::compute(Rect::new(0, 0, 80, 24))
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    fn flow_in_pregame(kind_button: fn(&Regions) -> Rect) -> GameFlow {
        let regions = regions();
        let mut flow = GameFlow::with_seed(11);
        flow.update(16.0, &FrameInput::click(center(kind_button(&regions))), &regions);
        assert_eq!(flow.state, FlowState::Pregame);
        flow
    }

    fn start_game(flow: &mut GameFlow) {
        let regions = regions();
        flow.update(16.0, &FrameInput::click(center(regions.start)), &regions);
        assert_eq!(flow.state, FlowState::Game);
    }

    #[test]
    fn test_menu_click_on_a_button_opens_pregame() {
        let flow = flow_in_pregame(|r| r.aim_select);
        assert_eq!(flow.selected, Some(GameKind::Aim));
        assert!(flow.session.is_none(), "pregame must not allocate a session");
    }

    #[test]
    fn test_menu_click_elsewhere_stays_in_menu() {
        let regions = regions();
        let mut flow = GameFlow::with_seed(11);

        flow.update(16.0, &FrameInput::click((0, 0)), &regions);
        assert_eq!(flow.state, FlowState::Menu);
        assert_eq!(flow.selected, None);
    }

    #[test]
    fn test_menu_hover_without_click_does_nothing() {
        let regions = regions();
        let mut flow = GameFlow::with_seed(11);

        flow.update(16.0, &FrameInput::idle(center(regions.aim_select)), &regions);
        assert_eq!(flow.state, FlowState::Menu);
    }

    #[test]
    fn test_start_allocates_a_fresh_session() {
        let mut flow = flow_in_pregame(|r| r.reaction_select);
        start_game(&mut flow);

        assert_matches!(flow.session, Some(Session::Reaction(_)));
    }

    #[test]
    fn test_pregame_click_off_the_start_button_is_ignored() {
        let regions = regions();
        let mut flow = flow_in_pregame(|r| r.number_select);

        flow.update(16.0, &FrameInput::click((0, 0)), &regions);
        assert_eq!(flow.state, FlowState::Pregame);
        assert!(flow.session.is_none());
    }

    #[test]
    fn test_session_finish_raises_endgame() {
        let regions = regions();
        let mut flow = flow_in_pregame(|r| r.aim_select);
        start_game(&mut flow);

        for _ in 0..30 {
            let target = match flow.session {
                Some(Session::Aim(ref session)) => session.target,
                _ => panic!("expected an aim session"),
            };
            flow.update(50.0, &FrameInput::click(target), &regions);
        }

        assert_eq!(flow.state, FlowState::Endgame);
        let score = flow.final_score.expect("endgame must carry a score");
        assert_eq!(score.kind, GameKind::Aim);
        assert_eq!(score.value, 50);
    }

    #[test]
    fn test_save_commits_the_score_and_returns_to_menu() {
        let regions = regions();
        let mut flow = flow_in_pregame(|r| r.aim_select);
        start_game(&mut flow);

        for _ in 0..30 {
            let target = match flow.session {
                Some(Session::Aim(ref session)) => session.target,
                _ => panic!("expected an aim session"),
            };
            flow.update(40.0, &FrameInput::click(target), &regions);
        }

        flow.update(16.0, &FrameInput::click(center(regions.save)), &regions);
        assert_eq!(flow.state, FlowState::Menu);
        assert_eq!(flow.scores.best(GameKind::Aim), Some(40));
        // The selected kind deliberately survives the trip back to the menu.
        assert_eq!(flow.selected, Some(GameKind::Aim));
    }

    #[test]
    fn test_try_again_starts_a_new_session_of_the_same_kind() {
        let regions = regions();
        let mut flow = flow_in_pregame(|r| r.aim_select);
        start_game(&mut flow);

        for _ in 0..30 {
            let target = match flow.session {
                Some(Session::Aim(ref session)) => session.target,
                _ => panic!("expected an aim session"),
            };
            flow.update(40.0, &FrameInput::click(target), &regions);
        }

        flow.update(16.0, &FrameInput::click(center(regions.try_again)), &regions);
        assert_eq!(flow.state, FlowState::Game);
        assert_eq!(flow.final_score, None);
        assert!(flow.scores.best(GameKind::Aim).is_none(), "try-again must not save");

        match flow.session {
            Some(Session::Aim(ref session)) => {
                assert_eq!(session.remaining, crate::games::aim::TARGET_COUNT)
            }
            _ => panic!("expected a fresh aim session"),
        }
    }

    #[test]
    fn test_endgame_click_elsewhere_is_ignored() {
        let regions = regions();
        let mut flow = flow_in_pregame(|r| r.aim_select);
        start_game(&mut flow);

        for _ in 0..30 {
            let target = match flow.session {
                Some(Session::Aim(ref session)) => session.target,
                _ => panic!("expected an aim session"),
            };
            flow.update(40.0, &FrameInput::click(target), &regions);
        }

        flow.update(16.0, &FrameInput::click((0, 0)), &regions);
        assert_eq!(flow.state, FlowState::Endgame);
    }

    #[test]
    fn test_sequence_game_is_a_silent_noop() {
        let regions = regions();
        let mut flow = flow_in_pregame(|r| r.sequence_select);
        start_game(&mut flow);

        for _ in 0..50 {
            flow.update(100.0, &FrameInput::click((40, 12)), &regions);
        }
        assert_eq!(flow.state, FlowState::Game);
        assert_eq!(flow.final_score, None);
    }

    #[test]
    fn test_switching_kind_in_the_menu_discards_nothing_until_start() {
        let regions = regions();
        let mut flow = flow_in_pregame(|r| r.reaction_select);
        start_game(&mut flow);

        // Sessions only get replaced on the next start, not on selection.
        flow.state = FlowState::Menu;
        flow.update(16.0, &FrameInput::click(center(regions.number_select)), &regions);
        assert_eq!(flow.selected, Some(GameKind::Number));
        assert_matches!(flow.session, Some(Session::Reaction(_)));

        start_game(&mut flow);
        assert_matches!(flow.session, Some(Session::Number(_)));
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let regions = regions();

        let target_of = |flow: &GameFlow| match flow.session {
            Some(Session::Aim(ref session)) => session.target,
            _ => panic!("expected an aim session"),
        };

        let mut first = GameFlow::with_seed(1234);
        first.open_pregame(GameKind::Aim);
        first.update(16.0, &FrameInput::click(center(regions.start)), &regions);

        let mut second = GameFlow::with_seed(1234);
        second.open_pregame(GameKind::Aim);
        second.update(16.0, &FrameInput::click(center(regions.start)), &regions);

        assert_eq!(target_of(&first), target_of(&second));
    }
}
