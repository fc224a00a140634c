//! Game State Machine
//!
//! Menu, Started, Paused and Gameover, driven by the start button edge and
//! by the rules running out of lives.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Menu,
    Started,
    Paused,
    Gameover,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Start,
    Pause,
    Resume,
    LivesExhausted,
    Continue,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GamePhase,
    pub to_state: GamePhase,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GamePhase,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GamePhase::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> GamePhase {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            tracing::debug!(from = ?from_state, to = ?next_state, ?action, "state transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// The action a start press means in the current state
    pub fn start_action(&self) -> GameAction {
        match self.state {
            GamePhase::Menu => GameAction::Start,
            GamePhase::Started => GameAction::Pause,
            GamePhase::Paused => GameAction::Resume,
            GamePhase::Gameover => GameAction::Continue,
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GamePhase> {
        match (self.state, action) {
            (GamePhase::Menu, GameAction::Start) => Some(GamePhase::Started),

            (GamePhase::Started, GameAction::Pause) => Some(GamePhase::Paused),
            (GamePhase::Started, GameAction::LivesExhausted) => Some(GamePhase::Gameover),

            (GamePhase::Paused, GameAction::Resume) => Some(GamePhase::Started),

            (GamePhase::Gameover, GameAction::Continue) => Some(GamePhase::Menu),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if gameplay is live this frame
    pub fn is_playing(&self) -> bool {
        self.state == GamePhase::Started
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), GamePhase::Menu);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, GamePhase::Menu);
        assert_eq!(result.to_state, GamePhase::Started);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::LivesExhausted);
        assert!(!result.success);
        assert_eq!(result.to_state, GamePhase::Menu);
        assert_eq!(fsm.state(), GamePhase::Menu);
    }

    #[test]
    fn test_pause_cannot_end_the_game() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Pause);
        let result = fsm.transition(GameAction::LivesExhausted);
        assert!(!result.success);
        assert_eq!(result.from_state, GamePhase::Paused);
        fsm.transition(GameAction::Resume);
        assert_eq!(fsm.state(), GamePhase::Started);
    }

    #[test]
    fn test_full_game_flow() {
        let mut fsm = GameFsm::new();
        for expected in [
            GamePhase::Started,
            GamePhase::Paused,
            GamePhase::Started,
        ] {
            let action = fsm.start_action();
            fsm.transition(action);
            assert_eq!(fsm.state(), expected);
        }
        assert!(fsm.transition(GameAction::LivesExhausted).success);
        assert_eq!(fsm.state(), GamePhase::Gameover);
        let action = fsm.start_action();
        assert_eq!(action, GameAction::Continue);
        fsm.transition(action);
        assert_eq!(fsm.state(), GamePhase::Menu);
    }
}
