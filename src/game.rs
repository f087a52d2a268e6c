//! A match in progress: board, side to move and move history

use crate::board::{Board, Color, Dimensions, Move, Pos};
use crate::error::{EngineError, Result};
use crate::rules::{self, has_legal_move, is_game_over, is_stalled, Outcome};

/// Game state with automatic turn handling.
///
/// Black moves first. A side may only pass when it has no legal move, and
/// the game ends when the board is over or neither side can move.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    to_move: Color,
    history: Vec<Move>,
}

impl Game {
    /// New game on an empty grid with the four-disc opening.
    pub fn new(dims: Dimensions) -> Self {
        Self::from_position(Board::initial(dims), Color::Black)
    }

    /// New game on the 9x7 board.
    pub fn tournament() -> Self {
        Self::new(Dimensions::TOURNAMENT)
    }

    /// Resume from an arbitrary position.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Moves played so far, passes included.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn legal_moves(&self) -> Vec<Pos> {
        rules::legal_moves(&self.board, self.to_move)
    }

    /// Place a disc for the side to move and hand the turn over.
    pub fn play(&mut self, pos: Pos) -> Result<()> {
        if self.is_finished() {
            return Err(EngineError::GameOver);
        }
        self.board = rules::apply(&self.board, pos, self.to_move)?;
        self.history.push(Move::Place(pos));
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Pass the turn. Only allowed when the side to move has no legal move.
    pub fn pass(&mut self) -> Result<()> {
        if self.is_finished() {
            return Err(EngineError::GameOver);
        }
        if has_legal_move(&self.board, self.to_move) {
            return Err(EngineError::PassNotAllowed {
                color: self.to_move,
            });
        }
        self.history.push(Move::Pass);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Apply a placement or a pass.
    pub fn play_move(&mut self, mv: Move) -> Result<()> {
        match mv {
            Move::Place(pos) => self.play(pos),
            Move::Pass => self.pass(),
        }
    }

    /// Board over, or neither side able to move.
    pub fn is_finished(&self) -> bool {
        is_game_over(&self.board) || is_stalled(&self.board)
    }

    /// Final result, `None` while the game is running.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_finished().then(|| rules::outcome(&self.board))
    }

    /// Disc counts as `(black, white)`.
    pub fn scores(&self) -> (u32, u32) {
        (self.board.black_count(), self.board.white_count())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::tournament()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::tournament();
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(game.scores(), (2, 2));
        assert_eq!(game.legal_moves().len(), 4);
        assert!(!game.is_finished());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_play_advances_turn() {
        let mut game = Game::tournament();
        game.play(Pos::new(2, 3)).unwrap();
        assert_eq!(game.to_move(), Color::White);
        assert_eq!(game.scores(), (4, 1));
        assert_eq!(game.history(), &[Move::Place(Pos::new(2, 3))]);
    }

    #[test]
    fn test_illegal_play_keeps_state() {
        let mut game = Game::tournament();
        let before = game.clone();
        assert!(matches!(
            game.play(Pos::new(0, 0)),
            Err(EngineError::IllegalMove { .. })
        ));
        assert!(matches!(
            game.play(Pos::new(9, 0)),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn test_pass_only_when_stuck() {
        let mut game = Game::tournament();
        assert_eq!(
            game.pass(),
            Err(EngineError::PassNotAllowed {
                color: Color::Black
            })
        );

        // Black cannot bracket the corner disc; white can play (2,0)
        let mut board = Board::new(Dimensions::TOURNAMENT);
        board.place(Pos::new(0, 0), Color::White);
        board.place(Pos::new(1, 0), Color::Black);
        let mut game = Game::from_position(board, Color::Black);
        assert!(!game.is_finished());
        game.play_move(Move::Pass).unwrap();
        assert_eq!(game.to_move(), Color::White);
        game.play_move(Move::Place(Pos::new(2, 0))).unwrap();

        // White wiped out black
        assert!(game.is_finished());
        assert_eq!(game.outcome(), Some(Outcome::Win(Color::White)));
        assert_eq!(game.play(Pos::new(3, 0)), Err(EngineError::GameOver));
        assert_eq!(game.history(), &[Move::Pass, Move::Place(Pos::new(2, 0))]);
    }

    #[test]
    fn test_stalled_game_is_finished() {
        let mut board = Board::new(Dimensions::TOURNAMENT);
        board.place(Pos::new(0, 0), Color::Black);
        board.place(Pos::new(8, 6), Color::White);
        board.place(Pos::new(8, 5), Color::White);
        let game = Game::from_position(board, Color::Black);
        assert!(game.is_finished());
        assert_eq!(game.outcome(), Some(Outcome::Win(Color::White)));
    }

    #[test]
    fn test_play_out_small_game() {
        let mut game = Game::new(Dimensions::new(4, 4).unwrap());
        while !game.is_finished() {
            let mv = game
                .legal_moves()
                .first()
                .copied()
                .map_or(Move::Pass, Move::Place);
            game.play_move(mv).unwrap();
            assert!(game.history().len() <= 40);
        }
        let (black, white) = game.scores();
        assert!(black + white <= 16);
        assert!(game.outcome().is_some());
    }
}
