//! Game module - the falling-block session state machine
//!
//! Ties together board, piece, and piece stream. Each tick the session
//! applies the frame's movement intents (validated against the board),
//! advances the gravity accumulator, and locks the piece when it can no
//! longer descend: commit, clear lines, score, level up, spawn the next
//! piece. A spawn that collides immediately ends the session.

use crate::rng::PieceStream;
use crate::tetris::{Board, Piece};
use crate::types::{
    InputFrame, PieceKind, BASE_DROP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS,
    SOFT_DROP_MULTIPLIER,
};

/// Session phase. Title and menu screens live in the presentation layer;
/// the engine itself only plays or has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Complete puzzle session state
#[derive(Debug, Clone)]
pub struct TetrisGame {
    board: Board,
    piece: Piece,
    next_kind: PieceKind,
    stream: PieceStream,
    phase: Phase,
    /// Elapsed time since the last automatic descent
    drop_timer_ms: u32,
    /// Current gravity interval; shrinks as the level rises
    drop_interval_ms: u32,
    score: u32,
    lines: u32,
    level: u32,
}

impl TetrisGame {
    /// Create a new session with the given RNG seed.
    ///
    /// The board starts empty, the first piece sits at the spawn anchor,
    /// and exactly one upcoming kind is visible as the preview.
    pub fn new(seed: u32) -> Self {
        let mut stream = PieceStream::new(seed);
        let piece = Piece::spawn(stream.next());
        let next_kind = stream.next();

        Self {
            board: Board::new(),
            piece,
            next_kind,
            stream,
            phase: Phase::Playing,
            drop_timer_ms: 0,
            drop_interval_ms: BASE_DROP_MS,
            score: 0,
            lines: 0,
            level: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Advance the session by one tick.
    ///
    /// `elapsed_ms` is the host-supplied frame delta; the session never
    /// reads a clock itself. In game over only the confirm signal is
    /// honored and restarts with a fresh board, score, and piece sequence.
    pub fn update(&mut self, elapsed_ms: u32, input: &InputFrame) {
        match self.phase {
            Phase::GameOver => {
                if input.confirm {
                    *self = Self::new(self.stream.state());
                }
            }
            Phase::Playing => self.step(elapsed_ms, input),
        }
    }

    fn step(&mut self, elapsed_ms: u32, input: &InputFrame) {
        if input.move_left && !self.collides(-1, 0) {
            self.piece.x -= 1;
        }
        if input.move_right && !self.collides(1, 0) {
            self.piece.x += 1;
        }
        if input.rotate {
            self.try_rotate();
        }

        if input.hard_drop {
            while !self.collides(0, 1) {
                self.piece.y += 1;
            }
            self.lock_piece();
            // Hard drop consumes the rest of the tick.
            return;
        }

        // Soft drop speeds up gravity; it never teleports the piece.
        let rate = if input.soft_drop {
            SOFT_DROP_MULTIPLIER
        } else {
            1
        };
        self.drop_timer_ms += elapsed_ms * rate;

        if self.drop_timer_ms >= self.drop_interval_ms {
            self.drop_timer_ms = 0;
            if self.collides(0, 1) {
                self.lock_piece();
            } else {
                self.piece.y += 1;
            }
        }
    }

    /// True when the piece's mask, shifted by (dx, dy), hits a wall, the
    /// floor, or a locked cell. Fails closed: any out-of-range placement
    /// counts as blocked.
    fn collides(&self, dx: i8, dy: i8) -> bool {
        self.piece
            .cells_at(dx, dy)
            .any(|(x, y)| self.board.is_occupied(x, y))
    }

    /// Rotate the mask in place; revert wholesale if the result collides.
    /// There are no kick attempts.
    fn try_rotate(&mut self) {
        let saved = self.piece.mask;
        self.piece.rotate();
        if self.collides(0, 0) {
            self.piece.mask = saved;
        }
    }

    fn lock_piece(&mut self) {
        self.board.commit(self.piece.cells(), self.piece.kind);

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            // Score with the level in effect before this clear.
            self.score += LINE_SCORES[cleared as usize] * self.level;
            self.lines += cleared;
            self.level = self.lines / LINES_PER_LEVEL + 1;
            self.drop_interval_ms = (BASE_DROP_MS / self.level).max(MIN_DROP_MS);
        }

        self.piece = Piece::spawn(self.next_kind);
        self.next_kind = self.stream.next();

        // A blocked spawn ends the session; the fresh piece stays
        // uncommitted.
        if self.collides(0, 0) {
            self.phase = Phase::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    fn frame() -> InputFrame {
        InputFrame::empty()
    }

    fn fill_row_except(game: &mut TetrisGame, y: i8, gaps: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&x) {
                game.board.set(x, y, Some(PieceKind::L));
            }
        }
    }

    fn filled_cells(game: &TetrisGame) -> usize {
        game.board.cells().iter().filter(|c| c.is_some()).count()
    }

    #[test]
    fn test_new_session_state() {
        let game = TetrisGame::new(12345);

        assert_eq!(game.phase(), Phase::Playing);
        assert!(!game.game_over());
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.drop_interval_ms(), BASE_DROP_MS);
        assert_eq!((game.piece().x, game.piece().y), (3, 0));
        assert!(game.board().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_i_piece_clamped_at_right_wall() {
        let mut game = TetrisGame::new(1);
        game.piece = Piece::spawn(PieceKind::I);

        let mut right = frame();
        right.move_right = true;

        // Spawn spans columns 3-6; three shifts reach 6-9.
        for _ in 0..3 {
            game.update(0, &right);
        }
        let cols: Vec<i8> = game.piece().cells().map(|(x, _)| x).collect();
        assert_eq!(cols, vec![6, 7, 8, 9]);

        // A fourth shift is rejected by the wall.
        game.update(0, &right);
        assert_eq!(game.piece().x, 6);
    }

    #[test]
    fn test_move_left_clamped_at_left_wall() {
        let mut game = TetrisGame::new(1);
        game.piece = Piece::spawn(PieceKind::I);

        let mut left = frame();
        left.move_left = true;
        for _ in 0..6 {
            game.update(0, &left);
        }
        // Leftmost occupied column is 0; the anchor cannot go below it.
        assert_eq!(game.piece().x, 0);
    }

    #[test]
    fn test_blocked_rotation_reverts_mask_and_anchor() {
        let mut game = TetrisGame::new(1);
        game.piece = Piece::spawn(PieceKind::I);

        // Rotating the spawn I would occupy (5, 0..=3); block one cell.
        game.board.set(5, 3, Some(PieceKind::O));

        let before = game.piece;
        let mut rotate = frame();
        rotate.rotate = true;
        game.update(0, &rotate);

        assert_eq!(game.piece, before);
    }

    #[test]
    fn test_allowed_rotation_applies() {
        let mut game = TetrisGame::new(1);
        game.piece = Piece::spawn(PieceKind::I);

        let mut rotate = frame();
        rotate.rotate = true;
        game.update(0, &rotate);

        let cells: Vec<_> = game.piece().cells().collect();
        assert_eq!(cells, vec![(5, 0), (5, 1), (5, 2), (5, 3)]);
    }

    #[test]
    fn test_gravity_descends_after_interval() {
        let mut game = TetrisGame::new(1);
        let y0 = game.piece().y;

        game.update(BASE_DROP_MS - 1, &frame());
        assert_eq!(game.piece().y, y0);

        game.update(1, &frame());
        assert_eq!(game.piece().y, y0 + 1);
    }

    #[test]
    fn test_soft_drop_doubles_gravity_rate() {
        let mut game = TetrisGame::new(1);
        let y0 = game.piece().y;

        let mut soft = frame();
        soft.soft_drop = true;

        // Half the interval of real time suffices while held.
        game.update(BASE_DROP_MS / 2, &soft);
        assert_eq!(game.piece().y, y0 + 1);
    }

    #[test]
    fn test_hard_drop_locks_at_floor() {
        let mut game = TetrisGame::new(1);
        game.piece = Piece::spawn(PieceKind::I);

        let mut hard = frame();
        hard.hard_drop = true;
        game.update(0, &hard);

        // The bar locked on the bottom row and the next piece spawned.
        for x in 3..7 {
            assert_eq!(
                game.board().get(x, BOARD_HEIGHT as i8 - 1),
                Some(Some(PieceKind::I))
            );
        }
        assert_eq!((game.piece().x, game.piece().y), (3, 0));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_single_line_clear_scores_at_current_level() {
        let mut game = TetrisGame::new(1);
        game.piece = Piece::spawn(PieceKind::I);
        fill_row_except(&mut game, BOARD_HEIGHT as i8 - 1, &[3, 4, 5, 6]);

        let mut hard = frame();
        hard.hard_drop = true;
        game.update(0, &hard);

        assert_eq!(game.lines(), 1);
        assert_eq!(game.score(), LINE_SCORES[1]);
        assert_eq!(game.level(), 1);
        // The cleared row compacted away; the board holds only what shifted.
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(game.board().get(x, 0), Some(None));
        }
    }

    #[test]
    fn test_quad_clear_with_vertical_bar() {
        let mut game = TetrisGame::new(1);
        let mut bar = Piece::spawn(PieceKind::I);
        bar.rotate(); // vertical, occupying column 5
        game.piece = bar;

        for y in 16..20 {
            fill_row_except(&mut game, y, &[5]);
        }

        let mut hard = frame();
        hard.hard_drop = true;
        game.update(0, &hard);

        assert_eq!(game.lines(), 4);
        assert_eq!(game.score(), LINE_SCORES[4]);
        assert!(game.board().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_level_up_recomputes_speed_curve() {
        let mut game = TetrisGame::new(1);
        game.piece = Piece::spawn(PieceKind::I);
        game.lines = 9;
        fill_row_except(&mut game, BOARD_HEIGHT as i8 - 1, &[3, 4, 5, 6]);

        let mut hard = frame();
        hard.hard_drop = true;
        game.update(0, &hard);

        // Tenth line: level 2, but the clear scored at the old level 1.
        assert_eq!(game.lines(), 10);
        assert_eq!(game.level(), 2);
        assert_eq!(game.score(), LINE_SCORES[1]);
        assert_eq!(game.drop_interval_ms(), BASE_DROP_MS / 2);
    }

    #[test]
    fn test_drop_interval_floor() {
        let mut game = TetrisGame::new(1);
        game.piece = Piece::spawn(PieceKind::I);
        // 199 prior lines puts the next clear at level 20.
        game.lines = 199;
        fill_row_except(&mut game, BOARD_HEIGHT as i8 - 1, &[3, 4, 5, 6]);

        let mut hard = frame();
        hard.hard_drop = true;
        game.update(0, &hard);

        assert_eq!(game.level(), 21);
        assert_eq!(game.drop_interval_ms(), MIN_DROP_MS);
    }

    #[test]
    fn test_blocked_spawn_ends_session_without_committing() {
        let mut game = TetrisGame::new(1);

        // A shelf right under the spawn rows (with a gap so it never
        // clears): the current piece locks at the top and every kind
        // overlaps (4, 1), so the next spawn is blocked no matter what
        // the stream produces.
        fill_row_except(&mut game, 2, &[0]);
        let before_lock = filled_cells(&game);

        let mut hard = frame();
        hard.hard_drop = true;
        game.update(0, &hard);

        assert!(game.game_over());
        // Only the locked piece's four cells were added; the ungrounded
        // fresh piece committed nothing.
        assert_eq!(filled_cells(&game), before_lock + 4);
    }

    #[test]
    fn test_game_over_ignores_movement() {
        let mut game = TetrisGame::new(1);
        fill_row_except(&mut game, 2, &[0]);
        let mut hard = frame();
        hard.hard_drop = true;
        game.update(0, &hard);
        assert!(game.game_over());

        let snapshot = game.clone();
        let mut moves = frame();
        moves.move_left = true;
        moves.rotate = true;
        moves.hard_drop = true;
        game.update(1000, &moves);

        assert_eq!(game.piece(), snapshot.piece());
        assert_eq!(game.board(), snapshot.board());
        assert!(game.game_over());
    }

    #[test]
    fn test_confirm_restarts_from_game_over() {
        let mut game = TetrisGame::new(1);
        fill_row_except(&mut game, 2, &[0]);
        let mut hard = frame();
        hard.hard_drop = true;
        game.update(0, &hard);
        assert!(game.game_over());

        let mut confirm = frame();
        confirm.confirm = true;
        game.update(0, &confirm);

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines(), 0);
        assert_eq!(game.level(), 1);
        assert!(game.board().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_gravity_lock_when_descent_blocked() {
        let mut game = TetrisGame::new(1);
        game.piece = Piece::spawn(PieceKind::O);
        // Park the square directly on the floor.
        while !game.collides(0, 1) {
            game.piece.y += 1;
        }

        game.update(BASE_DROP_MS, &frame());

        // The square locked and a fresh piece spawned at the top.
        assert_eq!(game.piece().y, 0);
        assert_eq!(
            game.board().get(3, BOARD_HEIGHT as i8 - 1),
            Some(Some(PieceKind::O))
        );
    }

    #[test]
    fn test_same_seed_same_piece_sequence() {
        let mut a = TetrisGame::new(777);
        let mut b = TetrisGame::new(777);

        let mut hard = frame();
        hard.hard_drop = true;
        for _ in 0..5 {
            a.update(0, &hard);
            b.update(0, &hard);
            assert_eq!(a.piece().kind, b.piece().kind);
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }
}
