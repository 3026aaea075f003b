//! Client-held session state for the interactive mines board.
//!
//! One [`BoardSession`] covers a single play-through from creation to reset.
//! The phases form a small machine: `Idle -> Active -> {Active, Busted}`,
//! with `Reset` as the only way back to `Idle`. The server owns the running
//! statistics; the reducer only replaces them wholesale with what the click
//! endpoint returns.

use shared::MinesStatsDto;
use std::rc::Rc;
use yew::prelude::*;

/// Allowed grid sizes with their bomb-count bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPreset {
    pub size: u32,
    pub default_bombs: u32,
    pub min_bombs: u32,
    pub max_bombs: u32,
}

pub const GRID_PRESETS: [GridPreset; 4] = [
    GridPreset { size: 5, default_bombs: 3, min_bombs: 1, max_bombs: 10 },
    GridPreset { size: 6, default_bombs: 5, min_bombs: 2, max_bombs: 14 },
    GridPreset { size: 8, default_bombs: 8, min_bombs: 4, max_bombs: 26 },
    GridPreset { size: 10, default_bombs: 15, min_bombs: 6, max_bombs: 40 },
];

pub fn preset_for(size: u32) -> &'static GridPreset {
    GRID_PRESETS
        .iter()
        .find(|preset| preset.size == size)
        .unwrap_or(&GRID_PRESETS[0])
}

/// Clamps a manually edited bomb count into the preset's allowed range.
pub fn clamp_bombs(size: u32, requested: u32) -> u32 {
    let preset = preset_for(size);
    requested.clamp(preset.min_bombs, preset.max_bombs)
}

/// Draws the outcome of a tile click. Stand-in for a backend-determined
/// board: the click endpoint records the outcome but does not decide it, so
/// swapping in an authoritative source replaces this function only, not the
/// reducer.
pub fn draw_safe_outcome() -> bool {
    js_sys::Math::random() > 0.3
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    Idle,
    Active,
    Busted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCell {
    pub revealed: bool,
    pub is_mine: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardSession {
    pub phase: BoardPhase,
    pub game_id: Option<String>,
    pub grid_size: u32,
    pub cells: Vec<BoardCell>,
    pub stats: MinesStatsDto,
}

impl Default for BoardSession {
    fn default() -> Self {
        Self {
            phase: BoardPhase::Idle,
            game_id: None,
            grid_size: 0,
            cells: Vec::new(),
            stats: MinesStatsDto::fresh(0, 0),
        }
    }
}

impl BoardSession {
    pub fn cell_at(&self, x: u32, y: u32) -> Option<&BoardCell> {
        if x >= self.grid_size || y >= self.grid_size {
            return None;
        }
        self.cells.get((y * self.grid_size + x) as usize)
    }

    /// A click is meaningful only on an unrevealed cell of an active board.
    pub fn accepts_click(&self, x: u32, y: u32) -> bool {
        self.phase == BoardPhase::Active
            && self.cell_at(x, y).map(|cell| !cell.revealed).unwrap_or(false)
    }
}

pub enum BoardAction {
    /// Session created on the server. `num_bombs` is the confirmed count,
    /// which seeds the local statistics.
    Start {
        game_id: String,
        grid_size: u32,
        num_bombs: u32,
    },
    /// A click the server acknowledged. Reveals exactly one cell and replaces
    /// the statistics with the server's.
    Move {
        x: u32,
        y: u32,
        safe: bool,
        stats: MinesStatsDto,
    },
    /// Clears the session back to the configuration form. No server call.
    Reset,
}

impl Reducible for BoardSession {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BoardAction::Start {
                game_id,
                grid_size,
                num_bombs,
            } => Rc::new(Self {
                phase: BoardPhase::Active,
                game_id: Some(game_id),
                grid_size,
                cells: vec![BoardCell::default(); (grid_size * grid_size) as usize],
                stats: MinesStatsDto::fresh(grid_size, num_bombs),
            }),
            BoardAction::Move { x, y, safe, stats } => {
                if !self.accepts_click(x, y) {
                    // Busted boards and re-clicked cells stay untouched.
                    return self;
                }
                let mut next = (*self).clone();
                let index = (y * next.grid_size + x) as usize;
                next.cells[index] = BoardCell {
                    revealed: true,
                    is_mine: !safe,
                };
                next.stats = stats;
                if !safe {
                    next.phase = BoardPhase::Busted;
                }
                Rc::new(next)
            }
            BoardAction::Reset => Rc::new(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(grid_size: u32, num_bombs: u32) -> Rc<BoardSession> {
        Rc::new(BoardSession::default()).reduce(BoardAction::Start {
            game_id: "mines_1".to_string(),
            grid_size,
            num_bombs,
        })
    }

    fn moved(session: Rc<BoardSession>, x: u32, y: u32, safe: bool) -> Rc<BoardSession> {
        let stats = MinesStatsDto {
            total_clicks: session.stats.total_clicks + 1,
            ..session.stats.clone()
        };
        session.reduce(BoardAction::Move { x, y, safe, stats })
    }

    #[test]
    fn test_start_builds_a_full_unrevealed_grid() {
        let session = started(5, 3);
        assert_eq!(session.phase, BoardPhase::Active);
        assert_eq!(session.cells.len(), 25);
        assert!(session.cells.iter().all(|cell| !cell.revealed));
        assert_eq!(session.game_id.as_deref(), Some("mines_1"));
    }

    #[test]
    fn test_start_seeds_stats_from_the_confirmed_bomb_count() {
        let session = started(5, 3);
        assert_eq!(session.stats.bombs_remaining, 3);
        assert_eq!(session.stats.remaining_safe, 22);
        assert_eq!(session.stats.safe_clicks, 0);
        assert_eq!(session.stats.total_clicks, 0);
    }

    #[test]
    fn test_safe_move_reveals_exactly_one_cell() {
        let session = moved(started(5, 3), 2, 1, true);
        assert_eq!(session.phase, BoardPhase::Active);
        let revealed: Vec<usize> = session
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.revealed)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(revealed, vec![7]);
        assert!(!session.cells[7].is_mine);
    }

    #[test]
    fn test_move_replaces_stats_wholesale() {
        let session = started(5, 3);
        let stats = MinesStatsDto {
            safe_clicks: 4,
            bombs_hit: 0,
            total_clicks: 4,
            bombs_remaining: 3,
            remaining_safe: 18,
        };
        let session = session.reduce(BoardAction::Move {
            x: 0,
            y: 0,
            safe: true,
            stats: stats.clone(),
        });
        assert_eq!(session.stats, stats);
    }

    #[test]
    fn test_unsafe_move_busts_immediately() {
        let session = moved(started(5, 3), 4, 4, false);
        assert_eq!(session.phase, BoardPhase::Busted);
        assert!(session.cells[24].revealed);
        assert!(session.cells[24].is_mine);
    }

    #[test]
    fn test_busted_board_ignores_further_clicks() {
        let busted = moved(started(5, 3), 0, 0, false);
        let after = moved(busted.clone(), 1, 1, true);
        assert_eq!(*after, *busted);
    }

    #[test]
    fn test_revealed_cell_ignores_a_second_click() {
        let session = moved(started(5, 3), 2, 2, true);
        let after = moved(session.clone(), 2, 2, true);
        assert_eq!(*after, *session);
    }

    #[test]
    fn test_reset_returns_to_an_empty_idle_session() {
        let session = moved(started(6, 5), 1, 0, true);
        let session = session.reduce(BoardAction::Reset);
        assert_eq!(session.phase, BoardPhase::Idle);
        assert!(session.cells.is_empty());
        assert_eq!(session.game_id, None);
    }

    #[test]
    fn test_accepts_click_bounds() {
        let session = started(5, 3);
        assert!(session.accepts_click(4, 4));
        assert!(!session.accepts_click(5, 0));
        assert!(!session.accepts_click(0, 5));
    }

    #[test]
    fn test_bomb_clamping_per_preset() {
        let cases = [
            (5, 0, 1),
            (5, 11, 10),
            (6, 2, 2),
            (6, 99, 14),
            (8, 3, 4),
            (8, 26, 26),
            (10, 5, 6),
            (10, 41, 40),
        ];
        for (size, requested, expected) in cases {
            assert_eq!(
                clamp_bombs(size, requested),
                expected,
                "size {} requested {}",
                size,
                requested
            );
        }
    }

    #[test]
    fn test_presets_carry_their_default_counts() {
        assert_eq!(preset_for(5).default_bombs, 3);
        assert_eq!(preset_for(6).default_bombs, 5);
        assert_eq!(preset_for(8).default_bombs, 8);
        assert_eq!(preset_for(10).default_bombs, 15);
        // Unknown sizes fall back to the smallest grid.
        assert_eq!(preset_for(7).size, 5);
    }
}
