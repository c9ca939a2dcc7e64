use serde::{Deserialize, Serialize};

use crate::*;

/// Named difficulty selectable at game start. Bombs and converters work in
/// the player's favor here, so harder settings hand out fewer of both.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

const EASY: DifficultyProfile = DifficultyProfile {
    move_limit: 32,
    bombs: 4,
    bomb_radius: 2,
    converters: 2,
};

const NORMAL: DifficultyProfile = DifficultyProfile {
    move_limit: 26,
    bombs: 3,
    bomb_radius: 2,
    converters: 1,
};

const HARD: DifficultyProfile = DifficultyProfile {
    move_limit: 22,
    bombs: 2,
    bomb_radius: 1,
    converters: 1,
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            _ => Err(GameError::UnknownDifficulty),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }

    pub const fn profile(self) -> &'static DifficultyProfile {
        match self {
            Self::Easy => &EASY,
            Self::Normal => &NORMAL,
            Self::Hard => &HARD,
        }
    }

    pub fn grid_config(self) -> GridConfig {
        let profile = self.profile();
        GridConfig::new(DEFAULT_SIDE, profile.bombs, profile.converters)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Normal
    }
}

/// Tuning knobs fixed for the lifetime of one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub move_limit: u16,
    pub bombs: CellCount,
    /// Manhattan distance captured around a detonating bomb.
    pub bomb_radius: Coord,
    pub converters: CellCount,
}

/// Derived phase of a game, never stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    AwaitingConverter,
    Won,
    Lost,
}

/// One immutable game state. Every transition clones the grid and returns a
/// fresh value, leaving the receiver untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    grid: Grid,
    difficulty: Difficulty,
    move_count: u16,
    last_move_captured: CellCount,
    last_move_exploded: bool,
    pending_converter: bool,
}

impl Game {
    pub fn new(difficulty: Difficulty, generator: impl GridGenerator) -> Result<Self> {
        let grid = generator.generate(difficulty.grid_config())?;
        Ok(Self::from_grid(grid, difficulty))
    }

    /// Wraps an existing grid, mostly useful for scripted boards.
    pub fn from_grid(grid: Grid, difficulty: Difficulty) -> Self {
        Self {
            grid,
            difficulty,
            move_count: 0,
            last_move_captured: 0,
            last_move_exploded: false,
            pending_converter: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn move_count(&self) -> u16 {
        self.move_count
    }

    pub fn moves_left(&self) -> u16 {
        self.difficulty.profile().move_limit.saturating_sub(self.move_count)
    }

    pub fn last_move_captured(&self) -> CellCount {
        self.last_move_captured
    }

    pub fn last_move_exploded(&self) -> bool {
        self.last_move_exploded
    }

    pub fn pending_converter(&self) -> bool {
        self.pending_converter
    }

    /// Plays one move: recolor the controlled region to `color`, flood into
    /// matching neighbors, then drain any triggered bombs.
    ///
    /// Every palette color is a legal move, including the color the region
    /// already has; such a move captures nothing but still counts. The engine
    /// also stays permissive after a win or loss, gating is the caller's job.
    pub fn select_color(&self, color: Color) -> Self {
        let mut grid = self.grid.clone();
        grid.clear_waves();
        grid.recolor_controlled(color);

        let FloodOutcome {
            captured,
            converter_picked,
            bombs,
        } = flood_capture(&mut grid, color);
        let blast = detonate(&mut grid, bombs, color, self.difficulty.profile().bomb_radius);

        let move_count = self.move_count + 1;
        log::debug!(
            "move {}: {} captured {} cells ({} by blast)",
            move_count,
            color.name(),
            captured + blast.captured,
            blast.captured
        );

        Self {
            grid,
            difficulty: self.difficulty,
            move_count,
            last_move_captured: captured + blast.captured,
            last_move_exploded: blast.exploded(),
            pending_converter: converter_picked || blast.converter_picked,
        }
    }

    /// Resolves a converter pickup: bulk-recolor every uncontrolled `from`
    /// cell to `to`. Runs no capture and does not consume a move.
    pub fn apply_converter(&self, from: Color, to: Color) -> Self {
        let mut grid = self.grid.clone();
        let changed = grid.recolor_uncontrolled(from, to);
        log::debug!(
            "converter recolored {} cells {} -> {}",
            changed,
            from.name(),
            to.name()
        );

        Self {
            grid,
            difficulty: self.difficulty,
            move_count: self.move_count,
            last_move_captured: self.last_move_captured,
            last_move_exploded: self.last_move_exploded,
            pending_converter: false,
        }
    }

    /// Starts a fresh game on the current difficulty.
    pub fn reset(&self, generator: impl GridGenerator) -> Result<Self> {
        Self::new(self.difficulty, generator)
    }

    /// Starts a fresh game on the named difficulty.
    pub fn set_difficulty(&self, name: &str, generator: impl GridGenerator) -> Result<Self> {
        Self::new(Difficulty::from_name(name)?, generator)
    }

    pub fn is_won(&self) -> bool {
        self.grid.is_fully_controlled()
    }

    pub fn is_lost(&self) -> bool {
        self.move_count >= self.difficulty.profile().move_limit && !self.is_won()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else if self.pending_converter {
            GameStatus::AwaitingConverter
        } else {
            GameStatus::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(rows: &[&str], difficulty: Difficulty) -> Game {
        Game::from_grid(grid_from_rows(rows), difficulty)
    }

    #[test]
    fn uniform_board_is_won_in_one_move() {
        let game = scripted(
            &[
                "Rrr", //
                "rrr", //
                "rrr",
            ],
            Difficulty::Normal,
        );

        let game = game.select_color(Color::Red);

        assert_eq!(game.move_count(), 1);
        assert!(game.is_won());
        assert!(!game.is_lost());
        assert_eq!(game.grid().controlled_count(), 9);
        assert_eq!(game.last_move_captured(), 8);
        // breadth-first rings: the far corner is four steps out
        assert_eq!(game.grid().cell_at((2, 2)).wave, Some(3));
    }

    #[test]
    fn every_move_costs_exactly_one_even_when_nothing_qualifies() {
        let game = scripted(
            &[
                "Rgb", //
                "bgg", //
                "ggg",
            ],
            Difficulty::Normal,
        );

        // red is already the controlled color and touches no red cell
        let game = game.select_color(Color::Red);

        assert_eq!(game.move_count(), 1);
        assert_eq!(game.last_move_captured(), 0);
        assert!(!game.last_move_exploded());
    }

    #[test]
    fn select_color_leaves_the_previous_state_untouched() {
        let game = scripted(
            &[
                "Rrr", //
                "ggg", //
                "ggg",
            ],
            Difficulty::Normal,
        );
        let before = game.clone();

        let next = game.select_color(Color::Red);

        assert_eq!(game, before);
        assert!(next.move_count() > game.move_count());
    }

    #[test]
    fn capture_is_monotonic_across_moves() {
        let mut game = scripted(
            &[
                "Rgbr", //
                "grby", //
                "ybgr", //
                "rygb",
            ],
            Difficulty::Normal,
        );

        for &color in [Color::Green, Color::Red, Color::Blue, Color::Yellow].iter().cycle().take(12) {
            let next = game.select_color(color);
            for pos in game.grid().iter_coords() {
                if game.grid().cell_at(pos).controlled {
                    assert!(next.grid().cell_at(pos).controlled);
                }
            }
            game = next;
        }
    }

    #[test]
    fn captures_per_move_never_exceed_the_board() {
        let mut game = scripted(
            &[
                "Rrrr", //
                "rrrr", //
                "rrrr", //
                "rrrr",
            ],
            Difficulty::Easy,
        );
        game = {
            let mut grid = game.grid().clone();
            grid[(1, 1)].has_bomb = true;
            grid[(2, 2)].has_bomb = true;
            Game::from_grid(grid, Difficulty::Easy)
        };

        let game = game.select_color(Color::Red);

        assert!(game.last_move_captured() <= game.grid().total_cells());
        assert!(game.is_won());
    }

    #[test]
    fn flood_captured_bomb_blasts_through_foreign_colors() {
        let game = scripted(
            &[
                "Rrggg", //
                "rrggg", //
                "ggggg", //
                "ggggg", //
                "ggggg",
            ],
            Difficulty::Hard,
        );
        let game = {
            let mut grid = game.grid().clone();
            grid[(1, 1)].has_bomb = true;
            Game::from_grid(grid, Difficulty::Hard)
        };

        // flood captures the red block including the bomb; radius 1 blast
        // then grabs the uncontrolled orthogonal neighbors of (1, 1)
        let game = game.select_color(Color::Red);

        assert!(game.last_move_exploded());
        assert_eq!(game.last_move_captured(), 5);
        assert!(game.grid().cell_at((2, 1)).controlled);
        assert!(game.grid().cell_at((1, 2)).controlled);
        assert_eq!(game.grid().cell_at((2, 1)).color, Color::Red);
        assert!(!game.grid().cell_at((2, 2)).controlled);
    }

    #[test]
    fn a_bomb_never_detonates_twice() {
        let game = scripted(
            &[
                "Rrr", //
                "rrr", //
                "rrr",
            ],
            Difficulty::Hard,
        );
        let game = {
            let mut grid = game.grid().clone();
            grid[(0, 1)].has_bomb = true;
            Game::from_grid(grid, Difficulty::Hard)
        };

        let first = game.select_color(Color::Red);
        assert!(first.last_move_exploded());
        assert!(!first.grid().cell_at((0, 1)).has_bomb);

        let second = first.select_color(Color::Blue);
        assert!(!second.last_move_exploded());
    }

    #[test]
    fn converter_pickup_sets_and_resolution_clears_the_pending_flag() {
        let game = scripted(
            &[
                "Rrg", //
                "ggb", //
                "bbb",
            ],
            Difficulty::Normal,
        );
        let game = {
            let mut grid = game.grid().clone();
            grid[(0, 1)].has_converter = true;
            Game::from_grid(grid, Difficulty::Normal)
        };

        let game = game.select_color(Color::Red);
        assert!(game.pending_converter());
        assert_eq!(game.status(), GameStatus::AwaitingConverter);

        let game = game.apply_converter(Color::Green, Color::Blue);
        assert!(!game.pending_converter());
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.grid().cell_at((0, 2)).color, Color::Blue);
        assert_eq!(game.grid().cell_at((1, 0)).color, Color::Blue);

        // a second application finds nothing left to recolor
        let again = game.apply_converter(Color::Green, Color::Blue);
        assert_eq!(again.grid(), game.grid());

        // and the next move runs plain capture, unaffected by converter logic
        let game = game.select_color(Color::Blue);
        assert_eq!(game.move_count(), 2);
        assert!(game.is_won());
    }

    #[test]
    fn reaching_the_move_limit_without_full_control_is_a_loss() {
        let mut game = scripted(
            &[
                "Rgb", //
                "bgg", //
                "ggg",
            ],
            Difficulty::Hard,
        );

        for _ in 0..HARD.move_limit {
            game = game.select_color(Color::Red);
        }

        assert!(game.is_lost());
        assert!(!game.is_won());
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.moves_left(), 0);
    }

    #[test]
    fn won_and_lost_are_mutually_exclusive() {
        let mut game = scripted(
            &[
                "Rr", //
                "rr",
            ],
            Difficulty::Hard,
        );

        // burn the whole move budget, winning on the first move
        for _ in 0..HARD.move_limit {
            game = game.select_color(Color::Red);
        }

        assert!(game.is_won());
        assert!(!game.is_lost());
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn unknown_difficulty_names_are_rejected() {
        let game = scripted(&["R"], Difficulty::Easy);

        let result = game.set_difficulty("nightmare", RandomGridGenerator::new(7));

        assert_eq!(result.unwrap_err(), GameError::UnknownDifficulty);
        assert_eq!(Difficulty::from_name("hard"), Ok(Difficulty::Hard));
    }

    #[test]
    fn reset_zeroes_counters_and_keeps_the_difficulty() {
        let game = Game::new(Difficulty::Easy, RandomGridGenerator::new(3)).unwrap();
        let played = game.select_color(Color::Blue).select_color(Color::Green);

        let fresh = played.reset(RandomGridGenerator::new(4)).unwrap();

        assert_eq!(fresh.move_count(), 0);
        assert_eq!(fresh.difficulty(), Difficulty::Easy);
        assert_eq!(fresh.grid().controlled_count(), 1);
        assert!(fresh.grid().cell_at(START_CELL).controlled);
    }
}
