use crate::*;
pub use random::*;

mod random;

/// Builds the initial board for one game.
pub trait GridGenerator {
    fn generate(self, config: GridConfig) -> Result<Grid>;
}
