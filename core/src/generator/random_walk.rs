use alloc::vec::Vec;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::*;

/// Seed used when none is given, so default games are reproducible.
pub const DEFAULT_SEED: u64 = 1;

/// Number of random steps taken from the solved board.
pub const SHUFFLE_STEPS: u32 = 1000;

/// Candidate order offered to the generator at each step: the gap moves up, down, left, right.
const WALK_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Up,
    Direction::Right,
    Direction::Left,
];

/// Shuffle strategy that walks the gap randomly from the solved board.
///
/// Every step is a legal move, so every board it produces is solvable. The walk keeps no memory
/// and is free to undo its own previous step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomWalkGenerator {
    seed: u64,
    steps: u32,
}

impl RandomWalkGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            steps: SHUFFLE_STEPS,
        }
    }

    pub fn with_steps(self, steps: u32) -> Self {
        Self { steps, ..self }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Draws the walk without touching any board.
    pub fn walk(&self) -> Walk {
        let mut rng = JavaRandom::seed_from_u64(self.seed);
        let mut gap = Position::HOME_CORNER;
        let mut steps = Vec::with_capacity(self.steps as usize);
        let mut legal = Vec::with_capacity(WALK_ORDER.len());

        for _ in 0..self.steps {
            legal.clear();
            legal.extend(
                WALK_ORDER
                    .iter()
                    .filter_map(|&dir| dir.swap_target(gap).map(|next| (dir, next))),
            );

            // a corner still has two neighbors, so `legal` is never empty
            let (dir, next) = legal[rng.next_int(legal.len() as u32) as usize];
            steps.push(dir);
            gap = next;
        }

        Walk {
            start: Position::HOME_CORNER,
            steps,
        }
    }

    /// Same as [`BoardGenerator::generate`], also returning the walk that produced the board.
    pub fn generate_with_walk(self) -> (Board, Walk) {
        let walk = self.walk();
        let mut board = Board::solved();
        walk.apply(&mut board);

        log::debug!(
            "Shuffled with seed {} over {} steps, gap at {:?}",
            self.seed,
            walk.len(),
            board.empty()
        );
        (board, walk)
    }
}

impl Default for RandomWalkGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl BoardGenerator for RandomWalkGenerator {
    fn generate(self) -> Board {
        self.generate_with_walk().0
    }
}

/// Recorded path of a shuffle: a start cell and the moves made from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walk {
    start: Position,
    steps: Vec<Direction>,
}

impl Walk {
    pub fn start(&self) -> Position {
        self.start
    }

    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Cell the cursor ends on.
    pub fn end(&self) -> Position {
        self.swaps().last().map_or(self.start, |(_, to)| to)
    }

    /// Swaps cells along the recorded path, starting at [`Walk::start`].
    ///
    /// These are legal moves only while the board's gap sits on the start cell; otherwise the
    /// same cells are swapped all the same.
    pub fn apply(&self, board: &mut Board) {
        for (from, to) in self.swaps() {
            board.swap(from, to);
        }
    }

    /// Reverts an [`Walk::apply`] by swapping back along the path from its end.
    pub fn rewind(&self, board: &mut Board) {
        let swaps: Vec<_> = self.swaps().collect();
        for (from, to) in swaps.into_iter().rev() {
            board.swap(to, from);
        }
    }

    fn swaps(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        let mut cursor = self.start;
        self.steps.iter().map_while(move |dir| {
            let next = dir.swap_target(cursor)?;
            Some((core::mem::replace(&mut cursor, next), next))
        })
    }
}
