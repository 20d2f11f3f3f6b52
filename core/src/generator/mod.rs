use crate::*;
pub use java_random::*;
pub use random_walk::*;

mod java_random;
mod random_walk;

pub trait BoardGenerator {
    fn generate(self) -> Board;
}
