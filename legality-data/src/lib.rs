extern crate alloc;

mod game;
mod mons;

#[cfg(test)]
pub mod test_util;

pub use game::*;
pub use mons::*;
