//! Round history.
//!
//! A `History` is the append-only log of one strategy's run. It is the only
//! input games and strategies get, and the only input statistics read.

mod log;
mod record;

pub use log::History;
pub use record::Record;
