pub mod catalog;
pub mod clock;
pub mod content;
pub mod event;
pub mod schedule;
pub mod stats;

pub use catalog::Catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use event::ClubEvent;
pub use schedule::{is_past, partition, Schedule};
pub use stats::{CounterAnimation, HeroStats};
