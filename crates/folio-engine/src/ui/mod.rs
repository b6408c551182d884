//! Page-level interaction helpers: custom cursor, count-up numbers, scroll
//! state, hover effects and staggered entrances.

pub mod counter;
pub mod cursor;
pub mod entrance;
pub mod hover;
pub mod scroll;

pub use counter::CounterAnimation;
pub use cursor::CursorFollower;
pub use entrance::StaggeredEntrance;
pub use hover::{magnetic_offset, Bounds, Tilt, MAGNET_PULL};
pub use scroll::{scroll_progress, NavAutoHide};
