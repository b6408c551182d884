pub mod recorder;
pub mod traits;

pub use recorder::{DrawCommand, DrawList};
pub use traits::{Rgba, Surface};
