use derive_new::new;
use serde::{Deserialize, Serialize};

pub use sort::*;
pub use summary::*;
pub use timestamp::*;
pub use video::*;

mod sort;
mod summary;
pub mod timestamp;
mod video;
