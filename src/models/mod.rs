//! CPU scheduling domain models.
//!
//! Provides the process record and the Gantt timeline shared by every
//! scheduling engine.
//!
//! # Model Mappings
//!
//! | u-cpusim | Operating system |
//! |----------|------------------|
//! | Process | Task / thread |
//! | Timeline | CPU trace |
//! | Slot | Dispatch slice |

mod process;
mod timeline;

pub use process::{Process, ProcessId, ProcessStatus, Tick};
pub use timeline::{Segment, Slot, Timeline};
