//! Portfolio museum core
//!
//! Room/modal navigation state, the exhibit selection and the effect lists
//! every transition hands to the presentation layer.

pub mod catalog;
pub mod effects;
pub mod exhibit;
pub mod navigator;
pub mod state;

pub use catalog::{Catalog, FrameAction};
pub use effects::{Effect, Effects, Sound};
pub use navigator::{ModalPolicy, Navigator};
pub use state::{ModalId, RoomId};
