//! Museum component modules
//!
//! Contains all individual rendering components

pub mod floorplan;
pub mod footer;
pub mod logs;
pub mod modal;
pub mod room;
pub mod toast;
