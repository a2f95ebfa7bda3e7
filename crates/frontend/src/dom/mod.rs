//! Browser implementations of the settings handler collaborators.

pub mod alerts;
pub mod form;
pub mod page;
pub mod timers;
pub mod transport;
