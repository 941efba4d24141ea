pub mod clock;
pub mod error;
pub mod event;
pub mod money;
pub mod zone;
