pub mod interval;
pub mod key;
pub mod note;
pub mod pitch;
pub mod ratio;
pub mod scale;
pub mod tuning;
