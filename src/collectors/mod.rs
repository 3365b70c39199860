pub mod wireless;

pub use wireless::LinkPoller;
