pub mod composite;
pub mod context;
pub mod pipeline;
pub mod preview;
pub mod surface;
