pub mod config;
pub mod experiment;
pub mod heightfield;
pub mod presenters;
pub mod quantize;
pub mod sources;
pub mod stats;
pub mod validation;

mod util;
