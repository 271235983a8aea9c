pub mod docker;
pub mod version;

pub use docker::{DockerCli, EngineInfo};
