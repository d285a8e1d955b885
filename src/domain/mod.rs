pub mod node;
pub mod organization;
pub mod registry;
pub mod runner;
