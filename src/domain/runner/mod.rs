pub mod runner_region;
