pub mod create_docker_registry;
