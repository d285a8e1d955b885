pub mod node_creation_request;
