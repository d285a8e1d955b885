pub mod node_request_service;
