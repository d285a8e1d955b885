pub mod create_organization_quota;
