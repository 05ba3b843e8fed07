/// Routing Modules
///
/// The router is segregated by access level: public reads, authenticated
/// mutations (behind the auth middleware), and admin-only endpoints nested
/// under `/admin`.
pub mod admin;
pub mod authenticated;
pub mod public;
