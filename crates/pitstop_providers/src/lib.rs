pub mod as_the_crow_flies;
pub mod cache;
pub mod google_routes_api;
pub mod route_client;
pub mod route_provider;
pub mod route_query;
