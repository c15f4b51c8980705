pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod genre;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
