pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod responses;
pub mod router;
pub mod shutdown;
pub mod templates;

#[cfg(test)]
mod tests;
