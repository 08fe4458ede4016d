pub mod db;
pub mod player;
pub mod schema;
pub mod user;

#[cfg(test)]
mod tests;
