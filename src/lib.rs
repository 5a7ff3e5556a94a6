pub mod config;
pub mod global;
pub mod http;
pub mod nytimes;
pub mod sections;
pub mod topstories;
pub mod validators;

#[cfg(test)]
mod testing;
