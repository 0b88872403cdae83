pub mod errors;
pub mod db;
pub mod flight;

#[cfg(test)]
mod tests;
