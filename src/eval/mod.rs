/// Timeline and scroll driver.
pub mod driver;
