pub mod linear_regression;
pub mod ping;
