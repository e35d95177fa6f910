pub mod carray;
pub mod extract;
pub mod rgb565;
