pub mod booking;
pub mod raw_row;
