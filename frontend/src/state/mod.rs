pub mod load;
pub mod notification;
