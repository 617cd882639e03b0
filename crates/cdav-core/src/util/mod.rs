pub mod slug;
pub mod token;
