pub mod split_tokens;
pub use split_tokens::split_tokens;

pub mod truncate_credits;
pub use truncate_credits::truncate_credits;
