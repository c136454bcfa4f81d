use crate::types::{Credits, WholeCredits};

// Truncates toward zero; fractional credits are dropped, never rounded up.
pub fn truncate_credits(credits: Credits) -> WholeCredits {
    credits.trunc() as WholeCredits
}
