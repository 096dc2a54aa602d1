mod tip_request;
mod tip_tier;

pub use tip_request::{TipBreakdown, TipRequest};
pub use tip_tier::{TipTier, TipTierParseError};
