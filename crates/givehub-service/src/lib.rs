//! # givehub-service
//!
//! Business logic service layer for GiveHub. Each service orchestrates
//! repositories to implement application-level use cases: match scoring,
//! the transfer lifecycle, and voucher issuance/redemption.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod matching;
pub mod transfer;
pub mod voucher;

pub use context::RequestContext;
pub use matching::{AttributeExtractor, ExtractedAttributes, MatchScorer, MatchingService};
pub use transfer::TransferService;
pub use voucher::VoucherService;
