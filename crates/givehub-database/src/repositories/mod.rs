//! Repository implementations, one per entity.

pub mod device;
pub mod need;
pub mod profile;
pub mod transfer;
pub mod voucher;

pub use device::DeviceRepository;
pub use need::NeedRepository;
pub use profile::ProfileRepository;
pub use transfer::{TransferFilter, TransferRepository};
pub use voucher::VoucherRepository;
