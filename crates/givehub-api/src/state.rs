//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use givehub_core::config::AppConfig;
use givehub_database::repositories::{
    DeviceRepository, NeedRepository, ProfileRepository, TransferRepository, VoucherRepository,
};
use givehub_service::{MatchingService, TransferService, VoucherService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Profile repository.
    pub profile_repo: Arc<ProfileRepository>,
    /// Device repository.
    pub device_repo: Arc<DeviceRepository>,
    /// Need repository.
    pub need_repo: Arc<NeedRepository>,
    /// Transfer repository.
    pub transfer_repo: Arc<TransferRepository>,
    /// Voucher repository.
    pub voucher_repo: Arc<VoucherRepository>,

    /// Match scoring service.
    pub matching_service: Arc<MatchingService>,
    /// Transfer lifecycle service.
    pub transfer_service: Arc<TransferService>,
    /// Voucher service.
    pub voucher_service: Arc<VoucherService>,
}

impl AppState {
    /// Wires up repositories and services over a database pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let profile_repo = Arc::new(ProfileRepository::new(db_pool.clone()));
        let device_repo = Arc::new(DeviceRepository::new(db_pool.clone()));
        let need_repo = Arc::new(NeedRepository::new(db_pool.clone()));
        let transfer_repo = Arc::new(TransferRepository::new(db_pool.clone()));
        let voucher_repo = Arc::new(VoucherRepository::new(db_pool.clone()));

        let matching_service = Arc::new(MatchingService::new(
            Arc::clone(&device_repo),
            Arc::clone(&need_repo),
            Arc::clone(&profile_repo),
            config.matching.clone(),
        ));
        let transfer_service = Arc::new(TransferService::new(
            Arc::clone(&transfer_repo),
            Arc::clone(&device_repo),
            Arc::clone(&profile_repo),
            config.transfer.clone(),
        ));
        let voucher_service = Arc::new(VoucherService::new(
            Arc::clone(&voucher_repo),
            Arc::clone(&transfer_repo),
            config.voucher.clone(),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            profile_repo,
            device_repo,
            need_repo,
            transfer_repo,
            voucher_repo,
            matching_service,
            transfer_service,
            voucher_service,
        }
    }
}
