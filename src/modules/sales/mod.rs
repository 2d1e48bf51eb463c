// Sales module: cart checkout, sale records, receipts

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Sale, SaleItem};
pub use repositories::{SaleRecordSource, SaleRepository};
pub use services::SaleService;
