pub mod receipt;
pub mod sale_service;

pub use receipt::render_receipt;
pub use sale_service::SaleService;
