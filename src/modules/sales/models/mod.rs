pub mod sale;

pub use sale::{CartLine, CheckoutRequest, Sale, SaleItem};
