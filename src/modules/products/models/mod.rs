pub mod product;

pub use product::{CreateProductRequest, Product, UpdateProductRequest};
