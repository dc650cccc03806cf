//! Business operations for the storefront, layered over the `models`
//! entities: catalog management, order intake and review, and re-encoding
//! of oversized payment screenshots.

pub mod catalog_service;
pub mod errors;
pub mod order_service;
pub mod screenshot;
#[cfg(test)]
pub mod test_support;
