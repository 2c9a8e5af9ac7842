pub mod address_book;
pub mod artifacts;
pub mod bindings;
pub mod chain_data;
pub mod dao;
pub mod deployments;
pub mod encoding;
pub mod explorer;
pub mod ipfs;
pub mod metadata;
pub mod receipts;
pub mod voting;
