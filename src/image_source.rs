pub mod impl_blob_store;
pub mod interface;
