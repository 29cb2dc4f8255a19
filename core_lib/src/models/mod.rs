//! Response envelopes for the JSON endpoints

pub mod response;

pub use response::ApiResponse;
