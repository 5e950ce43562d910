pub mod checksum;
pub mod cipher;
pub mod constants;
pub mod error;
pub mod packet;

// Re-export the main types for easy access
pub use cipher::XorKey;
pub use error::WimError;
pub use packet::ParsedPacket;
