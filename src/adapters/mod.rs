// Adapters layer: concrete implementations of the domain ports plus local
// file handling.

pub mod clipboard;
pub mod http;
pub mod storage;

#[cfg(feature = "cli")]
pub use clipboard::SystemClipboard;
pub use clipboard::MemoryClipboard;
pub use http::ReqwestTransport;
