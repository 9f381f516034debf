//! Protocol revision 3.16
//!
//! The base revision. Its capability and handshake records are generic over
//! the sub-records that 3.17 extends, with defaults that give the plain 3.16
//! shapes.

pub mod client;
pub mod initialize;
pub mod server;

pub use client::{
    ClientCapabilities, GeneralClientCapabilities, TextDocumentClientCapabilities,
    WindowClientCapabilities, WorkspaceClientCapabilities,
};
pub use initialize::{InitializeError, InitializeParams, InitializeResult, InitializedParams};
pub use server::{ServerCapabilities, WorkspaceServerCapabilities};
