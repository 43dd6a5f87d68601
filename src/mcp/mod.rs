//! MCP (Model Context Protocol) server.
//!
//! Exposes the comment-analysis operations as tools to AI assistants.
//! Implements JSON-RPC 2.0 over stdio.

mod protocol;
mod server;
mod tools;

pub use server::McpServer;
