// API surface for TreeVec: boundary DTOs and the TCP command server.

pub mod dto;
pub mod server;
