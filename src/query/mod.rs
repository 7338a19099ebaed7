//! Questions about spending in plain English.
//!
//! This module contains:
//! - The keyword based responder
//! - The chat page and the query endpoint

mod chat_page;
mod responder;

pub use chat_page::{get_chat_page, query_endpoint};
pub use responder::respond;
