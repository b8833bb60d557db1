//! Service-layer components shared by the command handlers: outbound
//! delivery and the catalog search flow.

pub mod notify;
pub mod search;
