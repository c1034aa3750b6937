//! CRUD endpoints over the persistence gateway.

pub mod handlers;
