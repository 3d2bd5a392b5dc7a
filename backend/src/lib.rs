//! Dealership stock backend.
//!
//! A REST API over five document-store entities (stock items, accessories,
//! images, users, templates) built from three cooperating generic pieces:
//! entities with declarative validation and a sanitize transform, a generic
//! repository per collection, and orchestration services that own identifier
//! coercion, relation expansion, and the error taxonomy.

pub mod api;
pub mod doc;
pub mod domain;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
