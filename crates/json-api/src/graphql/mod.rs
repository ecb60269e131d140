//! GraphQL transport over the products service.

mod handler;
mod schema;
mod types;

pub(crate) use handler::{graphiql, graphql_handler};
pub(crate) use schema::{ProductSchema, build_schema};
