//! App Router

use salvo::Router;

use crate::{graphql, products};

/// REST and GraphQL routes over the products service.
pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("product/{id}")
                .get(products::get::handler)
                .put(products::update::handler),
        )
        .push(
            Router::with_path("graphql")
                .get(graphql::graphiql)
                .post(graphql::graphql_handler),
        )
}
