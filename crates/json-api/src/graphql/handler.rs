//! GraphQL HTTP handlers.

use async_graphql::http::GraphiQLSource;
use salvo::prelude::*;

use crate::extensions::*;

/// Execute a GraphQL request against the product schema.
#[handler]
pub(crate) async fn graphql_handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<async_graphql::Response>, StatusError> {
    let state = depot.state_or_500()?;
    let request = req
        .parse_json::<async_graphql::Request>()
        .await
        .or_400()?;

    Ok(Json(state.schema.execute(request).await))
}

/// GraphiQL playground.
#[handler]
pub(crate) async fn graphiql(res: &mut Response) {
    res.render(Text::Html(
        GraphiQLSource::build().endpoint("/graphql").finish(),
    ));
}
