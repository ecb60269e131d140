//! State

use std::sync::Arc;

use myretail_app::context::AppContext;

use crate::graphql::{self, ProductSchema};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) schema: ProductSchema,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        let schema = graphql::build_schema(Arc::clone(&app.products));

        Self { app, schema }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}
