//! Person listing routes.
//!
//! Every listing path renders the index template from the same two calls:
//! persons of the configured tribe and cohort (sorted, optionally narrowed
//! to one squad) and the squads of that tribe and cohort.

use axum::{extract::State, response::Html, routing::{get, MethodRouter}};
use serde_json::Value;
use std::sync::Arc;

use crate::config::ListingConfig;
use crate::directory::{Query, PERSON, SQUAD};
use crate::http::response::AppError;
use crate::routing::{AppState, SiteScope};
use crate::views::{Template, ViewModel};

/// Person record plus its squad link rows.
pub const PERSON_FIELDS: &str = "*,squads.*";

/// Build the GET handler for one listing configuration.
pub fn listing_route(listing: ListingConfig) -> MethodRouter<AppState> {
    let listing = Arc::new(listing);
    get(move |State(state): State<AppState>| {
        let listing = Arc::clone(&listing);
        async move { render_listing(&state, &listing).await }
    })
}

/// Query sent to the person collection for a listing.
pub fn person_query(scope: &SiteScope, listing: &ListingConfig) -> Query {
    let query = Query::new()
        .sort(&listing.sort)
        .fields(PERSON_FIELDS)
        .filter(&["squads", "squad_id", "tribe", "name"], &scope.tribe);

    let query = match &listing.squad {
        Some(squad) => query.filter(&["squads", "squad_id", "name"], squad),
        None => query,
    };

    query.filter(&["squads", "squad_id", "cohort"], &scope.cohort)
}

async fn render_listing(state: &AppState, listing: &ListingConfig) -> Result<Html<String>, AppError> {
    let persons_query = person_query(&state.scope, listing);
    let squads_query = state.scope.squad_query();

    let (persons, squads) = tokio::try_join!(
        state.directory.list::<Value>(PERSON, &persons_query),
        state.directory.list::<Value>(SQUAD, &squads_query),
    )?;

    tracing::debug!(
        path = %listing.path,
        sort = %listing.sort,
        persons = persons.len(),
        squads = squads.len(),
        "Rendering listing"
    );

    let model = ViewModel::new()
        .with("persons", &persons)?
        .with("squads", &squads)?;
    state.render(Template::Index, &model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::directory::Sort;

    fn scope() -> SiteScope {
        SiteScope::from_config(&SiteConfig::default())
    }

    #[test]
    fn test_person_query_without_squad() {
        let listing = ListingConfig {
            path: "/Z-A".to_string(),
            sort: Sort::descending("name"),
            squad: None,
        };
        let query = person_query(&scope(), &listing);

        let pairs: Vec<(&str, &str)> = query
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("sort", "-name"),
                ("fields", "*,squads.*"),
                ("filter[squads][squad_id][tribe][name]", "FDND Jaar 1"),
                ("filter[squads][squad_id][cohort]", "2526"),
            ]
        );
    }

    #[test]
    fn test_person_query_with_squad() {
        let listing = ListingConfig {
            path: "/1J".to_string(),
            sort: Sort::ascending("name"),
            squad: Some("1J".to_string()),
        };
        let query = person_query(&scope(), &listing);

        assert_eq!(query.get("sort"), Some("name"));
        assert_eq!(query.get("filter[squads][squad_id][name]"), Some("1J"));
        assert_eq!(query.get("filter[squads][squad_id][cohort]"), Some("2526"));
    }
}
