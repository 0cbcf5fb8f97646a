// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};

use crate::api_server::{AppError, AppState};
use crate::data::{CatalogModel, Manufacturer};
use crate::listing::{
    by_manufacturer, filter_by_name, find_by_id, sort_by_field, ListingQuery, SortOrder,
    DEFAULT_SORT_FIELD,
};

const SITE_TITLE: &str = "Porsche Catalog";

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

// ============================================================================
// List Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub porsches: Vec<CatalogModel>,
    pub filter: String,
    pub sort: String,
    pub order: SortOrder,
    /// Set on manufacturer pages when at least one model matched
    pub manufacturer: Option<Manufacturer>,
}

impl IndexTemplate {
    /// Link for a sortable column header: flips direction on the active column
    pub fn sort_link(&self, field: &str) -> String {
        let order = if self.sort == field {
            self.order.toggled()
        } else {
            SortOrder::Asc
        };
        format!(
            "/?filter={}&sort={}&order={}",
            urlencoding::encode(&self.filter),
            urlencoding::encode(field),
            order.as_str()
        )
    }

    pub fn sort_indicator(&self, field: &str) -> &'static str {
        if self.sort != field {
            return "";
        }
        match self.order {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        }
    }
}

pub async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, AppError> {
    let models = state.catalog.fetch_models().await?;

    let filter = query.filter();
    let sort = query.sort();
    let order = query.order();

    let porsches = sort_by_field(filter_by_name(models, filter), sort, order);
    tracing::debug!(
        "List page: filter={:?} sort={:?} order={} -> {} models",
        filter,
        sort,
        order.as_str(),
        porsches.len()
    );

    render(&IndexTemplate {
        title: SITE_TITLE.to_string(),
        porsches,
        filter: filter.to_string(),
        sort: sort.to_string(),
        order,
        manufacturer: None,
    })
}

// ============================================================================
// Manufacturer Page
// ============================================================================

/// Models of one manufacturer, in catalog order; query params are ignored
pub async fn manufacturer_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let models = state.catalog.fetch_models().await?;
    let porsches = by_manufacturer(models, &id);
    let manufacturer = porsches.first().and_then(|m| m.manufacturer.clone());

    tracing::debug!("Manufacturer page {}: {} models", id, porsches.len());

    let title = match &manufacturer {
        Some(maker) => format!("{} - {}", maker.display_name(), SITE_TITLE),
        None => SITE_TITLE.to_string(),
    };

    render(&IndexTemplate {
        title,
        porsches,
        filter: String::new(),
        sort: DEFAULT_SORT_FIELD.to_string(),
        order: SortOrder::Asc,
        manufacturer,
    })
}

// ============================================================================
// Detail Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/detail.html")]
pub struct DetailTemplate {
    pub title: String,
    pub porsche: CatalogModel,
}

pub async fn detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let models = state.catalog.fetch_models().await?;
    let porsche = find_by_id(models, &id).ok_or(AppError::NotFound)?;

    render(&DetailTemplate {
        title: format!("{} - {}", porsche.display_name(), SITE_TITLE),
        porsche,
    })
}
