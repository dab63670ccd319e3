use crate::types::{PageInfo, Result};
use axum::{Json, extract::Path};
use truthpulse_core::Page;

/// Client-side route table
#[utoipa::path(
    get,
    path = "/api/pages",
    responses(
        (status = 200, description = "Every page of the site", body = [PageInfo])
    ),
    tag = "pages"
)]
pub async fn list_pages() -> Json<Vec<PageInfo>> {
    Json(Page::ALL.into_iter().map(PageInfo::from).collect())
}

/// Look up a page by its route name (`home` for `/`)
#[utoipa::path(
    get,
    path = "/api/pages/{name}",
    responses(
        (status = 200, description = "Page found", body = PageInfo),
        (status = 404, description = "No such page")
    ),
    params(
        ("name" = String, Path, description = "Route name, e.g. `verify`")
    ),
    tag = "pages"
)]
pub async fn get_page(Path(name): Path<String>) -> Result<Json<PageInfo>> {
    let path = if name == "home" {
        "/".to_string()
    } else {
        format!("/{}", name)
    };
    let page = Page::from_path(&path)?;
    Ok(Json(page.into()))
}
