//! Post handlers - form submissions and reads.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};

use quill_core::domain::Post;
use quill_core::{ActionOutcome, LISTING_PATH, PostInput, queries};
use quill_shared::ApiResponse;
use quill_shared::dto::PostResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// Turn an action outcome into the HTTP exchange the form expects.
fn respond(outcome: ActionOutcome) -> HttpResponse {
    match outcome {
        ActionOutcome::Redirect(location) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish(),
        ActionOutcome::ValidationFailed(errors) | ActionOutcome::PersistenceFailed(errors) => {
            HttpResponse::UnprocessableEntity().json(errors)
        }
    }
}

/// GET /
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    if let Some(body) = state.cache.get(LISTING_PATH).await {
        tracing::debug!("Serving post listing from cache");
        return Ok(HttpResponse::Ok().content_type(ContentType::json()).body(body));
    }

    // Taken before the read; a mutation committing mid-read makes the store a no-op.
    let generation = state.cache.generation(LISTING_PATH).await;
    let posts = queries::list_posts(state.posts.as_ref()).await?;
    let data: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    let body = serde_json::to_string(&ApiResponse::ok(data))
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match state
        .cache
        .store(LISTING_PATH, &body, state.listing_cache_ttl, generation)
        .await
    {
        Ok(true) => {}
        Ok(false) => tracing::debug!("Listing changed during render; not cached"),
        Err(e) => tracing::warn!(error = %e, "Failed to cache post listing"),
    }

    Ok(HttpResponse::Ok().content_type(ContentType::json()).body(body))
}

/// GET /posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post = queries::get_post(state.posts.as_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// POST /posts
pub async fn create(state: web::Data<AppState>, form: web::Form<PostInput>) -> HttpResponse {
    respond(state.actions.create(form.into_inner()).await)
}

/// POST /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<PostInput>,
) -> HttpResponse {
    respond(state.actions.update(&path, form.into_inner()).await)
}

/// POST /posts/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    respond(state.actions.delete(&path).await)
}
