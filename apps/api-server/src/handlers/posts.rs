//! Blog post resource handlers.

use actix_web::{HttpResponse, web};
use chrono::SecondsFormat;
use uuid::Uuid;

use blog_core::domain::{Author, AuthorChanges, BlogPost, PostChanges};
use blog_core::error::{DomainError, RepoError};
use blog_shared::dto::{AuthorPayload, CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;

    Ok(HttpResponse::Ok().json(post_response(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = new_post(body.into_inner())?;
    let saved = state.posts.save(post).await?;

    tracing::info!(post_id = %saved.id, "Post created");
    Ok(HttpResponse::Created().json(post_response(&saved)))
}

/// PUT /posts/{id}
///
/// Only title, content and author are updated; an `id` or `created` in the
/// body is ignored.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let changes = post_changes(body.into_inner())?;

    state
        .posts
        .update_by_id(id, changes)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;

    tracing::info!(post_id = %id, "Post updated");
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.delete(id).await {
        Ok(()) => {}
        Err(RepoError::NotFound) => return Err(DomainError::post_not_found(id).into()),
        Err(e) => return Err(e.into()),
    }

    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// Shape a stored post for the wire, flattening the author.
pub fn post_response(post: &BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        author: post.author.display_name(),
        content: post.content.clone(),
        created: post.created.to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}

fn new_post(req: CreatePostRequest) -> Result<BlogPost, DomainError> {
    let missing = req.missing_fields();

    match (req.title, req.author, req.content) {
        (
            Some(title),
            Some(AuthorPayload {
                first_name: Some(first_name),
                last_name: Some(last_name),
            }),
            Some(content),
        ) if missing.is_empty() => Ok(BlogPost::new(
            title,
            Author::new(first_name, last_name),
            content,
        )),
        _ => Err(DomainError::Validation(missing)),
    }
}

fn post_changes(req: UpdatePostRequest) -> Result<PostChanges, DomainError> {
    let blank = req.blank_fields();
    if !blank.is_empty() {
        return Err(DomainError::Validation(blank));
    }

    Ok(PostChanges {
        title: req.title,
        content: req.content,
        author: req.author.map(|author| AuthorChanges {
            first_name: author.first_name,
            last_name: author.last_name,
        }),
    })
}
