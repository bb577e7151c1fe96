//! GraphQL Schema
//!
//! Query and mutation roots binding named operations to the movie service
//! and the user store.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Result, Schema};
use tracing::info;

use crate::auth::{TokenIssuer, UserStore};
use crate::error::AppError;
use crate::models::{LoginPayload, Movie, UserView};
use crate::service::MovieService;

/// Executable schema served on `/graphql`.
pub type MovieSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with its shared dependencies injected as context data.
pub fn build_schema(
    service: Arc<MovieService>,
    users: Arc<UserStore>,
    tokens: TokenIssuer,
) -> MovieSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .data(users)
        .data(tokens)
        .finish()
}

fn owned(movies: Vec<Arc<Movie>>) -> Vec<Movie> {
    movies.iter().map(|m| Movie::clone(m)).collect()
}

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Single movie by IMDb identifier.
    async fn movie(&self, ctx: &Context<'_>, id: String) -> Result<Option<Movie>> {
        let service = ctx.data::<Arc<MovieService>>()?;
        let movie = service.movie_by_id(&id).await.map_err(|e| e.extend())?;
        Ok(Some(Movie::clone(&movie)))
    }

    /// Catalog ordered by release date, newest first.
    async fn recent_movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let service = ctx.data::<Arc<MovieService>>()?;
        Ok(owned(service.recent_movies().await))
    }

    /// Ten best movies according to critics.
    async fn best_of_critics(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let service = ctx.data::<Arc<MovieService>>()?;
        Ok(owned(service.top_rated_by_critic().await))
    }

    /// Ten best movies according to users.
    async fn best_of_users(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let service = ctx.data::<Arc<MovieService>>()?;
        Ok(owned(service.top_rated_by_users().await))
    }

    /// Movies both critics and users rate highly.
    async fn loved_by_all(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let service = ctx.data::<Arc<MovieService>>()?;
        Ok(owned(service.loved_by_all().await))
    }

    /// Movies of one genre.
    async fn by_genre(&self, ctx: &Context<'_>, genre: String) -> Result<Vec<Movie>> {
        let service = ctx.data::<Arc<MovieService>>()?;
        Ok(owned(service.by_genre(&genre).await))
    }

    /// A random movie from any of the given genres, null when none match.
    async fn random_from_genres(
        &self,
        ctx: &Context<'_>,
        genres: Vec<String>,
    ) -> Result<Option<Movie>> {
        let service = ctx.data::<Arc<MovieService>>()?;
        let pick = service.random_from_genres(&genres).await;
        Ok(pick.map(|m| Movie::clone(&m)))
    }

    /// Every catalog movie, unsorted.
    async fn all_movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let service = ctx.data::<Arc<MovieService>>()?;
        Ok(owned(service.all_movies().await))
    }
}

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Registers a new user.
    async fn signup(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        password: String,
    ) -> Result<UserView> {
        let users = ctx.data::<Arc<UserStore>>()?;
        let user = users
            .signup(&name, &email, &password)
            .await
            .map_err(|e| e.extend())?;
        Ok(UserView::from(&user))
    }

    /// Exchanges credentials for a signed token.
    ///
    /// Unknown email and wrong password fail identically.
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<LoginPayload> {
        let users = ctx.data::<Arc<UserStore>>()?;
        let tokens = ctx.data::<TokenIssuer>()?;

        if !users.authenticate(&email, &password).await {
            return Err(AppError::InvalidCredentials.extend());
        }

        let token = tokens.issue(&email).map_err(|e| e.extend())?;
        info!("issued login token");
        Ok(LoginPayload { email, token })
    }
}
