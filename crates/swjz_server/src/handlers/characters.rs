//! /characters

use super::prelude::*;

// handlers

#[instrument]
pub async fn search(
    State(state): State<SwjzState>,
    Query(search): Query<req::Search<'static>>,
) -> ServerResult<Json<res::CharacterPage>> {
    let query = search.to_query();

    let page = tokio::task::spawn_blocking(move || {
        let mut conn = state.pool.get()?;
        let (characters, total) = domain::characters::search(&mut conn, &query)?;
        ServerResult::Ok(res::CharacterPage {
            characters,
            total,
            page: query.page,
        })
    })
    .await??;

    Ok(Json(page))
}

#[instrument]
pub async fn get_one(
    State(state): State<SwjzState>,
    Path(id): Path<i32>,
) -> ServerResult<Json<res::CharacterDetails>> {
    let character = tokio::task::spawn_blocking(move || {
        let mut conn = state.pool.get()?;
        let character = domain::characters::find(&mut conn, id)?;
        ServerResult::Ok(character)
    })
    .await??
    .ok_or_else(|| ServerError::not_found(format!("No character with id {id}")))?;

    Ok(Json(character))
}

#[instrument]
pub async fn get_by_wordhead(
    State(state): State<SwjzState>,
    Path(wordhead): Path<String>,
) -> ServerResult<Json<res::CharacterDetails>> {
    let character = tokio::task::spawn_blocking({
        let wordhead = wordhead.clone();
        move || {
            let mut conn = state.pool.get()?;
            let character = domain::characters::find_by_wordhead(&mut conn, &wordhead)?;
            ServerResult::Ok(character)
        }
    })
    .await??
    .ok_or_else(|| ServerError::not_found(format!("No character with headword {wordhead}")))?;

    Ok(Json(character))
}
