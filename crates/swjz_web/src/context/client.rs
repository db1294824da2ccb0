//! Client context for communicating with the backend.

use crate::error::{WebError, WebResult};
use reqwasm::http::Response;
use swjz_api::response as res;
use swjz_core::SearchQuery;

#[derive(Clone, Copy, Default)]
pub struct Client {}

impl Client {
    pub fn new() -> Self {
        Self {}
    }
}

/// Non-API methods
impl Client {
    async fn assert_success(&self, res: &Response) -> eyre::Result<()> {
        match res.status() {
            100..=399 => Ok(()),
            code => {
                let bytes = res.binary().await.unwrap_or_default();
                let body = match serde_json::from_slice::<res::Error>(&bytes) {
                    Ok(error) => error.message.into(),
                    Err(_) => String::from_utf8_lossy(bytes.as_slice()),
                };
                Err(eyre::eyre!("Request failed: HTTP {code} {body}"))
            }
        }
    }
}

/// API methods
impl Client {
    pub async fn search(&self, query: &SearchQuery) -> WebResult<res::CharacterPage> {
        tracing::info!("Searching characters: {query:?}");

        let res = reqwasm::http::Request::get(&format!(
            "/api/characters?{}",
            query.to_query_string()
        ))
        .send()
        .await
        .map_err(WebError::from)?;
        self.assert_success(&res).await?;
        let page: res::CharacterPage = res.json().await.map_err(WebError::from)?;

        tracing::info!(
            "Fetched {} characters out of {}",
            page.characters.len(),
            page.total
        );
        Ok(page)
    }

    /// Returns `None` if there is no character with the id.
    pub async fn get_character(&self, id: i32) -> WebResult<Option<res::CharacterDetails>> {
        tracing::info!("Fetching character {id}");

        let res = reqwasm::http::Request::get(&format!("/api/characters/{id}"))
            .send()
            .await
            .map_err(WebError::from)?;
        if res.status() == 404 {
            tracing::info!("No character {id}");
            return Ok(None);
        }
        self.assert_success(&res).await?;
        let character: res::CharacterDetails = res.json().await.map_err(WebError::from)?;

        tracing::info!("Fetched character {id}: {}", character.wordhead);
        Ok(Some(character))
    }
}
