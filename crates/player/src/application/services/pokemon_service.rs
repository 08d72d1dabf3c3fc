//! Pokemon Service - CRUD against the REST backend
//!
//! Wire records are converted to domain records on the way in and drafts to
//! payloads on the way out, so views only ever see `pokedex_domain` types.

use pokedex_domain::{DecodePolicy, Pokemon, PokemonDraft, PokemonId};
use pokedex_shared::{paths, PokemonListResponse, PokemonPayload, PokemonResponse};

use crate::application::api::Api;
use crate::application::dto::PokemonForm;
use crate::application::{ServiceError, SubmitError};

#[derive(Clone)]
pub struct PokemonService {
    api: Api,
}

impl PokemonService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// List all stored records in backend order.
    ///
    /// Records that fail to decode are logged and skipped; only a broken
    /// envelope fails the call.
    pub async fn list_pokemons(&self) -> Result<Vec<Pokemon>, ServiceError> {
        let response: PokemonListResponse = self.api.get(paths::POKEMONS).await?;
        let mut pokemons = Vec::with_capacity(response.pokemons.len());
        for (index, record) in response.records().enumerate() {
            let converted = record
                .map_err(|e| e.to_string())
                .and_then(|data| Pokemon::try_from(data).map_err(|e| e.to_string()));
            match converted {
                Ok(pokemon) => pokemons.push(pokemon),
                Err(error) => {
                    tracing::warn!(index, %error, "Skipping malformed pokemon record")
                }
            }
        }
        tracing::debug!(count = pokemons.len(), "Loaded pokemons");
        Ok(pokemons)
    }

    pub async fn get_pokemon(&self, id: &PokemonId) -> Result<Pokemon, ServiceError> {
        let response: PokemonResponse = self.api.get(&paths::pokemon(id.as_str())).await?;
        Ok(Pokemon::try_from(response.pokemon)?)
    }

    pub async fn create_pokemon(&self, draft: PokemonDraft) -> Result<(), ServiceError> {
        let payload = PokemonPayload::from(draft);
        self.api.post_no_response(paths::POKEMONS, &payload).await?;
        Ok(())
    }

    /// Replace every field of the record with `id`
    pub async fn update_pokemon(
        &self,
        id: &PokemonId,
        draft: PokemonDraft,
    ) -> Result<(), ServiceError> {
        let payload = PokemonPayload::from(draft);
        self.api
            .put_no_response(&paths::pokemon(id.as_str()), &payload)
            .await?;
        Ok(())
    }

    pub async fn delete_pokemon(&self, id: &PokemonId) -> Result<(), ServiceError> {
        self.api.delete(&paths::pokemon(id.as_str())).await?;
        Ok(())
    }

    /// Validate the create form and send it.
    ///
    /// Incomplete flavor text is rejected before any request is made.
    pub async fn submit_new(&self, form: &PokemonForm) -> Result<(), SubmitError> {
        let draft = form.to_draft(DecodePolicy::CREATE)?;
        self.create_pokemon(draft).await?;
        Ok(())
    }

    /// Decode the edit form leniently and send the full record.
    pub async fn submit_update(
        &self,
        id: &PokemonId,
        form: &PokemonForm,
    ) -> Result<(), SubmitError> {
        let draft = form.to_draft(DecodePolicy::EDIT)?;
        self.update_pokemon(id, draft).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use pokedex_domain::CodecError;
    use serde_json::{json, Value};

    use crate::infrastructure::testing::fixtures::{
        api_request_failed, pokemon_id, sample_pokemon_json,
    };
    use crate::ports::outbound::testing::MockRawApi;
    use crate::ports::outbound::ApiError;

    fn service(mock: MockRawApi) -> PokemonService {
        PokemonService::new(Api::new(Arc::new(mock)))
    }

    fn create_form() -> PokemonForm {
        PokemonForm {
            name: "squirtle".to_string(),
            base_happiness: "70".to_string(),
            capture_rate: "45".to_string(),
            color: "blue".to_string(),
            egg_groups: "monster, water1".to_string(),
            evolution_chain: "https://pokeapi.co/api/v2/evolution-chain/3/".to_string(),
            flavor_text_entries: "Shoots water at prey, en, red".to_string(),
        }
    }

    /// Capture the body of the single POST or PUT the service sends
    fn recorder() -> (Arc<Mutex<Option<Value>>>, Arc<Mutex<Option<Value>>>) {
        let sent = Arc::new(Mutex::new(None));
        (sent.clone(), sent)
    }

    #[tokio::test]
    async fn list_converts_backend_documents() {
        let mut mock = MockRawApi::new();
        mock.expect_get_json()
            .withf(|path| path == "/pokemons")
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "pokemons": [
                        sample_pokemon_json("1", "bulbasaur"),
                        sample_pokemon_json("4", "charmander")
                    ]
                }))
            });

        let pokemons = service(mock).list_pokemons().await.unwrap();
        let names: Vec<_> = pokemons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "charmander"]);
        assert_eq!(pokemons[0].id, pokemon_id("1"));
    }

    #[tokio::test]
    async fn list_failure_is_reported() {
        let mut mock = MockRawApi::new();
        mock.expect_get_json()
            .returning(|_| Err(ApiError::http(500, "boom")));

        let err = service(mock).list_pokemons().await.unwrap_err();
        assert!(matches!(err, ServiceError::Api(ApiError::HttpError { status: 500, .. })));
    }

    #[tokio::test]
    async fn list_skips_malformed_record() {
        let mut mock = MockRawApi::new();
        mock.expect_get_json().times(1).returning(|_| {
            let mut fractional = sample_pokemon_json("2", "ditto");
            fractional["base_happiness"] = json!(50.5);
            let mut nameless = sample_pokemon_json("3", "ghost");
            nameless.as_object_mut().unwrap().remove("name");
            Ok(json!({
                "pokemons": [
                    sample_pokemon_json("1", "bulbasaur"),
                    fractional,
                    nameless,
                    sample_pokemon_json("  ", "blank id"),
                    sample_pokemon_json("5", "charmander"),
                ]
            }))
        });

        let pokemons = service(mock).list_pokemons().await.unwrap();
        let names: Vec<_> = pokemons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["bulbasaur", "charmander"]);
    }

    #[tokio::test]
    async fn list_without_envelope_is_an_error() {
        let mut mock = MockRawApi::new();
        mock.expect_get_json()
            .returning(|_| Ok(json!({ "items": [] })));

        let err = service(mock).list_pokemons().await.unwrap_err();
        assert!(matches!(err, ServiceError::Api(ApiError::ParseError(_))));
    }

    #[tokio::test]
    async fn get_reads_single_envelope() {
        let mut mock = MockRawApi::new();
        mock.expect_get_json()
            .withf(|path| path == "/pokemons/7")
            .returning(|_| Ok(json!({ "pokemon": sample_pokemon_json("7", "squirtle") })));

        let pokemon = service(mock).get_pokemon(&pokemon_id("7")).await.unwrap();
        assert_eq!(pokemon.name, "squirtle");
    }

    #[tokio::test]
    async fn get_rejects_malformed_document() {
        let mut mock = MockRawApi::new();
        mock.expect_get_json()
            .returning(|_| Ok(json!({ "pokemon": { "name": "no id" } })));

        let err = service(mock).get_pokemon(&pokemon_id("7")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Api(ApiError::ParseError(_))));
    }

    #[tokio::test]
    async fn submit_new_posts_full_record() {
        let (sent, seen) = recorder();
        let mut mock = MockRawApi::new();
        mock.expect_post_no_response_json()
            .withf(|path, _| path == "/pokemons")
            .times(1)
            .returning(move |_, body| {
                *sent.lock().unwrap() = Some(body.clone());
                Ok(())
            });

        service(mock).submit_new(&create_form()).await.unwrap();

        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(
            body,
            json!({
                "name": "squirtle",
                "base_happiness": 70,
                "capture_rate": 45,
                "color": "blue",
                "egg_groups": ["monster", "water1"],
                "evolution_chain": "https://pokeapi.co/api/v2/evolution-chain/3/",
                "flavor_text_entries": [
                    { "flavor_text": "Shoots water at prey", "language": "en", "version": "red" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn submit_new_without_flavor_text_sends_nothing() {
        let mut mock = MockRawApi::new();
        mock.expect_post_no_response_json().never();

        let mut form = create_form();
        form.flavor_text_entries = String::new();

        let err = service(mock).submit_new(&form).await.unwrap_err();
        assert_eq!(err, SubmitError::Invalid(CodecError::IncompleteFlavorText));
    }

    #[tokio::test]
    async fn submit_new_with_partial_entry_sends_nothing() {
        let mut mock = MockRawApi::new();
        mock.expect_post_no_response_json().never();

        let mut form = create_form();
        form.flavor_text_entries = "a,b".to_string();

        assert!(service(mock).submit_new(&form).await.is_err());
    }

    #[tokio::test]
    async fn non_numeric_happiness_is_sent_as_null() {
        let (sent, seen) = recorder();
        let mut mock = MockRawApi::new();
        mock.expect_post_no_response_json()
            .returning(move |_, body| {
                *sent.lock().unwrap() = Some(body.clone());
                Ok(())
            });

        let mut form = create_form();
        form.base_happiness = "abc".to_string();
        service(mock).submit_new(&form).await.unwrap();

        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(body["base_happiness"], Value::Null);
        assert_eq!(body["capture_rate"], json!(45));
    }

    #[tokio::test]
    async fn submit_new_reports_backend_failure() {
        let mut mock = MockRawApi::new();
        mock.expect_post_no_response_json()
            .returning(|_, _| Err(api_request_failed("connection refused")));

        let err = service(mock).submit_new(&create_form()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Service(ServiceError::Api(_))));
    }

    #[tokio::test]
    async fn submit_update_drops_incomplete_entries() {
        let (sent, seen) = recorder();
        let mut mock = MockRawApi::new();
        mock.expect_put_no_response_json()
            .withf(|path, _| path == "/pokemons/7")
            .times(1)
            .returning(move |_, body| {
                *sent.lock().unwrap() = Some(body.clone());
                Ok(())
            });

        let mut form = create_form();
        form.egg_groups = "monster, , water1".to_string();
        form.flavor_text_entries = "a,b,c; x,y".to_string();
        service(mock)
            .submit_update(&pokemon_id("7"), &form)
            .await
            .unwrap();

        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(body["egg_groups"], json!(["monster", "water1"]));
        assert_eq!(
            body["flavor_text_entries"],
            json!([{ "flavor_text": "a", "language": "b", "version": "c" }])
        );
    }

    #[tokio::test]
    async fn delete_hits_item_path() {
        let mut mock = MockRawApi::new();
        mock.expect_delete()
            .withf(|path| path == "/pokemons/7")
            .times(1)
            .returning(|_| Ok(()));

        service(mock).delete_pokemon(&pokemon_id("7")).await.unwrap();
    }

    #[tokio::test]
    async fn delete_failure_is_reported() {
        let mut mock = MockRawApi::new();
        mock.expect_delete()
            .returning(|_| Err(ApiError::http(404, "not found")));

        assert!(service(mock).delete_pokemon(&pokemon_id("7")).await.is_err());
    }
}
