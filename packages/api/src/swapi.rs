use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use store::{CatalogClient, CatalogConfig, CatalogError, CharacterRecord, PlanetRecord, SearchPage};

/// [`CatalogClient`] backed by the public SWAPI REST endpoints.
#[derive(Clone, Debug)]
pub struct SwapiClient {
    http: Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `people` -> `{base}/people/`
    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}/", self.base_url, resource)
    }

    async fn search<T: DeserializeOwned>(
        &self,
        resource: &str,
        term: &str,
    ) -> Result<Vec<T>, CatalogError> {
        let url = self.endpoint(resource);
        tracing::debug!("GET {}?search={}", url, term);

        let response = self
            .http
            .get(&url)
            .query(&[("search", term)])
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        decode_results(status, &body)
    }
}

impl CatalogClient for SwapiClient {
    async fn search_characters(&self, name: &str) -> Result<Vec<CharacterRecord>, CatalogError> {
        self.search("people", name).await
    }

    async fn search_planets(&self, query: &str) -> Result<Vec<PlanetRecord>, CatalogError> {
        self.search("planets", query).await
    }
}

/// Turn a catalog response into its `results` list.
///
/// Any non-2xx status is an error even if the body happens to parse.
fn decode_results<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<Vec<T>, CatalogError> {
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }
    serde_json::from_str::<SearchPage<T>>(body)
        .map(|page| page.results)
        .map_err(|e| CatalogError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE: &str = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {
                "name": "Luke Skywalker",
                "height": "172",
                "mass": "77",
                "birth_year": "19BBY",
                "gender": "male",
                "homeworld": "https://swapi.dev/api/planets/1/",
                "films": ["https://swapi.dev/api/films/1/"]
            },
            {
                "name": "Anakin Skywalker",
                "height": "188",
                "birth_year": "41.9BBY"
            }
        ]
    }"#;

    const PLANETS: &str = r#"{
        "count": 1,
        "results": [
            {
                "name": "Tatooine",
                "rotation_period": "23",
                "orbital_period": "304",
                "diameter": "10465",
                "climate": "arid",
                "gravity": "1 standard",
                "terrain": "desert",
                "surface_water": "1",
                "population": "200000"
            }
        ]
    }"#;

    #[test]
    fn test_decode_people_ignores_extra_fields() {
        let people: Vec<CharacterRecord> = decode_results(StatusCode::OK, PEOPLE).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0], CharacterRecord::new("Luke Skywalker", "19BBY"));
        assert_eq!(people[1].birth_year, "41.9BBY");
    }

    #[test]
    fn test_decode_planets() {
        let planets: Vec<PlanetRecord> = decode_results(StatusCode::OK, PLANETS).unwrap();
        assert_eq!(planets.len(), 1);
        let tatooine = &planets[0];
        assert_eq!(tatooine.name, "Tatooine");
        assert_eq!(tatooine.population, "200000");
        assert_eq!(tatooine.climate, "arid");
        assert_eq!(tatooine.terrain, "desert");
        assert_eq!(tatooine.rotation_period, "23");
    }

    #[test]
    fn test_empty_results_are_ok() {
        let planets: Vec<PlanetRecord> =
            decode_results(StatusCode::OK, r#"{"count":0,"results":[]}"#).unwrap();
        assert!(planets.is_empty());
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        let err = decode_results::<PlanetRecord>(StatusCode::NOT_FOUND, PLANETS).unwrap_err();
        assert_eq!(err, CatalogError::Status(404));

        let err = decode_results::<PlanetRecord>(StatusCode::BAD_GATEWAY, "").unwrap_err();
        assert_eq!(err, CatalogError::Status(502));
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        let err = decode_results::<PlanetRecord>(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));

        // A planet without its population is not a planet
        let err = decode_results::<PlanetRecord>(
            StatusCode::OK,
            r#"{"results":[{"name":"Hoth"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));

        let err = decode_results::<PlanetRecord>(StatusCode::OK, r#"{"count":0}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_endpoints() {
        let client = SwapiClient::new(&CatalogConfig::default());
        assert_eq!(client.endpoint("people"), "https://swapi.dev/api/people/");

        let client = SwapiClient::new(&CatalogConfig {
            base_url: "http://localhost:8000/api/".to_string(),
            ..CatalogConfig::default()
        });
        assert_eq!(client.endpoint("planets"), "http://localhost:8000/api/planets/");
    }
}
