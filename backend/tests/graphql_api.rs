//! End-to-end tests through the GraphQL schema and the HTTP router.

use async_graphql::{Request, Response, Variables};
use axum::body::{Body, to_bytes};
use axum::http::{Request as HttpRequest, StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use fltbase::app::{AppState, build_app};
use fltbase::config::Config;
use fltbase::db::{Database, schema_sync};
use fltbase::graphql::{FltbaseSchema, build_schema};

async fn database() -> Database {
    let db = Database::connect_in_memory().await.unwrap();
    schema_sync::sync_schema(db.pool()).await.unwrap();
    db
}

async fn run(schema: &FltbaseSchema, query: &str, variables: Value) -> Response {
    let request = Request::new(query).variables(Variables::from_json(variables));
    schema.execute(request).await
}

async fn data(schema: &FltbaseSchema, query: &str, variables: Value) -> Value {
    let response = run(schema, query, variables).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

fn error_code(response: &Response) -> Option<String> {
    let error = response.errors.first()?;
    match error.extensions.as_ref()?.get("code")? {
        async_graphql::Value::String(code) => Some(code.clone()),
        _ => None,
    }
}

const CREATE_STATE: &str = r#"
    mutation($code: String!, $name: String!) {
        CreateState(Input: { Code: $code, Name: $name }) { Id }
    }
"#;

const CREATE_CITY: &str = r#"
    mutation($name: String!, $state: String) {
        CreateCity(Input: { Name: $name, StateId: $state }) { Id }
    }
"#;

const CREATE_AIRPORT: &str = r#"
    mutation($id: String!, $type: FacilityType!, $elevation: Float, $state: String, $city: String) {
        CreateAirport(Input: {
            SiteId: "00000.*A",
            FacilityType: $type,
            AirportId: $id,
            Name: $id,
            OwnershipType: PU,
            Usage: PU,
            Latitude: 0.0,
            Longitude: 0.0,
            Status: O,
            Elevation: $elevation,
            FuelTypes: "100LL, A",
            StateId: $state,
            CityId: $city
        }) { Id FuelTypes }
    }
"#;

/// Illinois/Chicago with ORD and MDW, Colorado/Denver with DEN, plus an
/// unattached heliport.
async fn seeded_schema() -> FltbaseSchema {
    let schema = build_schema(database().await, false);

    let il = data(&schema, CREATE_STATE, json!({"code": "IL", "name": "Illinois"})).await;
    let il = il["CreateState"]["Id"].as_str().unwrap().to_string();
    let co = data(&schema, CREATE_STATE, json!({"code": "CO", "name": "Colorado"})).await;
    let co = co["CreateState"]["Id"].as_str().unwrap().to_string();

    let chicago = data(&schema, CREATE_CITY, json!({"name": "Chicago", "state": il})).await;
    let chicago = chicago["CreateCity"]["Id"].as_str().unwrap().to_string();
    let denver = data(&schema, CREATE_CITY, json!({"name": "Denver", "state": co})).await;
    let denver = denver["CreateCity"]["Id"].as_str().unwrap().to_string();

    let airports = [
        json!({"id": "ORD", "type": "AIRPORT", "elevation": 680.0, "state": il, "city": chicago}),
        json!({"id": "MDW", "type": "AIRPORT", "elevation": 620.0, "state": il, "city": chicago}),
        json!({"id": "DEN", "type": "AIRPORT", "elevation": 5434.0, "state": co, "city": denver}),
        json!({"id": "7IL9", "type": "HELIPORT"}),
    ];
    for vars in airports {
        let created = data(&schema, CREATE_AIRPORT, vars).await;
        assert_eq!(created["CreateAirport"]["FuelTypes"], json!("100LL,A"));
    }

    schema
}

fn airport_ids(data: &Value) -> Vec<String> {
    data["Airports"]["Edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["Node"]["AirportId"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_where_input_with_edge_predicate() {
    let schema = seeded_schema().await;
    let result = data(
        &schema,
        r#"{
            Airports(Where: {
                HasStateWith: [{ Name: { EqualFold: "ILLINOIS" } }],
                FacilityType: { Eq: AIRPORT }
            }) {
                TotalCount
                Edges { Node { AirportId State { Code } City { Name } } }
            }
        }"#,
        json!({}),
    )
    .await;

    assert_eq!(result["Airports"]["TotalCount"], json!(2));
    assert_eq!(airport_ids(&result), vec!["MDW", "ORD"]);
    let first = &result["Airports"]["Edges"][0]["Node"];
    assert_eq!(first["State"]["Code"], json!("IL"));
    assert_eq!(first["City"]["Name"], json!("Chicago"));
}

#[tokio::test]
async fn test_not_and_or_combinators() {
    let schema = seeded_schema().await;
    let result = data(
        &schema,
        r#"{
            Airports(Where: {
                Not: { HasState: true },
                Or: [{ FacilityType: { Eq: HELIPORT } }, { Elevation: { Gt: 5000 } }]
            }) {
                Edges { Node { AirportId } }
            }
        }"#,
        json!({}),
    )
    .await;
    assert_eq!(airport_ids(&result), vec!["7IL9"]);

    let empty_or = data(
        &schema,
        r#"{ Airports(Where: { Or: [] }) { TotalCount } }"#,
        json!({}),
    )
    .await;
    assert_eq!(empty_or["Airports"]["TotalCount"], json!(0));
}

#[tokio::test]
async fn test_dynamic_conditions() {
    let schema = seeded_schema().await;
    let conditions = json!([
        {"has": "city", "with": [{"field": "name", "op": "HAS_PREFIX", "value": "Chi"}]},
        {"field": "airport_id", "op": "NOT_IN", "value": ["MDW"]}
    ]);
    let result = data(
        &schema,
        r#"query($c: JSON) { Airports(Conditions: $c) { Edges { Node { AirportId } } } }"#,
        json!({ "c": conditions }),
    )
    .await;
    assert_eq!(airport_ids(&result), vec!["ORD"]);
}

#[tokio::test]
async fn test_predicate_errors_carry_codes() {
    let schema = seeded_schema().await;
    let query = r#"query($c: JSON) { Airports(Conditions: $c) { TotalCount } }"#;

    let bad_token = json!([{"field": "facility_type", "op": "EQ", "value": "NOT_A_VALID_ENUM"}]);
    let response = run(&schema, query, json!({ "c": bad_token })).await;
    assert_eq!(error_code(&response).as_deref(), Some("INVALID_ARGUMENT"));

    let unknown_field = json!([{"field": "runway_count", "op": "GT", "value": 1}]);
    let response = run(&schema, query, json!({ "c": unknown_field })).await;
    assert_eq!(error_code(&response).as_deref(), Some("UNKNOWN_FIELD"));

    let unknown_edge = json!([{"has": "runways"}]);
    let response = run(&schema, query, json!({ "c": unknown_edge })).await;
    assert_eq!(error_code(&response).as_deref(), Some("UNKNOWN_RELATION"));

    let mixed = json!([{"and": [], "or": [{"has": "state"}]}]);
    let response = run(&schema, query, json!({ "c": mixed })).await;
    assert_eq!(error_code(&response).as_deref(), Some("INVALID_ARGUMENT"));

    let bad_date = r#"{ Airports(Where: { ActivationDate: { Gt: "yesterday" } }) { TotalCount } }"#;
    let response = run(&schema, bad_date, json!({})).await;
    assert_eq!(error_code(&response).as_deref(), Some("INVALID_ARGUMENT"));
}

#[tokio::test]
async fn test_pagination_cursors() {
    let schema = seeded_schema().await;
    let query = r#"
        query($after: String) {
            Airports(First: 3, After: $after, OrderBy: [{ Field: Elevation, Direction: DESC }]) {
                TotalCount
                PageInfo { HasNextPage EndCursor }
                Edges { Node { AirportId } }
            }
        }
    "#;

    let first = data(&schema, query, json!({ "after": null })).await;
    assert_eq!(airport_ids(&first), vec!["DEN", "ORD", "MDW"]);
    assert_eq!(first["Airports"]["TotalCount"], json!(4));
    assert_eq!(first["Airports"]["PageInfo"]["HasNextPage"], json!(true));

    let cursor = first["Airports"]["PageInfo"]["EndCursor"].clone();
    let rest = data(&schema, query, json!({ "after": cursor })).await;
    assert_eq!(airport_ids(&rest), vec!["7IL9"]);
    assert_eq!(rest["Airports"]["PageInfo"]["HasNextPage"], json!(false));

    let response = run(&schema, query, json!({ "after": "garbage" })).await;
    assert_eq!(error_code(&response).as_deref(), Some("INVALID_CURSOR"));
}

#[tokio::test]
async fn test_failed_mutation_writes_nothing() {
    let schema = seeded_schema().await;
    let response = run(
        &schema,
        CREATE_CITY,
        json!({"name": "Nowhere", "state": "no-such-state"}),
    )
    .await;
    assert_eq!(error_code(&response).as_deref(), Some("INVALID_ARGUMENT"));

    let cities = data(
        &schema,
        r#"{ Cities(Where: { Name: { Eq: "Nowhere" } }) { TotalCount } }"#,
        json!({}),
    )
    .await;
    assert_eq!(cities["Cities"]["TotalCount"], json!(0));

    let response = run(
        &schema,
        CREATE_AIRPORT,
        json!({"id": "XXX", "type": "AIRPORT", "city": "no-such-city"}),
    )
    .await;
    assert_eq!(error_code(&response).as_deref(), Some("INVALID_ARGUMENT"));
}

#[tokio::test]
async fn test_update_and_delete() {
    let schema = seeded_schema().await;
    let chicago = data(
        &schema,
        r#"{ Cities(Where: { Name: { Eq: "Chicago" } }) { Edges { Node { Id } } } }"#,
        json!({}),
    )
    .await;
    let id = chicago["Cities"]["Edges"][0]["Node"]["Id"].clone();

    let updated = data(
        &schema,
        r#"mutation($id: String!) {
            UpdateCity(Id: $id, Input: { ClearState: true }) { Name State { Code } }
        }"#,
        json!({ "id": id }),
    )
    .await;
    assert_eq!(updated["UpdateCity"]["Name"], json!("Chicago"));
    assert_eq!(updated["UpdateCity"]["State"], Value::Null);

    let deleted = data(
        &schema,
        r#"mutation($id: String!) { DeleteCity(Id: $id) }"#,
        json!({ "id": id }),
    )
    .await;
    assert_eq!(deleted["DeleteCity"], id);

    // Airports survive with the edge cleared
    let orphans = data(
        &schema,
        r#"{ Airports(Where: { HasCity: false }) { TotalCount } }"#,
        json!({}),
    )
    .await;
    assert_eq!(orphans["Airports"]["TotalCount"], json!(3));

    let response = run(
        &schema,
        r#"mutation($id: String!) { DeleteCity(Id: $id) }"#,
        json!({ "id": id }),
    )
    .await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_http_query_endpoint() {
    let db = database().await;
    let config = Config {
        address: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        debug: false,
    };
    let app = build_app(AppState::new(config, db));

    let body = json!({ "query": "{ States { TotalCount } }" }).to_string();
    let request = HttpRequest::builder()
        .method("POST")
        .uri("/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["data"]["States"]["TotalCount"], json!(0));
}
