use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use dogpark::{build_schema, FixtureSeedProvider, GraphqlServer, Seeder};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tower::ServiceExt;

async fn server(latency: Duration) -> Result<GraphqlServer> {
    let store = Seeder::new(FixtureSeedProvider::scenario()).run().await?;
    let schema = build_schema(store.into_shared());
    Ok(GraphqlServer::new(schema, "127.0.0.1", 0).with_latency(latency))
}

fn graphql_request(query: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_post_graphql_query() -> Result<()> {
    let router = server(Duration::ZERO).await?.router();

    let response = router
        .oneshot(graphql_request("{ people { firstName dogs { name } } }"))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await?;
    assert_eq!(body["data"]["people"][0]["firstName"], "Ada");
    assert_eq!(body["data"]["people"][0]["dogs"][1]["name"], "Mr. Pickles");
    assert!(body.get("errors").is_none());
    Ok(())
}

#[tokio::test]
async fn test_mutation_miss_reports_error_over_http() -> Result<()> {
    let router = server(Duration::ZERO).await?.router();

    let response = router
        .oneshot(graphql_request(
            r#"mutation { likeDog(dogId: "nope") { likes } }"#,
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await?;
    assert_eq!(body["errors"][0]["message"], "Dog Not found");
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(body["data"], json!({ "likeDog": null }));
    Ok(())
}

#[tokio::test]
async fn test_graphiql_page() -> Result<()> {
    let router = server(Duration::ZERO).await?.router();

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/graphql")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await?.to_bytes();
    let html = String::from_utf8(bytes.to_vec())?;
    assert!(html.to_lowercase().contains("graphiql"));
    Ok(())
}

#[tokio::test]
async fn test_latency_is_applied() -> Result<()> {
    let router = server(Duration::from_millis(50)).await?.router();

    let started = Instant::now();
    let response = router.oneshot(graphql_request("{ dogs { id } }")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(50));
    Ok(())
}
