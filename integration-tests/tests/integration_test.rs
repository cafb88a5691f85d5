use reqwest::redirect::Policy;
use reqwest::Client;
use std::env;

const FALLBACK_REDIRECT: &str = "https://tecnomadas.com";

fn api_endpoint() -> String {
    env::var("API_ENDPOINT").expect("API_ENDPOINT is not set")
}

fn http_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(2))
        .redirect(Policy::none())
        .build()
        .unwrap()
}

#[ignore]
#[tokio::test]
async fn when_search_param_missing_should_return_400() {
    let response = http_client()
        .get(format!("{}search", api_endpoint()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Search param not provided");
}

#[ignore]
#[tokio::test]
async fn when_search_param_provided_should_relay_payload() {
    let response = http_client()
        .get(format!("{}search?search=rust", api_endpoint()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(!response.text().await.unwrap().is_empty());
}

#[ignore]
#[tokio::test]
async fn when_short_code_unknown_should_redirect_to_fallback() {
    let response = http_client()
        .get(format!("{}this-code-does-not-exist", api_endpoint()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 302);
    assert_eq!(
        response.headers().get("Location").unwrap(),
        FALLBACK_REDIRECT
    );
}
