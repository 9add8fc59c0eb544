mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::ADMIN_PASSWORD;
use doit_etre_api::types::PhraseCount;

fn admin_url(server: &common::TestServer) -> String {
    format!("{}/api/admin", server.base_url)
}

#[tokio::test]
async fn correct_password_returns_counts_per_user() -> Result<()> {
    let server = common::spawn_server().await?;
    server.fakes.admin.returns(vec![PhraseCount {
        user_uuid: "the-uuid".to_string(),
        phrase_count: 666,
    }]);

    let res = reqwest::Client::new()
        .get(admin_url(&server))
        .header("X-Password", ADMIN_PASSWORD)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, r#"[{"userUuid":"the-uuid","phraseCount":666}]"#);
    Ok(())
}

#[tokio::test]
async fn wrong_password_is_401_with_the_magic_word() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::Client::new()
        .get(admin_url(&server))
        .header("X-Password", "1337H4X0RZ")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.text().await?,
        r#"{"error": "ah ah ah, you didn't say the magic word"}"#
    );
    assert_eq!(server.fakes.admin.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn missing_password_is_401() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::Client::new().get(admin_url(&server)).send().await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(server.fakes.admin.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn repository_errors_are_500_with_their_message() -> Result<()> {
    let server = common::spawn_server().await?;
    server.fakes.admin.fails_with("something done goofed");

    let res = reqwest::Client::new()
        .get(admin_url(&server))
        .header("X-Password", ADMIN_PASSWORD)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.json::<Value>().await?,
        json!({"error": "Query error: something done goofed"})
    );
    Ok(())
}
