mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

#[tokio::test]
async fn lists_states_in_id_order() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token().await?;

    let body = reqwest::Client::new()
        .get(server.url("/states"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;

    let states = body.as_array().expect("array of states");
    assert_eq!(states.len(), 3);
    assert_eq!(
        states[0],
        json!({ "stateId": 1, "stateName": "Andaman and Nicobar Islands", "population": 380581 })
    );
    let ids: Vec<i64> = states.iter().map(|s| s["stateId"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 8]);
    Ok(())
}

#[tokio::test]
async fn gets_single_state_or_empty_body() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    let body = client
        .get(server.url("/states/8"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body, json!({ "stateId": 8, "stateName": "Karnataka", "population": 61095297 }));

    let res = client.get(server.url("/states/99")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "");
    Ok(())
}

#[tokio::test]
async fn stats_sum_districts_of_the_state() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    let districts = [
        json!({ "districtName": "Bagalkot", "stateId": 8, "cases": 2323, "cured": 2000, "active": 315, "deaths": 8 }),
        json!({ "districtName": "Ballari", "stateId": 8, "cases": 1000, "cured": 900, "active": 90, "deaths": 10 }),
        json!({ "districtName": "Anantapur", "stateId": 2, "cases": 500, "cured": 400, "active": 95, "deaths": 5 }),
    ];
    for district in &districts {
        let res = client.post(server.url("/districts")).bearer_auth(&token).json(district).send().await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let stats = client
        .get(server.url("/states/8/stats"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(
        stats,
        json!({ "totalCases": 3323, "totalCured": 2900, "totalActive": 405, "totalDeaths": 18 })
    );

    let empty = client
        .get(server.url("/states/1/stats"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(
        empty,
        json!({ "totalCases": null, "totalCured": null, "totalActive": null, "totalDeaths": null })
    );
    Ok(())
}

#[tokio::test]
async fn state_path_accepts_trailing_slash() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token().await?;

    let body = reqwest::Client::new()
        .get(server.url("/states/8/"))
        .bearer_auth(&token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["stateName"], "Karnataka");
    Ok(())
}

#[tokio::test]
async fn non_numeric_ids_are_bad_requests() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token().await?;
    let client = reqwest::Client::new();

    for path in ["/states/abc", "/states/abc/stats", "/districts/abc"] {
        let res = client.get(server.url(path)).bearer_auth(&token).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", path);
    }
    Ok(())
}
