use std::collections::HashSet;
use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::build_app;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = build_app();
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/api/v1/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json")));
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_client_crud_roundtrip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/api/v1/clients", app.base_url);

    let res = c.post(&url).json(&json!({"name": "Globex", "email": "hank@globex.test"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();

    let res = c
        .put(format!("{url}/{id}"))
        .json(&json!({"name": "Globex Corp", "email": "hank@globex.test", "company": "Globex"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["company"], "Globex");

    let res = c.delete(format!("{url}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.delete(format!("{url}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn e2e_parallel_creates_are_all_kept() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/api/v1/items", app.base_url);

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let c = c.clone();
            let url = url.clone();
            tokio::spawn(async move {
                let res = c.post(&url).json(&json!({"name": format!("item-{i}")})).send().await?;
                anyhow::ensure!(res.status() == HttpStatusCode::CREATED, "status {}", res.status());
                let body = res.json::<Value>().await?;
                Ok::<String, anyhow::Error>(body["id"].as_str().unwrap_or_default().to_string())
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for h in handles {
        ids.insert(h.await??);
    }
    assert_eq!(ids.len(), 100);
    assert!(!ids.contains(""));

    let list = c.get(&url).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 100);
    Ok(())
}
