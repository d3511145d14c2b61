//! Concurrent load through the relay.

use std::time::Instant;

mod common;

use common::{client, fetch_url, relay_config, start_relay, start_upstream, MockResponse};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_do_not_interfere() {
    // 1. Upstream echoes the requested path
    let upstream = start_upstream(|path| MockResponse::ok(format!("body-for-{path}"))).await;

    // 2. Start relay
    let (relay, shutdown) = start_relay(relay_config()).await;

    // 3. Run load
    let concurrency = 20;
    let requests_per_task = 10;
    let client = client();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for task in 0..concurrency {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            let mut mismatches = Vec::new();
            for n in 0..requests_per_task {
                let path = format!("/t{task}/r{n}");
                let url = fetch_url(relay, &format!("http://{upstream}{path}"));
                match client.get(url).send().await {
                    Ok(res) if res.status().is_success() => {
                        let body = res.text().await.unwrap_or_default();
                        if body != format!("body-for-{path}") {
                            mismatches.push(format!("{path}: {body}"));
                        }
                    }
                    Ok(res) => mismatches.push(format!("{path}: status {}", res.status())),
                    Err(e) => mismatches.push(format!("{path}: {e}")),
                }
            }
            mismatches
        }));
    }

    let mut all_mismatches = Vec::new();
    for task in tasks {
        all_mismatches.extend(task.await.unwrap());
    }

    println!(
        "{} requests in {:?}",
        concurrency * requests_per_task,
        start.elapsed()
    );
    assert!(all_mismatches.is_empty(), "{all_mismatches:#?}");

    shutdown.trigger();
}
