mod common;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::task::JoinSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_file_pool_concurrent_allocations_share_urls() {
    let (pool, path) = common::create_file_test_pool().await;
    let service = Arc::new(common::create_test_service(pool.clone()));

    let mut tasks = JoinSet::new();
    for i in 0..200 {
        let service = service.clone();
        let url = format!("https://example.com/shared/{}", i % 50);
        tasks.spawn(async move {
            let allocation = service.allocate_or_find(&url).await.unwrap();
            (url, allocation)
        });
    }

    let mut created = 0;
    let mut codes_by_url: HashMap<String, HashSet<String>> = HashMap::new();
    while let Some(result) = tasks.join_next().await {
        let (url, allocation) = result.unwrap();
        if allocation.is_new {
            created += 1;
        }
        codes_by_url
            .entry(url)
            .or_default()
            .insert(allocation.short_code().to_string());
    }

    assert_eq!(created, 50);
    assert_eq!(codes_by_url.len(), 50);
    assert!(codes_by_url.values().all(|codes| codes.len() == 1));

    let distinct: HashSet<&String> = codes_by_url.values().flatten().collect();
    assert_eq!(distinct.len(), 50);
    assert_eq!(common::row_count(&pool).await, 50);

    common::remove_test_database(pool, path).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_file_pool_concurrent_resolves_lose_no_hits() {
    let (pool, path) = common::create_file_test_pool().await;
    let service = Arc::new(common::create_test_service(pool.clone()));

    let allocation = service
        .allocate_or_find("https://example.com/busy")
        .await
        .unwrap();
    let code = allocation.short_code().to_string();

    let mut tasks = JoinSet::new();
    for _ in 0..300 {
        let service = service.clone();
        let code = code.clone();
        tasks.spawn(async move { service.resolve(&code).await.unwrap().hit_count });
    }

    let mut seen = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        seen.insert(result.unwrap());
    }

    // Every resolve observed its own post-increment value.
    assert_eq!(seen.len(), 300);
    assert_eq!(seen.iter().min(), Some(&1));
    assert_eq!(seen.iter().max(), Some(&300));
    assert_eq!(common::hit_count(&pool, &code).await, 300);

    common::remove_test_database(pool, path).await;
}
