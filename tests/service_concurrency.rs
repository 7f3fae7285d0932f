use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tinylink::prelude::*;
use tokio::task::JoinSet;

/// Proposes every code exactly twice, guaranteeing collisions.
struct RepeatingCodeGenerator {
    calls: AtomicUsize,
}

impl CodeGenerator for RepeatingCodeGenerator {
    fn generate(&self) -> String {
        let n = self.calls.fetch_add(1, Ordering::Relaxed) / 2;
        format!("c{n:05}")
    }
}

async fn encode_concurrently(
    service: Arc<LinkService<InMemoryLinkRepository>>,
    count: usize,
) -> Vec<Link> {
    let mut tasks = JoinSet::new();

    for i in 0..count {
        let service = service.clone();
        tasks.spawn(async move {
            service
                .create_short_link(format!("https://example.com/{i}"))
                .await
        });
    }

    let mut links = Vec::with_capacity(count);
    while let Some(result) = tasks.join_next().await {
        links.push(result.unwrap().unwrap());
    }
    links
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_encodes_produce_distinct_codes() {
    let service = Arc::new(LinkService::new(
        Arc::new(InMemoryLinkRepository::new()),
        Arc::new(RandomCodeGenerator::default()),
        10,
    ));

    let links = encode_concurrently(service.clone(), 100).await;

    let codes: HashSet<_> = links.iter().map(|l| l.code.clone()).collect();
    assert_eq!(codes.len(), 100);
    assert_eq!(service.link_count().await, 100);

    for link in &links {
        assert_eq!(service.resolve(&link.code).await.unwrap(), link.target_url);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_encodes_survive_forced_collisions() {
    let service = Arc::new(LinkService::new(
        Arc::new(InMemoryLinkRepository::new()),
        Arc::new(RepeatingCodeGenerator {
            calls: AtomicUsize::new(0),
        }),
        100,
    ));

    let links = encode_concurrently(service.clone(), 100).await;

    let codes: HashSet<_> = links.iter().map(|l| l.code.clone()).collect();
    assert_eq!(codes.len(), 100);

    let snapshot = service.list_links().await;
    assert_eq!(snapshot.len(), 100);
    for link in &links {
        assert_eq!(snapshot[&link.code], link.target_url);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deletes_remove_once() {
    let service = Arc::new(LinkService::new(
        Arc::new(InMemoryLinkRepository::new()),
        Arc::new(RandomCodeGenerator::default()),
        10,
    ));

    let link = service
        .create_short_link("https://example.com".to_string())
        .await
        .unwrap();

    let mut tasks = JoinSet::new();
    for _ in 0..20 {
        let service = service.clone();
        let code = link.code.clone();
        tasks.spawn(async move { service.delete_link(&code).await });
    }

    let mut removed = 0;
    while let Some(result) = tasks.join_next().await {
        if result.unwrap().is_ok() {
            removed += 1;
        }
    }

    assert_eq!(removed, 1);
    assert_eq!(service.link_count().await, 0);
}
