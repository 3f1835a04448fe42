//! End-to-end scenarios for the request router.

use std::sync::Arc;

use bytes::Bytes;
use http::{Method, StatusCode};

use request_router::chain::{HandlerStage, PredicateStage, Router};
use request_router::config::{RouterConfig, StageConfig};
use request_router::http::{Request, Response};
use request_router::stages::{self, BadRequestFallback};
use request_router::storage::{ImageStore, InMemoryImageStore};
use request_router::ConfigurationError;

fn image_chain(store: Arc<InMemoryImageStore>) -> Router {
    stages::build_chain(&RouterConfig::default(), store).unwrap()
}

#[test]
fn test_get_image_scenario() {
    let store = Arc::new(InMemoryImageStore::new());
    store.seed("5", "image-bytes");
    let router = image_chain(store);

    let resp = router
        .handle(&Request::new(Method::GET, "api/images/5"))
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body(), Some(&Bytes::from("image-bytes")));
}

#[test]
fn test_put_image_scenario() {
    let store = Arc::new(InMemoryImageStore::new());
    store.seed("5", "old");
    let router = image_chain(store.clone());

    // Existing image: replaced, 204
    let resp = router
        .handle(&Request::with_body(Method::PUT, "api/images/5", "new"))
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(store.fetch("5"), Some(Bytes::from("new")));

    // Unknown image: 404, body persisted anyway
    let resp = router
        .handle(&Request::with_body(Method::PUT, "api/images/9", "payload"))
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.fetch("9"), Some(Bytes::from("payload")));
}

#[test]
fn test_post_image_scenario() {
    let store = Arc::new(InMemoryImageStore::new());
    let router = image_chain(store.clone());

    let resp = router
        .handle(&Request::with_body(Method::POST, "api/images", "fresh"))
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.location().expect("creation response carries Location");
    let id = location.strip_prefix("/api/images/").unwrap();
    assert_eq!(store.fetch(id), Some(Bytes::from("fresh")));
}

#[test]
fn test_unmatched_request_falls_back() {
    let store = Arc::new(InMemoryImageStore::new());
    let router = image_chain(store);

    let resp = router
        .handle(&Request::new(Method::DELETE, "api/images/5"))
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_reordering_non_matching_stages_is_stable() {
    let store = Arc::new(InMemoryImageStore::new());
    store.seed("5", "image-bytes");

    // put/post before get: GET api/images/5 still lands on get_image
    let config = RouterConfig {
        stages: vec![
            StageConfig::item("put_image", "api/images/"),
            StageConfig::collection("post_image", "api/images"),
            StageConfig::item("get_image", "api/images/"),
            StageConfig::kind_only("fallback"),
        ],
        ..RouterConfig::default()
    };
    let router = stages::build_chain(&config, store).unwrap();

    let resp = router
        .handle(&Request::new(Method::GET, "api/images/5"))
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body(), Some(&Bytes::from("image-bytes")));
}

#[test]
fn test_construction_rejects_malformed_chains() {
    assert!(matches!(
        Router::new(Vec::new()),
        Err(ConfigurationError::EmptyChain)
    ));

    let non_terminal: Vec<Box<dyn HandlerStage>> = vec![Box::new(PredicateStage::new(
        "never",
        |_| false,
        |_| Response::bad_request(),
    ))];
    assert!(matches!(
        Router::new(non_terminal),
        Err(ConfigurationError::FallbackNotTerminal { stage }) if stage == "never"
    ));
}

#[test]
fn test_new_request_kind_is_a_new_stage() {
    let store: Arc<dyn ImageStore> = Arc::new(InMemoryImageStore::new());

    // Support DELETE by inserting one stage; no existing stage changes.
    let delete_stage = PredicateStage::new(
        "delete_image",
        |req| req.method() == Method::DELETE && req.path().starts_with("api/images/"),
        |_| Response::with_status(StatusCode::NO_CONTENT),
    );

    let mut chain: Vec<Box<dyn HandlerStage>> = RouterConfig::default()
        .stages
        .iter()
        .map(|cfg| stages::build_stage(cfg, store.clone()).unwrap())
        .collect();
    chain.insert(chain.len() - 1, Box::new(delete_stage));
    let router = Router::new(chain).unwrap();

    let resp = router
        .handle(&Request::new(Method::DELETE, "api/images/5"))
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Everything else still behaves as before
    let resp = router
        .handle(&Request::new(Method::PATCH, "api/images/5"))
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_shared_router_across_threads() {
    let store = Arc::new(InMemoryImageStore::new());
    store.seed("5", "image-bytes");
    let router = Arc::new(image_chain(store));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let router = router.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    let resp = router
                        .handle(&Request::new(Method::GET, "api/images/5"))
                        .unwrap();
                    assert_eq!(resp.status(), StatusCode::OK);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_fallback_alone_is_a_valid_chain() {
    let router = Router::new(vec![
        Box::new(BadRequestFallback::new()) as Box<dyn HandlerStage>
    ])
    .unwrap();

    let resp = router.handle(&Request::new(Method::GET, "anything")).unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
