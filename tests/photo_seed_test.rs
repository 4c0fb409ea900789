use dogpark::adapters::random_seed::FALLBACK_PHOTO;
use dogpark::core::{PhotoSource, SeedProvider};
use dogpark::{DogCeoClient, RandomSeedProvider, Seeder};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_dog_ceo_client_returns_message_url() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/breeds/image/random");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "message": "https://images.dog.ceo/breeds/poodle-toy/n02113624_1.jpg",
                "status": "success"
            }));
    });

    let client = DogCeoClient::new(server.url("/api/breeds/image/random"));
    let photo = client.random_photo().await.unwrap();

    api_mock.assert();
    assert_eq!(photo, "https://images.dog.ceo/breeds/poodle-toy/n02113624_1.jpg");
}

#[tokio::test]
async fn test_dog_ceo_client_rejects_error_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/down");
        then.status(503);
    });
    server.mock(|when, then| {
        when.method(GET).path("/error");
        then.status(200)
            .json_body(json!({ "message": "Breed not found", "status": "error" }));
    });

    assert!(DogCeoClient::new(server.url("/down")).random_photo().await.is_err());
    assert!(DogCeoClient::new(server.url("/error")).random_photo().await.is_err());
}

#[tokio::test]
async fn test_random_seed_fetches_one_photo_per_dog() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/random");
        then.status(200).json_body(json!({
            "message": "https://images.dog.ceo/breeds/labrador/n02099712_7.jpg",
            "status": "success"
        }));
    });

    let provider = RandomSeedProvider::new(DogCeoClient::new(server.url("/random")), 2, 6)
        .with_concurrency(3);
    let seed = provider.generate().await.unwrap();

    api_mock.assert_hits(6);
    assert_eq!(seed.dogs.len(), 6);
    assert!(seed
        .dogs
        .iter()
        .all(|d| d.photo.ends_with("n02099712_7.jpg")));
}

#[tokio::test]
async fn test_seeding_survives_photo_outage() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/random");
        then.status(500);
    });

    let provider = RandomSeedProvider::new(DogCeoClient::new(server.url("/random")), 2, 20);
    let store = Seeder::new(provider).run().await.unwrap();

    assert_eq!(store.list_people().len(), 2);
    assert_eq!(store.list_dogs().len(), 20);
    assert!(store.list_dogs().iter().all(|d| d.photo == FALLBACK_PHOTO));

    let owned: usize = store.list_people().iter().map(|p| p.dogs.len()).sum();
    assert_eq!(owned, 20);
    assert!(store.check_links().is_ok());
}
