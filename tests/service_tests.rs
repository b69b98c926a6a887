// tests/service_tests.rs

mod common;

use common::{
    character_request, planet_request, seed_character, seed_planet, seed_user, setup_pool,
    user_request,
};
use starwars_api::{
    data,
    error::AppError,
    models::{
        character::CreateCharacterRequest, planet::CreatePlanetRequest, user::CreateUserRequest,
    },
    service,
    utils::hash::verify_password,
};

fn validation_message(result: Result<impl std::fmt::Debug, AppError>) -> String {
    match result {
        Err(AppError::Validation(msg)) => msg,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn create_user_then_get_returns_stored_fields() {
    let pool = setup_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let created = service::user::create_user(&mut conn, user_request("luke@rebels.org", "luke"))
        .await
        .unwrap();
    let fetched = data::user::get_by_id(&mut conn, created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.email, "luke@rebels.org");
    assert_eq!(fetched.username, "luke");
    assert_eq!(fetched.first_name.as_deref(), Some("Luke"));
    assert_eq!(fetched.last_name, None);
    assert!(fetched.is_active);
}

#[tokio::test]
async fn user_password_is_hashed_and_never_serialized() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "leia@rebels.org", "leia").await;

    assert_ne!(user.password, "password123");
    assert!(verify_password("password123", &user.password).unwrap());

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["email"], "leia@rebels.org");
    assert_eq!(json["is_active"], true);
}

#[tokio::test]
async fn user_missing_required_field_is_named() {
    let pool = setup_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    for field in ["email", "username", "password", "is_active"] {
        let mut req = user_request("han@falcon.net", "han");
        match field {
            "email" => req.email = None,
            "username" => req.username = None,
            "password" => req.password = None,
            _ => req.is_active = None,
        }

        let msg = validation_message(service::user::create_user(&mut conn, req).await);
        assert!(msg.contains(&format!("'{}'", field)), "{}", msg);
    }

    assert!(data::user::list(&mut conn).await.unwrap().is_empty());
}

#[tokio::test]
async fn user_empty_required_field_is_rejected() {
    let pool = setup_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let req = CreateUserRequest {
        username: Some(String::new()),
        ..user_request("han@falcon.net", "han")
    };

    let msg = validation_message(service::user::create_user(&mut conn, req).await);
    assert_eq!(msg, "The 'username' property of the user cannot be empty");
}

#[tokio::test]
async fn user_duplicate_email_and_username_are_rejected() {
    let pool = setup_pool().await;
    seed_user(&pool, "luke@rebels.org", "luke").await;
    let mut conn = pool.acquire().await.unwrap();

    let same_email = service::user::create_user(&mut conn, user_request("luke@rebels.org", "other"))
        .await;
    match same_email {
        Err(AppError::Duplicate(msg)) => assert!(msg.contains("luke@rebels.org")),
        other => panic!("expected duplicate error, got {:?}", other),
    }

    let same_username =
        service::user::create_user(&mut conn, user_request("other@rebels.org", "luke")).await;
    match same_username {
        Err(AppError::Duplicate(msg)) => assert!(msg.contains("luke")),
        other => panic!("expected duplicate error, got {:?}", other),
    }

    assert_eq!(data::user::list(&mut conn).await.unwrap().len(), 1);
}

#[tokio::test]
async fn storage_unique_violation_maps_to_duplicate() {
    let pool = setup_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    // Bypass the validator to hit the UNIQUE constraint directly.
    let new_character = starwars_api::models::character::NewCharacter {
        name: "Yoda".to_string(),
        specie: "Unknown".to_string(),
        height: "66".to_string(),
        gender: "male".to_string(),
    };
    data::character::create(&mut conn, &new_character).await.unwrap();
    let second = data::character::create(&mut conn, &new_character).await;

    assert!(matches!(second, Err(AppError::Duplicate(_))));
}

#[tokio::test]
async fn character_validation_and_round_trip() {
    let pool = setup_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let missing = CreateCharacterRequest {
        specie: None,
        ..character_request("Chewbacca")
    };
    let msg = validation_message(service::character::create_character(&mut conn, missing).await);
    assert_eq!(msg, "The 'specie' property of the character was not properly written");

    let empty = CreateCharacterRequest {
        gender: Some(String::new()),
        ..character_request("Chewbacca")
    };
    let msg = validation_message(service::character::create_character(&mut conn, empty).await);
    assert!(msg.contains("'gender'"));

    let created =
        service::character::create_character(&mut conn, character_request("Chewbacca"))
            .await
            .unwrap();
    let fetched = data::character::get_by_id(&mut conn, created.id).await.unwrap();
    assert_eq!(created, fetched);
    assert_eq!(fetched.name, "Chewbacca");
    assert_eq!(fetched.specie, "Human");
    assert_eq!(fetched.height, "172");
    assert_eq!(fetched.gender, "male");

    let duplicate =
        service::character::create_character(&mut conn, character_request("Chewbacca")).await;
    assert!(matches!(duplicate, Err(AppError::Duplicate(_))));
}

#[tokio::test]
async fn planet_validation_and_round_trip() {
    let pool = setup_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let missing = CreatePlanetRequest {
        diameter: None,
        ..planet_request("Tatooine")
    };
    let msg = validation_message(service::planet::create_planet(&mut conn, missing).await);
    assert_eq!(msg, "The 'diameter' property of the planet was not properly written");

    let empty = CreatePlanetRequest {
        name: Some(String::new()),
        ..planet_request("Tatooine")
    };
    let msg = validation_message(service::planet::create_planet(&mut conn, empty).await);
    assert_eq!(msg, "The 'name' property of the planet cannot be empty");

    let created = service::planet::create_planet(&mut conn, planet_request("Tatooine"))
        .await
        .unwrap();
    let fetched = data::planet::get_by_id(&mut conn, created.id).await.unwrap();
    assert_eq!(created, fetched);
    assert_eq!(fetched.terrain, "desert");

    let duplicate = service::planet::create_planet(&mut conn, planet_request("Tatooine")).await;
    assert!(matches!(duplicate, Err(AppError::Duplicate(_))));
}

#[tokio::test]
async fn validator_has_no_side_effects() {
    let pool = setup_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let new_planet = service::planet::validate_new_planet(&mut conn, planet_request("Hoth"))
        .await
        .unwrap();
    assert_eq!(new_planet.name, "Hoth");
    assert!(data::planet::list(&mut conn).await.unwrap().is_empty());
}

#[tokio::test]
async fn lookups_of_missing_ids_are_not_found() {
    let pool = setup_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    assert!(matches!(
        data::user::get_by_id(&mut conn, 42).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        data::character::get_by_id(&mut conn, 42).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        data::planet::get_by_id(&mut conn, 42).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn deleting_missing_ids_is_not_found() {
    let pool = setup_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    assert!(matches!(
        service::user::delete_user(&mut conn, 42).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service::character::delete_character(&mut conn, 42).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service::planet::delete_planet(&mut conn, 42).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service::favorite::remove_character_favorite(&mut conn, 1, 42).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service::favorite::remove_planet_favorite(&mut conn, 1, 42).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn delete_returns_confirmation_and_removes_row() {
    let pool = setup_pool().await;
    let character = seed_character(&pool, "Greedo").await;
    let planet = seed_planet(&pool, "Alderaan").await;
    let user = seed_user(&pool, "wedge@rebels.org", "wedge").await;
    let mut conn = pool.acquire().await.unwrap();

    let msg = service::character::delete_character(&mut conn, character.id)
        .await
        .unwrap();
    assert_eq!(msg, "The character 'Greedo' disappeared into the galaxy");

    let msg = service::planet::delete_planet(&mut conn, planet.id).await.unwrap();
    assert_eq!(msg, "The planet 'Alderaan' was destroyed for the Empire successfully");

    let msg = service::user::delete_user(&mut conn, user.id).await.unwrap();
    assert_eq!(msg, "The user 'wedge' deleted successfully");

    assert!(data::character::list(&mut conn).await.unwrap().is_empty());
    assert!(data::planet::list(&mut conn).await.unwrap().is_empty());
    assert!(data::user::list(&mut conn).await.unwrap().is_empty());
}

#[tokio::test]
async fn lists_are_ordered_by_id() {
    let pool = setup_pool().await;
    seed_planet(&pool, "Naboo").await;
    seed_planet(&pool, "Endor").await;
    seed_planet(&pool, "Bespin").await;
    let mut conn = pool.acquire().await.unwrap();

    let names: Vec<String> = data::planet::list(&mut conn)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, ["Naboo", "Endor", "Bespin"]);
}

#[tokio::test]
async fn over_long_fields_are_rejected_and_nothing_is_stored() {
    let pool = setup_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let long_name = "x".repeat(500);

    let msg = validation_message(
        service::character::create_character(&mut conn, character_request(&long_name)).await,
    );
    assert_eq!(msg, "The 'name' property of the character is too long");

    let tall = CreateCharacterRequest {
        height: Some("9".repeat(21)),
        ..character_request("Chewbacca")
    };
    let msg = validation_message(service::character::create_character(&mut conn, tall).await);
    assert_eq!(msg, "The 'height' property of the character is too long");

    let msg = validation_message(
        service::planet::create_planet(&mut conn, planet_request(&long_name)).await,
    );
    assert_eq!(msg, "The 'name' property of the planet is too long");

    let long_email = format!("{}@rebels.org", "l".repeat(120));
    let msg = validation_message(
        service::user::create_user(&mut conn, user_request(&long_email, "luke")).await,
    );
    assert_eq!(msg, "The 'email' property of the user is too long");

    let long_last_name = CreateUserRequest {
        last_name: Some("S".repeat(121)),
        ..user_request("luke@rebels.org", "luke")
    };
    let msg = validation_message(service::user::create_user(&mut conn, long_last_name).await);
    assert_eq!(msg, "The 'last_name' property of the user is too long");

    assert!(data::character::list(&mut conn).await.unwrap().is_empty());
    assert!(data::planet::list(&mut conn).await.unwrap().is_empty());
    assert!(data::user::list(&mut conn).await.unwrap().is_empty());
}
