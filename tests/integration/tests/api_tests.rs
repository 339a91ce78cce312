//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, API_PORT, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, category_body, check_test_env, contact_body, fixtures::*,
    item_body, review_body, sub_category_body, unique_name, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

/// Create a category through the admin API and return its id
async fn create_category(server: &TestServer, token: &str) -> i64 {
    let response = server
        .post_auth(
            "/api/admin/v1/categories/new",
            token,
            &category_body(&unique_name("Category")),
        )
        .await
        .unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_passcode_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    assert!(!token.is_empty());

    let response = server
        .get_auth("/api/admin/v1/dashboard/counts", &token)
        .await
        .unwrap();
    let _: DashboardCountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_send_otp_unknown_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = format!("{}@example.com", unique_name("nobody"));
    let response = server
        .post("/api/auth/v1/send-otp", &json!({ "email": email }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_check_otp_wrong_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.admin_session().await.unwrap();

    let response = server
        .post(
            "/api/auth/v1/check-otp",
            &json!({ "email": session.email, "otp": "000000x" }),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_OTP");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/admin/v1/categories").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTHORIZATION");

    let response = server
        .get_auth("/api/admin/v1/categories", "not-a-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_category_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let name = unique_name("Phones");
    let response = server
        .post_auth("/api/admin/v1/categories/new", &token, &category_body(&name))
        .await
        .unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(
        created.message,
        format!("Category '{name}' created successfully")
    );

    // Same name again conflicts
    let response = server
        .post_auth("/api/admin/v1/categories/new", &token, &category_body(&name))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/admin/v1/categories/{}", created.id), &token)
        .await
        .unwrap();
    let detail: CategoryDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.category.name, name);
    assert_eq!(detail.sub_category_count, 0);

    let response = server
        .post_auth(
            "/api/admin/v1/categories/disable",
            &token,
            &json!({ "id": created.id }),
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        message.message,
        format!("Category {name} has been disabled.")
    );

    let response = server
        .get_auth(
            &format!("/api/admin/v1/categories?search={name}&is_enabled=0"),
            &token,
        )
        .await
        .unwrap();
    let listing: ListingResponse<CategoryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.total_count, 1);
    assert!(!listing.data[0].is_enabled);

    let response = server
        .post_auth(
            "/api/admin/v1/categories/delete",
            &token,
            &json!({ "id": created.id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/admin/v1/categories/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_category_listing_all_counts_follow_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let marker = unique_name("Counted");
    for (suffix, is_enabled) in [("on", true), ("off", false)] {
        let response = server
            .post_auth(
                "/api/admin/v1/categories/new",
                &token,
                &json!({ "name": format!("{marker}-{suffix}"), "is_enabled": is_enabled }),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get_auth(&format!("/api/admin/v1/categories/all?search={marker}"), &token)
        .await
        .unwrap();
    let listing: ListingResponse<CategoryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.total_count, 2);
    assert_eq!(listing.count.enabled, Some(1));
    assert_eq!(listing.count.disabled, Some(1));
    assert!(listing.count.all >= 2);
}

#[tokio::test]
async fn test_invalid_id_path() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    for path in ["/api/admin/v1/items/abc", "/api/admin/v1/items/0"] {
        let response = server.get_auth(path, &token).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
    }
}

#[tokio::test]
async fn test_scoped_sub_category_listing_needs_parent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .get_auth("/api/admin/v1/sub-categories", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let category_id = create_category(&server, &token).await;
    let response = server
        .post_auth(
            "/api/admin/v1/sub-categories/new",
            &token,
            &sub_category_body(category_id, &unique_name("Android")),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/admin/v1/sub-categories?category_id={category_id}"),
            &token,
        )
        .await
        .unwrap();
    let listing: ListingResponse<serde_json::Value> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.total_count, 1);

    // Unknown parent in the id set
    let response = server
        .get_auth(
            "/api/admin/v1/sub-categories/all?category_ids=[1,oops]",
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_category_tree() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let category_id = create_category(&server, &token).await;
    server
        .post_auth(
            "/api/admin/v1/sub-categories/new",
            &token,
            &sub_category_body(category_id, &unique_name("Tablets")),
        )
        .await
        .unwrap();

    let response = server.get("/api/data/v1/categories").await.unwrap();
    let tree: Vec<CategoryNode> = assert_json(response, StatusCode::OK).await.unwrap();
    let node = tree
        .iter()
        .find(|node| node.id == category_id)
        .expect("new category missing from tree");
    assert_eq!(node.sub_categories.len(), 1);
}

// ============================================================================
// Item Tests
// ============================================================================

#[tokio::test]
async fn test_item_with_children() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let category_id = create_category(&server, &token).await;

    let name = unique_name("Laptop");
    let response = server
        .post_auth(
            "/api/admin/v1/items/new",
            &token,
            &item_body(category_id, None, &name),
        )
        .await
        .unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/admin/v1/items/{}", created.id), &token)
        .await
        .unwrap();
    let item: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(item.name, name);
    assert_eq!(item.category_id, category_id);
    assert_eq!(item.item_properties.len(), 2);
    assert_eq!(item.item_properties[0].key, "Colour");
    assert_eq!(item.item_images.len(), 1);

    // Edit replaces the child rows
    let mut body = item_body(category_id, None, &name);
    body["id"] = json!(created.id);
    body["item_properties"] = json!([{ "key": "Colour", "value": "Silver" }]);
    let response = server
        .post_auth("/api/admin/v1/items/edit", &token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/end-user/v1/items/{}", created.id))
        .await
        .unwrap();
    let item: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(item.item_properties.len(), 1);
    assert_eq!(item.item_properties[0].value, "Silver");

    // Disabled items disappear from the storefront
    let response = server
        .post_auth(
            "/api/admin/v1/items/disable",
            &token,
            &json!({ "id": created.id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/end-user/v1/items/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_auth(
            "/api/admin/v1/items/delete",
            &token,
            &json!({ "id": created.id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_item_with_unknown_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth(
            "/api/admin/v1/items/new",
            &token,
            &item_body(i64::from(i32::MAX), None, &unique_name("Orphan")),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_storefront_item_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let category_id = create_category(&server, &token).await;

    for _ in 0..3 {
        server
            .post_auth(
                "/api/admin/v1/items/new",
                &token,
                &item_body(category_id, None, &unique_name("Watch")),
            )
            .await
            .unwrap();
    }

    let response = server
        .get(&format!(
            "/api/end-user/v1/items?category_id={category_id}&limit=2&page=2"
        ))
        .await
        .unwrap();
    let listing: ListingResponse<ItemResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.total_count, 3);
    assert_eq!(listing.page, 2);
    assert_eq!(listing.limit, 2);
    assert_eq!(listing.data.len(), 1);
    assert!(listing.data.iter().all(|item| item.is_enabled));
}

// ============================================================================
// Review and Contact Tests
// ============================================================================

#[tokio::test]
async fn test_review_moderation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post("/api/end-user/v1/reviews/new", &review_body(4))
        .await
        .unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/admin/v1/reviews/{}", created.id), &token)
        .await
        .unwrap();
    let review: ReviewResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!review.is_approved);
    assert_eq!(review.rating, 4);

    let response = server
        .post_auth(
            "/api/admin/v1/reviews/approve",
            &token,
            &json!({ "id": created.id }),
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        message.message,
        format!("Review {} has been approved.", created.id)
    );

    let response = server
        .get("/api/end-user/v1/reviews?limit=100")
        .await
        .unwrap();
    let listing: ListingResponse<ReviewResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listing.data.iter().all(|review| review.is_approved));
}

#[tokio::test]
async fn test_review_rating_out_of_range() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/end-user/v1/reviews/new", &review_body(9))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_contact_email_mark_as_read() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post("/api/end-user/v1/emails/new", &contact_body())
        .await
        .unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/admin/v1/emails/mark-as-read",
            &token,
            &json!({ "id": created.id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/admin/v1/emails/{}", created.id), &token)
        .await
        .unwrap();
    let email: ContactEmailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(email.id, created.id);
    assert!(email.is_read);
}

#[tokio::test]
async fn test_advertisement_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth(
            "/api/admin/v1/advertisements/new",
            &token,
            &json!({ "image_url": "https://cdn.example.com/ads/summer.png" }),
        )
        .await
        .unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/admin/v1/advertisements/disable",
            &token,
            &json!({ "id": created.id }),
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        message.message,
        format!("Advertisement With Id: {} has been disabled.", created.id)
    );

    let response = server
        .get_auth(&format!("/api/admin/v1/advertisements/{}", created.id), &token)
        .await
        .unwrap();
    let advertisement: AdvertisementResponse =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(advertisement.image_url, "https://cdn.example.com/ads/summer.png");
    assert!(!advertisement.is_enabled);

    let response = server
        .post_auth(
            "/api/admin/v1/advertisements/delete",
            &token,
            &json!({ "id": created.id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/admin/v1/advertisements/{}", created.id), &token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_ADVERTISEMENT");
}

#[tokio::test]
async fn test_advertisement_requires_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth(
            "/api/admin/v1/advertisements/new",
            &token,
            &json!({ "image_url": "" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_who_create_edit_and_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let key = unique_name("Founded");
    let response = server
        .post_auth(
            "/api/admin/v1/who/new",
            &token,
            &json!({ "key": key, "value": "2015", "mdi_icon": "mdi-calendar" }),
        )
        .await
        .unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(
        created.message,
        format!("New entity 'Who' created successfully with Id: {}", created.id)
    );

    let response = server
        .post_auth(
            "/api/admin/v1/who/edit",
            &token,
            &json!({ "id": created.id, "key": key, "value": "2016" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/admin/v1/who?search={key}"), &token)
        .await
        .unwrap();
    let listing: ListingResponse<WhoResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.total_count, 1);
    assert_eq!(listing.data[0].id, created.id);
    assert_eq!(listing.data[0].value.as_deref(), Some("2016"));
    assert_eq!(listing.data[0].mdi_icon, None);

    let response = server
        .get_auth(&format!("/api/admin/v1/who/{}", created.id + 1_000_000), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_document_upload() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .upload_auth(
            "/api/admin/v1/document/upload?model_name=item",
            &token,
            "price list.pdf",
            b"%PDF-1.4 test".to_vec(),
        )
        .await
        .unwrap();
    let document: DocumentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(document.document_url.contains("/item/"));
    assert!(document.document_url.ends_with("_price_list.pdf"));
}

#[tokio::test]
async fn test_document_upload_too_large() {
    if !check_test_env().await {
        return;
    }

    let mut config = integration_tests::test_config().unwrap();
    config.storage.max_file_size_mb = 1;
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .upload_auth(
            "/api/admin/v1/document/upload",
            &token,
            "big.bin",
            vec![0_u8; 2 * 1024 * 1024],
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::PAYLOAD_TOO_LARGE)
        .await
        .unwrap();
    assert_eq!(body.error.code, "PAYLOAD_TOO_LARGE");
}
