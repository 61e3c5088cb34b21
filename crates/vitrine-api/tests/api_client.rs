// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP-level tests for `ApiClient` against a local mock server.

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine_api::{ApiClient, CatalogApi};
use vitrine_core::AppConfig;
use vitrine_core::error::VitrineError;
use vitrine_core::types::{
    CareerApplication, ClientKind, EnquiryForm, LoginIdentifier, QuotationProduct,
    QuotationRequest, Resume, SearchContext, ServiceId, UserProfile,
};

fn client_for(server: &MockServer) -> ApiClient {
    let config = AppConfig {
        api_base_url: server.uri(),
        request_timeout_secs: 5,
        ..Default::default()
    };
    ApiClient::new(&config).expect("client")
}

#[tokio::test]
async fn fetch_catalog_preserves_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "service_menu_id": "2", "service_name": "App Dev", "description": "Mobile apps",
              "service_img": "app.png", "status": "1" },
            { "service_menu_id": 1, "service_name": "Web Design", "description": "We build sites",
              "service_img": "web.png", "status": "1" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let items = client_for(&server).fetch_catalog().await.expect("catalog");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, ServiceId::from("2"));
    assert_eq!(items[1].id, ServiceId::from("1"));
    assert_eq!(items[1].name, "Web Design");
}

#[tokio::test]
async fn malformed_catalog_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service_search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<b>Warning</b>: mysqli"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_catalog().await.unwrap_err();
    assert!(matches!(err, VitrineError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service_search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_catalog().await.unwrap_err();
    assert!(
        matches!(err, VitrineError::Http { status: 500, ref endpoint } if endpoint == "service_search"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on port 1; the connection is refused immediately.
    let config = AppConfig {
        api_base_url: "http://127.0.0.1:1/api.php".into(),
        request_timeout_secs: 5,
        ..Default::default()
    };
    let client = ApiClient::new(&config).expect("client");

    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, VitrineError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn report_search_posts_context_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/location_user_service"))
        .and(body_string_contains("name=\"service_id\""))
        .and(body_string_contains("web design"))
        .and(body_string_contains("Pune, Maharashtra"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let context = SearchContext {
        query: "web design".into(),
        user_id: Some("118".into()),
        location: Some("Pune, Maharashtra".into()),
    };
    client_for(&server)
        .report_search(&context)
        .await
        .expect("report");
}

#[tokio::test]
async fn login_returns_registration_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/log_in"))
        .and(body_string_contains("name=\"mobile_no\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": 118 })))
        .mount(&server)
        .await;

    let identifier = LoginIdentifier::parse("9876543210").expect("identifier");
    let id = client_for(&server).log_in(&identifier).await.expect("login");
    assert_eq!(id, "118");
}

#[tokio::test]
async fn login_without_id_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/log_in"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": false })))
        .mount(&server)
        .await;

    let identifier = LoginIdentifier::Email("nobody@example.com".into());
    let err = client_for(&server).log_in(&identifier).await.unwrap_err();
    assert!(matches!(err, VitrineError::Rejected(_)), "got {err:?}");
}

#[tokio::test]
async fn profile_is_fetched_and_updated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Asha", "email": "asha@example.com", "mobile_no": "9876543210", "address": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/update_profile"))
        .and(body_string_contains("Kothrud"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut profile = client.fetch_profile("118").await.expect("profile");
    assert_eq!(profile.registration_id, "118");
    assert_eq!(profile.address, "");

    profile.address = "Kothrud".into();
    client.update_profile(&profile).await.expect("update");
}

#[tokio::test]
async fn profile_update_refused_by_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/update_profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": false })))
        .mount(&server)
        .await;

    let profile = UserProfile {
        registration_id: "118".into(),
        name: "Asha".into(),
        email: "asha@example.com".into(),
        mobile_no: "9876543210".into(),
        address: String::new(),
    };
    let err = client_for(&server).update_profile(&profile).await.unwrap_err();
    assert!(matches!(err, VitrineError::Rejected(_)), "got {err:?}");
}

#[tokio::test]
async fn invalid_enquiry_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enquiry"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let form = EnquiryForm {
        name: "Asha".into(),
        ..Default::default()
    };
    let err = client_for(&server).submit_enquiry(&form).await.unwrap_err();
    assert!(matches!(err, VitrineError::Validation(_)));
}

#[tokio::test]
async fn quotation_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/quotation"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("who_you_are=Business%2FOrg"))
        .and(body_string_contains("products=website%2C+androidApp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "done" })))
        .expect(1)
        .mount(&server)
        .await;

    let request = QuotationRequest {
        client_kind: Some(ClientKind::BusinessOrg),
        client_description: "Retail chain".into(),
        products: vec![QuotationProduct::Website, QuotationProduct::AndroidApp],
        product_description: "Online store with app".into(),
        email: "owner@shop.in".into(),
        user_id: "118".into(),
    };
    client_for(&server)
        .submit_quotation(&request)
        .await
        .expect("quotation");
}

fn complete_application() -> CareerApplication {
    CareerApplication {
        name: "Ravi".into(),
        email: "ravi@mail.com".into(),
        contact: "9876543210".into(),
        address: "Pune".into(),
        experience: "2 years".into(),
        expected_salary: "6 LPA".into(),
        qualification: "B.E.".into(),
        job_title: "Developer".into(),
        current_employer: "Acme".into(),
        resume: Some(Resume::new("cv.pdf", "application/pdf", b"%PDF-1.4".to_vec()).expect("resume")),
    }
}

#[tokio::test]
async fn career_application_uploads_resume() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/career"))
        .and(body_string_contains("filename=\"cv.pdf\""))
        .and(body_string_contains("name=\"esalary\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .submit_career(&complete_application())
        .await
        .expect("application");
}

#[tokio::test]
async fn career_application_refused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/career"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "message": "Position closed" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit_career(&complete_application())
        .await
        .unwrap_err();
    assert!(matches!(err, VitrineError::Rejected(ref m) if m == "Position closed"));
}

#[tokio::test]
async fn content_endpoints_decode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/portfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "portfolio_title": "Real Estate App", "portfolio_img": "https://cdn.test/p.png",
              "portfolio_desc": "<p>Listings</p>", "portfolio_link": "https://example.com" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/notification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "title": "Diwali offer", "description": "20% off websites", "sub_date": "2026-10-01" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/slider"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "slider_img": "s1.jpg" }])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let portfolio = client.fetch_portfolio().await.expect("portfolio");
    assert_eq!(portfolio[0].plain_description(), "Listings");
    let notifications = client.fetch_notifications().await.expect("notifications");
    assert_eq!(notifications[0].title, "Diwali offer");
    assert_eq!(notifications[0].image, "");
    let slides = client.fetch_slides().await.expect("slides");
    assert_eq!(slides[0].image, "s1.jpg");
}
