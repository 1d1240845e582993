//! Integration tests for `ApiClient` against a mock backend.
//!
//! Verifies request shape (method, path, bearer header, JSON body) and how
//! responses and error bodies map into models and `ApiError`.

use api::models::{
    AgencySignup, BrandSignup, Commercials, Deliverable, InfluencerSignup, OtpChannel,
    PaymentReceipt, RateItem, SubscriptionStatus,
};
use api::{ApiClient, ApiError, Role, ValidationError};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn profile_json() -> serde_json::Value {
    json!({
        "id": "u1",
        "role": "influencer",
        "name": "Maya Rao",
        "email": "maya@example.com",
        "phone": "9876543210",
        "emailVerified": true,
        "phoneVerified": true,
        "categories": ["Travel"]
    })
}

#[tokio::test]
async fn test_profile_sends_bearer_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token("tok-1");
    let profile = client.profile().await.unwrap();
    assert_eq!(profile.display_name(), "Maya Rao");
    assert_eq!(profile.role, Role::Influencer);
    assert!(profile.phone_verified);
}

#[tokio::test]
async fn test_unauthorized_and_server_errors() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/subscription/plans"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"error": "Plans are unavailable"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token("stale");
    let err = client.profile().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);

    let err = client.plans().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Server {
            status: 503,
            message: "Plans are unavailable".to_string()
        }
    );
    assert_eq!(err.user_message(), "Plans are unavailable");
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/social/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri()).channels().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_signup_otp_normalizes_contact() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/brand/otp/send"))
        .and(body_json(json!({"channel": "phone", "value": "9876543210"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/brand/otp/verify"))
        .and(body_json(json!({"channel": "phone", "value": "9876543210", "otp": "123456"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "verified"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    // Empty success body decodes as an empty acknowledgement
    let ack = client
        .send_signup_otp(Role::Brand, OtpChannel::Phone, "+91 98765 43210")
        .await
        .unwrap();
    assert!(ack.message.is_none());

    let ack = client
        .verify_signup_otp(Role::Brand, OtpChannel::Phone, "98765-43210", " 123456 ")
        .await
        .unwrap();
    assert_eq!(ack.message.as_deref(), Some("verified"));
}

#[tokio::test]
async fn test_invalid_input_never_reaches_backend() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client
        .send_signup_otp(Role::Influencer, OtpChannel::Email, "not-an-email")
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Validation(ValidationError::Email));

    let err = client
        .verify_signup_otp(Role::Influencer, OtpChannel::Email, "a@b.co", "12")
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Validation(ValidationError::Otp));

    let mut commercials = Commercials::default();
    commercials.rates.push(RateItem::new(Deliverable::InstagramReel, 0));
    assert!(matches!(
        client.save_commercials(&commercials).await,
        Err(ApiError::Validation(ValidationError::ZeroPrice(_)))
    ));
}

#[tokio::test]
async fn test_register_influencer() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/influencer/register"))
        .and(body_partial_json(json!({
            "name": "Maya Rao",
            "email": "maya@example.com",
            "phone": "9876543210"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"token": "tok-new", "profile": profile_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let form = InfluencerSignup {
        name: "Maya Rao ".to_string(),
        email: "Maya@Example.com".to_string(),
        phone: "09876543210".to_string(),
        password: "Str0ng!pass".to_string(),
        city: Some("Pune".to_string()),
        categories: vec![],
    };
    let session = ApiClient::new(server.uri()).register(&form).await.unwrap();
    assert_eq!(session.token, "tok-new");
    assert_eq!(session.profile.id, "u1");
}

#[tokio::test]
async fn test_register_brand_and_agency() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/brand/register"))
        .and(body_json(json!({
            "companyName": "Chai Co",
            "contactName": "Arjun Mehta",
            "email": "arjun@chai.co",
            "phone": "9876543210",
            "password": "Str0ng!pass",
            "website": "https://chai.co"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"token": "tok-brand", "profile": profile_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/agency/register"))
        .and(body_json(json!({
            "agencyName": "Reach Talent",
            "contactName": "Priya Nair",
            "email": "priya@reach.in",
            "phone": "9123456780",
            "password": "Str0ng!pass",
            "rosterSize": 25
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"token": "tok-agency", "profile": profile_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let brand = BrandSignup {
        company_name: " Chai Co".to_string(),
        contact_name: "Arjun Mehta".to_string(),
        email: "Arjun@Chai.co".to_string(),
        phone: "+91 98765 43210".to_string(),
        password: "Str0ng!pass".to_string(),
        website: Some("https://chai.co".to_string()),
        industry: None,
    };
    let session = client.register(&brand).await.unwrap();
    assert_eq!(session.token, "tok-brand");

    let agency = AgencySignup {
        agency_name: "Reach Talent".to_string(),
        contact_name: "Priya Nair".to_string(),
        email: "priya@reach.in".to_string(),
        phone: "9123456780".to_string(),
        password: "Str0ng!pass".to_string(),
        website: Some("   ".to_string()),
        roster_size: Some(25),
    };
    let session = client.register(&agency).await.unwrap();
    assert_eq!(session.token, "tok-agency");
}

#[tokio::test]
async fn test_login() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "maya@example.com", "password": "Str0ng!pass"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": "tok-login", "profile": profile_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = ApiClient::new(server.uri())
        .login(" Maya@Example.com ", "Str0ng!pass")
        .await
        .unwrap();
    assert_eq!(session.token, "tok-login");
    assert_eq!(session.profile.email, "maya@example.com");
}

#[tokio::test]
async fn test_login_rejection_keeps_server_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid email or password"})),
        )
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri())
        .login("maya@example.com", "wrong-Pass1!")
        .await
        .unwrap_err();
    assert!(!err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Invalid email or password");
}

#[tokio::test]
async fn test_contact_update_paths() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/profile/register/email"))
        .and(body_json(json!({"channel": "email", "value": "new@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "OTP sent"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/profile/register/email/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token("tok");
    client
        .request_contact_otp(OtpChannel::Email, "New@Example.com")
        .await
        .unwrap();
    let profile = client
        .verify_contact_otp(OtpChannel::Email, "new@example.com", "654321")
        .await
        .unwrap();
    assert_eq!(profile.id, "u1");
}

#[tokio::test]
async fn test_missing_media_kit_is_default() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/commercials"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .mount(&server)
        .await;

    let commercials = ApiClient::new(server.uri()).commercials().await.unwrap();
    assert_eq!(commercials, Commercials::default());
}

#[tokio::test]
async fn test_subscription_handshake() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/subscription/order"))
        .and(body_json(json!({"planId": "pro"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderId": "order_9",
            "amount": 99900,
            "currency": "INR",
            "planId": "pro"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/subscription/verify"))
        .and(body_json(json!({
            "razorpay_order_id": "order_9",
            "razorpay_payment_id": "pay_9",
            "razorpay_signature": "sig_9",
            "planId": "pro"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "sub_9",
            "planId": "pro",
            "planName": "Pro",
            "status": "active",
            "amount": 99900
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/subscription/cancel/sub_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "sub_9",
            "planId": "pro",
            "status": "cancelled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token("tok");
    let order = client.create_order("pro").await.unwrap();
    assert_eq!(order.order_id, "order_9");

    let receipt = PaymentReceipt {
        order_id: order.order_id.clone(),
        payment_id: "pay_9".to_string(),
        signature: "sig_9".to_string(),
    };
    let record = client.verify_payment("pro", &receipt).await.unwrap();
    assert!(record.is_cancellable());

    let cancelled = client.cancel_subscription(&record.id).await.unwrap();
    assert_eq!(cancelled.status, SubscriptionStatus::Cancelled);
}

#[tokio::test]
async fn test_youtube_linking() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/social/youtube/auth"))
        .and(query_param(
            "redirect_uri",
            "https://app.example.com/dashboard/social/youtube/callback",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"url": "https://accounts.google.com/o/oauth2/auth?x=1"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/social/youtube/verify"))
        .and(body_json(json!({"code": "4/abc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c1",
            "platform": "youtube",
            "title": "Maya Travels",
            "subscribers": 1200
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/social/channels/c1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token("tok");
    let url = client
        .youtube_auth_url("https://app.example.com/dashboard/social/youtube/callback")
        .await
        .unwrap();
    assert!(url.starts_with("https://accounts.google.com"));

    let channel = client.verify_youtube("4/abc").await.unwrap();
    assert_eq!(channel.audience_label(), "1.2K");

    client.unlink_channel(&channel.id).await.unwrap();

    assert_eq!(
        client.youtube_auth_url(" ").await.unwrap_err(),
        ApiError::Validation(ValidationError::Required("Redirect URI"))
    );

    // Blank code is rejected locally
    assert_eq!(
        client.verify_youtube("").await.unwrap_err(),
        ApiError::Validation(ValidationError::Required("Authorization code"))
    );
}
