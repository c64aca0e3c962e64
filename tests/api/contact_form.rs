use std::time::Duration;

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use lead_capture::{
    submission::{ContactForm, Field, FormFields, FormState, FormVariant, ProxyClient},
    theme::{NavigationTarget, Theme},
};
use serde_json::json;
use wiremock::{
    matchers::{any, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::helpers::{spawn_app, spawn_app_with_redirect_decoration, REDIRECT_URL};

const VARIANT_REDIRECT_URL: &str = "https://landing.example.com/variant";

fn variant(open_in: NavigationTarget) -> FormVariant {
    FormVariant {
        theme: Theme::DarkNeon,
        open_in,
        redirect_url: VARIANT_REDIRECT_URL.into(),
        redirect_delay: Duration::from_millis(500),
    }
}

fn filled_form(open_in: NavigationTarget) -> (ContactForm, FormFields) {
    let typed = FormFields {
        full_name: Name().fake(),
        email: SafeEmail().fake(),
        phone: PhoneNumber().fake(),
    };
    let mut form = ContactForm::new(variant(open_in));
    form.set_field(Field::FullName, typed.full_name.clone()).unwrap();
    form.set_field(Field::Email, typed.email.clone()).unwrap();
    form.set_field(Field::Phone, typed.phone.clone()).unwrap();
    (form, typed)
}

#[tokio::test]
async fn a_2xx_from_the_proxy_moves_the_form_to_success_and_clears_it() {
    let proxy = MockServer::start().await;
    Mock::given(path("/api/contact"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&proxy)
        .await;
    let client = ProxyClient::new(&proxy.uri()).unwrap();
    let (mut form, _) = filled_form(NavigationTarget::SameTab);
    assert_eq!(form.state(), FormState::Idle);

    let navigation = client.submit(&mut form).await.unwrap().unwrap();

    assert_eq!(form.state(), FormState::Success);
    assert_eq!(form.fields(), &FormFields::default());
    assert_eq!(navigation.url, VARIANT_REDIRECT_URL);
    assert_eq!(navigation.target, NavigationTarget::SameTab);
    assert_eq!(navigation.delay, Duration::from_millis(500));
}

#[tokio::test]
async fn a_non_2xx_from_the_proxy_moves_the_form_to_error_and_keeps_the_fields() {
    for status in [400u16, 422, 500, 503] {
        let proxy = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&proxy)
            .await;
        let client = ProxyClient::new(&proxy.uri()).unwrap();
        let (mut form, typed) = filled_form(NavigationTarget::NewTab);

        let navigation = client.submit(&mut form).await.unwrap();

        assert!(navigation.is_none());
        assert_eq!(form.state(), FormState::Error, "status {}", status);
        assert_eq!(form.fields(), &typed, "status {}", status);
    }
}

#[tokio::test]
async fn a_proxy_mounted_under_a_path_prefix_is_reached() {
    let proxy = MockServer::start().await;
    Mock::given(path("/landing/api/contact"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&proxy)
        .await;
    let client = ProxyClient::new(&format!("{}/landing", proxy.uri())).unwrap();
    let (mut form, _) = filled_form(NavigationTarget::NewTab);

    client.submit(&mut form).await.unwrap();

    assert_eq!(form.state(), FormState::Success);
}

#[tokio::test]
async fn an_unreachable_proxy_moves_the_form_to_error() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = ProxyClient::new(&format!("http://127.0.0.1:{}", port)).unwrap();
    let (mut form, typed) = filled_form(NavigationTarget::NewTab);

    client.submit(&mut form).await.unwrap();

    assert_eq!(form.state(), FormState::Error);
    assert_eq!(form.fields(), &typed);
}

#[tokio::test]
async fn the_form_posts_its_fields_to_the_proxy() {
    let proxy = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&proxy)
        .await;
    let client = ProxyClient::new(&proxy.uri()).unwrap();
    let (mut form, typed) = filled_form(NavigationTarget::NewTab);

    client.submit(&mut form).await.unwrap();

    let requests = proxy.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "fullName": typed.full_name,
            "email": typed.email,
            "phone": typed.phone
        })
    );
}

#[tokio::test]
async fn the_form_submits_end_to_end_through_the_proxy() {
    let app = spawn_app().await;
    Mock::given(path("/manage/api/contact/send-contact-from-landingpage"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&app.upstream_server)
        .await;
    let client = ProxyClient::new(&app.address).unwrap();
    let (mut form, typed) = filled_form(NavigationTarget::NewTab);

    let navigation = client.submit(&mut form).await.unwrap().unwrap();

    assert_eq!(form.state(), FormState::Success);
    assert_eq!(navigation.url, VARIANT_REDIRECT_URL);
    assert_eq!(
        app.upstream_bodies().await,
        vec![json!({
            "fullName": typed.full_name,
            "email": typed.email,
            "phone": typed.phone,
            "source": "demoapp"
        })]
    );
}

#[tokio::test]
async fn a_decorated_reply_redirects_to_the_proxy_destination() {
    let app = spawn_app_with_redirect_decoration().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&app.upstream_server)
        .await;
    let client = ProxyClient::new(&app.address).unwrap();
    let (mut form, _) = filled_form(NavigationTarget::NewTab);

    let navigation = client.submit(&mut form).await.unwrap().unwrap();

    assert_eq!(navigation.url, REDIRECT_URL);
}

#[tokio::test]
async fn an_upstream_rejection_surfaces_as_a_form_error() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "duplicate"})))
        .expect(1)
        .mount(&app.upstream_server)
        .await;
    let client = ProxyClient::new(&app.address).unwrap();
    let (mut form, typed) = filled_form(NavigationTarget::NewTab);

    client.submit(&mut form).await.unwrap();

    assert_eq!(form.state(), FormState::Error);
    assert_eq!(form.fields(), &typed);
    assert_eq!(form.status_message(), Some("Có lỗi xảy ra, vui lòng thử lại."));
}
