/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use imgur::v3::{
        AlbumProps, ApiParams, Client, GallerySection, GallerySort, ImageSource, ImageUpload,
        ImgurError, PrivacyLevel, Vote, Window, parse_choice,
    };
    use reqwest::Method;
    use serde_json::json;
    use std::net::TcpListener;
    use std::time::Duration;
    use wiremock::matchers::{
        any, body_string_contains, header, header_regex, method, path, query_param,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn anonymous_get_is_signed_with_client_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/gallery/hot/viral/day/0"))
            .and(query_param("showViral", "true"))
            .and(header("authorization", "Client-ID 123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!([{"id": "a"}]))))
            .expect(1)
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let data = client
            .gallery()
            .gallery(GallerySection::Hot, GallerySort::Viral, Window::Day, 0, true)
            .await
            .unwrap();
        assert_eq!(data, json!([{"id": "a"}]));
    }

    #[tokio::test]
    async fn user_token_signs_with_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/image/abc"))
            .and(header("authorization", "Bearer Y"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!({"id": "abc"}))))
            .expect(1)
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        client
            .tokens()
            .restore(helpers::token("Y", None, helpers::now(), 3600));
        let data = client.image().image("abc").await.unwrap();
        assert_eq!(data["id"], "abc");
    }

    #[tokio::test]
    async fn execute_returns_whole_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/account/someone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!({"url": "someone"}))))
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let body = client
            .execute(Method::GET, "account/someone", &ApiParams::new())
            .await
            .unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["url"], "someone");

        #[derive(serde::Deserialize)]
        struct Account {
            url: String,
        }
        let account: Account = client
            .get_as("account/someone", &ApiParams::new())
            .await
            .unwrap();
        assert_eq!(account.url, "someone");
    }

    #[tokio::test]
    async fn empty_body_defaults_to_unsuccessful_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/3/album/xyz"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let body = client
            .execute(Method::DELETE, "album/xyz", &ApiParams::new())
            .await
            .unwrap();
        assert_eq!(body, json!({"data": [], "success": false}));
        assert_eq!(client.album().delete("xyz").await.unwrap(), json!([]));
    }

    #[tokio::test]
    async fn post_params_are_form_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/3/album"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("title=My+Album"))
            .and(body_string_contains("privacy=hidden"))
            .and(body_string_contains("ids%5B%5D=a"))
            .and(body_string_contains("ids%5B%5D=b"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!({"id": "new", "deletehash": "dh"}))))
            .expect(1)
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let props = AlbumProps {
            title: Some("My Album".into()),
            privacy: Some(PrivacyLevel::Hidden),
            ids: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        let data = client.album().create(&props).await.unwrap();
        assert_eq!(data["deletehash"], "dh");
    }

    #[tokio::test]
    async fn file_upload_is_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/3/image"))
            .and(header_regex("content-type", "^multipart/form-data"))
            .and(body_string_contains("filename=\"cat.png\""))
            .and(body_string_contains("not really a png"))
            .and(body_string_contains("name=\"name\"\r\n\r\nkitty.png"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!({"id": "img"}))))
            .expect(1)
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let upload = ImageUpload::new(ImageSource::Bytes {
            file_name: "cat.png".into(),
            data: "not really a png".into(),
        })
        .name("kitty.png")
        .title("Cat");
        assert_eq!(client.image().upload(&upload).await.unwrap()["id"], "img");
    }

    #[tokio::test]
    async fn local_file_upload_reads_the_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/3/image"))
            .and(header_regex("content-type", "^multipart/form-data"))
            .and(body_string_contains("local file contents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!({"id": "img"}))))
            .expect(1)
            .mount(&server)
            .await;

        let file = std::env::temp_dir().join(format!("imgur-upload-{}.jpg", std::process::id()));
        std::fs::write(&file, "local file contents").unwrap();

        let client = helpers::client_for(&server);
        let result = client
            .image()
            .upload(&ImageUpload::new(ImageSource::File(file.clone())))
            .await;
        std::fs::remove_file(&file).ok();
        assert_eq!(result.unwrap()["id"], "img");
    }

    #[tokio::test]
    async fn url_upload_is_form_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/3/image"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("type=url"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!({"id": "img"}))))
            .expect(1)
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let upload = ImageUpload::new(ImageSource::Url("https://example.com/cat.png".into()));
        client.image().upload(&upload).await.unwrap();
    }

    #[tokio::test]
    async fn exhausted_user_credits_are_rate_limit_errors() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("X-RateLimit-UserRemaining", "0")
                    .insert_header("X-RateLimit-UserLimit", "10")
                    .set_body_json(json!({"data": {"error": "Too Many Requests", "request": "/3/image/abc"}})),
            )
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let err = client.image().image("abc").await.unwrap_err();
        assert!(err.is_rate_limited());
        assert!(err.to_string().contains("limit is 10"));
        assert_eq!(err.status(), Some(429));
    }

    #[tokio::test]
    async fn error_envelope_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"data": {"request": "/here", "error": "oops"}})),
            )
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let err = client.get("here", &ApiParams::new()).await.unwrap_err();
        match err {
            ImgurError::Api { message, status, request } => {
                assert_eq!(message, "Request to: /here failed with: \"oops\"");
                assert_eq!(status, 400);
                assert_eq!(request.as_deref(), Some("/here"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(400).set_body_string("hihi"))
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let err = client.get("anything", &ApiParams::new()).await.unwrap_err();
        assert!(matches!(err, ImgurError::Transport { .. }));
        assert_eq!(err.to_string(), "hihi");
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn non_json_success_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let err = client.get("anything", &ApiParams::new()).await.unwrap_err();
        assert!(matches!(err, ImgurError::Transport { .. }));
        assert_eq!(err.status(), Some(200));
    }

    #[tokio::test]
    async fn slow_response_is_timeout() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(helpers::envelope(json!([])))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = helpers::config_for(&server).timeout(Duration::from_millis(100));
        let client = Client::new(config).unwrap();
        let err = client.get("anything", &ApiParams::new()).await.unwrap_err();
        assert!(matches!(err, ImgurError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        helpers::init_logging();
        let config = imgur::v3::ClientConfig::new(imgur::v3::Creds::anonymous("123"))
            .base_url(&format!("http://{addr}/3"));
        let client = Client::new(config).unwrap();
        let err = client.get("anything", &ApiParams::new()).await.unwrap_err();
        assert!(matches!(err, ImgurError::Transport { status: None, .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn validation_fails_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        let errors = vec![
            client.comment().create("abc", "   ").await.unwrap_err(),
            client.gallery().search("", GallerySort::Top, Window::All, 0).await.unwrap_err(),
            client.album().add_images("abc", &[]).await.unwrap_err(),
            client.image().update("abc", None, None).await.unwrap_err(),
            client.notification().mark_as_read(&[]).await.unwrap_err(),
            parse_choice::<Vote>("vote", "sideways").unwrap_err(),
        ];
        for err in errors {
            assert!(matches!(err, ImgurError::Validation(_)), "got {err:?}");
        }
    }

    #[tokio::test]
    async fn votes_and_ids_land_in_the_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/3/gallery/a%20b/vote/veto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!(true))))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/3/comment/42/vote/up"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!(true))))
            .expect(1)
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        assert_eq!(client.gallery().vote("a b", Vote::Veto).await.unwrap(), json!(true));
        assert_eq!(client.comment().vote("42", Vote::Up).await.unwrap(), json!(true));
    }

    #[tokio::test]
    async fn conversation_and_notification_endpoints() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/conversations/7/2/10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!({"id": 7}))))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/3/conversations/someone"))
            .and(body_string_contains("body=hello"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!(true))))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/notification"))
            .and(query_param("new", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!({"replies": []}))))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/3/notification"))
            .and(body_string_contains("ids=1%2C2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(helpers::envelope(json!(true))))
            .expect(1)
            .mount(&server)
            .await;

        let client = helpers::client_for(&server);
        assert_eq!(client.conversation().conversation("7", 2, 10).await.unwrap()["id"], 7);
        client.conversation().send_message("someone", "hello").await.unwrap();
        client.notification().notifications(false).await.unwrap();
        client.notification().mark_as_read(&["1", "2"]).await.unwrap();
    }
}
