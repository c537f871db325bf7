use std::time::Duration;

use clipform_engine::{
    EngineEvent, EngineHandle, FailureKind, JobSubmitter, ProcessRequest, ReqwestSubmitter,
    SubmitError, SubmitSettings,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> SubmitSettings {
    SubmitSettings {
        endpoint: format!("{}/api/process_video", server.uri()),
        ..SubmitSettings::default()
    }
}

fn request(start_time: Option<i64>, end_time: Option<i64>) -> ProcessRequest {
    ProcessRequest {
        url: "https://youtu.be/abc".to_string(),
        start_time,
        end_time,
    }
}

async fn next_event(engine: &EngineHandle) -> EngineEvent {
    for _ in 0..500 {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("no engine event within 5s");
}

#[tokio::test]
async fn posts_json_with_explicit_nulls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process_video"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "url": "https://youtu.be/abc",
            "start_time": 12,
            "end_time": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Done",
            "video_path": "/out/1.mp4"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server)).unwrap();
    let response = submitter
        .submit(1, &request(Some(12), None))
        .await
        .expect("submit ok");

    assert_eq!(response.message, "Done");
    assert_eq!(response.video_path, "/out/1.mp4");
}

#[tokio::test]
async fn error_status_with_error_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process_video"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid url" })))
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server)).unwrap();
    let err = submitter.submit(2, &request(None, None)).await.unwrap_err();

    assert_eq!(
        err,
        SubmitError::Rejected {
            status: 400,
            error: "invalid url".to_string(),
        }
    );
}

#[tokio::test]
async fn html_error_page_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process_video"))
        .respond_with(
            ResponseTemplate::new(500).set_body_raw("<html>oops</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server)).unwrap();
    let err = submitter.submit(3, &request(None, None)).await.unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Transport {
            kind: FailureKind::MalformedBody { status: 500 },
            ..
        }
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_failure() {
    // Grab a free port, then close it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let settings = SubmitSettings {
        endpoint: format!("http://127.0.0.1:{port}/api/process_video"),
        ..SubmitSettings::default()
    };

    let submitter = ReqwestSubmitter::new(settings).unwrap();
    let err = submitter.submit(4, &request(None, None)).await.unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Transport {
            kind: FailureKind::Network,
            ..
        }
    ));
}

#[tokio::test]
async fn invalid_endpoint_is_reported_without_sending() {
    let settings = SubmitSettings {
        endpoint: "not a url".to_string(),
        ..SubmitSettings::default()
    };
    let submitter = ReqwestSubmitter::new(settings).unwrap();
    let err = submitter.submit(5, &request(None, None)).await.unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Transport {
            kind: FailureKind::InvalidEndpoint,
            ..
        }
    ));
}

#[tokio::test]
async fn opt_in_request_timeout_fails_slow_answers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process_video"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "message": "late", "video_path": "x.mp4" })),
        )
        .mount(&server)
        .await;

    let settings = SubmitSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..settings_for(&server)
    };
    let submitter = ReqwestSubmitter::new(settings).unwrap();
    let err = submitter.submit(6, &request(None, None)).await.unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Transport {
            kind: FailureKind::Timeout,
            ..
        }
    ));
}

#[tokio::test]
async fn engine_reports_dispatch_then_settlement() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/process_video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Done",
            "video_path": "http://localhost:8000/videos/final.mp4"
        })))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(settings_for(&server)).unwrap();
    engine.submit(9, request(Some(0), Some(30)));

    assert_eq!(next_event(&engine).await, EngineEvent::Dispatched { job_id: 9 });
    match next_event(&engine).await {
        EngineEvent::Settled { job_id, result } => {
            assert_eq!(job_id, 9);
            let response = result.expect("settled ok");
            assert_eq!(response.video_path, "http://localhost:8000/videos/final.mp4");
        }
        other => panic!("unexpected event {other:?}"),
    }
}
