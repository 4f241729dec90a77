use super::*;

#[tokio::test]
async fn test_health_check_succeeds_when_the_service_is_up() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/health")
        .with_status(200)
        .create_async()
        .await;

    let client = ShellService::with_url(&server.url());
    assert!(client.health_check().await.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_health_check_fails_on_http_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(500)
        .create_async()
        .await;

    let client = ShellService::with_url(&server.url());
    assert!(client.health_check().await.is_err());
}

#[tokio::test]
async fn test_health_check_fails_without_a_url() {
    let client = ShellService::with_url("");
    assert!(client.health_check().await.is_err());
}

#[tokio::test]
async fn test_execute_decodes_the_structured_output() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/execute")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "command": "git status"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"stdout":"On branch main\n","stderr":"","exit_code":0,"success":true}"#)
        .create_async()
        .await;

    let client = ShellService::with_url(&server.url());
    let output = client.execute(ShellRequest::new("git status")).await.unwrap();
    assert_eq!(output.stdout, "On branch main\n");
    assert!(output.success);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_execute_surfaces_rejections_as_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/execute")
        .with_status(400)
        .with_body("bad request")
        .create_async()
        .await;

    let client = ShellService::with_url(&server.url());
    let err = client
        .execute(ShellRequest::new("nope"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("bad request"));
}

#[tokio::test]
async fn test_execute_fails_on_a_malformed_response_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/execute")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create_async()
        .await;

    let client = ShellService::with_url(&server.url());
    assert!(client.execute(ShellRequest::new("ls")).await.is_err());
}
