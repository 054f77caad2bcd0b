use crate::helpers::spawn_app;

#[tokio::test]
async fn an_unknown_path_gets_a_404_with_the_response_envelope() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = reqwest::Client::new()
        .get(format!("{}/definitely-not-a-route", &app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(404, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Endpoint not found");
}

#[tokio::test]
async fn a_wrong_method_on_a_known_path_gets_a_404() {
    // Arrange
    let app = spawn_app().await;

    // Act - /submit-form is POST-only
    let response = reqwest::Client::new()
        .get(format!("{}/submit-form", &app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(404, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response body");
    assert_eq!(body["message"], "Endpoint not found");
}
