mod common;
use chrono::{SubsecRound, Utc};
use common::{create_test_app, spawn_test_app, TestAppClient};
use reqwest::StatusCode;
use todo_service::{
    CreatedResponse, DeletedResponse, ErrorResponse, TestStorageBuilder, TodoId, TodosResponse,
    UpdatedResponse,
};

#[tokio::test]
async fn create_and_get_todo() {
    let (app, _service) = create_test_app(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let before = Utc::now().trunc_subsecs(6);

    let res = client.create_todo("buy milk").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<CreatedResponse>().await.unwrap();
    assert_eq!(created.message, "Todo created successfully");

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::OK);
    let todos = res.json::<TodosResponse>().await.unwrap();
    assert_eq!(todos.message, "All todos retrieved");
    assert_eq!(todos.data.len(), 1);

    let todo = &todos.data[0];
    assert_eq!(todo.id, created.id);
    assert_eq!(todo.title, "buy milk");
    assert!(!todo.completed);
    assert!(todo.created_at >= before);
    assert!(todo.created_at <= Utc::now());
}

#[tokio::test]
async fn list_returns_seeded_todos_in_creation_order() {
    let builder = TestStorageBuilder::new().with_todos(5);
    let seeded = builder.todos();
    let (app, _service) = create_test_app(builder).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::OK);
    let todos = res.json::<TodosResponse>().await.unwrap();

    let titles: Vec<_> = todos.data.iter().map(|t| t.title.as_str()).collect();
    let expected: Vec<_> = seeded.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, expected);

    for (item, todo) in todos.data.iter().zip(&seeded) {
        assert_eq!(item.id, todo.id.to_string());
        assert_eq!(item.created_at, todo.created_at);
    }
}

#[tokio::test]
async fn list_empty_collection() {
    let (app, _service) = create_test_app(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn list_with_corrupted_record() {
    let builder = TestStorageBuilder::new().with_todos(2).with_corrupted_record();
    let (app, _service) = create_test_app(builder).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.message, "Could not read the todo collection");

    let res = client.create_todo("still serving").await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn create_todo_with_empty_title() {
    let (app, _service) = create_test_app(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.create_todo("").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.message, "please add a title");

    let res = client.create_todo_raw("{}").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let todos = client
        .get_all_todos()
        .await
        .json::<TodosResponse>()
        .await
        .unwrap();
    assert!(todos.data.is_empty());
}

#[tokio::test]
async fn create_todo_with_malformed_body() {
    let (app, _service) = create_test_app(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.create_todo_raw("{\"title\": ").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.message, "could not decode data");
    assert!(body.error.is_some());

    let res = client.create_todo_raw("{\"title\": 42}").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_todo_ignores_client_fields() {
    let (app, _service) = create_test_app(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client
        .create_todo_raw(r#"{"title":"walk","completed":true,"id":"abc"}"#)
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<CreatedResponse>().await.unwrap();
    assert_ne!(created.id, "abc");

    let todos = client
        .get_all_todos()
        .await
        .json::<TodosResponse>()
        .await
        .unwrap();
    assert_eq!(todos.data.len(), 1);
    assert!(!todos.data[0].completed);
}

#[tokio::test]
async fn update_todo() {
    let builder = TestStorageBuilder::new().with_todos(2);
    let seeded = builder.todos();
    let (app, _service) = create_test_app(builder).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let target = &seeded[0];
    let res = client
        .update_todo(&target.id.to_string(), "walk the dog", true)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<UpdatedResponse>().await.unwrap();
    assert_eq!(updated.message, "Todo updated successfully");
    assert_eq!(updated.data, 1);

    let todos = client
        .get_all_todos()
        .await
        .json::<TodosResponse>()
        .await
        .unwrap();
    let item = todos
        .data
        .iter()
        .find(|t| t.id == target.id.to_string())
        .unwrap();
    assert_eq!(item.title, "walk the dog");
    assert!(item.completed);
    assert_eq!(item.created_at, target.created_at);

    let untouched = todos
        .data
        .iter()
        .find(|t| t.id == seeded[1].id.to_string())
        .unwrap();
    assert_eq!(untouched.title, seeded[1].title);
}

#[tokio::test]
async fn update_todo_with_same_values() {
    let builder = TestStorageBuilder::new().with_todos(1);
    let seeded = builder.todos();
    let (app, _service) = create_test_app(builder).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client
        .update_todo(&seeded[0].id.to_string(), &seeded[0].title, false)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<UpdatedResponse>().await.unwrap().data, 0);
}

#[tokio::test]
async fn update_nonexistent_todo() {
    let (app, _service) = create_test_app(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client
        .update_todo(&TodoId::new().to_string(), "qwerty", true)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<UpdatedResponse>().await.unwrap().data, 0);
}

#[tokio::test]
async fn update_todo_with_empty_title() {
    let builder = TestStorageBuilder::new().with_todos(1);
    let seeded = builder.todos();
    let (app, _service) = create_test_app(builder).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client
        .update_todo(&seeded[0].id.to_string(), "", true)
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.message, "Title cannot be empty");

    let todos = client
        .get_all_todos()
        .await
        .json::<TodosResponse>()
        .await
        .unwrap();
    assert_eq!(todos.data[0].title, seeded[0].title);
    assert!(!todos.data[0].completed);
}

#[tokio::test]
async fn invalid_id_is_rejected() {
    let (app, _service) = create_test_app(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.update_todo("not-an-id", "qwerty", true).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.message, "The id is invalid");

    let res = client.delete_todo("not-an-id").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.message, "The id is invalid");
}

#[tokio::test]
async fn id_with_surrounding_whitespace_is_accepted() {
    let builder = TestStorageBuilder::new().with_todos(1);
    let seeded = builder.todos();
    let (app, _service) = create_test_app(builder).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let padded = format!("%20{}%20", seeded[0].id);
    let res = client.delete_todo(&padded).await;
    assert_eq!(res.status(), StatusCode::OK);
    let deleted = res.json::<DeletedResponse>().await.unwrap();
    assert_eq!(deleted.data.deleted_count, 1);
}

#[tokio::test]
async fn delete_todo() {
    let (app, _service) = create_test_app(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.create_todo("to be removed").await;
    let todo_id = res.json::<CreatedResponse>().await.unwrap().id;

    let res = client.delete_todo(&todo_id).await;
    assert_eq!(res.status(), StatusCode::OK);
    let deleted = res.json::<DeletedResponse>().await.unwrap();
    assert_eq!(deleted.message, "item deleted successfully");
    assert_eq!(deleted.data.deleted_count, 1);

    let res = client.delete_todo(&todo_id).await;
    assert_eq!(res.status(), StatusCode::OK);
    let deleted = res.json::<DeletedResponse>().await.unwrap();
    assert_eq!(deleted.data.deleted_count, 0);

    let todos = client
        .get_all_todos()
        .await
        .json::<TodosResponse>()
        .await
        .unwrap();
    assert!(todos.data.is_empty());
}

#[tokio::test]
async fn delete_body_uses_deleted_count_key() {
    let (app, _service) = create_test_app(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.delete_todo(&TodoId::new().to_string()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["data"], serde_json::json!({ "DeletedCount": 0 }));
}

#[tokio::test]
async fn requests_after_disconnect_fail() {
    let (app, service) = create_test_app(TestStorageBuilder::new().with_todos(1)).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    service.disconnect().await.unwrap();
    assert!(!service.is_connected());

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.message, "Could not fetch the todo collection");

    let res = client.delete_todo(&TodoId::new().to_string()).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn whitespace_title_is_not_empty() {
    let (app, _service) = create_test_app(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.create_todo("   ").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let todo_id = res.json::<CreatedResponse>().await.unwrap().id;

    let todos = client
        .get_all_todos()
        .await
        .json::<TodosResponse>()
        .await
        .unwrap();
    assert_eq!(todos.data.len(), 1);
    assert_eq!(todos.data[0].title, "   ");

    let res = client.update_todo(&todo_id, " \t ", true).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<UpdatedResponse>().await.unwrap().data, 1);

    let todos = client
        .get_all_todos()
        .await
        .json::<TodosResponse>()
        .await
        .unwrap();
    assert_eq!(todos.data[0].title, " \t ");
    assert!(todos.data[0].completed);
}

#[tokio::test]
async fn null_body_is_treated_as_empty() {
    let builder = TestStorageBuilder::new().with_todos(1);
    let seeded = builder.todos();
    let (app, _service) = create_test_app(builder).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.create_todo_raw("null").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.message, "please add a title");

    let res = client
        .update_todo_raw(&seeded[0].id.to_string(), "null")
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.message, "Title cannot be empty");

    let todos = client
        .get_all_todos()
        .await
        .json::<TodosResponse>()
        .await
        .unwrap();
    assert_eq!(todos.data.len(), 1);
    assert_eq!(todos.data[0].title, seeded[0].title);
}
