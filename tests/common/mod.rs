#![allow(dead_code, unused_imports)]

mod client;
mod server;

use axum::Router;
pub use client::TestAppClient;
use todo_service::Service;
use todo_service::{build_app, Settings};

pub use server::{spawn_test_app, TestAppHandle};
use todo_service::TestStorageBuilder;

pub async fn create_test_app(builder: TestStorageBuilder) -> (Router, Service) {
    let settings = Settings::from_file("test").unwrap();
    create_test_app_with_settings(builder, settings).await
}

pub async fn create_test_app_with_settings(
    builder: TestStorageBuilder,
    settings: Settings,
) -> (Router, Service) {
    let service = Service::new(builder.build_todo().await, builder.build_connection().await);

    (build_app(service.clone(), settings), service)
}
