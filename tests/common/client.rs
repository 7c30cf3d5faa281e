#![allow(dead_code)]
use reqwest::Url;

pub struct TestAppClient {
    url: Url,
    client: reqwest::Client,
}

impl TestAppClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn home(&self) -> reqwest::Response {
        self.client
            .get(self.url.clone())
            .send()
            .await
            .unwrap()
    }

    pub async fn get_all_todos(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("todo/").unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo(&self, title: &str) -> reqwest::Response {
        self.client
            .post(self.url.join("todo/").unwrap())
            .json(&serde_json::json!({
                "title": title,
            }))
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo_raw(&self, body: &'static str) -> reqwest::Response {
        self.client
            .post(self.url.join("todo").unwrap())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo(&self, todo_id: &str, title: &str, completed: bool) -> reqwest::Response {
        self.client
            .put(self.url.join("todo/").unwrap().join(todo_id).unwrap())
            .json(&serde_json::json!({
                "title": title,
                "completed": completed,
            }))
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo_raw(&self, todo_id: &str, body: &'static str) -> reqwest::Response {
        self.client
            .put(self.url.join("todo/").unwrap().join(todo_id).unwrap())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .delete(self.url.join("todo/").unwrap().join(todo_id).unwrap())
            .send()
            .await
            .unwrap()
    }
}
