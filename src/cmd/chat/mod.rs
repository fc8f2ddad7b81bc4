// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod server;

#[cfg(test)]
mod tests {
    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use reqwest::redirect::Policy;
    use tokio::spawn;

    use crate::cmd::chat::server::ChatConfig;
    use crate::cmd::chat::server::start_chat_server;
    use crate::error::Fallible;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    fn config(port: u16) -> ChatConfig {
        ChatConfig {
            group: None,
            host: TEST_HOST.to_string(),
            port,
            // Long enough that the simulated feed never fires during a test.
            interval_secs: 3600,
        }
    }

    async fn get_page(port: u16) -> Fallible<String> {
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/")).await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }

    async fn post_message(port: u16, message: &str) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("message", message)])
            .send()
            .await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }

    #[tokio::test]
    async fn test_unknown_group() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let mut config = config(port);
        config.group = Some("Underwater Basket Weaving".to_string());
        let result = start_chat_server(config).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(
            err.to_string(),
            "error: no study group named 'Underwater Basket Weaving'"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_chat_e2e() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = config(port);
        spawn(async move { start_chat_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        // The default group renders with its seeded transcript.
        let html = get_page(port).await?;
        assert!(html.contains("Biology Study Group"));
        assert!(html.contains("5 members"));
        assert!(html.contains("Hey everyone! Ready for our study session?"));

        // Post a message. It shows up attributed to the local user.
        let html = post_message(port, "Anyone up for revision?").await?;
        assert!(html.contains("Anyone up for revision?"));
        assert!(html.contains(r#"class="message mine""#));

        // Blank and whitespace-only messages are dropped.
        let html = post_message(port, "   ").await?;
        assert!(!html.contains(r#"<p>   </p>"#));
        assert!(html.contains("Anyone up for revision?"));

        Ok(())
    }

    #[tokio::test]
    async fn test_leave_shuts_down() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = config(port);
        spawn(async move { start_chat_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        // Don't follow the redirect: the server stops accepting connections
        // once the shutdown signal fires.
        let client = reqwest::Client::builder().redirect(Policy::none()).build()?;
        let response = client
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("action", "Leave")])
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        Ok(())
    }
}
