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

mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use studpal_core::catalog::Catalog;
    use studpal_core::types::timestamp::Timestamp;
    use tokio::spawn;

    use crate::cmd::session::server::ServerConfig;
    use crate::cmd::session::server::SessionKind;
    use crate::cmd::session::server::start_server;
    use crate::error::Fallible;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    fn config(kind: SessionKind, port: u16) -> ServerConfig {
        ServerConfig {
            kind,
            title: None,
            host: TEST_HOST.to_string(),
            port,
            session_started_at: Timestamp::now(),
            item_limit: None,
            shuffle: false,
        }
    }

    async fn post_action(port: u16, action: &str) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("action", action)])
            .send()
            .await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }

    async fn post_answer(port: u16, option: usize) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("action", "Answer".to_string()), ("option", option.to_string())])
            .send()
            .await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }

    async fn post_item_action(port: u16, action: &str, item: &str) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("action", action), ("item", item)])
            .send()
            .await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }

    #[tokio::test]
    async fn test_unknown_deck() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let mut config = config(SessionKind::Study, port);
        config.title = Some("Alchemy".to_string());
        let result = start_server(config).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: no deck named 'Alchemy'");
        Ok(())
    }

    #[tokio::test]
    async fn test_item_limit_of_zero_is_rejected() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let mut config = config(SessionKind::Quiz, port);
        config.item_limit = Some(0);
        let result = start_server(config).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: cannot start a session with no items");
        Ok(())
    }

    #[tokio::test]
    async fn test_study_e2e() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = config(SessionKind::Study, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the not found endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // The first card of the default deck, front side up.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await?;
        assert!(html.contains("Biology Cell Structure"));
        assert!(html.contains("What is the function of the nucleus?"));
        assert!(html.contains("1 / 3"));
        assert!(!html.contains("controls and regulates cell activities"));

        // Flip the card.
        let html = post_action(port, "Flip").await?;
        assert!(html.contains("controls and regulates cell activities"));

        // Advance. The next card is face down.
        let html = post_action(port, "Next").await?;
        assert!(html.contains("What is the function of mitochondria?"));
        assert!(html.contains("2 / 3"));
        assert!(!html.contains("powerhouse"));

        // Go back, then forward again.
        let html = post_action(port, "Previous").await?;
        assert!(html.contains("1 / 3"));
        let html = post_action(port, "Next").await?;
        assert!(html.contains("2 / 3"));

        // The last card offers "Finish" instead of "Next".
        let html = post_action(port, "Next").await?;
        assert!(html.contains("3 / 3"));
        assert!(html.contains("Finish"));

        // Advancing past the last card completes the session.
        let html = post_action(port, "Next").await?;
        assert!(html.contains("Session Completed"));

        Ok(())
    }

    #[tokio::test]
    async fn test_quiz_e2e() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = config(SessionKind::Quiz, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        // The first question of the default subject, unanswered.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/")).await?;
        let html = response.text().await?;
        assert!(html.contains("What is the function of the cell membrane?"));
        assert!(!html.contains("Explanation"));

        // Answer correctly.
        let html = post_answer(port, 1).await?;
        assert!(html.contains("Correct!"));
        assert!(html.contains("Explanation"));
        assert!(html.contains("regulates what enters and exits the cell"));

        // Answer the second question incorrectly.
        post_action(port, "Next").await?;
        let html = post_answer(port, 0).await?;
        assert!(html.contains("Incorrect."));

        // Answer the third question correctly.
        post_action(port, "Next").await?;
        let html = post_answer(port, 1).await?;
        assert!(html.contains("Correct!"));

        // Finish; the tally counts the one wrong answer.
        let html = post_action(port, "Next").await?;
        assert!(html.contains("Session Completed"));
        assert!(html.contains("Score: 2 / 3 correct."));

        Ok(())
    }

    #[tokio::test]
    async fn test_first_answer_wins() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = config(SessionKind::Quiz, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        // Answer incorrectly, then try to re-answer correctly.
        let html = post_answer(port, 0).await?;
        assert!(html.contains("Incorrect."));
        let html = post_answer(port, 1).await?;
        assert!(html.contains("Incorrect."));
        assert!(html.contains(r#"value="0" class="option selected""#));

        Ok(())
    }

    #[tokio::test]
    async fn test_end_early() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = config(SessionKind::Study, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let html = post_action(port, "End").await?;
        assert!(html.contains("Session Completed"));

        Ok(())
    }

    /// Forms carry the hash of the item they were rendered for; a submission
    /// left over from before a navigation does not act on the new item.
    #[tokio::test]
    async fn test_stale_submission_is_ignored() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = config(SessionKind::Study, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let catalog = Catalog::seed()?;
        let first = catalog.deck(None)?.cards[0].hash().to_hex();

        // The rendered page addresses its forms to the first card.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/")).await?;
        let html = response.text().await?;
        assert!(html.contains(&first));

        // A submission addressed to the first card advances the session.
        let html = post_item_action(port, "Next", &first).await?;
        assert!(html.contains("2 / 3"));

        // The same form submitted again is stale and changes nothing.
        let html = post_item_action(port, "Next", &first).await?;
        assert!(html.contains("2 / 3"));

        Ok(())
    }

    /// A question revealed without a selected answer shows the explanation
    /// but no verdict.
    #[tokio::test]
    async fn test_reveal_without_answer_shows_no_outcome() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = config(SessionKind::Quiz, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let html = post_action(port, "Flip").await?;
        assert!(html.contains("Explanation"));
        assert!(!html.contains("Correct!"));
        assert!(!html.contains("Incorrect."));

        Ok(())
    }

    #[tokio::test]
    async fn test_answer_without_option_is_ignored() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = config(SessionKind::Quiz, port);
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let html = post_action(port, "Answer").await?;
        assert!(!html.contains("Explanation"));

        Ok(())
    }
}
