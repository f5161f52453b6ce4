/// Fetches the first `count` stories concurrently, one task per rank.
///
/// Results land in the slot matching their rank, so the returned vec is
/// in rank order no matter which fetch finishes first. The first task
/// error fails the whole call; dropping the `JoinSet` on that early
/// return aborts the in-flight siblings.
pub(crate) async fn collect_top(
    client: &crate::hn_api::HnClient,
    ids: &[crate::hn_api::StoryId],
    count: usize,
) -> Result<Vec<crate::hn_api::Story>, crate::error::Error> {
    let count = count.min(ids.len());

    let mut join_set: tokio::task::JoinSet<
        Result<(usize, crate::hn_api::Story), crate::error::Error>,
    > = tokio::task::JoinSet::new();

    for (rank, &id) in ids[..count].iter().enumerate() {
        let client = client.clone();
        join_set.spawn(async move {
            let story = client.get_story(id).await?;
            tracing::debug!(rank, id, title = story.title, "Fetched story");
            Ok((rank, story))
        });
    }

    let mut slots: Vec<Option<crate::hn_api::Story>> = vec![None; count];

    while let Some(res) = join_set.join_next().await {
        let (rank, story) = res.expect("story task to not panic")?;
        slots[rank] = Some(story);
    }

    tracing::info!(num_stories = count, "Collected requested stories");

    Ok(slots
        .into_iter()
        .map(|slot| slot.expect("every rank to be filled exactly once"))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_story(server: &MockServer, id: u64, title: &str, delay_ms: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/item/{}.json", id)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": id, "title": title}))
                    .set_delay(std::time::Duration::from_millis(delay_ms)),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_rank_order_survives_reversed_completion_order() {
        let mock_server = MockServer::start().await;

        // Rank 1 answers slowest, rank 3 fastest.
        mount_story(&mock_server, 101, "first", 250).await;
        mount_story(&mock_server, 202, "second", 100).await;
        mount_story(&mock_server, 303, "third", 0).await;

        let client = crate::hn_api::HnClient::new(&mock_server.uri()).unwrap();
        let stories = collect_top(&client, &[101, 202, 303], 3).await.unwrap();

        let titles: Vec<&str> = stories.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_count_clamps_to_list_length() {
        let mock_server = MockServer::start().await;

        mount_story(&mock_server, 1, "a", 0).await;
        mount_story(&mock_server, 2, "b", 0).await;

        let client = crate::hn_api::HnClient::new(&mock_server.uri()).unwrap();
        let stories = collect_top(&client, &[1, 2], 10).await.unwrap();

        assert_eq!(stories.len(), 2);
    }

    #[tokio::test]
    async fn test_count_limits_fetches() {
        let mock_server = MockServer::start().await;

        mount_story(&mock_server, 1, "a", 0).await;
        mount_story(&mock_server, 2, "b", 0).await;

        let client = crate::hn_api::HnClient::new(&mock_server.uri()).unwrap();
        let stories = collect_top(&client, &[1, 2, 3, 4, 5], 2).await.unwrap();

        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].title, "a");
        assert_eq!(stories[1].title, "b");
    }

    #[tokio::test]
    async fn test_zero_count_issues_no_fetches() {
        let mock_server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = crate::hn_api::HnClient::new(&mock_server.uri()).unwrap();
        let stories = collect_top(&client, &[1, 2, 3], 0).await.unwrap();

        assert!(stories.is_empty());
    }

    #[tokio::test]
    async fn test_single_failing_fetch_fails_the_collection() {
        let mock_server = MockServer::start().await;

        mount_story(&mock_server, 1, "a", 0).await;
        Mock::given(method("GET"))
            .and(path("/item/2.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        mount_story(&mock_server, 3, "c", 0).await;

        let client = crate::hn_api::HnClient::new(&mock_server.uri()).unwrap();
        let err = collect_top(&client, &[1, 2, 3], 3).await.unwrap_err();

        assert!(matches!(err, crate::error::Error::Transport(_)));
    }
}
