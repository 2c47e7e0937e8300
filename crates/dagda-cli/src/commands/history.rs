//! `history` sub-command: per-image analysis history.

use reqwest::Method;

use crate::cli::HistoryArgs;
use crate::client::{AppContext, CliResult};
use crate::output::print_json;

pub(crate) async fn handle_history(ctx: &AppContext, args: HistoryArgs) -> CliResult<()> {
    let HistoryArgs { docker_image, id } = args;
    let mut url = ctx.endpoint(&format!("/history/{docker_image}"))?;
    if let Some(report_id) = &id {
        url.query_pairs_mut().append_pair("id", report_id);
    }

    let body = ctx.send(Method::GET, url).await?;
    print_json(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use reqwest::Client;
    use serde_json::json;

    fn context_for(server: &MockServer) -> AppContext {
        AppContext {
            client: Client::new(),
            base_url: format!("{}/v1", server.base_url())
                .parse()
                .expect("valid URL"),
        }
    }

    #[tokio::test]
    async fn history_without_report_id_has_no_query() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v1/history/nginx");
            then.status(200).json_body(json!([{"id": "1"}, {"id": "2"}]));
        });

        let ctx = context_for(&server);
        handle_history(
            &ctx,
            HistoryArgs {
                docker_image: "nginx".to_string(),
                id: None,
            },
        )
        .await
        .expect("history should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn report_id_is_passed_as_query_parameter() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/history/nginx")
                .query_param("id", "42");
            then.status(200).json_body(json!({"id": "42"}));
        });

        let ctx = context_for(&server);
        handle_history(
            &ctx,
            HistoryArgs {
                docker_image: "nginx".to_string(),
                id: Some("42".to_string()),
            },
        )
        .await
        .expect("history should succeed");
        mock.assert();
    }
}
