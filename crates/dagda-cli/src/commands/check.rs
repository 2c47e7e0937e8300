//! `check` sub-command: static analysis of an image or container.

use crate::cli::CheckArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::output::print_json;

/// Scan target resolved from the check options. An image name takes
/// precedence when both are given; supplying neither is rejected before any
/// request is built.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CheckTarget {
    Image(String),
    Container(String),
}

impl CheckTarget {
    pub(crate) fn from_args(args: CheckArgs) -> CliResult<Self> {
        if let Some(image) = args.docker_image {
            return Ok(Self::Image(image));
        }
        if let Some(container) = args.container_id {
            return Ok(Self::Container(container));
        }
        Err(CliError::validation(
            "one of -i/--docker_image or -c/--container_id is required",
        ))
    }
}

pub(crate) async fn handle_check(ctx: &AppContext, args: CheckArgs) -> CliResult<()> {
    let body = match CheckTarget::from_args(args)? {
        CheckTarget::Image(image) => ctx.post(&format!("/check/images/{image}")).await?,
        CheckTarget::Container(id) => ctx.post(&format!("/check/containers/{id}")).await?,
    };
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

    #[test]
    fn image_wins_when_both_targets_are_given() {
        let target = CheckTarget::from_args(CheckArgs {
            docker_image: Some("nginx".to_string()),
            container_id: Some("abc123".to_string()),
        })
        .expect("a target is given");
        assert_eq!(target, CheckTarget::Image("nginx".to_string()));
    }

    #[test]
    fn missing_target_is_a_validation_error() {
        let err = CheckTarget::from_args(CheckArgs::default()).expect_err("no target given");
        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn container_id_falls_through_to_container_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/v1/check/containers/abc123");
            then.status(202).json_body(json!({"id": "abc123"}));
        });

        let ctx = context_for(&server);
        handle_check(
            &ctx,
            CheckArgs {
                docker_image: None,
                container_id: Some("abc123".to_string()),
            },
        )
        .await
        .expect("container check should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn image_name_posts_to_image_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/v1/check/images/jboss/wildfly");
            then.status(202).json_body(json!({"image_name": "jboss/wildfly"}));
        });

        let ctx = context_for(&server);
        handle_check(
            &ctx,
            CheckArgs {
                docker_image: Some("jboss/wildfly".to_string()),
                container_id: None,
            },
        )
        .await
        .expect("image check should succeed");
        mock.assert();
    }
}
