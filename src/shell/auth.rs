use crate::shell::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;

/// The user the request acts for, read from the configured header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let user_id = parts
            .headers
            .get(state.config.auth.user_header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match user_id {
            Some(user_id) => {
                let user = CurrentUser {
                    user_id: user_id.to_string(),
                };
                parts.extensions.insert(user.clone());
                Ok(user)
            }
            None => {
                tracing::warn!(uri = %parts.uri, "request without an authenticated user");
                Err((StatusCode::UNAUTHORIZED, "Unauthenticated."))
            }
        }
    }
}

#[cfg(test)]
mod current_user_tests {
    use super::*;
    use crate::shell::config::AppConfig;
    use axum::http::Request;
    use rstest::rstest;

    async fn extract(config: AppConfig, header: Option<(&str, &str)>) -> Result<CurrentUser, StatusCode> {
        let mut builder = Request::get("/employee/time");
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        let state = AppState::in_memory(config);
        CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .map_err(|(status, _)| status)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_the_user_from_the_header() {
        let user = extract(AppConfig::default(), Some(("x-user-id", " user-1 "))).await;
        assert_eq!(
            user,
            Ok(CurrentUser {
                user_id: "user-1".into()
            })
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(("x-user-id", "   ")))]
    #[case(Some(("x-other", "user-1")))]
    #[tokio::test]
    async fn it_should_reject_a_missing_user(#[case] header: Option<(&str, &str)>) {
        let user = extract(AppConfig::default(), header).await;
        assert_eq!(user, Err(StatusCode::UNAUTHORIZED));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_use_the_configured_header() {
        let mut config = AppConfig::default();
        config.auth.user_header = "x-remote-user".into();
        let user = extract(config, Some(("x-remote-user", "user-2"))).await;
        assert_eq!(user.map(|u| u.user_id), Ok("user-2".to_string()));
    }
}
