use crate::config::Config;
use lambda_http::http::StatusCode;
use lambda_http::{tracing, Error, IntoResponse, Request, RequestExt};
use shared::analytics::create_statistics;
use shared::core::LinkStore;
use shared::utils::{not_implemented_response, redirect_response, text_response};

/// Fallback target when no short code is given or the code is unknown.
pub(crate) const URL_REDIRECT: &str = "https://tecnomadas.com";

pub(crate) struct HandlerDeps<S: LinkStore> {
    pub link_store: S,
    pub config: Config,
}

pub(crate) async fn function_handler<S: LinkStore>(
    deps: &HandlerDeps<S>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    if deps.config.uri_mongodb().is_none() {
        return not_implemented_response();
    }

    let short_url = event
        .path_parameters_ref()
        .and_then(|params| params.first("shortUrl"))
        .unwrap_or("");

    if short_url.is_empty() {
        return redirect_response(URL_REDIRECT);
    }

    match deps.link_store.find_page(short_url).await {
        Err(e) => {
            tracing::error!("Failed to look up short url: {:?}", e);
            text_response(&StatusCode::UNPROCESSABLE_ENTITY, &e)
        }
        Ok(None) => redirect_response(URL_REDIRECT),
        Ok(Some(page)) => {
            let visit = create_statistics(event.headers(), short_url);
            // The visit is stored before the redirect is issued; a failed
            // insert means no redirect.
            if let Err(e) = deps.link_store.record_visit(visit).await {
                tracing::error!("Failed to record visit: {:?}", e);
                return text_response(&StatusCode::UNPROCESSABLE_ENTITY, &e);
            }
            redirect_response(&page.long_url)
        }
    }
}
