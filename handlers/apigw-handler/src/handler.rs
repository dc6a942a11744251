use std::sync::Arc;

use lambda_runtime::LambdaEvent;
use media_ingest_sdk::prelude::*;
use media_ingest_sdk::record::peek_id;
use media_ingest_sdk::response::SUCCESS_MESSAGE;

use crate::config::AppConfig;

/// Writes one media record per request.
///
/// With a JSON body, the record is built from its `id`, `year` and `title`
/// members. Without a body (or with an empty one) a fixed fallback record is
/// written under a fresh id. Every failure is logged and answered with the
/// same opaque 500.
///
/// Example requests:
/// ```text
/// curl -X POST https://<api>/ -d '{"id": "m-1", "year": 2014, "title": "Her"}'
/// curl -X POST https://<api>/
/// ```
pub struct MediaHandler<S> {
    config: Arc<AppConfig>,
    store: S,
}

impl<S: RecordStore> MediaHandler<S> {
    pub fn new(config: Arc<AppConfig>, store: S) -> Self {
        Self { config, store }
    }

    /// Handle one request. Never fails; errors become a 500 response.
    pub async fn handle(&self, req: &ApiGatewayProxyRequest, ctx: &Context) -> Response {
        tracing::info!(
            request_id = %ctx.request_id,
            source_ip = %req.source_ip(),
            table_name = %self.config.table_name,
            "Processing request"
        );

        match self.process(req, ctx).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    error = %err,
                    error_kind = err.kind(),
                    status_code = err.status_code(),
                    "Error processing request"
                );
                err.to_response()
            }
        }
    }

    async fn process(
        &self,
        req: &ApiGatewayProxyRequest,
        ctx: &Context,
    ) -> Result<Response, HandlerError> {
        let table = self.config.table_name.as_str();

        match req.body_text()? {
            Some(body) => {
                let payload: JsonValue = serde_json::from_str(&body)?;
                tracing::info!(
                    request_id = %ctx.request_id,
                    item_id = peek_id(&payload).as_deref(),
                    "Received payload"
                );

                let record = MediaRecord::from_json(&payload)?;
                self.store.put_record(table, &record).await?;
                tracing::info!(
                    request_id = %ctx.request_id,
                    item_id = %record.id,
                    "Data inserted successfully"
                );
            }
            None => {
                tracing::info!(
                    request_id = %ctx.request_id,
                    "Received request without payload, using default data"
                );

                let record = MediaRecord::fallback();
                self.store.put_record(table, &record).await?;
                tracing::info!(
                    request_id = %ctx.request_id,
                    item_id = %record.id,
                    "Default data inserted successfully"
                );
            }
        }

        Ok(Response::ok(json!({ "message": SUCCESS_MESSAGE })))
    }
}

/// Runtime entry point: adapts a function invocation to [`MediaHandler::handle`]
pub async fn function_handler<S: RecordStore>(
    handler: &MediaHandler<S>,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, lambda_runtime::Error> {
    let (request, context) = event.into_parts();
    let ctx = Context::new(context.request_id);
    Ok(handler.handle(&request, &ctx).await.into())
}
