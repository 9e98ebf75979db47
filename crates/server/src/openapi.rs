use metadata::{Platform, VideoMetadata};
use utoipa::OpenApi;

use crate::models::{MetadataRequest, MetadataResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vidmeta API",
        version = "1.0.0"
    ),
    tags(
        (name = "metadata", description = "Video metadata endpoints")
    ),
    components(schemas(
        MetadataRequest,
        MetadataResponse,
        Platform,
        VideoMetadata
    ))
)]
pub struct ApiDoc;
