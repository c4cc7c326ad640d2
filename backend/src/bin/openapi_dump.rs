//! Print the OpenAPI document as JSON.

use company_service::doc::ApiDoc;
use utoipa::OpenApi;

fn main() {
    println!("{}", ApiDoc::openapi().to_json().unwrap());
}
