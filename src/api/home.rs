use actix_web::{HttpResponse, Responder};

// Landing page embedded at compile time; there is no asset directory to
// serve at runtime.
const INDEX_HTML: &str = include_str!("../../views/index.html");

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
