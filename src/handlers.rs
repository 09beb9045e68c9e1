use actix_web::{get, post, web, HttpRequest, HttpResponse};
use forms::{Errors, Form, Values};
use serde::Serialize;

#[derive(Serialize)]
struct SignUpResponse<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a Errors>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    newsletter: bool,
}

#[get("/")]
async fn index() -> &'static str {
    "Hello, formcheck!"
}

#[post("/signup")]
async fn sign_up(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let mut form = Form::new(Values::parse(&body));
    form.required(&["name", "email", "password"]);
    form.min_length("password", 8);
    form.is_email("email");

    if !form.valid() {
        tracing::warn!(errors = %form.errors, "signup rejected");
        return HttpResponse::UnprocessableEntity().json(SignUpResponse {
            valid: false,
            errors: Some(&form.errors),
            newsletter: false,
        });
    }

    let newsletter = form.has("newsletter", &req);
    tracing::info!(newsletter, "signup accepted");
    HttpResponse::Ok().json(SignUpResponse {
        valid: true,
        errors: None,
        newsletter,
    })
}

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(sign_up);
}
